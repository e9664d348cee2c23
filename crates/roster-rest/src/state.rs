//! Application state for Axum handlers.

use roster_repository::UserRepository;
use std::sync::Arc;

/// Shared application state: the repository handle, constructed once at
/// startup and passed to the router explicitly.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserRepository>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(users: Arc<UserRepository>) -> Self {
        Self { users }
    }
}
