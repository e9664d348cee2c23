//! The abstract document-store boundary.
//!
//! The core never talks to a concrete database; it sees a store as this
//! trait. Backends soft-delete by default: `delete_one` flags the document
//! rather than erasing it, and every find variant excludes flagged
//! documents.

use async_trait::async_trait;
use roster_core::{
    NewUserDocument, Page, PageRequest, RosterResult, UserDocument, UserId, UserPatch,
};

/// Query-by-example over user documents. Empty criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    /// Match on identity.
    pub id: Option<UserId>,
    /// Match on email address (stored lowercased).
    pub email: Option<String>,
}

impl UserQuery {
    /// A query matching every (non-deleted) document.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// A query matching a single document by id.
    #[must_use]
    pub fn by_id(id: UserId) -> Self {
        Self {
            id: Some(id),
            email: None,
        }
    }

    /// A query matching a single document by email.
    #[must_use]
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            id: None,
            email: Some(email.into().to_lowercase()),
        }
    }

    /// Whether the given document matches every criterion of this query.
    #[must_use]
    pub fn matches(&self, document: &UserDocument) -> bool {
        if let Some(id) = self.id {
            if document.id != id {
                return false;
            }
        }
        if let Some(email) = &self.email {
            match &document.email {
                Some(stored) if stored.as_str() == email => {}
                _ => return false,
            }
        }
        true
    }
}

/// Low-level user document store.
///
/// Each implementation targets a single backend; the in-process
/// [`MemoryUserStore`] ships with this crate and a driver-backed store
/// slots behind the same trait.
///
/// [`MemoryUserStore`]: crate::memory::MemoryUserStore
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Finds the first document matching the query, excluding soft-deleted
    /// ones.
    async fn find_one(&self, query: &UserQuery) -> RosterResult<Option<UserDocument>>;

    /// Finds a page of documents matching the query, excluding soft-deleted
    /// ones. The page metadata reflects the full matching set.
    async fn find_page(
        &self,
        query: &UserQuery,
        page: PageRequest,
    ) -> RosterResult<Page<UserDocument>>;

    /// Inserts a normalized document, assigning identity and timestamps.
    async fn insert(&self, document: NewUserDocument) -> RosterResult<UserDocument>;

    /// Applies a patch to the first match and returns the post-update
    /// document, or `None` when nothing matched.
    async fn update_one(
        &self,
        query: &UserQuery,
        patch: UserPatch,
    ) -> RosterResult<Option<UserDocument>>;

    /// Soft-deletes the first match and returns the removed document, or
    /// `None` when nothing matched.
    async fn delete_one(&self, query: &UserQuery) -> RosterResult<Option<UserDocument>>;
}
