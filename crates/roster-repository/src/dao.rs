//! Data-access layer: bridges the store boundary and the transformation
//! layer.
//!
//! One operation per CRUD verb plus paginated listing. Reads come back as
//! lean projections; deletes return the raw removed document. Store
//! failures are re-signaled as `OperationFailed` carrying the original
//! message, with no retries.

use crate::store::{UserQuery, UserStore};
use async_trait::async_trait;
use roster_core::{
    CreateUser, LeanView, Page, PageRequest, PasswordHasher, RosterError, RosterResult,
    UpdateUser, UserDocument,
};
use std::sync::Arc;
use tracing::debug;

/// Generic data-access object contract.
///
/// The repository facade is generic over this trait, so its absence policy
/// can be tested against stub DAOs.
#[async_trait]
pub trait Dao: Send + Sync {
    /// Query-by-example type.
    type Query: Send + Sync;
    /// Raw create input.
    type Create: Send + 'static;
    /// Raw update input.
    type Update: Send + 'static;
    /// Projected read shape.
    type Entity: Send;
    /// Raw record shape returned by deletes.
    type Record: Send;

    /// Paginated find; fails with `NotFound` on an empty page.
    async fn get_all(
        &self,
        query: &Self::Query,
        page: PageRequest,
    ) -> RosterResult<Page<Self::Entity>>;

    /// Single find; absence surfaces as `Ok(None)`.
    async fn get_one(&self, query: &Self::Query) -> RosterResult<Option<Self::Entity>>;

    /// Normalizes and inserts; returns the projection of the new record.
    async fn create(&self, document: Self::Create) -> RosterResult<Option<Self::Entity>>;

    /// Normalizes and updates in place; returns the projection of the
    /// post-update record.
    async fn update(
        &self,
        query: &Self::Query,
        document: Self::Update,
    ) -> RosterResult<Option<Self::Entity>>;

    /// Removes (soft-deletes) the match; returns the raw removed record.
    async fn delete(&self, query: &Self::Query) -> RosterResult<Option<Self::Record>>;
}

/// The user DAO: a [`UserStore`] plus the password hasher the write-side
/// transforms need.
pub struct UserDao {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl UserDao {
    /// Creates a new DAO over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }
}

#[async_trait]
impl Dao for UserDao {
    type Query = UserQuery;
    type Create = CreateUser;
    type Update = UpdateUser;
    type Entity = LeanView;
    type Record = UserDocument;

    async fn get_all(
        &self,
        query: &UserQuery,
        page: PageRequest,
    ) -> RosterResult<Page<LeanView>> {
        debug!(page = page.page, size = page.size, "DAO: get_all");

        let users = self
            .store
            .find_page(query, page)
            .await
            .map_err(store_failed)?;

        if users.is_empty() {
            return Err(RosterError::not_found("No users were found."));
        }

        // Pagination metadata passes through untouched.
        users.try_map(|doc| LeanView::project(&doc))
    }

    async fn get_one(&self, query: &UserQuery) -> RosterResult<Option<LeanView>> {
        debug!("DAO: get_one");

        // Absence surfaces as not-found upstream, never as a projection
        // failure on a record that does not exist.
        match self.store.find_one(query).await.map_err(store_failed)? {
            None => Ok(None),
            Some(document) => LeanView::project(&document).map(Some),
        }
    }

    async fn create(&self, document: CreateUser) -> RosterResult<Option<LeanView>> {
        debug!("DAO: create");

        let normalized = document.into_document(&self.hasher)?;
        let stored = self.store.insert(normalized).await.map_err(store_failed)?;
        LeanView::project(&stored).map(Some)
    }

    async fn update(
        &self,
        query: &UserQuery,
        document: UpdateUser,
    ) -> RosterResult<Option<LeanView>> {
        debug!("DAO: update");

        let patch = document.into_patch(&self.hasher)?;
        match self
            .store
            .update_one(query, patch)
            .await
            .map_err(store_failed)?
        {
            None => Ok(None),
            Some(updated) => LeanView::project(&updated).map(Some),
        }
    }

    async fn delete(&self, query: &UserQuery) -> RosterResult<Option<UserDocument>> {
        debug!("DAO: delete");

        self.store.delete_one(query).await.map_err(store_failed)
    }
}

/// Re-signals a store-side failure as `OperationFailed`, keeping the
/// original message.
fn store_failed(err: RosterError) -> RosterError {
    match err {
        RosterError::OperationFailed(_) => err,
        other => RosterError::OperationFailed(other.to_string()),
    }
}
