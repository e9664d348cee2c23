//! Repository facade: the uniform absence policy on top of DAO results.
//!
//! [`Repository`] is generic over the [`Dao`] contract; [`UserRepository`]
//! composes one over the concrete [`UserDao`] and adds identity-oriented
//! lookups. Error kinds and messages propagate unchanged from the layers
//! below.

use crate::dao::{Dao, UserDao};
use crate::store::UserQuery;
use roster_core::{
    CreateUser, LeanView, Page, PageRequest, Role, RosterError, RosterResult, UpdateUser,
    UserDocument, UserId,
};
use std::sync::Arc;
use tracing::debug;

/// Generic CRUD facade over a data-access object.
pub struct Repository<D: Dao> {
    dao: Arc<D>,
}

impl<D: Dao> Repository<D> {
    /// Creates a new repository over the given DAO.
    #[must_use]
    pub fn new(dao: Arc<D>) -> Self {
        Self { dao }
    }

    /// Paginated find. The DAO already rejects empty pages; the count check
    /// here is a second guard on the same condition.
    pub async fn get_all(
        &self,
        query: &D::Query,
        page: PageRequest,
    ) -> RosterResult<Page<D::Entity>> {
        let results = self.dao.get_all(query, page).await?;

        if results.is_empty() {
            return Err(RosterError::not_found("Not found."));
        }

        Ok(results)
    }

    /// Single find; absence becomes `NotFound`.
    pub async fn get_by(&self, query: &D::Query) -> RosterResult<D::Entity> {
        self.dao
            .get_one(query)
            .await?
            .ok_or_else(|| RosterError::not_found("Not found."))
    }

    /// Create; a missing result becomes `NotCreated`.
    pub async fn create(&self, document: D::Create) -> RosterResult<D::Entity> {
        self.dao
            .create(document)
            .await?
            .ok_or(RosterError::NotCreated)
    }

    /// Update; a missing result becomes `NotUpdated`.
    pub async fn update(&self, query: &D::Query, document: D::Update) -> RosterResult<D::Entity> {
        self.dao
            .update(query, document)
            .await?
            .ok_or(RosterError::NotUpdated)
    }

    /// Delete; a missing result becomes `NotDeleted`.
    pub async fn delete(&self, query: &D::Query) -> RosterResult<D::Record> {
        self.dao
            .delete(query)
            .await?
            .ok_or(RosterError::NotDeleted)
    }
}

/// The user repository: the generic facade plus identity-oriented lookups.
///
/// Composition rather than inheritance: this wraps a [`Repository`] over
/// [`UserDao`] and exposes both the generic operations and the
/// user-specific ones.
pub struct UserRepository {
    inner: Repository<UserDao>,
}

impl UserRepository {
    /// Creates a user repository over the given DAO.
    #[must_use]
    pub fn new(dao: UserDao) -> Self {
        Self {
            inner: Repository::new(Arc::new(dao)),
        }
    }

    /// Paginated listing of all users.
    pub async fn get_all(&self, page: PageRequest) -> RosterResult<Page<LeanView>> {
        debug!(page = page.page, "Repository: get_all");
        self.inner.get_all(&UserQuery::all(), page).await
    }

    /// Single find by example.
    pub async fn get_by(&self, query: &UserQuery) -> RosterResult<LeanView> {
        debug!("Repository: get_by");
        self.inner.get_by(query).await
    }

    /// Creates a user from raw input.
    pub async fn create(&self, document: CreateUser) -> RosterResult<LeanView> {
        debug!("Repository: create");
        self.inner.create(document).await
    }

    /// Updates the user matching the query from raw input.
    pub async fn update(&self, query: &UserQuery, document: UpdateUser) -> RosterResult<LeanView> {
        debug!("Repository: update");
        self.inner.update(query, document).await
    }

    /// Soft-deletes the user matching the query, returning the raw record.
    pub async fn delete(&self, query: &UserQuery) -> RosterResult<UserDocument> {
        debug!("Repository: delete");
        self.inner.delete(query).await
    }

    /// Finds a user by id.
    pub async fn get_by_id(&self, id: UserId) -> RosterResult<LeanView> {
        debug!(%id, "Repository: get_by_id");
        match self.inner.get_by(&UserQuery::by_id(id)).await {
            Err(RosterError::NotFound(_)) => Err(RosterError::not_found(format!(
                "User with id \"{id}\" not found."
            ))),
            other => other,
        }
    }

    /// Finds a user by email.
    pub async fn get_by_email(&self, email: &str) -> RosterResult<LeanView> {
        debug!(email, "Repository: get_by_email");
        match self.inner.get_by(&UserQuery::by_email(email)).await {
            Err(RosterError::NotFound(_)) => Err(RosterError::not_found(format!(
                "User with email \"{email}\" not found."
            ))),
            other => other,
        }
    }

    /// Returns the roles of a user, or an empty set when the record holds
    /// none. The user itself must exist.
    pub async fn get_roles(&self, id: UserId) -> RosterResult<Vec<Role>> {
        debug!(%id, "Repository: get_roles");
        let user = self.get_by_id(id).await?;
        Ok(user.roles.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Stub DAO whose every operation fails the way a broken store would.
    struct FailingDao;

    #[async_trait]
    impl Dao for FailingDao {
        type Query = UserQuery;
        type Create = CreateUser;
        type Update = UpdateUser;
        type Entity = LeanView;
        type Record = UserDocument;

        async fn get_all(
            &self,
            _query: &UserQuery,
            _page: PageRequest,
        ) -> RosterResult<Page<LeanView>> {
            Err(RosterError::OperationFailed("store offline".into()))
        }

        async fn get_one(&self, _query: &UserQuery) -> RosterResult<Option<LeanView>> {
            Err(RosterError::OperationFailed("store offline".into()))
        }

        async fn create(&self, _document: CreateUser) -> RosterResult<Option<LeanView>> {
            Err(RosterError::OperationFailed("store offline".into()))
        }

        async fn update(
            &self,
            _query: &UserQuery,
            _document: UpdateUser,
        ) -> RosterResult<Option<LeanView>> {
            Err(RosterError::OperationFailed("store offline".into()))
        }

        async fn delete(&self, _query: &UserQuery) -> RosterResult<Option<UserDocument>> {
            Err(RosterError::OperationFailed("store offline".into()))
        }
    }

    /// Stub DAO that finds nothing but never errors.
    struct EmptyDao;

    #[async_trait]
    impl Dao for EmptyDao {
        type Query = UserQuery;
        type Create = CreateUser;
        type Update = UpdateUser;
        type Entity = LeanView;
        type Record = UserDocument;

        async fn get_all(
            &self,
            _query: &UserQuery,
            page: PageRequest,
        ) -> RosterResult<Page<LeanView>> {
            // A DAO is expected to reject empty pages itself; this stub
            // deliberately does not, to exercise the repository's own guard.
            Ok(Page::empty(page.page, page.size))
        }

        async fn get_one(&self, _query: &UserQuery) -> RosterResult<Option<LeanView>> {
            Ok(None)
        }

        async fn create(&self, _document: CreateUser) -> RosterResult<Option<LeanView>> {
            Ok(None)
        }

        async fn update(
            &self,
            _query: &UserQuery,
            _document: UpdateUser,
        ) -> RosterResult<Option<LeanView>> {
            Ok(None)
        }

        async fn delete(&self, _query: &UserQuery) -> RosterResult<Option<UserDocument>> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn store_failures_keep_their_kind_and_message() {
        let repo = Repository::new(Arc::new(FailingDao));
        let err = repo.get_by(&UserQuery::all()).await.unwrap_err();
        assert!(matches!(err, RosterError::OperationFailed(_)));
        assert!(err.to_string().contains("store offline"));
    }

    #[tokio::test]
    async fn repository_guards_empty_pages_even_when_the_dao_does_not() {
        let repo = Repository::new(Arc::new(EmptyDao));
        let err = repo
            .get_all(&UserQuery::all(), PageRequest::first())
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::NotFound(_)));
    }

    #[tokio::test]
    async fn absence_maps_to_the_verb_specific_kind() {
        let repo = Repository::new(Arc::new(EmptyDao));

        assert!(matches!(
            repo.get_by(&UserQuery::all()).await.unwrap_err(),
            RosterError::NotFound(_)
        ));
        assert!(matches!(
            repo.create(CreateUser::default()).await.unwrap_err(),
            RosterError::NotCreated
        ));
        assert!(matches!(
            repo.update(&UserQuery::all(), UpdateUser::default())
                .await
                .unwrap_err(),
            RosterError::NotUpdated
        ));
        assert!(matches!(
            repo.delete(&UserQuery::all()).await.unwrap_err(),
            RosterError::NotDeleted
        ));
    }
}
