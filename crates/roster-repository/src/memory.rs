//! In-memory store backend.

use crate::store::{UserQuery, UserStore};
use async_trait::async_trait;
use chrono::Utc;
use roster_core::{
    NewUserDocument, Page, PageRequest, RosterError, RosterResult, UserDocument, UserId, UserPatch,
};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// An in-process [`UserStore`] holding documents in a map.
///
/// Documents are ordered by id; time-ordered UUIDs make that insertion
/// order, which keeps pagination deterministic. Soft-deleted documents stay
/// in the map but are invisible to every find variant.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    documents: RwLock<BTreeMap<UserId, UserDocument>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_one(&self, query: &UserQuery) -> RosterResult<Option<UserDocument>> {
        let documents = self.documents.read().await;
        Ok(documents
            .values()
            .find(|doc| !doc.deleted && query.matches(doc))
            .cloned())
    }

    async fn find_page(
        &self,
        query: &UserQuery,
        page: PageRequest,
    ) -> RosterResult<Page<UserDocument>> {
        let documents = self.documents.read().await;
        let matching: Vec<&UserDocument> = documents
            .values()
            .filter(|doc| !doc.deleted && query.matches(doc))
            .collect();

        let total = matching.len();
        let start = page.offset().min(total);
        let end = (start + page.limit()).min(total);
        let items = matching[start..end].iter().map(|doc| (*doc).clone()).collect();

        Ok(Page::new(items, page.page, page.size, total as u64))
    }

    async fn insert(&self, document: NewUserDocument) -> RosterResult<UserDocument> {
        let mut documents = self.documents.write().await;

        // Unique-email constraint, matching what a database index enforces.
        let duplicate = documents.values().any(|existing| {
            !existing.deleted
                && existing
                    .email
                    .as_ref()
                    .is_some_and(|stored| stored == &document.email)
        });
        if duplicate {
            return Err(RosterError::OperationFailed(format!(
                "A user with email \"{}\" already exists.",
                document.email
            )));
        }

        let stored = UserDocument::from_new(document, Utc::now());
        documents.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update_one(
        &self,
        query: &UserQuery,
        patch: UserPatch,
    ) -> RosterResult<Option<UserDocument>> {
        let mut documents = self.documents.write().await;
        let id = documents
            .values()
            .find(|doc| !doc.deleted && query.matches(doc))
            .map(|doc| doc.id);

        let Some(id) = id else {
            return Ok(None);
        };

        let document = documents
            .get_mut(&id)
            .ok_or_else(|| RosterError::OperationFailed("document vanished mid-update".into()))?;
        document.apply_patch(patch, Utc::now());
        Ok(Some(document.clone()))
    }

    async fn delete_one(&self, query: &UserQuery) -> RosterResult<Option<UserDocument>> {
        let mut documents = self.documents.write().await;
        let id = documents
            .values()
            .find(|doc| !doc.deleted && query.matches(doc))
            .map(|doc| doc.id);

        let Some(id) = id else {
            return Ok(None);
        };

        let document = documents
            .get_mut(&id)
            .ok_or_else(|| RosterError::OperationFailed("document vanished mid-delete".into()))?;
        document.mark_deleted(Utc::now());
        Ok(Some(document.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{Email, Gender, Role};

    fn new_document(email: &str, first: &str) -> NewUserDocument {
        NewUserDocument {
            email: Email::new_unchecked(email),
            password: "hash".to_string(),
            first_name: first.to_string(),
            last_name: "Tester".to_string(),
            date_of_birth: None,
            gender: Gender::NotSpecified,
            roles: vec![Role::User],
        }
    }

    #[tokio::test]
    async fn insert_then_find_by_id_and_email() {
        let store = MemoryUserStore::new();
        let stored = store
            .insert(new_document("a@example.com", "Ada"))
            .await
            .unwrap();

        let by_id = store.find_one(&UserQuery::by_id(stored.id)).await.unwrap();
        assert_eq!(by_id.unwrap().id, stored.id);

        let by_email = store
            .find_one(&UserQuery::by_email("a@example.com"))
            .await
            .unwrap();
        assert_eq!(by_email.unwrap().id, stored.id);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_store_failure() {
        let store = MemoryUserStore::new();
        store
            .insert(new_document("a@example.com", "Ada"))
            .await
            .unwrap();

        let err = store
            .insert(new_document("a@example.com", "Alan"))
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::OperationFailed(_)));
    }

    #[tokio::test]
    async fn soft_delete_hides_from_all_reads() {
        let store = MemoryUserStore::new();
        let stored = store
            .insert(new_document("a@example.com", "Ada"))
            .await
            .unwrap();

        let removed = store
            .delete_one(&UserQuery::by_id(stored.id))
            .await
            .unwrap()
            .unwrap();
        assert!(removed.deleted);
        assert!(removed.deleted_at.is_some());

        assert!(store
            .find_one(&UserQuery::by_id(stored.id))
            .await
            .unwrap()
            .is_none());
        let page = store
            .find_page(&UserQuery::all(), PageRequest::first())
            .await
            .unwrap();
        assert!(page.is_empty());

        // Deleting again finds nothing.
        assert!(store
            .delete_one(&UserQuery::by_id(stored.id))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn update_one_applies_patch_and_bumps_timestamp() {
        let store = MemoryUserStore::new();
        let stored = store
            .insert(new_document("a@example.com", "Ada"))
            .await
            .unwrap();

        let patch = UserPatch {
            first_name: Some("Adaline".to_string()),
            ..UserPatch::default()
        };
        let updated = store
            .update_one(&UserQuery::by_id(stored.id), patch)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.first_name.as_deref(), Some("Adaline"));
        assert!(updated.updated_at >= stored.updated_at);
    }

    #[tokio::test]
    async fn update_missing_document_returns_none() {
        let store = MemoryUserStore::new();
        let result = store
            .update_one(&UserQuery::by_id(UserId::new()), UserPatch::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn pagination_metadata_reflects_the_full_set() {
        let store = MemoryUserStore::new();
        for i in 0..5 {
            store
                .insert(new_document(&format!("u{i}@example.com"), "User"))
                .await
                .unwrap();
        }

        let page = store
            .find_page(&UserQuery::all(), PageRequest::new(1, 2))
            .await
            .unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.total_count, 5);
        assert_eq!(page.total_pages, 3);

        let past_the_end = store
            .find_page(&UserQuery::all(), PageRequest::new(9, 2))
            .await
            .unwrap();
        assert!(past_the_end.is_empty());
        assert_eq!(past_the_end.total_count, 5);
    }
}
