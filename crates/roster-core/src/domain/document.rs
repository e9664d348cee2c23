//! The stored user document and its write-side shapes.

use super::value_objects::{Email, Gender, Role};
use crate::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A user document as the store returns it.
///
/// Only the store-maintained fields (`id`, timestamps, the soft-delete
/// marker) are guaranteed present; everything else is whatever the document
/// actually holds, so read projections must check for the fields they need.
/// The password hash is never serialized outward.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    /// Unique identifier, assigned by the store on insert.
    pub id: UserId,

    /// Unique email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,

    /// Argon2 password hash. Stored, never re-exposed.
    #[serde(skip_serializing, default)]
    pub password: Option<String>,

    /// User's first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// User's last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Date of birth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,

    /// Gender, defaulted to "not specified" on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    /// Roles held by the user, defaulted to `["user"]` on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Role>>,

    /// Creation timestamp, maintained by the store.
    pub created_at: DateTime<Utc>,

    /// Last-update timestamp, maintained by the store.
    pub updated_at: DateTime<Utc>,

    /// Soft-delete flag; deleted documents are excluded from reads.
    #[serde(default)]
    pub deleted: bool,

    /// When the document was soft-deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl UserDocument {
    /// Materializes a stored document from a normalized insert, with
    /// store-assigned identity and timestamps.
    #[must_use]
    pub fn from_new(new: NewUserDocument, now: DateTime<Utc>) -> Self {
        Self {
            id: UserId::new(),
            email: Some(new.email),
            password: Some(new.password),
            first_name: Some(new.first_name),
            last_name: Some(new.last_name),
            date_of_birth: new.date_of_birth,
            gender: Some(new.gender),
            roles: Some(new.roles),
            created_at: now,
            updated_at: now,
            deleted: false,
            deleted_at: None,
        }
    }

    /// Applies a patch in place, bumping `updated_at`. Fields absent from
    /// the patch are left untouched.
    pub fn apply_patch(&mut self, patch: UserPatch, now: DateTime<Utc>) {
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(password) = patch.password {
            self.password = Some(password);
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = Some(first_name);
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = Some(last_name);
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.date_of_birth = Some(date_of_birth);
        }
        if let Some(gender) = patch.gender {
            self.gender = Some(gender);
        }
        if let Some(roles) = patch.roles {
            self.roles = Some(roles);
        }
        self.updated_at = now;
    }

    /// Marks the document soft-deleted.
    pub fn mark_deleted(&mut self, now: DateTime<Utc>) {
        self.deleted = true;
        self.deleted_at = Some(now);
        self.updated_at = now;
    }
}

/// A normalized document ready for insertion, produced by the create
/// transform. All mandatory fields are guaranteed present and the password
/// is already hashed.
#[derive(Debug, Clone)]
pub struct NewUserDocument {
    pub email: Email,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
    pub roles: Vec<Role>,
}

/// A normalized partial update, produced by the update transform. Only the
/// fields present in the original input are set.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub email: Option<Email>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub roles: Option<Vec<Role>>,
}

impl UserPatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.date_of_birth.is_none()
            && self.gender.is_none()
            && self.roles.is_none()
    }
}
