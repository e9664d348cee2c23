//! Write-side transformations: untrusted input to normalized documents.
//!
//! The create transform turns a raw request body into a [`NewUserDocument`]
//! ready for insertion; the update transform turns one into a [`UserPatch`].
//! Both are deterministic apart from the salt drawn while hashing the
//! password, which is the only side effect.

use crate::{
    Email, Gender, NewUserDocument, PasswordHasher, Role, RosterError, RosterResult, UserPatch,
};
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

/// Raw input for creating a user. Every field is optional at the type level
/// so presence is checked by the transform, not by deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub roles: Option<Vec<String>>,
}

impl CreateUser {
    /// Normalizes the input into a document ready for insertion.
    ///
    /// Requires `firstName`, `lastName`, `email`, and `password`; hashes the
    /// password, defaults gender and roles, parses the date of birth
    /// (dropping it when unparseable), and silently filters role names that
    /// are not part of the role set. A role list left empty by that filter
    /// falls back to the default role.
    pub fn into_document(self, hasher: &PasswordHasher) -> RosterResult<NewUserDocument> {
        let first_name = require(self.first_name, "firstName")?;
        let last_name = require(self.last_name, "lastName")?;
        let email = require(self.email, "email")?;
        let password = require(self.password, "password")?;

        let email = Email::new(email).map_err(|e| RosterError::validation(e.to_string()))?;
        let password = hasher.hash(&password)?;

        let gender = match self.gender.as_deref() {
            None => Gender::default(),
            Some(s) => Gender::parse(s).ok_or_else(|| {
                RosterError::validation(format!("\"{}\" is not a valid user gender value.", s))
            })?,
        };

        let date_of_birth = self.date_of_birth.as_deref().and_then(parse_date);

        let roles = match self.roles {
            None => vec![Role::default()],
            Some(names) => {
                let mut roles: Vec<Role> =
                    names.iter().filter_map(|name| Role::parse(name)).collect();
                roles.dedup();
                if roles.is_empty() {
                    roles.push(Role::default());
                }
                roles
            }
        };

        Ok(NewUserDocument {
            email,
            password,
            first_name,
            last_name,
            date_of_birth,
            gender,
            roles,
        })
    }
}

/// Raw input for updating a user. Roles are enum-typed at the serde
/// boundary, so unknown role names are rejected before the transform runs;
/// the transform passes them through as given.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub roles: Option<Vec<Role>>,
}

impl UpdateUser {
    /// Normalizes the input into a patch containing only the provided
    /// fields.
    ///
    /// Fails with `NoFieldsProvided` unless at least one updatable field is
    /// present. Each field is normalized independently: the password is
    /// hashed, the date of birth is parsed or omitted, the gender is
    /// validated against the enum or omitted.
    pub fn into_patch(self, hasher: &PasswordHasher) -> RosterResult<UserPatch> {
        let email = match present(self.email) {
            None => None,
            Some(raw) => {
                Some(Email::new(raw).map_err(|e| RosterError::validation(e.to_string()))?)
            }
        };

        let password = match present(self.password) {
            None => None,
            Some(raw) => Some(hasher.hash(&raw)?),
        };

        let patch = UserPatch {
            email,
            password,
            first_name: present(self.first_name),
            last_name: present(self.last_name),
            date_of_birth: self.date_of_birth.as_deref().and_then(parse_date),
            gender: self.gender.as_deref().and_then(Gender::parse),
            roles: self.roles,
        };

        if patch.is_empty() {
            return Err(RosterError::NoFieldsProvided);
        }

        Ok(patch)
    }
}

/// Presence check shared by the create transform. An empty or
/// whitespace-only string counts as absent.
fn require(value: Option<String>, field: &'static str) -> RosterResult<String> {
    present(value).ok_or(RosterError::incomplete(field))
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parses a date of birth from its wire form. Accepts a plain calendar date
/// or an RFC 3339 timestamp; anything else is treated as absent.
fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}
