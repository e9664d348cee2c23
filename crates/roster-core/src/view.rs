//! Read-side projections of a stored user document.
//!
//! Each view is a pure projection exposing a safe subset of the document.
//! The email address and password hash never appear in any view; fields the
//! document does not carry are omitted from the JSON rather than emitted as
//! null placeholders.

use crate::{Gender, Role, RosterError, RosterResult, UserDocument, UserId};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The requested view shape for a read-path transformation.
///
/// Dispatch is an exhaustive match, so an unknown format cannot be
/// requested in the first place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewFormat {
    /// id + full name, for list rows.
    ListItem,
    /// id + name + roles, for session/cookie payloads.
    Brief,
    /// The canonical outward record, minus sensitive fields.
    Lean,
    /// Alias of [`ViewFormat::Lean`].
    Full,
}

/// A projected user, tagged by the format that produced it.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum UserView {
    ListItem(ListItemView),
    Brief(BriefView),
    Lean(LeanView),
}

impl UserView {
    /// Projects a stored document into the requested view.
    ///
    /// Fails with `IncompleteRecord` when the document lacks a first or
    /// last name; every read format requires both.
    pub fn project(document: &UserDocument, format: ViewFormat) -> RosterResult<Self> {
        match format {
            ViewFormat::ListItem => ListItemView::project(document).map(Self::ListItem),
            ViewFormat::Brief => BriefView::project(document).map(Self::Brief),
            ViewFormat::Lean | ViewFormat::Full => LeanView::project(document).map(Self::Lean),
        }
    }
}

/// List-row projection: identity and display name only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ListItemView {
    pub id: UserId,
    pub full_name: String,
}

impl ListItemView {
    /// Projects a stored document into a list item.
    pub fn project(document: &UserDocument) -> RosterResult<Self> {
        let (first_name, last_name) = require_names(document)?;
        Ok(Self {
            id: document.id,
            full_name: format!("{} {}", first_name, last_name),
        })
    }
}

/// Brief projection: what a session payload needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BriefView {
    pub id: UserId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Role>>,
}

impl BriefView {
    /// Projects a stored document into its brief form.
    pub fn project(document: &UserDocument) -> RosterResult<Self> {
        let (first_name, last_name) = require_names(document)?;
        Ok(Self {
            id: document.id,
            name: format!("{} {}", first_name, last_name),
            roles: document.roles.clone(),
        })
    }
}

/// The canonical outward record: everything except email and password.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LeanView {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    /// Age in whole years, derived from the date of birth when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Role>>,
}

impl LeanView {
    /// Projects a stored document into its lean form.
    pub fn project(document: &UserDocument) -> RosterResult<Self> {
        let (first_name, last_name) = require_names(document)?;
        Ok(Self {
            id: document.id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            date_of_birth: document.date_of_birth,
            age: document
                .date_of_birth
                .and_then(|dob| Utc::now().date_naive().years_since(dob)),
            gender: document.gender,
            roles: document.roles.clone(),
        })
    }
}

/// Returns the first and last name, or the `IncompleteRecord` failure every
/// read format shares. An empty string counts as missing.
fn require_names(document: &UserDocument) -> RosterResult<(&str, &str)> {
    let first_name = document
        .first_name
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(RosterError::incomplete("firstName"))?;
    let last_name = document
        .last_name
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(RosterError::incomplete("lastName"))?;
    Ok((first_name, last_name))
}
