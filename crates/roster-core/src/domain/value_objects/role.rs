//! User role value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Roles a user can hold. A user always holds at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular user, the default role.
    #[default]
    User,
    /// Paying user.
    Premium,
    /// Account manager.
    Manager,
    /// Developer access.
    Developer,
    /// Tester access.
    Tester,
    /// Administrator with full access.
    Admin,
}

impl Role {
    /// Parses a role from its wire representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "user" => Some(Self::User),
            "premium" => Some(Self::Premium),
            "manager" => Some(Self::Manager),
            "developer" => Some(Self::Developer),
            "tester" => Some(Self::Tester),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Returns all available roles.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::User,
            Self::Premium,
            Self::Manager,
            Self::Developer,
            Self::Tester,
            Self::Admin,
        ]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Premium => write!(f, "premium"),
            Self::Manager => write!(f, "manager"),
            Self::Developer => write!(f, "developer"),
            Self::Tester => write!(f, "tester"),
            Self::Admin => write!(f, "admin"),
        }
    }
}
