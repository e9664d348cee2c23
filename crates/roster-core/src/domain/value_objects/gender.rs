//! User gender value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User gender as recorded on the stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Gender {
    /// Female.
    #[serde(rename = "female")]
    Female,
    /// Male.
    #[serde(rename = "male")]
    Male,
    /// Any other self-description.
    #[serde(rename = "other")]
    Other,
    /// The default when a user declines to answer.
    #[default]
    #[serde(rename = "not specified")]
    NotSpecified,
}

impl Gender {
    /// Parses a gender from its wire representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "female" => Some(Self::Female),
            "male" => Some(Self::Male),
            "other" => Some(Self::Other),
            "not specified" => Some(Self::NotSpecified),
            _ => None,
        }
    }

    /// Returns all valid gender values.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Female, Self::Male, Self::Other, Self::NotSpecified]
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Female => write!(f, "female"),
            Self::Male => write!(f, "male"),
            Self::Other => write!(f, "other"),
            Self::NotSpecified => write!(f, "not specified"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_every_variant() {
        for gender in Gender::all() {
            assert_eq!(Gender::parse(&gender.to_string()), Some(gender));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Gender::parse("Female"), Some(Gender::Female));
        assert_eq!(Gender::parse("NOT SPECIFIED"), Some(Gender::NotSpecified));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(Gender::parse("unknown"), None);
        assert_eq!(Gender::parse(""), None);
    }

    #[test]
    fn default_is_not_specified() {
        assert_eq!(Gender::default(), Gender::NotSpecified);
    }

    #[test]
    fn serde_uses_spaced_rename() {
        let json = serde_json::to_string(&Gender::NotSpecified).unwrap();
        assert_eq!(json, "\"not specified\"");
        let back: Gender = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Gender::NotSpecified);
    }
}
