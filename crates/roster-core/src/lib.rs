//! # Roster Core
//!
//! Core types for the Roster user service: the typed error taxonomy,
//! pagination, domain value objects, the stored-document shape, and the
//! transformation layer that maps documents to outward views and untrusted
//! input to normalized documents.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod password;
pub mod result;
pub mod transform;
pub mod view;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use password::PasswordHasher;
pub use result::*;
pub use transform::*;
pub use view::*;
