//! Domain model: the stored user document and its value objects.

pub mod document;
pub mod value_objects;

pub use document::*;
pub use value_objects::*;
