//! Value objects for the user domain.

pub mod email;
pub mod gender;
pub mod role;

pub use email::{Email, EmailError};
pub use gender::Gender;
pub use role::Role;
