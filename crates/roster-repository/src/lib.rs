//! # Roster Repository
//!
//! The persistence side of Roster: the abstract [`UserStore`] document-store
//! boundary, an in-memory store backend, the [`UserDao`] bridging the store
//! and the transformation layer, and the repository facade that applies the
//! uniform absence policy on top of DAO results.

pub mod dao;
pub mod memory;
pub mod repository;
pub mod store;

pub use dao::{Dao, UserDao};
pub use memory::MemoryUserStore;
pub use repository::{Repository, UserRepository};
pub use store::{UserQuery, UserStore};
