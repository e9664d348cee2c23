//! # Roster REST
//!
//! REST API layer using Axum. Exposes the user CRUD endpoints, the health
//! probe, and Swagger documentation, and maps the typed error taxonomy to
//! HTTP status codes.

pub mod controllers;
pub mod extractors;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
