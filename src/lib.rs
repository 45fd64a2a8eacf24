//! Courses API - A small in-memory REST service
//!
//! Courses and their enrolled students, served over HTTP with create, read,
//! update and delete operations.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::CourseError;
pub use store::CourseRepository;
