//! API Module
//!
//! HTTP handlers and routing for the courses REST API.
//!
//! # Endpoints
//! - `GET|POST /api/courses` - List or create courses
//! - `GET|PUT|DELETE /api/courses/:id` - Read, replace or delete a course
//! - `GET|POST /api/courses/:id/students` - List or enroll students
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod links;
pub mod routes;

pub use handlers::*;
pub use links::{LinkBuilder, Route};
pub use routes::create_router;
