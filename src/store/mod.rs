//! Store Module
//!
//! In-memory course repository and its startup data.

mod repository;
mod seed;


// Re-export public types
pub use repository::CourseRepository;
pub use seed::seed_courses;
