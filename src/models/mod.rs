//! Records and DTOs for the courses API
//!
//! Stored records live in `course`; `requests`/`responses` define the
//! serialized HTTP bodies that are not plain records.

pub mod course;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use course::{Course, CourseId, NewCourse, Student};
pub use requests::{CourseRequest, StudentRequest, COURSE_INVALID_MESSAGE, STUDENT_INVALID_MESSAGE};
pub use responses::{ErrorResponse, HealthResponse};
