//! API Handlers
//!
//! HTTP request handlers for each courses endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header::LOCATION, HeaderName, StatusCode},
    Json,
};
use tracing::{debug, info, warn};

use crate::api::links::{LinkBuilder, Route};
use crate::config::Config;
use crate::error::{CourseError, Result};
use crate::models::{
    Course, CourseId, CourseRequest, HealthResponse, Student, StudentRequest,
    COURSE_INVALID_MESSAGE, STUDENT_INVALID_MESSAGE,
};
use crate::store::{seed_courses, CourseRepository};

/// Body plus a `Location` header.
pub type Located<T> = ([(HeaderName, String); 1], Json<T>);

/// 201 response with a `Location` header.
pub type Created<T> = (StatusCode, [(HeaderName, String); 1], Json<T>);

/// Application state shared across all handlers.
///
/// Every mutation holds the write lock for its whole lookup-then-write
/// sequence, so concurrent requests cannot interleave inside one.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe course repository
    pub repo: Arc<RwLock<CourseRepository>>,
    /// Builds `Location` header values
    pub links: LinkBuilder,
    /// Answer rejected creations with 412 instead of 400
    pub strict_validation: bool,
}

impl AppState {
    /// Creates a new AppState around the given repository.
    pub fn new(repo: CourseRepository) -> Self {
        Self {
            repo: Arc::new(RwLock::new(repo)),
            links: LinkBuilder::default(),
            strict_validation: false,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Seeds the example courses unless disabled.
    pub fn from_config(config: &Config) -> Self {
        let repo = if config.seed_data {
            CourseRepository::with_courses(seed_courses())
        } else {
            CourseRepository::new()
        };

        Self {
            links: LinkBuilder::new(config.public_base_url.clone()),
            strict_validation: config.strict_validation,
            ..Self::new(repo)
        }
    }

    /// Switches rejected creations to 412.
    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }

    fn location(&self, route: Route) -> [(HeaderName, String); 1] {
        [(LOCATION, self.links.location(route))]
    }

    /// Applies the configured status for rejected creations.
    fn creation_error(&self, err: CourseError) -> CourseError {
        if self.strict_validation {
            err.into_precondition_failed()
        } else {
            err
        }
    }
}

/// Parses the `:id` path segment; anything but an integer matches no course.
fn parse_course_id(raw: &str) -> Result<CourseId> {
    raw.trim()
        .parse()
        .map_err(|_| CourseError::UnknownId(raw.to_string()))
}

/// Unwraps a JSON body, turning absent or malformed payloads into `InvalidInput`.
fn require_body<T>(
    payload: std::result::Result<Json<T>, JsonRejection>,
    message: &str,
) -> Result<T> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        warn!("Rejected request body: {}", rejection.body_text());
        CourseError::invalid(message, Vec::new())
    })
}

/// Handler for GET /api/courses
pub async fn list_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    let repo = state.repo.read().await;
    debug!("Listing {} courses", repo.len());
    Json(repo.list().to_vec())
}

/// Handler for GET /api/courses/:id
pub async fn get_course(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Course>> {
    let id = parse_course_id(&raw_id)?;

    let repo = state.repo.read().await;
    let course = repo.get(id)?;

    Ok(Json(course.clone()))
}

/// Handler for POST /api/courses
///
/// Responds 201 with the stored course and a `Location` pointing at it.
pub async fn create_course(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CourseRequest>, JsonRejection>,
) -> Result<Created<Course>> {
    // Validate before taking the lock
    let data = require_body(payload, COURSE_INVALID_MESSAGE)
        .and_then(CourseRequest::into_new_course)
        .map_err(|e| {
            warn!("Rejected course creation: {}", e);
            state.creation_error(e)
        })?;

    let course = {
        let mut repo = state.repo.write().await;
        repo.create(data)
    };
    info!("Created course {} ({})", course.id, course.template_id);

    Ok((
        StatusCode::CREATED,
        state.location(Route::CourseById(course.id)),
        Json(course),
    ))
}

/// Handler for PUT /api/courses/:id
///
/// A missing course is reported before an invalid payload.
pub async fn update_course(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: std::result::Result<Json<CourseRequest>, JsonRejection>,
) -> Result<Located<Course>> {
    let id = parse_course_id(&raw_id)?;

    let mut repo = state.repo.write().await;
    repo.get(id)?;

    let data = require_body(payload, COURSE_INVALID_MESSAGE)
        .and_then(CourseRequest::into_new_course)
        .map_err(|e| {
            warn!("Rejected update of course {}: {}", id, e);
            e
        })?;

    let course = repo.update(id, data)?;
    drop(repo);
    info!("Updated course {}", id);

    Ok((state.location(Route::CourseById(id)), Json(course)))
}

/// Handler for DELETE /api/courses/:id
pub async fn delete_course(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_course_id(&raw_id)?;

    let removed = state.repo.write().await.delete(id)?;
    info!("Deleted course {} ({})", removed.id, removed.template_id);

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /api/courses/:id/students
pub async fn list_students(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Vec<Student>>> {
    let id = parse_course_id(&raw_id)?;

    let repo = state.repo.read().await;
    let students = repo.students(id)?;

    Ok(Json(students.to_vec()))
}

/// Handler for POST /api/courses/:id/students
///
/// A non-integer id is rejected first; otherwise the student is validated
/// before the course is looked up. Responds 201 with the course's full
/// student list.
pub async fn add_student(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: std::result::Result<Json<StudentRequest>, JsonRejection>,
) -> Result<Created<Vec<Student>>> {
    let id = parse_course_id(&raw_id)?;
    let student = require_body(payload, STUDENT_INVALID_MESSAGE)
        .and_then(StudentRequest::into_new_student)
        .map_err(|e| {
            warn!("Rejected student: {}", e);
            state.creation_error(e)
        })?;

    let students = state.repo.write().await.add_student(id, student)?;
    info!("Added student to course {} ({} enrolled)", id, students.len());

    Ok((
        StatusCode::CREATED,
        state.location(Route::StudentsInCourse(id)),
        Json(students),
    ))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let courses = state.repo.read().await.len();
    Json(HealthResponse::healthy(courses))
}
