//! API Routes
//!
//! Configures the Axum router with all courses endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_student, create_course, delete_course, get_course, health_handler, list_courses,
    list_students, update_course, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/courses` - List courses
/// - `POST /api/courses` - Create a course
/// - `GET /api/courses/:id` - Get a course
/// - `PUT /api/courses/:id` - Replace a course
/// - `DELETE /api/courses/:id` - Delete a course
/// - `GET /api/courses/:id/students` - List a course's students
/// - `POST /api/courses/:id/students` - Enroll a student
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin, method and header, with credentials. The
///   request's values are mirrored back since `*` is not allowed alongside
///   credentials.
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/api/courses", get(list_courses).post(create_course))
        .route(
            "/api/courses/:id",
            get(get_course).put(update_course).delete(delete_course),
        )
        .route(
            "/api/courses/:id/students",
            get(list_students).post(add_student),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
