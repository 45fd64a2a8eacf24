//! Link Builder
//!
//! Maps named routes to paths for `Location` headers. Kept apart from the
//! repository, which only deals in ids.

use tracing::warn;
use url::Url;

use crate::models::CourseId;

/// Routes that responses link back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// GET /api/courses/:id
    CourseById(CourseId),
    /// GET /api/courses/:id/students
    StudentsInCourse(CourseId),
}

impl Route {
    /// Path of the route with its parameters filled in.
    pub fn path(&self) -> String {
        match self {
            Route::CourseById(id) => format!("/api/courses/{}", id),
            Route::StudentsInCourse(id) => format!("/api/courses/{}/students", id),
        }
    }
}

/// Builds `Location` values, optionally absolute.
#[derive(Debug, Clone, Default)]
pub struct LinkBuilder {
    /// Normalized base without trailing slash, e.g. `http://host:3000/prefix`
    base_url: Option<String>,
}

impl LinkBuilder {
    /// Creates a builder; a base that is not an http(s) URL is ignored.
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url.and_then(|raw| match normalize_base_url(&raw) {
            Ok(base) => Some(base),
            Err(reason) => {
                warn!("Ignoring public base URL {:?}: {}", raw, reason);
                None
            }
        });
        Self { base_url }
    }

    /// Location for the given route.
    pub fn location(&self, route: Route) -> String {
        match &self.base_url {
            Some(base) => format!("{}{}", base, route.path()),
            None => route.path(),
        }
    }
}

/// Parses the base as an http(s) URL and drops query, fragment and trailing slash.
fn normalize_base_url(raw: &str) -> std::result::Result<String, String> {
    let mut url = Url::parse(raw.trim()).map_err(|err| format!("invalid url: {}", err))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err("base url must use http or https scheme".to_string());
    }
    if url.cannot_be_a_base() {
        return Err("base url cannot be a base".to_string());
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::CourseById(3).path(), "/api/courses/3");
        assert_eq!(Route::StudentsInCourse(1).path(), "/api/courses/1/students");
    }

    #[test]
    fn test_location_relative_by_default() {
        let links = LinkBuilder::default();
        assert_eq!(links.location(Route::CourseById(1)), "/api/courses/1");
    }

    #[test]
    fn test_location_with_base_url() {
        let links = LinkBuilder::new(Some("http://localhost:3000/".to_string()));
        assert_eq!(
            links.location(Route::StudentsInCourse(2)),
            "http://localhost:3000/api/courses/2/students"
        );
    }

    #[test]
    fn test_base_url_keeps_path_prefix_and_drops_query() {
        let links = LinkBuilder::new(Some("https://example.com/school/?x=1#top".to_string()));
        assert_eq!(
            links.location(Route::CourseById(4)),
            "https://example.com/school/api/courses/4"
        );
    }

    #[test]
    fn test_non_url_base_is_dropped() {
        let links = LinkBuilder::new(Some("not a url".to_string()));
        assert_eq!(links.location(Route::CourseById(5)), "/api/courses/5");
    }

    #[test]
    fn test_non_http_base_is_dropped() {
        let links = LinkBuilder::new(Some("ftp://files.example.com".to_string()));
        assert_eq!(links.location(Route::CourseById(5)), "/api/courses/5");

        let links = LinkBuilder::new(Some("mailto:admin@example.com".to_string()));
        assert_eq!(links.location(Route::CourseById(5)), "/api/courses/5");
    }
}
