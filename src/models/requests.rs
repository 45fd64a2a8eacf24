//! Request DTOs for the courses API
//!
//! Every field is optional on the wire and dates arrive as plain strings, so a
//! missing, blank or unparseable field surfaces as a validation failure naming
//! that field, not as a JSON parse error.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::error::{CourseError, Result};
use crate::models::{NewCourse, Student};

/// Message attached to every rejected course payload
pub const COURSE_INVALID_MESSAGE: &str = "Course data not valid";

/// Message attached to every rejected student payload
pub const STUDENT_INVALID_MESSAGE: &str = "Student data not valid";

/// Request body for POST /api/courses and PUT /api/courses/:id
///
/// A client-sent `id` is not part of the body; ids come from the server or the path.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    pub name: Option<String>,
    pub template_id: Option<String>,
    /// `YYYY-MM-DD`, or a date-time whose time part is dropped
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub students: Option<Vec<StudentRequest>>,
}

impl CourseRequest {
    /// Returns the wire names of all violated fields, empty when valid.
    ///
    /// Nested students are checked too and reported as `students[i].field`.
    pub fn validate(&self) -> Vec<String> {
        self.clone().check().err().unwrap_or_default()
    }

    /// Validates and converts into a [`NewCourse`].
    ///
    /// Absent students become an empty list.
    pub fn into_new_course(self) -> Result<NewCourse> {
        self.check()
            .map_err(|fields| CourseError::invalid(COURSE_INVALID_MESSAGE, fields))
    }

    fn check(self) -> std::result::Result<NewCourse, Vec<String>> {
        let mut violations = Vec::new();

        let name = required_text(self.name, "name", &mut violations);
        let template_id = required_text(self.template_id, "templateId", &mut violations);
        let start_date = required_date(self.start_date, "startDate", &mut violations);
        let end_date = required_date(self.end_date, "endDate", &mut violations);

        let mut students = Vec::new();
        for (index, student) in self.students.unwrap_or_default().into_iter().enumerate() {
            match student.check() {
                Ok(student) => students.push(student),
                Err(fields) => violations.extend(
                    fields
                        .into_iter()
                        .map(|field| format!("students[{}].{}", index, field)),
                ),
            }
        }

        match (name, template_id, start_date, end_date) {
            (Some(name), Some(template_id), Some(start_date), Some(end_date))
                if violations.is_empty() =>
            {
                Ok(NewCourse {
                    name,
                    template_id,
                    start_date,
                    end_date,
                    students,
                })
            }
            _ => Err(violations),
        }
    }
}

/// Request body for POST /api/courses/:id/students
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequest {
    pub ssn: Option<String>,
    pub name: Option<String>,
}

impl StudentRequest {
    /// Returns the wire names of all violated fields, empty when valid.
    pub fn validate(&self) -> Vec<String> {
        self.clone().check().err().unwrap_or_default()
    }

    /// Validates and converts into a [`Student`].
    pub fn into_new_student(self) -> Result<Student> {
        self.check()
            .map_err(|fields| CourseError::invalid(STUDENT_INVALID_MESSAGE, fields))
    }

    fn check(self) -> std::result::Result<Student, Vec<String>> {
        let mut violations = Vec::new();
        let ssn = required_text(self.ssn, "ssn", &mut violations);
        let name = required_text(self.name, "name", &mut violations);

        match (ssn, name) {
            (Some(ssn), Some(name)) => Ok(Student { ssn, name }),
            _ => Err(violations),
        }
    }
}

/// Keeps a non-blank value, otherwise records `field` as violated.
fn required_text(
    value: Option<String>,
    field: &str,
    violations: &mut Vec<String>,
) -> Option<String> {
    let value = value.filter(|v| !v.trim().is_empty());
    if value.is_none() {
        violations.push(field.to_string());
    }
    value
}

/// Parses a present date, otherwise records `field` as violated.
fn required_date(
    value: Option<String>,
    field: &str,
    violations: &mut Vec<String>,
) -> Option<NaiveDate> {
    let date = value.as_deref().and_then(parse_date);
    if date.is_none() {
        violations.push(field.to_string());
    }
    date
}

/// Accepts `YYYY-MM-DD` as well as date-time forms, keeping only the date.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_course_json() -> &'static str {
        r#"{"name":"X","templateId":"T-1","startDate":"2020-01-01","endDate":"2020-06-01"}"#
    }

    #[test]
    fn test_course_request_deserialize() {
        let req: CourseRequest = serde_json::from_str(valid_course_json()).unwrap();
        assert_eq!(req.name.as_deref(), Some("X"));
        assert_eq!(req.template_id.as_deref(), Some("T-1"));
        assert!(req.students.is_none());
        assert!(req.validate().is_empty());

        let course = req.into_new_course().unwrap();
        assert_eq!(course.start_date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }

    #[test]
    fn test_course_request_accepts_datetime() {
        let json = r#"{"name":"X","templateId":"T-1","startDate":"2015-08-17T00:00:00","endDate":"2016-01-01T12:30:00Z"}"#;
        let req: CourseRequest = serde_json::from_str(json).unwrap();

        let course = req.into_new_course().unwrap();
        assert_eq!(course.start_date, NaiveDate::from_ymd_opt(2015, 8, 17).unwrap());
        assert_eq!(course.end_date, NaiveDate::from_ymd_opt(2016, 1, 1).unwrap());
    }

    #[test]
    fn test_unparseable_date_is_a_violation() {
        let json = r#"{"name":"X","templateId":"T-1","startDate":"soon","endDate":"2020-06-01"}"#;
        let req: CourseRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.validate(), vec!["startDate"]);
    }

    #[test]
    fn test_blank_date_is_a_violation() {
        let json = r#"{"name":"X","templateId":"T-1","startDate":"","endDate":"   "}"#;
        let req: CourseRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.validate(), vec!["startDate", "endDate"]);

        match req.into_new_course() {
            Err(CourseError::InvalidInput { message, fields }) => {
                assert_eq!(message, COURSE_INVALID_MESSAGE);
                assert_eq!(fields, vec!["startDate", "endDate"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_reports_every_missing_field() {
        let req: CourseRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(
            req.validate(),
            vec!["name", "templateId", "startDate", "endDate"]
        );
    }

    #[test]
    fn test_validate_blank_strings() {
        let json = r#"{"name":"  ","templateId":"","startDate":"2020-01-01","endDate":null}"#;
        let req: CourseRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.validate(), vec!["name", "templateId", "endDate"]);
    }

    #[test]
    fn test_client_id_is_ignored() {
        let json = r#"{"id":7,"name":"X","templateId":"T-1","startDate":"2020-01-01","endDate":"2020-06-01"}"#;
        let req: CourseRequest = serde_json::from_str(json).unwrap();
        assert!(req.into_new_course().is_ok());
    }

    #[test]
    fn test_validate_nested_students() {
        let json = r#"{"name":"X","templateId":"T-1","startDate":"2020-01-01","endDate":"2020-06-01",
            "students":[{"ssn":"1","name":"A"},{"name":"B"}]}"#;
        let req: CourseRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.validate(), vec!["students[1].ssn"]);

        let err = req.into_new_course().unwrap_err();
        assert!(matches!(err, CourseError::InvalidInput { .. }));
    }

    #[test]
    fn test_into_new_course_keeps_valid_students() {
        let json = r#"{"name":"X","templateId":"T-1","startDate":"2020-01-01","endDate":"2020-06-01",
            "students":[{"ssn":"1","name":"A"}]}"#;
        let req: CourseRequest = serde_json::from_str(json).unwrap();

        let course = req.into_new_course().unwrap();
        assert_eq!(course.students, vec![Student::new("1", "A")]);
    }

    #[test]
    fn test_into_new_course_defaults_students() {
        let req: CourseRequest = serde_json::from_str(valid_course_json()).unwrap();
        let course = req.into_new_course().unwrap();
        assert_eq!(course.name, "X");
        assert!(course.students.is_empty());
    }

    #[test]
    fn test_student_request_validate() {
        let req = StudentRequest {
            ssn: Some("0987654321".to_string()),
            name: None,
        };
        assert_eq!(req.validate(), vec!["name"]);

        let req = StudentRequest {
            ssn: Some("0987654321".to_string()),
            name: Some("Sverrir".to_string()),
        };
        assert_eq!(req.into_new_student().unwrap(), Student::new("0987654321", "Sverrir"));
    }

    #[test]
    fn test_student_request_empty_body() {
        let req: StudentRequest = serde_json::from_str("{}").unwrap();
        match req.into_new_student() {
            Err(CourseError::InvalidInput { message, fields }) => {
                assert_eq!(message, STUDENT_INVALID_MESSAGE);
                assert_eq!(fields, vec!["ssn", "name"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
