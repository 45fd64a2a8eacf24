//! Course and Student records
//!
//! The stored shapes, serialized with camelCase field names.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Server-assigned course identifier.
pub type CourseId = i64;

/// A person enrolled in a course.
///
/// Has no identity of its own; it only exists inside a course's student list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Social security number, e.g. "1234567890"
    pub ssn: String,
    /// Full name
    pub name: String,
}

impl Student {
    pub fn new(ssn: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ssn: ssn.into(),
            name: name.into(),
        }
    }
}

/// A scheduled offering of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    /// Display name, e.g. "Web Services"
    pub name: String,
    /// Catalog code, e.g. "T-514-VEFT"
    pub template_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Enrolled students in enrollment order
    #[serde(default)]
    pub students: Vec<Student>,
}

/// Validated input for creating or replacing a course.
///
/// Only produced by [`crate::models::CourseRequest::into_new_course`], so every
/// required field is present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub name: String,
    pub template_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub students: Vec<Student>,
}

impl NewCourse {
    /// Turns the validated input into a stored course with the given id.
    pub fn into_course(self, id: CourseId) -> Course {
        Course {
            id,
            name: self.name,
            template_id: self.template_id,
            start_date: self.start_date,
            end_date: self.end_date,
            students: self.students,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_serializes_camel_case() {
        let course = Course {
            id: 1,
            name: "Web Services".to_string(),
            template_id: "T-514-VEFT".to_string(),
            start_date: NaiveDate::from_ymd_opt(2015, 8, 17).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2016, 1, 1).unwrap(),
            students: vec![Student::new("1234567890", "Jón Freysteinn Jónsson")],
        };

        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(json["templateId"], "T-514-VEFT");
        assert_eq!(json["startDate"], "2015-08-17");
        assert_eq!(json["endDate"], "2016-01-01");
        assert_eq!(json["students"][0]["ssn"], "1234567890");
    }

    #[test]
    fn test_into_course_keeps_fields() {
        let new_course = NewCourse {
            name: "Compilers".to_string(),
            template_id: "T-603-THYD".to_string(),
            start_date: NaiveDate::from_ymd_opt(2015, 8, 17).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2016, 1, 1).unwrap(),
            students: Vec::new(),
        };

        let course = new_course.clone().into_course(9);
        assert_eq!(course.id, 9);
        assert_eq!(course.name, new_course.name);
        assert_eq!(course.template_id, new_course.template_id);
        assert!(course.students.is_empty());
    }
}
