//! Example courses loaded at startup.

use chrono::NaiveDate;

use crate::models::{Course, Student};

/// The two example courses the server starts with.
pub fn seed_courses() -> Vec<Course> {
    let start = NaiveDate::from_ymd_opt(2015, 8, 17).unwrap_or_default();
    let end = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap_or_default();

    vec![
        Course {
            id: 1,
            name: "Web Services".to_string(),
            template_id: "T-514-VEFT".to_string(),
            start_date: start,
            end_date: end,
            students: vec![Student::new("1234567890", "Jón Freysteinn Jónsson")],
        },
        Course {
            id: 2,
            name: "Compilers".to_string(),
            template_id: "T-603-THYD".to_string(),
            start_date: start,
            end_date: end,
            students: vec![Student::new("0987654321", "Sverrir Páll Sverrisson")],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_courses() {
        let courses = seed_courses();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].id, 1);
        assert_eq!(courses[0].template_id, "T-514-VEFT");
        assert_eq!(courses[1].id, 2);
        assert_eq!(courses[1].name, "Compilers");
        assert_eq!(courses[1].start_date.to_string(), "2015-08-17");
        assert_eq!(courses[1].end_date.to_string(), "2016-01-01");
        assert!(courses.iter().all(|c| c.students.len() == 1));
    }
}
