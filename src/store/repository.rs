//! Course Repository Module
//!
//! Ordered in-memory collection of courses with their nested students.

use crate::error::{CourseError, Result};
use crate::models::{Course, CourseId, NewCourse, Student};

// == Course Repository ==
/// In-memory store of courses.
///
/// Course ids are unique. Students only exist inside their course.
#[derive(Debug, Default, Clone)]
pub struct CourseRepository {
    /// Courses in insertion order
    courses: Vec<Course>,
}

impl CourseRepository {
    // == Constructors ==
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given courses.
    ///
    /// Later duplicates of an id are dropped so ids stay unique.
    pub fn with_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        let mut repo = Self::new();
        for course in courses {
            if !repo.contains(course.id) {
                repo.courses.push(course);
            }
        }
        repo
    }

    // == List ==
    /// Returns every course, students included.
    pub fn list(&self) -> &[Course] {
        &self.courses
    }

    // == Get ==
    /// Returns the course with the given id.
    pub fn get(&self, id: CourseId) -> Result<&Course> {
        self.courses
            .iter()
            .find(|c| c.id == id)
            .ok_or(CourseError::NotFound(id))
    }

    // == Next Id ==
    /// Id the next created course will receive: one past the highest id, or 1.
    pub fn next_id(&self) -> CourseId {
        self.courses.iter().map(|c| c.id).max().unwrap_or(0) + 1
    }

    // == Create ==
    /// Stores a new course under the next free id and returns it.
    pub fn create(&mut self, data: NewCourse) -> Course {
        let course = data.into_course(self.next_id());
        self.courses.push(course.clone());
        course
    }

    // == Update ==
    /// Replaces the course with the given id.
    ///
    /// The id is kept. An empty incoming student list keeps the stored
    /// students; a non-empty one replaces them.
    pub fn update(&mut self, id: CourseId, data: NewCourse) -> Result<Course> {
        let index = self.index_of(id)?;
        let stored = &mut self.courses[index];

        let students = if data.students.is_empty() {
            std::mem::take(&mut stored.students)
        } else {
            data.students
        };

        *stored = Course {
            id,
            name: data.name,
            template_id: data.template_id,
            start_date: data.start_date,
            end_date: data.end_date,
            students,
        };

        Ok(stored.clone())
    }

    // == Delete ==
    /// Removes the course with the given id and returns it.
    pub fn delete(&mut self, id: CourseId) -> Result<Course> {
        let index = self.index_of(id)?;
        Ok(self.courses.remove(index))
    }

    // == Students ==
    /// Returns the students enrolled in the given course.
    pub fn students(&self, id: CourseId) -> Result<&[Student]> {
        self.get(id).map(|c| c.students.as_slice())
    }

    // == Add Student ==
    /// Appends a student to the given course and returns the updated list.
    pub fn add_student(&mut self, id: CourseId, student: Student) -> Result<Vec<Student>> {
        let index = self.index_of(id)?;
        let students = &mut self.courses[index].students;
        students.push(student);
        Ok(students.clone())
    }

    // == Contains ==
    /// Returns true if a course with the given id exists.
    pub fn contains(&self, id: CourseId) -> bool {
        self.courses.iter().any(|c| c.id == id)
    }

    // == Length ==
    /// Returns the number of stored courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    // == Is Empty ==
    /// Returns true if no courses are stored.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    fn index_of(&self, id: CourseId) -> Result<usize> {
        self.courses
            .iter()
            .position(|c| c.id == id)
            .ok_or(CourseError::NotFound(id))
    }
}
