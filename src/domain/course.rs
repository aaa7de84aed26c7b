use std::fmt;

use serde::Serialize;

use crate::domain::CourseId;

/// A single course in a catalog.
///
/// A course is immutable once constructed. Its prerequisites are stored in
/// the order they were encountered and are never checked against the rest of
/// the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    id: CourseId,
    title: String,
    prerequisites: Vec<CourseId>,
}

impl Course {
    /// Creates a new course.
    #[must_use]
    pub const fn new(id: CourseId, title: String, prerequisites: Vec<CourseId>) -> Self {
        Self {
            id,
            title,
            prerequisites,
        }
    }

    /// Returns the course identifier.
    #[must_use]
    pub const fn id(&self) -> &CourseId {
        &self.id
    }

    /// Returns the course title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the prerequisite identifiers, in source order.
    #[must_use]
    pub fn prerequisites(&self) -> &[CourseId] {
        &self.prerequisites
    }

    /// Returns a borrowed detail view of this course.
    #[must_use]
    pub fn detail(&self) -> CourseDetail<'_> {
        CourseDetail {
            id: &self.id,
            title: &self.title,
            prerequisites: &self.prerequisites,
        }
    }
}

/// A borrowed view of a course, used for display and serialization.
///
/// The [`fmt::Display`] implementation renders two lines:
///
/// ```text
/// CSCI300, Introduction to Algorithms
/// Prerequisites: CSCI200, MATH201
/// ```
///
/// When a course has no prerequisites the second line reads
/// `Prerequisites: None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CourseDetail<'a> {
    /// The course identifier.
    pub id: &'a CourseId,
    /// The course title.
    pub title: &'a str,
    /// Prerequisite identifiers, in source order.
    pub prerequisites: &'a [CourseId],
}

impl CourseDetail<'_> {
    /// Returns the prerequisite line without its label, e.g. `CSCI200,
    /// MATH201`, or `None` when there are no prerequisites.
    #[must_use]
    pub fn prerequisite_summary(&self) -> String {
        if self.prerequisites.is_empty() {
            return "None".to_string();
        }

        self.prerequisites
            .iter()
            .map(CourseId::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for CourseDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}, {}", self.id, self.title)?;
        write!(f, "Prerequisites: {}", self.prerequisite_summary())
    }
}
