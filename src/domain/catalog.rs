//! An in-memory catalog of courses
//!
//! The [`Catalog`] knows nothing about files or the terminal. It keeps courses
//! in insertion order until asked to sort, and answers lookups by identifier.

use std::collections::HashMap;

use tracing::instrument;

use crate::domain::{Course, CourseDetail, CourseId};

/// An ordered, in-memory collection of courses.
///
/// Duplicate identifiers are permitted. Lookups return the first course with a
/// matching identifier in the current order, and because [`Catalog::sort`] is
/// stable the first-inserted duplicate keeps winning after any number of
/// sorts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// The courses, stored contiguously in current order.
    courses: Vec<Course>,

    /// Position of the first course with each identifier in `courses`.
    index: HashMap<CourseId, usize>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves capacity for at least `additional` more courses.
    pub fn reserve(&mut self, additional: usize) {
        self.courses.reserve(additional);
        self.index.reserve(additional);
    }

    /// Appends a course to the end of the catalog.
    pub fn append(&mut self, course: Course) {
        let position = self.courses.len();
        self.index.entry(course.id().clone()).or_insert(position);
        self.courses.push(course);
    }

    /// Sorts the catalog in place by course identifier.
    ///
    /// The sort is stable, so courses sharing an identifier keep their
    /// relative order. Sorting an already sorted catalog leaves it unchanged.
    #[instrument(level = "debug", skip(self), fields(len = self.courses.len()))]
    pub fn sort(&mut self) {
        if self.is_sorted() {
            return;
        }

        self.courses.sort_by(|a, b| a.id().cmp(b.id()));
        self.rebuild_index();
    }

    /// Returns `true` if the courses are in non-decreasing identifier order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.courses.is_sorted_by(|a, b| a.id() <= b.id())
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (position, course) in self.courses.iter().enumerate() {
            self.index.entry(course.id().clone()).or_insert(position);
        }
    }

    /// Finds the first course in current order with the given identifier.
    #[must_use]
    pub fn find(&self, id: &CourseId) -> Option<&Course> {
        self.index
            .get(id)
            .and_then(|&position| self.courses.get(position))
    }

    /// Finds a course by a raw, unnormalized identifier.
    ///
    /// The query is trimmed and uppercased before lookup. Blank queries never
    /// match.
    #[must_use]
    pub fn find_str(&self, query: &str) -> Option<&Course> {
        CourseId::new(query.trim())
            .ok()
            .and_then(|id| self.find(&id))
    }

    /// Returns the detail view of the course with the given identifier.
    #[must_use]
    pub fn detail(&self, id: &CourseId) -> Option<CourseDetail<'_>> {
        self.find(id).map(Course::detail)
    }

    /// Iterates over `(identifier, title)` pairs in current order.
    pub fn listing(&self) -> impl Iterator<Item = (&CourseId, &str)> + '_ {
        self.courses.iter().map(|course| (course.id(), course.title()))
    }

    /// Iterates over the courses in current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }

    /// Returns `true` if no courses have been loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Returns the number of courses, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }
}

impl Extend<Course> for Catalog {
    fn extend<T: IntoIterator<Item = Course>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for course in iter {
            self.append(course);
        }
    }
}

impl FromIterator<Course> for Catalog {
    fn from_iter<T: IntoIterator<Item = Course>>(iter: T) -> Self {
        let mut catalog = Self::new();
        catalog.extend(iter);
        catalog
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, title: &str) -> Course {
        Course::new(CourseId::new(id).unwrap(), title.to_string(), Vec::new())
    }

    fn ids(catalog: &Catalog) -> Vec<&str> {
        catalog.listing().map(|(id, _)| id.as_str()).collect()
    }

    #[test]
    fn new_catalog_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn append_preserves_insertion_order() {
        let catalog: Catalog = [
            course("MATH201", "Discrete Mathematics"),
            course("CSCI100", "Introduction to Computer Science"),
            course("CSCI300", "Introduction to Algorithms"),
        ]
        .into_iter()
        .collect();

        assert!(!catalog.is_empty());
        assert_eq!(ids(&catalog), ["MATH201", "CSCI100", "CSCI300"]);
    }

    #[test]
    fn sort_orders_by_identifier() {
        let mut catalog: Catalog = [
            course("CSCI300", "Introduction to Algorithms"),
            course("MATH201", "Discrete Mathematics"),
            course("CSCI100", "Introduction to Computer Science"),
            course("CSCI101", "Introduction to Programming in C++"),
        ]
        .into_iter()
        .collect();

        catalog.sort();

        assert!(catalog.is_sorted());
        assert_eq!(ids(&catalog), ["CSCI100", "CSCI101", "CSCI300", "MATH201"]);
    }

    #[test]
    fn sort_keeps_every_course() {
        let originals = vec![
            course("B", "two"),
            course("A", "one"),
            course("C", "three"),
            course("A", "one again"),
        ];
        let mut catalog: Catalog = originals.clone().into_iter().collect();

        catalog.sort();

        let mut sorted: Vec<_> = catalog.iter().cloned().collect();
        let mut expected = originals;
        sorted.sort_by(|a, b| (a.id(), a.title()).cmp(&(b.id(), b.title())));
        expected.sort_by(|a, b| (a.id(), a.title()).cmp(&(b.id(), b.title())));
        assert_eq!(sorted, expected);
    }

    #[test]
    fn sort_is_idempotent() {
        let mut catalog: Catalog = [course("Z1", "z"), course("A1", "a"), course("M1", "m")]
            .into_iter()
            .collect();

        catalog.sort();
        let once = catalog.clone();
        catalog.sort();

        assert_eq!(catalog, once);
    }

    #[test]
    fn sort_on_empty_and_single_is_noop() {
        let mut empty = Catalog::new();
        empty.sort();
        assert!(empty.is_empty());

        let mut single: Catalog = std::iter::once(course("CS101", "Intro")).collect();
        single.sort();
        assert_eq!(ids(&single), ["CS101"]);
    }

    #[test]
    fn sort_is_lexicographic() {
        let mut catalog: Catalog = [course("CS9", "nine"), course("CS10", "ten")]
            .into_iter()
            .collect();

        catalog.sort();

        assert_eq!(ids(&catalog), ["CS10", "CS9"]);
    }

    #[test]
    fn find_missing_returns_none() {
        let query = CourseId::new("CS999").unwrap();
        assert!(Catalog::new().find(&query).is_none());

        let catalog: Catalog = [course("CS101", "Intro"), course("CS201", "Data Structures")]
            .into_iter()
            .collect();
        assert!(catalog.find(&query).is_none());
    }

    #[test]
    fn find_returns_matching_course() {
        let catalog: Catalog = [course("CS101", "Intro"), course("CS201", "Data Structures")]
            .into_iter()
            .collect();

        let query = CourseId::new("CS201").unwrap();
        let found = catalog.find(&query).unwrap();
        assert_eq!(found.id(), &query);
        assert_eq!(found.title(), "Data Structures");
    }

    #[test]
    fn find_str_normalizes_query() {
        let catalog: Catalog = std::iter::once(course("CSCI101", "Programming")).collect();

        assert!(catalog.find_str(" csci101 ").is_some());
        assert!(catalog.find_str("").is_none());
        assert!(catalog.find_str("   ").is_none());
    }

    #[test]
    fn first_duplicate_wins_across_sorts() {
        let mut catalog: Catalog = [
            course("CS201", "Data Structures"),
            course("CS101", "first"),
            course("CS101", "second"),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.find_str("CS101").unwrap().title(), "first");

        catalog.sort();
        assert_eq!(catalog.find_str("CS101").unwrap().title(), "first");

        catalog.sort();
        assert_eq!(catalog.find_str("CS101").unwrap().title(), "first");
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn index_tracks_appends_after_sort() {
        let mut catalog: Catalog = [course("B", "b"), course("A", "a")].into_iter().collect();
        catalog.sort();
        catalog.append(course("C", "c"));
        catalog.append(course("A", "late duplicate"));

        assert_eq!(catalog.find_str("C").unwrap().title(), "c");
        assert_eq!(catalog.find_str("A").unwrap().title(), "a");
        assert_eq!(catalog.find_str("B").unwrap().title(), "b");
    }

    #[test]
    fn extend_after_sort_appends_in_order() {
        let mut catalog: Catalog = [course("B", "b"), course("A", "a")].into_iter().collect();
        catalog.sort();

        catalog.extend(vec![course("D", "d"), course("C", "c")]);

        assert_eq!(ids(&catalog), ["A", "B", "D", "C"]);
        assert_eq!(catalog.find_str("C").unwrap().title(), "c");
        assert!(!catalog.is_sorted());
    }

    #[test]
    fn detail_of_missing_course_is_none() {
        let catalog: Catalog = std::iter::once(course("CS101", "Intro")).collect();
        assert!(catalog.detail(&CourseId::new("CS102").unwrap()).is_none());
        assert!(catalog.detail(&CourseId::new("CS101").unwrap()).is_some());
    }
}
