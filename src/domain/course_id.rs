use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;
use serde::{Serialize, Serializer};

/// A normalized course identifier, such as `CSCI200`.
///
/// Identifiers are uppercased at construction and are the sole key used for
/// sorting and lookup. Ordering is plain lexicographic ordering of the
/// normalized string, so `CS10` sorts before `CS9`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CourseId(NonEmptyString);

impl CourseId {
    /// Creates a new `CourseId`, normalizing the input to uppercase.
    ///
    /// Surrounding whitespace is kept; callers that want it gone trim first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCourseId` if the string is empty or contains only
    /// whitespace.
    pub fn new(s: &str) -> Result<Self, InvalidCourseId> {
        if s.trim().is_empty() {
            return Err(InvalidCourseId(s.to_string()));
        }

        let normalized = s.to_uppercase();
        NonEmptyString::new(normalized)
            .map(Self)
            .map_err(|_| InvalidCourseId(s.to_string()))
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for CourseId {
    type Err = InvalidCourseId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Deref for CourseId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CourseId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Error returned when a course identifier is empty or blank.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid course identifier '{0}': must contain at least one non-whitespace character")]
pub struct InvalidCourseId(String);

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use test_case::test_case;

    use super::*;

    #[test_case("cs101", "CS101"; "lowercase")]
    #[test_case("Math201", "MATH201"; "mixed case")]
    #[test_case("CSCI300", "CSCI300"; "already uppercase")]
    #[test_case("cs-101a", "CS-101A"; "punctuation kept")]
    fn normalizes_to_uppercase(input: &str, expected: &str) {
        let id = CourseId::new(input).unwrap();
        assert_eq!(id.as_str(), expected);
        assert_eq!(id.to_string(), expected);
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "spaces")]
    #[test_case("\t"; "tab")]
    fn rejects_blank(input: &str) {
        assert_eq!(
            CourseId::new(input),
            Err(InvalidCourseId(input.to_string()))
        );
    }

    #[test]
    fn ordering_is_lexicographic_not_numeric() {
        let ten = CourseId::new("CS10").unwrap();
        let nine = CourseId::new("CS9").unwrap();
        assert!(ten < nine);
    }

    #[test]
    fn differently_cased_inputs_are_equal() {
        let a = CourseId::new("csci101").unwrap();
        let b: CourseId = "CSCI101".parse().unwrap();
        assert_eq!(a, b);

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = CourseId::new("math101").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"MATH101\"");
    }

    #[test]
    fn error_display() {
        let error = CourseId::new(" ").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid course identifier ' ': must contain at least one non-whitespace character"
        );
    }
}
