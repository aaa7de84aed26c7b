use crate::domain::{Config, Course, CourseId};

/// Reasons a line could not be turned into a course.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// The line contains nothing but whitespace.
    #[error("line is blank")]
    Blank,

    /// The identifier field is empty.
    #[error("missing course identifier")]
    MissingId,

    /// There is no title field, or it is empty.
    #[error("missing course title")]
    MissingTitle,
}

/// Parses a single line of a catalog file into a course.
///
/// The first field is the identifier and the second the title. Every
/// remaining field is a prerequisite, kept in order. Identifiers are
/// uppercased; the title is kept as written. Empty prerequisite fields, such
/// as one left by a trailing delimiter, are dropped.
///
/// A trailing carriage return is ignored so files with Windows line endings
/// read the same as any other.
///
/// # Errors
///
/// Returns a [`ParseError`] if the line is blank or is missing its identifier
/// or title. No partial course is produced.
pub fn parse_line(line: &str, config: &Config) -> Result<Course, ParseError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return Err(ParseError::Blank);
    }

    let mut fields = line.split(config.delimiter());

    // `split` always yields at least one field
    let raw_id = fields.next().unwrap_or_default();
    let title = fields.next().ok_or(ParseError::MissingTitle)?;

    let id = CourseId::new(key_field(raw_id, config)).map_err(|_| ParseError::MissingId)?;
    if title.is_empty() {
        return Err(ParseError::MissingTitle);
    }

    let prerequisites = fields
        .filter_map(|field| CourseId::new(key_field(field, config)).ok())
        .collect();

    Ok(Course::new(id, title.to_string(), prerequisites))
}

fn key_field<'a>(field: &'a str, config: &Config) -> &'a str {
    if config.trim_fields {
        field.trim()
    } else {
        field
    }
}
