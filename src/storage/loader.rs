use std::{
    io,
    path::{Path, PathBuf},
};

use tracing::instrument;

use crate::{
    domain::{Catalog, Config, Course},
    storage::line::{parse_line, ParseError},
};

/// Errors that can occur while loading a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("Unable to open file {}", path.display())]
    Io {
        /// The path that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// A line that was skipped while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedLine {
    /// The 1-based line number within the file.
    pub line: usize,
    /// Why the line was skipped.
    pub reason: ParseError,
}

/// The courses parsed from a catalog file, along with any malformed lines.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedCatalog {
    /// Successfully parsed courses, in file order.
    pub courses: Vec<Course>,
    /// Lines that could not be parsed. Blank lines are not recorded.
    pub skipped: Vec<SkippedLine>,
}

/// Summary of a completed load.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of courses appended to the catalog.
    pub loaded: usize,
    /// Lines that could not be parsed.
    pub skipped: Vec<SkippedLine>,
}

/// Parses the full text of a catalog file.
///
/// This is a best-effort parse: malformed lines are recorded and skipped, and
/// never prevent later lines from being read.
#[must_use]
pub fn parse_catalog(text: &str, config: &Config) -> ParsedCatalog {
    let mut parsed = ParsedCatalog::default();

    for (index, line) in text.lines().enumerate() {
        match parse_line(line, config) {
            Ok(course) => parsed.courses.push(course),
            Err(ParseError::Blank) => {}
            Err(reason) => {
                let line = index + 1;
                tracing::debug!("Skipping line {line}: {reason}");
                parsed.skipped.push(SkippedLine { line, reason });
            }
        }
    }

    parsed
}

/// Reads and parses a catalog file.
///
/// Bytes that are not valid UTF-8 are replaced rather than failing the load.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be opened or read.
#[instrument(level = "debug", skip(config))]
pub fn load_file(path: &Path, config: &Config) -> Result<ParsedCatalog, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_catalog(&String::from_utf8_lossy(&bytes), config))
}

/// Loads a catalog file and appends its courses to `catalog`.
///
/// The whole file is read before anything is appended, so a failed load
/// leaves the catalog untouched. Courses already in the catalog are kept;
/// loading the same file twice appends its courses twice.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be opened or read.
pub fn load_into(
    path: &Path,
    config: &Config,
    catalog: &mut Catalog,
) -> Result<LoadReport, LoadError> {
    let ParsedCatalog { courses, skipped } = load_file(path, config)?;
    let loaded = courses.len();
    catalog.extend(courses);

    tracing::info!(
        "Loaded {loaded} courses from {} ({} lines skipped)",
        path.display(),
        skipped.len()
    );

    Ok(LoadReport { loaded, skipped })
}
