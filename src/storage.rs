//! Reading course catalogs from delimited text files.
//!
//! A catalog file holds one course per line. Fields are separated by the
//! configured delimiter and appear in the order identifier, title, then zero
//! or more prerequisite identifiers.

mod line;
mod loader;

pub use line::{parse_line, ParseError};
pub use loader::{
    load_file, load_into, parse_catalog, LoadError, LoadReport, ParsedCatalog, SkippedLine,
};
