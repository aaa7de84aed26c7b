//! Course Catalog Planning
//!
//! Courses are loaded from delimited text files into an in-memory catalog,
//! which can be sorted by identifier and queried for a single course's
//! details.

pub mod domain;
pub use domain::{Catalog, Config, Course, CourseDetail, CourseId, InvalidCourseId};

/// Parsing and loading of delimited course files.
pub mod storage;
pub use storage::{LoadError, LoadReport, ParseError};

/// The interactive menu and its command dispatcher.
pub mod shell;
pub use shell::{dispatch, Command, Flow, Session, Shell};

pub mod terminal;
