//! Domain models for course planning.
//!
//! This module contains the core domain types including courses, their
//! normalized identifiers, the in-memory catalog, and configuration.

/// Course domain model.
pub mod course;
pub use course::{Course, CourseDetail};

/// Normalized course identifiers.
pub mod course_id;
pub use course_id::{CourseId, InvalidCourseId};

/// The ordered in-memory catalog of courses.
pub mod catalog;
pub use catalog::Catalog;

mod config;
pub use config::Config;
