//! Registry errors.

use thiserror::Error;

use crate::models::{CourseKey, DepartmentKey, StaffKey};

/// Errors returned by [`University`](crate::University) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UniversityError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown department: {0}")]
    UnknownDepartment(DepartmentKey),

    #[error("Unknown staff member: {0}")]
    UnknownStaff(StaffKey),

    #[error("Unknown course: {0}")]
    UnknownCourse(CourseKey),

    #[error("Staff member '{0}' is not a lecturer")]
    NotALecturer(String),
}

/// Result alias for registry operations.
pub type Result<T> = std::result::Result<T, UniversityError>;
