//! Course model.
//!
//! A course is offered by (at most) one department and taught by any
//! number of lecturers. Lecturers exist independently of the course.

use serde::{Deserialize, Serialize};

use super::{DepartmentKey, StaffKey};

/// A course offered by the university.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    code: String,
    title: String,
    credits: u32,
    pub(crate) department: Option<DepartmentKey>,
    pub(crate) lecturers: Vec<StaffKey>,
}

impl Course {
    pub(crate) fn new(code: impl Into<String>, title: impl Into<String>, credits: u32) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            credits,
            department: None,
            lecturers: Vec::new(),
        }
    }

    /// Course code (e.g., "COMP101").
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Course title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Academic credits.
    pub fn credits(&self) -> u32 {
        self.credits
    }

    /// Changes the credit value.
    pub fn set_credits(&mut self, credits: u32) {
        self.credits = credits;
    }

    /// Offering department, `None` if not assigned.
    pub fn department(&self) -> Option<DepartmentKey> {
        self.department
    }

    /// Lecturers, in assignment order.
    pub fn lecturers(&self) -> &[StaffKey] {
        &self.lecturers
    }

    /// Whether the staff member teaches this course.
    pub fn is_taught_by(&self, staff: StaffKey) -> bool {
        self.lecturers.contains(&staff)
    }
}
