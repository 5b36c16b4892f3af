//! Department model.
//!
//! A department owns its [`Office`] (composition), may name a head, and
//! lists the courses it offers and the staff assigned to it. The lists are
//! maintained by [`University`](crate::University) so that every entry is
//! mirrored on the other side of the link.

use serde::{Deserialize, Serialize};

use super::{CourseKey, Office, StaffKey};

/// An academic department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    name: String,
    code: String,
    office: Office,
    pub(crate) head: Option<StaffKey>,
    pub(crate) courses: Vec<CourseKey>,
    pub(crate) staff: Vec<StaffKey>,
}

impl Department {
    pub(crate) fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        room_number: impl Into<String>,
        phone_extension: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            office: Office::new(room_number, phone_extension),
            head: None,
            courses: Vec::new(),
            staff: Vec::new(),
        }
    }

    /// Department name (e.g., "Computer Science").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Department code (e.g., "CS").
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The owned office.
    pub fn office(&self) -> &Office {
        &self.office
    }

    /// Mutable access to the owned office (room and extension only).
    pub fn office_mut(&mut self) -> &mut Office {
        &mut self.office
    }

    /// Head of department, if one has been set.
    pub fn head(&self) -> Option<StaffKey> {
        self.head
    }

    /// Courses offered, in insertion order.
    pub fn courses(&self) -> &[CourseKey] {
        &self.courses
    }

    /// Staff members, in insertion order.
    pub fn staff(&self) -> &[StaffKey] {
        &self.staff
    }

    /// Whether the course is offered here.
    pub fn offers(&self, course: CourseKey) -> bool {
        self.courses.contains(&course)
    }

    /// Whether the staff member belongs here.
    pub fn employs(&self, staff: StaffKey) -> bool {
        self.staff.contains(&staff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_composes_office() {
        let dept = Department::new("Computer Science", "CS", "LAB-201", "4888");
        assert_eq!(dept.name(), "Computer Science");
        assert_eq!(dept.code(), "CS");
        assert_eq!(dept.office().describe(), "Room: LAB-201, Extension: 4888");
        assert!(dept.head().is_none());
        assert!(dept.courses().is_empty());
        assert!(dept.staff().is_empty());
    }

    #[test]
    fn test_department_office_mut() {
        let mut dept = Department::new("Humanities", "HUM", "HUM-102", "2084");
        dept.office_mut().set_phone_extension("2085");
        assert_eq!(dept.office().phone_extension(), "2085");
    }
}
