//! Staff model.
//!
//! Every staff member carries the same identity fields (id, name, email)
//! and a list of departments. What a staff member *does* is captured by
//! [`StaffRole`], fixed when the staff member is created.

use serde::{Deserialize, Serialize};

use super::{CourseKey, DepartmentKey};

/// A university staff member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    staff_id: String,
    name: String,
    email: String,
    role: StaffRole,
    pub(crate) departments: Vec<DepartmentKey>,
}

/// Role-specific data of a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffRole {
    /// Teaching staff.
    Lecturer {
        /// Area of expertise (e.g., "Artificial Intelligence").
        specialization: String,
        /// Courses taught, in assignment order.
        courses_teaching: Vec<CourseKey>,
    },
    /// Non-teaching staff.
    Administrative {
        /// Free-form label (e.g., "Registrar", "Department Secretary").
        role: String,
    },
}

impl Staff {
    pub(crate) fn lecturer(
        staff_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        specialization: impl Into<String>,
    ) -> Self {
        Self::new(
            staff_id,
            name,
            email,
            StaffRole::Lecturer {
                specialization: specialization.into(),
                courses_teaching: Vec::new(),
            },
        )
    }

    pub(crate) fn administrative(
        staff_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self::new(
            staff_id,
            name,
            email,
            StaffRole::Administrative { role: role.into() },
        )
    }

    fn new(
        staff_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: StaffRole,
    ) -> Self {
        Self {
            staff_id: staff_id.into(),
            name: name.into(),
            email: email.into(),
            role,
            departments: Vec::new(),
        }
    }

    /// Staff identifier (e.g., "L001"). Immutable.
    pub fn staff_id(&self) -> &str {
        &self.staff_id
    }

    /// Full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Changes the email address.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Role-specific data.
    pub fn role(&self) -> &StaffRole {
        &self.role
    }

    /// Departments assigned, in insertion order.
    pub fn departments(&self) -> &[DepartmentKey] {
        &self.departments
    }

    /// Whether this staff member is a lecturer.
    pub fn is_lecturer(&self) -> bool {
        matches!(self.role, StaffRole::Lecturer { .. })
    }

    /// Lecturer specialization; `None` for administrative staff.
    pub fn specialization(&self) -> Option<&str> {
        match &self.role {
            StaffRole::Lecturer { specialization, .. } => Some(specialization.as_str()),
            StaffRole::Administrative { .. } => None,
        }
    }

    /// Sets the specialization. Returns `false` (and changes nothing) for
    /// administrative staff.
    pub fn set_specialization(&mut self, value: impl Into<String>) -> bool {
        match &mut self.role {
            StaffRole::Lecturer { specialization, .. } => {
                *specialization = value.into();
                true
            }
            StaffRole::Administrative { .. } => false,
        }
    }

    /// Courses taught; empty for administrative staff.
    pub fn courses_teaching(&self) -> &[CourseKey] {
        match &self.role {
            StaffRole::Lecturer {
                courses_teaching, ..
            } => courses_teaching.as_slice(),
            StaffRole::Administrative { .. } => &[],
        }
    }

    /// Administrative role label; `None` for lecturers.
    pub fn administrative_role(&self) -> Option<&str> {
        match &self.role {
            StaffRole::Administrative { role } => Some(role.as_str()),
            StaffRole::Lecturer { .. } => None,
        }
    }

    /// Sets the administrative role label. Returns `false` (and changes
    /// nothing) for lecturers.
    pub fn set_administrative_role(&mut self, value: impl Into<String>) -> bool {
        match &mut self.role {
            StaffRole::Administrative { role } => {
                *role = value.into();
                true
            }
            StaffRole::Lecturer { .. } => false,
        }
    }

    pub(crate) fn courses_teaching_mut(&mut self) -> Option<&mut Vec<CourseKey>> {
        match &mut self.role {
            StaffRole::Lecturer {
                courses_teaching, ..
            } => Some(courses_teaching),
            StaffRole::Administrative { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lecturer_fields() {
        let mut s = Staff::lecturer("L001", "Dr. X", "x@uni.edu", "AI");
        assert_eq!(s.staff_id(), "L001");
        assert_eq!(s.name(), "Dr. X");
        assert!(s.is_lecturer());
        assert_eq!(s.specialization(), Some("AI"));
        assert_eq!(s.administrative_role(), None);
        assert!(s.courses_teaching().is_empty());

        assert!(s.set_specialization("Robotics"));
        assert_eq!(s.specialization(), Some("Robotics"));
        assert!(!s.set_administrative_role("Registrar"));
    }

    #[test]
    fn test_administrative_fields() {
        let mut s = Staff::administrative("A001", "Y", "y@uni.edu", "Registrar");
        assert!(!s.is_lecturer());
        assert_eq!(s.administrative_role(), Some("Registrar"));
        assert_eq!(s.specialization(), None);
        assert!(s.courses_teaching().is_empty());
        assert!(s.courses_teaching_mut().is_none());

        assert!(s.set_administrative_role("Department Secretary"));
        assert_eq!(s.administrative_role(), Some("Department Secretary"));
        assert!(!s.set_specialization("AI"));
    }

    #[test]
    fn test_set_email() {
        let mut s = Staff::administrative("A001", "Y", "y@uni.edu", "Registrar");
        s.set_email("y.new@uni.edu");
        assert_eq!(s.email(), "y.new@uni.edu");
    }
}
