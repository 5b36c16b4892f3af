//! Text rendering of registry entities.
//!
//! Every function here is a pure function of registry state: rendering the
//! same entity twice without an intervening mutation yields identical text.
//! Empty lists render as `None` (or `No departments assigned.` for staff),
//! never as an empty joined string.

use crate::error::Result;
use crate::models::{CourseKey, DepartmentKey, StaffKey, StaffRole};
use crate::University;

const NONE: &str = "None";
const NO_DEPARTMENTS: &str = "No departments assigned.";
const NOT_ASSIGNED: &str = "Not assigned";

impl University {
    /// Multi-line department summary: name, code, office, head (if set),
    /// offered courses and staff members.
    pub fn describe_department(&self, department: DepartmentKey) -> Result<String> {
        let dept = self.require_department(department)?;

        let mut info = format!(
            "Department Name: {}\nDepartment Code: {}\nOffice Details: {}",
            dept.name(),
            dept.code(),
            dept.office().describe()
        );
        if let Some(head) = dept.head().and_then(|h| self.staff(h)) {
            info.push_str(&format!("\nHead of Department: {}", head.name()));
        }

        info.push_str(&format!("\nCourses Offered ({}): ", dept.courses().len()));
        if dept.courses().is_empty() {
            info.push_str(NONE);
        }
        for course in dept.courses().iter().filter_map(|c| self.course(*c)) {
            info.push_str(&format!("\n  - {} ({})", course.title(), course.code()));
        }

        info.push_str(&format!("\nStaff Members ({}): ", dept.staff().len()));
        if dept.staff().is_empty() {
            info.push_str(NONE);
        }
        for member in dept.staff().iter().filter_map(|s| self.staff(*s)) {
            info.push_str(&format!("\n  - {} ({})", member.name(), member.staff_id()));
        }

        Ok(info)
    }

    /// `Assigned Departments: a, b` or `No departments assigned.`
    pub fn describe_departments_of(&self, staff: StaffKey) -> Result<String> {
        let names: Vec<&str> = self
            .departments_of(staff)?
            .into_iter()
            .map(|d| d.name())
            .collect();
        if names.is_empty() {
            Ok(NO_DEPARTMENTS.to_string())
        } else {
            Ok(format!("Assigned Departments: {}", names.join(", ")))
        }
    }

    /// Role-specific staff details: identity header, role lines, then the
    /// department summary.
    pub fn staff_details(&self, staff: StaffKey) -> Result<String> {
        let member = self.require_staff(staff)?;

        let mut details = format!(
            "Staff ID: {}\nName: {}\nEmail: {}\n",
            member.staff_id(),
            member.name(),
            member.email()
        );
        match member.role() {
            StaffRole::Lecturer { specialization, .. } => {
                details.push_str("Role: Lecturer\n");
                details.push_str(&format!("Specialization: {specialization}\n"));
            }
            StaffRole::Administrative { role } => {
                details.push_str(&format!("Role: Administrative Staff ({role})\n"));
            }
        }
        details.push_str(&self.describe_departments_of(staff)?);
        Ok(details)
    }

    /// Multi-line course summary: code, title, credits, offering
    /// department and lecturers.
    pub fn describe_course(&self, course: CourseKey) -> Result<String> {
        let entry = self.require_course(course)?;

        let department = entry
            .department()
            .and_then(|d| self.department(d))
            .map(|d| d.name())
            .unwrap_or(NOT_ASSIGNED);
        let lecturers: Vec<&str> = self
            .lecturers_of(course)?
            .into_iter()
            .map(|s| s.name())
            .collect();
        let lecturer_list = if lecturers.is_empty() {
            NONE.to_string()
        } else {
            lecturers.join(", ")
        };

        Ok(format!(
            "Course Code: {}\nTitle: {}\nCredits: {}\nOffered by Department: {}\nAssigned Lecturers ({}): {}",
            entry.code(),
            entry.title(),
            entry.credits(),
            department,
            entry.lecturers().len(),
            lecturer_list
        ))
    }
}
