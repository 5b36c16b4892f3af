//! University registry.
//!
//! Owns the department, staff and course arenas and is the only place
//! where associations are written. Each association pair has a single
//! link routine that updates both sides, so a link requested from either
//! end produces the same state and repeated requests are no-ops.
//!
//! # Link routines
//!
//! | Public operations | Routine |
//! |-------------------|---------|
//! | `add_staff_member`, `assign_department`, `set_head_of_department` | `link_staff_department` |
//! | `add_lecturer`, `assign_course` | `link_course_lecturer` |
//! | `create_course`, `add_course_to_department`, `set_offering_department` | `attach_course` |

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, UniversityError};
use crate::models::{push_unique, Course, CourseKey, Department, DepartmentKey, Staff, StaffKey};

/// In-memory registry of departments, staff and courses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct University {
    pub(crate) departments: Vec<Department>,
    pub(crate) staff: Vec<Staff>,
    pub(crate) courses: Vec<Course>,
}

impl University {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Construction ----

    /// Creates a department together with its office.
    pub fn create_department(
        &mut self,
        name: impl Into<String>,
        code: impl Into<String>,
        room_number: impl Into<String>,
        phone_extension: impl Into<String>,
    ) -> DepartmentKey {
        let key = DepartmentKey(self.departments.len());
        self.departments
            .push(Department::new(name, code, room_number, phone_extension));
        key
    }

    /// Creates a lecturer.
    pub fn create_lecturer(
        &mut self,
        staff_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        specialization: impl Into<String>,
    ) -> StaffKey {
        let key = StaffKey(self.staff.len());
        self.staff
            .push(Staff::lecturer(staff_id, name, email, specialization));
        key
    }

    /// Creates an administrative staff member.
    pub fn create_administrative_staff(
        &mut self,
        staff_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> StaffKey {
        let key = StaffKey(self.staff.len());
        self.staff
            .push(Staff::administrative(staff_id, name, email, role));
        key
    }

    /// Creates a course. When a department is given, the course is
    /// registered with it immediately.
    ///
    /// # Errors
    /// `UnknownDepartment` if `department` was not issued by this registry;
    /// nothing is created in that case.
    pub fn create_course(
        &mut self,
        code: impl Into<String>,
        title: impl Into<String>,
        credits: u32,
        department: Option<DepartmentKey>,
    ) -> Result<CourseKey> {
        if let Some(dept) = department {
            self.require_department(dept)?;
        }
        let key = CourseKey(self.courses.len());
        self.courses.push(Course::new(code, title, credits));
        if department.is_some() {
            self.attach_course(key, department)?;
        }
        Ok(key)
    }

    // ---- Links ----

    /// Adds a course to the department's offered list.
    ///
    /// A course has one offering department, so a course offered elsewhere
    /// moves here. Returns `false` if the course is already offered here.
    pub fn add_course_to_department(
        &mut self,
        department: DepartmentKey,
        course: CourseKey,
    ) -> Result<bool> {
        self.attach_course(course, Some(department))
    }

    /// Reassigns (or with `None`, clears) the offering department. The
    /// course leaves the previous department's list and joins the new one.
    pub fn set_offering_department(
        &mut self,
        course: CourseKey,
        department: Option<DepartmentKey>,
    ) -> Result<()> {
        self.attach_course(course, department).map(|_| ())
    }

    /// Adds a staff member to the department. Returns `false` if already linked.
    pub fn add_staff_member(&mut self, department: DepartmentKey, staff: StaffKey) -> Result<bool> {
        self.link_staff_department(department, staff)
    }

    /// Assigns the staff member to a department. Returns `false` if already linked.
    pub fn assign_department(&mut self, staff: StaffKey, department: DepartmentKey) -> Result<bool> {
        self.link_staff_department(department, staff)
    }

    /// Sets the head of department. The head also becomes a staff member
    /// of the department.
    ///
    /// # Errors
    /// `InvalidArgument` when `staff` is `None`.
    pub fn set_head_of_department(
        &mut self,
        department: DepartmentKey,
        staff: Option<StaffKey>,
    ) -> Result<()> {
        let staff = staff.ok_or_else(|| {
            UniversityError::InvalidArgument("head of department must be a staff member".into())
        })?;
        self.require_department(department)?;
        self.require_staff(staff)?;

        self.link_staff_department(department, staff)?;
        let dept = &mut self.departments[department.0];
        dept.head = Some(staff);
        info!(
            staff = %self.staff[staff.0].name(),
            department = %dept.name(),
            "head of department set"
        );
        Ok(())
    }

    /// Adds a lecturer to the course. Returns `false` if already linked.
    ///
    /// # Errors
    /// `NotALecturer` if `staff` is administrative staff.
    pub fn add_lecturer(&mut self, course: CourseKey, staff: StaffKey) -> Result<bool> {
        self.link_course_lecturer(course, staff)
    }

    /// Assigns a course to the lecturer. Returns `false` if already linked.
    ///
    /// # Errors
    /// `NotALecturer` if `staff` is administrative staff.
    pub fn assign_course(&mut self, staff: StaffKey, course: CourseKey) -> Result<bool> {
        self.link_course_lecturer(course, staff)
    }

    fn link_staff_department(&mut self, department: DepartmentKey, staff: StaffKey) -> Result<bool> {
        self.require_department(department)?;
        self.require_staff(staff)?;

        let dept = &mut self.departments[department.0];
        let member = &mut self.staff[staff.0];
        let added_to_dept = push_unique(&mut dept.staff, staff);
        let added_to_staff = push_unique(&mut member.departments, department);

        if added_to_dept || added_to_staff {
            info!(
                staff = %member.name(),
                department = %dept.name(),
                "staff member assigned to department"
            );
            Ok(true)
        } else {
            debug!(
                staff = %member.name(),
                department = %dept.name(),
                "staff member already assigned, ignored"
            );
            Ok(false)
        }
    }

    fn link_course_lecturer(&mut self, course: CourseKey, staff: StaffKey) -> Result<bool> {
        self.require_course(course)?;
        self.require_staff(staff)?;

        let entry = &mut self.courses[course.0];
        let member = &mut self.staff[staff.0];
        let name = member.name().to_string();
        let staff_id = member.staff_id().to_string();
        let Some(teaching) = member.courses_teaching_mut() else {
            return Err(UniversityError::NotALecturer(staff_id));
        };

        let added_to_staff = push_unique(teaching, course);
        let added_to_course = push_unique(&mut entry.lecturers, staff);

        if added_to_course || added_to_staff {
            info!(lecturer = %name, course = %entry.title(), "lecturer assigned to course");
            Ok(true)
        } else {
            debug!(lecturer = %name, course = %entry.title(), "lecturer already assigned, ignored");
            Ok(false)
        }
    }

    fn attach_course(&mut self, course: CourseKey, department: Option<DepartmentKey>) -> Result<bool> {
        self.require_course(course)?;
        if let Some(dept) = department {
            self.require_department(dept)?;
        }

        let previous = self.courses[course.0].department;
        let already_listed = department
            .map(|d| self.departments[d.0].offers(course))
            .unwrap_or(true);
        if previous == department && already_listed {
            debug!(course = %self.courses[course.0].title(), "course already offered, ignored");
            return Ok(false);
        }

        if let Some(old) = previous.filter(|old| Some(*old) != department) {
            if let Some(old_dept) = self.departments.get_mut(old.0) {
                old_dept.courses.retain(|c| *c != course);
                debug!(
                    course = %self.courses[course.0].title(),
                    department = %old_dept.name(),
                    "course withdrawn from department"
                );
            }
        }

        let entry = &mut self.courses[course.0];
        entry.department = department;
        if let Some(dept) = department {
            let dept = &mut self.departments[dept.0];
            push_unique(&mut dept.courses, course);
            info!(course = %entry.title(), department = %dept.name(), "course added to department");
        } else {
            info!(course = %entry.title(), "course detached from department");
        }
        Ok(true)
    }

    // ---- Lookup ----

    /// Department by handle.
    pub fn department(&self, key: DepartmentKey) -> Option<&Department> {
        self.departments.get(key.0)
    }

    /// Mutable department (office and scalar fields only).
    pub fn department_mut(&mut self, key: DepartmentKey) -> Option<&mut Department> {
        self.departments.get_mut(key.0)
    }

    /// Staff member by handle.
    pub fn staff(&self, key: StaffKey) -> Option<&Staff> {
        self.staff.get(key.0)
    }

    /// Mutable staff member (email, specialization, role).
    pub fn staff_mut(&mut self, key: StaffKey) -> Option<&mut Staff> {
        self.staff.get_mut(key.0)
    }

    /// Course by handle.
    pub fn course(&self, key: CourseKey) -> Option<&Course> {
        self.courses.get(key.0)
    }

    /// Mutable course (credits).
    pub fn course_mut(&mut self, key: CourseKey) -> Option<&mut Course> {
        self.courses.get_mut(key.0)
    }

    /// All departments in creation order.
    pub fn departments(&self) -> impl Iterator<Item = (DepartmentKey, &Department)> {
        self.departments
            .iter()
            .enumerate()
            .map(|(i, d)| (DepartmentKey(i), d))
    }

    /// All staff members in creation order.
    pub fn staff_members(&self) -> impl Iterator<Item = (StaffKey, &Staff)> {
        self.staff.iter().enumerate().map(|(i, s)| (StaffKey(i), s))
    }

    /// All courses in creation order.
    pub fn courses(&self) -> impl Iterator<Item = (CourseKey, &Course)> {
        self.courses
            .iter()
            .enumerate()
            .map(|(i, c)| (CourseKey(i), c))
    }

    /// Finds a department by code.
    pub fn find_department(&self, code: &str) -> Option<DepartmentKey> {
        self.departments().find(|(_, d)| d.code() == code).map(|(k, _)| k)
    }

    /// Finds a staff member by staff id.
    pub fn find_staff(&self, staff_id: &str) -> Option<StaffKey> {
        self.staff_members()
            .find(|(_, s)| s.staff_id() == staff_id)
            .map(|(k, _)| k)
    }

    /// Finds a course by code.
    pub fn find_course(&self, code: &str) -> Option<CourseKey> {
        self.courses().find(|(_, c)| c.code() == code).map(|(k, _)| k)
    }

    /// Courses a staff member teaches, in assignment order.
    pub fn courses_taught_by(&self, staff: StaffKey) -> Result<Vec<&Course>> {
        let member = self.require_staff(staff)?;
        Ok(member
            .courses_teaching()
            .iter()
            .filter_map(|c| self.course(*c))
            .collect())
    }

    /// Departments a staff member is assigned to, in insertion order.
    pub fn departments_of(&self, staff: StaffKey) -> Result<Vec<&Department>> {
        let member = self.require_staff(staff)?;
        Ok(member
            .departments()
            .iter()
            .filter_map(|d| self.department(*d))
            .collect())
    }

    /// Staff members of a department, in insertion order.
    pub fn staff_of(&self, department: DepartmentKey) -> Result<Vec<&Staff>> {
        let dept = self.require_department(department)?;
        Ok(dept.staff().iter().filter_map(|s| self.staff(*s)).collect())
    }

    /// Lecturers of a course, in assignment order.
    pub fn lecturers_of(&self, course: CourseKey) -> Result<Vec<&Staff>> {
        let entry = self.require_course(course)?;
        Ok(entry
            .lecturers()
            .iter()
            .filter_map(|s| self.staff(*s))
            .collect())
    }

    /// Number of departments.
    pub fn department_count(&self) -> usize {
        self.departments.len()
    }

    /// Number of staff members.
    pub fn staff_count(&self) -> usize {
        self.staff.len()
    }

    /// Number of courses.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub(crate) fn require_department(&self, key: DepartmentKey) -> Result<&Department> {
        self.department(key)
            .ok_or(UniversityError::UnknownDepartment(key))
    }

    pub(crate) fn require_staff(&self, key: StaffKey) -> Result<&Staff> {
        self.staff(key).ok_or(UniversityError::UnknownStaff(key))
    }

    pub(crate) fn require_course(&self, key: CourseKey) -> Result<&Course> {
        self.course(key).ok_or(UniversityError::UnknownCourse(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cs_department(uni: &mut University) -> DepartmentKey {
        uni.create_department("Computer Science", "CS", "LAB-201", "4888")
    }

    #[test]
    fn test_create_department_builds_office() {
        let mut uni = University::new();
        let cs = cs_department(&mut uni);
        let dept = uni.department(cs).unwrap();
        assert_eq!(dept.office().describe(), "Room: LAB-201, Extension: 4888");
        assert_eq!(uni.department_count(), 1);
    }

    #[test]
    fn test_create_course_registers_with_department() {
        let mut uni = University::new();
        let cs = cs_department(&mut uni);
        let c = uni.create_course("COMP101", "Intro", 3, Some(cs)).unwrap();

        assert_eq!(uni.course(c).unwrap().department(), Some(cs));
        assert_eq!(uni.department(cs).unwrap().courses(), &[c]);
    }

    #[test]
    fn test_create_course_without_department() {
        let mut uni = University::new();
        let c = uni.create_course("HUM101", "World Literature", 3, None).unwrap();
        assert!(uni.course(c).unwrap().department().is_none());
    }

    #[test]
    fn test_create_course_unknown_department() {
        let mut uni = University::new();
        let err = uni
            .create_course("X1", "Ghost", 1, Some(DepartmentKey(9)))
            .unwrap_err();
        assert_eq!(err, UniversityError::UnknownDepartment(DepartmentKey(9)));
        assert_eq!(uni.course_count(), 0);
    }

    #[test]
    fn test_add_course_twice_is_idempotent() {
        let mut uni = University::new();
        let cs = cs_department(&mut uni);
        let c = uni.create_course("COMP101", "Intro", 3, Some(cs)).unwrap();

        assert!(!uni.add_course_to_department(cs, c).unwrap());
        assert!(!uni.add_course_to_department(cs, c).unwrap());
        assert_eq!(uni.department(cs).unwrap().courses().len(), 1);
    }

    #[test]
    fn test_add_course_to_department_links_unassigned_course() {
        let mut uni = University::new();
        let cs = cs_department(&mut uni);
        let c = uni.create_course("COMP101", "Intro", 3, None).unwrap();

        assert!(uni.add_course_to_department(cs, c).unwrap());
        assert_eq!(uni.course(c).unwrap().department(), Some(cs));
        assert_eq!(uni.department(cs).unwrap().courses(), &[c]);
    }

    #[test]
    fn test_add_course_to_other_department_moves_course() {
        let mut uni = University::new();
        let cs = cs_department(&mut uni);
        let ee = uni.create_department("Electrical Engineering", "EE", "ENG-305", "8569");
        let c = uni.create_course("COMP101", "Intro", 3, Some(cs)).unwrap();

        assert!(uni.add_course_to_department(ee, c).unwrap());
        assert!(uni.department(cs).unwrap().courses().is_empty());
        assert_eq!(uni.department(ee).unwrap().courses(), &[c]);
        assert_eq!(uni.course(c).unwrap().department(), Some(ee));
    }

    #[test]
    fn test_set_offering_department_moves_course() {
        let mut uni = University::new();
        let cs = cs_department(&mut uni);
        let ee = uni.create_department("Electrical Engineering", "EE", "ENG-305", "8569");
        let c = uni.create_course("COMP101", "Intro", 3, Some(cs)).unwrap();

        uni.set_offering_department(c, Some(ee)).unwrap();
        assert_eq!(uni.course(c).unwrap().department(), Some(ee));
        assert!(uni.department(cs).unwrap().courses().is_empty());
        assert_eq!(uni.department(ee).unwrap().courses(), &[c]);

        uni.set_offering_department(c, None).unwrap();
        assert!(uni.course(c).unwrap().department().is_none());
        assert!(uni.department(ee).unwrap().courses().is_empty());
    }

    #[test]
    fn test_staff_department_link_from_either_side() {
        let mut uni = University::new();
        let cs = cs_department(&mut uni);
        let ee = uni.create_department("Electrical Engineering", "EE", "ENG-305", "8569");
        let l = uni.create_lecturer("L001", "Dr. X", "x@uni.edu", "AI");

        assert!(uni.assign_department(l, cs).unwrap());
        assert!(uni.add_staff_member(ee, l).unwrap());
        assert!(!uni.add_staff_member(cs, l).unwrap());
        assert!(!uni.assign_department(l, ee).unwrap());

        assert_eq!(uni.staff(l).unwrap().departments(), &[cs, ee]);
        assert_eq!(uni.department(cs).unwrap().staff(), &[l]);
        assert_eq!(uni.department(ee).unwrap().staff(), &[l]);
    }

    #[test]
    fn test_course_lecturer_link_from_either_side() {
        let mut uni = University::new();
        let cs = cs_department(&mut uni);
        let l = uni.create_lecturer("L001", "Dr. X", "x@uni.edu", "AI");
        let c1 = uni.create_course("COMP101", "Intro", 3, Some(cs)).unwrap();
        let c2 = uni.create_course("COMP320", "Algorithms", 4, Some(cs)).unwrap();

        assert!(uni.add_lecturer(c1, l).unwrap());
        assert!(uni.assign_course(l, c2).unwrap());
        assert!(!uni.assign_course(l, c1).unwrap());
        assert!(!uni.add_lecturer(c2, l).unwrap());

        assert_eq!(uni.course(c1).unwrap().lecturers(), &[l]);
        assert_eq!(uni.course(c2).unwrap().lecturers(), &[l]);
        assert_eq!(uni.staff(l).unwrap().courses_teaching(), &[c1, c2]);
    }

    #[test]
    fn test_administrative_staff_cannot_teach() {
        let mut uni = University::new();
        let cs = cs_department(&mut uni);
        let a = uni.create_administrative_staff("A001", "Y", "y@uni.edu", "Registrar");
        let c = uni.create_course("COMP101", "Intro", 3, Some(cs)).unwrap();

        let err = uni.add_lecturer(c, a).unwrap_err();
        assert_eq!(err, UniversityError::NotALecturer("A001".into()));
        assert!(uni.course(c).unwrap().lecturers().is_empty());
    }

    #[test]
    fn test_set_head_of_department() {
        let mut uni = University::new();
        let cs = cs_department(&mut uni);
        let l = uni.create_lecturer("L001", "Dr. X", "x@uni.edu", "AI");

        uni.set_head_of_department(cs, Some(l)).unwrap();
        let dept = uni.department(cs).unwrap();
        assert_eq!(dept.head(), Some(l));
        assert!(dept.employs(l));
        assert_eq!(uni.staff(l).unwrap().departments(), &[cs]);
    }

    #[test]
    fn test_replacing_head_keeps_previous_head_as_member() {
        let mut uni = University::new();
        let cs = cs_department(&mut uni);
        let first = uni.create_lecturer("L001", "Dr. X", "x@uni.edu", "AI");
        let second = uni.create_lecturer("L002", "Dr. Z", "z@uni.edu", "Networks");

        uni.set_head_of_department(cs, Some(first)).unwrap();
        uni.set_head_of_department(cs, Some(second)).unwrap();

        let dept = uni.department(cs).unwrap();
        assert_eq!(dept.head(), Some(second));
        assert_eq!(dept.staff(), &[first, second]);
        assert_eq!(uni.staff(first).unwrap().departments(), &[cs]);
    }

    #[test]
    fn test_set_head_of_department_requires_staff() {
        let mut uni = University::new();
        let cs = cs_department(&mut uni);

        let err = uni.set_head_of_department(cs, None).unwrap_err();
        assert!(matches!(err, UniversityError::InvalidArgument(_)));
        assert!(uni.department(cs).unwrap().head().is_none());
    }

    #[test]
    fn test_unknown_handles_rejected() {
        let mut uni = University::new();
        let cs = cs_department(&mut uni);
        assert_eq!(
            uni.add_staff_member(cs, StaffKey(5)).unwrap_err(),
            UniversityError::UnknownStaff(StaffKey(5))
        );
        assert_eq!(
            uni.add_course_to_department(cs, CourseKey(1)).unwrap_err(),
            UniversityError::UnknownCourse(CourseKey(1))
        );
    }

    #[test]
    fn test_find_by_identifier() {
        let mut uni = University::new();
        let cs = cs_department(&mut uni);
        let l = uni.create_lecturer("L001", "Dr. X", "x@uni.edu", "AI");
        let c = uni.create_course("COMP101", "Intro", 3, Some(cs)).unwrap();

        assert_eq!(uni.find_department("CS"), Some(cs));
        assert_eq!(uni.find_staff("L001"), Some(l));
        assert_eq!(uni.find_course("COMP101"), Some(c));
        assert_eq!(uni.find_course("NOPE"), None);
    }

    #[test]
    fn test_resolved_listings() {
        let mut uni = University::new();
        let cs = cs_department(&mut uni);
        let l = uni.create_lecturer("L001", "Dr. X", "x@uni.edu", "AI");
        let c = uni.create_course("COMP101", "Intro", 3, Some(cs)).unwrap();
        uni.add_lecturer(c, l).unwrap();
        uni.assign_department(l, cs).unwrap();

        let taught: Vec<&str> = uni
            .courses_taught_by(l)
            .unwrap()
            .iter()
            .map(|c| c.title())
            .collect();
        assert_eq!(taught, vec!["Intro"]);
        assert_eq!(uni.departments_of(l).unwrap()[0].name(), "Computer Science");
        assert_eq!(uni.staff_of(cs).unwrap()[0].staff_id(), "L001");
        assert_eq!(uni.lecturers_of(c).unwrap()[0].name(), "Dr. X");
    }

    #[test]
    fn test_scalar_mutation() {
        let mut uni = University::new();
        let cs = cs_department(&mut uni);
        let a = uni.create_administrative_staff("A001", "Y", "y@uni.edu", "Registrar");
        let c = uni.create_course("COMP101", "Intro", 3, Some(cs)).unwrap();

        uni.department_mut(cs).unwrap().office_mut().set_room_number("LAB-202");
        uni.staff_mut(a).unwrap().set_administrative_role("Department Secretary");
        uni.course_mut(c).unwrap().set_credits(4);

        assert_eq!(uni.department(cs).unwrap().office().room_number(), "LAB-202");
        assert_eq!(
            uni.staff(a).unwrap().administrative_role(),
            Some("Department Secretary")
        );
        assert_eq!(uni.course(c).unwrap().credits(), 4);
    }
}
