//! Structural validation of a university registry.
//!
//! A registry built only through [`University`] operations is always
//! consistent. A registry loaded from a serialized snapshot may not be, so
//! hosts should run [`validate_university`] after loading. Detects:
//! - Duplicate identifiers (staff ids, course codes, department codes)
//! - Handles pointing outside their arena
//! - One-sided links (Department↔Staff, Department↔Course, Course↔Lecturer)
//! - A head of department who is not a member of it
//! - The same handle listed twice in one association list
//! - Courses taught by non-lecturer staff

use crate::models::{CourseKey, DepartmentKey, StaffKey};
use crate::University;
use std::collections::HashSet;
use std::hash::Hash;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same identifier.
    DuplicateId,
    /// A stored handle does not resolve.
    InvalidReference,
    /// A link is recorded on one side only.
    AsymmetricLink,
    /// The same handle appears twice in one list.
    DuplicateLink,
    /// A course lists administrative staff as a lecturer.
    NonLecturerTeaching,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the structural integrity of a registry.
///
/// Checks:
/// 1. No duplicate department codes, staff ids or course codes
/// 2. Every stored handle resolves
/// 3. No association list holds the same handle twice
/// 4. Department staff ↔ staff departments are mirrored; the head is a member
/// 5. Department courses ↔ course offering department are mirrored
/// 6. Course lecturers ↔ lecturer courses are mirrored, and only
///    lecturers teach
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_university(uni: &University) -> ValidationResult {
    let mut errors = Vec::new();

    check_unique_ids(
        "department code",
        uni.departments().map(|(_, d)| d.code()),
        &mut errors,
    );
    check_unique_ids(
        "staff ID",
        uni.staff_members().map(|(_, s)| s.staff_id()),
        &mut errors,
    );
    check_unique_ids(
        "course code",
        uni.courses().map(|(_, c)| c.code()),
        &mut errors,
    );

    for (key, dept) in uni.departments() {
        let owner = format!("Department '{}'", dept.code());
        check_no_repeats(&owner, "staff", dept.staff(), &mut errors);
        check_no_repeats(&owner, "courses", dept.courses(), &mut errors);

        if let Some(head) = dept.head() {
            match uni.staff(head) {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidReference,
                    format!("{owner} has unknown head {head}"),
                )),
                Some(member) if !dept.employs(head) => errors.push(ValidationError::new(
                    ValidationErrorKind::AsymmetricLink,
                    format!(
                        "{owner} is headed by '{}' who is not a staff member",
                        member.staff_id()
                    ),
                )),
                Some(_) => {}
            }
        }

        for &s in dept.staff() {
            match uni.staff(s) {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidReference,
                    format!("{owner} lists unknown staff member {s}"),
                )),
                Some(member) if !member.departments().contains(&key) => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::AsymmetricLink,
                        format!(
                            "{owner} lists staff '{}' who does not list it back",
                            member.staff_id()
                        ),
                    ))
                }
                Some(_) => {}
            }
        }

        for &c in dept.courses() {
            match uni.course(c) {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidReference,
                    format!("{owner} lists unknown course {c}"),
                )),
                Some(course) if course.department() != Some(key) => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::AsymmetricLink,
                        format!(
                            "{owner} lists course '{}' offered by another department",
                            course.code()
                        ),
                    ))
                }
                Some(_) => {}
            }
        }
    }

    for (key, member) in uni.staff_members() {
        let owner = format!("Staff '{}'", member.staff_id());
        check_no_repeats(&owner, "departments", member.departments(), &mut errors);
        check_no_repeats(&owner, "courses", member.courses_teaching(), &mut errors);

        for &d in member.departments() {
            check_mirrored_staff(uni, &owner, key, d, &mut errors);
        }

        for &c in member.courses_teaching() {
            match uni.course(c) {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidReference,
                    format!("{owner} teaches unknown course {c}"),
                )),
                Some(course) if !course.is_taught_by(key) => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::AsymmetricLink,
                        format!(
                            "{owner} teaches course '{}' which does not list them",
                            course.code()
                        ),
                    ))
                }
                Some(_) => {}
            }
        }
    }

    for (key, course) in uni.courses() {
        let owner = format!("Course '{}'", course.code());
        check_no_repeats(&owner, "lecturers", course.lecturers(), &mut errors);

        if let Some(d) = course.department() {
            check_offered(uni, &owner, key, d, &mut errors);
        }

        for &s in course.lecturers() {
            match uni.staff(s) {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidReference,
                    format!("{owner} lists unknown lecturer {s}"),
                )),
                Some(member) if !member.is_lecturer() => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::NonLecturerTeaching,
                        format!(
                            "{owner} lists '{}' who is not a lecturer",
                            member.staff_id()
                        ),
                    ))
                }
                Some(member) if !member.courses_teaching().contains(&key) => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::AsymmetricLink,
                        format!(
                            "{owner} lists lecturer '{}' who does not teach it",
                            member.staff_id()
                        ),
                    ))
                }
                Some(_) => {}
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_unique_ids<'a>(
    label: &str,
    ids: impl Iterator<Item = &'a str>,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {label}: {id}"),
            ));
        }
    }
}

fn check_no_repeats<K: Copy + Eq + Hash + std::fmt::Display>(
    owner: &str,
    list_name: &str,
    keys: &[K],
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for &k in keys {
        if !seen.insert(k) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateLink,
                format!("{owner} lists {k} twice in {list_name}"),
            ));
        }
    }
}

fn check_mirrored_staff(
    uni: &University,
    owner: &str,
    staff: StaffKey,
    department: DepartmentKey,
    errors: &mut Vec<ValidationError>,
) {
    match uni.department(department) {
        None => errors.push(ValidationError::new(
            ValidationErrorKind::InvalidReference,
            format!("{owner} lists unknown department {department}"),
        )),
        Some(dept) if !dept.employs(staff) => errors.push(ValidationError::new(
            ValidationErrorKind::AsymmetricLink,
            format!(
                "{owner} lists department '{}' which does not list them",
                dept.code()
            ),
        )),
        Some(_) => {}
    }
}

fn check_offered(
    uni: &University,
    owner: &str,
    course: CourseKey,
    department: DepartmentKey,
    errors: &mut Vec<ValidationError>,
) {
    match uni.department(department) {
        None => errors.push(ValidationError::new(
            ValidationErrorKind::InvalidReference,
            format!("{owner} is offered by unknown department {department}"),
        )),
        Some(dept) if !dept.offers(course) => errors.push(ValidationError::new(
            ValidationErrorKind::AsymmetricLink,
            format!(
                "{owner} names department '{}' which does not offer it",
                dept.code()
            ),
        )),
        Some(_) => {}
    }
}
