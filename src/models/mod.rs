//! University domain models.
//!
//! Plain records for the academic structure. Relationships are stored as
//! arena handles; [`University`](crate::University) owns the arenas and
//! keeps both sides of every link in step.
//!
//! # Relationships
//!
//! | From | To | Kind | Multiplicity |
//! |------|----|------|--------------|
//! | Department | Office | composition | 1 |
//! | Department | Staff (head) | association | 0..1 |
//! | Department | Course | association | 0..N, mirrored |
//! | Department | Staff | association | 0..N, mirrored |
//! | Course | Staff (lecturer) | aggregation | 0..N, mirrored |

mod course;
mod department;
mod keys;
mod office;
mod staff;

pub use course::Course;
pub use department::Department;
pub use keys::{CourseKey, DepartmentKey, StaffKey};
pub use office::Office;
pub use staff::{Staff, StaffRole};

pub(crate) use keys::push_unique;
