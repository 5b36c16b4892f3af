//! University structure model for the U-Engine ecosystem.
//!
//! Models departments, their offices, courses, and staff (lecturers and
//! administrative staff), keeping every association mirrored on both sides.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Department`, `Office`, `Staff`,
//!   `StaffRole`, `Course`, and the arena handles
//! - **`university`**: The `University` registry: creation, linking, lookup
//! - **`describe`**: Text summaries of departments, staff and courses
//! - **`validation`**: Integrity checks (duplicate IDs, one-sided links)
//!
//! # Example
//!
//! ```
//! use u_university::University;
//!
//! let mut uni = University::new();
//! let cs = uni.create_department("Computer Science", "CS", "LAB-201", "4888");
//! let lecturer = uni.create_lecturer("L001", "Dr. X", "x@uni.edu", "AI");
//! let course = uni.create_course("COMP101", "Intro", 3, Some(cs)).unwrap();
//!
//! uni.add_lecturer(course, lecturer).unwrap();
//! assert_eq!(uni.staff(lecturer).unwrap().courses_teaching(), &[course]);
//! ```

mod describe;
pub mod error;
pub mod models;
mod university;
pub mod validation;

pub use error::{Result, UniversityError};
pub use university::University;
