//! Arena handles.
//!
//! Entities live in arenas owned by [`University`](crate::University) and
//! refer to each other through these copyable indices instead of owning
//! references, so reciprocal links never form ownership cycles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a department in a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DepartmentKey(pub(crate) usize);

/// Handle to a staff member (lecturer or administrative) in a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StaffKey(pub(crate) usize);

/// Handle to a course in a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseKey(pub(crate) usize);

impl fmt::Display for DepartmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "department#{}", self.0)
    }
}

impl fmt::Display for StaffKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "staff#{}", self.0)
    }
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "course#{}", self.0)
    }
}

/// Appends `key` unless already present. Returns whether it was added.
pub(crate) fn push_unique<K: PartialEq + Copy>(list: &mut Vec<K>, key: K) -> bool {
    if list.contains(&key) {
        false
    } else {
        list.push(key);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_unique() {
        let mut list = Vec::new();
        assert!(push_unique(&mut list, CourseKey(3)));
        assert!(!push_unique(&mut list, CourseKey(3)));
        assert!(push_unique(&mut list, CourseKey(1)));
        assert_eq!(list, vec![CourseKey(3), CourseKey(1)]);
    }

    #[test]
    fn test_key_display() {
        assert_eq!(DepartmentKey(0).to_string(), "department#0");
        assert_eq!(StaffKey(2).to_string(), "staff#2");
        assert_eq!(CourseKey(7).to_string(), "course#7");
    }
}
