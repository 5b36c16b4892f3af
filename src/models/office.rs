//! Office model.
//!
//! An office is owned by exactly one department and is created together
//! with it; it has no handle of its own.

use serde::{Deserialize, Serialize};

/// A department office: room and phone extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Office {
    room_number: String,
    phone_extension: String,
}

impl Office {
    pub(crate) fn new(room_number: impl Into<String>, phone_extension: impl Into<String>) -> Self {
        Self {
            room_number: room_number.into(),
            phone_extension: phone_extension.into(),
        }
    }

    /// Room number (e.g., "LAB-201").
    pub fn room_number(&self) -> &str {
        &self.room_number
    }

    /// Phone extension (e.g., "4888").
    pub fn phone_extension(&self) -> &str {
        &self.phone_extension
    }

    /// Moves the office to another room.
    pub fn set_room_number(&mut self, room_number: impl Into<String>) {
        self.room_number = room_number.into();
    }

    /// Changes the phone extension.
    pub fn set_phone_extension(&mut self, phone_extension: impl Into<String>) {
        self.phone_extension = phone_extension.into();
    }

    /// `Room: {room}, Extension: {ext}`.
    pub fn describe(&self) -> String {
        format!(
            "Room: {}, Extension: {}",
            self.room_number, self.phone_extension
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_office_describe() {
        let office = Office::new("LAB-201", "4888");
        assert_eq!(office.describe(), "Room: LAB-201, Extension: 4888");
    }

    #[test]
    fn test_office_setters() {
        let mut office = Office::new("LAB-201", "4888");
        office.set_room_number("ENG-305");
        office.set_phone_extension("8569");
        assert_eq!(office.room_number(), "ENG-305");
        assert_eq!(office.phone_extension(), "8569");
        assert_eq!(office.describe(), "Room: ENG-305, Extension: 8569");
    }
}
