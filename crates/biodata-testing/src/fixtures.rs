//! Sample records and drafts.

use biodata_types::{BiodataRecord, DraftRecord, Field};

/// Minimal draft that passes every rule
/// (`{name:"Al", age:14, grade:"10", roll:"R1", email:"a@b.com"}`).
pub fn minimal_valid_draft() -> DraftRecord {
    DraftRecord {
        name: "Al".to_string(),
        age: "14".to_string(),
        grade: "10".to_string(),
        roll: "R1".to_string(),
        email: "a@b.com".to_string(),
        profile_pic: String::new(),
        about: String::new(),
    }
}

/// Minimal valid draft with one field replaced
pub fn draft_with(field: Field, value: &str) -> DraftRecord {
    minimal_valid_draft().with(field, value)
}

/// A valid record different from the seed in every field
pub fn alternate_record() -> BiodataRecord {
    BiodataRecord {
        name: "Meera Nair".to_string(),
        age: 16,
        grade: "11th".to_string(),
        roll: "R-204".to_string(),
        email: "meera@school.test".to_string(),
        profile_pic: "https://cdn.example.org/meera.jpg".to_string(),
        about: "Plays the veena and likes chemistry.".to_string(),
    }
}

/// `about` text of exactly `len` characters
pub fn about_of_len(len: usize) -> String {
    "x".repeat(len)
}
