//! Field rules for the Edit form.
//!
//! Every rule is independent and yields at most one message per field.
//! A draft is committable iff [`validate`] returns an empty map.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use biodata_types::{BiodataRecord, DraftRecord, Field, FieldErrors};

pub const NAME_MESSAGE: &str = "Name must be at least 2 characters";
pub const AGE_MESSAGE: &str = "Age must be a number between 1 and 120";
pub const GRADE_MESSAGE: &str = "Grade must be at least 2 characters (e.g., \"10\", \"11th\")";
pub const ROLL_MESSAGE: &str = "Roll is required";
pub const EMAIL_MESSAGE: &str = "Valid email is required";
pub const PROFILE_PIC_MESSAGE: &str = "Profile picture must be a valid URL";
pub const ABOUT_MESSAGE: &str = "About must be less than 300 characters";

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;
pub const MIN_TEXT_LEN: usize = 2;
pub const MAX_ABOUT_LEN: usize = 300;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validate every field of a draft.
pub fn validate(draft: &DraftRecord) -> FieldErrors {
    Field::ALL
        .into_iter()
        .filter_map(|field| {
            validate_field(field, draft.get(field)).map(|msg| (field, msg.to_string()))
        })
        .collect()
}

/// Validate a committed-shape record (e.g. the startup seed).
pub fn validate_record(record: &BiodataRecord) -> FieldErrors {
    validate(&DraftRecord::from(record))
}

/// Check a single field's raw text, returning its message on failure.
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    let ok = match field {
        Field::Name => char_len(value.trim()) >= MIN_TEXT_LEN,
        Field::Age => parse_age(value).is_some(),
        Field::Grade => char_len(value.trim()) >= MIN_TEXT_LEN,
        Field::Roll => !value.trim().is_empty(),
        Field::Email => EMAIL_REGEX.is_match(value),
        Field::ProfilePic => value.is_empty() || is_absolute_url(value),
        Field::About => char_len(value) <= MAX_ABOUT_LEN,
    };

    if ok { None } else { Some(message_for(field)) }
}

pub fn message_for(field: Field) -> &'static str {
    match field {
        Field::Name => NAME_MESSAGE,
        Field::Age => AGE_MESSAGE,
        Field::Grade => GRADE_MESSAGE,
        Field::Roll => ROLL_MESSAGE,
        Field::Email => EMAIL_MESSAGE,
        Field::ProfilePic => PROFILE_PIC_MESSAGE,
        Field::About => ABOUT_MESSAGE,
    }
}

/// Read age input as a whole number in `[MIN_AGE, MAX_AGE]`.
///
/// Accepts surrounding whitespace and decimal notation with no fractional
/// part (`" 14 "`, `"+14"`, `"14.0"`).
pub fn parse_age(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let number: f64 = trimmed.parse().ok()?;
    if !number.is_finite() || number.fract() != 0.0 {
        return None;
    }
    if number < MIN_AGE as f64 || number > MAX_AGE as f64 {
        return None;
    }

    Some(number as u32)
}

fn is_absolute_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}
