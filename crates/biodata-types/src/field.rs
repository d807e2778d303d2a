use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Field of a biodata record.
///
/// Declaration order is the display order, so the derived `Ord` keeps
/// error maps and forms in the same order as the record table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Age,
    Grade,
    Roll,
    Email,
    ProfilePic,
    About,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Age,
        Field::Grade,
        Field::Roll,
        Field::Email,
        Field::ProfilePic,
        Field::About,
    ];

    /// Wire name (camelCase), as used in JSON and `--set` arguments
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Grade => "grade",
            Field::Roll => "roll",
            Field::Email => "email",
            Field::ProfilePic => "profilePic",
            Field::About => "about",
        }
    }

    /// Human label shown next to inputs and in tables
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Age => "Age",
            Field::Grade => "Grade",
            Field::Roll => "Roll",
            Field::Email => "Email",
            Field::ProfilePic => "Profile Picture URL",
            Field::About => "About",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::ProfilePic | Field::About)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Field::About)
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Field::Grade => Some("e.g. 10, 11th"),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(Field::Name),
            "age" => Ok(Field::Age),
            "grade" => Ok(Field::Grade),
            "roll" => Ok(Field::Roll),
            "email" => Ok(Field::Email),
            "profilePic" | "profile_pic" => Ok(Field::ProfilePic),
            "about" => Ok(Field::About),
            other => Err(Error::UnknownField(other.to_string())),
        }
    }
}
