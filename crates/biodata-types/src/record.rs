use serde::{Deserialize, Serialize};

use crate::Field;

/// The personal-profile record shown by every view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiodataRecord {
    pub name: String,
    pub age: u32,
    pub grade: String,
    pub roll: String,
    pub email: String,
    /// Empty string means "no picture"
    #[serde(default)]
    pub profile_pic: String,
    #[serde(default)]
    pub about: String,
}

impl BiodataRecord {
    /// Record the application starts with
    pub fn seed() -> Self {
        Self {
            name: "Shruti".to_string(),
            age: 14,
            grade: "10".to_string(),
            roll: "2315022".to_string(),
            email: "shruti@example.com".to_string(),
            profile_pic: "https://via.placeholder.com/150".to_string(),
            about: "This is a short about me paragraph.".to_string(),
        }
    }

    /// Text form of a field, as shown in views and seeded into drafts
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Age => self.age.to_string(),
            Field::Grade => self.grade.clone(),
            Field::Roll => self.roll.clone(),
            Field::Email => self.email.clone(),
            Field::ProfilePic => self.profile_pic.clone(),
            Field::About => self.about.clone(),
        }
    }

    /// Shallow merge: replaces exactly the fields present in `patch`.
    ///
    /// Returns the fields whose value actually changed.
    pub fn merge(&mut self, patch: BiodataPatch) -> Vec<Field> {
        let mut changed = Vec::new();

        fn replace<T: PartialEq>(
            slot: &mut T,
            value: Option<T>,
            field: Field,
            changed: &mut Vec<Field>,
        ) {
            if let Some(value) = value {
                if *slot != value {
                    changed.push(field);
                }
                *slot = value;
            }
        }

        replace(&mut self.name, patch.name, Field::Name, &mut changed);
        replace(&mut self.age, patch.age, Field::Age, &mut changed);
        replace(&mut self.grade, patch.grade, Field::Grade, &mut changed);
        replace(&mut self.roll, patch.roll, Field::Roll, &mut changed);
        replace(&mut self.email, patch.email, Field::Email, &mut changed);
        replace(
            &mut self.profile_pic,
            patch.profile_pic,
            Field::ProfilePic,
            &mut changed,
        );
        replace(&mut self.about, patch.about, Field::About, &mut changed);

        changed
    }

    /// Patch carrying every field of this record
    pub fn to_patch(&self) -> BiodataPatch {
        BiodataPatch {
            name: Some(self.name.clone()),
            age: Some(self.age),
            grade: Some(self.grade.clone()),
            roll: Some(self.roll.clone()),
            email: Some(self.email.clone()),
            profile_pic: Some(self.profile_pic.clone()),
            about: Some(self.about.clone()),
        }
    }
}

impl Default for BiodataRecord {
    fn default() -> Self {
        Self::seed()
    }
}

/// Partial record accepted by the store's update operation.
///
/// `None` means "not provided" and leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BiodataPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
}

impl BiodataPatch {
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Fields provided by this patch, in display order
    pub fn fields(&self) -> Vec<Field> {
        let present = [
            (Field::Name, self.name.is_some()),
            (Field::Age, self.age.is_some()),
            (Field::Grade, self.grade.is_some()),
            (Field::Roll, self.roll.is_some()),
            (Field::Email, self.email.is_some()),
            (Field::ProfilePic, self.profile_pic.is_some()),
            (Field::About, self.about.is_some()),
        ];
        present
            .into_iter()
            .filter_map(|(field, is_set)| is_set.then_some(field))
            .collect()
    }
}

/// Working copy edited in the Edit view.
///
/// Every field is raw input text, `age` included, because it may not be
/// numeric until the draft is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRecord {
    pub name: String,
    pub age: String,
    pub grade: String,
    pub roll: String,
    pub email: String,
    pub profile_pic: String,
    pub about: String,
}

impl DraftRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Grade => &self.grade,
            Field::Roll => &self.roll,
            Field::Email => &self.email,
            Field::ProfilePic => &self.profile_pic,
            Field::About => &self.about,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Age => &mut self.age,
            Field::Grade => &mut self.grade,
            Field::Roll => &mut self.roll,
            Field::Email => &mut self.email,
            Field::ProfilePic => &mut self.profile_pic,
            Field::About => &mut self.about,
        };
        *slot = value.into();
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}

impl From<&BiodataRecord> for DraftRecord {
    fn from(record: &BiodataRecord) -> Self {
        Self {
            name: record.name.clone(),
            age: record.age.to_string(),
            grade: record.grade.clone(),
            roll: record.roll.clone(),
            email: record.email.clone(),
            profile_pic: record.profile_pic.clone(),
            about: record.about.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_empty_patch_keeps_record() {
        let mut record = BiodataRecord::seed();
        let changed = record.merge(BiodataPatch::default());

        assert!(changed.is_empty());
        assert_eq!(record, BiodataRecord::seed());
    }

    #[test]
    fn test_merge_replaces_only_provided_fields() {
        let mut record = BiodataRecord::seed();
        let changed = record.merge(BiodataPatch {
            name: Some("Asha".to_string()),
            ..Default::default()
        });

        assert_eq!(changed, vec![Field::Name]);
        assert_eq!(record.name, "Asha");
        assert_eq!(record.age, 14);
        assert_eq!(record.email, "shruti@example.com");
    }

    #[test]
    fn test_merge_same_value_is_not_reported_as_change() {
        let mut record = BiodataRecord::seed();
        let changed = record.merge(BiodataPatch {
            age: Some(14),
            roll: Some("R9".to_string()),
            ..Default::default()
        });

        assert_eq!(changed, vec![Field::Roll]);
    }

    #[test]
    fn test_patch_deserializes_camel_case_subset() {
        let patch: BiodataPatch =
            serde_json::from_str(r#"{"profilePic": "", "age": 30}"#).unwrap();

        assert_eq!(patch.fields(), vec![Field::Age, Field::ProfilePic]);
        assert_eq!(patch.profile_pic.as_deref(), Some(""));
    }

    #[test]
    fn test_patch_rejects_unknown_keys() {
        let result: Result<BiodataPatch, _> = serde_json::from_str(r#"{"nickname": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_draft_from_record_stringifies_age() {
        let draft = DraftRecord::from(&BiodataRecord::seed());

        assert_eq!(draft.age, "14");
        assert_eq!(draft.get(Field::ProfilePic), "https://via.placeholder.com/150");
    }

    #[test]
    fn test_draft_set_targets_single_field() {
        let draft = DraftRecord::from(&BiodataRecord::seed()).with(Field::Grade, "11th");

        assert_eq!(draft.grade, "11th");
        assert_eq!(draft.name, "Shruti");
    }
}
