use biodata_types::{BiodataPatch, BiodataRecord, DraftRecord, Field, FieldErrors};

use crate::store::BiodataStore;
use crate::validator;

/// Lifecycle of the Edit view's draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    /// Draft equals the record it was opened from
    Clean,
    /// At least one field changed since opening or the last submit
    Dirty,
    /// Submit in progress
    Validating,
    /// Last submit was rejected; errors are shown
    Invalid,
    /// Draft was written to the store
    Committed,
}

/// Working copy of the record plus its per-field errors.
///
/// Created when the Edit view is entered and dropped when it is left.
#[derive(Debug, Clone)]
pub struct EditSession {
    draft: DraftRecord,
    errors: FieldErrors,
    state: DraftState,
}

impl EditSession {
    pub fn open(record: &BiodataRecord) -> Self {
        Self {
            draft: DraftRecord::from(record),
            errors: FieldErrors::new(),
            state: DraftState::Clean,
        }
    }

    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn state(&self) -> DraftState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == DraftState::Dirty
    }

    /// Replace one draft field and clear that field's error.
    ///
    /// Errors on other fields are left as they were until the next submit.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.remove(field);
        self.state = DraftState::Dirty;
    }

    /// Validate the whole draft and commit it if clean.
    ///
    /// On success the store receives the full draft with `age` as a number
    /// and the committed record is returned. On failure nothing is written
    /// and the errors stay on the session for display.
    pub fn submit(&mut self, store: &mut BiodataStore) -> Result<BiodataRecord, FieldErrors> {
        self.state = DraftState::Validating;
        self.errors = validator::validate(&self.draft);

        let patch = match self.to_patch() {
            Some(patch) if self.errors.is_empty() => patch,
            _ => {
                self.state = DraftState::Invalid;
                return Err(self.errors.clone());
            }
        };

        store.update(patch);
        self.state = DraftState::Committed;
        Ok(store.current())
    }

    /// Full patch with `age` coerced to a number, if it parses
    fn to_patch(&self) -> Option<BiodataPatch> {
        let age = validator::parse_age(&self.draft.age)?;
        Some(BiodataPatch {
            name: Some(self.draft.name.clone()),
            age: Some(age),
            grade: Some(self.draft.grade.clone()),
            roll: Some(self.draft.roll.clone()),
            email: Some(self.draft.email.clone()),
            profile_pic: Some(self.draft.profile_pic.clone()),
            about: Some(self.draft.about.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{EMAIL_MESSAGE, NAME_MESSAGE};

    #[test]
    fn test_open_is_clean_and_mirrors_record() {
        let session = EditSession::open(&BiodataRecord::seed());

        assert_eq!(session.state(), DraftState::Clean);
        assert_eq!(session.draft().name, "Shruti");
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_change_marks_dirty() {
        let mut session = EditSession::open(&BiodataRecord::seed());
        session.set_field(Field::Name, "Shru");

        assert!(session.is_dirty());
        assert_eq!(session.draft().name, "Shru");
    }

    #[test]
    fn test_rejected_submit_keeps_store_untouched() {
        let mut store = BiodataStore::default();
        let mut session = EditSession::open(store.record());
        session.set_field(Field::Name, "A");

        let errors = session.submit(&mut store).unwrap_err();

        assert_eq!(errors.get(Field::Name), Some(NAME_MESSAGE));
        assert_eq!(session.state(), DraftState::Invalid);
        assert_eq!(store.current(), BiodataRecord::seed());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_change_clears_only_that_fields_error() {
        let mut store = BiodataStore::default();
        let mut session = EditSession::open(store.record());
        session.set_field(Field::Name, "A");
        session.set_field(Field::Email, "nope");
        session.submit(&mut store).unwrap_err();

        session.set_field(Field::Name, "B");

        assert_eq!(session.error_for(Field::Name), None);
        assert_eq!(session.error_for(Field::Email), Some(EMAIL_MESSAGE));
        assert_eq!(session.state(), DraftState::Dirty);
    }

    #[test]
    fn test_resubmit_without_changes_stays_invalid() {
        let mut store = BiodataStore::default();
        let mut session = EditSession::open(store.record());
        session.set_field(Field::Email, "nope");

        session.submit(&mut store).unwrap_err();
        session.submit(&mut store).unwrap_err();

        assert_eq!(session.state(), DraftState::Invalid);
        assert_eq!(session.errors().len(), 1);
    }

    #[test]
    fn test_successful_submit_coerces_age() {
        let mut store = BiodataStore::default();
        let mut session = EditSession::open(store.record());
        session.set_field(Field::Age, " 16 ");

        let committed = session.submit(&mut store).unwrap();

        assert_eq!(committed.age, 16);
        assert_eq!(store.current().age, 16);
        assert_eq!(session.state(), DraftState::Committed);
    }
}
