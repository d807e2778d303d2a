use biodata_types::{BiodataRecord, Error, Field, Result, ViewName};

use crate::draft::EditSession;
use crate::navigator::Navigator;
use crate::store::BiodataStore;
use crate::validator;

/// Controller owning the store, the navigator and the Edit draft.
///
/// Renderers hold one of these and pass borrowed state to their views;
/// nothing is looked up globally.
#[derive(Debug, Default)]
pub struct BiodataApp {
    store: BiodataStore,
    navigator: Navigator,
    edit: Option<EditSession>,
}

impl BiodataApp {
    /// Start a session from `seed`, which must satisfy every field rule.
    pub fn new(seed: BiodataRecord, start: ViewName) -> Result<Self> {
        let errors = validator::validate_record(&seed);
        if !errors.is_empty() {
            return Err(Error::InvalidSeed(errors));
        }

        let mut app = Self {
            store: BiodataStore::new(seed),
            navigator: Navigator::default(),
            edit: None,
        };
        app.navigate(start);
        Ok(app)
    }

    pub fn store(&self) -> &BiodataStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BiodataStore {
        &mut self.store
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn active_view(&self) -> ViewName {
        self.navigator.active()
    }

    /// Draft of the Edit view, present only while Edit is active
    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Make `view` the active view.
    ///
    /// Entering Edit seeds a fresh draft from the store; leaving it drops
    /// the draft. Re-selecting the active view changes nothing.
    pub fn navigate(&mut self, view: ViewName) {
        let previous = self.navigator.active();
        if previous == view && (view != ViewName::Edit || self.edit.is_some()) {
            return;
        }

        self.navigator.navigate(view);
        self.edit = match view {
            ViewName::Edit => Some(EditSession::open(self.store.record())),
            ViewName::Home | ViewName::Profile => None,
        };
    }

    pub fn change_field(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        let session = self.edit.as_mut().ok_or(Error::NotEditing)?;
        session.set_field(field, value);
        Ok(())
    }

    /// Submit the Edit draft; on success the app is on Home.
    pub fn submit(&mut self) -> Result<BiodataRecord> {
        let session = self.edit.as_mut().ok_or(Error::NotEditing)?;
        let committed = session.submit(&mut self.store)?;
        self.navigate(ViewName::Home);
        Ok(committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::DraftState;

    #[test]
    fn test_invalid_seed_is_rejected() {
        let seed = BiodataRecord {
            age: 0,
            ..BiodataRecord::seed()
        };

        let err = BiodataApp::new(seed, ViewName::Home).unwrap_err();
        assert!(matches!(err, Error::InvalidSeed(ref errors) if errors.contains(Field::Age)));
    }

    #[test]
    fn test_start_on_edit_opens_draft() {
        let app = BiodataApp::new(BiodataRecord::seed(), ViewName::Edit).unwrap();

        assert_eq!(app.active_view(), ViewName::Edit);
        assert_eq!(app.edit_session().map(|s| s.state()), Some(DraftState::Clean));
    }

    #[test]
    fn test_change_outside_edit_fails() {
        let mut app = BiodataApp::default();

        assert!(matches!(
            app.change_field(Field::Name, "Zed"),
            Err(Error::NotEditing)
        ));
        assert!(matches!(app.submit(), Err(Error::NotEditing)));
    }

    #[test]
    fn test_leaving_edit_discards_draft() {
        let mut app = BiodataApp::default();
        app.navigate(ViewName::Edit);
        app.change_field(Field::Name, "Zed").unwrap();

        app.navigate(ViewName::Profile);
        assert!(app.edit_session().is_none());

        app.navigate(ViewName::Edit);
        assert_eq!(app.edit_session().unwrap().draft().name, "Shruti");
    }

    #[test]
    fn test_reselecting_edit_keeps_draft() {
        let mut app = BiodataApp::default();
        app.navigate(ViewName::Edit);
        app.change_field(Field::Roll, "R7").unwrap();

        app.navigate(ViewName::Edit);

        assert_eq!(app.edit_session().unwrap().draft().roll, "R7");
    }

    #[test]
    fn test_rejected_submit_stays_on_edit() {
        let mut app = BiodataApp::default();
        app.navigate(ViewName::Edit);
        app.change_field(Field::Email, "not-an-email").unwrap();

        let err = app.submit().unwrap_err();

        assert!(matches!(err, Error::Validation(ref errors) if errors.contains(Field::Email)));
        assert_eq!(app.active_view(), ViewName::Edit);
        assert_eq!(app.store().current(), BiodataRecord::seed());
    }
}
