use biodata_core::{BiodataApp, DraftState, EditSession, Navigator};
use biodata_types::{BiodataRecord, Field, ViewName};

use crate::presentation::view_models::{
    CommandResultViewModel, EditFormViewModel, FormFieldViewModel, Guidance, HomeViewModel,
    NavItemViewModel, NavViewModel, ProfileViewModel, RecordRowViewModel, ScreenBody,
    ScreenViewModel, StatusBadge,
};

/// Fields listed in the Home table
const HOME_FIELDS: [Field; 5] = [
    Field::Name,
    Field::Age,
    Field::Grade,
    Field::Roll,
    Field::Email,
];

pub fn present_nav(navigator: &Navigator) -> NavViewModel {
    let items = navigator
        .nav_items()
        .into_iter()
        .map(|item| NavItemViewModel {
            view: item.view,
            label: item.view.title().to_string(),
            path: item.view.path().to_string(),
            active: item.active,
        })
        .collect();

    NavViewModel { items }
}

pub fn present_home(record: &BiodataRecord) -> HomeViewModel {
    let rows = HOME_FIELDS
        .into_iter()
        .map(|field| RecordRowViewModel {
            field,
            label: short_label(field).to_string(),
            value: record.get(field),
        })
        .collect();

    HomeViewModel {
        title: "Home - Biodata".to_string(),
        rows,
    }
}

pub fn present_profile(record: &BiodataRecord) -> ProfileViewModel {
    ProfileViewModel {
        title: "Profile".to_string(),
        name: record.name.clone(),
        about: record.about.clone(),
        picture_url: (!record.profile_pic.is_empty()).then(|| record.profile_pic.clone()),
    }
}

pub fn present_edit_form(session: &EditSession, focus: Option<Field>) -> EditFormViewModel {
    let fields = Field::ALL
        .into_iter()
        .map(|field| FormFieldViewModel {
            field,
            label: field.label().to_string(),
            value: session.draft().get(field).to_string(),
            required: field.is_required(),
            multiline: field.is_multiline(),
            placeholder: field.placeholder().map(str::to_string),
            error: session.error_for(field).map(str::to_string),
            focused: focus == Some(field),
        })
        .collect();

    EditFormViewModel {
        title: "Edit Biodata".to_string(),
        state: draft_state_name(session.state()).to_string(),
        fields,
        error_count: session.errors().len(),
        submit_label: "Save".to_string(),
    }
}

/// Screen for the app's active view. `focus` only matters on Edit.
pub fn present_screen(app: &BiodataApp, focus: Option<Field>) -> ScreenViewModel {
    let record = app.store().record();
    let body = match app.active_view() {
        ViewName::Home => ScreenBody::Home(present_home(record)),
        ViewName::Profile => ScreenBody::Profile(present_profile(record)),
        ViewName::Edit => {
            let form = match app.edit_session() {
                Some(session) => present_edit_form(session, focus),
                None => present_edit_form(&EditSession::open(record), focus),
            };
            ScreenBody::Edit(form)
        }
    };

    ScreenViewModel {
        nav: present_nav(app.navigator()),
        body,
    }
}

pub fn present_show(screen: ScreenViewModel) -> CommandResultViewModel<ScreenViewModel> {
    CommandResultViewModel::new(screen)
}

pub fn present_committed(screen: ScreenViewModel) -> CommandResultViewModel<ScreenViewModel> {
    CommandResultViewModel::new(screen).with_badge(StatusBadge::success("Saved"))
}

pub fn present_rejected(screen: ScreenViewModel) -> CommandResultViewModel<ScreenViewModel> {
    let count = match &screen.body {
        ScreenBody::Edit(form) => form.error_count,
        ScreenBody::Home(_) | ScreenBody::Profile(_) => 0,
    };

    CommandResultViewModel::new(screen)
        .with_badge(StatusBadge::error(format!(
            "{} field(s) need attention; nothing was saved",
            count
        )))
        .with_suggestion(
            Guidance::new("Fix the highlighted fields and submit again")
                .with_command("biodata edit --set <FIELD>=<VALUE>"),
        )
}

fn short_label(field: Field) -> &'static str {
    match field {
        Field::ProfilePic => "Picture",
        other => other.label(),
    }
}

fn draft_state_name(state: DraftState) -> &'static str {
    match state {
        DraftState::Clean => "clean",
        DraftState::Dirty => "dirty",
        DraftState::Validating => "validating",
        DraftState::Invalid => "invalid",
        DraftState::Committed => "committed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_lists_identity_fields_only() {
        let vm = present_home(&BiodataRecord::seed());

        let labels: Vec<&str> = vm.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Name", "Age", "Grade", "Roll", "Email"]);
        assert_eq!(vm.rows[1].value, "14");
    }

    #[test]
    fn test_profile_without_picture() {
        let record = BiodataRecord {
            profile_pic: String::new(),
            ..BiodataRecord::seed()
        };

        assert_eq!(present_profile(&record).picture_url, None);
    }

    #[test]
    fn test_nav_marks_active_view() {
        let mut app = BiodataApp::default();
        app.navigate(ViewName::Profile);

        let screen = present_screen(&app, None);
        let active: Vec<ViewName> = screen
            .nav
            .items
            .iter()
            .filter(|i| i.active)
            .map(|i| i.view)
            .collect();
        assert_eq!(active, vec![ViewName::Profile]);
        assert_eq!(screen.view(), ViewName::Profile);
    }

    #[test]
    fn test_edit_form_carries_errors_and_focus() {
        let mut app = BiodataApp::default();
        app.navigate(ViewName::Edit);
        app.change_field(Field::Email, "bad").unwrap();
        let _ = app.submit();

        let ScreenBody::Edit(form) = present_screen(&app, Some(Field::Email)).body else {
            panic!("expected edit form");
        };
        let email = &form.fields[4];
        assert_eq!(email.field, Field::Email);
        assert_eq!(email.error.as_deref(), Some("Valid email is required"));
        assert!(email.focused);
        assert_eq!(form.state, "invalid");
        assert_eq!(form.error_count, 1);
    }
}
