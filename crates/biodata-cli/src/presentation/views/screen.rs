use std::fmt;

use super::{active_text, error_text, heading};
use crate::presentation::view_models::{
    CreateView, EditFormViewModel, HomeViewModel, NavViewModel, ProfileViewModel, ScreenBody,
    ScreenViewModel,
};

impl CreateView for ScreenViewModel {
    fn create_view<'a>(&'a self, colored: bool) -> Box<dyn fmt::Display + 'a> {
        Box::new(ScreenView {
            data: self,
            colored,
        })
    }
}

pub struct ScreenView<'a> {
    data: &'a ScreenViewModel,
    colored: bool,
}

impl<'a> ScreenView<'a> {
    pub fn new(data: &'a ScreenViewModel, colored: bool) -> Self {
        Self { data, colored }
    }
}

impl<'a> fmt::Display for ScreenView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nav(f, &self.data.nav, self.colored)?;
        writeln!(f)?;
        match &self.data.body {
            ScreenBody::Home(home) => write_home(f, home, self.colored),
            ScreenBody::Profile(profile) => write_profile(f, profile, self.colored),
            ScreenBody::Edit(form) => write_edit_form(f, form, self.colored),
        }
    }
}

fn write_nav(f: &mut fmt::Formatter<'_>, nav: &NavViewModel, colored: bool) -> fmt::Result {
    let items: Vec<String> = nav
        .items
        .iter()
        .map(|item| {
            if item.active {
                active_text(&format!("[{}]", item.label), colored)
            } else {
                item.label.clone()
            }
        })
        .collect();
    writeln!(f, "{}", items.join("  "))
}

fn write_home(f: &mut fmt::Formatter<'_>, home: &HomeViewModel, colored: bool) -> fmt::Result {
    writeln!(f, "{}", heading(&home.title, colored))?;

    let width = home.rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
    for row in &home.rows {
        writeln!(f, "  {:<width$}  {}", row.label, row.value, width = width)?;
    }
    Ok(())
}

fn write_profile(
    f: &mut fmt::Formatter<'_>,
    profile: &ProfileViewModel,
    colored: bool,
) -> fmt::Result {
    writeln!(f, "{}", heading(&profile.title, colored))?;
    match &profile.picture_url {
        Some(url) => writeln!(f, "  Picture  {}", url)?,
        None => writeln!(f, "  Picture  (none)")?,
    }
    writeln!(f, "  {}", heading(&profile.name, colored))?;
    if !profile.about.is_empty() {
        writeln!(f, "  {}", profile.about)?;
    }
    Ok(())
}

fn write_edit_form(
    f: &mut fmt::Formatter<'_>,
    form: &EditFormViewModel,
    colored: bool,
) -> fmt::Result {
    writeln!(f, "{}", heading(&form.title, colored))?;

    let labels: Vec<String> = form
        .fields
        .iter()
        .map(|field| {
            if field.required {
                format!("{} *", field.label)
            } else {
                field.label.clone()
            }
        })
        .collect();
    let width = labels.iter().map(|l| l.len()).max().unwrap_or(0);

    for (field, label) in form.fields.iter().zip(&labels) {
        let value = match (&field.placeholder, field.value.is_empty()) {
            (Some(placeholder), true) => format!("({})", placeholder),
            _ => field.value.clone(),
        };
        writeln!(f, "  {:<width$}  {}", label, value, width = width)?;

        if let Some(error) = &field.error {
            writeln!(f, "    ! {}", error_text(error, colored))?;
        }
    }

    writeln!(f, "  [ {} ]", form.submit_label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_screen;
    use biodata_core::BiodataApp;
    use biodata_types::{Field, ViewName};

    fn render(app: &BiodataApp) -> String {
        let screen = present_screen(app, None);
        ScreenView::new(&screen, false).to_string()
    }

    #[test]
    fn test_home_text() {
        let app = BiodataApp::default();

        insta::assert_snapshot!(render(&app), @r"
        [Home]  Profile  Edit

        Home - Biodata
          Name   Shruti
          Age    14
          Grade  10
          Roll   2315022
          Email  shruti@example.com
        ");
    }

    #[test]
    fn test_profile_text() {
        let mut app = BiodataApp::default();
        app.navigate(ViewName::Profile);

        insta::assert_snapshot!(render(&app), @r"
        Home  [Profile]  Edit

        Profile
          Picture  https://via.placeholder.com/150
          Shruti
          This is a short about me paragraph.
        ");
    }

    #[test]
    fn test_edit_text_shows_inline_errors() {
        let mut app = BiodataApp::default();
        app.navigate(ViewName::Edit);
        app.change_field(Field::Name, "A").unwrap();
        app.change_field(Field::Grade, "").unwrap();
        let _ = app.submit();

        let text = render(&app);
        assert!(text.starts_with("Home  Profile  [Edit]\n"));
        assert!(text.contains("    ! Name must be at least 2 characters\n"));
        assert!(text.contains("(e.g. 10, 11th)"));
        assert!(text.contains("    ! Grade must be at least 2 characters (e.g., \"10\", \"11th\")\n"));
        assert!(text.ends_with("  [ Save ]\n"));
    }
}
