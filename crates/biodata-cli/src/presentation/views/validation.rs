use std::fmt;

use super::error_text;
use crate::presentation::view_models::{CreateView, ValidationViewModel};

impl CreateView for ValidationViewModel {
    fn create_view<'a>(&'a self, colored: bool) -> Box<dyn fmt::Display + 'a> {
        Box::new(ValidationView {
            data: self,
            colored,
        })
    }
}

struct ValidationView<'a> {
    data: &'a ValidationViewModel,
    colored: bool,
}

impl<'a> fmt::Display for ValidationView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.valid {
            return writeln!(f, "No validation errors");
        }

        for (field, message) in self.data.errors.iter() {
            writeln!(f, "  {}: {}", field, error_text(message, self.colored))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_validation;
    use biodata_core::validate;
    use biodata_types::{BiodataRecord, DraftRecord, Field};

    #[test]
    fn test_lists_errors_by_wire_name() {
        let draft = DraftRecord::from(&BiodataRecord::seed())
            .with(Field::ProfilePic, "not a url")
            .with(Field::Age, "0");
        let errors = validate(&draft);
        let result = present_validation(draft, errors);

        let text = result.content.create_view(false).to_string();
        assert_eq!(
            text,
            "  age: Age must be a number between 1 and 120\n  profilePic: Profile picture must be a valid URL\n"
        );
    }
}
