use biodata_types::{DraftRecord, FieldErrors};

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatusBadge, ValidationViewModel,
};

pub fn present_validation(
    draft: DraftRecord,
    errors: FieldErrors,
) -> CommandResultViewModel<ValidationViewModel> {
    let valid = errors.is_empty();
    let count = errors.len();
    let result = CommandResultViewModel::new(ValidationViewModel {
        valid,
        draft,
        errors,
    });

    if valid {
        result.with_badge(StatusBadge::success("Draft is valid"))
    } else {
        result
            .with_badge(StatusBadge::error(format!("{} invalid field(s)", count)))
            .with_suggestion(
                Guidance::new("Override a field and validate again")
                    .with_command("biodata validate --set <FIELD>=<VALUE>"),
            )
    }
}
