use biodata_types::ViewName;

use crate::presentation::view_models::{KeyHint, StatusBadge, StatusBarViewModel};

pub fn present_status_bar(active: ViewName, status: Option<StatusBadge>) -> StatusBarViewModel {
    let hints: &[(&str, &str)] = match active {
        ViewName::Edit => &[
            ("Tab/↑↓", "field"),
            ("Enter", "save"),
            ("Esc", "cancel"),
            ("^C", "quit"),
        ],
        ViewName::Home | ViewName::Profile => &[
            ("1-3", "view"),
            ("←→", "cycle"),
            ("e", "edit"),
            ("q", "quit"),
        ],
    };

    StatusBarViewModel {
        status,
        key_hints: hints
            .iter()
            .map(|(key, action)| KeyHint {
                key: key.to_string(),
                action: action.to_string(),
            })
            .collect(),
    }
}
