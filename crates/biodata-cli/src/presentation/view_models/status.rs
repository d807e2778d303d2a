use serde::Serialize;

use super::common::StatusBadge;

/// Bottom line of the interactive UI
#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub status: Option<StatusBadge>,
    pub key_hints: Vec<KeyHint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyHint {
    pub key: String,
    pub action: String,
}
