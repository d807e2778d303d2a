use biodata_types::{DraftRecord, FieldErrors};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationViewModel {
    pub valid: bool,
    pub draft: DraftRecord,
    pub errors: FieldErrors,
}
