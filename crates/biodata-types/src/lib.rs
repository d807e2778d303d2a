pub mod error;
pub mod field;
pub mod record;
pub mod view;

pub use error::{Error, FieldErrors, Result};
pub use field::Field;
pub use record::{BiodataPatch, BiodataRecord, DraftRecord};
pub use view::ViewName;
