//! Core of the biodata application.
//!
//! - [`validator`]: pure field rules applied to a draft before commit
//! - [`BiodataStore`]: the single shared record with merge-style updates
//! - [`EditSession`]: draft state machine behind the Edit view
//! - [`Navigator`]: active view selection
//! - [`BiodataApp`]: controller wiring the above for a renderer

pub mod app;
pub mod draft;
pub mod navigator;
pub mod store;
pub mod validator;

pub use app::BiodataApp;
pub use draft::{DraftState, EditSession};
pub use navigator::{NavItem, Navigator};
pub use store::{BiodataStore, SubscriptionId};
pub use validator::{validate, validate_field, validate_record};

pub use biodata_types::{
    BiodataPatch, BiodataRecord, DraftRecord, Error, Field, FieldErrors, Result, ViewName,
};
