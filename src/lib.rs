//! Client-side form validation for the online bookstore
//!
//! This crate re-expresses the bookstore's page validation layer as an
//! injectable library:
//! - Submission interception for forms that opt in via the `novalidate`
//!   marker, with native constraint checking and the `was-validated`
//!   styling hook
//! - Password-confirmation and quantity-bounds rules keyed to the
//!   register and order forms
//! - Live email and password feedback bound to blur and input events
//! - Native constraint evaluation (required, email type, length, pattern,
//!   numeric range) over an injected document capability
//! - A confirmation prompt helper for delete actions
//! - Serializable validation snapshots for diagnostics
//!
//! Validation here is presentational. The server re-verifies everything;
//! nothing in this layer is a security boundary.

pub mod binder;
pub mod confirm;
pub mod constraints;
pub mod document;
pub mod events;
pub mod pages;
pub mod report;
pub mod validators;

pub use binder::{
	CONFIRM_PASSWORD_FIELD_ID, ORDER_FORM_ID, PASSWORD_FIELD_ID, QUANTITY_FIELD_ID,
	REGISTER_FORM_ID, SubmitOutcome, VALIDATED_CLASS, ValidationBinder,
};
pub use confirm::{ConfirmPrompt, DEFAULT_DELETE_MESSAGE, confirm_delete};
pub use constraints::InputValidity;
pub use document::{
	DocumentError, DocumentResult, ElementId, FormDocument, FormSpec, InputKind, InputSpec,
	MemoryDocument,
};
pub use events::{Event, EventKind};
pub use report::{DocumentReport, FieldReport, FormReport, ReportExt};
pub use validators::{
	EmailValidator, FieldError, FieldResult, PasswordMatchValidator, PasswordStrengthValidator,
	QuantityBoundsValidator,
};
