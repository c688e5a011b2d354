//! Serializable validation snapshots
//!
//! A [`DocumentReport`] captures the validation state of every opted-in
//! form: the validated marker, native validity, and each control's value
//! and custom-validity message. Plain data, so it serializes for
//! diagnostics or handoff without dragging the document along.

use serde::{Deserialize, Serialize};

use crate::binder::VALIDATED_CLASS;
use crate::constraints::InputValidity;
use crate::document::{DocumentResult, FormDocument, InputKind};

/// Snapshot of one control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldReport {
	/// Markup `id` attribute, if any
	pub dom_id: Option<String>,
	/// Control kind
	pub kind: InputKind,
	/// Current value
	pub value: String,
	/// Current custom-validity message (empty when clear)
	pub custom_validity: String,
	/// Native constraint validity
	pub validity: InputValidity,
}

/// Snapshot of one opted-in form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormReport {
	/// Markup `id` attribute, if any
	pub dom_id: Option<String>,
	/// Whether submit interception has marked the form validated
	pub validated: bool,
	/// Form-level native constraint validity
	pub valid: bool,
	/// Per-control snapshots, in document order
	pub fields: Vec<FieldReport>,
}

/// Snapshot of every form the validation layer manages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReport {
	pub forms: Vec<FormReport>,
}

impl DocumentReport {
	/// Serializes the report to JSON.
	pub fn to_json(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string(self)
	}
}

/// Extension trait extracting a [`DocumentReport`] from a document.
///
/// # Examples
///
/// ```
/// use bookstore_forms::report::ReportExt;
/// use bookstore_forms::{FormSpec, InputKind, InputSpec, MemoryDocument};
///
/// let mut doc = MemoryDocument::new();
/// let form = doc.add_form(FormSpec::new().with_dom_id("orderForm").custom_validated());
/// doc.add_input(form, InputSpec::new(InputKind::Number).with_dom_id("quantity"))
/// 	.unwrap();
///
/// let report = doc.to_report().unwrap();
/// assert_eq!(report.forms.len(), 1);
/// assert_eq!(report.forms[0].fields[0].dom_id.as_deref(), Some("quantity"));
/// ```
pub trait ReportExt {
	fn to_report(&self) -> DocumentResult<DocumentReport>;
}

impl<D: FormDocument> ReportExt for D {
	fn to_report(&self) -> DocumentResult<DocumentReport> {
		let mut forms = Vec::new();
		for form in self.forms_with_custom_validation() {
			let mut fields = Vec::new();
			for control in self.form_controls(form)? {
				fields.push(FieldReport {
					dom_id: self.field_dom_id(control)?,
					kind: self.input_kind(control)?,
					value: self.field_value(control)?,
					custom_validity: self.custom_validity(control)?,
					validity: self.validity(control)?,
				});
			}
			forms.push(FormReport {
				dom_id: self.form_dom_id(form)?,
				validated: self.has_class(form, VALIDATED_CLASS)?,
				valid: self.check_validity(form)?,
				fields,
			});
		}
		Ok(DocumentReport { forms })
	}
}
