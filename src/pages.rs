//! Known bookstore pages
//!
//! In-memory renditions of the markup the bookstore templates emit for
//! the pages that load the validation layer. They encode the element-id
//! contract the binder depends on and give tests and demos a page to
//! work against.

use crate::binder::{
	CONFIRM_PASSWORD_FIELD_ID, ORDER_FORM_ID, PASSWORD_FIELD_ID, QUANTITY_FIELD_ID,
	REGISTER_FORM_ID,
};
use crate::document::{FormSpec, InputKind, InputSpec, MemoryDocument};

/// Form id of the login form.
pub const LOGIN_FORM_ID: &str = "loginForm";

/// The registration page: name, email, and the password pair, all
/// required.
///
/// # Examples
///
/// ```
/// use bookstore_forms::pages::registration_page;
/// use bookstore_forms::REGISTER_FORM_ID;
///
/// let doc = registration_page();
/// assert!(doc.form_by_dom_id(REGISTER_FORM_ID).is_some());
/// ```
pub fn registration_page() -> MemoryDocument {
	let mut doc = MemoryDocument::new();
	let form = doc.add_form(FormSpec::new().with_dom_id(REGISTER_FORM_ID).custom_validated());
	doc.add_input(form, InputSpec::new(InputKind::Text).with_dom_id("name").required())
		.expect("registration form accepts inputs");
	doc.add_input(form, InputSpec::new(InputKind::Email).with_dom_id("email").required())
		.expect("registration form accepts inputs");
	doc.add_input(
		form,
		InputSpec::new(InputKind::Password)
			.with_dom_id(PASSWORD_FIELD_ID)
			.required(),
	)
	.expect("registration form accepts inputs");
	doc.add_input(
		form,
		InputSpec::new(InputKind::Password)
			.with_dom_id(CONFIRM_PASSWORD_FIELD_ID)
			.required(),
	)
	.expect("registration form accepts inputs");
	doc
}

/// The login page: email and password, both required.
pub fn login_page() -> MemoryDocument {
	let mut doc = MemoryDocument::new();
	let form = doc.add_form(FormSpec::new().with_dom_id(LOGIN_FORM_ID).custom_validated());
	doc.add_input(form, InputSpec::new(InputKind::Email).with_dom_id("email").required())
		.expect("login form accepts inputs");
	doc.add_input(
		form,
		InputSpec::new(InputKind::Password)
			.with_dom_id(PASSWORD_FIELD_ID)
			.required(),
	)
	.expect("login form accepts inputs");
	doc
}

/// The order page: a bounded quantity input, initially at the lower
/// bound.
pub fn order_page(min: i64, max: i64) -> MemoryDocument {
	let mut doc = MemoryDocument::new();
	let form = doc.add_form(FormSpec::new().with_dom_id(ORDER_FORM_ID).custom_validated());
	doc.add_input(
		form,
		InputSpec::new(InputKind::Number)
			.with_dom_id(QUANTITY_FIELD_ID)
			.with_value(min.to_string())
			.with_attr("min", min.to_string())
			.with_attr("max", max.to_string())
			.required(),
	)
	.expect("order form accepts inputs");
	doc
}
