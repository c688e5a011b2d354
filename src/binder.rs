//! Form validation binder
//!
//! Installation scans the document once and records which elements get
//! which handlers; dispatch runs the matching handler synchronously
//! against current document state. Nothing is remembered between events.
//!
//! Three passes, mirroring the page script this layer replaces:
//! - every form carrying the opt-in marker gets a submit interceptor;
//! - every email-kind input gets a blur handler;
//! - every password-kind input gets an input handler.

use crate::document::{DocumentResult, ElementId, FormDocument, InputKind};
use crate::events::{Event, EventKind};
use crate::validators::{
	EmailValidator, PasswordMatchValidator, PasswordStrengthValidator, QuantityBoundsValidator,
};

/// Form id that triggers the password-match rule on submit.
pub const REGISTER_FORM_ID: &str = "registerForm";
/// Form id that triggers the quantity-bounds rule on submit.
pub const ORDER_FORM_ID: &str = "orderForm";
/// Class added to a form once submit interception has run.
pub const VALIDATED_CLASS: &str = "was-validated";

/// Field id of the password input inside the registration form.
pub const PASSWORD_FIELD_ID: &str = "password";
/// Field id of the confirmation input inside the registration form.
pub const CONFIRM_PASSWORD_FIELD_ID: &str = "confirm_password";
/// Field id of the quantity input inside the order form.
pub const QUANTITY_FIELD_ID: &str = "quantity";

#[derive(Debug, Clone, Copy)]
enum Binding {
	Submit { form: ElementId },
	EmailBlur { field: ElementId },
	PasswordInput { field: ElementId },
}

/// What became of an intercepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// Every applicable rule passed; the submission goes through.
	Proceeded,
	/// A rule failed; the submission was suppressed.
	Blocked,
}

/// The installed validation layer for one document.
///
/// # Examples
///
/// ```
/// use bookstore_forms::{
/// 	FormSpec, InputKind, InputSpec, MemoryDocument, SubmitOutcome, ValidationBinder,
/// };
///
/// let mut doc = MemoryDocument::new();
/// let form = doc.add_form(FormSpec::new().with_dom_id("orderForm").custom_validated());
/// doc.add_input(
/// 	form,
/// 	InputSpec::new(InputKind::Number)
/// 		.with_dom_id("quantity")
/// 		.with_value("15")
/// 		.with_attr("min", "1")
/// 		.with_attr("max", "10"),
/// )
/// .unwrap();
///
/// let binder = ValidationBinder::install(&doc);
/// let outcome = binder.submit(&mut doc, form).unwrap();
/// assert_eq!(outcome, SubmitOutcome::Blocked);
/// ```
#[derive(Debug)]
pub struct ValidationBinder {
	bindings: Vec<Binding>,
	email: EmailValidator,
	password_strength: PasswordStrengthValidator,
	password_match: PasswordMatchValidator,
}

impl ValidationBinder {
	/// Scan the document and record the bindings. Runs once; finding no
	/// matching elements for a pass simply binds nothing for that pass.
	pub fn install<D: FormDocument + ?Sized>(doc: &D) -> Self {
		let mut bindings = Vec::new();

		let forms = doc.forms_with_custom_validation();
		tracing::debug!(forms = forms.len(), "binding submit interception");
		for form in forms {
			bindings.push(Binding::Submit { form });
		}

		let email_fields = doc.inputs_of_kind(InputKind::Email);
		tracing::debug!(fields = email_fields.len(), "binding live email validation");
		for field in email_fields {
			bindings.push(Binding::EmailBlur { field });
		}

		let password_fields = doc.inputs_of_kind(InputKind::Password);
		tracing::debug!(fields = password_fields.len(), "binding live password validation");
		for field in password_fields {
			bindings.push(Binding::PasswordInput { field });
		}

		Self {
			bindings,
			email: EmailValidator::new(),
			password_strength: PasswordStrengthValidator::new(),
			password_match: PasswordMatchValidator::new(),
		}
	}

	/// Number of installed bindings across all three passes.
	pub fn binding_count(&self) -> usize {
		self.bindings.len()
	}

	/// Run the handler bound to the event's target, if any. Events with no
	/// matching binding are ignored.
	pub fn dispatch<D: FormDocument + ?Sized>(
		&self,
		doc: &mut D,
		event: &mut Event,
	) -> DocumentResult<()> {
		for binding in &self.bindings {
			match (*binding, event.kind()) {
				(Binding::Submit { form }, EventKind::Submit) if form == event.target() => {
					return self.on_submit(doc, form, event);
				}
				(Binding::EmailBlur { field }, EventKind::Blur) if field == event.target() => {
					return self.on_email_blur(doc, field);
				}
				(Binding::PasswordInput { field }, EventKind::Input)
					if field == event.target() =>
				{
					return self.on_password_input(doc, field);
				}
				_ => {}
			}
		}
		Ok(())
	}

	/// Convenience wrapper: dispatch a submit event at `form` and report
	/// whether the submission went through.
	pub fn submit<D: FormDocument + ?Sized>(
		&self,
		doc: &mut D,
		form: ElementId,
	) -> DocumentResult<SubmitOutcome> {
		let mut event = Event::new(EventKind::Submit, form);
		self.dispatch(doc, &mut event)?;
		Ok(if event.default_prevented() {
			SubmitOutcome::Blocked
		} else {
			SubmitOutcome::Proceeded
		})
	}

	fn on_submit<D: FormDocument + ?Sized>(
		&self,
		doc: &mut D,
		form: ElementId,
		event: &mut Event,
	) -> DocumentResult<()> {
		if !doc.check_validity(form)? {
			event.prevent_default();
			event.stop_propagation();
		}

		// Error styling becomes visible whether or not the submission was
		// blocked.
		doc.add_class(form, VALIDATED_CLASS)?;

		match doc.form_dom_id(form)?.as_deref() {
			Some(REGISTER_FORM_ID) => self.apply_password_match(doc, form, event)?,
			Some(ORDER_FORM_ID) => self.apply_quantity_bounds(doc, form, event)?,
			_ => {}
		}
		Ok(())
	}

	fn apply_password_match<D: FormDocument + ?Sized>(
		&self,
		doc: &mut D,
		form: ElementId,
		event: &mut Event,
	) -> DocumentResult<()> {
		let password = doc.field_by_dom_id(form, PASSWORD_FIELD_ID)?;
		let confirmation = doc.field_by_dom_id(form, CONFIRM_PASSWORD_FIELD_ID)?;
		let (Some(password), Some(confirmation)) = (password, confirmation) else {
			tracing::debug!(?form, "password pair incomplete, match check skipped");
			return Ok(());
		};

		let password_value = doc.field_value(password)?;
		let confirmation_value = doc.field_value(confirmation)?;
		match self.password_match.validate(&password_value, &confirmation_value) {
			Ok(()) => doc.set_custom_validity(confirmation, "")?,
			Err(error) => {
				doc.set_custom_validity(confirmation, &error.to_string())?;
				event.prevent_default();
				event.stop_propagation();
			}
		}
		Ok(())
	}

	fn apply_quantity_bounds<D: FormDocument + ?Sized>(
		&self,
		doc: &mut D,
		form: ElementId,
		event: &mut Event,
	) -> DocumentResult<()> {
		let Some(quantity) = doc.field_by_dom_id(form, QUANTITY_FIELD_ID)? else {
			tracing::debug!(?form, "no quantity field, bounds check skipped");
			return Ok(());
		};

		let min = doc.attr(quantity, "min")?.and_then(|raw| raw.trim().parse::<i64>().ok());
		let max = doc.attr(quantity, "max")?.and_then(|raw| raw.trim().parse::<i64>().ok());
		let (Some(min), Some(max)) = (min, max) else {
			// min/max come from the page templates, not from user input. A
			// missing or unparseable bound is template drift, so the check
			// skips rather than punishing the user for it.
			tracing::warn!(?form, "quantity bounds missing or unparseable, check skipped");
			return Ok(());
		};

		let validator = QuantityBoundsValidator::new(min, max);
		match validator.validate(&doc.field_value(quantity)?) {
			Ok(_) => doc.set_custom_validity(quantity, "")?,
			Err(error) => {
				doc.set_custom_validity(quantity, &error.to_string())?;
				event.prevent_default();
				event.stop_propagation();
			}
		}
		Ok(())
	}

	fn on_email_blur<D: FormDocument + ?Sized>(
		&self,
		doc: &mut D,
		field: ElementId,
	) -> DocumentResult<()> {
		let value = doc.field_value(field)?;
		match self.email.validate(&value) {
			Ok(()) => doc.set_custom_validity(field, "")?,
			Err(error) => doc.set_custom_validity(field, &error.to_string())?,
		}
		Ok(())
	}

	fn on_password_input<D: FormDocument + ?Sized>(
		&self,
		doc: &mut D,
		field: ElementId,
	) -> DocumentResult<()> {
		let value = doc.field_value(field)?;
		match self.password_strength.validate(&value) {
			Ok(()) => doc.set_custom_validity(field, "")?,
			Err(error) => doc.set_custom_validity(field, &error.to_string())?,
		}
		Ok(())
	}
}
