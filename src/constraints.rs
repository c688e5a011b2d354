//! Native constraint evaluation
//!
//! The slice of the browser's built-in form-constraint checking the page
//! script relied on: `required`, email type mismatch, `minlength` /
//! `maxlength`, `pattern`, numeric `min` / `max`, and the custom-validity
//! channel. Submit and hidden controls do not participate.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::document::{DocumentResult, ElementId, InputKind, InputNode, MemoryDocument};

/// Per-control validity state, one flag per native constraint.
///
/// `valid` is derived: true iff every flag is clear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputValidity {
	pub value_missing: bool,
	pub type_mismatch: bool,
	pub pattern_mismatch: bool,
	pub too_short: bool,
	pub too_long: bool,
	pub range_underflow: bool,
	pub range_overflow: bool,
	pub bad_input: bool,
	pub custom_error: bool,
	pub valid: bool,
}

impl InputValidity {
	fn finish(mut self) -> Self {
		self.valid = !(self.value_missing
			|| self.type_mismatch
			|| self.pattern_mismatch
			|| self.too_short
			|| self.too_long
			|| self.range_underflow
			|| self.range_overflow
			|| self.bad_input
			|| self.custom_error);
		self
	}
}

// Loose shape the native email type check accepts: one `@` separating a
// non-empty local part and domain, no whitespace. Deliberately looser than
// the live-validation regex, which additionally demands a dotted domain.
fn is_plausible_email(value: &str) -> bool {
	if value.chars().any(char::is_whitespace) {
		return false;
	}
	let Some((local, domain)) = value.split_once('@') else {
		return false;
	};
	!local.is_empty() && !domain.is_empty() && !domain.contains('@')
}

fn parse_i64_attr(input: &InputNode, name: &str) -> Option<i64> {
	input.attrs.get(name)?.trim().parse().ok()
}

impl MemoryDocument {
	/// Evaluate the native constraint validity of one control.
	pub fn input_validity(&self, field: ElementId) -> DocumentResult<InputValidity> {
		let input = self.input_node(field)?;
		let mut validity = InputValidity::default();

		if !input.kind.participates_in_constraint_validation() {
			return Ok(validity.finish());
		}

		let value = input.value.as_str();

		if input.required {
			validity.value_missing = match input.kind {
				InputKind::Checkbox => !input.checked,
				_ => value.is_empty(),
			};
		}

		if !value.is_empty() {
			if input.kind == InputKind::Email {
				validity.type_mismatch = !is_plausible_email(value);
			}

			if input.kind.is_textual() {
				let char_count = value.chars().count() as i64;
				if let Some(min_length) = parse_i64_attr(input, "minlength")
					&& min_length >= 0 && char_count < min_length
				{
					validity.too_short = true;
				}
				if let Some(max_length) = parse_i64_attr(input, "maxlength")
					&& max_length >= 0 && char_count > max_length
				{
					validity.too_long = true;
				}
				if let Some(pattern) = input.attrs.get("pattern")
					&& !pattern.is_empty()
				{
					// Patterns match the full value. A pattern that fails to
					// compile is ignored, as the browser ignores it.
					if let Ok(regex) = Regex::new(&format!("^(?:{pattern})$"))
						&& !regex.is_match(value)
					{
						validity.pattern_mismatch = true;
					}
				}
			}

			if input.kind == InputKind::Number {
				match value.trim().parse::<i64>() {
					Ok(number) => {
						if let Some(min) = parse_i64_attr(input, "min")
							&& number < min
						{
							validity.range_underflow = true;
						}
						if let Some(max) = parse_i64_attr(input, "max")
							&& number > max
						{
							validity.range_overflow = true;
						}
					}
					Err(_) => validity.bad_input = true,
				}
			}
		}

		validity.custom_error = !input.custom_validity.is_empty();
		Ok(validity.finish())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::document::{FormDocument, FormSpec, InputSpec};
	use rstest::rstest;

	fn single_input_doc(spec: InputSpec) -> (MemoryDocument, ElementId) {
		let mut doc = MemoryDocument::new();
		let form = doc.add_form(FormSpec::new().custom_validated());
		let field = doc.add_input(form, spec).unwrap();
		(doc, field)
	}

	#[rstest]
	fn test_required_empty_value_is_missing() {
		// Arrange
		let (doc, field) = single_input_doc(InputSpec::new(InputKind::Text).required());

		// Act
		let validity = doc.input_validity(field).unwrap();

		// Assert
		assert!(validity.value_missing);
		assert!(!validity.valid);
	}

	#[rstest]
	fn test_required_checkbox_uses_checked_state() {
		// Arrange
		let (mut doc, field) =
			single_input_doc(InputSpec::new(InputKind::Checkbox).required());

		// Act & Assert
		assert!(doc.input_validity(field).unwrap().value_missing);
		doc.set_checked(field, true).unwrap();
		assert!(doc.input_validity(field).unwrap().valid);
	}

	#[rstest]
	#[case("reader@example.com", false)]
	#[case("reader@localhost", false)]
	#[case("no-at-sign", true)]
	#[case("two@@example.com", true)]
	#[case("spaced name@example.com", true)]
	fn test_email_type_mismatch(#[case] value: &str, #[case] mismatch: bool) {
		// Arrange
		let (doc, field) =
			single_input_doc(InputSpec::new(InputKind::Email).with_value(value));

		// Act
		let validity = doc.input_validity(field).unwrap();

		// Assert
		assert_eq!(validity.type_mismatch, mismatch);
	}

	#[rstest]
	fn test_empty_optional_email_is_valid() {
		// Arrange
		let (doc, field) = single_input_doc(InputSpec::new(InputKind::Email));

		// Act & Assert
		assert!(doc.input_validity(field).unwrap().valid);
	}

	#[rstest]
	#[case("abcde", 6, true)]
	#[case("abcdef", 6, false)]
	fn test_minlength_counts_characters(
		#[case] value: &str,
		#[case] min_length: i64,
		#[case] too_short: bool,
	) {
		// Arrange
		let (doc, field) = single_input_doc(
			InputSpec::new(InputKind::Password)
				.with_value(value)
				.with_attr("minlength", min_length.to_string()),
		);

		// Act & Assert
		assert_eq!(doc.input_validity(field).unwrap().too_short, too_short);
	}

	#[rstest]
	fn test_minlength_counts_multibyte_characters_not_bytes() {
		// Arrange: five CJK characters are five characters
		let (doc, field) = single_input_doc(
			InputSpec::new(InputKind::Text)
				.with_value("こんにちは")
				.with_attr("minlength", "5"),
		);

		// Act & Assert
		assert!(!doc.input_validity(field).unwrap().too_short);
	}

	#[rstest]
	fn test_pattern_is_anchored_to_the_full_value() {
		// Arrange
		let (doc, field) = single_input_doc(
			InputSpec::new(InputKind::Text)
				.with_value("abc123")
				.with_attr("pattern", "[a-z]+"),
		);

		// Act & Assert
		assert!(doc.input_validity(field).unwrap().pattern_mismatch);
	}

	#[rstest]
	fn test_uncompilable_pattern_is_ignored() {
		// Arrange
		let (doc, field) = single_input_doc(
			InputSpec::new(InputKind::Text)
				.with_value("anything")
				.with_attr("pattern", "(unclosed"),
		);

		// Act & Assert
		assert!(doc.input_validity(field).unwrap().valid);
	}

	#[rstest]
	#[case("0", true, false)]
	#[case("1", false, false)]
	#[case("10", false, false)]
	#[case("11", false, true)]
	fn test_number_range_flags(
		#[case] value: &str,
		#[case] underflow: bool,
		#[case] overflow: bool,
	) {
		// Arrange
		let (doc, field) = single_input_doc(
			InputSpec::new(InputKind::Number)
				.with_value(value)
				.with_attr("min", "1")
				.with_attr("max", "10"),
		);

		// Act
		let validity = doc.input_validity(field).unwrap();

		// Assert
		assert_eq!(validity.range_underflow, underflow);
		assert_eq!(validity.range_overflow, overflow);
	}

	#[rstest]
	fn test_non_numeric_number_value_is_bad_input() {
		// Arrange
		let (doc, field) = single_input_doc(
			InputSpec::new(InputKind::Number)
				.with_value("many")
				.with_attr("min", "1")
				.with_attr("max", "10"),
		);

		// Act & Assert
		assert!(doc.input_validity(field).unwrap().bad_input);
	}

	#[rstest]
	fn test_custom_validity_message_marks_custom_error() {
		// Arrange
		let (mut doc, field) =
			single_input_doc(InputSpec::new(InputKind::Text).with_value("fine"));
		doc.set_custom_validity(field, "Passwords do not match").unwrap();

		// Act
		let validity = doc.input_validity(field).unwrap();

		// Assert
		assert!(validity.custom_error);
		assert!(!validity.valid);
	}

	#[rstest]
	fn test_submit_controls_do_not_participate() {
		// Arrange
		let (doc, field) =
			single_input_doc(InputSpec::new(InputKind::Submit).required());

		// Act & Assert
		assert!(doc.input_validity(field).unwrap().valid);
	}

	#[rstest]
	fn test_form_check_validity_is_a_conjunction() {
		// Arrange
		let mut doc = MemoryDocument::new();
		let form = doc.add_form(FormSpec::new().custom_validated());
		doc.add_input(form, InputSpec::new(InputKind::Text).with_value("ok"))
			.unwrap();
		let missing = doc
			.add_input(form, InputSpec::new(InputKind::Text).required())
			.unwrap();

		// Act & Assert
		assert!(!doc.check_validity(form).unwrap());
		doc.set_value(missing, "now present").unwrap();
		assert!(doc.check_validity(form).unwrap());
	}
}
