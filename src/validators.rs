//! Presentational validation rules
//!
//! The four checks the bookstore pages apply before a submission leaves
//! the browser: email shape, password length, password confirmation, and
//! quantity bounds. Each rule is a standalone validator with an
//! overridable message, so the binder and the tests exercise the same
//! predicates.

use std::sync::LazyLock;

use regex::Regex;

// Email shape used by live validation: one-or-more non-space/non-@
// characters, `@`, more of the same, `.`, more of the same.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

#[derive(Debug, thiserror::Error)]
pub enum FieldError {
	#[error("{0}")]
	Validation(String),
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Validates that a non-empty value looks like an email address.
///
/// An empty value passes: presence is the `required` constraint's
/// business, not this rule's.
///
/// # Examples
///
/// ```
/// use bookstore_forms::validators::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("reader@example.com").is_ok());
/// assert!(validator.validate("").is_ok());
/// assert!(validator.validate("not-an-email").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl EmailValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validates the given value.
	///
	/// Returns `Ok(())` for the empty string or a matching address, and a
	/// [`FieldError::Validation`] for anything else.
	///
	/// # Examples
	///
	/// ```
	/// use bookstore_forms::validators::EmailValidator;
	///
	/// let validator = EmailValidator::new();
	/// assert!(validator.validate("a@b.co").is_ok());
	/// assert!(validator.validate("a@b").is_err());
	/// ```
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if value.is_empty() || EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Please enter a valid email address");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

impl Default for EmailValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates that a non-empty password is long enough.
///
/// Length is counted in characters, not bytes. The empty string passes;
/// emptiness is deferred to the `required` constraint.
///
/// # Examples
///
/// ```
/// use bookstore_forms::validators::PasswordStrengthValidator;
///
/// let validator = PasswordStrengthValidator::new();
/// assert!(validator.validate("abcdef").is_ok());
/// assert!(validator.validate("abc").is_err());
/// assert!(validator.validate("").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PasswordStrengthValidator {
	min_length: usize,
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl PasswordStrengthValidator {
	pub fn new() -> Self {
		Self {
			min_length: 6,
			message: None,
		}
	}

	/// Sets the minimum accepted length in characters.
	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = min_length;
		self
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if value.is_empty() || value.chars().count() >= self.min_length {
			Ok(())
		} else {
			let msg = match &self.message {
				Some(message) => message.clone(),
				None => format!("Password must be at least {} characters", self.min_length),
			};
			Err(FieldError::Validation(msg))
		}
	}
}

impl Default for PasswordStrengthValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates that a password and its confirmation agree exactly.
///
/// # Examples
///
/// ```
/// use bookstore_forms::validators::PasswordMatchValidator;
///
/// let validator = PasswordMatchValidator::new();
/// assert!(validator.validate("abcdef", "abcdef").is_ok());
/// assert!(validator.validate("abcdef", "abcxyz").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PasswordMatchValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl PasswordMatchValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn validate(&self, password: &str, confirmation: &str) -> FieldResult<()> {
		if password == confirmation {
			Ok(())
		} else {
			let msg = self.message.as_deref().unwrap_or("Passwords do not match");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

impl Default for PasswordMatchValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates that an order quantity lies within its declared bounds.
///
/// The value must parse as an integer; a value that does not parse is
/// rejected with the same bounds message rather than silently passing.
///
/// # Examples
///
/// ```
/// use bookstore_forms::validators::QuantityBoundsValidator;
///
/// let validator = QuantityBoundsValidator::new(1, 10);
/// assert_eq!(validator.validate("3").unwrap(), 3);
/// assert!(validator.validate("15").is_err());
/// assert!(validator.validate("many").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct QuantityBoundsValidator {
	min: i64,
	max: i64,
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl QuantityBoundsValidator {
	pub fn new(min: i64, max: i64) -> Self {
		Self {
			min,
			max,
			message: None,
		}
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	fn bounds_message(&self) -> String {
		match &self.message {
			Some(message) => message.clone(),
			None => format!("Quantity must be between {} and {}", self.min, self.max),
		}
	}

	/// Validates the given value, returning the parsed quantity on success.
	pub fn validate(&self, value: &str) -> FieldResult<i64> {
		let quantity: i64 = value
			.trim()
			.parse()
			.map_err(|_| FieldError::Validation(self.bounds_message()))?;
		if quantity < self.min || quantity > self.max {
			Err(FieldError::Validation(self.bounds_message()))
		} else {
			Ok(quantity)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	// =========================================================================
	// EmailValidator tests
	// =========================================================================

	#[rstest]
	#[case("reader@example.com")]
	#[case("a@b.co")]
	#[case("first.last@sub.example.org")]
	#[case("name+tag@example.co.uk")]
	#[case("")]
	fn test_email_validator_valid(#[case] value: &str) {
		// Arrange
		let validator = EmailValidator::new();

		// Act
		let result = validator.validate(value);

		// Assert
		assert!(result.is_ok(), "Expected '{value}' to be accepted");
	}

	#[rstest]
	#[case("not-an-email")]
	#[case("missing-domain@")]
	#[case("@missing-local.com")]
	#[case("no-dot@domain")]
	#[case("spaces in@local.part")]
	#[case("double@@example.com")]
	fn test_email_validator_invalid(#[case] value: &str) {
		// Arrange
		let validator = EmailValidator::new();

		// Act
		let result = validator.validate(value);

		// Assert
		assert!(result.is_err(), "Expected '{value}' to be rejected");
	}

	#[rstest]
	fn test_email_validator_default_message() {
		// Arrange
		let validator = EmailValidator::new();

		// Act
		let result = validator.validate("not-an-email");

		// Assert
		match result {
			Err(FieldError::Validation(msg)) => {
				assert_eq!(msg, "Please enter a valid email address");
			}
			_ => panic!("Expected Validation error"),
		}
	}

	#[rstest]
	fn test_email_validator_custom_message() {
		// Arrange
		let validator = EmailValidator::new().with_message("Custom email error");

		// Act
		let result = validator.validate("bad");

		// Assert
		match result {
			Err(FieldError::Validation(msg)) => assert_eq!(msg, "Custom email error"),
			_ => panic!("Expected Validation error with custom message"),
		}
	}

	// =========================================================================
	// PasswordStrengthValidator tests
	// =========================================================================

	#[rstest]
	#[case("", true)]
	#[case("a", false)]
	#[case("abcde", false)]
	#[case("abcdef", true)]
	#[case("a-much-longer-password", true)]
	fn test_password_strength_boundaries(#[case] value: &str, #[case] ok: bool) {
		// Arrange
		let validator = PasswordStrengthValidator::new();

		// Act & Assert
		assert_eq!(validator.validate(value).is_ok(), ok, "value: '{value}'");
	}

	#[rstest]
	fn test_password_strength_counts_characters_not_bytes() {
		// Arrange: six CJK characters are six characters
		let validator = PasswordStrengthValidator::new();

		// Act & Assert
		assert!(validator.validate("あいうえおか").is_ok());
		assert!(validator.validate("あいうえお").is_err());
	}

	#[rstest]
	fn test_password_strength_default_message() {
		// Arrange
		let validator = PasswordStrengthValidator::new();

		// Act
		let result = validator.validate("abc");

		// Assert
		match result {
			Err(FieldError::Validation(msg)) => {
				assert_eq!(msg, "Password must be at least 6 characters");
			}
			_ => panic!("Expected Validation error"),
		}
	}

	#[rstest]
	fn test_password_strength_custom_minimum() {
		// Arrange
		let validator = PasswordStrengthValidator::new().with_min_length(10);

		// Act
		let result = validator.validate("short");

		// Assert
		match result {
			Err(FieldError::Validation(msg)) => {
				assert_eq!(msg, "Password must be at least 10 characters");
			}
			_ => panic!("Expected Validation error"),
		}
	}

	// =========================================================================
	// PasswordMatchValidator tests
	// =========================================================================

	#[rstest]
	#[case("abcdef", "abcdef", true)]
	#[case("abcdef", "abcxyz", false)]
	#[case("", "", true)]
	#[case("abcdef", "", false)]
	fn test_password_match(#[case] password: &str, #[case] confirmation: &str, #[case] ok: bool) {
		// Arrange
		let validator = PasswordMatchValidator::new();

		// Act & Assert
		assert_eq!(validator.validate(password, confirmation).is_ok(), ok);
	}

	#[rstest]
	fn test_password_match_default_message() {
		// Arrange
		let validator = PasswordMatchValidator::new();

		// Act
		let result = validator.validate("abcdef", "abcxyz");

		// Assert
		match result {
			Err(FieldError::Validation(msg)) => assert_eq!(msg, "Passwords do not match"),
			_ => panic!("Expected Validation error"),
		}
	}

	// =========================================================================
	// QuantityBoundsValidator tests
	// =========================================================================

	#[rstest]
	#[case("1")]
	#[case("5")]
	#[case("10")]
	#[case(" 7 ")]
	fn test_quantity_in_range(#[case] value: &str) {
		// Arrange
		let validator = QuantityBoundsValidator::new(1, 10);

		// Act & Assert
		assert!(validator.validate(value).is_ok(), "value: '{value}'");
	}

	#[rstest]
	#[case("0")]
	#[case("11")]
	#[case("15")]
	#[case("-3")]
	fn test_quantity_out_of_range(#[case] value: &str) {
		// Arrange
		let validator = QuantityBoundsValidator::new(1, 10);

		// Act
		let result = validator.validate(value);

		// Assert
		match result {
			Err(FieldError::Validation(msg)) => {
				assert_eq!(msg, "Quantity must be between 1 and 10");
			}
			_ => panic!("Expected '{value}' to be rejected"),
		}
	}

	#[rstest]
	#[case("many")]
	#[case("1.5")]
	#[case("")]
	fn test_quantity_non_integer_is_rejected(#[case] value: &str) {
		// Arrange
		let validator = QuantityBoundsValidator::new(1, 10);

		// Act & Assert
		assert!(validator.validate(value).is_err(), "value: '{value}'");
	}

	#[rstest]
	fn test_quantity_validation_is_idempotent() {
		// Arrange
		let validator = QuantityBoundsValidator::new(1, 10);

		// Act
		let first = validator.validate("15");
		let second = validator.validate("15");

		// Assert
		assert!(first.is_err());
		assert!(second.is_err());
	}
}
