//! Delete confirmation helper
//!
//! Delete links on the bookstore pages ask the user before navigating.
//! The blocking dialog is an injected capability so the decision flow is
//! testable; closures implement it directly.

/// Message shown when the caller supplies none.
pub const DEFAULT_DELETE_MESSAGE: &str = "Are you sure you want to delete this item?";

/// Blocking confirmation capability. Returns true when the user accepts.
pub trait ConfirmPrompt {
	fn confirm(&mut self, message: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
	F: FnMut(&str) -> bool,
{
	fn confirm(&mut self, message: &str) -> bool {
		self(message)
	}
}

/// Ask the user to confirm a delete action.
///
/// Shows `message`, or [`DEFAULT_DELETE_MESSAGE`] when none is given, and
/// returns the user's decision; a `false` return is meant to cancel the
/// triggering action.
///
/// # Examples
///
/// ```
/// use bookstore_forms::confirm::{confirm_delete, DEFAULT_DELETE_MESSAGE};
///
/// let mut seen = String::new();
/// let mut prompt = |message: &str| {
/// 	seen = message.to_string();
/// 	true
/// };
///
/// assert!(confirm_delete(&mut prompt, None));
/// assert_eq!(seen, DEFAULT_DELETE_MESSAGE);
/// ```
pub fn confirm_delete(prompt: &mut dyn ConfirmPrompt, message: Option<&str>) -> bool {
	prompt.confirm(message.unwrap_or(DEFAULT_DELETE_MESSAGE))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_custom_message_is_passed_through() {
		// Arrange
		let mut seen = Vec::new();
		let mut prompt = |message: &str| {
			seen.push(message.to_string());
			false
		};

		// Act
		let accepted = confirm_delete(&mut prompt, Some("Remove this book?"));

		// Assert
		assert!(!accepted);
		assert_eq!(seen, vec!["Remove this book?".to_string()]);
	}

	#[rstest]
	fn test_decline_returns_false() {
		// Arrange
		let mut prompt = |_: &str| false;

		// Act & Assert
		assert!(!confirm_delete(&mut prompt, None));
	}

	#[rstest]
	fn test_accept_returns_true() {
		// Arrange
		let mut prompt = |_: &str| true;

		// Act & Assert
		assert!(confirm_delete(&mut prompt, None));
	}
}
