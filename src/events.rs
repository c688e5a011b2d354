//! Synchronous event values dispatched by the host into the binder.
//!
//! Handlers run to completion before the next event; the only
//! "cancellation" is the `prevent_default` flag on an in-flight submit.

use crate::document::ElementId;

/// The event kinds the validation layer listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
	/// A form is about to submit.
	Submit,
	/// An input lost focus.
	Blur,
	/// An input received a keystroke.
	Input,
}

/// One event targeted at a document element.
#[derive(Debug, Clone)]
pub struct Event {
	kind: EventKind,
	target: ElementId,
	default_prevented: bool,
	propagation_stopped: bool,
}

impl Event {
	pub fn new(kind: EventKind, target: ElementId) -> Self {
		Self {
			kind,
			target,
			default_prevented: false,
			propagation_stopped: false,
		}
	}

	pub fn kind(&self) -> EventKind {
		self.kind
	}

	pub fn target(&self) -> ElementId {
		self.target
	}

	/// Suppress the event's default action. For a submit event this cancels
	/// the submission.
	pub fn prevent_default(&mut self) {
		self.default_prevented = true;
	}

	/// Stop the event from reaching further handlers.
	pub fn stop_propagation(&mut self) {
		self.propagation_stopped = true;
	}

	pub fn default_prevented(&self) -> bool {
		self.default_prevented
	}

	pub fn propagation_stopped(&self) -> bool {
		self.propagation_stopped
	}
}
