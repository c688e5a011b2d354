//! Page document model
//!
//! The binder never touches a real browser page. It works against the
//! [`FormDocument`] capability, which exposes exactly the operations the
//! validation layer needs: form discovery, field lookup, value and
//! attribute access, custom-validity annotation, class list mutation, and
//! native constraint checking. [`MemoryDocument`] is the shipped
//! implementation, built from page markup descriptions and used by the
//! tests and the known bookstore pages.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constraints::InputValidity;

/// Handle to one element owned by a document.
///
/// The document owns every element; handles are only valid for the
/// document that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub(crate) usize);

/// Input control kinds relevant to the validation layer.
///
/// Unknown markup `type` attributes collapse to [`InputKind::Text`], the
/// same fallback the browser applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
	Text,
	Email,
	Password,
	Number,
	Checkbox,
	Hidden,
	Submit,
}

impl InputKind {
	/// Map a markup `type` attribute to an input kind.
	///
	/// # Examples
	///
	/// ```
	/// use bookstore_forms::InputKind;
	///
	/// assert_eq!(InputKind::from_type_attr("EMAIL"), InputKind::Email);
	/// assert_eq!(InputKind::from_type_attr("datetime-local"), InputKind::Text);
	/// ```
	pub fn from_type_attr(value: &str) -> Self {
		if value.eq_ignore_ascii_case("email") {
			Self::Email
		} else if value.eq_ignore_ascii_case("password") {
			Self::Password
		} else if value.eq_ignore_ascii_case("number") {
			Self::Number
		} else if value.eq_ignore_ascii_case("checkbox") {
			Self::Checkbox
		} else if value.eq_ignore_ascii_case("hidden") {
			Self::Hidden
		} else if value.eq_ignore_ascii_case("submit") {
			Self::Submit
		} else {
			Self::Text
		}
	}

	/// Whether controls of this kind take part in constraint validation.
	pub fn participates_in_constraint_validation(self) -> bool {
		!matches!(self, Self::Submit | Self::Hidden)
	}

	/// Whether the control carries free text subject to length and pattern
	/// constraints.
	pub fn is_textual(self) -> bool {
		matches!(self, Self::Text | Self::Email | Self::Password)
	}
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
	#[error("unknown element id: {0:?}")]
	UnknownElement(ElementId),
	#[error("element {0:?} is not a form")]
	NotAForm(ElementId),
	#[error("element {0:?} is not an input control")]
	NotAnInput(ElementId),
}

pub type DocumentResult<T> = Result<T, DocumentError>;

/// Injected page capability consumed by the validation layer.
///
/// Mirrors the slice of the browser contract the original page script
/// relied on: query forms and inputs, read values and attributes, attach a
/// custom-validity message (the empty string clears it), toggle classes,
/// and evaluate native constraint validity.
pub trait FormDocument {
	/// Forms that opted into script-driven validation via the `novalidate`
	/// marker.
	fn forms_with_custom_validation(&self) -> Vec<ElementId>;

	/// The form's markup `id` attribute, if it has one.
	fn form_dom_id(&self, form: ElementId) -> DocumentResult<Option<String>>;

	/// The input controls belonging to a form, in document order.
	fn form_controls(&self, form: ElementId) -> DocumentResult<Vec<ElementId>>;

	/// Every input control of the given kind, document-wide.
	fn inputs_of_kind(&self, kind: InputKind) -> Vec<ElementId>;

	/// Look up a control inside a form by its markup `id` attribute.
	fn field_by_dom_id(
		&self,
		form: ElementId,
		dom_id: &str,
	) -> DocumentResult<Option<ElementId>>;

	/// The control's kind.
	fn input_kind(&self, field: ElementId) -> DocumentResult<InputKind>;

	/// The control's markup `id` attribute, if it has one.
	fn field_dom_id(&self, field: ElementId) -> DocumentResult<Option<String>>;

	/// The control's current string value.
	fn field_value(&self, field: ElementId) -> DocumentResult<String>;

	/// A markup attribute of the control (`min`, `max`, `pattern`, ...).
	fn attr(&self, field: ElementId, name: &str) -> DocumentResult<Option<String>>;

	/// Attach a custom-validity message to the control. The empty string
	/// clears the annotation.
	fn set_custom_validity(&mut self, field: ElementId, message: &str) -> DocumentResult<()>;

	/// The control's current custom-validity message (empty when clear).
	fn custom_validity(&self, field: ElementId) -> DocumentResult<String>;

	/// Add a class to the form's class list. Adding a present class is a
	/// no-op, matching `classList.add`.
	fn add_class(&mut self, form: ElementId, class: &str) -> DocumentResult<()>;

	/// Whether the form's class list contains the class.
	fn has_class(&self, form: ElementId, class: &str) -> DocumentResult<bool>;

	/// Native constraint validity of one control.
	fn validity(&self, field: ElementId) -> DocumentResult<InputValidity>;

	/// Native constraint validity of a whole form: the conjunction over its
	/// controls.
	fn check_validity(&self, form: ElementId) -> DocumentResult<bool> {
		for control in self.form_controls(form)? {
			if !self.validity(control)?.valid {
				return Ok(false);
			}
		}
		Ok(true)
	}
}

/// Markup description of a form element.
#[derive(Debug, Clone, Default)]
pub struct FormSpec {
	pub(crate) dom_id: Option<String>,
	pub(crate) custom_validated: bool,
}

impl FormSpec {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the markup `id` attribute.
	pub fn with_dom_id(mut self, dom_id: impl Into<String>) -> Self {
		self.dom_id = Some(dom_id.into());
		self
	}

	/// Opt the form into script-driven validation (the `novalidate`
	/// marker).
	pub fn custom_validated(mut self) -> Self {
		self.custom_validated = true;
		self
	}
}

/// Markup description of an input control.
///
/// # Examples
///
/// ```
/// use bookstore_forms::{InputKind, InputSpec};
///
/// let spec = InputSpec::new(InputKind::Number)
/// 	.with_dom_id("quantity")
/// 	.with_value("3")
/// 	.with_attr("min", "1")
/// 	.with_attr("max", "10")
/// 	.required();
/// ```
#[derive(Debug, Clone)]
pub struct InputSpec {
	pub(crate) dom_id: Option<String>,
	pub(crate) kind: InputKind,
	pub(crate) value: String,
	pub(crate) required: bool,
	pub(crate) checked: bool,
	pub(crate) attrs: Vec<(String, String)>,
}

impl InputSpec {
	pub fn new(kind: InputKind) -> Self {
		Self {
			dom_id: None,
			kind,
			value: String::new(),
			required: false,
			checked: false,
			attrs: vec![],
		}
	}

	/// Set the markup `id` attribute.
	pub fn with_dom_id(mut self, dom_id: impl Into<String>) -> Self {
		self.dom_id = Some(dom_id.into());
		self
	}

	/// Set the initial value.
	pub fn with_value(mut self, value: impl Into<String>) -> Self {
		self.value = value.into();
		self
	}

	/// Mark the control as required.
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Mark the control as checked (checkbox kinds).
	pub fn checked(mut self) -> Self {
		self.checked = true;
		self
	}

	/// Set a markup attribute such as `min`, `max`, `minlength`,
	/// `maxlength`, or `pattern`.
	pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}
}

#[derive(Debug)]
pub(crate) struct FormNode {
	pub(crate) dom_id: Option<String>,
	pub(crate) custom_validated: bool,
	pub(crate) classes: Vec<String>,
	pub(crate) controls: Vec<ElementId>,
}

#[derive(Debug)]
pub(crate) struct InputNode {
	pub(crate) dom_id: Option<String>,
	pub(crate) kind: InputKind,
	pub(crate) value: String,
	pub(crate) required: bool,
	pub(crate) checked: bool,
	pub(crate) attrs: HashMap<String, String>,
	pub(crate) custom_validity: String,
}

#[derive(Debug)]
pub(crate) enum Node {
	Form(FormNode),
	Input(InputNode),
}

/// In-memory page document.
///
/// Elements live in an arena indexed by [`ElementId`]; forms record their
/// controls in document order. Construction mirrors the markup the page
/// templates would emit.
///
/// # Examples
///
/// ```
/// use bookstore_forms::{FormDocument, FormSpec, InputKind, InputSpec, MemoryDocument};
///
/// let mut doc = MemoryDocument::new();
/// let form = doc.add_form(FormSpec::new().with_dom_id("loginForm").custom_validated());
/// let email = doc
/// 	.add_input(form, InputSpec::new(InputKind::Email).with_value("reader@example.com"))
/// 	.unwrap();
///
/// assert_eq!(doc.forms_with_custom_validation(), vec![form]);
/// assert_eq!(doc.field_value(email).unwrap(), "reader@example.com");
/// ```
#[derive(Debug, Default)]
pub struct MemoryDocument {
	elements: Vec<Node>,
}

impl MemoryDocument {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a form element described by `spec`.
	pub fn add_form(&mut self, spec: FormSpec) -> ElementId {
		let id = ElementId(self.elements.len());
		self.elements.push(Node::Form(FormNode {
			dom_id: spec.dom_id,
			custom_validated: spec.custom_validated,
			classes: vec![],
			controls: vec![],
		}));
		id
	}

	/// Add an input control to `form`.
	pub fn add_input(&mut self, form: ElementId, spec: InputSpec) -> DocumentResult<ElementId> {
		let id = ElementId(self.elements.len());
		match self.elements.get_mut(form.0) {
			Some(Node::Form(node)) => node.controls.push(id),
			Some(Node::Input(_)) => return Err(DocumentError::NotAForm(form)),
			None => return Err(DocumentError::UnknownElement(form)),
		}
		self.elements.push(Node::Input(InputNode {
			dom_id: spec.dom_id,
			kind: spec.kind,
			value: spec.value,
			required: spec.required,
			checked: spec.checked,
			attrs: spec.attrs.into_iter().collect(),
			custom_validity: String::new(),
		}));
		Ok(id)
	}

	/// Overwrite a control's current value, as user input would.
	pub fn set_value(&mut self, field: ElementId, value: impl Into<String>) -> DocumentResult<()> {
		self.input_node_mut(field)?.value = value.into();
		Ok(())
	}

	/// Set a checkbox control's checked state.
	pub fn set_checked(&mut self, field: ElementId, checked: bool) -> DocumentResult<()> {
		self.input_node_mut(field)?.checked = checked;
		Ok(())
	}

	/// Find a form by its markup `id` attribute.
	pub fn form_by_dom_id(&self, dom_id: &str) -> Option<ElementId> {
		self.elements.iter().enumerate().find_map(|(index, node)| match node {
			Node::Form(form) if form.dom_id.as_deref() == Some(dom_id) => {
				Some(ElementId(index))
			}
			_ => None,
		})
	}

	fn node(&self, id: ElementId) -> DocumentResult<&Node> {
		self.elements.get(id.0).ok_or(DocumentError::UnknownElement(id))
	}

	fn node_mut(&mut self, id: ElementId) -> DocumentResult<&mut Node> {
		self.elements
			.get_mut(id.0)
			.ok_or(DocumentError::UnknownElement(id))
	}

	fn form_node(&self, id: ElementId) -> DocumentResult<&FormNode> {
		match self.node(id)? {
			Node::Form(node) => Ok(node),
			Node::Input(_) => Err(DocumentError::NotAForm(id)),
		}
	}

	pub(crate) fn input_node(&self, id: ElementId) -> DocumentResult<&InputNode> {
		match self.node(id)? {
			Node::Input(node) => Ok(node),
			Node::Form(_) => Err(DocumentError::NotAnInput(id)),
		}
	}

	fn input_node_mut(&mut self, id: ElementId) -> DocumentResult<&mut InputNode> {
		match self.node_mut(id)? {
			Node::Input(node) => Ok(node),
			Node::Form(_) => Err(DocumentError::NotAnInput(id)),
		}
	}
}

impl FormDocument for MemoryDocument {
	fn forms_with_custom_validation(&self) -> Vec<ElementId> {
		self.elements
			.iter()
			.enumerate()
			.filter_map(|(index, node)| match node {
				Node::Form(form) if form.custom_validated => Some(ElementId(index)),
				_ => None,
			})
			.collect()
	}

	fn form_dom_id(&self, form: ElementId) -> DocumentResult<Option<String>> {
		Ok(self.form_node(form)?.dom_id.clone())
	}

	fn form_controls(&self, form: ElementId) -> DocumentResult<Vec<ElementId>> {
		Ok(self.form_node(form)?.controls.clone())
	}

	fn inputs_of_kind(&self, kind: InputKind) -> Vec<ElementId> {
		self.elements
			.iter()
			.enumerate()
			.filter_map(|(index, node)| match node {
				Node::Input(input) if input.kind == kind => Some(ElementId(index)),
				_ => None,
			})
			.collect()
	}

	fn field_by_dom_id(
		&self,
		form: ElementId,
		dom_id: &str,
	) -> DocumentResult<Option<ElementId>> {
		for control in &self.form_node(form)?.controls {
			if self.input_node(*control)?.dom_id.as_deref() == Some(dom_id) {
				return Ok(Some(*control));
			}
		}
		Ok(None)
	}

	fn input_kind(&self, field: ElementId) -> DocumentResult<InputKind> {
		Ok(self.input_node(field)?.kind)
	}

	fn field_dom_id(&self, field: ElementId) -> DocumentResult<Option<String>> {
		Ok(self.input_node(field)?.dom_id.clone())
	}

	fn field_value(&self, field: ElementId) -> DocumentResult<String> {
		Ok(self.input_node(field)?.value.clone())
	}

	fn attr(&self, field: ElementId, name: &str) -> DocumentResult<Option<String>> {
		Ok(self.input_node(field)?.attrs.get(name).cloned())
	}

	fn set_custom_validity(&mut self, field: ElementId, message: &str) -> DocumentResult<()> {
		self.input_node_mut(field)?.custom_validity = message.to_string();
		Ok(())
	}

	fn custom_validity(&self, field: ElementId) -> DocumentResult<String> {
		Ok(self.input_node(field)?.custom_validity.clone())
	}

	fn add_class(&mut self, form: ElementId, class: &str) -> DocumentResult<()> {
		let node = match self.node_mut(form)? {
			Node::Form(node) => node,
			Node::Input(_) => return Err(DocumentError::NotAForm(form)),
		};
		if !node.classes.iter().any(|existing| existing == class) {
			node.classes.push(class.to_string());
		}
		Ok(())
	}

	fn has_class(&self, form: ElementId, class: &str) -> DocumentResult<bool> {
		Ok(self
			.form_node(form)?
			.classes
			.iter()
			.any(|existing| existing == class))
	}

	fn validity(&self, field: ElementId) -> DocumentResult<InputValidity> {
		self.input_validity(field)
	}
}
