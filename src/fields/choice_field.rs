//! Choice field for select inputs with string values

use crate::field::{FieldError, FieldResult, FormField, Widget};

/// Select field whose value must be one of a fixed set of string choices.
///
/// Choices are `(value, label)` pairs; the empty string is never a valid
/// choice and counts as "no value", matching the placeholder `<option>` of a
/// select input.
pub struct ChoiceField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
	pub choices: Vec<(String, String)>,
	pub required_message: Option<String>,
}

impl ChoiceField {
	/// Create a new ChoiceField with the given name and choices.
	///
	/// # Examples
	///
	/// ```
	/// use conference_booking::fields::ChoiceField;
	///
	/// let field = ChoiceField::new(
	/// 	"tower".to_string(),
	/// 	vec![("A".to_string(), "A".to_string()), ("B".to_string(), "B".to_string())],
	/// );
	/// assert_eq!(field.name, "tower");
	/// assert!(field.required);
	/// ```
	pub fn new(name: String, choices: Vec<(String, String)>) -> Self {
		Self {
			name,
			label: None,
			required: true,
			widget: Widget::Select,
			initial: None,
			choices,
			required_message: None,
		}
	}

	/// Set the label for the field
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Set the message returned when the field is required but empty.
	///
	/// # Examples
	///
	/// ```
	/// use conference_booking::fields::ChoiceField;
	/// use conference_booking::field::FormField;
	///
	/// let field = ChoiceField::new("tower".to_string(), vec![])
	/// 	.with_required_message("Please select a tower");
	/// let err = field.clean(None).unwrap_err();
	/// assert_eq!(err.to_string(), "Please select a tower");
	/// ```
	pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
		self.required_message = Some(message.into());
		self
	}

	fn is_valid_choice(&self, value: &str) -> bool {
		self.choices.iter().any(|(v, _)| v == value)
	}
}

impl FormField for ChoiceField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		self.required
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn initial(&self) -> Option<&serde_json::Value> {
		self.initial.as_ref()
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		let s = match value {
			None => "",
			Some(v) if v.is_null() => "",
			Some(v) => v
				.as_str()
				.ok_or_else(|| FieldError::Invalid("Expected string".to_string()))?,
		};

		if s.is_empty() {
			if self.required {
				return Err(FieldError::required(self.required_message.as_deref()));
			}
			return Ok(serde_json::Value::Null);
		}

		if !self.is_valid_choice(s) {
			return Err(FieldError::Validation(format!(
				"Select a valid choice. {} is not one of the available choices",
				s
			)));
		}

		Ok(serde_json::json!(s))
	}

	fn choices(&self) -> Option<Vec<(String, String)>> {
		Some(self.choices.clone())
	}
}
