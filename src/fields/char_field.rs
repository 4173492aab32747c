//! Character field for text input

use crate::field::{FieldError, FieldResult, FormField, Widget};

/// Character field with length validation
#[derive(Debug, Clone)]
pub struct CharField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
	pub max_length: Option<usize>,
	pub strip: bool,
}

impl CharField {
	/// Create a new CharField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use conference_booking::fields::CharField;
	///
	/// let field = CharField::new("comments".to_string());
	/// assert_eq!(field.name, "comments");
	/// assert!(!field.required);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: false,
			widget: Widget::TextInput,
			initial: None,
			max_length: None,
			strip: true,
		}
	}

	/// Set the field as required
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Set the maximum length for the field
	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	/// Set the label for the field
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Set the widget for the field
	///
	/// # Examples
	///
	/// ```
	/// use conference_booking::fields::CharField;
	/// use conference_booking::field::Widget;
	///
	/// let field = CharField::new("comments".to_string()).with_widget(Widget::TextArea);
	/// assert_eq!(field.widget, Widget::TextArea);
	/// ```
	pub fn with_widget(mut self, widget: Widget) -> Self {
		self.widget = widget;
		self
	}
}

impl FormField for CharField {
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
		let str_value = match value {
			Some(v) => {
				if v.is_null() {
					None
				} else {
					Some(v.as_str().ok_or_else(|| {
						FieldError::Invalid("Value must be a string".to_string())
					})?)
				}
			}
			None => None,
		};

		let processed = match str_value {
			Some(v) => {
				let v = if self.strip { v.trim() } else { v };
				if v.is_empty() {
					if self.required {
						return Err(FieldError::required(None));
					}
					return Ok(serde_json::Value::String(String::new()));
				}
				v.to_string()
			}
			None => {
				if self.required {
					return Err(FieldError::required(None));
				}
				return Ok(serde_json::Value::String(String::new()));
			}
		};

		// Character count, not byte count, so multi-byte text is measured the
		// way a user counts it.
		let char_count = processed.chars().count();
		if let Some(max_length) = self.max_length
			&& char_count > max_length
		{
			return Err(FieldError::Validation(format!(
				"Ensure this value has at most {} characters (it has {})",
				max_length, char_count
			)));
		}

		Ok(serde_json::Value::String(processed))
	}
}
