use crate::field::{FieldError, FieldResult, FormField, Widget};
use chrono::NaiveTime;

/// TimeField for time-of-day input
///
/// Accepts `HH:MM` (browser time input) and `HH:MM:SS`; cleans to the
/// zero-padded 24h `HH:MM` form so cross-field comparisons see a uniform
/// representation.
pub struct TimeField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
	pub input_formats: Vec<String>,
	pub required_message: Option<String>,
}

impl TimeField {
	/// Create a new TimeField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use conference_booking::fields::TimeField;
	///
	/// let field = TimeField::new("start_time".to_string());
	/// assert_eq!(field.name, "start_time");
	/// assert!(field.required);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: true,
			widget: Widget::TimeInput,
			initial: None,
			input_formats: vec![
				"%H:%M".to_string(),    // 09:30
				"%H:%M:%S".to_string(), // 09:30:00
			],
			required_message: None,
		}
	}

	/// Set the label for the field
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Set the message returned when the field is required but empty.
	pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
		self.required_message = Some(message.into());
		self
	}

	fn parse_time(&self, s: &str) -> Result<NaiveTime, String> {
		for format in &self.input_formats {
			if let Ok(time) = NaiveTime::parse_from_str(s, format) {
				return Ok(time);
			}
		}
		Err("Enter a valid time".to_string())
	}
}

impl FormField for TimeField {
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

		let s = s.trim();

		if s.is_empty() {
			if self.required {
				return Err(FieldError::required(self.required_message.as_deref()));
			}
			return Ok(serde_json::Value::Null);
		}

		let time = self.parse_time(s).map_err(FieldError::Validation)?;

		Ok(serde_json::json!(time.format("%H:%M").to_string()))
	}
}
