use crate::field::{FieldError, FieldResult, FormField, Widget};
use chrono::{Datelike, NaiveDate};

/// DateField for date input
pub struct DateField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
	pub input_formats: Vec<String>,
	pub required_message: Option<String>,
}

impl DateField {
	/// Create a new DateField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use conference_booking::fields::DateField;
	///
	/// let field = DateField::new("date".to_string());
	/// assert_eq!(field.name, "date");
	/// assert!(field.required);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: true,
			widget: Widget::DateInput,
			initial: None,
			input_formats: vec![
				"%Y-%m-%d".to_string(), // 2025-01-15 (browser date input)
				"%m/%d/%Y".to_string(), // 01/15/2025
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

	fn parse_date(&self, s: &str) -> Result<NaiveDate, String> {
		for format in &self.input_formats {
			if let Ok(date) = NaiveDate::parse_from_str(s, format) {
				// Reject dates with years outside the 4-digit range (1000-9999)
				// to prevent ambiguous 2-digit year interpretations.
				let year = date.year();
				if !(1000..=9999).contains(&year) {
					continue;
				}
				return Ok(date);
			}
		}
		Err("Enter a valid date with a 4-digit year".to_string())
	}
}

impl FormField for DateField {
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
		match value {
			None => {
				if self.required {
					Err(FieldError::required(self.required_message.as_deref()))
				} else {
					Ok(serde_json::Value::Null)
				}
			}
			Some(v) => {
				if v.is_null() {
					if self.required {
						return Err(FieldError::required(self.required_message.as_deref()));
					}
					return Ok(serde_json::Value::Null);
				}

				let s = v
					.as_str()
					.ok_or_else(|| FieldError::Invalid("Expected string".to_string()))?;

				let s = s.trim();

				if s.is_empty() {
					if self.required {
						return Err(FieldError::required(self.required_message.as_deref()));
					}
					return Ok(serde_json::Value::Null);
				}

				let date = self.parse_date(s).map_err(FieldError::Validation)?;

				// Return in ISO 8601 format
				Ok(serde_json::json!(date.format("%Y-%m-%d").to_string()))
			}
		}
	}
}
