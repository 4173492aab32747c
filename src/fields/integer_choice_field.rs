//! Choice field for select inputs over an integer range

use crate::field::{FieldError, FieldResult, FormField, Widget};
use std::ops::RangeInclusive;

/// Select field whose value must be an integer inside an inclusive range.
///
/// Select inputs submit strings, so the bound value may be either a JSON
/// number or the string form of one; both clean to a JSON number.
pub struct IntegerChoiceField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
	pub range: RangeInclusive<i64>,
	pub required_message: Option<String>,
}

impl IntegerChoiceField {
	/// Create a new IntegerChoiceField covering `range`.
	///
	/// # Examples
	///
	/// ```
	/// use conference_booking::fields::IntegerChoiceField;
	///
	/// let field = IntegerChoiceField::new("floor".to_string(), 3..=27);
	/// assert_eq!(field.name, "floor");
	/// assert!(field.required);
	/// ```
	pub fn new(name: String, range: RangeInclusive<i64>) -> Self {
		Self {
			name,
			label: None,
			required: true,
			widget: Widget::Select,
			initial: None,
			range,
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

	/// The selectable values, in ascending order.
	///
	/// # Examples
	///
	/// ```
	/// use conference_booking::fields::IntegerChoiceField;
	///
	/// let field = IntegerChoiceField::new("room".to_string(), 1..=10);
	/// assert_eq!(field.values().count(), 10);
	/// ```
	pub fn values(&self) -> impl Iterator<Item = i64> {
		self.range.clone()
	}
}

impl FormField for IntegerChoiceField {
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
		let parsed: Option<i64> = match value {
			None => None,
			Some(v) if v.is_null() => None,
			Some(v) => {
				if let Some(n) = v.as_i64() {
					Some(n)
				} else if let Some(s) = v.as_str() {
					let s = s.trim();
					if s.is_empty() {
						None
					} else {
						Some(s.parse::<i64>().map_err(|_| {
							FieldError::Validation(format!("Enter a whole number, not {:?}", s))
						})?)
					}
				} else {
					return Err(FieldError::Invalid("Expected number or string".to_string()));
				}
			}
		};

		match parsed {
			None if self.required => Err(FieldError::required(self.required_message.as_deref())),
			None => Ok(serde_json::Value::Null),
			Some(n) => {
				if !self.range.contains(&n) {
					return Err(FieldError::Validation(format!(
						"Select a value between {} and {}",
						self.range.start(),
						self.range.end()
					)));
				}
				Ok(serde_json::json!(n))
			}
		}
	}

	fn choices(&self) -> Option<Vec<(String, String)>> {
		Some(
			self.range
				.clone()
				.map(|n| (n.to_string(), n.to_string()))
				.collect(),
		)
	}
}
