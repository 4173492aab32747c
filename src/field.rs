//! Core field abstractions: the [`FormField`] trait, widgets and field errors.

/// HTML widget used to render a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
	TextInput,
	TextArea,
	Select,
	DateInput,
	TimeInput,
}

/// Validation error produced by a single field.
///
/// Every variant carries the human-readable message that is displayed next to
/// the offending input. Errors are advisory; they are collected per field and
/// never propagate as panics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	/// The field is required and no value was supplied.
	#[error("{0}")]
	Required(String),
	/// The supplied value has the wrong shape (e.g. not a string).
	#[error("{0}")]
	Invalid(String),
	/// The supplied value failed a validation rule.
	#[error("{0}")]
	Validation(String),
}

impl FieldError {
	/// Build a `Required` error, using `message` when given or the generic
	/// fallback otherwise.
	///
	/// # Examples
	///
	/// ```
	/// use conference_booking::field::FieldError;
	///
	/// let err = FieldError::required(Some("Please select a tower"));
	/// assert_eq!(err.to_string(), "Please select a tower");
	///
	/// let err = FieldError::required(None);
	/// assert_eq!(err.to_string(), "This field is required");
	/// ```
	pub fn required(message: Option<&str>) -> Self {
		Self::Required(message.unwrap_or("This field is required").to_string())
	}
}

pub type FieldResult<T> = Result<T, FieldError>;

/// A single form field: knows its name, how it renders and how to clean a
/// bound value into its normalized JSON representation.
pub trait FormField: Send + Sync {
	fn name(&self) -> &str;
	fn label(&self) -> Option<&str>;
	fn required(&self) -> bool;
	fn widget(&self) -> &Widget;
	fn initial(&self) -> Option<&serde_json::Value>;

	/// Validate and normalize a bound value.
	///
	/// `None` and the empty string both count as "no value". Required fields
	/// reject missing values with their required message; optional fields
	/// clean them to `Value::Null` (or their empty representation).
	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value>;

	/// `(value, label)` option pairs for select widgets; `None` for fields
	/// that render as free inputs.
	fn choices(&self) -> Option<Vec<(String, String)>> {
		None
	}
}

/// Escape text for use inside an HTML element body.
///
/// # Examples
///
/// ```
/// use conference_booking::field::escape_html;
///
/// assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
/// ```
pub fn escape_html(value: &str) -> String {
	let mut out = String::with_capacity(value.len());
	for c in value.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			_ => out.push(c),
		}
	}
	out
}

/// Escape text for use inside a double-quoted HTML attribute.
///
/// # Examples
///
/// ```
/// use conference_booking::field::escape_attribute;
///
/// assert_eq!(escape_attribute("say \"hi\""), "say &quot;hi&quot;");
/// ```
pub fn escape_attribute(value: &str) -> String {
	let mut out = String::with_capacity(value.len());
	for c in value.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#x27;"),
			_ => out.push(c),
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_field_error_display_is_message_only() {
		let err = FieldError::Validation("Start time must be before end time".to_string());
		assert_eq!(err.to_string(), "Start time must be before end time");
	}

	#[test]
	fn test_escape_html_passes_plain_text_through() {
		assert_eq!(escape_html("room 7, floor 12"), "room 7, floor 12");
	}

	#[test]
	fn test_escape_attribute_covers_quotes() {
		assert_eq!(
			escape_attribute(r#"<img onerror="x">"#),
			"&lt;img onerror=&quot;x&quot;&gt;"
		);
	}
}
