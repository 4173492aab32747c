use crate::field::{FormField, Widget};

/// BoundField represents a field bound to form data
pub struct BoundField<'a> {
	field: &'a dyn FormField,
	data: Option<&'a serde_json::Value>,
	errors: &'a [String],
}

impl<'a> BoundField<'a> {
	pub fn new(
		field: &'a dyn FormField,
		data: Option<&'a serde_json::Value>,
		errors: &'a [String],
	) -> Self {
		Self {
			field,
			data,
			errors,
		}
	}

	/// Get the field name
	///
	/// # Examples
	///
	/// ```
	/// use conference_booking::bound_field::BoundField;
	/// use conference_booking::fields::CharField;
	/// use conference_booking::field::FormField;
	///
	/// let field: Box<dyn FormField> = Box::new(CharField::new("comments".to_string()));
	/// let bound = BoundField::new(field.as_ref(), None, &[]);
	/// assert_eq!(bound.name(), "comments");
	/// ```
	pub fn name(&self) -> &str {
		self.field.name()
	}

	/// Get the HTML id attribute
	///
	/// # Examples
	///
	/// ```
	/// use conference_booking::bound_field::BoundField;
	/// use conference_booking::fields::TimeField;
	/// use conference_booking::field::FormField;
	///
	/// let field: Box<dyn FormField> = Box::new(TimeField::new("start_time".to_string()));
	/// let bound = BoundField::new(field.as_ref(), None, &[]);
	/// assert_eq!(bound.id_for_label(), "id_start_time");
	/// ```
	pub fn id_for_label(&self) -> String {
		format!("id_{}", self.field.name())
	}

	pub fn label(&self) -> Option<&str> {
		self.field.label()
	}

	/// Get the field value (bound data first, initial value as fallback)
	pub fn value(&self) -> Option<&serde_json::Value> {
		self.data.or_else(|| self.field.initial())
	}

	/// The value as display text: strings verbatim, other JSON values via
	/// their canonical rendering, null/missing as empty.
	pub fn display_value(&self) -> String {
		match self.value() {
			None => String::new(),
			Some(serde_json::Value::Null) => String::new(),
			Some(serde_json::Value::String(s)) => s.clone(),
			Some(v) => v.to_string(),
		}
	}

	pub fn errors(&self) -> &[String] {
		self.errors
	}

	pub fn has_errors(&self) -> bool {
		!self.errors.is_empty()
	}

	pub fn widget(&self) -> &Widget {
		self.field.widget()
	}

	/// `(value, label)` options when the field renders as a select.
	pub fn choices(&self) -> Option<Vec<(String, String)>> {
		self.field.choices()
	}

	pub fn is_required(&self) -> bool {
		self.field.required()
	}
}
