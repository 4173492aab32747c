use crate::bound_field::BoundField;
use crate::field::{FieldError, FormField};
use std::collections::HashMap;
use std::ops::Index;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Field error in {field}: {error}")]
	Field { field: String, error: FieldError },
	#[error("Validation error: {0}")]
	Validation(String),
}

pub type FormResult<T> = Result<T, FormError>;

type CleanFunction =
	Box<dyn Fn(&HashMap<String, serde_json::Value>) -> FormResult<()> + Send + Sync>;

/// Form data structure: an ordered list of fields plus bound data.
///
/// Fields validate independently; cross-field rules are registered as clean
/// functions that run after per-field cleaning and attach their error to a
/// named field. Error iteration follows field declaration order, so callers
/// always see errors in the order the form renders its controls.
pub struct Form {
	fields: Vec<Box<dyn FormField>>,
	data: HashMap<String, serde_json::Value>,
	errors: HashMap<String, Vec<String>>,
	non_field_errors: Vec<String>,
	is_bound: bool,
	clean_functions: Vec<CleanFunction>,
}

impl Form {
	/// Create a new empty form
	///
	/// # Examples
	///
	/// ```
	/// use conference_booking::form::Form;
	///
	/// let form = Form::new();
	/// assert!(!form.is_bound());
	/// assert!(form.fields().is_empty());
	/// ```
	pub fn new() -> Self {
		Self {
			fields: vec![],
			data: HashMap::new(),
			errors: HashMap::new(),
			non_field_errors: vec![],
			is_bound: false,
			clean_functions: vec![],
		}
	}

	/// Add a field to the form
	///
	/// # Examples
	///
	/// ```
	/// use conference_booking::form::Form;
	/// use conference_booking::fields::CharField;
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(CharField::new("comments".to_string())));
	/// assert_eq!(form.field_count(), 1);
	/// ```
	pub fn add_field(&mut self, field: Box<dyn FormField>) {
		self.fields.push(field);
	}

	/// Bind form data for validation
	///
	/// # Examples
	///
	/// ```
	/// use conference_booking::form::Form;
	/// use std::collections::HashMap;
	/// use serde_json::json;
	///
	/// let mut form = Form::new();
	/// let mut data = HashMap::new();
	/// data.insert("tower".to_string(), json!("A"));
	///
	/// form.bind(data);
	/// assert!(form.is_bound());
	/// ```
	pub fn bind(&mut self, data: HashMap<String, serde_json::Value>) {
		self.data = data;
		self.is_bound = true;
	}

	/// Validate the form and return true if all fields are valid
	///
	/// Runs every field's `clean` (in declaration order), then every
	/// registered clean function. Previous errors are discarded first, so
	/// re-validation after a data change reflects only the current state.
	///
	/// # Examples
	///
	/// ```
	/// use conference_booking::form::Form;
	/// use conference_booking::fields::CharField;
	/// use std::collections::HashMap;
	/// use serde_json::json;
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(CharField::new("comments".to_string())));
	///
	/// let mut data = HashMap::new();
	/// data.insert("comments".to_string(), json!("projector please"));
	/// form.bind(data);
	///
	/// assert!(form.is_valid());
	/// assert!(form.errors().is_empty());
	/// ```
	pub fn is_valid(&mut self) -> bool {
		if !self.is_bound {
			return false;
		}

		self.errors.clear();
		self.non_field_errors.clear();

		for field in &self.fields {
			let value = self.data.get(field.name());

			match field.clean(value) {
				Ok(cleaned) => {
					self.data.insert(field.name().to_string(), cleaned);
				}
				Err(e) => {
					self.errors
						.entry(field.name().to_string())
						.or_default()
						.push(e.to_string());
				}
			}
		}

		for clean_fn in &self.clean_functions {
			if let Err(e) = clean_fn(&self.data) {
				match e {
					FormError::Field { field, error } => {
						self.errors.entry(field).or_default().push(error.to_string());
					}
					FormError::Validation(msg) => {
						self.non_field_errors.push(msg);
					}
				}
			}
		}

		self.errors.is_empty() && self.non_field_errors.is_empty()
	}

	pub fn cleaned_data(&self) -> &HashMap<String, serde_json::Value> {
		&self.data
	}

	pub fn errors(&self) -> &HashMap<String, Vec<String>> {
		&self.errors
	}

	pub fn non_field_errors(&self) -> &[String] {
		&self.non_field_errors
	}

	/// Errors in field declaration order, one entry per field in error.
	///
	/// # Examples
	///
	/// ```
	/// use conference_booking::form::Form;
	/// use conference_booking::fields::TimeField;
	/// use std::collections::HashMap;
	///
	/// let mut form = Form::new();
	/// form.add_field(Box::new(TimeField::new("start_time".to_string())));
	/// form.add_field(Box::new(TimeField::new("end_time".to_string())));
	///
	/// form.bind(HashMap::new());
	/// assert!(!form.is_valid());
	///
	/// let ordered = form.ordered_errors();
	/// assert_eq!(ordered[0].0, "start_time");
	/// assert_eq!(ordered[1].0, "end_time");
	/// ```
	pub fn ordered_errors(&self) -> Vec<(String, Vec<String>)> {
		self.fields
			.iter()
			.filter_map(|f| {
				self.errors
					.get(f.name())
					.map(|msgs| (f.name().to_string(), msgs.clone()))
			})
			.collect()
	}

	pub fn is_bound(&self) -> bool {
		self.is_bound
	}

	pub fn fields(&self) -> &[Box<dyn FormField>] {
		&self.fields
	}

	pub fn get_field(&self, name: &str) -> Option<&dyn FormField> {
		self.fields
			.iter()
			.find(|f| f.name() == name)
			.map(|f| f.as_ref())
	}

	pub fn field_count(&self) -> usize {
		self.fields.len()
	}

	/// Add a custom clean function for cross-field validation
	///
	/// # Examples
	///
	/// ```
	/// use conference_booking::form::{Form, FormError};
	/// use conference_booking::field::FieldError;
	///
	/// let mut form = Form::new();
	/// form.add_clean_function(|data| {
	/// 	if data.get("start_time") == data.get("end_time") {
	/// 		return Err(FormError::Field {
	/// 			field: "end_time".to_string(),
	/// 			error: FieldError::Validation("End time must be after start time".to_string()),
	/// 		});
	/// 	}
	/// 	Ok(())
	/// });
	/// ```
	pub fn add_clean_function<F>(&mut self, f: F)
	where
		F: Fn(&HashMap<String, serde_json::Value>) -> FormResult<()> + Send + Sync + 'static,
	{
		self.clean_functions.push(Box::new(f));
	}

	pub fn get_bound_field<'a>(&'a self, name: &str) -> Option<BoundField<'a>> {
		let field = self.get_field(name)?;
		let data = self.data.get(name);
		let errors = self.errors.get(name).map(|e| e.as_slice()).unwrap_or(&[]);

		Some(BoundField::new(field, data, errors))
	}

	/// Iterate every field as a bound field, in declaration order.
	pub fn bound_fields(&self) -> impl Iterator<Item = BoundField<'_>> {
		self.fields.iter().map(|field| {
			let data = self.data.get(field.name());
			let errors = self
				.errors
				.get(field.name())
				.map(|e| e.as_slice())
				.unwrap_or(&[]);
			BoundField::new(field.as_ref(), data, errors)
		})
	}
}

impl Default for Form {
	fn default() -> Self {
		Self::new()
	}
}

/// Safe field access by name.
impl Form {
	// Allow borrowed_box because Index trait impl requires &Box<dyn FormField>
	#[allow(clippy::borrowed_box)]
	pub fn get(&self, name: &str) -> Option<&Box<dyn FormField>> {
		self.fields.iter().find(|f| f.name() == name)
	}
}

impl Index<&str> for Form {
	type Output = Box<dyn FormField>;

	fn index(&self, name: &str) -> &Self::Output {
		self.get(name)
			.unwrap_or_else(|| panic!("Field '{}' not found", name))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::fields::{CharField, ChoiceField, TimeField};

	fn choice(name: &str, values: &[&str]) -> ChoiceField {
		ChoiceField::new(
			name.to_string(),
			values
				.iter()
				.map(|v| (v.to_string(), v.to_string()))
				.collect(),
		)
	}

	#[test]
	fn test_form_validation() {
		let mut form = Form::new();
		form.add_field(Box::new(choice("tower", &["A", "B"])));

		let mut data = HashMap::new();
		data.insert("tower".to_string(), serde_json::json!("A"));

		form.bind(data);
		assert!(form.is_valid());
		assert!(form.errors().is_empty());
	}

	#[test]
	fn test_form_missing_required_fields() {
		let mut form = Form::new();
		form.add_field(Box::new(choice("tower", &["A", "B"])));
		form.add_field(Box::new(TimeField::new("start_time".to_string())));

		form.bind(HashMap::new());

		assert!(form.is_bound());
		assert!(!form.is_valid());
		assert!(form.errors().contains_key("tower"));
		assert!(form.errors().contains_key("start_time"));
	}

	#[test]
	fn test_form_unbound_is_not_valid() {
		let mut form = Form::new();
		form.add_field(Box::new(CharField::new("comments".to_string())));

		assert!(!form.is_bound());
		assert!(!form.is_valid());
	}

	#[test]
	fn test_form_optional_fields() {
		let mut form = Form::new();
		form.add_field(Box::new(CharField::new("comments".to_string())));

		form.bind(HashMap::new());

		assert!(form.is_valid());
		assert!(form.errors().is_empty());
	}

	#[test]
	fn test_form_revalidation_clears_stale_errors() {
		let mut form = Form::new();
		form.add_field(Box::new(choice("tower", &["A", "B"])));

		form.bind(HashMap::new());
		assert!(!form.is_valid());

		let mut data = HashMap::new();
		data.insert("tower".to_string(), serde_json::json!("B"));
		form.bind(data);
		assert!(form.is_valid());
		assert!(form.errors().is_empty());
	}

	#[test]
	fn test_form_clean_function_targets_field() {
		let mut form = Form::new();
		form.add_field(Box::new(TimeField::new("start_time".to_string())));
		form.add_field(Box::new(TimeField::new("end_time".to_string())));

		form.add_clean_function(|data| {
			if data.get("start_time") == data.get("end_time") {
				return Err(FormError::Field {
					field: "end_time".to_string(),
					error: FieldError::Validation(
						"End time must be after start time".to_string(),
					),
				});
			}
			Ok(())
		});

		let mut data = HashMap::new();
		data.insert("start_time".to_string(), serde_json::json!("09:00"));
		data.insert("end_time".to_string(), serde_json::json!("09:00"));
		form.bind(data);

		assert!(!form.is_valid());
		assert_eq!(
			form.errors().get("end_time").unwrap(),
			&vec!["End time must be after start time".to_string()]
		);
	}

	#[test]
	fn test_form_ordered_errors_follow_declaration_order() {
		let mut form = Form::new();
		form.add_field(Box::new(choice("tower", &["A", "B"])));
		form.add_field(Box::new(TimeField::new("start_time".to_string())));
		form.add_field(Box::new(TimeField::new("end_time".to_string())));

		form.bind(HashMap::new());
		assert!(!form.is_valid());

		let names: Vec<String> = form.ordered_errors().into_iter().map(|(n, _)| n).collect();
		assert_eq!(names, vec!["tower", "start_time", "end_time"]);
	}

	#[test]
	fn test_form_index_access() {
		let mut form = Form::new();
		form.add_field(Box::new(CharField::new("comments".to_string())));

		let field = &form["comments"];
		assert_eq!(field.name(), "comments");
	}

	#[test]
	#[should_panic(expected = "Field 'nonexistent' not found")]
	fn test_form_index_access_nonexistent() {
		let form = Form::new();
		let _ = &form["nonexistent"];
	}

	#[test]
	fn test_form_non_field_errors() {
		let mut form = Form::new();
		form.add_clean_function(|_| {
			Err(FormError::Validation("form level failure".to_string()))
		});

		form.bind(HashMap::new());
		assert!(!form.is_valid());
		assert_eq!(form.non_field_errors(), &["form level failure".to_string()]);
	}
}
