//! HTML rendering of the booking form surface.
//!
//! Produces the full form markup: one labelled control per field (selects
//! with their option ranges, date/time inputs, comments textarea), an inline
//! error element for each field currently in error, and the Reset/Submit
//! buttons. All user-supplied content is escaped.

use crate::bound_field::BoundField;
use crate::field::{Widget, escape_attribute, escape_html};
use crate::form::Form;

/// Render the complete form.
///
/// # Examples
///
/// ```
/// use conference_booking::booking::booking_form;
/// use conference_booking::render::render_form;
///
/// let html = render_form(&booking_form());
/// assert!(html.contains("<select name=\"tower\""));
/// assert!(html.contains("type=\"submit\""));
/// ```
pub fn render_form(form: &Form) -> String {
	let mut html = String::new();
	html.push_str("<header>Conference Booking</header>\n");
	html.push_str("<form id=\"form\">\n");
	for bound in form.bound_fields() {
		html.push_str(&render_field(&bound));
	}
	html.push_str("<div class=\"buttons\">\n");
	html.push_str("<button type=\"button\" name=\"reset\">Reset</button>\n");
	html.push_str("<button type=\"submit\">Submit</button>\n");
	html.push_str("</div>\n");
	html.push_str("</form>\n");
	html
}

fn render_field(bound: &BoundField<'_>) -> String {
	let mut html = String::new();
	let name = bound.name();
	let id = bound.id_for_label();
	let label = bound.label().unwrap_or(name);

	html.push_str(&format!(
		"<div class=\"field\">\n<label for=\"{}\">{}</label>\n",
		escape_attribute(&id),
		escape_html(label)
	));

	html.push_str(&render_control(bound, name, &id, label));

	if bound.has_errors() {
		for error in bound.errors() {
			html.push_str(&format!(
				"<div class=\"field-error\">{}</div>\n",
				escape_html(error)
			));
		}
	}

	html.push_str("</div>\n");
	html
}

fn render_control(bound: &BoundField<'_>, name: &str, id: &str, label: &str) -> String {
	let value = bound.display_value();
	let error_class = if bound.has_errors() { " class=\"error\"" } else { "" };

	match bound.widget() {
		Widget::Select => {
			let mut html = format!(
				"<select name=\"{}\" id=\"{}\"{}>\n",
				escape_attribute(name),
				escape_attribute(id),
				error_class
			);
			// Placeholder option doubles as the empty value.
			html.push_str(&format!(
				"<option value=\"\">Select {}</option>\n",
				escape_html(&label.to_lowercase())
			));
			for (option_value, option_label) in bound.choices().unwrap_or_default() {
				let selected = if option_value == value { " selected" } else { "" };
				html.push_str(&format!(
					"<option value=\"{}\"{}>{}</option>\n",
					escape_attribute(&option_value),
					selected,
					escape_html(&option_label)
				));
			}
			html.push_str("</select>\n");
			html
		}
		Widget::TextArea => format!(
			"<textarea name=\"{}\" id=\"{}\" rows=\"10\" cols=\"10\"{}>{}</textarea>\n",
			escape_attribute(name),
			escape_attribute(id),
			error_class,
			escape_html(&value)
		),
		widget => {
			let input_type = match widget {
				Widget::DateInput => "date",
				Widget::TimeInput => "time",
				_ => "text",
			};
			format!(
				"<input type=\"{}\" name=\"{}\" id=\"{}\" value=\"{}\"{} />\n",
				input_type,
				escape_attribute(name),
				escape_attribute(id),
				escape_attribute(&value),
				error_class
			)
		}
	}
}
