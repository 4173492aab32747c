//! The conference-room booking form: draft entity, configuration constants
//! and the validation schema.
//!
//! Field keys use the camelCase names of the submitted payload (`startTime`,
//! `endTime`), so the error mapping and the serialized draft agree on naming.

use crate::field::{FieldError, Widget};
use crate::fields::{CharField, ChoiceField, DateField, IntegerChoiceField, TimeField};
use crate::form::{Form, FormError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Towers available for booking.
pub const TOWERS: [&str; 2] = ["A", "B"];
/// Bookable floors. Hard-coded building layout; kept as a named constant
/// rather than literals at the field definition.
pub const FLOOR_RANGE: RangeInclusive<i64> = 3..=27;
/// Rooms per floor.
pub const ROOM_RANGE: RangeInclusive<i64> = 1..=10;

pub const TOWER: &str = "tower";
pub const FLOOR: &str = "floor";
pub const ROOM: &str = "room";
pub const DATE: &str = "date";
pub const START_TIME: &str = "startTime";
pub const END_TIME: &str = "endTime";
pub const COMMENTS: &str = "comments";

pub const MSG_TOWER_REQUIRED: &str = "Please select a tower";
pub const MSG_FLOOR_REQUIRED: &str = "Please select a floor";
pub const MSG_ROOM_REQUIRED: &str = "Please select a room";
pub const MSG_DATE_REQUIRED: &str = "Please enter a date";
pub const MSG_START_REQUIRED: &str = "Please select a starting time";
pub const MSG_END_REQUIRED: &str = "Please select an ending time";
pub const MSG_START_BEFORE_END: &str = "Start time must be before end time";
pub const MSG_END_AFTER_START: &str = "End time must be after start time";

/// The in-progress, unsaved values for one booking attempt.
///
/// Every field is a string; the empty string means "not filled in". The
/// draft lives only in the controller: created empty, mutated per input
/// event, discarded on submit or reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
	pub tower: String,
	pub floor: String,
	pub room: String,
	pub date: String,
	pub start_time: String,
	pub end_time: String,
	pub comments: String,
}

impl BookingDraft {
	/// Create an all-empty draft.
	///
	/// # Examples
	///
	/// ```
	/// use conference_booking::booking::BookingDraft;
	///
	/// let draft = BookingDraft::new();
	/// assert!(draft.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self == &Self::default()
	}

	/// The draft as form data, keyed by the camelCase field names.
	pub fn to_form_data(&self) -> HashMap<String, serde_json::Value> {
		let mut data = HashMap::new();
		data.insert(TOWER.to_string(), serde_json::json!(self.tower));
		data.insert(FLOOR.to_string(), serde_json::json!(self.floor));
		data.insert(ROOM.to_string(), serde_json::json!(self.room));
		data.insert(DATE.to_string(), serde_json::json!(self.date));
		data.insert(START_TIME.to_string(), serde_json::json!(self.start_time));
		data.insert(END_TIME.to_string(), serde_json::json!(self.end_time));
		data.insert(COMMENTS.to_string(), serde_json::json!(self.comments));
		data
	}
}

/// Numeric sort key of a clock time: separators stripped, parsed as an
/// integer ("09:30" -> 930). Empty or absent values have no key.
fn time_sort_key(value: Option<&serde_json::Value>) -> Option<i64> {
	let s = value?.as_str()?;
	let digits: String = s.split(':').collect();
	if digits.is_empty() {
		return None;
	}
	digits.parse().ok()
}

/// The ordering test: start must sort strictly before end. Vacuously true
/// when either side is empty; required-ness is checked separately.
fn times_in_order(data: &HashMap<String, serde_json::Value>) -> bool {
	match (
		time_sort_key(data.get(START_TIME)),
		time_sort_key(data.get(END_TIME)),
	) {
		(Some(start), Some(end)) => start < end,
		_ => true,
	}
}

/// Build the booking form schema.
///
/// Fields are declared in render order (tower, floor, room, date, startTime,
/// endTime, comments); the two cross-field clean functions attach the
/// ordering errors to their respective time fields, so equal times report on
/// both.
///
/// # Examples
///
/// ```
/// use conference_booking::booking::{booking_form, BookingDraft};
///
/// let mut form = booking_form();
/// form.bind(BookingDraft::new().to_form_data());
/// assert!(!form.is_valid());
/// assert_eq!(
/// 	form.errors().get("tower").unwrap(),
/// 	&vec!["Please select a tower".to_string()]
/// );
/// ```
pub fn booking_form() -> Form {
	let mut form = Form::new();

	form.add_field(Box::new(
		ChoiceField::new(
			TOWER.to_string(),
			TOWERS
				.iter()
				.map(|t| (t.to_string(), t.to_string()))
				.collect(),
		)
		.with_label("Tower")
		.with_required_message(MSG_TOWER_REQUIRED),
	));
	form.add_field(Box::new(
		IntegerChoiceField::new(FLOOR.to_string(), FLOOR_RANGE)
			.with_label("Floor")
			.with_required_message(MSG_FLOOR_REQUIRED),
	));
	form.add_field(Box::new(
		IntegerChoiceField::new(ROOM.to_string(), ROOM_RANGE)
			.with_label("Room")
			.with_required_message(MSG_ROOM_REQUIRED),
	));
	form.add_field(Box::new(
		DateField::new(DATE.to_string())
			.with_label("Date")
			.with_required_message(MSG_DATE_REQUIRED),
	));
	form.add_field(Box::new(
		TimeField::new(START_TIME.to_string())
			.with_label("Start")
			.with_required_message(MSG_START_REQUIRED),
	));
	form.add_field(Box::new(
		TimeField::new(END_TIME.to_string())
			.with_label("End")
			.with_required_message(MSG_END_REQUIRED),
	));
	form.add_field(Box::new(
		CharField::new(COMMENTS.to_string())
			.with_label("Comments")
			.with_widget(Widget::TextArea),
	));

	// Each time field runs its own ordering test, mirroring the per-field
	// cross checks of the original schema.
	form.add_clean_function(|data| {
		if times_in_order(data) {
			Ok(())
		} else {
			Err(FormError::Field {
				field: START_TIME.to_string(),
				error: FieldError::Validation(MSG_START_BEFORE_END.to_string()),
			})
		}
	});
	form.add_clean_function(|data| {
		if times_in_order(data) {
			Ok(())
		} else {
			Err(FormError::Field {
				field: END_TIME.to_string(),
				error: FieldError::Validation(MSG_END_AFTER_START.to_string()),
			})
		}
	});

	form
}

/// Validate a draft, returning the ordered field -> message mapping.
///
/// One message per field (the first error wins, as only one is displayed
/// inline); ordering follows field declaration order. An empty result means
/// the draft may be submitted.
///
/// # Examples
///
/// ```
/// use conference_booking::booking::{validate, BookingDraft};
///
/// let draft = BookingDraft {
/// 	tower: "A".to_string(),
/// 	floor: "12".to_string(),
/// 	room: "7".to_string(),
/// 	date: "2026-09-01".to_string(),
/// 	start_time: "09:00".to_string(),
/// 	end_time: "10:00".to_string(),
/// 	comments: String::new(),
/// };
/// assert!(validate(&draft).is_empty());
/// ```
pub fn validate(draft: &BookingDraft) -> Vec<(String, String)> {
	let mut form = booking_form();
	form.bind(draft.to_form_data());
	form.is_valid();
	form.ordered_errors()
		.into_iter()
		.filter_map(|(name, mut msgs)| {
			if msgs.is_empty() {
				None
			} else {
				Some((name, msgs.remove(0)))
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn valid_draft() -> BookingDraft {
		BookingDraft {
			tower: "A".to_string(),
			floor: "12".to_string(),
			room: "7".to_string(),
			date: "2026-09-01".to_string(),
			start_time: "09:00".to_string(),
			end_time: "10:00".to_string(),
			comments: String::new(),
		}
	}

	#[test]
	fn test_valid_draft_has_no_errors() {
		assert!(validate(&valid_draft()).is_empty());
	}

	#[rstest]
	#[case(TOWER, MSG_TOWER_REQUIRED)]
	#[case(FLOOR, MSG_FLOOR_REQUIRED)]
	#[case(ROOM, MSG_ROOM_REQUIRED)]
	#[case(DATE, MSG_DATE_REQUIRED)]
	#[case(START_TIME, MSG_START_REQUIRED)]
	#[case(END_TIME, MSG_END_REQUIRED)]
	fn test_each_required_field_reports_its_message(
		#[case] field: &str,
		#[case] expected: &str,
	) {
		let mut draft = valid_draft();
		match field {
			TOWER => draft.tower.clear(),
			FLOOR => draft.floor.clear(),
			ROOM => draft.room.clear(),
			DATE => draft.date.clear(),
			START_TIME => draft.start_time.clear(),
			END_TIME => draft.end_time.clear(),
			_ => unreachable!(),
		}

		let errors = validate(&draft);
		let msg = errors
			.iter()
			.find(|(name, _)| name == field)
			.map(|(_, m)| m.as_str());
		assert_eq!(msg, Some(expected));
	}

	#[test]
	fn test_comments_never_error() {
		let mut draft = valid_draft();
		draft.comments = "  lots   of\n text  ".to_string();
		assert!(validate(&draft).is_empty());
	}

	#[test]
	fn test_reversed_times_error_on_both_fields() {
		let mut draft = valid_draft();
		draft.start_time = "10:00".to_string();
		draft.end_time = "09:00".to_string();

		let errors = validate(&draft);
		assert_eq!(
			errors,
			vec![
				(START_TIME.to_string(), MSG_START_BEFORE_END.to_string()),
				(END_TIME.to_string(), MSG_END_AFTER_START.to_string()),
			]
		);
	}

	#[test]
	fn test_equal_times_error_on_both_fields() {
		let mut draft = valid_draft();
		draft.start_time = "09:30".to_string();
		draft.end_time = "09:30".to_string();

		let errors = validate(&draft);
		let fields: Vec<&str> = errors.iter().map(|(n, _)| n.as_str()).collect();
		assert_eq!(fields, vec![START_TIME, END_TIME]);
	}

	#[test]
	fn test_ordering_test_is_vacuous_when_one_side_empty() {
		// Missing end time: only the required error, no ordering error.
		let mut draft = valid_draft();
		draft.end_time.clear();

		let errors = validate(&draft);
		assert_eq!(
			errors,
			vec![(END_TIME.to_string(), MSG_END_REQUIRED.to_string())]
		);
	}

	#[test]
	fn test_missing_tower_reports_only_tower() {
		let mut draft = valid_draft();
		draft.tower.clear();

		let errors = validate(&draft);
		assert_eq!(
			errors,
			vec![(TOWER.to_string(), MSG_TOWER_REQUIRED.to_string())]
		);
	}

	#[test]
	fn test_errors_follow_field_declaration_order() {
		let errors = validate(&BookingDraft::new());
		let fields: Vec<&str> = errors.iter().map(|(n, _)| n.as_str()).collect();
		assert_eq!(fields, vec![TOWER, FLOOR, ROOM, DATE, START_TIME, END_TIME]);
	}

	#[rstest]
	#[case("2")]
	#[case("28")]
	fn test_out_of_range_floor_is_rejected(#[case] floor: &str) {
		let mut draft = valid_draft();
		draft.floor = floor.to_string();
		let errors = validate(&draft);
		assert_eq!(errors.len(), 1);
		assert_eq!(errors[0].0, FLOOR);
	}

	#[rstest]
	#[case("0")]
	#[case("11")]
	fn test_out_of_range_room_is_rejected(#[case] room: &str) {
		let mut draft = valid_draft();
		draft.room = room.to_string();
		let errors = validate(&draft);
		assert_eq!(errors.len(), 1);
		assert_eq!(errors[0].0, ROOM);
	}

	#[test]
	fn test_time_sort_key_strips_separators() {
		assert_eq!(time_sort_key(Some(&serde_json::json!("09:30"))), Some(930));
		assert_eq!(time_sort_key(Some(&serde_json::json!("23:05"))), Some(2305));
		assert_eq!(time_sort_key(Some(&serde_json::json!(""))), None);
		assert_eq!(time_sort_key(None), None);
	}

	#[test]
	fn test_draft_serializes_with_camel_case_keys() {
		let json = serde_json::to_value(valid_draft()).unwrap();
		assert!(json.get("startTime").is_some());
		assert!(json.get("endTime").is_some());
		assert!(json.get("start_time").is_none());
	}
}
