//! Form controller: owns the draft, applies input events and gates submit.
//!
//! All state mutation is synchronous and happens on the caller's thread; the
//! controller is the sole owner of the in-memory draft.

use crate::booking::{self, BookingDraft};

/// Destination for the serialized payload of a successful submit.
///
/// The booking form has no backend; the payload goes to an observation
/// channel. [`TracingSink`] is the production implementation; tests swap in a
/// recording sink.
pub trait SubmitSink {
	fn submit(&mut self, payload: &str);
}

/// Logs the submitted payload at info level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl SubmitSink for TracingSink {
	fn submit(&mut self, payload: &str) {
		tracing::info!(target: "conference_booking", %payload, "booking submitted");
	}
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// The draft validated, was emitted and the form reset.
	Submitted,
	/// Validation errors exist; nothing was emitted.
	Rejected,
}

/// Holds the booking draft and processes change, blur, submit and reset
/// events.
///
/// Validation errors are recomputed on every change and blur, cached as an
/// ordered field -> message list, and surfaced next to the offending field.
/// They are advisory only: no event ever fails, submission simply does not
/// fire while errors exist.
///
/// # Examples
///
/// ```
/// use conference_booking::controller::{BookingController, SubmitOutcome};
/// use conference_booking::booking;
///
/// let mut controller = BookingController::new();
/// controller.change(booking::TOWER, "A");
/// controller.change(booking::FLOOR, "12");
/// controller.change(booking::ROOM, "7");
/// controller.change(booking::DATE, "2026-09-01");
/// controller.change(booking::START_TIME, "09:00");
/// controller.change(booking::END_TIME, "10:00");
///
/// assert!(controller.can_submit());
/// assert_eq!(controller.submit(), SubmitOutcome::Submitted);
/// assert!(controller.draft().is_empty());
/// ```
pub struct BookingController<S: SubmitSink = TracingSink> {
	draft: BookingDraft,
	errors: Vec<(String, String)>,
	sink: S,
}

impl BookingController<TracingSink> {
	/// Create a controller with an empty draft, emitting to [`TracingSink`].
	pub fn new() -> Self {
		Self::with_sink(TracingSink)
	}
}

impl Default for BookingController<TracingSink> {
	fn default() -> Self {
		Self::new()
	}
}

impl<S: SubmitSink> BookingController<S> {
	/// Create a controller emitting successful submits to `sink`.
	pub fn with_sink(sink: S) -> Self {
		Self {
			draft: BookingDraft::new(),
			errors: vec![],
			sink,
		}
	}

	pub fn draft(&self) -> &BookingDraft {
		&self.draft
	}

	/// The cached ordered field -> message mapping from the last validation.
	pub fn errors(&self) -> &[(String, String)] {
		&self.errors
	}

	/// The message currently attached to `field`, if any.
	pub fn field_error(&self, field: &str) -> Option<&str> {
		self.errors
			.iter()
			.find(|(name, _)| name == field)
			.map(|(_, msg)| msg.as_str())
	}

	/// Submit fires only while no field error exists.
	pub fn can_submit(&self) -> bool {
		self.errors.is_empty()
	}

	/// Apply a field change and revalidate.
	///
	/// Unknown field names are ignored (and logged at debug level); the form
	/// has a fixed set of controls.
	pub fn change(&mut self, field: &str, value: &str) {
		match field {
			booking::TOWER => self.draft.tower = value.to_string(),
			booking::FLOOR => self.draft.floor = value.to_string(),
			booking::ROOM => self.draft.room = value.to_string(),
			booking::DATE => self.draft.date = value.to_string(),
			booking::START_TIME => self.draft.start_time = value.to_string(),
			booking::END_TIME => self.draft.end_time = value.to_string(),
			booking::COMMENTS => self.draft.comments = value.to_string(),
			other => {
				tracing::debug!(target: "conference_booking", field = other, "change for unknown field");
				return;
			}
		}
		self.revalidate();
	}

	/// A field lost focus: revalidate against the current draft.
	pub fn blur(&mut self) {
		self.revalidate();
	}

	/// Attempt to submit the draft.
	///
	/// On success the draft is serialized to JSON, emitted to the sink and
	/// reset to all-empty (errors included). On failure the errors are cached
	/// for display and nothing is emitted.
	pub fn submit(&mut self) -> SubmitOutcome {
		self.errors = booking::validate(&self.draft);
		if !self.errors.is_empty() {
			return SubmitOutcome::Rejected;
		}

		let payload = serde_json::to_string(&self.draft)
			.expect("BookingDraft: string-only struct serializes infallibly");
		self.sink.submit(&payload);

		self.draft = BookingDraft::new();
		self.errors.clear();
		SubmitOutcome::Submitted
	}

	/// Restore the initial empty draft, bypassing validation.
	pub fn reset(&mut self) {
		self.draft = BookingDraft::new();
		self.errors.clear();
	}

	fn revalidate(&mut self) {
		self.errors = booking::validate(&self.draft);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::booking::{
		DATE, END_TIME, FLOOR, MSG_TOWER_REQUIRED, ROOM, START_TIME, TOWER,
	};
	use std::cell::RefCell;
	use std::rc::Rc;

	#[derive(Default, Clone)]
	struct RecordingSink {
		payloads: Rc<RefCell<Vec<String>>>,
	}

	impl SubmitSink for RecordingSink {
		fn submit(&mut self, payload: &str) {
			self.payloads.borrow_mut().push(payload.to_string());
		}
	}

	fn filled_controller(sink: RecordingSink) -> BookingController<RecordingSink> {
		let mut controller = BookingController::with_sink(sink);
		controller.change(TOWER, "A");
		controller.change(FLOOR, "12");
		controller.change(ROOM, "7");
		controller.change(DATE, "2026-09-01");
		controller.change(START_TIME, "09:00");
		controller.change(END_TIME, "10:00");
		controller
	}

	#[test]
	fn test_submit_emits_once_and_resets() {
		let sink = RecordingSink::default();
		let mut controller = filled_controller(sink.clone());

		assert_eq!(controller.submit(), SubmitOutcome::Submitted);

		let payloads = sink.payloads.borrow();
		assert_eq!(payloads.len(), 1);

		let value: serde_json::Value = serde_json::from_str(&payloads[0]).unwrap();
		assert_eq!(value["startTime"], "09:00");
		assert_eq!(value["endTime"], "10:00");
		assert_eq!(value["tower"], "A");

		assert!(controller.draft().is_empty());
		assert!(controller.errors().is_empty());
	}

	#[test]
	fn test_submit_with_errors_does_not_emit() {
		let sink = RecordingSink::default();
		let mut controller = BookingController::with_sink(sink.clone());

		assert_eq!(controller.submit(), SubmitOutcome::Rejected);
		assert!(sink.payloads.borrow().is_empty());
		assert!(!controller.errors().is_empty());
		assert!(!controller.can_submit());
	}

	#[test]
	fn test_change_revalidates() {
		let mut controller = BookingController::new();
		controller.change(START_TIME, "10:00");
		controller.change(END_TIME, "09:00");

		assert_eq!(
			controller.field_error(START_TIME),
			Some("Start time must be before end time")
		);
		assert_eq!(
			controller.field_error(END_TIME),
			Some("End time must be after start time")
		);

		// Fixing the end time clears both ordering errors.
		controller.change(END_TIME, "11:00");
		assert!(controller.field_error(START_TIME).is_none());
		assert!(controller.field_error(END_TIME).is_none());
	}

	#[test]
	fn test_blur_revalidates() {
		let mut controller = BookingController::new();
		assert!(controller.errors().is_empty());

		controller.blur();
		assert_eq!(controller.field_error(TOWER), Some(MSG_TOWER_REQUIRED));
	}

	#[test]
	fn test_reset_clears_draft_and_errors() {
		let sink = RecordingSink::default();
		let mut controller = filled_controller(sink.clone());
		controller.change(END_TIME, "08:00");
		assert!(!controller.errors().is_empty());

		controller.reset();

		assert!(controller.draft().is_empty());
		assert!(controller.errors().is_empty());
		assert!(sink.payloads.borrow().is_empty());
	}

	#[test]
	fn test_unknown_field_change_is_ignored() {
		let mut controller = BookingController::new();
		controller.change("building", "Z");

		assert!(controller.draft().is_empty());
		assert!(controller.errors().is_empty());
	}

	#[test]
	fn test_fresh_controller_shows_no_errors() {
		let controller = BookingController::new();
		assert!(controller.errors().is_empty());
		assert!(controller.can_submit());
	}
}
