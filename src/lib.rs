//! Conference room booking form
//!
//! A small Django-style form layer carrying one concrete form: booking a
//! conference room (tower, floor, room, date, start/end time, comments).
//! The crate provides:
//! - field types with per-field validation and custom required messages
//! - a [`form::Form`] that binds data, runs field and cross-field cleaning
//!   and exposes errors in field declaration order
//! - the booking schema itself ([`booking::booking_form`]) with the
//!   start-before-end ordering rule
//! - a synchronous [`controller::BookingController`] handling change, blur,
//!   submit and reset events; successful submits are serialized to JSON and
//!   logged via `tracing`
//! - HTML rendering of the form surface ([`render::render_form`])
//!
//! There is no backend, no persistence and no availability checking; the
//! draft lives in memory for the lifetime of one booking attempt.

pub mod booking;
pub mod bound_field;
pub mod controller;
pub mod field;
pub mod fields;
pub mod form;
pub mod render;

pub use booking::{BookingDraft, booking_form, validate};
pub use bound_field::BoundField;
pub use controller::{BookingController, SubmitOutcome, SubmitSink, TracingSink};
pub use field::{FieldError, FieldResult, FormField, Widget};
pub use fields::{CharField, ChoiceField, DateField, IntegerChoiceField, TimeField};
pub use form::{Form, FormError, FormResult};
pub use render::render_form;
