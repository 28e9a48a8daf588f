//! # Appointment intake validation
//!
//! Booking requests arrive as untyped JSON. Validation runs in stages and
//! each stage has its own error so clients can tell them apart:
//!
//! 1. Shape: every required field is present with the right primitive type.
//!    All offending fields are reported together, never just the first.
//! 2. Location: `latitude` and `longitude` must not be `null`. The shape
//!    stage admits `null` for number fields, so this rule is independent.
//! 3. Date: the `date` text must parse into a calendar date.
//!
//! The hospital existence check needs the store and happens in the handler.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    errors::{BookingError, BookingResult},
    models::appointment::NewAppointment,
};

/// Primitive type expected for a payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Integer,
    TextList,
}

impl FieldKind {
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Number => "number",
            FieldKind::Integer => "integer",
            FieldKind::TextList => "string[]",
        }
    }
}

/// A field that was missing or carried the wrong type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub expected: FieldKind,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (expected {})", self.field, self.expected.label())
    }
}

/// Reads typed values out of a payload, recording a violation for every
/// field that cannot be read.
struct FieldReader<'a> {
    payload: Option<&'a Map<String, Value>>,
    violations: Vec<FieldViolation>,
}

impl<'a> FieldReader<'a> {
    fn new(payload: &'a Value) -> Self {
        Self {
            payload: payload.as_object(),
            violations: Vec::new(),
        }
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        self.payload.and_then(|payload| payload.get(field))
    }

    fn reject(&mut self, field: &'static str, expected: FieldKind) {
        self.violations.push(FieldViolation { field, expected });
    }

    fn text(&mut self, field: &'static str) -> Option<&'a str> {
        let value = self.get(field).and_then(Value::as_str);
        if value.is_none() {
            self.reject(field, FieldKind::Text);
        }
        value
    }

    /// `Some(None)` means the field is present and explicitly `null`.
    fn number(&mut self, field: &'static str) -> Option<Option<f64>> {
        match self.get(field) {
            Some(Value::Null) => Some(None),
            Some(Value::Number(n)) => n.as_f64().map(Some),
            _ => {
                self.reject(field, FieldKind::Number);
                None
            }
        }
    }

    fn integer(&mut self, field: &'static str) -> Option<i32> {
        let value = self
            .get(field)
            .and_then(Value::as_i64)
            .and_then(|n| i32::try_from(n).ok());
        if value.is_none() {
            self.reject(field, FieldKind::Integer);
        }
        value
    }

    /// Optional list of strings. Anything other than an array falls back to
    /// an empty list; an array with non-string members is a violation.
    fn text_list(&mut self, field: &'static str) -> Vec<String> {
        let Some(Value::Array(items)) = self.get(field) else {
            return Vec::new();
        };
        let texts: Option<Vec<String>> = items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect();
        texts.unwrap_or_else(|| {
            self.reject(field, FieldKind::TextList);
            Vec::new()
        })
    }
}

/// Parses the `date` field of a booking request.
///
/// Accepts a bare `YYYY-MM-DD`, an RFC 3339 timestamp (taken in UTC), or a
/// timestamp without offset.
pub fn parse_appointment_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|timestamp| timestamp.date())
}

/// Runs every payload-only rule and produces an insertable appointment.
pub fn validate_appointment(payload: &Value) -> BookingResult<NewAppointment> {
    let mut reader = FieldReader::new(payload);

    let patient = reader.text("patient");
    let phone = reader.text("phone");
    let symptoms = reader.text("symptoms");
    let latitude = reader.number("latitude");
    let longitude = reader.number("longitude");
    let date = reader.text("date");
    let time = reader.text("time");
    let hospital_id = reader.integer("hospitalId");
    let alert = reader.text_list("alert");

    let (
        Some(patient),
        Some(phone),
        Some(symptoms),
        Some(latitude),
        Some(longitude),
        Some(date),
        Some(time),
        Some(hospital_id),
    ) = (patient, phone, symptoms, latitude, longitude, date, time, hospital_id)
    else {
        return Err(BookingError::InvalidPayload(reader.violations));
    };
    if !reader.violations.is_empty() {
        return Err(BookingError::InvalidPayload(reader.violations));
    }

    let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
        return Err(BookingError::MissingLocation);
    };

    let date = parse_appointment_date(date)
        .ok_or_else(|| BookingError::InvalidDate(date.to_string()))?;

    Ok(NewAppointment {
        patient: patient.to_string(),
        phone: phone.to_string(),
        symptoms: symptoms.to_string(),
        latitude,
        longitude,
        date,
        time: time.to_string(),
        alert,
        hospital_id,
    })
}
