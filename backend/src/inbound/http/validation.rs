//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request DTOs keep every field optional so a missing value surfaces as a
//! domain `invalid_request` error with the endpoint's own message instead of
//! a framework deserialisation failure.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::json;

use crate::domain::{Error, IdParseError, StatusParseError};

/// Validation error codes carried in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
    InvalidDate,
    InvalidTimestamp,
    InvalidStatus,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::InvalidTimestamp => "invalid_timestamp",
            ErrorCode::InvalidStatus => "invalid_status",
        }
    }
}

/// Wire name of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(message: impl Into<String>, field: FieldName, code: ErrorCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn value_error(
    message: impl Into<String>,
    field: FieldName,
    code: ErrorCode,
    value: &str,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
        "value": value,
    }))
}

pub(crate) fn missing_field_error(field: FieldName, message: &str) -> Error {
    field_error(message, field, ErrorCode::MissingField)
}

/// Unwrap an optional field, failing with `message` when absent.
pub(crate) fn required<T>(value: Option<T>, field: FieldName, message: &str) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field, message))
}

/// Unwrap an optional text field, treating blank input as absent.
pub(crate) fn required_text(
    value: Option<String>,
    field: FieldName,
    message: &str,
) -> Result<String, Error> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(missing_field_error(field, message)),
    }
}

/// Parse a typed entity identifier.
pub(crate) fn parse_id<I>(value: &str, field: FieldName) -> Result<I, Error>
where
    I: FromStr<Err = IdParseError>,
{
    value.parse().map_err(|_| {
        value_error(
            format!("{} must be a valid UUID", field.as_str()),
            field,
            ErrorCode::InvalidUuid,
            value,
        )
    })
}

/// Parse a calendar date from `YYYY-MM-DD` or the date part of an RFC 3339
/// timestamp.
pub(crate) fn parse_date(value: &str, field: FieldName) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value.trim()).map(|ts| ts.date_naive()))
        .map_err(|_| {
            value_error(
                format!("{} must be a date (YYYY-MM-DD)", field.as_str()),
                field,
                ErrorCode::InvalidDate,
                value,
            )
        })
}

/// Parse an instant from RFC 3339, or `YYYY-MM-DD` taken as midnight UTC.
pub(crate) fn parse_instant(value: &str, field: FieldName) -> Result<DateTime<Utc>, Error> {
    let trimmed = value.trim();
    DateTime::parse_from_rfc3339(trimmed)
        .map(|ts| ts.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        })
        .map_err(|_| {
            value_error(
                format!("{} must be an RFC 3339 timestamp", field.as_str()),
                field,
                ErrorCode::InvalidTimestamp,
                value,
            )
        })
}

/// Parse a status into its closed vocabulary.
pub(crate) fn parse_status<S>(value: &str, field: FieldName) -> Result<S, Error>
where
    S: FromStr<Err = StatusParseError>,
{
    value.parse().map_err(|err: StatusParseError| {
        value_error(err.to_string(), field, ErrorCode::InvalidStatus, value)
    })
}
