// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::request::LeaveRequest;
use crate::types::{RequestCategory, RequestType};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Validates that a request type belongs to the stated category.
///
/// # Errors
///
/// Returns `DomainError::CategoryMismatch` if the type belongs to the other category.
pub fn validate_request_kind(
    category: RequestCategory,
    request_type: RequestType,
) -> Result<(), DomainError> {
    if request_type.category() != category {
        return Err(DomainError::CategoryMismatch {
            request_type,
            category,
        });
    }
    Ok(())
}

/// Validates the shape of a request before any rule is evaluated against it.
///
/// This checks only what the request says about itself. It does NOT check
/// the pilot reference or anything that requires other records.
///
/// # Errors
///
/// Returns an error if:
/// - The end date is before the start date
/// - The request type does not belong to the request category
pub fn validate_request_fields(request: &LeaveRequest) -> Result<(), DomainError> {
    request.dates.validate()?;
    validate_request_kind(request.category, request.request_type)?;
    Ok(())
}

/// Decides whether a submission is late.
///
/// A request is late when fewer than `notice_days` whole days separate the
/// submission date from the first requested day. Requests submitted on or
/// after their start date are always late.
#[must_use]
pub fn is_late_submission(start_date: Date, submitted_at: OffsetDateTime, notice_days: u32) -> bool {
    let notice_given: i64 = (start_date - submitted_at.date()).whole_days();
    notice_given < i64::from(notice_days)
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// Only years 0000 through 9999 are accepted. Stored dates keep a fixed
/// four digit year so that text order matches calendar order.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date
/// or the year is negative.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    let day: Date = Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(
        |e| DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        },
    )?;
    if day.year() < 0 {
        return Err(DomainError::DateParseError {
            date_string: value.to_string(),
            error: String::from("year must be between 0000 and 9999"),
        });
    }
    Ok(day)
}

/// Parses an RFC 3339 timestamp.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid timestamp.
pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, DomainError> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a timestamp as RFC 3339.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the timestamp cannot be
/// represented (offsets with seconds, years outside `0..=9999`).
pub fn format_timestamp(value: OffsetDateTime) -> Result<String, DomainError> {
    value
        .format(&Rfc3339)
        .map_err(|e| DomainError::DateArithmeticOverflow {
            operation: format!("formatting timestamp: {e}"),
        })
}
