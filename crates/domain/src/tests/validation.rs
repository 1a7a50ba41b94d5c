// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DateRange, DomainError, LeaveRequest, PilotId, RequestCategory, RequestType,
    format_timestamp, is_late_submission, parse_date, parse_timestamp, validate_request_fields,
    validate_request_kind,
};
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

#[test]
fn test_validate_request_kind_accepts_matching_category() {
    assert!(validate_request_kind(RequestCategory::Leave, RequestType::Annual).is_ok());
    assert!(validate_request_kind(RequestCategory::Flight, RequestType::DutySwap).is_ok());
}

#[test]
fn test_validate_request_kind_rejects_mismatch() {
    let result: Result<(), DomainError> =
        validate_request_kind(RequestCategory::Flight, RequestType::Sick);
    assert_eq!(
        result,
        Err(DomainError::CategoryMismatch {
            request_type: RequestType::Sick,
            category: RequestCategory::Flight,
        })
    );
}

#[test]
fn test_validate_request_fields_rejects_inverted_dates() {
    let mut request: LeaveRequest = LeaveRequest::draft(
        PilotId(1),
        RequestType::Annual,
        DateRange::single_day(date!(2026 - 05 - 01)),
    );
    request.dates = DateRange {
        start: date!(2026 - 05 - 04),
        end: date!(2026 - 05 - 01),
    };

    let result: Result<(), DomainError> = validate_request_fields(&request);
    assert!(matches!(result, Err(DomainError::InvalidDateRange { .. })));
}

#[test]
fn test_validate_request_fields_rejects_tampered_category() {
    let mut request: LeaveRequest = LeaveRequest::draft(
        PilotId(1),
        RequestType::Training,
        DateRange::single_day(date!(2026 - 05 - 01)),
    );
    request.category = RequestCategory::Leave;

    let result: Result<(), DomainError> = validate_request_fields(&request);
    assert!(matches!(result, Err(DomainError::CategoryMismatch { .. })));
}

#[test]
fn test_late_submission_boundary() {
    let start: Date = date!(2026 - 03 - 22);

    // Exactly 21 days of notice is on time.
    let on_time: OffsetDateTime = datetime!(2026 - 03 - 01 23:59 UTC);
    assert!(!is_late_submission(start, on_time, 21));

    // 20 days of notice is late.
    let late: OffsetDateTime = datetime!(2026 - 03 - 02 00:00 UTC);
    assert!(is_late_submission(start, late, 21));
}

#[test]
fn test_submission_on_or_after_start_is_late() {
    let start: Date = date!(2026 - 03 - 22);
    assert!(is_late_submission(start, datetime!(2026 - 03 - 22 08:00 UTC), 21));
    assert!(is_late_submission(start, datetime!(2026 - 04 - 01 08:00 UTC), 21));
    assert!(is_late_submission(start, datetime!(2026 - 04 - 01 08:00 UTC), 0));
}

#[test]
fn test_zero_notice_is_never_late_in_advance() {
    let start: Date = date!(2026 - 03 - 22);
    assert!(!is_late_submission(start, datetime!(2026 - 03 - 21 08:00 UTC), 0));
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("2026-01-10").unwrap(), date!(2026 - 01 - 10));

    let result: Result<Date, DomainError> = parse_date("2026-02-30");
    assert!(matches!(result, Err(DomainError::DateParseError { .. })));

    let result: Result<Date, DomainError> = parse_date("10/01/2026");
    assert!(matches!(result, Err(DomainError::DateParseError { .. })));
}

#[test]
fn test_parse_date_rejects_negative_years() {
    let result: Result<Date, DomainError> = parse_date("-0001-12-31");
    assert!(matches!(result, Err(DomainError::DateParseError { .. })));

    assert_eq!(parse_date("0000-01-01").unwrap(), date!(0000 - 01 - 01));
    assert_eq!(parse_date("9999-12-31").unwrap(), date!(9999 - 12 - 31));
}

#[test]
fn test_timestamp_parse_and_format() {
    let parsed: OffsetDateTime = parse_timestamp("2026-02-01T09:30:00Z").unwrap();
    assert_eq!(parsed, datetime!(2026 - 02 - 01 09:30 UTC));
    assert_eq!(format_timestamp(parsed).unwrap(), "2026-02-01T09:30:00Z");

    let result: Result<OffsetDateTime, DomainError> = parse_timestamp("yesterday");
    assert!(matches!(result, Err(DomainError::DateParseError { .. })));
}
