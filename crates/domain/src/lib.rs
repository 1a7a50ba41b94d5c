// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod request;
mod request_status;
mod roster_period;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use request::{LeaveRequest, ReviewDecision};
pub use request_status::RequestStatus;
pub use roster_period::{
    PERIODS_PER_YEAR, PeriodCode, ROSTER_PERIOD_DAYS, RosterAnchor, RosterCalendar, RosterPeriod,
};
pub use types::{DateRange, Pilot, PilotId, Rank, RequestCategory, RequestId, RequestType};
pub use validation::{
    format_timestamp, is_late_submission, parse_date, parse_timestamp, validate_request_fields,
    validate_request_kind,
};
