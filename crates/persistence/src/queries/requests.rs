// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request queries.
//!
//! Dates are stored as `YYYY-MM-DD` text. Years are limited to 0000
//! through 9999 on the way in, which keeps every stored date the same
//! width and makes text comparison in SQL follow calendar order.

use diesel::prelude::*;
use diesel::SqliteConnection;
use crew_leave_domain::{
    DateRange, LeaveRequest, PilotId, Rank, RequestCategory, RequestId, RequestStatus,
    RequestType, ReviewDecision, parse_date, parse_timestamp,
};
use time::{Date, OffsetDateTime};

use crate::diesel_schema::{leave_requests, pilots};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = leave_requests)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct RequestRow {
    request_id: i64,
    pilot_id: i64,
    category: String,
    request_type: String,
    start_date: String,
    end_date: String,
    submitted_at: Option<String>,
    status: String,
    is_late: Option<i32>,
    reviewer_id: Option<String>,
    decided_at: Option<String>,
    review_comments: Option<String>,
}

impl TryFrom<RequestRow> for LeaveRequest {
    type Error = PersistenceError;

    fn try_from(row: RequestRow) -> Result<Self, Self::Error> {
        let dates: DateRange =
            DateRange::new(parse_date(&row.start_date)?, parse_date(&row.end_date)?)?;
        let category: RequestCategory = row.category.parse()?;
        let request_type: RequestType = row.request_type.parse()?;
        let status: RequestStatus = row.status.parse()?;
        let submitted_at: Option<OffsetDateTime> = row
            .submitted_at
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;

        let decision: Option<ReviewDecision> = match (row.reviewer_id, row.decided_at) {
            (Some(reviewer_id), Some(decided_at)) => Some(ReviewDecision {
                reviewer_id,
                decided_at: parse_timestamp(&decided_at)?,
                comments: row.review_comments,
            }),
            (None, None) => None,
            _ => {
                return Err(PersistenceError::ReconstructionError(format!(
                    "request {} has an incomplete review decision",
                    row.request_id
                )));
            }
        };

        Ok(Self {
            request_id: Some(RequestId(row.request_id)),
            pilot_id: PilotId(row.pilot_id),
            category,
            request_type,
            dates,
            submitted_at,
            status,
            is_late: row.is_late.map(|flag| flag != 0),
            decision,
        })
    }
}

fn decode(rows: Vec<RequestRow>) -> Result<Vec<LeaveRequest>, PersistenceError> {
    rows.into_iter().map(LeaveRequest::try_from).collect()
}

/// Retrieves a request by ID.
///
/// # Errors
///
/// Returns `PersistenceError::RequestNotFound` if no such request exists.
pub fn get_request(
    conn: &mut SqliteConnection,
    request_id: RequestId,
) -> Result<LeaveRequest, PersistenceError> {
    let row: Option<RequestRow> = leave_requests::table
        .filter(leave_requests::request_id.eq(request_id.0))
        .select(RequestRow::as_select())
        .first::<RequestRow>(conn)
        .optional()?;

    row.ok_or(PersistenceError::RequestNotFound(request_id))?
        .try_into()
}

/// Lists every request, in any status, sharing at least one day with `window`.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_requests_overlapping(
    conn: &mut SqliteConnection,
    window: DateRange,
) -> Result<Vec<LeaveRequest>, PersistenceError> {
    let rows: Vec<RequestRow> = leave_requests::table
        .filter(leave_requests::start_date.le(window.end.to_string()))
        .filter(leave_requests::end_date.ge(window.start.to_string()))
        .order((leave_requests::start_date.asc(), leave_requests::request_id.asc()))
        .select(RequestRow::as_select())
        .load::<RequestRow>(conn)?;
    decode(rows)
}

/// Lists every request whose first day falls in `first..=last`.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_requests_starting_between(
    conn: &mut SqliteConnection,
    first: Date,
    last: Date,
) -> Result<Vec<LeaveRequest>, PersistenceError> {
    let rows: Vec<RequestRow> = leave_requests::table
        .filter(leave_requests::start_date.ge(first.to_string()))
        .filter(leave_requests::start_date.le(last.to_string()))
        .order((leave_requests::start_date.asc(), leave_requests::request_id.asc()))
        .select(RequestRow::as_select())
        .load::<RequestRow>(conn)?;
    decode(rows)
}

/// Lists requests held by pilots of `rank` that overlap `window`.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_rank_requests_overlapping(
    conn: &mut SqliteConnection,
    rank: Rank,
    window: DateRange,
) -> Result<Vec<LeaveRequest>, PersistenceError> {
    let rows: Vec<RequestRow> = leave_requests::table
        .inner_join(pilots::table)
        .filter(pilots::rank.eq(rank.as_str()))
        .filter(leave_requests::start_date.le(window.end.to_string()))
        .filter(leave_requests::end_date.ge(window.start.to_string()))
        .order(leave_requests::request_id.asc())
        .select(RequestRow::as_select())
        .load::<RequestRow>(conn)?;
    decode(rows)
}
