// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use crew_leave_domain::{LeaveRequest, RequestId, format_timestamp};

use crate::diesel_schema::leave_requests;
use crate::error::PersistenceError;

/// Workflow columns, in the order they are written.
struct WorkflowColumns {
    submitted_at: Option<String>,
    is_late: Option<i32>,
    reviewer_id: Option<String>,
    decided_at: Option<String>,
    review_comments: Option<String>,
}

impl WorkflowColumns {
    fn of(request: &LeaveRequest) -> Result<Self, PersistenceError> {
        let decided_at: Option<String> = request
            .decision
            .as_ref()
            .map(|decision| format_timestamp(decision.decided_at))
            .transpose()?;

        Ok(Self {
            submitted_at: request.submitted_at.map(format_timestamp).transpose()?,
            is_late: request.is_late.map(i32::from),
            reviewer_id: request.decision.as_ref().map(|d| d.reviewer_id.clone()),
            decided_at,
            review_comments: request.decision.as_ref().and_then(|d| d.comments.clone()),
        })
    }
}

/// Inserts a new request and returns the ID the database assigned.
///
/// # Errors
///
/// Returns an error if a timestamp cannot be encoded or the insert fails.
pub fn insert_request(
    conn: &mut SqliteConnection,
    request: &LeaveRequest,
) -> Result<RequestId, PersistenceError> {
    let columns: WorkflowColumns = WorkflowColumns::of(request)?;

    let request_id: i64 = diesel::insert_into(leave_requests::table)
        .values((
            leave_requests::pilot_id.eq(request.pilot_id.0),
            leave_requests::category.eq(request.category.as_str()),
            leave_requests::request_type.eq(request.request_type.as_str()),
            leave_requests::start_date.eq(request.dates.start.to_string()),
            leave_requests::end_date.eq(request.dates.end.to_string()),
            leave_requests::status.eq(request.status.as_str()),
            leave_requests::submitted_at.eq(columns.submitted_at),
            leave_requests::is_late.eq(columns.is_late),
            leave_requests::reviewer_id.eq(columns.reviewer_id),
            leave_requests::decided_at.eq(columns.decided_at),
            leave_requests::review_comments.eq(columns.review_comments),
        ))
        .returning(leave_requests::request_id)
        .get_result(conn)?;

    Ok(RequestId(request_id))
}

/// Writes the workflow state of an existing request.
///
/// Pilot, type and dates never change after creation and are not touched.
///
/// # Errors
///
/// Returns `PersistenceError::RequestNotFound` if the request is not
/// stored, or an error if the update fails.
pub fn update_request_status(
    conn: &mut SqliteConnection,
    request_id: RequestId,
    request: &LeaveRequest,
) -> Result<(), PersistenceError> {
    let columns: WorkflowColumns = WorkflowColumns::of(request)?;

    let updated: usize = diesel::update(
        leave_requests::table.filter(leave_requests::request_id.eq(request_id.0)),
    )
    .set((
        leave_requests::status.eq(request.status.as_str()),
        leave_requests::submitted_at.eq(columns.submitted_at),
        leave_requests::is_late.eq(columns.is_late),
        leave_requests::reviewer_id.eq(columns.reviewer_id),
        leave_requests::decided_at.eq(columns.decided_at),
        leave_requests::review_comments.eq(columns.review_comments),
    ))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::RequestNotFound(request_id));
    }
    Ok(())
}
