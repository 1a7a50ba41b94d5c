// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Leave and flight-change request records.

use crate::request_status::RequestStatus;
use crate::roster_period::{PeriodCode, RosterCalendar};
use crate::types::{DateRange, PilotId, RequestCategory, RequestId, RequestType};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A reviewer's final decision on a request.
///
/// Present only once a request is `Approved` or `Denied`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDecision {
    /// The reviewer who decided. Automatic decisions use the system identity.
    pub reviewer_id: String,
    /// When the decision was recorded.
    pub decided_at: OffsetDateTime,
    /// Optional free-text comments.
    pub comments: Option<String>,
}

/// A single leave or flight-change request by one pilot.
///
/// The request deliberately carries no rank. Rank is always looked up
/// from the pilot record so a stale copy can never influence a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The canonical ID. `None` until persisted.
    pub request_id: Option<RequestId>,
    /// The pilot who owns the request.
    pub pilot_id: PilotId,
    /// The request category.
    pub category: RequestCategory,
    /// The specific request type. Must belong to `category`.
    pub request_type: RequestType,
    /// The requested days, inclusive.
    pub dates: DateRange,
    /// When the request was submitted. `None` while in draft.
    pub submitted_at: Option<OffsetDateTime>,
    /// Current workflow status.
    pub status: RequestStatus,
    /// Whether the request was submitted inside the notice window.
    /// Fixed at submission and never recomputed.
    pub is_late: Option<bool>,
    /// Reviewer decision, present only in `Approved` or `Denied`.
    pub decision: Option<ReviewDecision>,
}

impl LeaveRequest {
    /// Creates a new, unpersisted draft request.
    ///
    /// The category is taken from the request type.
    #[must_use]
    pub const fn draft(pilot_id: PilotId, request_type: RequestType, dates: DateRange) -> Self {
        Self {
            request_id: None,
            pilot_id,
            category: request_type.category(),
            request_type,
            dates,
            submitted_at: None,
            status: RequestStatus::Draft,
            is_late: None,
            decision: None,
        }
    }

    /// Returns a copy of this request carrying a persisted ID.
    #[must_use]
    pub const fn with_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Returns the roster period the request starts in.
    ///
    /// Always recomputed from the start date.
    #[must_use]
    pub fn roster_period(&self, calendar: &RosterCalendar) -> PeriodCode {
        calendar.period_for(self.dates.start)
    }

    /// Returns true if this is the same persisted record as `other_id`.
    #[must_use]
    pub fn is_same_record(&self, other_id: Option<RequestId>) -> bool {
        matches!((self.request_id, other_id), (Some(a), Some(b)) if a == b)
    }

    /// Short label for logs and reasons: the ID when persisted.
    #[must_use]
    pub fn label(&self) -> String {
        self.request_id.map_or_else(
            || format!("unsaved request of pilot {}", self.pilot_id),
            |id| format!("request {id}"),
        )
    }
}
