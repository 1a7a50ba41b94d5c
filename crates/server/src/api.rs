// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response bodies of the HTTP API.

use crew_leave::EligibilityVerdict;
use crew_leave_audit::{Actor, AuditEvent, Cause};
use crew_leave_domain::{LeaveRequest, PeriodCode, Pilot, PilotId, RosterPeriod};
use serde::{Deserialize, Serialize};

use crate::error::HttpError;

/// Who is acting and why. Flattened into every write request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActorFields {
    /// The actor ID. For pilots, the pilot ID.
    pub actor_id: String,
    /// Either `pilot` or `reviewer`.
    pub actor_type: String,
    /// The cause ID for this action.
    pub cause_id: String,
    /// The cause description.
    pub cause_description: String,
}

impl ActorFields {
    /// Resolves the actor.
    ///
    /// The system identity is reserved for automatic decisions and cannot
    /// be claimed over the API.
    pub fn actor(&self) -> Result<Actor, HttpError> {
        match self.actor_type.as_str() {
            "pilot" => {
                let pilot_id: i64 = self.actor_id.parse().map_err(|_| {
                    HttpError::bad_request(format!(
                        "Invalid pilot actor ID: '{}'",
                        self.actor_id
                    ))
                })?;
                Ok(Actor::pilot(PilotId(pilot_id)))
            }
            "reviewer" => Ok(Actor::reviewer(&self.actor_id)),
            other => Err(HttpError::bad_request(format!(
                "Invalid actor type: '{other}'. Must be 'pilot' or 'reviewer'"
            ))),
        }
    }

    pub fn cause(&self) -> Cause {
        Cause::new(self.cause_id.clone(), self.cause_description.clone())
    }
}

/// API request for registering a pilot.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegisterPilotApiRequest {
    #[serde(flatten)]
    pub by: ActorFields,
    pub pilot_id: i64,
    /// `captain` or `first_officer`.
    pub rank: String,
    /// Lower is more senior.
    pub seniority_number: u32,
}

/// API request for creating a leave or flight request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateRequestApiRequest {
    #[serde(flatten)]
    pub by: ActorFields,
    pub pilot_id: i64,
    /// `leave` or `flight`.
    pub category: String,
    pub request_type: String,
    /// ISO 8601 date.
    pub start_date: String,
    /// ISO 8601 date, inclusive.
    pub end_date: String,
    /// Submit immediately instead of saving a draft.
    #[serde(default)]
    pub submit: bool,
}

/// API request for a workflow status change.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransitionApiRequest {
    #[serde(flatten)]
    pub by: ActorFields,
    /// Target status, e.g. `submitted` or `withdrawn`.
    pub status: String,
    pub comments: Option<String>,
}

/// API request for evaluating a request. The system acts, so only the cause is given.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EvaluateApiRequest {
    pub cause_id: String,
    pub cause_description: String,
}

/// Query for `GET /roster-periods/lookup`.
#[derive(Debug, Clone, Deserialize)]
pub struct DateQuery {
    pub date: String,
}

/// Query for `GET /roster-periods`.
#[derive(Debug, Clone, Deserialize)]
pub struct RangeQuery {
    pub start: String,
    pub end: String,
}

/// Query for `GET /roster-periods/requests`.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodQuery {
    /// A period code such as `RP4/2026`.
    pub code: String,
}

/// Response to a pilot write.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PilotResponse {
    pub pilot: Pilot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i64>,
}

/// A request as returned by the API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RequestResponse {
    pub request: LeaveRequest,
    /// The period the request is filed under.
    pub roster_period: PeriodCode,
    /// The audit event written by this call, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i64>,
    /// The verdict applied when this call submitted the request.
    #[serde(skip_serializing_if = "Option::is_none", skip_deserializing)]
    pub verdict: Option<EligibilityVerdict>,
}

/// Response to `POST /requests/{id}/evaluate`.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluateResponse {
    pub verdict: EligibilityVerdict,
    /// The request after the verdict was applied.
    pub request: LeaveRequest,
    /// `None` when the verdict changed nothing.
    pub event_id: Option<i64>,
}

/// An audit event as returned by the API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditEventResponse {
    pub event_id: Option<i64>,
    pub request_id: Option<i64>,
    pub actor_id: String,
    pub actor_type: String,
    pub cause_id: String,
    pub cause_description: String,
    pub action_name: String,
    pub action_details: Option<String>,
    pub before_snapshot: String,
    pub after_snapshot: String,
}

impl From<&AuditEvent> for AuditEventResponse {
    fn from(event: &AuditEvent) -> Self {
        Self {
            event_id: event.event_id,
            request_id: event.request_id.map(|id| id.0),
            actor_id: event.actor.id.clone(),
            actor_type: event.actor.actor_type.clone(),
            cause_id: event.cause.id.clone(),
            cause_description: event.cause.description.clone(),
            action_name: event.action.name.clone(),
            action_details: event.action.details.clone(),
            before_snapshot: event.before.data.clone(),
            after_snapshot: event.after.data.clone(),
        }
    }
}

/// Requests filed under one roster period.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PeriodRequestsResponse {
    pub period: RosterPeriod,
    pub requests: Vec<LeaveRequest>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
}
