// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request lifecycle transitions.
//!
//! Every function here is pure: it takes the current request and returns
//! the next one together with the audit event describing the change. A
//! rejected transition returns an error and applies nothing.

use crate::config::EngineConfig;
use crate::eligibility::{EligibilityVerdict, Recommendation};
use crate::error::CoreError;
use crew_leave_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use crew_leave_domain::{
    DateRange, DomainError, LeaveRequest, PilotId, RequestCategory, RequestStatus, RequestType,
    ReviewDecision, is_late_submission, validate_request_fields, validate_request_kind,
};
use time::{Date, OffsetDateTime};

/// The result of a successful request transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The status the transition started from. `None` for a new request.
    pub previous_status: Option<RequestStatus>,
    /// The request after the transition.
    pub request: LeaveRequest,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}

/// A pilot's intent to create a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRequest {
    /// The requesting pilot.
    pub pilot_id: PilotId,
    /// The stated category. Must match `request_type`.
    pub category: RequestCategory,
    /// The request type.
    pub request_type: RequestType,
    /// First requested day.
    pub start_date: Date,
    /// Last requested day, inclusive.
    pub end_date: Date,
    /// Submit immediately instead of saving a draft.
    pub submit: bool,
}

/// Renders the parts of a request the audit trail tracks.
#[must_use]
pub fn request_snapshot(request: &LeaveRequest) -> StateSnapshot {
    let late: &str = match request.is_late {
        Some(true) => "true",
        Some(false) => "false",
        None => "unset",
    };
    StateSnapshot::new(format!(
        "status={},type={},dates={},is_late={late}",
        request.status.as_str(),
        request.request_type.as_str(),
        request.dates
    ))
}

/// Creates a new request as a draft, or directly submitted.
///
/// # Errors
///
/// Returns `CoreError::Validation` if:
/// - The end date is before the start date
/// - The request type does not belong to the stated category
///
/// Returns `CoreError::InvalidTransition` if a pilot files a request for
/// another pilot.
pub fn create_request(
    command: NewRequest,
    actor: Actor,
    cause: Cause,
    at: OffsetDateTime,
    config: &EngineConfig,
) -> Result<TransitionResult, CoreError> {
    let initial: RequestStatus = if command.submit {
        RequestStatus::Submitted
    } else {
        RequestStatus::Draft
    };
    if actor.actor_type == "pilot" && actor.id != command.pilot_id.to_string() {
        return Err(invalid(
            RequestStatus::Draft,
            initial,
            format!(
                "pilot {} cannot file a request for pilot {}",
                actor.id, command.pilot_id
            ),
        ));
    }

    let dates: DateRange =
        DateRange::new(command.start_date, command.end_date).map_err(CoreError::Validation)?;
    validate_request_kind(command.category, command.request_type)
        .map_err(CoreError::Validation)?;

    let mut request: LeaveRequest =
        LeaveRequest::draft(command.pilot_id, command.request_type, dates);
    if command.submit {
        stamp_submission(&mut request, at, config);
    }

    let details: String = format!(
        "{} {} request for {}{}",
        if command.submit { "Submitted" } else { "Drafted" },
        request.request_type.as_str(),
        request.dates,
        if request.is_late == Some(true) {
            " (late)"
        } else {
            ""
        }
    );

    let audit_event: AuditEvent = AuditEvent::new(
        None,
        actor,
        cause,
        Action::new(String::from("CreateRequest"), Some(details)),
        StateSnapshot::new(String::from("status=none")),
        request_snapshot(&request),
    );

    Ok(TransitionResult {
        previous_status: None,
        request,
        audit_event,
    })
}

/// Moves a request to `new_status`.
///
/// Entering `Submitted` stamps the submission time and fixes the late flag.
/// Entering `Approved` or `Denied` records the acting reviewer, the time and
/// the comments.
///
/// Pilots may only act on their own requests, and may only submit or
/// withdraw them. Reviewers and the system may make any permitted move.
///
/// # Errors
///
/// Returns an error if:
/// - The lifecycle does not permit the move (`CoreError::InvalidTransition`)
/// - The actor may not make the move (`CoreError::InvalidTransition`)
/// - A request being submitted is malformed (`CoreError::Validation`)
pub fn transition(
    request: &LeaveRequest,
    new_status: RequestStatus,
    actor: Actor,
    cause: Cause,
    comments: Option<String>,
    at: OffsetDateTime,
    config: &EngineConfig,
) -> Result<TransitionResult, CoreError> {
    request
        .status
        .validate_transition(new_status)
        .map_err(|err| match err {
            DomainError::InvalidStatusTransition { reason, .. } => {
                invalid(request.status, new_status, reason)
            }
            other => CoreError::DomainViolation(other),
        })?;

    check_actor(request, new_status, &actor)?;

    let before: StateSnapshot = request_snapshot(request);
    let mut next: LeaveRequest = request.clone();
    next.status = new_status;

    match new_status {
        RequestStatus::Submitted => {
            validate_request_fields(request).map_err(CoreError::Validation)?;
            stamp_submission(&mut next, at, config);
        }
        RequestStatus::Approved | RequestStatus::Denied => {
            next.decision = Some(ReviewDecision {
                reviewer_id: actor.id.clone(),
                decided_at: at,
                comments: comments.clone(),
            });
        }
        RequestStatus::Draft | RequestStatus::InReview | RequestStatus::Withdrawn => {}
    }

    let action_name: &str = match new_status {
        RequestStatus::Submitted => "SubmitRequest",
        RequestStatus::InReview => "PlaceInReview",
        RequestStatus::Approved => "ApproveRequest",
        RequestStatus::Denied => "DenyRequest",
        RequestStatus::Withdrawn => "WithdrawRequest",
        RequestStatus::Draft => "ReturnToDraft",
    };

    let audit_event: AuditEvent = AuditEvent::new(
        request.request_id,
        actor,
        cause,
        Action::new(action_name.to_string(), comments),
        before,
        request_snapshot(&next),
    );

    Ok(TransitionResult {
        previous_status: Some(request.status),
        request: next,
        audit_event,
    })
}

/// Applies an engine verdict to the request it was computed for.
///
/// The move is attributed to the system actor: `Approve` approves, `Deny`
/// denies, and `Review` places the request in review. The verdict reason is
/// recorded as the comment. Returns `Ok(None)` when a `Review` verdict
/// finds the request already in review.
///
/// # Errors
///
/// Returns an error if:
/// - The verdict was computed for a different request
/// - The request's current status does not permit the move
pub fn apply_verdict(
    request: &LeaveRequest,
    verdict: &EligibilityVerdict,
    cause: Cause,
    at: OffsetDateTime,
    config: &EngineConfig,
) -> Result<Option<TransitionResult>, CoreError> {
    if verdict.request_id != request.request_id {
        return Err(CoreError::InsufficientData(format!(
            "verdict for {} cannot be applied to {}",
            verdict
                .request_id
                .map_or_else(|| String::from("an unsaved request"), |id| id.to_string()),
            request.label()
        )));
    }

    let target: RequestStatus = match verdict.recommendation {
        Recommendation::Approve => RequestStatus::Approved,
        Recommendation::Deny => RequestStatus::Denied,
        Recommendation::Review => RequestStatus::InReview,
    };

    if target == RequestStatus::InReview && request.status == RequestStatus::InReview {
        return Ok(None);
    }

    transition(
        request,
        target,
        Actor::system(),
        cause,
        Some(verdict.reason.clone()),
        at,
        config,
    )
    .map(Some)
}

fn stamp_submission(request: &mut LeaveRequest, at: OffsetDateTime, config: &EngineConfig) {
    request.status = RequestStatus::Submitted;
    request.submitted_at = Some(at);
    request.is_late = Some(is_late_submission(
        request.dates.start,
        at,
        config.late_notice_days,
    ));
}

fn check_actor(
    request: &LeaveRequest,
    new_status: RequestStatus,
    actor: &Actor,
) -> Result<(), CoreError> {
    if actor.actor_type != "pilot" {
        return Ok(());
    }
    if actor.id != request.pilot_id.to_string() {
        return Err(invalid(
            request.status,
            new_status,
            format!("pilot {} does not own {}", actor.id, request.label()),
        ));
    }
    if !matches!(
        new_status,
        RequestStatus::Submitted | RequestStatus::Withdrawn
    ) {
        return Err(invalid(
            request.status,
            new_status,
            String::from("only a reviewer can place a request in review or decide it"),
        ));
    }
    Ok(())
}

const fn invalid(from: RequestStatus, to: RequestStatus, reason: String) -> CoreError {
    CoreError::InvalidTransition { from, to, reason }
}
