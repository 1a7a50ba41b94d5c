// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Orchestration mutations.
//!
//! Each function writes a record change and the audit event describing it.
//! They must be called inside a transaction.

use diesel::SqliteConnection;
use crew_leave::{CoreError, EligibilityVerdict, EngineConfig, TransitionResult, apply_verdict};
use crew_leave_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use crew_leave_domain::{DomainError, LeaveRequest, Pilot, PilotId, RequestId, RequestStatus};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::EvaluationOutcome;
use crate::error::PersistenceError;
use crate::mutations::audit::persist_audit_event;
use crate::mutations::{pilots, requests};
use crate::queries::pilots::{get_pilot, pilot_exists};
use crate::queries::requests::get_request;
use crate::queries::snapshot::evaluate_request;

/// Stores a newly created request together with its creation event.
///
/// # Returns
///
/// The stored request carrying its new ID, and the audit event carrying
/// both the request ID and its own event ID.
///
/// # Errors
///
/// Returns `PersistenceError::PilotNotFound` if the owning pilot is not
/// registered, or an error if either insert fails.
pub fn persist_new_request(
    conn: &mut SqliteConnection,
    result: &TransitionResult,
) -> Result<TransitionResult, PersistenceError> {
    if !matches!(
        result.request.status,
        RequestStatus::Draft | RequestStatus::Submitted
    ) {
        return Err(CoreError::InvalidTransition {
            from: RequestStatus::Draft,
            to: result.request.status,
            reason: String::from("a new request starts as draft or submitted"),
        }
        .into());
    }
    if !pilot_exists(conn, result.request.pilot_id)? {
        return Err(PersistenceError::PilotNotFound(result.request.pilot_id));
    }

    let request_id: RequestId = requests::insert_request(conn, &result.request)?;
    let audit_event: AuditEvent = result.audit_event.clone().for_request(request_id);
    let event_id: i64 = persist_audit_event(conn, &audit_event)?;

    info!(
        request_id = request_id.0,
        pilot_id = result.request.pilot_id.0,
        status = %result.request.status,
        event_id,
        "Persisted new request"
    );

    Ok(TransitionResult {
        previous_status: None,
        request: result.request.clone().with_id(request_id),
        audit_event: audit_event.with_event_id(event_id),
    })
}

/// Stores a status transition of an existing request and its audit event.
///
/// # Errors
///
/// Returns an error if the request was never stored or either write fails.
pub fn persist_transition(
    conn: &mut SqliteConnection,
    result: &TransitionResult,
) -> Result<TransitionResult, PersistenceError> {
    let request_id: RequestId = result.request.request_id.ok_or_else(|| {
        PersistenceError::NotFound(format!(
            "cannot store a transition of {}",
            result.request.label()
        ))
    })?;

    let stored: LeaveRequest = get_request(conn, request_id)?;
    check_stored_status(&stored, result)?;

    requests::update_request_status(conn, request_id, &result.request)?;
    debug!(request_id = request_id.0, status = %result.request.status, "Updated request status");

    let audit_event: AuditEvent = result.audit_event.clone().for_request(request_id);
    let event_id: i64 = persist_audit_event(conn, &audit_event)?;

    info!(
        request_id = request_id.0,
        action = %audit_event.action.name,
        event_id,
        "Persisted transition"
    );

    Ok(TransitionResult {
        previous_status: result.previous_status,
        request: result.request.clone(),
        audit_event: audit_event.with_event_id(event_id),
    })
}

/// Registers a pilot and records the roster event.
///
/// # Returns
///
/// The event ID of the roster event.
///
/// # Errors
///
/// Returns `PersistenceError::PilotAlreadyExists` if the ID is taken.
/// Evaluates a stored request against the current roster and stores the
/// resulting status change, attributed to the system.
pub fn evaluate_and_apply(
    conn: &mut SqliteConnection,
    request_id: RequestId,
    cause: Cause,
    at: OffsetDateTime,
    config: &EngineConfig,
) -> Result<EvaluationOutcome, PersistenceError> {
    let request: LeaveRequest = get_request(conn, request_id)?;
    let verdict: EligibilityVerdict = evaluate_request(conn, &request, config)?;

    let applied: Option<TransitionResult> =
        match apply_verdict(&request, &verdict, cause, at, config)? {
            Some(result) => Some(persist_transition(conn, &result)?),
            None => None,
        };

    info!(
        request_id = request_id.0,
        recommendation = %verdict.recommendation,
        applied = applied.is_some(),
        "Evaluated and applied request"
    );

    Ok(EvaluationOutcome { verdict, applied })
}

/// Evaluates `stored` if it has just entered `Submitted`.
pub fn evaluate_if_submitted(
    conn: &mut SqliteConnection,
    stored: &TransitionResult,
    at: OffsetDateTime,
    config: &EngineConfig,
) -> Result<Option<EvaluationOutcome>, PersistenceError> {
    if stored.request.status != RequestStatus::Submitted {
        return Ok(None);
    }
    let Some(request_id) = stored.request.request_id else {
        return Ok(None);
    };
    evaluate_and_apply(conn, request_id, stored.audit_event.cause.clone(), at, config).map(Some)
}

/// Rejects a transition computed from a status the request no longer has.
fn check_stored_status(
    stored: &LeaveRequest,
    result: &TransitionResult,
) -> Result<(), PersistenceError> {
    let to: RequestStatus = result.request.status;
    let rejected = |reason: String| -> PersistenceError {
        CoreError::InvalidTransition {
            from: stored.status,
            to,
            reason,
        }
        .into()
    };

    let Some(from) = result.previous_status else {
        return Err(rejected(format!(
            "{} is already stored and cannot be created again",
            stored.label()
        )));
    };
    if from != stored.status {
        return Err(rejected(format!(
            "{} is {} but the change was computed from {}",
            stored.label(),
            stored.status,
            from
        )));
    }

    stored.status.validate_transition(to).map_err(|err| match err {
        DomainError::InvalidStatusTransition { reason, .. } => rejected(reason),
        other => CoreError::DomainViolation(other).into(),
    })
}

pub fn register_pilot(
    conn: &mut SqliteConnection,
    pilot: &Pilot,
    actor: Actor,
    cause: Cause,
) -> Result<i64, PersistenceError> {
    if pilot_exists(conn, pilot.pilot_id)? {
        return Err(PersistenceError::PilotAlreadyExists(pilot.pilot_id));
    }

    pilots::insert_pilot(conn, pilot)?;

    let event: AuditEvent = AuditEvent::new(
        None,
        actor,
        cause,
        Action::new(
            String::from("RegisterPilot"),
            Some(format!(
                "Registered pilot {} as {} with seniority {}",
                pilot.pilot_id, pilot.rank, pilot.seniority_number
            )),
        ),
        StateSnapshot::new(String::from("pilot=none")),
        pilot_snapshot(pilot),
    );
    let event_id: i64 = persist_audit_event(conn, &event)?;

    info!(pilot_id = pilot.pilot_id.0, rank = %pilot.rank, event_id, "Registered pilot");
    Ok(event_id)
}

/// Deactivates a pilot and records the roster event.
///
/// Deactivating an inactive pilot writes nothing.
///
/// # Returns
///
/// The pilot as now stored.
///
/// # Errors
///
/// Returns `PersistenceError::PilotNotFound` if no such pilot exists.
pub fn deactivate_pilot(
    conn: &mut SqliteConnection,
    pilot_id: PilotId,
    actor: Actor,
    cause: Cause,
) -> Result<Pilot, PersistenceError> {
    let pilot: Pilot = get_pilot(conn, pilot_id)?;
    if !pilot.is_active {
        debug!(pilot_id = pilot_id.0, "Pilot already inactive");
        return Ok(pilot);
    }

    pilots::deactivate_pilot(conn, pilot_id)?;
    let deactivated: Pilot = pilot.clone().deactivated();

    let event: AuditEvent = AuditEvent::new(
        None,
        actor,
        cause,
        Action::new(String::from("DeactivatePilot"), None),
        pilot_snapshot(&pilot),
        pilot_snapshot(&deactivated),
    );
    let event_id: i64 = persist_audit_event(conn, &event)?;

    info!(pilot_id = pilot_id.0, event_id, "Deactivated pilot");
    Ok(deactivated)
}

fn pilot_snapshot(pilot: &Pilot) -> StateSnapshot {
    StateSnapshot::new(format!(
        "pilot={},rank={},seniority={},active={}",
        pilot.pilot_id,
        pilot.rank.as_str(),
        pilot.seniority_number,
        pilot.is_active
    ))
}
