// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{
    Json,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
};
use crew_leave::{EligibilityVerdict, NewRequest, TransitionResult, create_request};
use crew_leave_audit::{AuditEvent, Cause};
use crew_leave_domain::{
    LeaveRequest, PeriodCode, Pilot, PilotId, Rank, RequestId, RequestStatus,
    RosterCalendar, RosterPeriod, parse_date,
};
use crew_leave_persistence::{EvaluationOutcome, SubmissionOutcome};
use time::{Date, OffsetDateTime};
use tracing::info;

use crate::AppState;
use crate::api::{
    ActorFields, AuditEventResponse, CreateRequestApiRequest, DateQuery, EvaluateApiRequest,
    EvaluateResponse, HealthResponse, PeriodQuery, PeriodRequestsResponse, PilotResponse,
    RangeQuery, RegisterPilotApiRequest, RequestResponse, TransitionApiRequest,
};
use crate::error::HttpError;

fn request_response(
    request: LeaveRequest,
    calendar: &RosterCalendar,
    event_id: Option<i64>,
) -> RequestResponse {
    RequestResponse {
        roster_period: request.roster_period(calendar),
        request,
        event_id,
        verdict: None,
    }
}

/// Reports the request as it stands after any evaluation, with the event
/// of the actor's own change.
fn submission_response(outcome: SubmissionOutcome, calendar: &RosterCalendar) -> RequestResponse {
    let request: LeaveRequest = outcome.current_request().clone();
    RequestResponse {
        roster_period: request.roster_period(calendar),
        request,
        event_id: outcome.stored.audit_event.event_id,
        verdict: outcome.evaluation.map(|evaluation| evaluation.verdict),
    }
}

/// Handler for GET `/health`.
#[allow(clippy::unused_async)]
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for POST `/pilots`.
pub async fn handle_register_pilot(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterPilotApiRequest>,
) -> Result<(StatusCode, Json<PilotResponse>), HttpError> {
    info!(
        actor_id = %req.by.actor_id,
        pilot_id = req.pilot_id,
        rank = %req.rank,
        "Handling register_pilot request"
    );

    let rank: Rank = req.rank.parse()?;
    let pilot: Pilot = Pilot::new(PilotId(req.pilot_id), rank, req.seniority_number)?;

    let mut persistence = app_state.persistence.lock().await;
    let event_id: i64 = persistence.register_pilot(&pilot, req.by.actor()?, req.by.cause())?;
    drop(persistence);

    Ok((
        StatusCode::CREATED,
        Json(PilotResponse {
            pilot,
            event_id: Some(event_id),
        }),
    ))
}

/// Handler for POST `/pilots/{pilot_id}/deactivate`.
pub async fn handle_deactivate_pilot(
    AxumState(app_state): AxumState<AppState>,
    Path(pilot_id): Path<i64>,
    Json(req): Json<ActorFields>,
) -> Result<Json<PilotResponse>, HttpError> {
    info!(actor_id = %req.actor_id, pilot_id, "Handling deactivate_pilot request");

    let mut persistence = app_state.persistence.lock().await;
    let pilot: Pilot = persistence.deactivate_pilot(PilotId(pilot_id), req.actor()?, req.cause())?;
    drop(persistence);

    Ok(Json(PilotResponse {
        pilot,
        event_id: None,
    }))
}

/// Handler for POST `/requests`.
///
/// Creates a draft, or a submitted request when `submit` is set. A submitted
/// request is evaluated straight away and the verdict applied.
pub async fn handle_create_request(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateRequestApiRequest>,
) -> Result<(StatusCode, Json<RequestResponse>), HttpError> {
    info!(
        actor_id = %req.by.actor_id,
        pilot_id = req.pilot_id,
        request_type = %req.request_type,
        submit = req.submit,
        "Handling create_request request"
    );

    let command: NewRequest = NewRequest {
        pilot_id: PilotId(req.pilot_id),
        category: req.category.parse()?,
        request_type: req.request_type.parse()?,
        start_date: parse_date(&req.start_date)?,
        end_date: parse_date(&req.end_date)?,
        submit: req.submit,
    };
    let created: TransitionResult = create_request(
        command,
        req.by.actor()?,
        req.by.cause(),
        OffsetDateTime::now_utc(),
        &app_state.config,
    )?;

    let mut persistence = app_state.persistence.lock().await;
    let outcome: SubmissionOutcome = persistence.insert_and_evaluate(
        &created,
        OffsetDateTime::now_utc(),
        &app_state.config,
    )?;
    drop(persistence);

    info!(
        request_id = ?outcome.stored.request.request_id,
        is_late = ?outcome.stored.request.is_late,
        status = %outcome.current_request().status,
        "Created request"
    );

    Ok((
        StatusCode::CREATED,
        Json(submission_response(outcome, &app_state.config.calendar())),
    ))
}

/// Handler for GET `/requests/{request_id}`.
pub async fn handle_get_request(
    AxumState(app_state): AxumState<AppState>,
    Path(request_id): Path<i64>,
) -> Result<Json<RequestResponse>, HttpError> {
    info!(request_id, "Handling get_request request");

    let mut persistence = app_state.persistence.lock().await;
    let request: LeaveRequest = persistence.get_request(RequestId(request_id))?;
    drop(persistence);

    Ok(Json(request_response(
        request,
        &app_state.config.calendar(),
        None,
    )))
}

/// Handler for POST `/requests/{request_id}/evaluate`.
///
/// Evaluates the request and applies the verdict as the system actor.
pub async fn handle_evaluate_request(
    AxumState(app_state): AxumState<AppState>,
    Path(request_id): Path<i64>,
    Json(req): Json<EvaluateApiRequest>,
) -> Result<Json<EvaluateResponse>, HttpError> {
    info!(request_id, cause_id = %req.cause_id, "Handling evaluate_request request");

    let cause: Cause = Cause::new(req.cause_id, req.cause_description);
    let request_id: RequestId = RequestId(request_id);

    let mut persistence = app_state.persistence.lock().await;
    let outcome: EvaluationOutcome = persistence.evaluate_and_apply(
        request_id,
        cause,
        OffsetDateTime::now_utc(),
        &app_state.config,
    )?;
    let (request, event_id): (LeaveRequest, Option<i64>) = match outcome.applied {
        Some(applied) => (applied.request, applied.audit_event.event_id),
        None => (persistence.get_request(request_id)?, None),
    };
    drop(persistence);

    Ok(Json(EvaluateResponse {
        verdict: outcome.verdict,
        request,
        event_id,
    }))
}

/// Handler for GET `/requests/{request_id}/eligibility`.
///
/// Re-checks eligibility against the current roster without writing.
pub async fn handle_check_eligibility(
    AxumState(app_state): AxumState<AppState>,
    Path(request_id): Path<i64>,
) -> Result<Json<EligibilityVerdict>, HttpError> {
    info!(request_id, "Handling check_eligibility request");

    let mut persistence = app_state.persistence.lock().await;
    let verdict: EligibilityVerdict =
        persistence.recheck_request(RequestId(request_id), &app_state.config)?;
    drop(persistence);

    Ok(Json(verdict))
}

/// Handler for POST `/requests/{request_id}/transition`.
///
/// Submitting a draft also evaluates it and applies the verdict.
pub async fn handle_transition_request(
    AxumState(app_state): AxumState<AppState>,
    Path(request_id): Path<i64>,
    Json(req): Json<TransitionApiRequest>,
) -> Result<Json<RequestResponse>, HttpError> {
    info!(
        actor_id = %req.by.actor_id,
        request_id,
        status = %req.status,
        "Handling transition_request request"
    );

    let new_status: RequestStatus = req.status.parse()?;

    let mut persistence = app_state.persistence.lock().await;
    let outcome: SubmissionOutcome = persistence.transition_and_evaluate(
        RequestId(request_id),
        new_status,
        req.by.actor()?,
        req.by.cause(),
        req.comments,
        OffsetDateTime::now_utc(),
        &app_state.config,
    )?;
    drop(persistence);

    Ok(Json(submission_response(
        outcome,
        &app_state.config.calendar(),
    )))
}

/// Handler for GET `/requests/{request_id}/audit`.
pub async fn handle_get_audit_history(
    AxumState(app_state): AxumState<AppState>,
    Path(request_id): Path<i64>,
) -> Result<Json<Vec<AuditEventResponse>>, HttpError> {
    info!(request_id, "Handling get_audit_history request");

    let request_id: RequestId = RequestId(request_id);

    let mut persistence = app_state.persistence.lock().await;
    persistence.get_request(request_id)?;
    let events: Vec<AuditEvent> = persistence.get_audit_history(request_id)?;
    drop(persistence);

    Ok(Json(events.iter().map(AuditEventResponse::from).collect()))
}

/// Handler for GET `/roster-periods/lookup?date=`.
#[allow(clippy::unused_async)]
pub async fn handle_lookup_period(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<DateQuery>,
) -> Result<Json<RosterPeriod>, HttpError> {
    let day: Date = parse_date(&params.date)?;
    let calendar: RosterCalendar = app_state.config.calendar();
    Ok(Json(calendar.bounds_of(calendar.period_for(day))?))
}

/// Handler for GET `/roster-periods?start=&end=`.
///
/// Lists every period touched by the range, in order.
#[allow(clippy::unused_async)]
pub async fn handle_list_periods(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<RangeQuery>,
) -> Result<Json<Vec<RosterPeriod>>, HttpError> {
    let start: Date = parse_date(&params.start)?;
    let end: Date = parse_date(&params.end)?;
    let calendar: RosterCalendar = app_state.config.calendar();

    let periods: Vec<RosterPeriod> = calendar
        .periods_overlapping(start, end)?
        .into_iter()
        .map(|code| calendar.bounds_of(code))
        .collect::<Result<_, _>>()?;

    Ok(Json(periods))
}

/// Handler for GET `/roster-periods/requests?code=`.
pub async fn handle_list_period_requests(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<PeriodQuery>,
) -> Result<Json<PeriodRequestsResponse>, HttpError> {
    info!(code = %params.code, "Handling list_period_requests request");

    let code: PeriodCode = params.code.parse()?;
    let calendar: RosterCalendar = app_state.config.calendar();
    let period: RosterPeriod = calendar.bounds_of(code)?;

    let mut persistence = app_state.persistence.lock().await;
    let requests: Vec<LeaveRequest> = persistence.list_requests_in_period(code, &calendar)?;
    drop(persistence);

    Ok(Json(PeriodRequestsResponse { period, requests }))
}
