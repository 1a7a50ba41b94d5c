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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod api;
mod error;
mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use crew_leave::EngineConfig;
use crew_leave_persistence::Persistence;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Crew Leave Server - HTTP server for leave requests and eligibility
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Path to a JSON engine configuration. Defaults apply to missing fields.
    #[arg(short, long)]
    config: Option<String>,
}

/// Application state shared across handlers.
///
/// The persistence layer sits behind a Mutex, so requests touching the
/// database are handled one at a time.
#[derive(Clone)]
pub struct AppState {
    /// Storage for pilots, requests and the audit trail.
    pub persistence: Arc<Mutex<Persistence>>,
    /// Crew minimums, notice period and roster anchor.
    pub config: EngineConfig,
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::handle_health))
        .route("/pilots", post(handlers::handle_register_pilot))
        .route(
            "/pilots/{pilot_id}/deactivate",
            post(handlers::handle_deactivate_pilot),
        )
        .route("/requests", post(handlers::handle_create_request))
        .route("/requests/{request_id}", get(handlers::handle_get_request))
        .route(
            "/requests/{request_id}/evaluate",
            post(handlers::handle_evaluate_request),
        )
        .route(
            "/requests/{request_id}/eligibility",
            get(handlers::handle_check_eligibility),
        )
        .route(
            "/requests/{request_id}/transition",
            post(handlers::handle_transition_request),
        )
        .route(
            "/requests/{request_id}/audit",
            get(handlers::handle_get_audit_history),
        )
        .route("/roster-periods", get(handlers::handle_list_periods))
        .route("/roster-periods/lookup", get(handlers::handle_lookup_period))
        .route(
            "/roster-periods/requests",
            get(handlers::handle_list_period_requests),
        )
        .with_state(app_state)
}

fn load_config(path: Option<&str>) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        info!("Using default engine configuration");
        return Ok(EngineConfig::default());
    };

    info!("Loading engine configuration from: {}", path);
    let contents: String = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Crew Leave Server");

    let config: EngineConfig = load_config(args.config.as_deref())?;
    info!(
        captains = config.minimum_crew.captains,
        first_officers = config.minimum_crew.first_officers,
        late_notice_days = config.late_notice_days,
        "Engine configuration loaded"
    );

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        config,
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::api::{AuditEventResponse, PilotResponse, RequestResponse};
    use crate::error::ErrorResponse;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use crew_leave::{NewRequest, TransitionResult, create_request};
    use crew_leave_audit::{Actor, Cause};
    use crew_leave_domain::{PilotId, RequestCategory, RequestStatus, RequestType, RosterPeriod};
    use serde_json::{Value, json};
    use time::OffsetDateTime;
    use time::macros::date;
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
            config: EngineConfig::default(),
        }
    }

    /// Sends one request through the router and returns the status and body.
    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (HttpStatusCode, Vec<u8>) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let request: Request<Body> = match body {
            Some(value) => builder
                .body(Body::from(serde_json::to_string(&value).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status: HttpStatusCode = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body_bytes.to_vec())
    }

    fn register_body(pilot_id: i64, rank: &str, seniority_number: u32) -> Value {
        json!({
            "actor_id": "crewing-1",
            "actor_type": "reviewer",
            "cause_id": "onboarding",
            "cause_description": "Pilot joined the base",
            "pilot_id": pilot_id,
            "rank": rank,
            "seniority_number": seniority_number,
        })
    }

    fn leave_body(pilot_id: i64, start_date: &str, end_date: &str) -> Value {
        json!({
            "actor_id": pilot_id.to_string(),
            "actor_type": "pilot",
            "cause_id": "leave-plan",
            "cause_description": "Annual leave",
            "pilot_id": pilot_id,
            "category": "leave",
            "request_type": "annual",
            "start_date": start_date,
            "end_date": end_date,
            "submit": true,
        })
    }

    fn evaluate_body() -> Value {
        json!({
            "cause_id": "nightly-run",
            "cause_description": "Scheduled eligibility run",
        })
    }

    async fn register_captains(app: &Router, count: u32) {
        for n in 1..=count {
            let (status, _) = send(
                app,
                "POST",
                "/pilots",
                Some(register_body(i64::from(n), "captain", n)),
            )
            .await;
            assert_eq!(status, HttpStatusCode::CREATED);
        }
    }

    /// Stores a submitted annual leave request and returns the API response.
    async fn create_leave(app: &Router, pilot_id: i64, start: &str, end: &str) -> RequestResponse {
        let (status, body) = send(app, "POST", "/requests", Some(leave_body(pilot_id, start, end))).await;
        assert_eq!(status, HttpStatusCode::CREATED);
        serde_json::from_slice(&body).unwrap()
    }

    /// Stores a submitted request without evaluating it.
    async fn store_unevaluated(app_state: &AppState, pilot_id: i64) -> i64 {
        let created: TransitionResult = create_request(
            NewRequest {
                pilot_id: PilotId(pilot_id),
                category: RequestCategory::Leave,
                request_type: RequestType::Annual,
                start_date: date!(2030 - 06 - 01),
                end_date: date!(2030 - 06 - 05),
                submit: true,
            },
            Actor::pilot(PilotId(pilot_id)),
            Cause::new(String::from("import"), String::from("Imported request")),
            OffsetDateTime::now_utc(),
            &app_state.config,
        )
        .unwrap();

        let mut persistence = app_state.persistence.lock().await;
        persistence
            .insert_request(&created)
            .unwrap()
            .request
            .request_id
            .unwrap()
            .0
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = send(&app, "GET", "/health", None).await;

        assert_eq!(status, HttpStatusCode::OK);
        let health: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(health["status"], "ok");
    }

    #[tokio::test]
    async fn test_register_pilot_returns_event() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = send(
            &app,
            "POST",
            "/pilots",
            Some(register_body(7, "first_officer", 42)),
        )
        .await;

        assert_eq!(status, HttpStatusCode::CREATED);
        let response: PilotResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.pilot.pilot_id, PilotId(7));
        assert_eq!(response.pilot.seniority_number, 42);
        assert!(response.pilot.is_active);
        assert!(response.event_id.is_some());
    }

    #[tokio::test]
    async fn test_duplicate_pilot_is_conflict() {
        let app: Router = build_router(create_test_app_state());
        register_captains(&app, 1).await;

        let (status, body) = send(&app, "POST", "/pilots", Some(register_body(1, "captain", 5))).await;

        assert_eq!(status, HttpStatusCode::CONFLICT);
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error);
    }

    #[tokio::test]
    async fn test_invalid_rank_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let (status, _) = send(&app, "POST", "/pilots", Some(register_body(1, "navigator", 5))).await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_system_actor_cannot_be_claimed() {
        let app: Router = build_router(create_test_app_state());
        let mut body: Value = register_body(1, "captain", 1);
        body["actor_type"] = json!("system");

        let (status, body) = send(&app, "POST", "/pilots", Some(body)).await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.message.contains("Invalid actor type"));
    }

    #[tokio::test]
    async fn test_create_request_with_bad_date_is_bad_request() {
        let app: Router = build_router(create_test_app_state());
        register_captains(&app, 1).await;

        let (status, _) = send(
            &app,
            "POST",
            "/requests",
            Some(leave_body(1, "2030-13-01", "2030-13-05")),
        )
        .await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_request_with_reversed_dates_is_bad_request() {
        let app: Router = build_router(create_test_app_state());
        register_captains(&app, 1).await;

        let (status, _) = send(
            &app,
            "POST",
            "/requests",
            Some(leave_body(1, "2030-06-10", "2030-06-01")),
        )
        .await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_request_for_unknown_pilot_is_not_found() {
        let app: Router = build_router(create_test_app_state());

        let (status, _) = send(
            &app,
            "POST",
            "/requests",
            Some(leave_body(99, "2030-06-01", "2030-06-05")),
        )
        .await;

        assert_eq!(status, HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_submitted_request_comes_back_with_verdict() {
        let app: Router = build_router(create_test_app_state());
        register_captains(&app, 12).await;

        let (status, body) = send(
            &app,
            "POST",
            "/requests",
            Some(leave_body(1, "2030-06-01", "2030-06-05")),
        )
        .await;

        assert_eq!(status, HttpStatusCode::CREATED);
        let response: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(response["verdict"]["recommendation"], "approve");
        assert_eq!(response["request"]["status"], "approved");
        assert_eq!(response["request"]["is_late"], false);
    }

    #[tokio::test]
    async fn test_create_and_get_request() {
        let app: Router = build_router(create_test_app_state());
        register_captains(&app, 12).await;

        let created: RequestResponse = create_leave(&app, 1, "2030-06-01", "2030-06-05").await;
        assert_eq!(created.request.status, RequestStatus::Approved);
        assert!(created.event_id.is_some());

        let request_id: i64 = created.request.request_id.unwrap().0;
        let (status, body) = send(&app, "GET", &format!("/requests/{request_id}"), None).await;

        assert_eq!(status, HttpStatusCode::OK);
        let fetched: RequestResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(fetched.request, created.request);
        assert_eq!(fetched.roster_period, created.roster_period);
        assert!(fetched.event_id.is_none());
        let raw: Value = serde_json::from_slice(&body).unwrap();
        assert!(raw.get("verdict").is_none());
    }

    #[tokio::test]
    async fn test_draft_is_not_evaluated() {
        let app: Router = build_router(create_test_app_state());
        register_captains(&app, 12).await;
        let mut body: Value = leave_body(1, "2030-06-01", "2030-06-05");
        body["submit"] = json!(false);

        let (status, body) = send(&app, "POST", "/requests", Some(body)).await;

        assert_eq!(status, HttpStatusCode::CREATED);
        let response: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(response["request"]["status"], "draft");
        assert!(response.get("verdict").is_none());
    }

    #[tokio::test]
    async fn test_pilot_cannot_file_for_another_pilot() {
        let app: Router = build_router(create_test_app_state());
        register_captains(&app, 2).await;
        let mut body: Value = leave_body(2, "2030-06-01", "2030-06-05");
        body["actor_id"] = json!("1");

        let (status, _) = send(&app, "POST", "/requests", Some(body)).await;

        assert_eq!(status, HttpStatusCode::CONFLICT);
        let (_, body) = send(&app, "GET", "/requests/1", None).await;
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error);
    }

    #[tokio::test]
    async fn test_get_unknown_request_is_not_found() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = send(&app, "GET", "/requests/999", None).await;

        assert_eq!(status, HttpStatusCode::NOT_FOUND);
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error);
    }

    #[tokio::test]
    async fn test_evaluate_approves_unevaluated_request() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());
        register_captains(&app, 12).await;
        let request_id: i64 = store_unevaluated(&app_state, 1).await;

        let (status, body) = send(
            &app,
            "POST",
            &format!("/requests/{request_id}/evaluate"),
            Some(evaluate_body()),
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        let response: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(response["verdict"]["recommendation"], "approve");
        assert_eq!(response["request"]["status"], "approved");
        assert!(response["event_id"].is_i64());
    }

    #[tokio::test]
    async fn test_evaluating_decided_request_is_conflict() {
        let app: Router = build_router(create_test_app_state());
        register_captains(&app, 12).await;
        let created: RequestResponse = create_leave(&app, 1, "2030-06-01", "2030-06-05").await;
        let request_id: i64 = created.request.request_id.unwrap().0;

        let (status, _) = send(
            &app,
            "POST",
            &format!("/requests/{request_id}/evaluate"),
            Some(evaluate_body()),
        )
        .await;

        assert_eq!(status, HttpStatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_check_eligibility_does_not_change_request() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());
        register_captains(&app, 12).await;
        let request_id: i64 = store_unevaluated(&app_state, 1).await;

        let (status, body) = send(
            &app,
            "GET",
            &format!("/requests/{request_id}/eligibility"),
            None,
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        let verdict: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(verdict["recommendation"], "approve");

        let (_, body) = send(&app, "GET", &format!("/requests/{request_id}"), None).await;
        let fetched: RequestResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(fetched.request.status, RequestStatus::Submitted);
    }

    #[tokio::test]
    async fn test_transition_out_of_final_state_is_conflict() {
        let app: Router = build_router(create_test_app_state());
        register_captains(&app, 12).await;
        let created: RequestResponse = create_leave(&app, 1, "2030-06-01", "2030-06-05").await;
        let request_id: i64 = created.request.request_id.unwrap().0;

        let (status, body) = send(
            &app,
            "POST",
            &format!("/requests/{request_id}/transition"),
            Some(json!({
                "actor_id": "1",
                "actor_type": "pilot",
                "cause_id": "change-of-plans",
                "cause_description": "Pilot withdrew",
                "status": "submitted",
                "comments": null,
            })),
        )
        .await;

        assert_eq!(status, HttpStatusCode::CONFLICT);
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error);
    }

    #[tokio::test]
    async fn test_submitting_draft_returns_verdict() {
        let app: Router = build_router(create_test_app_state());
        register_captains(&app, 12).await;
        let mut body: Value = leave_body(1, "2030-06-01", "2030-06-05");
        body["submit"] = json!(false);
        let (_, body) = send(&app, "POST", "/requests", Some(body)).await;
        let draft: RequestResponse = serde_json::from_slice(&body).unwrap();
        let request_id: i64 = draft.request.request_id.unwrap().0;

        let (status, body) = send(
            &app,
            "POST",
            &format!("/requests/{request_id}/transition"),
            Some(json!({
                "actor_id": "1",
                "actor_type": "pilot",
                "cause_id": "leave-plan",
                "cause_description": "Submitting annual leave",
                "status": "submitted",
            })),
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        let response: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(response["verdict"]["recommendation"], "approve");
        assert_eq!(response["request"]["status"], "approved");
        assert!(response["event_id"].is_i64());
    }

    #[tokio::test]
    async fn test_pilot_withdraws_request_held_for_review() {
        let app: Router = build_router(create_test_app_state());
        register_captains(&app, 11).await;
        let junior: RequestResponse = create_leave(&app, 2, "2030-06-01", "2030-06-05").await;
        assert_eq!(junior.request.status, RequestStatus::Approved);

        // The junior's approved leave leaves no room, so the senior goes to review.
        let senior: RequestResponse = create_leave(&app, 1, "2030-06-01", "2030-06-05").await;
        assert_eq!(senior.request.status, RequestStatus::InReview);
        let request_id: i64 = senior.request.request_id.unwrap().0;

        let (status, body) = send(
            &app,
            "POST",
            &format!("/requests/{request_id}/transition"),
            Some(json!({
                "actor_id": "1",
                "actor_type": "pilot",
                "cause_id": "change-of-plans",
                "cause_description": "Pilot withdrew",
                "status": "withdrawn",
            })),
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        let response: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(response["request"]["status"], "withdrawn");
        assert!(response.get("verdict").is_none());
        assert!(response["event_id"].is_i64());
    }

    #[tokio::test]
    async fn test_audit_history_lists_events_in_order() {
        let app: Router = build_router(create_test_app_state());
        register_captains(&app, 12).await;
        let created: RequestResponse = create_leave(&app, 1, "2030-06-01", "2030-06-05").await;
        let request_id: i64 = created.request.request_id.unwrap().0;

        let (status, body) = send(&app, "GET", &format!("/requests/{request_id}/audit"), None).await;

        assert_eq!(status, HttpStatusCode::OK);
        let events: Vec<AuditEventResponse> = serde_json::from_slice(&body).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].action_name, "CreateRequest");
        assert_eq!(events[0].actor_type, "pilot");
        assert_eq!(events[1].action_name, "ApproveRequest");
        assert_eq!(events[1].actor_id, "system");
        assert!(events[0].event_id < events[1].event_id);
    }

    #[tokio::test]
    async fn test_audit_history_of_unknown_request_is_not_found() {
        let app: Router = build_router(create_test_app_state());

        let (status, _) = send(&app, "GET", "/requests/5/audit", None).await;

        assert_eq!(status, HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_lookup_period_at_anchor() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = send(&app, "GET", "/roster-periods/lookup?date=2026-01-10", None).await;

        assert_eq!(status, HttpStatusCode::OK);
        let period: RosterPeriod = serde_json::from_slice(&body).unwrap();
        assert_eq!(period.code().to_string(), "RP1/2026");
        assert_eq!(period.start_date(), date!(2026 - 01 - 10));
        assert_eq!(period.end_date(), date!(2026 - 02 - 06));
    }

    #[tokio::test]
    async fn test_lookup_period_with_bad_date_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let (status, _) = send(&app, "GET", "/roster-periods/lookup?date=yesterday", None).await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_periods_covers_range() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = send(
            &app,
            "GET",
            "/roster-periods?start=2026-01-10&end=2026-03-10",
            None,
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        let periods: Vec<RosterPeriod> = serde_json::from_slice(&body).unwrap();
        let codes: Vec<String> = periods.iter().map(|p| p.code().to_string()).collect();
        assert_eq!(codes, vec!["RP1/2026", "RP2/2026", "RP3/2026"]);
    }

    #[tokio::test]
    async fn test_list_period_requests_groups_by_start_date() {
        let app: Router = build_router(create_test_app_state());
        register_captains(&app, 2).await;
        let created: RequestResponse = create_leave(&app, 1, "2030-06-01", "2030-06-05").await;
        create_leave(&app, 2, "2030-09-01", "2030-09-05").await;

        let code: String = created.roster_period.to_string().replace('/', "%2F");
        let (status, body) = send(
            &app,
            "GET",
            &format!("/roster-periods/requests?code={code}"),
            None,
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        let response: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(response["period"]["code"], created.roster_period.to_string());
        let requests: &Vec<Value> = response["requests"].as_array().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0]["pilot_id"], 1);
    }

    #[tokio::test]
    async fn test_deactivate_pilot_keeps_record() {
        let app: Router = build_router(create_test_app_state());
        register_captains(&app, 1).await;

        let (status, body) = send(
            &app,
            "POST",
            "/pilots/1/deactivate",
            Some(json!({
                "actor_id": "crewing-1",
                "actor_type": "reviewer",
                "cause_id": "retirement",
                "cause_description": "Pilot retired",
            })),
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        let response: PilotResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.pilot.pilot_id, PilotId(1));
        assert!(!response.pilot.is_active);
    }
}
