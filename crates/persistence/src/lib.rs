// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for crew leave requests.
//!
//! This crate stores pilots, leave and flight requests, and the audit trail
//! in `SQLite` through Diesel. It also hosts the operations that must read
//! and write atomically: evaluating a request against a consistent view of
//! its rank and recording the outcome.
//!
//! ## Consistency
//!
//! Every write runs inside `BEGIN IMMEDIATE`, so `SQLite` admits a single
//! writer at a time. An evaluation reads its snapshot and writes its
//! decision inside the same transaction, so two requests competing for the
//! last place on a day are judged one after the other and never both
//! approved.
//!
//! ## Migrations
//!
//! Migrations are embedded from `migrations/` and applied on every
//! connection. In-memory databases are used by tests; file databases run
//! in WAL mode.

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
#![allow(clippy::multiple_crate_versions)]

use crew_leave::{EligibilityVerdict, EngineConfig, FleetSnapshot, TransitionResult, transition};
use crew_leave_audit::{Actor, AuditEvent, Cause};
use crew_leave_domain::{
    DateRange, LeaveRequest, PeriodCode, Pilot, PilotId, Rank, RequestId, RequestStatus,
    RosterCalendar, RosterPeriod,
};
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// The result of evaluating a stored request and applying the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationOutcome {
    /// The verdict, as computed inside the write transaction.
    pub verdict: EligibilityVerdict,
    /// The stored transition, or `None` when a review verdict found the
    /// request already in review.
    pub applied: Option<TransitionResult>,
}

/// A stored create or transition, with the verdict applied when the
/// request entered `Submitted`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    /// The stored change, as requested by the actor.
    pub stored: TransitionResult,
    /// The evaluation run on submission. `None` for any other status.
    pub evaluation: Option<EvaluationOutcome>,
}

impl SubmissionOutcome {
    /// The request as it stands after both writes.
    #[must_use]
    pub fn current_request(&self) -> &LeaveRequest {
        self.evaluation
            .as_ref()
            .and_then(|evaluation| evaluation.applied.as_ref())
            .map_or(&self.stored.request, |applied| &applied.request)
    }
}

/// Persistence adapter for pilots, requests and audit events.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared-cache database, so instances
    /// never see each other's data.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Pilots
    // ========================================================================

    /// Registers a pilot and records a `RegisterPilot` audit event.
    ///
    /// # Returns
    ///
    /// The event ID of the audit event.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::PilotAlreadyExists` if the ID is taken.
    pub fn register_pilot(
        &mut self,
        pilot: &Pilot,
        actor: Actor,
        cause: Cause,
    ) -> Result<i64, PersistenceError> {
        self.conn.immediate_transaction(|conn| {
            mutations::workflow::register_pilot(conn, pilot, actor, cause)
        })
    }

    /// Marks a pilot inactive and records a `DeactivatePilot` audit event.
    ///
    /// Pilots are never deleted, so their past requests stay resolvable.
    /// Deactivating an inactive pilot is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::PilotNotFound` if no such pilot exists.
    pub fn deactivate_pilot(
        &mut self,
        pilot_id: PilotId,
        actor: Actor,
        cause: Cause,
    ) -> Result<Pilot, PersistenceError> {
        self.conn.immediate_transaction(|conn| {
            mutations::workflow::deactivate_pilot(conn, pilot_id, actor, cause)
        })
    }

    /// Retrieves a pilot by ID.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::PilotNotFound` if no such pilot exists.
    pub fn get_pilot(&mut self, pilot_id: PilotId) -> Result<Pilot, PersistenceError> {
        queries::pilots::get_pilot(&mut self.conn, pilot_id)
    }

    /// Lists every pilot, most senior first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_pilots(&mut self) -> Result<Vec<Pilot>, PersistenceError> {
        queries::pilots::list_pilots(&mut self.conn)
    }

    // ========================================================================
    // Requests
    // ========================================================================

    /// Stores a request produced by `crew_leave::create_request`.
    ///
    /// # Returns
    ///
    /// The request with its assigned ID and the stored creation event.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::PilotNotFound` if the pilot is not
    /// registered, or an error if the insert fails.
    pub fn insert_request(
        &mut self,
        result: &TransitionResult,
    ) -> Result<TransitionResult, PersistenceError> {
        self.conn
            .immediate_transaction(|conn| mutations::workflow::persist_new_request(conn, result))
    }

    /// Stores a new request and, if it was filed as submitted, evaluates it
    /// and applies the verdict in the same transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert or the evaluation fails. Nothing is
    /// stored in that case.
    pub fn insert_and_evaluate(
        &mut self,
        result: &TransitionResult,
        at: OffsetDateTime,
        config: &EngineConfig,
    ) -> Result<SubmissionOutcome, PersistenceError> {
        self.conn.immediate_transaction(|conn| {
            let stored: TransitionResult = mutations::workflow::persist_new_request(conn, result)?;
            let evaluation: Option<EvaluationOutcome> =
                mutations::workflow::evaluate_if_submitted(conn, &stored, at, config)?;
            Ok(SubmissionOutcome { stored, evaluation })
        })
    }

    /// Retrieves a request by ID.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::RequestNotFound` if no such request exists.
    pub fn get_request(&mut self, request_id: RequestId) -> Result<LeaveRequest, PersistenceError> {
        queries::requests::get_request(&mut self.conn, request_id)
    }

    /// Lists requests of every status and rank sharing a day with `window`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_requests_overlapping(
        &mut self,
        window: DateRange,
    ) -> Result<Vec<LeaveRequest>, PersistenceError> {
        queries::requests::list_requests_overlapping(&mut self.conn, window)
    }

    /// Lists the requests filed under roster period `code`.
    ///
    /// A request belongs to the period its first day falls in.
    ///
    /// # Errors
    ///
    /// Returns an error if the period cannot be resolved or the query fails.
    pub fn list_requests_in_period(
        &mut self,
        code: PeriodCode,
        calendar: &RosterCalendar,
    ) -> Result<Vec<LeaveRequest>, PersistenceError> {
        let period: RosterPeriod = calendar.bounds_of(code)?;
        queries::requests::list_requests_starting_between(
            &mut self.conn,
            period.start_date(),
            period.end_date(),
        )
    }

    /// Loads a consistent view of one rank's pilots and requests over `window`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn load_snapshot(
        &mut self,
        rank: Rank,
        window: DateRange,
    ) -> Result<FleetSnapshot, PersistenceError> {
        self.conn
            .transaction(|conn| queries::snapshot::load_snapshot(conn, rank, window))
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Stores a transition computed outside this crate.
    ///
    /// The request row and its audit event are written together.
    ///
    /// # Errors
    ///
    /// Returns an error if the request was never stored or a write fails.
    pub fn persist_transition(
        &mut self,
        result: &TransitionResult,
    ) -> Result<TransitionResult, PersistenceError> {
        self.conn
            .immediate_transaction(|conn| mutations::workflow::persist_transition(conn, result))
    }

    /// Moves a stored request to `new_status` on behalf of `actor`.
    ///
    /// The request is re-read inside the write transaction, so the move is
    /// checked against its current status.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Rejected` if the workflow refuses the
    /// move, or an error if the request is missing or a write fails.
    #[allow(clippy::too_many_arguments)]
    pub fn transition_request(
        &mut self,
        request_id: RequestId,
        new_status: RequestStatus,
        actor: Actor,
        cause: Cause,
        comments: Option<String>,
        at: OffsetDateTime,
        config: &EngineConfig,
    ) -> Result<TransitionResult, PersistenceError> {
        self.conn.immediate_transaction(|conn| {
            let request: LeaveRequest = queries::requests::get_request(conn, request_id)?;
            let result: TransitionResult =
                transition(&request, new_status, actor, cause, comments, at, config)?;
            mutations::workflow::persist_transition(conn, &result)
        })
    }

    /// Moves a stored request to `new_status` and, when that submits it,
    /// evaluates it and applies the verdict in the same transaction.
    ///
    /// # Errors
    ///
    /// Returns the errors of `transition_request` and `evaluate_and_apply`.
    /// Nothing is stored if either step fails.
    #[allow(clippy::too_many_arguments)]
    pub fn transition_and_evaluate(
        &mut self,
        request_id: RequestId,
        new_status: RequestStatus,
        actor: Actor,
        cause: Cause,
        comments: Option<String>,
        at: OffsetDateTime,
        config: &EngineConfig,
    ) -> Result<SubmissionOutcome, PersistenceError> {
        self.conn.immediate_transaction(|conn| {
            let request: LeaveRequest = queries::requests::get_request(conn, request_id)?;
            let result: TransitionResult =
                transition(&request, new_status, actor, cause, comments, at, config)?;
            let stored: TransitionResult =
                mutations::workflow::persist_transition(conn, &result)?;
            let evaluation: Option<EvaluationOutcome> =
                mutations::workflow::evaluate_if_submitted(conn, &stored, at, config)?;
            Ok(SubmissionOutcome { stored, evaluation })
        })
    }

    /// Evaluates a stored request and applies the verdict.
    ///
    /// The snapshot, the evaluation and the resulting status change all
    /// happen inside one `BEGIN IMMEDIATE` transaction.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Rejected` if the request's status does
    /// not permit the verdict's move (for example a draft), or an error if
    /// the request is missing or a write fails.
    pub fn evaluate_and_apply(
        &mut self,
        request_id: RequestId,
        cause: Cause,
        at: OffsetDateTime,
        config: &EngineConfig,
    ) -> Result<EvaluationOutcome, PersistenceError> {
        self.conn.immediate_transaction(|conn| {
            mutations::workflow::evaluate_and_apply(conn, request_id, cause, at, config)
        })
    }

    /// Evaluates a stored request without changing anything.
    ///
    /// This is the reviewer's re-check: the verdict reflects the current
    /// state of the rank, not the state at submission.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or its pilot is missing.
    pub fn recheck_request(
        &mut self,
        request_id: RequestId,
        config: &EngineConfig,
    ) -> Result<EligibilityVerdict, PersistenceError> {
        self.conn.transaction(|conn| {
            let request: LeaveRequest = queries::requests::get_request(conn, request_id)?;
            queries::snapshot::evaluate_request(conn, &request, config)
        })
    }

    // ========================================================================
    // Audit Event Queries
    // ========================================================================

    /// Retrieves an audit event by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the event is not found or cannot be deserialized.
    pub fn get_audit_event(&mut self, event_id: i64) -> Result<AuditEvent, PersistenceError> {
        queries::audit::get_audit_event(&mut self.conn, event_id)
    }

    /// Retrieves the audit trail of one request, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_audit_history(
        &mut self,
        request_id: RequestId,
    ) -> Result<Vec<AuditEvent>, PersistenceError> {
        queries::audit::get_audit_history(&mut self.conn, request_id)
    }

    /// Counts every stored audit event.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_audit_events(&mut self) -> Result<i64, PersistenceError> {
        queries::audit::count_audit_events(&mut self.conn)
    }
}
