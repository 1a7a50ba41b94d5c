// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use crew_leave::{EligibilityEngine, EligibilityVerdict, EngineConfig, FleetSnapshot};
use crew_leave_domain::{DateRange, LeaveRequest, Pilot, Rank};
use tracing::debug;

use crate::error::PersistenceError;
use crate::queries::pilots::{get_pilot, list_pilots_by_rank};
use crate::queries::requests::list_rank_requests_overlapping;

/// Loads everything the engine needs to judge a `rank` request over `window`.
///
/// Inactive pilots are included so the engine can tell a deactivated
/// pilot from an unknown one. Requests in every status are included; the
/// snapshot filters by status itself.
///
/// # Errors
///
/// Returns an error if either query fails.
pub fn load_snapshot(
    conn: &mut SqliteConnection,
    rank: Rank,
    window: DateRange,
) -> Result<FleetSnapshot, PersistenceError> {
    let pilots: Vec<Pilot> = list_pilots_by_rank(conn, rank)?;
    let requests: Vec<LeaveRequest> = list_rank_requests_overlapping(conn, rank, window)?;

    debug!(
        rank = %rank,
        window = %window,
        pilots = pilots.len(),
        requests = requests.len(),
        "Loaded fleet snapshot"
    );

    Ok(FleetSnapshot::new(pilots, requests))
}

/// Evaluates a stored request against a fresh snapshot of its pilot's rank.
///
/// # Errors
///
/// Returns `PersistenceError::PilotNotFound` if the owning pilot is not
/// registered, or an error if loading the snapshot fails.
pub fn evaluate_request(
    conn: &mut SqliteConnection,
    request: &LeaveRequest,
    config: &EngineConfig,
) -> Result<EligibilityVerdict, PersistenceError> {
    let pilot: Pilot = get_pilot(conn, request.pilot_id)?;
    let snapshot: FleetSnapshot = load_snapshot(conn, pilot.rank, request.dates)?;
    Ok(EligibilityEngine::new(&snapshot, &snapshot, config).evaluate(request))
}
