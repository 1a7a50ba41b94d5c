// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{EngineConfig, FleetSnapshot};
use crew_leave_audit::{Actor, Cause};
use crew_leave_domain::{
    DateRange, LeaveRequest, Pilot, PilotId, Rank, RequestId, RequestStatus, RequestType,
};
use time::{Date, OffsetDateTime};

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Test request"))
}

pub fn create_test_reviewer() -> Actor {
    Actor::reviewer("crewing-1")
}

pub fn create_test_config() -> EngineConfig {
    EngineConfig::default()
}

/// Midnight UTC on `date`.
pub fn at(date: Date) -> OffsetDateTime {
    date.midnight().assume_utc()
}

pub fn pilot(id: i64, rank: Rank, seniority_number: u32) -> Pilot {
    Pilot::new(PilotId(id), rank, seniority_number).unwrap()
}

/// `count` active captains with IDs and seniority numbers `1..=count`.
pub fn captains(count: u32) -> Vec<Pilot> {
    (1..=count)
        .map(|n| pilot(i64::from(n), Rank::Captain, n))
        .collect()
}

/// Active first officers with IDs `100 + seniority` for each seniority number.
pub fn first_officers(seniority_numbers: &[u32]) -> Vec<Pilot> {
    seniority_numbers
        .iter()
        .map(|&n| pilot(100 + i64::from(n), Rank::FirstOfficer, n))
        .collect()
}

/// A persisted annual leave request in `status`, submitted at midnight UTC on
/// `submitted_on`.
pub fn leave(
    request_id: i64,
    pilot_id: i64,
    start: Date,
    end: Date,
    status: RequestStatus,
    submitted_on: Date,
) -> LeaveRequest {
    let mut request: LeaveRequest = LeaveRequest::draft(
        PilotId(pilot_id),
        RequestType::Annual,
        DateRange::new(start, end).unwrap(),
    )
    .with_id(RequestId(request_id));
    request.status = status;
    request.submitted_at = Some(at(submitted_on));
    request.is_late = Some(false);
    request
}

/// Like [`leave`] but for a route change.
pub fn flight(
    request_id: i64,
    pilot_id: i64,
    start: Date,
    end: Date,
    status: RequestStatus,
    submitted_on: Date,
) -> LeaveRequest {
    let mut request: LeaveRequest = leave(request_id, pilot_id, start, end, status, submitted_on);
    request.request_type = RequestType::RouteChange;
    request.category = request.request_type.category();
    request
}

pub fn snapshot(pilots: Vec<Pilot>, requests: Vec<LeaveRequest>) -> FleetSnapshot {
    FleetSnapshot::new(pilots, requests)
}
