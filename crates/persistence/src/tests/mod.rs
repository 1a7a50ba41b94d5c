// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;

use crate::Persistence;
use crew_leave::{EngineConfig, NewRequest, TransitionResult, create_request};
use crew_leave_audit::{Actor, Cause};
use crew_leave_domain::{LeaveRequest, Pilot, PilotId, Rank, RequestCategory, RequestType};
use time::{Date, OffsetDateTime};

pub fn create_test_actor() -> Actor {
    Actor::reviewer("crewing-1")
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("test-cause"), String::from("Test operation"))
}

pub fn create_test_config() -> EngineConfig {
    EngineConfig::default()
}

/// Midnight UTC on `date`.
pub fn at(date: Date) -> OffsetDateTime {
    date.midnight().assume_utc()
}

pub fn new_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database")
}

/// Registers an active pilot with the given ID and seniority number.
pub fn register(persistence: &mut Persistence, id: i64, rank: Rank, seniority_number: u32) -> Pilot {
    let pilot: Pilot = Pilot::new(PilotId(id), rank, seniority_number).unwrap();
    persistence
        .register_pilot(&pilot, create_test_actor(), create_test_cause())
        .unwrap();
    pilot
}

/// Registers `count` captains with IDs and seniority numbers `1..=count`.
pub fn register_captains(persistence: &mut Persistence, count: u32) {
    for n in 1..=count {
        register(persistence, i64::from(n), Rank::Captain, n);
    }
}

/// Creates and stores an annual leave request, submitted at midnight UTC on
/// `submitted_on`, or left as a draft when `submitted_on` is `None`.
pub fn store_leave(
    persistence: &mut Persistence,
    pilot_id: i64,
    start: Date,
    end: Date,
    submitted_on: Option<Date>,
) -> LeaveRequest {
    let command: NewRequest = NewRequest {
        pilot_id: PilotId(pilot_id),
        category: RequestCategory::Leave,
        request_type: RequestType::Annual,
        start_date: start,
        end_date: end,
        submit: submitted_on.is_some(),
    };
    let created: TransitionResult = create_request(
        command,
        Actor::pilot(PilotId(pilot_id)),
        create_test_cause(),
        at(submitted_on.unwrap_or(start)),
        &create_test_config(),
    )
    .unwrap();

    persistence.insert_request(&created).unwrap().request
}
