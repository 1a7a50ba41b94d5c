// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{captains, first_officers, flight, leave, snapshot};
use crate::{AvailabilityWindow, FleetSnapshot, PilotDirectory, availability};
use crew_leave_domain::{
    DateRange, LeaveRequest, Pilot, PilotId, Rank, RequestId, RequestStatus,
};
use time::macros::date;

fn window() -> DateRange {
    DateRange::new(date!(2026 - 03 - 01), date!(2026 - 03 - 10)).unwrap()
}

fn counts(window: &AvailabilityWindow) -> Vec<u32> {
    window.days().iter().map(|d| d.available).collect()
}

#[test]
fn test_one_entry_per_day_in_order() {
    let fleet: FleetSnapshot = snapshot(captains(12), Vec::new());
    let result: AvailabilityWindow = availability(&fleet, &fleet, Rank::Captain, window(), None);

    assert_eq!(result.days().len(), 10);
    assert_eq!(result.days()[0].date, date!(2026 - 03 - 01));
    assert_eq!(result.days()[9].date, date!(2026 - 03 - 10));
    assert!(result.days().windows(2).all(|w| w[0].date < w[1].date));
    assert_eq!(counts(&result), vec![12; 10]);
    assert_eq!(result.active_pilots(), 12);
    assert_eq!(result.rank(), Rank::Captain);
}

#[test]
fn test_approved_leave_reduces_covered_days_only() {
    let fleet: FleetSnapshot = snapshot(
        captains(12),
        vec![leave(
            1,
            4,
            date!(2026 - 03 - 05),
            date!(2026 - 03 - 07),
            RequestStatus::Approved,
            date!(2026 - 01 - 01),
        )],
    );
    let result: AvailabilityWindow = availability(&fleet, &fleet, Rank::Captain, window(), None);

    assert_eq!(counts(&result), vec![12, 12, 12, 12, 11, 11, 11, 12, 12, 12]);
    assert_eq!(result.available_on(date!(2026 - 03 - 06)), Some(11));
    assert_eq!(result.minimum(), Some(11));
    assert_eq!(
        result.breach_days(12),
        vec![
            date!(2026 - 03 - 05),
            date!(2026 - 03 - 06),
            date!(2026 - 03 - 07)
        ]
    );
}

#[test]
fn test_pending_and_flight_requests_do_not_reduce_availability() {
    let fleet: FleetSnapshot = snapshot(
        captains(12),
        vec![
            leave(
                1,
                4,
                date!(2026 - 03 - 01),
                date!(2026 - 03 - 10),
                RequestStatus::Submitted,
                date!(2026 - 01 - 01),
            ),
            leave(
                2,
                5,
                date!(2026 - 03 - 01),
                date!(2026 - 03 - 10),
                RequestStatus::InReview,
                date!(2026 - 01 - 01),
            ),
            flight(
                3,
                6,
                date!(2026 - 03 - 01),
                date!(2026 - 03 - 10),
                RequestStatus::Approved,
                date!(2026 - 01 - 01),
            ),
        ],
    );
    let result: AvailabilityWindow = availability(&fleet, &fleet, Rank::Captain, window(), None);

    assert_eq!(counts(&result), vec![12; 10]);
}

#[test]
fn test_excluded_request_is_not_counted() {
    let fleet: FleetSnapshot = snapshot(
        captains(12),
        vec![leave(
            7,
            4,
            date!(2026 - 03 - 01),
            date!(2026 - 03 - 10),
            RequestStatus::Approved,
            date!(2026 - 01 - 01),
        )],
    );

    let counted: AvailabilityWindow = availability(&fleet, &fleet, Rank::Captain, window(), None);
    let excluded: AvailabilityWindow =
        availability(&fleet, &fleet, Rank::Captain, window(), Some(RequestId(7)));

    assert_eq!(counted.minimum(), Some(11));
    assert_eq!(excluded.minimum(), Some(12));
}

#[test]
fn test_pilot_with_overlapping_approvals_counts_once() {
    let fleet: FleetSnapshot = snapshot(
        captains(12),
        vec![
            leave(
                1,
                4,
                date!(2026 - 03 - 01),
                date!(2026 - 03 - 06),
                RequestStatus::Approved,
                date!(2026 - 01 - 01),
            ),
            leave(
                2,
                4,
                date!(2026 - 03 - 05),
                date!(2026 - 03 - 10),
                RequestStatus::Approved,
                date!(2026 - 01 - 01),
            ),
        ],
    );
    let result: AvailabilityWindow = availability(&fleet, &fleet, Rank::Captain, window(), None);

    assert_eq!(counts(&result), vec![11; 10]);
}

#[test]
fn test_other_rank_and_inactive_pilots_are_ignored() {
    let mut pilots: Vec<Pilot> = captains(12);
    pilots.extend(first_officers(&[1, 2]));
    pilots[3] = pilots[3].clone().deactivated();

    let fleet: FleetSnapshot = snapshot(
        pilots,
        vec![
            // first officer
            leave(
                1,
                101,
                date!(2026 - 03 - 01),
                date!(2026 - 03 - 10),
                RequestStatus::Approved,
                date!(2026 - 01 - 01),
            ),
            // deactivated captain
            leave(
                2,
                4,
                date!(2026 - 03 - 01),
                date!(2026 - 03 - 10),
                RequestStatus::Approved,
                date!(2026 - 01 - 01),
            ),
        ],
    );
    let result: AvailabilityWindow = availability(&fleet, &fleet, Rank::Captain, window(), None);

    assert_eq!(result.active_pilots(), 11);
    assert_eq!(counts(&result), vec![11; 10]);
}

#[test]
fn test_zero_active_pilots_yields_zeros() {
    let fleet: FleetSnapshot = snapshot(first_officers(&[1, 2, 3]), Vec::new());
    let result: AvailabilityWindow = availability(&fleet, &fleet, Rank::Captain, window(), None);

    assert_eq!(counts(&result), vec![0; 10]);
    assert!(result.breaches(1));
    assert!(!result.breaches(0));
}

/// Reports fewer active pilots than the records it resolves.
struct UndercountingDirectory {
    inner: FleetSnapshot,
    reported: u32,
}

impl PilotDirectory for UndercountingDirectory {
    fn active_pilot_count(&self, _rank: Rank) -> u32 {
        self.reported
    }

    fn pilot(&self, pilot_id: PilotId) -> Option<Pilot> {
        self.inner.pilot(pilot_id)
    }
}

#[test]
fn test_counts_clamp_at_zero_on_inconsistent_data() {
    let requests: Vec<LeaveRequest> = (1..=3)
        .map(|n| {
            leave(
                n,
                n,
                date!(2026 - 03 - 01),
                date!(2026 - 03 - 10),
                RequestStatus::Approved,
                date!(2026 - 01 - 01),
            )
        })
        .collect();
    let fleet: FleetSnapshot = snapshot(captains(3), requests);
    let directory: UndercountingDirectory = UndercountingDirectory {
        inner: fleet.clone(),
        reported: 1,
    };

    let result: AvailabilityWindow =
        availability(&directory, &fleet, Rank::Captain, window(), None);

    assert_eq!(counts(&result), vec![0; 10]);
}

#[test]
fn test_with_absences_layers_without_mutating() {
    let fleet: FleetSnapshot = snapshot(captains(12), Vec::new());
    let base: AvailabilityWindow = availability(&fleet, &fleet, Rank::Captain, window(), None);
    let hypothetical: LeaveRequest = leave(
        9,
        2,
        date!(2026 - 03 - 09),
        date!(2026 - 03 - 12),
        RequestStatus::Submitted,
        date!(2026 - 01 - 01),
    );

    let granted: AvailabilityWindow = base.with_absences([&hypothetical]);

    assert_eq!(base.minimum(), Some(12));
    assert_eq!(
        counts(&granted),
        vec![12, 12, 12, 12, 12, 12, 12, 12, 11, 11]
    );
}

#[test]
fn test_with_absences_ignores_flight_requests() {
    let fleet: FleetSnapshot = snapshot(captains(12), Vec::new());
    let base: AvailabilityWindow = availability(&fleet, &fleet, Rank::Captain, window(), None);
    let route_change: LeaveRequest = flight(
        9,
        2,
        date!(2026 - 03 - 01),
        date!(2026 - 03 - 10),
        RequestStatus::Submitted,
        date!(2026 - 01 - 01),
    );

    assert_eq!(base.with_absences([&route_change]), base);
}
