// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-day crew availability for a single rank.
//!
//! Availability starts from the active-pilot count of the rank and removes
//! one pilot per day for every distinct active pilot absent on approved
//! leave. Flight-category requests are duty changes, not absences, and
//! never reduce availability.
//!
//! A window is always computed fresh from its collaborators. Hypothetical
//! grants are layered on with [`AvailabilityWindow::with_absences`], which
//! returns a new window and leaves the original untouched.

use crate::directory::{PilotDirectory, RequestRepository};
use crew_leave_domain::{
    DateRange, LeaveRequest, PilotId, Rank, RequestCategory, RequestId, RequestStatus,
};
use serde::Serialize;
use std::collections::BTreeSet;
use time::Date;

/// Crew present on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyAvailability {
    /// The day.
    pub date: Date,
    /// Pilots of the rank on duty that day. Never negative.
    pub available: u32,
}

/// Ordered per-day availability for one rank over a closed date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityWindow {
    rank: Rank,
    active_pilots: u32,
    days: Vec<DailyAvailability>,
    // Parallel to `days`: the distinct pilots absent on each day.
    absent: Vec<BTreeSet<PilotId>>,
}

impl AvailabilityWindow {
    fn empty(rank: Rank, active_pilots: u32, window: DateRange) -> Self {
        let days: Vec<DailyAvailability> = window
            .days()
            .map(|date| DailyAvailability {
                date,
                available: active_pilots,
            })
            .collect();
        let absent: Vec<BTreeSet<PilotId>> = vec![BTreeSet::new(); days.len()];
        Self {
            rank,
            active_pilots,
            days,
            absent,
        }
    }

    /// The rank this window counts.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Active pilots of the rank before any absence.
    #[must_use]
    pub const fn active_pilots(&self) -> u32 {
        self.active_pilots
    }

    /// One entry per day, in date order.
    #[must_use]
    pub fn days(&self) -> &[DailyAvailability] {
        &self.days
    }

    /// The available count on `date`, if the day is inside the window.
    #[must_use]
    pub fn available_on(&self, date: Date) -> Option<u32> {
        self.days
            .iter()
            .find(|d| d.date == date)
            .map(|d| d.available)
    }

    /// The lowest daily count, or `None` for an empty window.
    #[must_use]
    pub fn minimum(&self) -> Option<u32> {
        self.days.iter().map(|d| d.available).min()
    }

    /// Days whose count is strictly below `threshold`.
    ///
    /// A day exactly at the threshold is not a breach.
    #[must_use]
    pub fn breach_days(&self, threshold: u32) -> Vec<Date> {
        self.days
            .iter()
            .filter(|d| d.available < threshold)
            .map(|d| d.date)
            .collect()
    }

    /// Returns true if any day falls below `threshold`.
    #[must_use]
    pub fn breaches(&self, threshold: u32) -> bool {
        self.days.iter().any(|d| d.available < threshold)
    }

    /// Returns a new window with the pilots of `requests` marked absent on
    /// the days each request covers.
    ///
    /// A pilot already absent on a day is not counted twice. Flight-category
    /// requests are ignored.
    #[must_use]
    pub fn with_absences<'a, I>(&self, requests: I) -> Self
    where
        I: IntoIterator<Item = &'a LeaveRequest>,
    {
        let mut next: Self = self.clone();
        for request in requests {
            if request.category != RequestCategory::Leave {
                continue;
            }
            for (day, absent) in next.days.iter().zip(next.absent.iter_mut()) {
                if request.dates.contains(day.date) {
                    absent.insert(request.pilot_id);
                }
            }
        }
        next.recount();
        next
    }

    fn recount(&mut self) {
        for (day, absent) in self.days.iter_mut().zip(self.absent.iter()) {
            let absent_count: u32 = u32::try_from(absent.len()).unwrap_or(u32::MAX);
            day.available = self.active_pilots.saturating_sub(absent_count);
        }
    }
}

/// Computes per-day availability for `rank` over `window`.
///
/// Only approved leave held by an active pilot of the rank counts against
/// availability. The request named by `excluding` is ignored so a request
/// can be re-evaluated without counting itself.
///
/// Counts are clamped at zero. A rank with no active pilots yields zero on
/// every day.
pub fn availability<D, R>(
    directory: &D,
    repository: &R,
    rank: Rank,
    window: DateRange,
    excluding: Option<RequestId>,
) -> AvailabilityWindow
where
    D: PilotDirectory + ?Sized,
    R: RequestRepository + ?Sized,
{
    let active_pilots: u32 = directory.active_pilot_count(rank);

    let approved: Vec<LeaveRequest> = repository
        .find_non_terminal_requests(rank, RequestCategory::Leave, window)
        .into_iter()
        .filter(|r| r.status == RequestStatus::Approved)
        .filter(|r| !r.is_same_record(excluding))
        .filter(|r| {
            directory
                .pilot(r.pilot_id)
                .is_some_and(|p| p.is_active && p.rank == rank)
        })
        .collect();

    AvailabilityWindow::empty(rank, active_pilots, window).with_absences(approved.iter())
}
