// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deterministic priority ordering of competing requests.
//!
//! ## Ordering Rules
//!
//! Requests are ordered by:
//! 1. Seniority number (lowest wins)
//! 2. Submission timestamp (earliest wins, unsubmitted last)
//! 3. Request ID (lowest wins, unpersisted last)
//!
//! The ranker only orders. It never approves or denies anything.

use crew_leave_domain::LeaveRequest;
use std::cmp::Ordering;

/// A request paired with its pilot's seniority number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contender {
    /// The competing request.
    pub request: LeaveRequest,
    /// The owning pilot's seniority number, from the pilot record.
    pub seniority_number: u32,
}

impl Contender {
    /// Creates a new contender.
    #[must_use]
    pub const fn new(request: LeaveRequest, seniority_number: u32) -> Self {
        Self {
            request,
            seniority_number,
        }
    }

    /// Returns true if `self` outranks `other` on seniority or submission
    /// time, without relying on the request-ID tie-break.
    #[must_use]
    pub fn has_real_advantage_over(&self, other: &Self) -> bool {
        compare_without_id(self, other) == Ordering::Less
    }

    /// Returns true if neither contender has a real advantage, so only the
    /// request-ID tie-break separates them.
    #[must_use]
    pub fn is_tied_with(&self, other: &Self) -> bool {
        compare_without_id(self, other) == Ordering::Equal
    }
}

/// A contender's place in the priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRequest {
    /// The 1-based position (1 = highest priority).
    pub position: usize,
    /// The ranked contender.
    pub contender: Contender,
}

/// Orders contenders from highest to lowest priority.
///
/// The result does not depend on the input order.
#[must_use]
pub fn rank_by_seniority(mut contenders: Vec<Contender>) -> Vec<RankedRequest> {
    contenders.sort_by(compare_priority);
    contenders
        .into_iter()
        .enumerate()
        .map(|(index, contender)| RankedRequest {
            position: index + 1,
            contender,
        })
        .collect()
}

/// Compares two contenders by priority.
///
/// Returns `Ordering::Less` if `a` has priority over `b`.
#[must_use]
pub fn compare_priority(a: &Contender, b: &Contender) -> Ordering {
    compare_without_id(a, b).then_with(|| {
        match (a.request.request_id, b.request.request_id) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a
                .request
                .pilot_id
                .cmp(&b.request.pilot_id)
                .then_with(|| a.request.dates.start.cmp(&b.request.dates.start)),
        }
    })
}

fn compare_without_id(a: &Contender, b: &Contender) -> Ordering {
    // 1. Seniority number (lowest wins)
    match a.seniority_number.cmp(&b.seniority_number) {
        Ordering::Less => return Ordering::Less,
        Ordering::Greater => return Ordering::Greater,
        Ordering::Equal => {}
    }

    // 2. Submission timestamp (earliest wins, unsubmitted last)
    match (a.request.submitted_at, b.request.submitted_at) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
