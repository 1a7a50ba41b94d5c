// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::directory::{PilotDirectory, RequestRepository};
use crew_leave_domain::{LeaveRequest, Rank};

/// Finds the requests competing with `candidate` for the same crew.
///
/// A conflict is any other request that:
/// - belongs to a pilot currently holding `rank`
/// - has the same category as the candidate
/// - is submitted, in review or approved
/// - overlaps the candidate's dates (inclusive on both ends)
///
/// The candidate itself is never returned. An empty result is the normal
/// case, not an error. Order is unspecified.
pub fn conflicts_for<D, R>(
    directory: &D,
    repository: &R,
    candidate: &LeaveRequest,
    rank: Rank,
) -> Vec<LeaveRequest>
where
    D: PilotDirectory + ?Sized,
    R: RequestRepository + ?Sized,
{
    repository
        .find_non_terminal_requests(rank, candidate.category, candidate.dates)
        .into_iter()
        .filter(|other| !other.is_same_record(candidate.request_id))
        .filter(|other| other.status.claims_dates())
        .filter(|other| other.category == candidate.category)
        .filter(|other| other.dates.overlaps(&candidate.dates))
        .filter(|other| {
            directory
                .pilot(other.pilot_id)
                .is_some_and(|pilot| pilot.rank == rank)
        })
        .collect()
}
