// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only collaborators the engine queries.
//!
//! The engine never writes through these traits. Callers are expected to
//! hand it a consistent view, such as a `FleetSnapshot` loaded inside a
//! write transaction.

use crew_leave_domain::{
    DateRange, LeaveRequest, Pilot, PilotId, Rank, RequestCategory, RequestId,
};

/// Authoritative pilot records.
pub trait PilotDirectory {
    /// Number of active pilots holding `rank`.
    fn active_pilot_count(&self, rank: Rank) -> u32;

    /// Looks up a pilot, active or not.
    fn pilot(&self, pilot_id: PilotId) -> Option<Pilot>;
}

/// Request storage as seen by the engine.
pub trait RequestRepository {
    /// Returns requests that currently claim their dates (submitted, in
    /// review or approved) of the given category, held by pilots of the
    /// given rank, and overlapping `window`.
    fn find_non_terminal_requests(
        &self,
        rank: Rank,
        category: RequestCategory,
        window: DateRange,
    ) -> Vec<LeaveRequest>;
}

/// An owned, point-in-time view of pilots and requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FleetSnapshot {
    pilots: Vec<Pilot>,
    requests: Vec<LeaveRequest>,
}

impl FleetSnapshot {
    /// Creates a snapshot from owned records.
    #[must_use]
    pub const fn new(pilots: Vec<Pilot>, requests: Vec<LeaveRequest>) -> Self {
        Self { pilots, requests }
    }

    /// All pilots in the snapshot.
    #[must_use]
    pub fn pilots(&self) -> &[Pilot] {
        &self.pilots
    }

    /// All requests in the snapshot.
    #[must_use]
    pub fn requests(&self) -> &[LeaveRequest] {
        &self.requests
    }

    /// Looks up a request by ID.
    #[must_use]
    pub fn request(&self, request_id: RequestId) -> Option<&LeaveRequest> {
        self.requests
            .iter()
            .find(|r| r.request_id == Some(request_id))
    }

    /// Inserts a request, replacing any existing record with the same ID.
    pub fn upsert_request(&mut self, request: LeaveRequest) {
        if let Some(existing) = self
            .requests
            .iter_mut()
            .find(|r| request.request_id.is_some() && r.request_id == request.request_id)
        {
            *existing = request;
        } else {
            self.requests.push(request);
        }
    }

    /// Inserts a pilot, replacing any existing record with the same ID.
    pub fn upsert_pilot(&mut self, pilot: Pilot) {
        if let Some(existing) = self.pilots.iter_mut().find(|p| p.pilot_id == pilot.pilot_id) {
            *existing = pilot;
        } else {
            self.pilots.push(pilot);
        }
    }

    fn rank_of(&self, pilot_id: PilotId) -> Option<Rank> {
        self.pilots
            .iter()
            .find(|p| p.pilot_id == pilot_id)
            .map(|p| p.rank)
    }
}

impl PilotDirectory for FleetSnapshot {
    fn active_pilot_count(&self, rank: Rank) -> u32 {
        let count: usize = self
            .pilots
            .iter()
            .filter(|p| p.is_active && p.rank == rank)
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    fn pilot(&self, pilot_id: PilotId) -> Option<Pilot> {
        self.pilots.iter().find(|p| p.pilot_id == pilot_id).cloned()
    }
}

impl RequestRepository for FleetSnapshot {
    fn find_non_terminal_requests(
        &self,
        rank: Rank,
        category: RequestCategory,
        window: DateRange,
    ) -> Vec<LeaveRequest> {
        self.requests
            .iter()
            .filter(|r| {
                r.status.claims_dates()
                    && r.category == category
                    && r.dates.overlaps(&window)
                    && self.rank_of(r.pilot_id) == Some(rank)
            })
            .cloned()
            .collect()
    }
}
