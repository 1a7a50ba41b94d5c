// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Engine configuration.
//!
//! Every value the engine depends on is passed in explicitly. Nothing is
//! read from ambient state such as the system clock.

use crew_leave_domain::{Rank, RosterAnchor, RosterCalendar};
use serde::{Deserialize, Serialize};

/// Default minimum on-duty crew per rank.
pub const DEFAULT_MINIMUM_CREW: u32 = 10;

/// Default notice, in days, below which a submission is flagged late.
pub const DEFAULT_LATE_NOTICE_DAYS: u32 = 21;

/// Minimum number of pilots of each rank that must remain on duty.
///
/// Ranks are enforced independently. A surplus of one rank never offsets
/// a shortage of the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimumCrew {
    /// Minimum captains on duty per day.
    pub captains: u32,
    /// Minimum first officers on duty per day.
    pub first_officers: u32,
}

impl MinimumCrew {
    /// Creates a new per-rank minimum.
    #[must_use]
    pub const fn new(captains: u32, first_officers: u32) -> Self {
        Self {
            captains,
            first_officers,
        }
    }

    /// Returns the threshold for one rank.
    #[must_use]
    pub const fn for_rank(&self, rank: Rank) -> u32 {
        match rank {
            Rank::Captain => self.captains,
            Rank::FirstOfficer => self.first_officers,
        }
    }
}

impl Default for MinimumCrew {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM_CREW, DEFAULT_MINIMUM_CREW)
    }
}

/// Configuration for the eligibility engine and request workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Per-rank minimum crew thresholds.
    pub minimum_crew: MinimumCrew,
    /// Submissions with less notice than this are flagged late.
    pub late_notice_days: u32,
    /// The reference period all roster periods are derived from.
    pub roster_anchor: RosterAnchor,
}

impl EngineConfig {
    /// Returns the roster calendar for the configured anchor.
    #[must_use]
    pub const fn calendar(&self) -> RosterCalendar {
        RosterCalendar::new(self.roster_anchor)
    }

    /// Returns a copy with a different per-rank minimum.
    #[must_use]
    pub const fn with_minimum_crew(mut self, minimum_crew: MinimumCrew) -> Self {
        self.minimum_crew = minimum_crew;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            minimum_crew: MinimumCrew::default(),
            late_notice_days: DEFAULT_LATE_NOTICE_DAYS,
            roster_anchor: RosterAnchor::default(),
        }
    }
}
