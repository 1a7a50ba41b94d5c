// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod availability;
mod config;
mod conflicts;
mod directory;
mod eligibility;
mod error;
mod seniority;
mod workflow;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use availability::{AvailabilityWindow, DailyAvailability, availability};
pub use config::{DEFAULT_LATE_NOTICE_DAYS, DEFAULT_MINIMUM_CREW, EngineConfig, MinimumCrew};
pub use conflicts::conflicts_for;
pub use directory::{FleetSnapshot, PilotDirectory, RequestRepository};
pub use eligibility::{
    ConflictEntry, EligibilityEngine, EligibilityVerdict, Recommendation, Relation,
};
pub use error::CoreError;
pub use seniority::{Contender, RankedRequest, compare_priority, rank_by_seniority};
pub use workflow::{
    NewRequest, TransitionResult, apply_verdict, create_request, request_snapshot, transition,
};
