// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Eligibility evaluation of a single candidate request.
//!
//! ## Decision Policy (Leave category)
//!
//! With `T` the minimum crew for the candidate's rank, the engine builds
//! successive hypothetical availability windows and applies the first rule
//! that matches:
//!
//! 1. Candidate alone, on top of approved leave, breaches `T`:
//!    `Review` if approved leave held by a junior pilot covers a breach
//!    day, otherwise `Deny`.
//! 2. Adding pending requests of senior pilots breaches `T`: `Deny`,
//!    naming those requests.
//! 3. Adding pending requests tied on seniority and submission time
//!    breaches `T`: `Review`.
//! 4. Adding the remaining (junior) pending requests breaches `T`:
//!    `Approve`, noting the implicated junior requests.
//! 5. Otherwise `Approve`.
//!
//! A day exactly at `T` is never a breach. Flight-category requests do not
//! change availability and are always approved.
//!
//! Evaluation is a pure function of the collaborators' contents. It never
//! writes and never fails: invalid input yields a `Deny` verdict.

use crate::availability::{AvailabilityWindow, availability};
use crate::config::EngineConfig;
use crate::conflicts::conflicts_for;
use crate::directory::{PilotDirectory, RequestRepository};
use crate::seniority::{Contender, RankedRequest, rank_by_seniority};
use crew_leave_domain::{
    LeaveRequest, PeriodCode, Pilot, PilotId, Rank, RequestCategory, RequestId, RequestStatus,
    validate_request_fields,
};
use serde::Serialize;
use time::Date;
use tracing::{debug, info};

/// The engine's recommendation for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// The request can be granted.
    Approve,
    /// The request must be refused.
    Deny,
    /// A reviewer must decide.
    Review,
}

impl Recommendation {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Deny => "deny",
            Self::Review => "review",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a conflicting request stands relative to the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Ranked ahead of the candidate.
    Senior,
    /// Ranked behind the candidate.
    Junior,
}

/// One conflicting request, as evidence on a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictEntry {
    /// The conflicting request.
    pub request_id: Option<RequestId>,
    /// Its owner.
    pub pilot_id: PilotId,
    /// Its status at evaluation time.
    pub status: RequestStatus,
    /// Its owner's seniority number.
    pub seniority_number: u32,
    /// Its 1-based position in the priority order.
    pub priority_position: usize,
    /// Whether it ranks ahead of or behind the candidate.
    pub relation: Relation,
}

/// The outcome of evaluating one candidate request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityVerdict {
    /// The evaluated request. `None` for an unpersisted candidate.
    pub request_id: Option<RequestId>,
    /// The recommendation.
    pub recommendation: Recommendation,
    /// True if granting the candidate together with the contenders it
    /// was weighed against would drop the rank below its minimum.
    pub breach: bool,
    /// The candidate's rank, when the pilot could be resolved.
    pub rank: Option<Rank>,
    /// The minimum crew threshold applied.
    pub threshold: Option<u32>,
    /// Lowest daily count after granting the candidate on top of approved
    /// leave and senior pending requests.
    pub minimum_available: Option<u32>,
    /// The candidate's 1-based position among the contenders.
    pub candidate_position: Option<usize>,
    /// Roster periods the candidate touches, in order.
    pub roster_periods: Vec<PeriodCode>,
    /// Conflicting requests, in priority order.
    pub conflicts: Vec<ConflictEntry>,
    /// Human-readable explanation.
    pub reason: String,
}

impl EligibilityVerdict {
    fn rejected(candidate: &LeaveRequest, reason: String) -> Self {
        Self {
            request_id: candidate.request_id,
            recommendation: Recommendation::Deny,
            breach: false,
            rank: None,
            threshold: None,
            minimum_available: None,
            candidate_position: None,
            roster_periods: Vec::new(),
            conflicts: Vec::new(),
            reason,
        }
    }
}

/// The contenders a candidate is weighed against, grouped by how they
/// stand relative to it.
struct Contenders<'a> {
    approved: Vec<&'a Contender>,
    senior: Vec<&'a Contender>,
    tied: Vec<&'a Contender>,
    junior: Vec<&'a Contender>,
}

impl<'a> Contenders<'a> {
    fn split(candidate: &Contender, others: impl Iterator<Item = &'a Contender>) -> Self {
        let mut split: Self = Self {
            approved: Vec::new(),
            senior: Vec::new(),
            tied: Vec::new(),
            junior: Vec::new(),
        };
        for other in others {
            if other.request.status == RequestStatus::Approved {
                split.approved.push(other);
            } else if other.has_real_advantage_over(candidate) {
                split.senior.push(other);
            } else if other.is_tied_with(candidate) {
                split.tied.push(other);
            } else {
                split.junior.push(other);
            }
        }
        split
    }
}

/// Evaluates requests against a consistent view of pilots and requests.
pub struct EligibilityEngine<'a, D: ?Sized, R: ?Sized> {
    directory: &'a D,
    repository: &'a R,
    config: &'a EngineConfig,
}

impl<'a, D, R> EligibilityEngine<'a, D, R>
where
    D: PilotDirectory + ?Sized,
    R: RequestRepository + ?Sized,
{
    /// Creates a new engine over the given collaborators.
    #[must_use]
    pub const fn new(directory: &'a D, repository: &'a R, config: &'a EngineConfig) -> Self {
        Self {
            directory,
            repository,
            config,
        }
    }

    /// Evaluates `candidate` and returns a verdict.
    ///
    /// Never fails. Malformed requests and unresolvable pilots yield a
    /// `Deny` verdict carrying the reason.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn evaluate(&self, candidate: &LeaveRequest) -> EligibilityVerdict {
        if let Err(err) = validate_request_fields(candidate) {
            debug!(request = %candidate.label(), error = %err, "Candidate failed validation");
            return EligibilityVerdict::rejected(candidate, format!("Validation failed: {err}"));
        }

        let pilot: Pilot = match self.directory.pilot(candidate.pilot_id) {
            Some(pilot) if pilot.is_active => pilot,
            Some(_) => {
                return EligibilityVerdict::rejected(
                    candidate,
                    format!(
                        "Insufficient data: pilot {} is deactivated",
                        candidate.pilot_id
                    ),
                );
            }
            None => {
                return EligibilityVerdict::rejected(
                    candidate,
                    format!("Insufficient data: pilot {} not found", candidate.pilot_id),
                );
            }
        };

        let roster_periods: Vec<PeriodCode> = match self
            .config
            .calendar()
            .periods_overlapping(candidate.dates.start, candidate.dates.end)
        {
            Ok(periods) => periods,
            Err(err) => {
                return EligibilityVerdict::rejected(
                    candidate,
                    format!("Validation failed: {err}"),
                );
            }
        };

        let ranked: Vec<RankedRequest> = self.rank_contenders(candidate, &pilot);
        let candidate_position: usize = ranked
            .iter()
            .find(|r| r.contender.request == *candidate)
            .map_or(1, |r| r.position);
        let conflicts: Vec<ConflictEntry> = ranked
            .iter()
            .filter(|r| r.position != candidate_position)
            .map(|r| ConflictEntry {
                request_id: r.contender.request.request_id,
                pilot_id: r.contender.request.pilot_id,
                status: r.contender.request.status,
                seniority_number: r.contender.seniority_number,
                priority_position: r.position,
                relation: if r.position < candidate_position {
                    Relation::Senior
                } else {
                    Relation::Junior
                },
            })
            .collect();

        let threshold: u32 = self.config.minimum_crew.for_rank(pilot.rank);
        let base: AvailabilityWindow = availability(
            self.directory,
            self.repository,
            pilot.rank,
            candidate.dates,
            candidate.request_id,
        );

        let mut verdict: EligibilityVerdict = EligibilityVerdict {
            request_id: candidate.request_id,
            recommendation: Recommendation::Approve,
            breach: false,
            rank: Some(pilot.rank),
            threshold: Some(threshold),
            minimum_available: base.minimum(),
            candidate_position: Some(candidate_position),
            roster_periods,
            conflicts,
            reason: String::new(),
        };

        if candidate.category == RequestCategory::Flight {
            verdict.reason = format!(
                "Flight requests do not change {} availability ({} overlapping request(s) noted)",
                pilot.rank,
                verdict.conflicts.len()
            );
        } else {
            let self_contender: Contender = Contender::new(candidate.clone(), pilot.seniority_number);
            let others = ranked
                .iter()
                .filter(|r| r.position != candidate_position)
                .map(|r| &r.contender);
            let contenders: Contenders<'_> = Contenders::split(&self_contender, others);
            decide_leave(
                &mut verdict,
                &self_contender,
                &contenders,
                &base,
                threshold,
                pilot.rank,
            );
        }

        info!(
            request = %candidate.label(),
            pilot_id = %candidate.pilot_id,
            rank = pilot.rank.as_str(),
            recommendation = verdict.recommendation.as_str(),
            breach = verdict.breach,
            conflicts = verdict.conflicts.len(),
            "Evaluated request eligibility"
        );

        verdict
    }

    /// Ranks the candidate together with every conflict whose pilot is
    /// active. Conflicts of unresolvable or deactivated pilots are dropped.
    fn rank_contenders(&self, candidate: &LeaveRequest, pilot: &Pilot) -> Vec<RankedRequest> {
        let mut contenders: Vec<Contender> =
            vec![Contender::new(candidate.clone(), pilot.seniority_number)];

        for conflict in conflicts_for(self.directory, self.repository, candidate, pilot.rank) {
            match self.directory.pilot(conflict.pilot_id) {
                Some(owner) if owner.is_active => {
                    contenders.push(Contender::new(conflict, owner.seniority_number));
                }
                _ => {
                    debug!(
                        request = %conflict.label(),
                        pilot_id = %conflict.pilot_id,
                        "Dropping conflict held by an inactive or unknown pilot"
                    );
                }
            }
        }

        rank_by_seniority(contenders)
    }
}

fn decide_leave(
    verdict: &mut EligibilityVerdict,
    candidate: &Contender,
    contenders: &Contenders<'_>,
    base: &AvailabilityWindow,
    threshold: u32,
    rank: Rank,
) {
    let alone: AvailabilityWindow = base.with_absences([&candidate.request]);
    let with_senior: AvailabilityWindow =
        alone.with_absences(contenders.senior.iter().map(|c| &c.request));
    let with_tied: AvailabilityWindow =
        with_senior.with_absences(contenders.tied.iter().map(|c| &c.request));
    let with_all: AvailabilityWindow =
        with_tied.with_absences(contenders.junior.iter().map(|c| &c.request));

    verdict.minimum_available = with_senior.minimum();
    verdict.breach = with_all.breaches(threshold);

    let label: String = candidate.request.label();

    if alone.breaches(threshold) {
        let breach_days: Vec<Date> = alone.breach_days(threshold);
        let lowest: u32 = alone.minimum().unwrap_or(0);
        let holders: Vec<&Contender> = covering(&contenders.approved, &breach_days);
        let junior_holders: Vec<&Contender> = holders
            .iter()
            .copied()
            .filter(|c| candidate.has_real_advantage_over(c))
            .collect();

        if junior_holders.is_empty() {
            verdict.recommendation = Recommendation::Deny;
            verdict.reason = if holders.is_empty() {
                format!(
                    "Granting {label} would leave {lowest} {rank}(s) on duty, \
                     below the {rank} minimum of {threshold}"
                )
            } else {
                format!(
                    "Granting {label} would leave {lowest} {rank}(s) on duty, \
                     below the {rank} minimum of {threshold}; approved leave already held: {}",
                    describe(&holders)
                )
            };
        } else {
            verdict.recommendation = Recommendation::Review;
            verdict.reason = format!(
                "Granting {label} would leave {lowest} {rank}(s) on duty, below the {rank} \
                 minimum of {threshold}; approved leave of junior pilot(s) covers the shortage: {}",
                describe(&junior_holders)
            );
        }
        return;
    }

    if with_senior.breaches(threshold) {
        let blockers: Vec<&Contender> =
            covering(&contenders.senior, &with_senior.breach_days(threshold));
        verdict.recommendation = Recommendation::Deny;
        verdict.reason = format!(
            "Granting {label} after senior requests would breach the {rank} minimum of \
             {threshold}; blocked by senior request(s): {}",
            describe(&blockers)
        );
        return;
    }

    if with_tied.breaches(threshold) {
        let tied: Vec<&Contender> = covering(&contenders.tied, &with_tied.breach_days(threshold));
        verdict.recommendation = Recommendation::Review;
        verdict.reason = format!(
            "Granting {label} competes for the last {rank} place with request(s) of equal \
             seniority submitted at the same time: {}",
            describe(&tied)
        );
        return;
    }

    verdict.recommendation = Recommendation::Approve;
    if with_all.breaches(threshold) {
        let implicated: Vec<&Contender> =
            covering(&contenders.junior, &with_all.breach_days(threshold));
        verdict.reason = format!(
            "Approved ahead of junior request(s) that can no longer all be granted within the \
             {rank} minimum of {threshold}: {}",
            describe(&implicated)
        );
    } else {
        verdict.reason = format!("{rank} availability stays at or above the minimum of {threshold}");
    }
}

/// Contenders whose dates cover at least one of `days`.
fn covering<'a>(contenders: &[&'a Contender], days: &[Date]) -> Vec<&'a Contender> {
    contenders
        .iter()
        .copied()
        .filter(|c| days.iter().any(|day| c.request.dates.contains(*day)))
        .collect()
}

fn describe(contenders: &[&Contender]) -> String {
    contenders
        .iter()
        .map(|c| {
            format!(
                "{} (pilot {}, seniority {}, {} to {})",
                c.request.label(),
                c.request.pilot_id,
                c.seniority_number,
                c.request.dates.start,
                c.request.dates.end
            )
        })
        .collect::<Vec<String>>()
        .join(", ")
}
