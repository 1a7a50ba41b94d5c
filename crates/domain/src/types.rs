// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Canonical identifier of a pilot record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PilotId(pub i64);

impl std::fmt::Display for PilotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical identifier of a request record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub i64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A pilot's crew category.
///
/// Each rank carries its own minimum on-duty crew requirement, and the
/// two ranks are never pooled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Captain,
    FirstOfficer,
}

impl Rank {
    /// All ranks, in display order.
    pub const ALL: [Self; 2] = [Self::Captain, Self::FirstOfficer];

    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Captain => "captain",
            Self::FirstOfficer => "first_officer",
        }
    }
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "captain" => Ok(Self::Captain),
            "first_officer" => Ok(Self::FirstOfficer),
            _ => Err(DomainError::InvalidRank(s.to_string())),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Captain => write!(f, "Captain"),
            Self::FirstOfficer => write!(f, "First Officer"),
        }
    }
}

/// Broad request category.
///
/// Only `Leave` requests take a pilot off the roster. `Flight` requests
/// change duties but leave the pilot present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestCategory {
    Leave,
    Flight,
}

impl RequestCategory {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Leave => "leave",
            Self::Flight => "flight",
        }
    }
}

impl FromStr for RequestCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leave" => Ok(Self::Leave),
            "flight" => Ok(Self::Flight),
            _ => Err(DomainError::InvalidCategory(s.to_string())),
        }
    }
}

/// The specific kind of request.
///
/// Opaque to the eligibility rules beyond the category it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    /// Annual leave
    Annual,
    /// Sick leave
    Sick,
    /// Rostered day off
    Rdo,
    /// Special day off
    Sdo,
    LongServiceLeave,
    Compassionate,
    /// Change of assigned route
    RouteChange,
    /// Swap of a rostered duty with another pilot
    DutySwap,
    Training,
}

impl RequestType {
    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Sick => "sick",
            Self::Rdo => "rdo",
            Self::Sdo => "sdo",
            Self::LongServiceLeave => "long_service_leave",
            Self::Compassionate => "compassionate",
            Self::RouteChange => "route_change",
            Self::DutySwap => "duty_swap",
            Self::Training => "training",
        }
    }

    /// Returns the category this request type belongs to.
    #[must_use]
    pub const fn category(&self) -> RequestCategory {
        match self {
            Self::Annual
            | Self::Sick
            | Self::Rdo
            | Self::Sdo
            | Self::LongServiceLeave
            | Self::Compassionate => RequestCategory::Leave,
            Self::RouteChange | Self::DutySwap | Self::Training => RequestCategory::Flight,
        }
    }
}

impl FromStr for RequestType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "annual" => Ok(Self::Annual),
            "sick" => Ok(Self::Sick),
            "rdo" => Ok(Self::Rdo),
            "sdo" => Ok(Self::Sdo),
            "long_service_leave" => Ok(Self::LongServiceLeave),
            "compassionate" => Ok(Self::Compassionate),
            "route_change" => Ok(Self::RouteChange),
            "duty_swap" => Ok(Self::DutySwap),
            "training" => Ok(Self::Training),
            _ => Err(DomainError::InvalidRequestType(s.to_string())),
        }
    }
}

/// A pilot record as seen by the scheduling rules.
///
/// Pilots are never deleted. Historical requests keep referring to a
/// deactivated pilot, so deactivation only clears `is_active`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pilot {
    /// The pilot's canonical ID.
    pub pilot_id: PilotId,
    /// The pilot's current rank.
    pub rank: Rank,
    /// Seniority number. Lower is more senior.
    pub seniority_number: u32,
    /// Whether the pilot is currently on the active roster.
    pub is_active: bool,
}

impl Pilot {
    /// Creates a new active pilot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSeniorityNumber` if `seniority_number` is zero.
    pub const fn new(
        pilot_id: PilotId,
        rank: Rank,
        seniority_number: u32,
    ) -> Result<Self, DomainError> {
        if seniority_number == 0 {
            return Err(DomainError::InvalidSeniorityNumber {
                value: seniority_number,
            });
        }

        Ok(Self {
            pilot_id,
            rank,
            seniority_number,
            is_active: true,
        })
    }

    /// Returns a copy of this pilot marked inactive.
    #[must_use]
    pub const fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// A closed, inclusive range of calendar days.
///
/// Fields are public so boundary code can carry unvalidated input;
/// `DateRange::new` and `validate` enforce `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day (inclusive).
    pub start: Date,
    /// Last day (inclusive).
    pub end: Date,
}

impl DateRange {
    /// Creates a validated date range.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` if `end` is before `start`.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        let range: Self = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    /// A range covering exactly one day.
    #[must_use]
    pub const fn single_day(day: Date) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Checks that `end >= start`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` if the range is inverted.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.end < self.start {
            return Err(DomainError::InvalidDateRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Returns true if `day` falls inside the range.
    #[must_use]
    pub fn contains(&self, day: Date) -> bool {
        self.start <= day && day <= self.end
    }

    /// Standard closed-interval overlap test.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Number of days in the range, inclusive. Zero for an inverted range.
    #[must_use]
    pub fn len_days(&self) -> usize {
        let span: i64 = (self.end - self.start).whole_days() + 1;
        usize::try_from(span).unwrap_or(0)
    }

    /// Iterates over every day of the range in order.
    pub fn days(&self) -> impl Iterator<Item = Date> + use<> {
        let end: Date = self.end;
        std::iter::successors(Some(self.start), move |day| {
            day.next_day().filter(|next| *next <= end)
        })
        .take_while(move |day| *day <= end)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{} to {}", self.start, self.end)
        }
    }
}
