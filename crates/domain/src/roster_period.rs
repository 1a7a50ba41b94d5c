// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster period calendar.
//!
//! Roster periods are fixed 28-day windows numbered `RP1` through `RP13`
//! within a roster year. Every period is derived from a single configured
//! anchor (a known period code and the date it starts on) by adding or
//! subtracting whole multiples of 28 days. The period after `RP13/Y` is
//! `RP1/(Y+1)`, so the roster year rolls over with the period count rather
//! than the calendar year.
//!
//! All arithmetic runs on Julian day numbers so that any representable
//! date maps to a period without overflow.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;
use time::macros::date;

/// Length of every roster period, in days.
pub const ROSTER_PERIOD_DAYS: i64 = 28;

/// Number of roster periods in a roster year.
pub const PERIODS_PER_YEAR: u8 = 13;

/// Identifies one roster period, e.g. `RP4/2026`.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PeriodCode {
    // Field order matters for the derived ordering.
    year: i32,
    number: u8,
}

impl PeriodCode {
    /// Creates a period code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPeriodNumber` unless `number` is in `1..=13`.
    pub const fn new(number: u8, year: i32) -> Result<Self, DomainError> {
        if number < 1 || number > PERIODS_PER_YEAR {
            return Err(DomainError::InvalidPeriodNumber { number });
        }
        Ok(Self { year, number })
    }

    /// Returns the period number within its roster year (1-based).
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.number
    }

    /// Returns the roster year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The period immediately after this one.
    #[must_use]
    pub fn next(&self) -> Self {
        Self::from_ordinal(self.ordinal() + 1)
    }

    /// The period immediately before this one.
    #[must_use]
    pub fn previous(&self) -> Self {
        Self::from_ordinal(self.ordinal() - 1)
    }

    /// Absolute period count since roster year zero.
    fn ordinal(self) -> i64 {
        i64::from(self.year) * i64::from(PERIODS_PER_YEAR) + i64::from(self.number - 1)
    }

    fn from_ordinal(ordinal: i64) -> Self {
        let per_year: i64 = i64::from(PERIODS_PER_YEAR);
        let year: i64 = ordinal.div_euclid(per_year);
        let index: i64 = ordinal.rem_euclid(per_year);

        // Saturates only for anchors far outside the representable calendar.
        let year: i32 = i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX });
        let number: u8 = u8::try_from(index + 1).unwrap_or(PERIODS_PER_YEAR);

        Self { year, number }
    }
}

impl std::fmt::Display for PeriodCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RP{}/{}", self.number, self.year)
    }
}

impl FromStr for PeriodCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidPeriodCode(s.to_string());

        let rest: &str = s.trim().strip_prefix("RP").ok_or_else(invalid)?;
        let (number, year) = rest.split_once('/').ok_or_else(invalid)?;
        let number: u8 = number.parse().map_err(|_| invalid())?;
        let year: i32 = year.parse().map_err(|_| invalid())?;

        Self::new(number, year)
    }
}

impl TryFrom<String> for PeriodCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PeriodCode> for String {
    fn from(code: PeriodCode) -> Self {
        code.to_string()
    }
}

/// The fixed point every roster period is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterAnchor {
    /// A known period.
    pub code: PeriodCode,
    /// The date that period starts on.
    pub start_date: Date,
}

impl RosterAnchor {
    /// Creates an anchor.
    #[must_use]
    pub const fn new(code: PeriodCode, start_date: Date) -> Self {
        Self { code, start_date }
    }
}

impl Default for RosterAnchor {
    /// `RP1/2026` starting on 10 January 2026.
    fn default() -> Self {
        Self {
            code: PeriodCode {
                year: 2026,
                number: 1,
            },
            start_date: date!(2026 - 01 - 10),
        }
    }
}

/// A single roster period with its resolved dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPeriod {
    code: PeriodCode,
    start_date: Date,
    end_date: Date,
}

impl RosterPeriod {
    /// Returns the period code.
    #[must_use]
    pub const fn code(&self) -> PeriodCode {
        self.code
    }

    /// Returns the start date (inclusive).
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the end date (inclusive).
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns true if `day` falls inside this period.
    #[must_use]
    pub fn contains(&self, day: Date) -> bool {
        self.start_date <= day && day <= self.end_date
    }

    /// Returns the number of days in this period.
    ///
    /// This should always be 28.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).whole_days() + 1
    }
}

/// Pure roster period arithmetic over an explicit anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RosterCalendar {
    anchor: RosterAnchor,
}

impl RosterCalendar {
    /// Creates a calendar from an anchor.
    #[must_use]
    pub const fn new(anchor: RosterAnchor) -> Self {
        Self { anchor }
    }

    /// Returns the anchor this calendar is computed from.
    #[must_use]
    pub const fn anchor(&self) -> RosterAnchor {
        self.anchor
    }

    /// Returns the period containing `day`.
    ///
    /// Defined for every representable date, before or after the anchor.
    #[must_use]
    pub fn period_for(&self, day: Date) -> PeriodCode {
        let days_from_anchor: i64 =
            i64::from(day.to_julian_day()) - i64::from(self.anchor.start_date.to_julian_day());
        let offset: i64 = days_from_anchor.div_euclid(ROSTER_PERIOD_DAYS);
        PeriodCode::from_ordinal(self.anchor.code.ordinal() + offset)
    }

    /// Resolves the start and end dates of a period.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if either bound falls
    /// outside the representable calendar.
    pub fn bounds_of(&self, code: PeriodCode) -> Result<RosterPeriod, DomainError> {
        let offset: i64 = code.ordinal() - self.anchor.code.ordinal();
        let anchor_day: i64 = i64::from(self.anchor.start_date.to_julian_day());

        let start_day: Option<i64> = offset
            .checked_mul(ROSTER_PERIOD_DAYS)
            .and_then(|days| days.checked_add(anchor_day));
        let end_day: Option<i64> = start_day.and_then(|day| day.checked_add(ROSTER_PERIOD_DAYS - 1));

        let start_date: Date = date_from_julian(start_day, || {
            format!("calculating roster period {code} start date")
        })?;
        let end_date: Date = date_from_julian(end_day, || {
            format!("calculating roster period {code} end date")
        })?;

        Ok(RosterPeriod {
            code,
            start_date,
            end_date,
        })
    }

    /// Returns every period touched by `start..=end`, in order.
    ///
    /// A range crossing a period boundary yields more than one code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` if `end` is before `start`.
    pub fn periods_overlapping(
        &self,
        start: Date,
        end: Date,
    ) -> Result<Vec<PeriodCode>, DomainError> {
        if end < start {
            return Err(DomainError::InvalidDateRange { start, end });
        }

        let first: i64 = self.period_for(start).ordinal();
        let last: i64 = self.period_for(end).ordinal();

        Ok((first..=last).map(PeriodCode::from_ordinal).collect())
    }

    /// Resolves `count` consecutive periods beginning with `first`.
    ///
    /// # Errors
    ///
    /// Returns an error if any period falls outside the representable calendar.
    pub fn consecutive_periods(
        &self,
        first: PeriodCode,
        count: usize,
    ) -> Result<Vec<RosterPeriod>, DomainError> {
        let mut periods: Vec<RosterPeriod> = Vec::with_capacity(count);
        let mut code: PeriodCode = first;

        for _ in 0..count {
            periods.push(self.bounds_of(code)?);
            code = code.next();
        }

        Ok(periods)
    }
}

fn date_from_julian(
    day: Option<i64>,
    operation: impl Fn() -> String,
) -> Result<Date, DomainError> {
    day.and_then(|day| i32::try_from(day).ok())
        .and_then(|day| Date::from_julian_day(day).ok())
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: operation(),
        })
}
