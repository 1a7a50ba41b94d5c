// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{RequestCategory, RequestType};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The end date of a range precedes its start date.
    InvalidDateRange {
        /// The start date (inclusive).
        start: time::Date,
        /// The end date (inclusive).
        end: time::Date,
    },
    /// Failed to parse a date or timestamp from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic left the representable calendar.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Rank string is not recognized.
    InvalidRank(String),
    /// Request category string is not recognized.
    InvalidCategory(String),
    /// Request type string is not recognized.
    InvalidRequestType(String),
    /// Request status string is not recognized.
    InvalidRequestStatus {
        /// The unrecognized status.
        status: String,
    },
    /// The request type does not belong to the stated category.
    CategoryMismatch {
        /// The request type supplied.
        request_type: RequestType,
        /// The category supplied alongside it.
        category: RequestCategory,
    },
    /// Roster period code could not be parsed.
    InvalidPeriodCode(String),
    /// Roster period number is outside `1..=13`.
    InvalidPeriodNumber {
        /// The invalid number.
        number: u8,
    },
    /// Seniority numbers must be positive.
    InvalidSeniorityNumber {
        /// The invalid value.
        value: u32,
    },
    /// A workflow status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition was rejected.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateRange { start, end } => {
                write!(
                    f,
                    "Invalid date range: end date {end} is before start date {start}"
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::InvalidRank(msg) => write!(f, "Invalid rank: {msg}"),
            Self::InvalidCategory(msg) => write!(f, "Invalid request category: {msg}"),
            Self::InvalidRequestType(msg) => write!(f, "Invalid request type: {msg}"),
            Self::InvalidRequestStatus { status } => {
                write!(f, "Invalid request status: {status}")
            }
            Self::CategoryMismatch {
                request_type,
                category,
            } => {
                write!(
                    f,
                    "Request type '{}' does not belong to category '{}'",
                    request_type.as_str(),
                    category.as_str()
                )
            }
            Self::InvalidPeriodCode(code) => {
                write!(
                    f,
                    "Invalid roster period code '{code}': expected the form RP<n>/<year>"
                )
            }
            Self::InvalidPeriodNumber { number } => {
                write!(
                    f,
                    "Invalid roster period number: {number}. Must be between 1 and 13"
                )
            }
            Self::InvalidSeniorityNumber { value } => {
                write!(
                    f,
                    "Invalid seniority number: {value}. Must be greater than 0"
                )
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot transition request from {from} to {to}: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
