// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crew_leave_domain::{DomainError, RequestStatus};

/// Errors that can occur while creating or transitioning requests.
///
/// Eligibility outcomes (denials, breaches, conflicts) are never errors;
/// they are carried by `EligibilityVerdict`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The request itself is malformed.
    Validation(DomainError),
    /// The workflow rejected a status change. Nothing was applied.
    InvalidTransition {
        /// The current status.
        from: RequestStatus,
        /// The requested status.
        to: RequestStatus,
        /// Why the change was rejected.
        reason: String,
    },
    /// A referenced pilot could not be resolved.
    InsufficientData(String),
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "Validation failed: {err}"),
            Self::InvalidTransition { from, to, reason } => {
                write!(f, "Invalid transition from {from} to {to}: {reason}")
            }
            Self::InsufficientData(msg) => write!(f, "Insufficient data: {msg}"),
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) | Self::DomainViolation(err) => Some(err),
            Self::InvalidTransition { .. } | Self::InsufficientData(_) => None,
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
