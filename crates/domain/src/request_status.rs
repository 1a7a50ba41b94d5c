// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request status tracking and transition rules.
//!
//! A request moves forward only:
//!
//! ```text
//! Draft -> Submitted -> InReview -> {Approved, Denied}
//!              |            |
//!              +------------+--> Withdrawn
//! ```
//!
//! `InReview` is an optional hold, so `Submitted` may also be decided
//! directly. `Approved`, `Denied` and `Withdrawn` are terminal.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Workflow states of a leave or flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Being prepared by the pilot, not yet visible to reviewers
    Draft,
    /// Submitted and awaiting a decision
    Submitted,
    /// Held by a reviewer for a manual decision
    InReview,
    Approved,
    Denied,
    /// Cancelled by the pilot before a decision
    Withdrawn,
}

impl RequestStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::InReview => "in_review",
            Self::Approved => "approved",
            Self::Denied => "denied",
            Self::Withdrawn => "withdrawn",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "draft" => Ok(Self::Draft),
            "submitted" => Ok(Self::Submitted),
            "in_review" => Ok(Self::InReview),
            "approved" => Ok(Self::Approved),
            "denied" => Ok(Self::Denied),
            "withdrawn" => Ok(Self::Withdrawn),
            _ => Err(DomainError::InvalidRequestStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if this status is terminal (cannot transition to another state).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Denied | Self::Withdrawn)
    }

    /// Returns true while the request is awaiting a decision.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Submitted | Self::InReview)
    }

    /// Returns true if the request holds, or is asking for, its dates.
    ///
    /// These are the statuses considered by conflict detection: pending
    /// requests plus approved ones. Drafts, denials and withdrawals never
    /// compete for crew.
    #[must_use]
    pub const fn claims_dates(&self) -> bool {
        matches!(self, Self::Submitted | Self::InReview | Self::Approved)
    }

    /// Returns true if entering this status records a reviewer decision.
    #[must_use]
    pub const fn is_decision(&self) -> bool {
        matches!(self, Self::Approved | Self::Denied)
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        let valid = match self {
            Self::Draft => matches!(new_status, Self::Submitted),
            Self::Submitted => matches!(
                new_status,
                Self::InReview | Self::Approved | Self::Denied | Self::Withdrawn
            ),
            Self::InReview => matches!(
                new_status,
                Self::Approved | Self::Denied | Self::Withdrawn
            ),
            Self::Approved | Self::Denied | Self::Withdrawn => false,
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by request lifecycle rules".to_string(),
            })
        }
    }
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [RequestStatus; 6] = [
        RequestStatus::Draft,
        RequestStatus::Submitted,
        RequestStatus::InReview,
        RequestStatus::Approved,
        RequestStatus::Denied,
        RequestStatus::Withdrawn,
    ];

    #[test]
    fn test_status_string_round_trip() {
        for status in ALL {
            let s = status.as_str();
            match RequestStatus::parse_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        let result = RequestStatus::parse_str("pending");
        assert!(matches!(
            result,
            Err(DomainError::InvalidRequestStatus { .. })
        ));
    }

    #[test]
    fn test_terminal_states() {
        assert!(!RequestStatus::Draft.is_terminal());
        assert!(!RequestStatus::Submitted.is_terminal());
        assert!(!RequestStatus::InReview.is_terminal());
        assert!(RequestStatus::Approved.is_terminal());
        assert!(RequestStatus::Denied.is_terminal());
        assert!(RequestStatus::Withdrawn.is_terminal());
    }

    #[test]
    fn test_claims_dates() {
        assert!(!RequestStatus::Draft.claims_dates());
        assert!(RequestStatus::Submitted.claims_dates());
        assert!(RequestStatus::InReview.claims_dates());
        assert!(RequestStatus::Approved.claims_dates());
        assert!(!RequestStatus::Denied.claims_dates());
        assert!(!RequestStatus::Withdrawn.claims_dates());
    }

    #[test]
    fn test_draft_only_submits() {
        let current = RequestStatus::Draft;

        assert!(current.validate_transition(RequestStatus::Submitted).is_ok());
        assert!(current.validate_transition(RequestStatus::InReview).is_err());
        assert!(current.validate_transition(RequestStatus::Approved).is_err());
        assert!(current.validate_transition(RequestStatus::Withdrawn).is_err());
    }

    #[test]
    fn test_valid_transitions_from_submitted() {
        let current = RequestStatus::Submitted;

        assert!(current.validate_transition(RequestStatus::InReview).is_ok());
        assert!(current.validate_transition(RequestStatus::Approved).is_ok());
        assert!(current.validate_transition(RequestStatus::Denied).is_ok());
        assert!(current.validate_transition(RequestStatus::Withdrawn).is_ok());
        assert!(current.validate_transition(RequestStatus::Draft).is_err());
        assert!(current.validate_transition(RequestStatus::Submitted).is_err());
    }

    #[test]
    fn test_valid_transitions_from_in_review() {
        let current = RequestStatus::InReview;

        assert!(current.validate_transition(RequestStatus::Approved).is_ok());
        assert!(current.validate_transition(RequestStatus::Denied).is_ok());
        assert!(current.validate_transition(RequestStatus::Withdrawn).is_ok());
        assert!(current.validate_transition(RequestStatus::InReview).is_err());
        assert!(current.validate_transition(RequestStatus::Submitted).is_err());
    }

    #[test]
    fn test_no_transitions_from_terminal_states() {
        for terminal in [
            RequestStatus::Approved,
            RequestStatus::Denied,
            RequestStatus::Withdrawn,
        ] {
            for target in ALL {
                let result = terminal.validate_transition(target);
                match result {
                    Err(DomainError::InvalidStatusTransition { reason, .. }) => {
                        assert_eq!(reason, "cannot transition from terminal state");
                    }
                    other => panic!("{terminal} -> {target} should fail, got {other:?}"),
                }
            }
        }
    }
}
