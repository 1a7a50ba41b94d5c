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
    clippy::unwrap_used,
    clippy::expect_used
)]

#[cfg(test)]
mod tests;

use crew_leave_domain::{PilotId, RequestId};

/// Identity used for automatic decisions made by the eligibility engine.
pub const SYSTEM_ACTOR_ID: &str = "system";

/// Represents the entity performing an action.
///
/// An actor is a pilot acting on their own request, a reviewer deciding
/// one, or the system applying an engine verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (`system`, `pilot` or `reviewer`).
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }

    /// The eligibility engine acting on its own verdict.
    #[must_use]
    pub fn system() -> Self {
        Self::new(String::from(SYSTEM_ACTOR_ID), String::from("system"))
    }

    /// A pilot acting on their own request.
    #[must_use]
    pub fn pilot(pilot_id: PilotId) -> Self {
        Self::new(pilot_id.to_string(), String::from("pilot"))
    }

    /// A crewing reviewer.
    #[must_use]
    pub fn reviewer(reviewer_id: &str) -> Self {
        Self::new(reviewer_id.to_string(), String::from("reviewer"))
    }

    /// Returns true if this is the automatic system identity.
    #[must_use]
    pub fn is_system(&self) -> bool {
        self.actor_type == "system"
    }
}

/// Represents the reason or trigger for an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// A unique identifier for this cause (e.g. an HTTP request or evaluation ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g. "`SubmitRequest`", "`ApplyVerdict`").
    pub name: String,
    /// Optional additional details, such as the verdict reasons.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A rendering of a request's state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// A string representation of the state.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// An immutable audit event representing a request state change.
///
/// Every successful transition produces exactly one audit event, capturing
/// who acted, why, what they did, and the request state on either side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The persisted event ID. `None` until stored.
    pub event_id: Option<i64>,
    /// The request this event is scoped to. `None` only for a request
    /// that has not been persisted yet.
    pub request_id: Option<RequestId>,
    /// The actor who initiated this state change.
    pub actor: Actor,
    /// The cause or reason for this state change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The state before the transition.
    pub before: StateSnapshot,
    /// The state after the transition.
    pub after: StateSnapshot,
}

impl AuditEvent {
    /// Creates a new, unpersisted `AuditEvent`.
    #[must_use]
    pub const fn new(
        request_id: Option<RequestId>,
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
    ) -> Self {
        Self {
            event_id: None,
            request_id,
            actor,
            cause,
            action,
            before,
            after,
        }
    }

    /// Returns a copy of this event scoped to the given request.
    ///
    /// Used when the request ID is only known after the request is inserted.
    #[must_use]
    pub const fn for_request(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Returns a copy of this event carrying its persisted ID.
    #[must_use]
    pub const fn with_event_id(mut self, event_id: i64) -> Self {
        self.event_id = Some(event_id);
        self
    }
}
