//! Event moderation state machine.
//!
//! An event moves through five states:
//!
//! ```text
//! submitted --approve--> waiting-luma-edit
//! submitted --reject(reason)--> rejected
//! rejected  --approve--> waiting-luma-edit
//! waiting-luma-edit --reject(reason)--> rejected
//! waiting-luma-edit --publish--> published
//! published --reconcile:cancelled--> deleted
//! ```
//!
//! `deleted` is terminal. There is no direct path from `submitted` to
//! `published` — the external Luma edit step is mandatory. Re-invoking a
//! transition on an event already in the target state is a caller error,
//! not a silent no-op, so notifications are never double-sent.

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

/// Event lifecycle status.
///
/// Variant discriminants match the seed data order (1-based) in the
/// `event_statuses` database table.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// Freshly submitted through the public form, awaiting review.
    Submitted = 1,
    /// Rejected by an administrator with a reason.
    Rejected = 2,
    /// Approved; a Luma counterpart exists and awaits organizer edits.
    WaitingLumaEdit = 3,
    /// Live on the site and mirrored publicly on Luma.
    Published = 4,
    /// The Luma copy was cancelled; soft-deleted locally. Terminal.
    Deleted = 5,
}

impl EventStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Resolve a database status ID back to the enum.
    pub fn from_id(id: StatusId) -> Option<Self> {
        match id {
            1 => Some(Self::Submitted),
            2 => Some(Self::Rejected),
            3 => Some(Self::WaitingLumaEdit),
            4 => Some(Self::Published),
            5 => Some(Self::Deleted),
            _ => None,
        }
    }

    /// String representation for display, logging, and API payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Rejected => "rejected",
            Self::WaitingLumaEdit => "waiting-luma-edit",
            Self::Published => "published",
            Self::Deleted => "deleted",
        }
    }

    /// Returns the set of statuses a transition may start from to reach
    /// `self`.
    ///
    /// `Submitted` is only ever entered at creation, and `Deleted` is only
    /// entered by the reconciliation job when the remote copy disappears.
    pub fn allowed_sources(self) -> &'static [EventStatus] {
        match self {
            Self::Submitted => &[],
            Self::Rejected => &[Self::Submitted, Self::WaitingLumaEdit],
            Self::WaitingLumaEdit => &[Self::Submitted, Self::Rejected],
            Self::Published => &[Self::WaitingLumaEdit],
            Self::Deleted => &[Self::Published],
        }
    }
}

impl From<EventStatus> for StatusId {
    fn from(value: EventStatus) -> Self {
        value as StatusId
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether a transition from `from` to `to` is valid.
pub fn can_transition(from: EventStatus, to: EventStatus) -> bool {
    to.allowed_sources().contains(&from)
}

/// Validate a state transition, returning an error message for invalid ones.
pub fn validate_transition(from: EventStatus, to: EventStatus) -> Result<(), String> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(format!("Invalid transition: {from} -> {to}"))
    }
}

/// Validate that a rejection carries a usable reason.
///
/// The reason is forwarded verbatim to the submitter, so an empty or
/// whitespace-only string is rejected before any state mutation.
pub fn validate_rejection_reason(reason: &str) -> Result<(), String> {
    if reason.trim().is_empty() {
        Err("Rejection reason must not be empty".to_string())
    } else {
        Ok(())
    }
}
