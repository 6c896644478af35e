//! Status state machines for the data-management dialog
//!
//! Timing is driven by the caller passing `Instant`s, so expiry is explicit
//! and nothing here spawns timers.

use std::time::{Duration, Instant};

/// Kind of status currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Idle,
    Success,
    Error,
}

/// Result of advancing a status to `now`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Nothing expired
    Unchanged,
    /// The message expired and the status is idle again
    Reset,
    /// As `Reset`, and the dialog should close
    ResetAndClose,
}

/// Transient success/error message with an auto-reset deadline
#[derive(Debug, Clone, Default)]
pub struct TransferStatus {
    kind: StatusKind,
    message: String,
    reset_at: Option<Instant>,
    close_on_reset: bool,
}

impl TransferStatus {
    /// Idle status with no message
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_idle(&self) -> bool {
        self.kind == StatusKind::Idle
    }

    /// Show a success message until `now + after`
    pub fn succeed(&mut self, message: impl Into<String>, now: Instant, after: Duration, close: bool) {
        self.set(StatusKind::Success, message.into(), now + after, close);
    }

    /// Show an error message until `now + after`
    pub fn fail(&mut self, message: impl Into<String>, now: Instant, after: Duration) {
        self.set(StatusKind::Error, message.into(), now + after, false);
    }

    fn set(&mut self, kind: StatusKind, message: String, reset_at: Instant, close: bool) {
        self.kind = kind;
        self.message = message;
        self.reset_at = Some(reset_at);
        self.close_on_reset = close;
    }

    /// Return to idle if the deadline has passed
    pub fn tick(&mut self, now: Instant) -> Tick {
        match self.reset_at {
            Some(deadline) if now >= deadline => {
                let close = self.close_on_reset;
                *self = Self::default();
                if close {
                    Tick::ResetAndClose
                } else {
                    Tick::Reset
                }
            }
            _ => Tick::Unchanged,
        }
    }
}

/// Two-step confirmation for the destructive clear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearConfirmation {
    #[default]
    Idle,
    ConfirmPending,
    Cleared,
}

impl ClearConfirmation {
    /// Ask for confirmation
    pub fn request(&mut self) {
        if *self == Self::Idle {
            *self = Self::ConfirmPending;
        }
    }

    /// Confirm a pending request; returns whether the clear should happen
    pub fn confirm(&mut self) -> bool {
        if *self == Self::ConfirmPending {
            *self = Self::Cleared;
            true
        } else {
            false
        }
    }

    /// Abandon a pending request
    pub fn cancel(&mut self) {
        if *self == Self::ConfirmPending {
            *self = Self::Idle;
        }
    }

    /// Back to idle after a completed clear
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
