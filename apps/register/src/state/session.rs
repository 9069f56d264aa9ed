//! # Session State
//!
//! Holds what the cashier has typed into the two amount fields and the last
//! calculated change.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Every keystroke becomes a command that writes a field
//! 2. Commands can run concurrently
//! 3. A calculation must see both fields from the same moment
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Front end action         Command                 Session change        │
//! │  ────────────────         ───────                 ──────────────        │
//! │                                                                         │
//! │  Type in Amount Due ─────► set_amount_due() ─────► amount_due = raw    │
//! │                                                    change = None        │
//! │                                                                         │
//! │  Type in Received ───────► set_amount_received() ► amount_received     │
//! │                                                    change = None        │
//! │                                                                         │
//! │  Click Calculate ────────► calculate_change() ───► change = Some(..)   │
//! │                                                                         │
//! │  Click Clear ────────────► reset_form() ─────────► everything empty    │
//! │                                                                         │
//! │  NOTE: Any edit throws away the previous result; it described          │
//! │        amounts that are no longer on screen.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use change_core::{
    classify, evaluate, ChangeResult, FormValidation, InputError, Trigger, ValidationStatus,
};

/// One of the two amount fields on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    AmountDue,
    AmountReceived,
}

impl Field {
    /// Neutral label shown above the input.
    pub const fn label(&self) -> &'static str {
        match self {
            Field::AmountDue => "Amount Due",
            Field::AmountReceived => "Amount Received",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a calculate request could not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {error}")]
pub struct CalculateError {
    pub field: Field,
    pub error: InputError,
}

/// The form as the cashier left it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSession {
    /// Raw text of the Amount Due field, verbatim
    pub amount_due: String,

    /// Raw text of the Amount Received field, verbatim
    pub amount_received: String,

    /// Result of the last calculate request, if no field changed since
    pub change: Option<ChangeResult>,

    /// When a field was last edited or the form was reset
    pub updated_at: DateTime<Utc>,
}

impl ChangeSession {
    /// Creates a blank session.
    pub fn new() -> Self {
        ChangeSession {
            amount_due: String::new(),
            amount_received: String::new(),
            change: None,
            updated_at: Utc::now(),
        }
    }

    /// Replaces the Amount Due text and discards any stale result.
    pub fn set_amount_due(&mut self, raw: impl Into<String>) {
        self.amount_due = raw.into();
        self.touch();
    }

    /// Replaces the Amount Received text and discards any stale result.
    pub fn set_amount_received(&mut self, raw: impl Into<String>) {
        self.amount_received = raw.into();
        self.touch();
    }

    /// Raw text of a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::AmountDue => &self.amount_due,
            Field::AmountReceived => &self.amount_received,
        }
    }

    /// Current status of both fields. Re-derived on every call.
    pub fn validation(&self) -> FormValidation {
        classify(&self.amount_due, &self.amount_received)
    }

    /// Computes change for the current fields and keeps the result.
    ///
    /// Runs the same pipeline as a preview, with [`Trigger::Calculate`], so
    /// a result exists exactly when [`FormValidation::can_compute`] holds.
    ///
    /// ## Returns
    /// - `Ok(result)` whenever both fields are valid, including when the
    ///   customer paid too little (negative difference)
    /// - `Err(CalculateError)` naming the first unusable field, due first
    pub fn calculate(&mut self) -> Result<&ChangeResult, CalculateError> {
        let evaluation = evaluate(&self.amount_due, &self.amount_received, Trigger::Calculate);

        match evaluation.result {
            Some(result) => Ok(self.change.insert(result)),
            None => Err(rejection(&evaluation.validation)),
        }
    }

    /// Clears both fields and the result.
    pub fn reset(&mut self) {
        *self = ChangeSession::new();
    }

    fn touch(&mut self) {
        self.change = None;
        self.updated_at = Utc::now();
    }
}

/// Picks the field to blame when the form cannot be computed.
fn rejection(validation: &FormValidation) -> CalculateError {
    let (field, status) = if validation.due.is_valid() {
        (Field::AmountReceived, validation.received)
    } else {
        (Field::AmountDue, validation.due)
    };

    let error = match status {
        ValidationStatus::Empty => InputError::Empty,
        _ => InputError::InvalidFormat,
    };

    CalculateError { field, error }
}

impl Default for ChangeSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe session state.
///
/// ## Why Mutex instead of RwLock?
/// Most commands write a field, so readers would rarely run in parallel.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<ChangeSession>>,
}

impl SessionState {
    /// Creates state holding a blank session.
    pub fn new() -> Self {
        SessionState {
            session: Arc::new(Mutex::new(ChangeSession::new())),
        }
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ChangeSession) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ChangeSession) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
