//! # Session Commands
//!
//! Commands for editing the two amount fields and calculating change.
//!
//! ## Form Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Form Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Blank   │────►│ Editing  │────►│  Ready   │────►│  Result  │       │
//! │  │  (Idle)  │     │(Blocked) │     │          │     │  shown   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        ▲                │                 │             │
//! │                 set_amount_*     calculate_change         │             │
//! │                        │                                  │             │
//! │                        └──────── any edit ────────────────┘             │
//! │                                                                         │
//! │  reset_form ───────────────────────────────────────► back to Blank     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command returns a fresh [`FormResponse`]; validation is re-derived
//! each time, the change only on `calculate_change`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use ts_rs::TS;

use change_core::{ChangeResult, Denomination, DenominationCount, ValidationStatus};

use crate::error::ApiError;
use crate::state::{ChangeSession, ConfigState, Field, SessionState};

/// Label shown in place of the field name when its text is malformed.
pub const INCORRECT_FORMAT_LABEL: &str = "Incorrect Format!";

/// Hint shown under a malformed field.
pub const FORMAT_HINT: &str = "Enter a dollar amount like 12.34 (max 2 decimals)";

/// Hint shown under Amount Received when Amount Due is still missing.
pub const DUE_REQUIRED_HINT: &str = "Enter Amount Due";

// =============================================================================
// View Models
// =============================================================================

/// One input field as the front end should render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    pub field: Field,
    pub value: String,
    pub status: ValidationStatus,
    pub label: String,
    pub hint: Option<String>,
}

impl FieldView {
    fn build(field: Field, value: &str, status: ValidationStatus) -> Self {
        let (label, hint) = match status {
            ValidationStatus::InvalidFormat => {
                (INCORRECT_FORMAT_LABEL.to_string(), Some(FORMAT_HINT.to_string()))
            }
            ValidationStatus::Empty | ValidationStatus::Valid => (field.label().to_string(), None),
        };

        FieldView {
            field,
            value: value.to_string(),
            status,
            label,
            hint,
        }
    }
}

/// State of the Calculate button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ActionTone {
    /// Nothing typed yet
    Idle,
    /// Both fields valid; calculation allowed
    Ready,
    /// Something typed but not computable yet
    Blocked,
}

/// What the calculated difference means for the cashier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ChangeOutcome {
    ChangeDue,
    ExactAmount,
    MoreMoneyOwed,
}

/// One row of the breakdown table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownLine {
    pub denomination: Denomination,
    pub label: String,
    pub value_cents: i64,
    pub count: i64,
}

impl From<&DenominationCount> for BreakdownLine {
    fn from(entry: &DenominationCount) -> Self {
        BreakdownLine {
            denomination: entry.denomination,
            label: entry.denomination.plural_label().to_string(),
            value_cents: entry.denomination.value_cents(),
            count: entry.count,
        }
    }
}

/// Calculated change, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChangeView {
    /// received − due, negative when more money is owed
    pub difference_cents: i64,
    pub outcome: ChangeOutcome,
    /// "Change Due: $7.00" or "More Money Owed: $3.00"
    pub display: String,
    /// Every denomination in table order, empty when more money is owed
    pub breakdown: Vec<BreakdownLine>,
    /// Only the bills and coins to hand over (count > 0), largest first
    pub handed_over: Vec<BreakdownLine>,
}

impl ChangeView {
    pub fn from_result(result: &ChangeResult, config: &ConfigState) -> Self {
        let difference_cents = result.difference.cents();

        let (outcome, display) = match result.deficit() {
            Some(owed) => (
                ChangeOutcome::MoreMoneyOwed,
                format!("More Money Owed: {}", config.format_currency(owed.cents())),
            ),
            None => {
                let outcome = if difference_cents == 0 {
                    ChangeOutcome::ExactAmount
                } else {
                    ChangeOutcome::ChangeDue
                };
                (
                    outcome,
                    format!("Change Due: {}", config.format_currency(difference_cents)),
                )
            }
        };

        let (breakdown, handed_over) = match &result.breakdown {
            Some(breakdown) => (
                breakdown.entries.iter().map(BreakdownLine::from).collect(),
                breakdown.non_zero().map(BreakdownLine::from).collect(),
            ),
            None => (Vec::new(), Vec::new()),
        };

        ChangeView {
            difference_cents,
            outcome,
            display,
            breakdown,
            handed_over,
        }
    }
}

/// Everything the front end needs to render the form.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    pub due: FieldView,
    pub received: FieldView,

    /// Received is valid but due is missing or malformed
    pub due_required: bool,
    pub due_required_hint: Option<String>,

    pub action: ActionTone,
    pub can_calculate: bool,

    /// Present after a successful calculate, until the next edit
    pub change: Option<ChangeView>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl FormResponse {
    pub fn build(session: &ChangeSession, config: &ConfigState) -> Self {
        let validation = session.validation();

        let due_required = validation.received.is_valid() && !validation.due.is_valid();

        let action = if validation.is_blank() {
            ActionTone::Idle
        } else if validation.can_compute() {
            ActionTone::Ready
        } else {
            ActionTone::Blocked
        };

        FormResponse {
            due: FieldView::build(Field::AmountDue, &session.amount_due, validation.due),
            received: FieldView::build(
                Field::AmountReceived,
                &session.amount_received,
                validation.received,
            ),
            due_required,
            due_required_hint: due_required.then(|| DUE_REQUIRED_HINT.to_string()),
            action,
            can_calculate: validation.can_compute(),
            change: session
                .change
                .as_ref()
                .map(|result| ChangeView::from_result(result, config)),
            updated_at: session.updated_at,
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Gets the current form.
pub fn get_form(session: &SessionState, config: &ConfigState) -> FormResponse {
    debug!("get_form command");
    session.with_session(|s| FormResponse::build(s, config))
}

/// Replaces the Amount Due text.
///
/// Called on every keystroke. Any calculated change is discarded.
pub fn set_amount_due(session: &SessionState, config: &ConfigState, value: String) -> FormResponse {
    debug!(%value, "set_amount_due command");
    session.with_session_mut(|s| {
        s.set_amount_due(value);
        FormResponse::build(s, config)
    })
}

/// Replaces the Amount Received text.
///
/// Called on every keystroke. Any calculated change is discarded.
pub fn set_amount_received(
    session: &SessionState,
    config: &ConfigState,
    value: String,
) -> FormResponse {
    debug!(%value, "set_amount_received command");
    session.with_session_mut(|s| {
        s.set_amount_received(value);
        FormResponse::build(s, config)
    })
}

/// Calculates change for the current fields.
///
/// ## Returns
/// - `Ok(form)` with `change` filled in, including the "More Money Owed"
///   case
/// - `Err(ApiError)` when a field is empty or malformed
pub fn calculate_change(
    session: &SessionState,
    config: &ConfigState,
) -> Result<FormResponse, ApiError> {
    debug!("calculate_change command");
    session.with_session_mut(|s| {
        match s.calculate() {
            Ok(result) => info!(
                difference_cents = result.difference.cents(),
                deficit = result.is_deficit(),
                "change calculated"
            ),
            Err(err) => {
                warn!(%err, "calculate_change rejected");
                return Err(ApiError::from(err));
            }
        }

        Ok(FormResponse::build(s, config))
    })
}

/// Clears both fields and any calculated change.
pub fn reset_form(session: &SessionState, config: &ConfigState) -> FormResponse {
    debug!("reset_form command");
    session.with_session_mut(|s| {
        s.reset();
        FormResponse::build(s, config)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn setup() -> (SessionState, ConfigState) {
        (SessionState::new(), ConfigState::default())
    }

    #[test]
    fn test_blank_form_is_idle() {
        let (session, config) = setup();
        let form = get_form(&session, &config);

        assert_eq!(form.action, ActionTone::Idle);
        assert!(!form.can_calculate);
        assert!(!form.due_required);
        assert_eq!(form.due.label, "Amount Due");
        assert_eq!(form.received.label, "Amount Received");
        assert!(form.change.is_none());
    }

    #[test]
    fn test_invalid_field_feedback() {
        let (session, config) = setup();
        let form = set_amount_due(&session, &config, "12.345".to_string());

        assert_eq!(form.due.status, ValidationStatus::InvalidFormat);
        assert_eq!(form.due.label, INCORRECT_FORMAT_LABEL);
        assert_eq!(form.due.hint.as_deref(), Some(FORMAT_HINT));
        assert_eq!(form.action, ActionTone::Blocked);
    }

    #[test]
    fn test_due_required_when_only_received_is_valid() {
        let (session, config) = setup();
        let form = set_amount_received(&session, &config, "20".to_string());
        assert!(form.due_required);
        assert_eq!(form.due_required_hint.as_deref(), Some(DUE_REQUIRED_HINT));

        let form = set_amount_due(&session, &config, "abc".to_string());
        assert!(form.due_required);

        let form = set_amount_due(&session, &config, "5".to_string());
        assert!(!form.due_required);
        assert_eq!(form.action, ActionTone::Ready);
    }

    #[test]
    fn test_calculate_change_due() {
        let (session, config) = setup();
        set_amount_due(&session, &config, "2.85".to_string());
        set_amount_received(&session, &config, "3.00".to_string());

        let form = calculate_change(&session, &config).unwrap();
        let change = form.change.unwrap();

        assert_eq!(change.outcome, ChangeOutcome::ChangeDue);
        assert_eq!(change.difference_cents, 15);
        assert_eq!(change.display, "Change Due: $0.15");
        assert_eq!(change.breakdown.len(), 8);

        let dimes = &change.breakdown[5];
        assert_eq!(dimes.denomination, Denomination::Dime);
        assert_eq!(dimes.label, "Dimes");
        assert_eq!(dimes.value_cents, 10);
        assert_eq!(dimes.count, 1);
        assert_eq!(change.breakdown[6].count, 1);
        assert_eq!(change.breakdown[7].count, 0);

        let handed: Vec<_> = change
            .handed_over
            .iter()
            .map(|line| (line.denomination, line.count))
            .collect();
        assert_eq!(handed, vec![(Denomination::Dime, 1), (Denomination::Nickel, 1)]);
    }

    #[test]
    fn test_handed_over_skips_zero_counts() {
        let (session, config) = setup();
        set_amount_due(&session, &config, "3.00".to_string());
        set_amount_received(&session, &config, "10.00".to_string());

        let change = calculate_change(&session, &config).unwrap().change.unwrap();
        assert_eq!(change.breakdown.len(), 8);
        assert_eq!(change.handed_over.len(), 2);
        assert_eq!(change.handed_over[0].denomination, Denomination::Five);
        assert_eq!(change.handed_over[0].count, 1);
        assert_eq!(change.handed_over[1].label, "Ones");
        assert_eq!(change.handed_over[1].count, 2);
    }

    #[test]
    fn test_calculate_more_money_owed() {
        let (session, config) = setup();
        set_amount_due(&session, &config, "10.00".to_string());
        let form = set_amount_received(&session, &config, "7.00".to_string());

        // A short payment does not block the button
        assert_eq!(form.action, ActionTone::Ready);
        assert_eq!(form.received.label, "Amount Received");

        let change = calculate_change(&session, &config).unwrap().change.unwrap();
        assert_eq!(change.outcome, ChangeOutcome::MoreMoneyOwed);
        assert_eq!(change.difference_cents, -300);
        assert_eq!(change.display, "More Money Owed: $3.00");
        assert!(change.breakdown.is_empty());
        assert!(change.handed_over.is_empty());
    }

    #[test]
    fn test_calculate_exact_amount() {
        let (session, config) = setup();
        set_amount_due(&session, &config, "5".to_string());
        set_amount_received(&session, &config, "5.00".to_string());

        let change = calculate_change(&session, &config).unwrap().change.unwrap();
        assert_eq!(change.outcome, ChangeOutcome::ExactAmount);
        assert_eq!(change.display, "Change Due: $0.00");
        assert!(change.breakdown.iter().all(|line| line.count == 0));
        assert!(change.handed_over.is_empty());
    }

    #[test]
    fn test_calculate_rejected() {
        let (session, config) = setup();
        set_amount_received(&session, &config, "3".to_string());

        let err = calculate_change(&session, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingAmount);
        assert!(get_form(&session, &config).change.is_none());
    }

    #[test]
    fn test_edit_clears_change() {
        let (session, config) = setup();
        set_amount_due(&session, &config, "3".to_string());
        set_amount_received(&session, &config, "10".to_string());
        calculate_change(&session, &config).unwrap();
        assert!(get_form(&session, &config).change.is_some());

        let form = set_amount_received(&session, &config, "10.5".to_string());
        assert!(form.change.is_none());
    }

    #[test]
    fn test_reset_form() {
        let (session, config) = setup();
        set_amount_due(&session, &config, "3".to_string());
        set_amount_received(&session, &config, "10".to_string());
        calculate_change(&session, &config).unwrap();

        let form = reset_form(&session, &config);
        assert_eq!(form.action, ActionTone::Idle);
        assert_eq!(form.due.value, "");
        assert!(form.change.is_none());
    }

    #[test]
    fn test_configured_currency_in_display() {
        let session = SessionState::new();
        let config = ConfigState {
            currency_symbol: "€".to_string(),
            ..ConfigState::default()
        };
        set_amount_due(&session, &config, "1".to_string());
        set_amount_received(&session, &config, "20".to_string());

        let change = calculate_change(&session, &config).unwrap().change.unwrap();
        assert_eq!(change.display, "Change Due: €19.00");
    }

    #[test]
    fn test_response_serialization() {
        let (session, config) = setup();
        set_amount_due(&session, &config, "3".to_string());
        set_amount_received(&session, &config, "10".to_string());
        let form = calculate_change(&session, &config).unwrap();

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["action"], "ready");
        assert_eq!(json["canCalculate"], true);
        assert_eq!(json["due"]["status"], "valid");
        assert_eq!(json["due"]["field"], "amount_due");
        assert_eq!(json["change"]["outcome"], "change_due");
        assert_eq!(json["change"]["differenceCents"], 700);
        assert_eq!(json["change"]["breakdown"][2]["denomination"], "five");
        assert_eq!(json["change"]["breakdown"][2]["count"], 1);
        assert_eq!(json["change"]["handedOver"][0]["denomination"], "five");
    }
}
