//! # Change Register Library
//!
//! Session state and commands that a front end drives while the cashier
//! types amounts and asks for change.
//!
//! ## Module Organization
//! ```text
//! change_register/
//! ├── lib.rs          ◄─── You are here (startup & logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Raw field values + last result
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── session.rs  ◄─── Field edits, calculate, reset
//! │   └── config.rs   ◄─── Config retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Example
//! ```rust
//! use change_register::commands::session::{calculate_change, set_amount_due, set_amount_received};
//! use change_register::Register;
//!
//! let register = Register::default();
//! set_amount_due(&register.session, &register.config, "3.00".into());
//! set_amount_received(&register.session, &register.config, "10.00".into());
//!
//! let form = calculate_change(&register.session, &register.config).unwrap();
//! assert_eq!(form.change.unwrap().display, "Change Due: $7.00");
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ConfigState, SessionState};

/// The state objects a host manages for the lifetime of the app.
#[derive(Debug, Clone, Default)]
pub struct Register {
    pub session: SessionState,
    pub config: ConfigState,
}

/// Starts the register: logging first, then state.
///
/// ## Startup Sequence
/// 1. Initialize tracing (`RUST_LOG` or the default filter)
/// 2. Load configuration from `CHANGE_*` environment variables
/// 3. Create a blank session
pub fn start() -> Register {
    init_tracing();

    let config = ConfigState::from_env();
    info!(
        store = %config.store_name,
        currency = %config.currency_code,
        "Starting Change Register"
    );

    Register {
        session: SessionState::new(),
        config,
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command
/// - `RUST_LOG=change_register=trace` - Trace this crate only
/// - Default: INFO, DEBUG for the register
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,change_register=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
