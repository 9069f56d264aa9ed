//! # State Module
//!
//! Manages register state.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
//! │  │        SessionState          │  │        ConfigState           │    │
//! │  │                              │  │                              │    │
//! │  │  Arc<Mutex<ChangeSession>>   │  │  store_name                  │    │
//! │  │  • amount_due (raw text)     │  │  currency_code               │    │
//! │  │  • amount_received (raw)     │  │  currency_symbol             │    │
//! │  │  • last change result        │  │                              │    │
//! │  └──────────────────────────────┘  └──────────────────────────────┘    │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • SessionState: Protected by Arc<Mutex<T>> for exclusive access       │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::ConfigState;
pub use session::{CalculateError, ChangeSession, Field, SessionState};
