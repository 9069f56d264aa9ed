//! # Commands Module
//!
//! All commands the front end can invoke.
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Register Commands                                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────┐  ┌──────────────────────────────┐ │
//! │  │  Session Commands               │  │  Config Commands             │ │
//! │  │  ────────────────               │  │  ───────────────             │ │
//! │  │  • get_form                     │  │  • get_config                │ │
//! │  │  • set_amount_due               │  │                              │ │
//! │  │  • set_amount_received          │  │                              │ │
//! │  │  • calculate_change             │  │                              │ │
//! │  │  • reset_form                   │  │                              │ │
//! │  └─────────────────────────────────┘  └──────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Naming Convention
//! Commands use snake_case so a JavaScript bridge can expose them verbatim:
//! ```typescript
//! await invoke('set_amount_due', { value: '12.34' });
//! ```

pub mod config;
pub mod session;
