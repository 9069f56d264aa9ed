//! # Config Commands
//!
//! Commands for retrieving register configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current register configuration.
///
/// ## When Used
/// - App startup (store name in the header)
/// - Formatting amounts typed by the cashier
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
