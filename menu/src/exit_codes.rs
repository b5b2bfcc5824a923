//! Stable exit codes for menu CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid config/store/menu structure or other errors.
pub const INVALID: i32 = 1;
/// The requested menu name is not in the store.
pub const UNKNOWN_MENU: i32 = 2;
