//! I/O helpers for menu commands.

pub mod config;
pub mod init;
pub mod menu_store;
