// Rust guideline compliant 2026-10-16

//! Command implementations for the wrapkit CLI.

pub mod resolve;
pub mod show_config;
