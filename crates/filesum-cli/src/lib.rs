//! filesum-cli library
//!
//! Exposes the command implementations and output formatting for testing.

pub mod commands;
pub mod format;
