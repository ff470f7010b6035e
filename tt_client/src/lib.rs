//! Internal modules for the trivia host.
//!
//! This library provides command parsing, configuration, and text rendering
//! used by the tt_client binary.

pub mod commands;
pub mod config;
pub mod render;
pub mod session;
