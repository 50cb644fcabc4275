//! # Graphsmith application library
//!
//! Exposes the HTTP API and CLI modules so that integration tests can
//! drive the router without spawning a real process. The binary entry
//! point lives in `main.rs`.

pub mod api;
pub mod cli;
