//! Shared utilities for the Tsugai matchmaking application.
//!
//! This crate provides the cross-cutting pieces used by the server
//! binary and its tests: time handling with a clock abstraction, and
//! logging setup.

pub mod logger;
pub mod time;
