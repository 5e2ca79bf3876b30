//! Common test utilities for branchtree scenario and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated temp directory holding a repository snapshot
//! - Fixtures: snapshot documents shared across tests
//! - Browser helpers for driving the library directly

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
