//! Common test utilities for CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated HOME, config and cache directories plus CLI helpers
//! - `server`: `wiremock` helpers standing in for the catalog

#![allow(dead_code)]

pub mod env;
pub mod server;

pub use env::*;
pub use server::*;
