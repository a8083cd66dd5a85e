//! Document pack resolution for divorce, dissolution and separation case letters.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
