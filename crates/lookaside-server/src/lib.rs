//! # Lookaside Server Library
//!
//! Wiring, telemetry and startup helpers for the Lookaside server binary.

pub mod startup;
pub mod telemetry;
pub mod wiring;
