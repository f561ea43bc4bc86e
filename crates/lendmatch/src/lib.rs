//! Loan-eligibility matching for partner bank loan products.
//!
//! The [`lending`] module carries the domain: intake validation, age
//! derivation, the rule-matching evaluation engine, the record-store
//! traits, response shaping, and the HTTP router. [`config`] and
//! [`telemetry`] cover service bootstrap; [`error`] is the top-level
//! error surface used by binaries.

pub mod config;
pub mod error;
pub mod lending;
pub mod telemetry;
