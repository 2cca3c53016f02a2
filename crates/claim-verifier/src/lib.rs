//! Eligibility engine for judicial claim acquisition.
//!
//! The [`workflows::eligibility`] module holds the decision core: the policy catalog, the
//! deterministic evaluator, the optional generative adapter, and the orchestrator that ties
//! them together. Configuration, telemetry, and the application error type live alongside it
//! so the API service can bootstrap from a single crate.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
