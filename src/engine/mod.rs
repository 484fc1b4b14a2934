// src/engine/mod.rs

//! Orchestration around the simulation core.
//!
//! - [`RunRequest`] is the single, validated description of one run.
//! - [`request`] dispatches a request to the matching model synchronously.
//! - [`runtime`] is the async shell: it runs the simulation on a blocking
//!   worker, wires the cancellation flag and hands the outcome to the
//!   reporter.

pub mod request;
pub mod runtime;

pub use request::RunRequest;
pub use runtime::{run_on_worker, Runtime};
