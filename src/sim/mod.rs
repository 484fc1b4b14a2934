// src/sim/mod.rs

//! Scheduling simulation core.
//!
//! - [`thread_state`] holds the per-thread timing record and its phase
//!   machine (`NotArrived -> Ready -> Running -> Ready | Done`).
//! - [`gantt`] defines the immutable execution slices of a run.
//! - [`event`] defines the structured log events and the run outcome.
//! - [`linear`] implements the many-to-one and one-to-one models.
//! - [`round_robin`] implements the many-to-many round-robin model.
//! - [`cancel`] provides the cooperative cancellation flag.
//!
//! Everything in here is synchronous and deterministic: no IO, no Tokio,
//! no clocks other than the simulated one.

pub mod cancel;
pub mod event;
pub mod gantt;
pub mod linear;
pub mod round_robin;
pub mod thread_state;

pub use cancel::CancelFlag;
pub use event::{LogEvent, SimulationOutcome};
pub use gantt::GanttEntry;
pub use linear::{run_many_to_one, run_one_to_one};
pub use round_robin::{run_many_to_many, RoundRobin};
pub use thread_state::{ThreadPhase, ThreadState};

use crate::errors::{Result, ThreadsimError};
use crate::types::{Millis, ThreadId, MAX_THREADS};

/// Advance the simulated clock, failing instead of wrapping.
pub(crate) fn advance(now: Millis, by: Millis) -> Result<Millis> {
    now.checked_add(by).ok_or_else(|| {
        ThreadsimError::InvalidParameter(format!(
            "simulated clock overflow advancing {now} ms by {by} ms"
        ))
    })
}

/// Reject thread counts the simulator cannot model.
pub(crate) fn check_thread_count(count: u32) -> Result<()> {
    if count == 0 || count > MAX_THREADS {
        return Err(ThreadsimError::InvalidParameter(format!(
            "thread count must be between 1 and {MAX_THREADS} (got {count})"
        )));
    }
    Ok(())
}

/// Thread ids handed out by the linear models: `1..=count`.
pub(crate) fn thread_ids(count: u32) -> impl Iterator<Item = ThreadId> {
    1..=count
}
