// src/sim/linear.rs

//! Many-to-one and one-to-one models.
//!
//! Both serialise threads `1..=count` onto one processor timeline, back to
//! back from time 0, each for a fixed slice. They differ only in the slice
//! length and in what gets logged.

use tracing::{debug, info};

use crate::errors::Result;
use crate::sim::{
    advance, check_thread_count, thread_ids, CancelFlag, GanttEntry, LogEvent, SimulationOutcome,
};
use crate::types::{Millis, ThreadId, ThreadingModel, ONE_TO_ONE_SLICE};

/// Every user thread is mapped onto a single kernel thread, so they run
/// strictly one after another for `execution_time` each.
pub fn run_many_to_one(thread_count: u32, execution_time: Millis) -> Result<SimulationOutcome> {
    many_to_one(thread_count, execution_time, &CancelFlag::new())
}

/// Every user thread gets its own kernel thread and runs a fixed 500 ms
/// slice. The timeline has the same shape as many-to-one.
pub fn run_one_to_one(thread_count: u32) -> Result<SimulationOutcome> {
    one_to_one(thread_count, &CancelFlag::new())
}

pub(crate) fn many_to_one(
    thread_count: u32,
    execution_time: Millis,
    cancel: &CancelFlag,
) -> Result<SimulationOutcome> {
    serialise(
        ThreadingModel::ManyToOne,
        thread_count,
        execution_time,
        cancel,
        |thread| LogEvent::ThreadExecuting {
            thread,
            duration: execution_time,
        },
    )
}

pub(crate) fn one_to_one(thread_count: u32, cancel: &CancelFlag) -> Result<SimulationOutcome> {
    serialise(
        ThreadingModel::OneToOne,
        thread_count,
        ONE_TO_ONE_SLICE,
        cancel,
        |thread| LogEvent::ThreadIndependent { thread },
    )
}

fn serialise(
    model: ThreadingModel,
    thread_count: u32,
    slice: Millis,
    cancel: &CancelFlag,
    announce: impl Fn(ThreadId) -> LogEvent,
) -> Result<SimulationOutcome> {
    check_thread_count(thread_count)?;
    info!(%model, thread_count, slice_ms = slice, "starting simulation");

    let mut outcome = SimulationOutcome::new(model);
    let mut now: Millis = 0;

    for thread in thread_ids(thread_count) {
        cancel.check()?;

        let end = advance(now, slice)?;
        outcome.events.push(announce(thread));
        outcome.entries.push(GanttEntry::new(thread, now, end)?);
        debug!(thread, start_ms = now, end_ms = end, "recorded slice");
        now = end;
    }

    outcome.finished_at = now;
    info!(%model, finished_at_ms = now, "simulation finished");
    Ok(outcome)
}
