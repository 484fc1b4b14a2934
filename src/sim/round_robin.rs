// src/sim/round_robin.rs

//! Many-to-many model: round-robin over a fixed quantum.
//!
//! One *round* is a pass over all threads in ascending id order. A thread
//! that has arrived and still has work runs for `min(quantum, remaining)`
//! and the clock moves forward by that amount, so threads later in the same
//! round see the advanced clock. A round in which nothing ran moves the
//! clock forward by the idle step instead. The run ends once every thread
//! has no remaining time.

use std::collections::BTreeMap;

use tracing::{debug, info, trace};

use crate::errors::{Result, ThreadsimError};
use crate::sim::{
    advance, check_thread_count, CancelFlag, GanttEntry, LogEvent, SimulationOutcome, ThreadPhase,
    ThreadState,
};
use crate::types::{Millis, ThreadId, ThreadingModel, DEFAULT_IDLE_STEP};

/// Round-robin with the default 100 ms idle step.
pub fn run_many_to_many(threads: &[ThreadState], time_quantum: Millis) -> Result<SimulationOutcome> {
    RoundRobin::new(time_quantum).run(threads, &CancelFlag::new())
}

/// Parameters of a round-robin run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: Millis,
    idle_step: Millis,
}

impl RoundRobin {
    pub fn new(quantum: Millis) -> Self {
        Self {
            quantum,
            idle_step: DEFAULT_IDLE_STEP,
        }
    }

    /// Clock advance applied when a whole round finds nothing to run.
    pub fn with_idle_step(mut self, idle_step: Millis) -> Self {
        self.idle_step = idle_step;
        self
    }

    pub fn quantum(&self) -> Millis {
        self.quantum
    }

    pub fn idle_step(&self) -> Millis {
        self.idle_step
    }

    /// Simulate until every thread is done.
    ///
    /// The input threads are copied into a table owned by the run; the
    /// caller's values are never touched.
    pub fn run(&self, threads: &[ThreadState], cancel: &CancelFlag) -> Result<SimulationOutcome> {
        if self.quantum == 0 {
            return Err(ThreadsimError::InvalidParameter(
                "time quantum must be greater than 0 ms".to_string(),
            ));
        }
        let count = u32::try_from(threads.len()).map_err(|_| {
            ThreadsimError::InvalidParameter(format!("too many threads ({})", threads.len()))
        })?;
        check_thread_count(count)?;

        let mut table = build_table(threads)?;
        let max_rounds = self.round_bound(&table);

        info!(
            model = %ThreadingModel::ManyToMany,
            threads = table.len(),
            quantum_ms = self.quantum,
            idle_step_ms = self.idle_step,
            max_rounds,
            "starting simulation"
        );

        let mut outcome = SimulationOutcome::new(ThreadingModel::ManyToMany);
        let mut now: Millis = 0;
        let mut rounds: u64 = 0;

        while table.values().any(|t| !t.is_done()) {
            cancel.check()?;

            rounds += 1;
            if rounds > max_rounds {
                return Err(ThreadsimError::NonTerminatingSchedule(format!(
                    "exceeded {max_rounds} rounds at {now} ms with work remaining"
                )));
            }

            let ran = self.run_round(&mut table, &mut now, &mut outcome)?;

            if ran == 0 {
                if self.idle_step == 0 {
                    return Err(ThreadsimError::NonTerminatingSchedule(format!(
                        "no thread is ready at {now} ms and the idle step is 0 ms"
                    )));
                }
                let next = advance(now, self.idle_step)?;
                trace!(from_ms = now, to_ms = next, "no thread ready; idling");
                outcome.events.push(LogEvent::CpuIdle { from: now, to: next });
                now = next;
            }
        }

        outcome.finished_at = now;
        info!(
            model = %ThreadingModel::ManyToMany,
            rounds,
            slices = outcome.entries.len(),
            finished_at_ms = now,
            "simulation finished"
        );
        Ok(outcome)
    }

    /// One pass over a snapshot of the ids. Returns the number of slices run.
    fn run_round(
        &self,
        table: &mut BTreeMap<ThreadId, ThreadState>,
        now: &mut Millis,
        outcome: &mut SimulationOutcome,
    ) -> Result<usize> {
        let ids: Vec<ThreadId> = table.keys().copied().collect();
        let mut ran = 0;

        for id in ids {
            let Some(thread) = table.get_mut(&id) else {
                continue;
            };
            if thread.phase_at(*now) != ThreadPhase::Ready {
                continue;
            }

            outcome.events.push(LogEvent::SliceStarted { thread: id });
            let slice = thread.run_slice(self.quantum);
            let end = advance(*now, slice)?;
            outcome.entries.push(GanttEntry::new(id, *now, end)?);
            debug!(
                thread = id,
                start_ms = *now,
                end_ms = end,
                remaining_ms = thread.remaining_time(),
                "ran slice"
            );
            *now = end;

            if thread.is_done() {
                debug!(thread = id, at_ms = end, "thread completed");
                outcome.events.push(LogEvent::ThreadCompleted { thread: id });
            }
            ran += 1;
        }

        Ok(ran)
    }

    /// Upper bound on the rounds a correct run can take.
    ///
    /// Every productive round runs at least one slice, and a thread needs
    /// `ceil(burst / quantum)` slices. Idle rounds only happen while the
    /// clock is below the latest arrival, and each one advances the clock by
    /// the idle step.
    fn round_bound(&self, table: &BTreeMap<ThreadId, ThreadState>) -> u64 {
        let slices = table
            .values()
            .map(|t| t.burst_time().div_ceil(self.quantum))
            .fold(0u64, u64::saturating_add);

        let latest_arrival = table
            .values()
            .filter(|t| !t.is_done())
            .map(ThreadState::arrival_time)
            .max()
            .unwrap_or(0);
        let idle_rounds = if self.idle_step == 0 {
            0
        } else {
            latest_arrival.div_ceil(self.idle_step)
        };

        slices.saturating_add(idle_rounds).saturating_add(1)
    }
}

fn build_table(threads: &[ThreadState]) -> Result<BTreeMap<ThreadId, ThreadState>> {
    let mut table = BTreeMap::new();
    for thread in threads {
        if thread.id() == 0 {
            return Err(ThreadsimError::InvalidParameter(
                "thread ids start at 1".to_string(),
            ));
        }
        if thread.remaining_time() != thread.burst_time() {
            return Err(ThreadsimError::InvalidParameter(format!(
                "thread {} has already run",
                thread.id()
            )));
        }
        if table.insert(thread.id(), thread.clone()).is_some() {
            return Err(ThreadsimError::InvalidParameter(format!(
                "duplicate thread id {}",
                thread.id()
            )));
        }
    }
    Ok(table)
}
