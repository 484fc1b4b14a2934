// src/sim/thread_state.rs

//! Per-thread timing record used by the round-robin model.

use crate::types::{Millis, ThreadId};

/// Observable phase of a simulated thread at a given point on the clock.
///
/// `Running` is not a stored phase: a thread is running exactly for the span
/// of a [`GanttEntry`](crate::sim::GanttEntry) and is back to `Ready` or
/// `Done` as soon as the slice has been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadPhase {
    /// Arrival time is still in the future.
    NotArrived,
    /// Arrived and has remaining work.
    Ready,
    /// No remaining work. Terminal.
    Done,
}

/// Timing state of one simulated thread.
///
/// Invariant: `0 <= remaining_time <= burst_time`, and `remaining_time` only
/// ever decreases, through [`ThreadState::run_slice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadState {
    id: ThreadId,
    arrival_time: Millis,
    burst_time: Millis,
    remaining_time: Millis,
}

impl ThreadState {
    /// A fresh thread that has not run yet (`remaining_time == burst_time`).
    pub fn new(id: ThreadId, arrival_time: Millis, burst_time: Millis) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
        }
    }

    pub fn id(&self) -> ThreadId {
        self.id
    }

    pub fn arrival_time(&self) -> Millis {
        self.arrival_time
    }

    pub fn burst_time(&self) -> Millis {
        self.burst_time
    }

    pub fn remaining_time(&self) -> Millis {
        self.remaining_time
    }

    pub fn is_done(&self) -> bool {
        self.remaining_time == 0
    }

    /// Phase of this thread when the clock reads `now`.
    pub fn phase_at(&self, now: Millis) -> ThreadPhase {
        if self.is_done() {
            ThreadPhase::Done
        } else if self.arrival_time <= now {
            ThreadPhase::Ready
        } else {
            ThreadPhase::NotArrived
        }
    }

    /// Run for at most `quantum` and return how long the slice actually was.
    ///
    /// A finished thread runs for 0.
    pub(crate) fn run_slice(&mut self, quantum: Millis) -> Millis {
        let slice = quantum.min(self.remaining_time);
        self.remaining_time -= slice;
        slice
    }
}
