// src/sim/event.rs

//! Structured log events and the result of a simulation run.
//!
//! The engine never writes anywhere; it buffers [`LogEvent`]s and hands them
//! back in a [`SimulationOutcome`]. The reporter decides where they go.

use std::fmt;

use crate::sim::GanttEntry;
use crate::types::{Millis, ThreadId, ThreadingModel};

/// A notable event during a run, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogEvent {
    /// First event of every run.
    ModelStarted(ThreadingModel),
    /// Many-to-one: the thread runs its whole execution time.
    ThreadExecuting { thread: ThreadId, duration: Millis },
    /// Round-robin: the thread got the processor for one slice.
    SliceStarted { thread: ThreadId },
    /// Round-robin: the thread's remaining time reached zero.
    ThreadCompleted { thread: ThreadId },
    /// Round-robin: nothing was ready, the clock skipped ahead.
    CpuIdle { from: Millis, to: Millis },
    /// One-to-one: the thread runs on its own kernel thread.
    ThreadIndependent { thread: ThreadId },
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEvent::ModelStarted(model) => write!(f, "[Executing Model: {}]", model.title()),
            LogEvent::ThreadExecuting { thread, duration } => {
                write!(f, "Thread {thread} is executing for {duration} ms.")
            }
            LogEvent::SliceStarted { thread } => write!(f, "Thread {thread} is executing..."),
            LogEvent::ThreadCompleted { thread } => {
                write!(f, "Thread {thread} has completed execution.")
            }
            LogEvent::CpuIdle { from, to } => {
                write!(f, "No thread is ready; CPU idle from {from} ms to {to} ms.")
            }
            LogEvent::ThreadIndependent { thread } => {
                write!(f, "Thread {thread} is executing independently.")
            }
        }
    }
}

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOutcome {
    pub model: ThreadingModel,
    /// Time-ordered, non-overlapping slices.
    pub entries: Vec<GanttEntry>,
    pub events: Vec<LogEvent>,
    /// Clock value when the run ended (includes trailing idle advances).
    pub finished_at: Millis,
}

impl SimulationOutcome {
    pub(crate) fn new(model: ThreadingModel) -> Self {
        Self {
            model,
            entries: Vec::new(),
            events: vec![LogEvent::ModelStarted(model)],
            finished_at: 0,
        }
    }

    /// Human-readable rendering of [`SimulationOutcome::events`].
    pub fn log_lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Total processor time handed to `thread` over the run.
    pub fn time_given_to(&self, thread: ThreadId) -> Millis {
        self.entries
            .iter()
            .filter(|e| e.thread_id() == thread)
            .map(GanttEntry::duration)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_render_to_log_lines() {
        assert_eq!(
            LogEvent::ModelStarted(ThreadingModel::OneToOne).to_string(),
            "[Executing Model: One-to-One]"
        );
        assert_eq!(
            LogEvent::ThreadExecuting { thread: 2, duration: 200 }.to_string(),
            "Thread 2 is executing for 200 ms."
        );
        assert_eq!(
            LogEvent::SliceStarted { thread: 4 }.to_string(),
            "Thread 4 is executing..."
        );
        assert_eq!(
            LogEvent::ThreadCompleted { thread: 4 }.to_string(),
            "Thread 4 has completed execution."
        );
        assert_eq!(
            LogEvent::ThreadIndependent { thread: 1 }.to_string(),
            "Thread 1 is executing independently."
        );
    }
}
