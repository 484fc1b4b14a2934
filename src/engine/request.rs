// src/engine/request.rs

use crate::errors::Result;
use crate::sim::{linear, CancelFlag, RoundRobin, SimulationOutcome, ThreadState};
use crate::types::{Millis, ThreadingModel};

/// Parameters for exactly one simulation run.
///
/// Built once by the boundary (config file or prompts), validated, then
/// passed to the engine as an immutable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunRequest {
    ManyToOne {
        thread_count: u32,
        execution_time: Millis,
    },
    ManyToMany {
        threads: Vec<ThreadState>,
        time_quantum: Millis,
        idle_step: Millis,
    },
    OneToOne {
        thread_count: u32,
    },
}

impl RunRequest {
    pub fn model(&self) -> ThreadingModel {
        match self {
            RunRequest::ManyToOne { .. } => ThreadingModel::ManyToOne,
            RunRequest::ManyToMany { .. } => ThreadingModel::ManyToMany,
            RunRequest::OneToOne { .. } => ThreadingModel::OneToOne,
        }
    }

    pub fn thread_count(&self) -> usize {
        match self {
            RunRequest::ManyToOne { thread_count, .. } | RunRequest::OneToOne { thread_count } => {
                *thread_count as usize
            }
            RunRequest::ManyToMany { threads, .. } => threads.len(),
        }
    }

    /// Run the requested model to completion on the current thread.
    pub fn simulate(&self, cancel: &CancelFlag) -> Result<SimulationOutcome> {
        match self {
            RunRequest::ManyToOne {
                thread_count,
                execution_time,
            } => linear::many_to_one(*thread_count, *execution_time, cancel),
            RunRequest::ManyToMany {
                threads,
                time_quantum,
                idle_step,
            } => RoundRobin::new(*time_quantum)
                .with_idle_step(*idle_step)
                .run(threads, cancel),
            RunRequest::OneToOne { thread_count } => linear::one_to_one(*thread_count, cancel),
        }
    }
}
