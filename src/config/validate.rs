// src/config/validate.rs

//! Semantic validation of a [`RawConfigFile`].
//!
//! Range checks are exposed individually so the interactive prompts can
//! re-ask for a single value instead of rejecting the whole session.

use tracing::warn;

use crate::config::model::{ConfigFile, RawConfigFile, SimulationSection, ThreadSection};
use crate::engine::RunRequest;
use crate::errors::{Result, ThreadsimError};
use crate::sim::ThreadState;
use crate::types::{
    Millis, ThreadId, ThreadingModel, MAX_EXECUTION_TIME, MAX_THREADS, MAX_THREAD_TIME,
    MAX_TIME_QUANTUM,
};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = ThreadsimError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        let request = build_request(&raw.simulation, &raw.thread)?;
        Ok(ConfigFile::new_unchecked(request, raw.output))
    }
}

pub fn validate_thread_count(count: u32) -> Result<u32> {
    if !(1..=MAX_THREADS).contains(&count) {
        return Err(ThreadsimError::InvalidParameter(format!(
            "number of threads must be between 1 and {MAX_THREADS} (got {count})"
        )));
    }
    Ok(count)
}

pub fn validate_execution_time(ms: Millis) -> Result<Millis> {
    check_max("execution time", ms, MAX_EXECUTION_TIME)
}

pub fn validate_time_quantum(ms: Millis) -> Result<Millis> {
    if ms == 0 {
        return Err(ThreadsimError::InvalidParameter(
            "time quantum must be greater than 0 ms".to_string(),
        ));
    }
    check_max("time quantum", ms, MAX_TIME_QUANTUM)
}

pub fn validate_thread_time(what: &str, ms: Millis) -> Result<Millis> {
    check_max(what, ms, MAX_THREAD_TIME)
}

pub fn validate_idle_step(ms: Millis) -> Result<Millis> {
    if ms == 0 {
        return Err(ThreadsimError::InvalidParameter(
            "idle step must be greater than 0 ms".to_string(),
        ));
    }
    Ok(ms)
}

fn check_max(what: &str, ms: Millis, max: Millis) -> Result<Millis> {
    if ms > max {
        return Err(ThreadsimError::InvalidParameter(format!(
            "{what} must be between 0 and {max} ms (got {ms})"
        )));
    }
    Ok(ms)
}

fn required<T: Copy>(value: Option<T>, field: &str, model: ThreadingModel) -> Result<T> {
    value.ok_or_else(|| {
        ThreadsimError::ConfigError(format!(
            "[simulation].{field} is required for the {model} model"
        ))
    })
}

fn ignored<T>(value: &Option<T>, field: &str, model: ThreadingModel) {
    if value.is_some() {
        warn!(%model, field, "setting is not used by this model; ignoring");
    }
}

fn build_request(sim: &SimulationSection, threads: &[ThreadSection]) -> Result<RunRequest> {
    let model = sim.model;

    if model != ThreadingModel::ManyToMany && !threads.is_empty() {
        warn!(%model, entries = threads.len(), "[[thread]] entries are only used by many-to-many; ignoring");
    }

    match model {
        ThreadingModel::ManyToOne => {
            ignored(&sim.time_quantum, "time_quantum", model);
            let thread_count = validate_thread_count(required(sim.threads, "threads", model)?)?;
            let execution_time =
                validate_execution_time(required(sim.execution_time, "execution_time", model)?)?;
            Ok(RunRequest::ManyToOne {
                thread_count,
                execution_time,
            })
        }
        ThreadingModel::OneToOne => {
            ignored(&sim.execution_time, "execution_time", model);
            ignored(&sim.time_quantum, "time_quantum", model);
            let thread_count = validate_thread_count(required(sim.threads, "threads", model)?)?;
            Ok(RunRequest::OneToOne { thread_count })
        }
        ThreadingModel::ManyToMany => {
            ignored(&sim.execution_time, "execution_time", model);
            let time_quantum =
                validate_time_quantum(required(sim.time_quantum, "time_quantum", model)?)?;
            let idle_step = validate_idle_step(sim.idle_step)?;

            if threads.is_empty() {
                return Err(ThreadsimError::ConfigError(
                    "many-to-many needs at least one [[thread]] entry".to_string(),
                ));
            }
            let declared = u32::try_from(threads.len()).unwrap_or(u32::MAX);
            validate_thread_count(declared)?;
            if let Some(count) = sim.threads {
                if count != declared {
                    return Err(ThreadsimError::ConfigError(format!(
                        "[simulation].threads is {count} but {declared} [[thread]] entries are given"
                    )));
                }
            }

            let mut states = Vec::with_capacity(threads.len());
            for (entry, id) in threads.iter().zip(1..) {
                let id: ThreadId = id;
                let arrival =
                    validate_thread_time(&format!("arrival time of thread {id}"), entry.arrival)?;
                let burst =
                    validate_thread_time(&format!("burst time of thread {id}"), entry.burst)?;
                states.push(ThreadState::new(id, arrival, burst));
            }

            Ok(RunRequest::ManyToMany {
                threads: states,
                time_quantum,
                idle_step,
            })
        }
    }
}
