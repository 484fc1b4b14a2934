#![allow(dead_code)]

use std::path::PathBuf;

use threadsim::config::{
    ConfigFile, OutputSection, RawConfigFile, SimulationSection, ThreadSection,
};
use threadsim::sim::ThreadState;
use threadsim::types::{Millis, ThreadingModel, DEFAULT_IDLE_STEP};

/// Builder for `RawConfigFile` / `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new(model: ThreadingModel) -> Self {
        Self {
            config: RawConfigFile {
                simulation: SimulationSection {
                    model,
                    threads: None,
                    execution_time: None,
                    time_quantum: None,
                    idle_step: DEFAULT_IDLE_STEP,
                },
                thread: Vec::new(),
                output: OutputSection::default(),
            },
        }
    }

    pub fn many_to_one(threads: u32, execution_time: Millis) -> Self {
        Self::new(ThreadingModel::ManyToOne)
            .threads(threads)
            .execution_time(execution_time)
    }

    pub fn one_to_one(threads: u32) -> Self {
        Self::new(ThreadingModel::OneToOne).threads(threads)
    }

    pub fn round_robin(time_quantum: Millis) -> Self {
        Self::new(ThreadingModel::ManyToMany).time_quantum(time_quantum)
    }

    pub fn threads(mut self, count: u32) -> Self {
        self.config.simulation.threads = Some(count);
        self
    }

    pub fn execution_time(mut self, ms: Millis) -> Self {
        self.config.simulation.execution_time = Some(ms);
        self
    }

    pub fn time_quantum(mut self, ms: Millis) -> Self {
        self.config.simulation.time_quantum = Some(ms);
        self
    }

    pub fn idle_step(mut self, ms: Millis) -> Self {
        self.config.simulation.idle_step = ms;
        self
    }

    /// Append a `[[thread]]` entry; ids follow insertion order.
    pub fn thread(mut self, arrival: Millis, burst: Millis) -> Self {
        self.config.thread.push(ThreadSection { arrival, burst });
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.config.output = OutputSection {
            gantt_chart: dir.join("gantt_chart.txt"),
            execution_log: dir.join("execution_logs.txt"),
        };
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

/// Threads `1..=n` from `(arrival, burst)` pairs.
pub fn thread_states(specs: &[(Millis, Millis)]) -> Vec<ThreadState> {
    specs
        .iter()
        .zip(1u32..)
        .map(|(&(arrival, burst), id)| ThreadState::new(id, arrival, burst))
        .collect()
}
