// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::engine::RunRequest;
use crate::types::{Millis, ThreadingModel, DEFAULT_IDLE_STEP};

/// Configuration exactly as read from TOML (or gathered by the prompts),
/// before semantic validation.
///
/// ```toml
/// [simulation]
/// model = "many-to-many"
/// time_quantum = 100
///
/// [[thread]]
/// arrival = 0
/// burst = 250
///
/// [[thread]]
/// arrival = 0
/// burst = 100
///
/// [output]
/// gantt_chart = "out/gantt_chart.txt"
/// ```
///
/// Convert it with `ConfigFile::try_from` to get something the engine can
/// run.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    pub simulation: SimulationSection,

    /// `[[thread]]` entries, in id order (the first one is thread 1).
    /// Only used by the many-to-many model.
    #[serde(default)]
    pub thread: Vec<ThreadSection>,

    #[serde(default)]
    pub output: OutputSection,
}

/// `[simulation]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationSection {
    /// `"many-to-one"`, `"many-to-many"` or `"one-to-one"`.
    pub model: ThreadingModel,

    /// Number of simulated threads (1 to 6).
    ///
    /// Required for many-to-one and one-to-one. For many-to-many it defaults
    /// to the number of `[[thread]]` entries and must match it if given.
    #[serde(default)]
    pub threads: Option<u32>,

    /// Many-to-one: how long every thread runs, 0 to 3000 ms.
    #[serde(default)]
    pub execution_time: Option<Millis>,

    /// Many-to-many: round-robin quantum, 1 to 2000 ms.
    #[serde(default)]
    pub time_quantum: Option<Millis>,

    /// Many-to-many: clock advance when no thread has arrived yet.
    #[serde(default = "default_idle_step")]
    pub idle_step: Millis,
}

fn default_idle_step() -> Millis {
    DEFAULT_IDLE_STEP
}

/// One `[[thread]]` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThreadSection {
    /// 0 to 6000 ms.
    pub arrival: Millis,
    /// 0 to 6000 ms.
    pub burst: Millis,
}

/// `[output]` section: where the reporter writes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Rewritten on every run.
    #[serde(default = "default_gantt_chart")]
    pub gantt_chart: PathBuf,

    /// Appended to on every run.
    #[serde(default = "default_execution_log")]
    pub execution_log: PathBuf,
}

fn default_gantt_chart() -> PathBuf {
    PathBuf::from("gantt_chart.txt")
}

fn default_execution_log() -> PathBuf {
    PathBuf::from("execution_logs.txt")
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            gantt_chart: default_gantt_chart(),
            execution_log: default_execution_log(),
        }
    }
}

/// A validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>`, so holding one means
/// the run request is within the simulator's limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    request: RunRequest,
    output: OutputSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(request: RunRequest, output: OutputSection) -> Self {
        Self { request, output }
    }

    pub fn request(&self) -> &RunRequest {
        &self.request
    }

    pub fn output(&self) -> &OutputSection {
        &self.output
    }

    pub fn into_parts(self) -> (RunRequest, OutputSection) {
        (self.request, self.output)
    }

    /// Replace output paths with command-line overrides, where given.
    pub fn with_output_overrides(
        mut self,
        gantt_chart: Option<PathBuf>,
        execution_log: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = gantt_chart {
            self.output.gantt_chart = path;
        }
        if let Some(path) = execution_log {
            self.output.execution_log = path;
        }
        self
    }
}
