// src/report/mod.rs

//! Output side of a run: console echo, execution log and Gantt chart file.
//!
//! The reporter receives a finished [`SimulationOutcome`] and decides where
//! it goes. A failed run never reaches the reporter, so nothing is written
//! for it.

pub mod gantt_chart;

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::OutputSection;
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::sim::SimulationOutcome;

pub use gantt_chart::{render_gantt_chart, GANTT_HEADER};

const SEPARATOR: &str = "==============================";

/// Writes outcomes to the configured sinks.
#[derive(Debug)]
pub struct Reporter<F: FileSystem> {
    fs: F,
    output: OutputSection,
    echo: bool,
}

impl<F: FileSystem> Reporter<F> {
    pub fn new(fs: F, output: OutputSection) -> Self {
        Self {
            fs,
            output,
            echo: true,
        }
    }

    /// Whether log lines are also printed on stdout (default `true`).
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn output(&self) -> &OutputSection {
        &self.output
    }

    /// Every line a run contributes to the execution log, in order.
    pub fn session_lines(&self, outcome: &SimulationOutcome) -> Vec<String> {
        let mut lines = vec![
            SEPARATOR.to_string(),
            "Welcome to the Simulator".to_string(),
            SEPARATOR.to_string(),
            String::new(),
        ];

        let mut events = outcome.log_lines().into_iter();
        // The model banner is always the first event.
        if let Some(banner) = events.next() {
            lines.push(banner);
            lines.push(SEPARATOR.to_string());
        }
        lines.extend(events);

        lines.push(format!(
            "Gantt chart saved to {}",
            self.output.gantt_chart.display()
        ));
        lines.push("Simulation completed. Thank you for using the simulator!".to_string());
        lines
    }

    /// Persist the Gantt chart (truncating) and append the session to the
    /// execution log.
    ///
    /// The chart is staged next to its target and only moved into place once
    /// the log append has succeeded, so a failed publish leaves no chart
    /// behind.
    pub fn publish(&self, outcome: &SimulationOutcome) -> Result<()> {
        let target = &self.output.gantt_chart;
        let staged = staging_path(target);

        let chart = render_gantt_chart(&outcome.entries);
        self.fs.write(&staged, chart.as_bytes())?;

        let lines = self.session_lines(outcome);
        if let Err(err) = self.append_log(&self.output.execution_log, &lines) {
            self.discard(&staged);
            return Err(err);
        }
        if let Err(err) = self.fs.rename(&staged, target) {
            self.discard(&staged);
            return Err(err.into());
        }
        debug!(
            path = %target.display(),
            entries = outcome.entries.len(),
            "wrote gantt chart"
        );

        if self.echo {
            for line in &lines {
                println!("{line}");
            }
        }

        info!(
            model = %outcome.model,
            gantt_chart = %target.display(),
            execution_log = %self.output.execution_log.display(),
            "run published"
        );
        Ok(())
    }

    fn discard(&self, staged: &Path) {
        if let Err(err) = self.fs.remove_file(staged) {
            warn!(path = %staged.display(), error = %err, "could not remove staged gantt chart");
        }
    }

    fn append_log(&self, path: &Path, lines: &[String]) -> Result<()> {
        let mut buf = String::new();
        for line in lines {
            buf.push_str(line);
            buf.push('\n');
        }
        self.fs.append(path, buf.as_bytes())?;
        Ok(())
    }
}

/// `gantt_chart.txt` -> `gantt_chart.txt.tmp`, in the same directory.
fn staging_path(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
