// src/prompt.rs

//! Interactive collection of a run configuration.
//!
//! Asks the same questions, in the same order, as the classic dialog flow
//! (thread count, model, then model-specific values) and re-asks whenever a
//! value is unparsable or out of range. The result is a [`RawConfigFile`],
//! validated afterwards like any TOML config.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::config::validate::{
    validate_execution_time, validate_thread_count, validate_thread_time, validate_time_quantum,
};
use crate::config::{OutputSection, RawConfigFile, SimulationSection, ThreadSection};
use crate::errors::{Result, ThreadsimError};
use crate::types::{Millis, ThreadingModel, DEFAULT_IDLE_STEP};

/// Question/answer loop over any line-oriented input and output.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the whole questionnaire.
    pub fn collect(&mut self) -> Result<RawConfigFile> {
        let threads = self.ask("Enter the number of threads (1 to 6):", |s| {
            validate_thread_count(parse_u32(s)?)
        })?;

        let model = self.ask(
            "Choose the threading model:\n1. Many-to-One\n2. Many-to-Many with Round-Robin\n3. One-to-One",
            |s| {
                s.parse::<ThreadingModel>()
                    .map_err(ThreadsimError::InvalidParameter)
            },
        )?;
        debug!(threads, %model, "prompt: model selected");

        let mut simulation = SimulationSection {
            model,
            threads: Some(threads),
            execution_time: None,
            time_quantum: None,
            idle_step: DEFAULT_IDLE_STEP,
        };
        let mut thread = Vec::new();

        match model {
            ThreadingModel::ManyToOne => {
                simulation.execution_time = Some(self.ask(
                    "Enter execution time for each thread (in ms, 0 to 3000):",
                    |s| validate_execution_time(parse_millis(s)?),
                )?);
            }
            ThreadingModel::ManyToMany => {
                simulation.time_quantum = Some(self.ask(
                    "Enter time quantum for Round-Robin scheduling (in ms, 1 to 2000):",
                    |s| validate_time_quantum(parse_millis(s)?),
                )?);
                for id in 1..=threads {
                    let arrival = self.ask(
                        &format!("Enter arrival time for Thread {id} (in ms, 0 to 6000):"),
                        |s| validate_thread_time("arrival time", parse_millis(s)?),
                    )?;
                    let burst = self.ask(
                        &format!("Enter burst time for Thread {id} (in ms, 0 to 6000):"),
                        |s| validate_thread_time("burst time", parse_millis(s)?),
                    )?;
                    thread.push(ThreadSection { arrival, burst });
                }
            }
            ThreadingModel::OneToOne => {}
        }

        Ok(RawConfigFile {
            simulation,
            thread,
            output: OutputSection::default(),
        })
    }

    /// Ask until `parse` accepts the answer.
    fn ask<T>(&mut self, question: &str, parse: impl Fn(&str) -> Result<T>) -> Result<T> {
        loop {
            writeln!(self.output, "{question}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ThreadsimError::ConfigError(format!(
                    "input ended while waiting for an answer to: {}",
                    question.lines().next().unwrap_or(question)
                )));
            }

            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    warn!(answer = %line.trim(), error = %err, "prompt: rejected answer");
                    writeln!(self.output, "{err}; please try again.")?;
                }
            }
        }
    }
}

fn parse_u32(s: &str) -> Result<u32> {
    s.parse::<u32>()
        .map_err(|_| ThreadsimError::InvalidParameter(format!("'{s}' is not a whole number")))
}

fn parse_millis(s: &str) -> Result<Millis> {
    s.parse::<Millis>().map_err(|_| {
        ThreadsimError::InvalidParameter(format!("'{s}' is not a whole number of milliseconds"))
    })
}
