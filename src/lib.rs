// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod prompt;
pub mod report;
pub mod sim;
pub mod types;

use std::io;

use anyhow::anyhow;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{load_and_validate, ConfigFile};
use crate::engine::{RunRequest, Runtime};
use crate::errors::{Result, ThreadsimError};
use crate::fs::RealFileSystem;
use crate::prompt::Prompter;
use crate::report::Reporter;
use crate::sim::CancelFlag;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (file or interactive prompts)
/// - the simulation runtime and its cancellation flag
/// - the reporter writing the Gantt chart and execution log
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = if args.interactive {
        collect_interactively().await?
    } else {
        info!(config = %args.config.display(), "loading run config");
        load_and_validate(&args.config)?
    };
    let cfg = cfg.with_output_overrides(args.gantt_file, args.log_file);

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let (request, output) = cfg.into_parts();
    let runtime = Runtime::new(Reporter::new(RealFileSystem, output), CancelFlag::new());

    // Ctrl-C → stop the simulation at the next round boundary.
    {
        let cancel = runtime.cancel_flag();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            cancel.cancel();
        });
    }

    runtime.run(request).await?;
    Ok(())
}

/// Drive the prompts on a blocking thread; stdin reads would otherwise
/// stall the async runtime.
async fn collect_interactively() -> Result<ConfigFile> {
    let raw = tokio::task::spawn_blocking(|| {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Prompter::new(stdin.lock(), stdout.lock()).collect()
    })
    .await
    .map_err(|e| ThreadsimError::Other(anyhow!("prompt worker failed: {e}")))??;

    ConfigFile::try_from(raw)
}

/// Simple dry-run output: print the validated run parameters.
fn print_dry_run(cfg: &ConfigFile) {
    println!("threadsim dry-run");
    println!("  model = {}", cfg.request().model());

    match cfg.request() {
        RunRequest::ManyToOne {
            thread_count,
            execution_time,
        } => {
            println!("  threads = {thread_count}");
            println!("  execution_time = {execution_time} ms");
        }
        RunRequest::OneToOne { thread_count } => {
            println!("  threads = {thread_count}");
        }
        RunRequest::ManyToMany {
            threads,
            time_quantum,
            idle_step,
        } => {
            println!("  time_quantum = {time_quantum} ms");
            println!("  idle_step = {idle_step} ms");
            println!();
            println!("threads ({}):", threads.len());
            for t in threads {
                println!(
                    "  - thread {}: arrival = {} ms, burst = {} ms",
                    t.id(),
                    t.arrival_time(),
                    t.burst_time()
                );
            }
        }
    }

    println!();
    println!("output:");
    println!("  gantt_chart = {}", cfg.output().gantt_chart.display());
    println!("  execution_log = {}", cfg.output().execution_log.display());

    debug!("dry-run complete (no simulation)");
}
