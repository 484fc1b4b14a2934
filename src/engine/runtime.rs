// src/engine/runtime.rs

use std::fmt;

use anyhow::anyhow;
use tracing::{debug, info, warn};

use crate::engine::RunRequest;
use crate::errors::{Result, ThreadsimError};
use crate::fs::FileSystem;
use crate::report::Reporter;
use crate::sim::{CancelFlag, SimulationOutcome};

/// Run `request` on Tokio's blocking pool so the caller's task stays
/// responsive. `cancel` is the only way to stop it early.
pub async fn run_on_worker(request: RunRequest, cancel: CancelFlag) -> Result<SimulationOutcome> {
    let model = request.model();
    debug!(%model, "dispatching simulation to blocking worker");

    tokio::task::spawn_blocking(move || request.simulate(&cancel))
        .await
        .map_err(|e| ThreadsimError::Other(anyhow!("simulation worker failed: {e}")))?
}

/// IO shell around the simulation core.
///
/// Owns the reporter and the cancellation flag; the simulation itself stays
/// a pure function of the request.
pub struct Runtime<F: FileSystem> {
    reporter: Reporter<F>,
    cancel: CancelFlag,
}

impl<F: FileSystem> fmt::Debug for Runtime<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("output", self.reporter.output())
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}

impl<F: FileSystem> Runtime<F> {
    pub fn new(reporter: Reporter<F>, cancel: CancelFlag) -> Self {
        Self { reporter, cancel }
    }

    /// Handle that can cancel this runtime's simulation from elsewhere.
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Simulate, then publish. Nothing is written if the simulation fails.
    pub async fn run(self, request: RunRequest) -> Result<SimulationOutcome> {
        let model = request.model();
        info!(%model, threads = request.thread_count(), "threadsim runtime started");

        let outcome = match run_on_worker(request, self.cancel.clone()).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(%model, error = %err, "simulation failed; nothing was written");
                return Err(err);
            }
        };

        self.reporter.publish(&outcome)?;
        info!(%model, "runtime exiting");
        Ok(outcome)
    }
}
