// src/sim/cancel.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::errors::{Result, ThreadsimError};

/// Best-effort cancellation flag shared between the driver and a running
/// simulation.
///
/// The engine polls it between rounds (round-robin) or between threads
/// (linear models). Setting it never interrupts a slice that is already
/// being recorded.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    flag: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Return `Err(Cancelled)` once the flag has been raised.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(ThreadsimError::Cancelled)
        } else {
            Ok(())
        }
    }
}
