// src/sim/gantt.rs

use std::fmt;

use crate::errors::{Result, ThreadsimError};
use crate::types::{Millis, ThreadId};

/// One contiguous slice of the single simulated processor.
///
/// `end_time >= start_time`; only the many-to-one model with a zero
/// execution time produces empty slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GanttEntry {
    thread_id: ThreadId,
    start_time: Millis,
    end_time: Millis,
}

impl GanttEntry {
    pub fn new(thread_id: ThreadId, start_time: Millis, end_time: Millis) -> Result<Self> {
        if end_time < start_time {
            return Err(ThreadsimError::InvalidParameter(format!(
                "slice for thread {thread_id} ends at {end_time} ms before it starts at {start_time} ms"
            )));
        }
        Ok(Self {
            thread_id,
            start_time,
            end_time,
        })
    }

    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }

    pub fn start_time(&self) -> Millis {
        self.start_time
    }

    pub fn end_time(&self) -> Millis {
        self.end_time
    }

    pub fn duration(&self) -> Millis {
        self.end_time - self.start_time
    }

    /// `(thread, start, end)`, handy for comparing whole charts in tests.
    pub fn as_tuple(&self) -> (ThreadId, Millis, Millis) {
        (self.thread_id, self.start_time, self.end_time)
    }
}

impl fmt::Display for GanttEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Thread {}: Start Time = {} ms, End Time = {} ms",
            self.thread_id, self.start_time, self.end_time
        )
    }
}
