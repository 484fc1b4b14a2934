use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Identifier of a simulated user thread (1-based).
pub type ThreadId = u32;

/// Simulated time in milliseconds.
pub type Millis = u64;

/// Largest number of simulated threads a run may declare.
pub const MAX_THREADS: u32 = 6;

/// Upper bound for the many-to-one per-thread execution time.
pub const MAX_EXECUTION_TIME: Millis = 3000;

/// Upper bound for the round-robin quantum.
pub const MAX_TIME_QUANTUM: Millis = 2000;

/// Upper bound for per-thread arrival and burst times.
pub const MAX_THREAD_TIME: Millis = 6000;

/// Fixed slice length of the one-to-one model.
pub const ONE_TO_ONE_SLICE: Millis = 500;

/// Clock advance used by round-robin when no thread has arrived yet.
pub const DEFAULT_IDLE_STEP: Millis = 100;

/// The user-thread to kernel-thread mapping being simulated.
///
/// - `ManyToOne`: every user thread is serialised onto one kernel thread.
/// - `ManyToMany`: user threads share kernel threads under round-robin with
///   a fixed quantum.
/// - `OneToOne`: every user thread gets its own kernel thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThreadingModel {
    ManyToOne,
    ManyToMany,
    OneToOne,
}

impl ThreadingModel {
    /// Title used in the model banner of the execution log.
    pub fn title(&self) -> &'static str {
        match self {
            ThreadingModel::ManyToOne => "Many-to-One",
            ThreadingModel::ManyToMany => "Many-to-Many with Round-Robin",
            ThreadingModel::OneToOne => "One-to-One",
        }
    }
}

impl fmt::Display for ThreadingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for ThreadingModel {
    type Err = String;

    /// Accepts the config spelling (`many-to-one`) as well as the menu
    /// numbers used by the interactive prompt (`1`, `2`, `3`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "many-to-one" | "many_to_one" => Ok(ThreadingModel::ManyToOne),
            "2" | "many-to-many" | "many_to_many" => Ok(ThreadingModel::ManyToMany),
            "3" | "one-to-one" | "one_to_one" => Ok(ThreadingModel::OneToOne),
            other => Err(format!(
                "invalid threading model: {other} (expected \"many-to-one\", \"many-to-many\" or \"one-to-one\")"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_parses_menu_numbers_and_names() {
        assert_eq!("1".parse::<ThreadingModel>(), Ok(ThreadingModel::ManyToOne));
        assert_eq!(" Many-To-Many ".parse::<ThreadingModel>(), Ok(ThreadingModel::ManyToMany));
        assert_eq!("one_to_one".parse::<ThreadingModel>(), Ok(ThreadingModel::OneToOne));
        assert!("4".parse::<ThreadingModel>().is_err());
    }

    #[test]
    fn model_title_matches_banner() {
        assert_eq!(ThreadingModel::ManyToMany.to_string(), "Many-to-Many with Round-Robin");
    }
}
