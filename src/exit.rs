//! Exit code logic for the mvnget process.
//!
//! Single responsibility: map a batch summary to the process exit outcome.

use std::process::ExitCode;

use mvnget_core::BatchSummary;

/// How the process reports a finished batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProcessExit {
    /// Nothing failed.
    Success,
    /// Some artifacts succeeded, some failed.
    Partial,
    /// Every attempted artifact failed.
    Failure,
}

impl ProcessExit {
    pub(crate) fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Partial => 1,
            Self::Failure => 2,
        }
    }
}

impl From<ProcessExit> for ExitCode {
    fn from(exit: ProcessExit) -> Self {
        ExitCode::from(exit.code())
    }
}

/// Maps a finished batch to the process exit outcome.
///
/// A batch where nothing parsed exits cleanly. Otherwise unparseable
/// coordinates count as failures next to fetch and write failures.
pub(crate) fn exit_outcome(summary: &BatchSummary) -> ProcessExit {
    let attempted = summary.parsed();
    if attempted == 0 || summary.failed() == 0 {
        return ProcessExit::Success;
    }
    if summary.succeeded() > 0 {
        ProcessExit::Partial
    } else {
        ProcessExit::Failure
    }
}
