use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): scan completed and any requested output was written
///   (including the nothing-found, nothing-written case)
/// - `Error` (2): the command failed (invalid target, scan failure,
///   destination write failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
