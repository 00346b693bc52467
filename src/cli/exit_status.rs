use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for linter
/// and codemod tools.
///
/// - `Success` (0): Command completed, nothing left to migrate
/// - `Failure` (1): Command completed but found migratable arguments
/// - `Error` (2): Command failed due to internal error (config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, nothing left to migrate.
    Success,
    /// Command completed but found migratable arguments.
    Failure,
    /// Command failed due to internal error (config error, etc.).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
