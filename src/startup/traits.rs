use super::error::MountError;

/// Attaches the root overlay UI to a mount point in the hosting environment.
pub trait UiMount: Send + Sync {
    fn mount(&self, anchor: &str) -> Result<(), MountError>;
}

/// Write-only sink for startup diagnostics, one line per report.
pub trait Diagnostics: Send + Sync {
    fn report(&self, line: &str);
}

/// Sends diagnostics to the process logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, line: &str) {
        log::warn!("{}", line);
    }
}
