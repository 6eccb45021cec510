//! Startup sequencing
//!
//! Runs once per launch: a best-effort update check followed by mounting the
//! overlay UI, whatever the check's outcome.

mod error;
mod sequencer;
mod traits;

pub use error::MountError;
pub use sequencer::StartupSequencer;
pub use traits::{Diagnostics, LogDiagnostics, UiMount};
