//! Update system module
//!
//! Provides the update-check and relaunch collaborators used at startup and
//! by the updater commands. The Tauri-backed implementation lives in
//! `manager` and is only built with the `desktop` feature.

mod error;
#[cfg(feature = "desktop")]
mod manager;
mod traits;
mod types;

pub use error::*;
#[cfg(feature = "desktop")]
pub use manager::UpdateManager;
pub use traits::*;
pub use types::*;
