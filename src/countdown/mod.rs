//! Overlay countdown timer
//!
//! All operations take the current instant as an argument; the IPC layer
//! passes `Utc::now()`.

mod error;
mod state;
mod types;

pub use error::CountdownError;
pub use state::Countdown;
pub use types::{CountdownPhase, CountdownStatus};

pub type SharedCountdown = std::sync::Arc<parking_lot::Mutex<Countdown>>;
