use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownPhase {
    Stopped,
    Paused,
    Running,
}

/// Snapshot returned to the frontend on every poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownStatus {
    pub remaining_seconds: u64,
    pub status: CountdownPhase,
}
