use rust_i18n::t;
use serde::Serialize;

use crate::constants::MAX_COUNTDOWN_SECONDS;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "kind")]
pub enum CountdownError {
    #[error("{}", t!("countdown.duration_exceeded", max = MAX_COUNTDOWN_SECONDS))]
    DurationExceeded,

    #[error("{}", t!("countdown.not_started"))]
    NotStarted,

    #[error("{}", t!("countdown.not_paused"))]
    NotPaused,
}
