//! Countdown commands
//!
//! The countdown lives in managed state as a `SharedCountdown`; every
//! command stamps its operation with `Utc::now()`.

use chrono::Utc;
use log::error;
use rust_i18n::t;
use tauri::State;

use crate::constants::COUNTDOWN_END_ANNOUNCEMENT;
use crate::countdown::{CountdownStatus, SharedCountdown};
use crate::error::Result;
use crate::speech::SharedSpeaker;

/// Starts a countdown of `seconds` (at most 3 hours)
///
/// # Example
/// ```js
/// await invoke('start_countdown', { seconds: 300 });
/// ```
#[tauri::command]
pub fn start_countdown(seconds: u64, state: State<'_, SharedCountdown>) -> Result<()> {
    state.lock().start(seconds, Utc::now())?;
    Ok(())
}

/// Pauses a running countdown, or resumes it when already paused
#[tauri::command]
pub fn pause_countdown(state: State<'_, SharedCountdown>) -> Result<()> {
    state.lock().toggle_pause(Utc::now())?;
    Ok(())
}

#[tauri::command]
pub fn resume_countdown(state: State<'_, SharedCountdown>) -> Result<()> {
    state.lock().resume(Utc::now())?;
    Ok(())
}

#[tauri::command]
pub fn restart_countdown(seconds: u64, state: State<'_, SharedCountdown>) -> Result<()> {
    state.lock().restart(seconds, Utc::now());
    Ok(())
}

#[tauri::command]
pub fn reset_countdown(state: State<'_, SharedCountdown>) -> Result<()> {
    state.lock().reset();
    Ok(())
}

/// Remaining seconds and phase, polled by the overlay
///
/// The first poll that sees a finished countdown also triggers the spoken
/// announcement, off the IPC thread.
#[tauri::command]
pub fn get_countdown_status(
    state: State<'_, SharedCountdown>,
    speaker: State<'_, SharedSpeaker>,
) -> CountdownStatus {
    let now = Utc::now();
    let (status, announce) = {
        let mut countdown = state.lock();
        (countdown.status(now), countdown.take_announcement(now))
    };

    if announce {
        let speaker = speaker.inner().clone();
        tauri::async_runtime::spawn_blocking(move || {
            if let Err(e) = speaker.speak(COUNTDOWN_END_ANNOUNCEMENT) {
                error!("{}", t!("countdown.speech_failed", error = e));
            }
        });
    }

    status
}
