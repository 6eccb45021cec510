use chrono::{DateTime, Duration, Utc};

use super::error::CountdownError;
use super::types::{CountdownPhase, CountdownStatus};
use crate::constants::MAX_COUNTDOWN_SECONDS;

#[derive(Debug, Clone)]
pub struct Countdown {
    start_time: Option<DateTime<Utc>>,
    duration: u64,
    paused: bool,
    pause_start: Option<DateTime<Utc>>,
    paused_duration: Duration,
    announced: bool,
}

impl Default for Countdown {
    fn default() -> Self {
        Self {
            start_time: None,
            duration: 0,
            paused: false,
            pause_start: None,
            paused_duration: Duration::zero(),
            announced: false,
        }
    }
}

impl Countdown {
    /// Starts a fresh countdown of `seconds`, discarding any previous run.
    pub fn start(&mut self, seconds: u64, now: DateTime<Utc>) -> Result<(), CountdownError> {
        if seconds > MAX_COUNTDOWN_SECONDS {
            return Err(CountdownError::DurationExceeded);
        }
        self.restart(seconds, now);
        Ok(())
    }

    /// Starts over with `seconds`. Unlike `start`, the duration is not capped.
    pub fn restart(&mut self, seconds: u64, now: DateTime<Utc>) {
        *self = Self {
            start_time: Some(now),
            duration: seconds,
            ..Self::default()
        };
    }

    /// Pauses a running countdown, or resumes a paused one.
    pub fn toggle_pause(&mut self, now: DateTime<Utc>) -> Result<(), CountdownError> {
        if self.start_time.is_none() {
            return Err(CountdownError::NotStarted);
        }
        if self.paused {
            self.unpause(now);
        } else {
            self.paused = true;
            self.pause_start = Some(now);
        }
        Ok(())
    }

    pub fn resume(&mut self, now: DateTime<Utc>) -> Result<(), CountdownError> {
        if !self.paused {
            return Err(CountdownError::NotPaused);
        }
        self.unpause(now);
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn status(&self, now: DateTime<Utc>) -> CountdownStatus {
        let status = match (self.start_time, self.paused) {
            (None, _) => CountdownPhase::Stopped,
            (Some(_), true) => CountdownPhase::Paused,
            (Some(_), false) => CountdownPhase::Running,
        };
        CountdownStatus {
            remaining_seconds: self.remaining(now),
            status,
        }
    }

    /// Returns true exactly once per run, the first time the countdown is
    /// observed at zero. The caller owns the actual announcement.
    pub fn take_announcement(&mut self, now: DateTime<Utc>) -> bool {
        if self.start_time.is_none() || self.announced || self.remaining(now) > 0 {
            return false;
        }
        self.announced = true;
        true
    }

    fn unpause(&mut self, now: DateTime<Utc>) {
        self.paused = false;
        if let Some(pause_start) = self.pause_start.take() {
            self.paused_duration = self.paused_duration + (now - pause_start);
        }
    }

    fn remaining(&self, now: DateTime<Utc>) -> u64 {
        if self.start_time.is_none() {
            return self.duration;
        }
        self.duration.saturating_sub(self.elapsed(now))
    }

    fn elapsed(&self, now: DateTime<Utc>) -> u64 {
        let Some(start) = self.start_time else {
            return 0;
        };
        // While paused the clock is frozen at the moment the pause began.
        let until = match (self.paused, self.pause_start) {
            (false, _) => now,
            (true, Some(pause_start)) => pause_start,
            (true, None) => return 0,
        };
        (until - start - self.paused_duration).num_seconds().max(0) as u64
    }
}
