use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{OVERLAY_TIME_FORMAT, OVERLAY_TIME_ZONE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeResponse {
    pub time: String,
}

/// Current wall-clock time in the overlay's time zone.
pub fn current_time() -> TimeResponse {
    time_at(Utc::now())
}

pub fn time_at(instant: DateTime<Utc>) -> TimeResponse {
    TimeResponse {
        time: instant
            .with_timezone(&OVERLAY_TIME_ZONE)
            .format(OVERLAY_TIME_FORMAT)
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn winter_time_is_two_hours_ahead() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 5).unwrap();
        assert_eq!(time_at(instant).time, "12:00:05");
    }

    #[test]
    fn summer_time_is_three_hours_ahead() {
        let instant = Utc.with_ymd_and_hms(2024, 7, 15, 22, 30, 0).unwrap();
        assert_eq!(time_at(instant).time, "01:30:00");
    }

    #[test]
    fn current_time_is_zero_padded() {
        let time = current_time().time;
        assert_eq!(time.len(), 8);
        assert_eq!(time.matches(':').count(), 2);
    }
}
