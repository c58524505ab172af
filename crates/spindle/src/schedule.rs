//! Wall-clock arithmetic for the daily verse rotation.
//!
//! Targets a fixed local hour on the minute boundary. Daylight-saving shifts
//! are deliberately not corrected for: an ambiguous local hour maps to its
//! earliest instant and a nonexistent one slides forward, so a firing may
//! skip or double around a transition.

use chrono::offset::LocalResult;
use chrono::{DateTime, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A validated hour of day, 0–23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Hour(u32);

#[derive(Debug, Error)]
pub enum HourError {
    #[error("hour must be 0-23, got {0}")]
    OutOfRange(u32),
    #[error("not an hour: '{0}'")]
    NotANumber(String),
}

impl Hour {
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// The original wheel rotated its verses at seven in the morning.
impl Default for Hour {
    fn default() -> Self {
        Self(7)
    }
}

impl TryFrom<u32> for Hour {
    type Error = HourError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value <= 23 {
            Ok(Self(value))
        } else {
            Err(HourError::OutOfRange(value))
        }
    }
}

impl From<Hour> for u32 {
    fn from(hour: Hour) -> Self {
        hour.0
    }
}

impl FromStr for Hour {
    type Err = HourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .parse()
            .map_err(|_| HourError::NotANumber(s.to_string()))?;
        Self::try_from(value)
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// The next instant at which the local clock reads `hour` on the minute
/// boundary. A target that has strictly passed rolls to tomorrow; an exact
/// hit schedules right now.
pub fn next_occurrence<Tz: TimeZone>(now: DateTime<Tz>, hour: Hour) -> DateTime<Tz> {
    let tz = now.timezone();

    // Hour is range-checked, so the naive construction cannot fail.
    let Some(mut target) = now.date_naive().and_hms_opt(hour.get(), 0, 0) else {
        return now + TimeDelta::days(1);
    };
    if target < now.naive_local() {
        target += TimeDelta::days(1);
    }

    match tz.from_local_datetime(&target) {
        LocalResult::Single(t) => t,
        LocalResult::Ambiguous(earliest, _) => earliest,
        // Spring-forward gap: the hour does not exist today, slide past it.
        LocalResult::None => {
            log::warn!("Rotation hour {hour} falls in a DST gap, sliding forward");
            tz.from_local_datetime(&(target + TimeDelta::hours(1)))
                .earliest()
                .unwrap_or_else(|| now + TimeDelta::days(1))
        }
    }
}

/// Delay to arm a one-shot timer for the next occurrence of `hour`.
pub fn delay_until<Tz: TimeZone>(now: DateTime<Tz>, hour: Hour) -> std::time::Duration {
    (next_occurrence(now.clone(), hour) - now)
        .to_std()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::time::Duration;

    fn hour(h: u32) -> Hour {
        Hour::try_from(h).unwrap()
    }

    #[test]
    fn rejects_out_of_range_hours() {
        assert!(matches!(Hour::try_from(24), Err(HourError::OutOfRange(24))));
        assert!(matches!("25".parse::<Hour>(), Err(HourError::OutOfRange(25))));
        assert_eq!("7".parse::<Hour>().unwrap(), hour(7));
    }

    #[test]
    fn non_numeric_input_reports_itself_not_a_sentinel() {
        let err = "seven".parse::<Hour>().unwrap_err();
        assert!(matches!(&err, HourError::NotANumber(s) if s == "seven"));
        assert_eq!(err.to_string(), "not an hour: 'seven'");
    }

    #[test]
    fn hour_deserializes_through_its_range_check() {
        assert_eq!(serde_json::from_str::<Hour>("7").unwrap(), hour(7));
        assert!(serde_json::from_str::<Hour>("99").is_err());
    }

    #[test]
    fn before_the_target_hour_schedules_today() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 5, 0, 0).unwrap();
        let next = next_occurrence(now, hour(7));
        assert_eq!(next, Utc.with_ymd_and_hms(2026, 8, 30, 7, 0, 0).unwrap());
        assert_eq!(delay_until(now, hour(7)), Duration::from_secs(2 * 3600));
    }

    #[test]
    fn after_the_target_hour_schedules_tomorrow() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 8, 30, 0).unwrap();
        let next = next_occurrence(now, hour(7));
        assert_eq!(next, Utc.with_ymd_and_hms(2026, 8, 31, 7, 0, 0).unwrap());
        assert_eq!(
            delay_until(now, hour(7)),
            Duration::from_secs(22 * 3600 + 30 * 60)
        );
    }

    #[test]
    fn exactly_on_the_hour_fires_immediately() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 7, 0, 0).unwrap();
        assert_eq!(next_occurrence(now, hour(7)), now);
        assert_eq!(delay_until(now, hour(7)), Duration::ZERO);
    }

    #[test]
    fn midnight_target_rolls_to_the_next_day() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 0, 0, 1).unwrap();
        let next = next_occurrence(now, hour(0));
        assert_eq!(next, Utc.with_ymd_and_hms(2026, 8, 31, 0, 0, 0).unwrap());
    }
}
