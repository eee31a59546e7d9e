use chrono::{NaiveDate, NaiveDateTime, TimeZone, Timelike};
use chrono_tz::Tz;

use crate::error::{PunchcardError, Result};

/// Zone all histograms are displayed in.
pub const DISPLAY_ZONE: Tz = chrono_tz::US::Eastern;

/// The only timestamp shape the GitHub commit listing emits. Fractional
/// seconds and numeric offsets are rejected on purpose.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalStamp {
    pub hour: u32,
    pub date: NaiveDate,
}

/// Parse a strict UTC timestamp string and convert it into the given zone,
/// yielding the local hour-of-day and calendar date.
pub fn to_local(timestamp: &str, tz: Tz) -> Result<LocalStamp> {
    let utc = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .map_err(|e| PunchcardError::Parse(format!("invalid commit timestamp '{timestamp}': {e}")))?;
    let local = tz.from_utc_datetime(&utc);
    Ok(LocalStamp {
        hour: local.hour(),
        date: local.date_naive(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn eastern(timestamp: &str) -> LocalStamp {
        to_local(timestamp, DISPLAY_ZONE).unwrap()
    }

    #[test]
    fn winter_timestamp_converts_at_utc_minus_five() {
        let stamp = eastern("2023-01-15T05:30:00Z");
        assert_eq!(stamp.hour, 0);
        assert_eq!(stamp.date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
    }

    #[test]
    fn summer_timestamp_converts_at_utc_minus_four() {
        // 03:30 UTC lands on the previous local day under EDT.
        let stamp = eastern("2023-07-01T03:30:00Z");
        assert_eq!(stamp.hour, 23);
        assert_eq!(stamp.date, NaiveDate::from_ymd_opt(2023, 6, 30).unwrap());
    }

    #[test]
    fn spring_forward_shifts_offset_by_one_hour() {
        // DST began 2023-03-12 at 02:00 local.
        let before = eastern("2023-03-11T12:00:00Z");
        let after = eastern("2023-03-12T12:00:00Z");
        assert_eq!(before.hour, 7);
        assert_eq!(after.hour, 8);
    }

    #[test]
    fn fall_back_shifts_offset_by_one_hour() {
        // DST ended 2023-11-05 at 02:00 local.
        let before = eastern("2023-11-04T12:00:00Z");
        let after = eastern("2023-11-05T12:00:00Z");
        assert_eq!(before.hour, 8);
        assert_eq!(after.hour, 7);
    }

    #[test]
    fn hour_is_always_in_range() {
        for h in 0..24 {
            let stamp = eastern(&format!("2023-05-10T{h:02}:15:00Z"));
            assert!(stamp.hour < 24);
        }
    }

    #[test]
    fn fractional_seconds_are_rejected() {
        assert!(to_local("2023-01-15T05:30:00.123Z", DISPLAY_ZONE).is_err());
    }

    #[test]
    fn numeric_offsets_are_rejected() {
        assert!(to_local("2023-01-15T05:30:00+00:00", DISPLAY_ZONE).is_err());
    }

    #[test]
    fn garbage_is_rejected_with_the_input_in_the_message() {
        let err = to_local("yesterday", DISPLAY_ZONE).unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }
}
