use chrono::{DateTime, NaiveTime, Utc};

/// interprets a feed timestamp string as milliseconds since the unix epoch
pub fn parse_epoch_millis(s: &str) -> Option<DateTime<Utc>> {
    let millis = s.trim().parse::<i64>().ok()?;
    DateTime::from_timestamp_millis(millis)
}

/// interprets a schedule time string as milliseconds since midnight. the
/// schedule uses negative values for stops that are not served.
pub fn parse_millis_since_midnight(s: &str) -> Option<NaiveTime> {
    let millis = s.trim().parse::<i64>().ok()?;
    if millis < 0 {
        return None;
    }
    let secs = u32::try_from(millis / 1000).ok()?;
    let nanos = u32::try_from((millis % 1000) * 1_000_000).ok()?;
    // schedules may run past midnight (e.g. 25:10:00), so wrap into the day
    NaiveTime::from_num_seconds_from_midnight_opt(secs % 86_400, nanos)
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_epoch_millis() {
        let t = parse_epoch_millis("1700000000123").expect("should parse");
        assert_eq!(t.timestamp(), 1_700_000_000);
        assert_eq!(t.timestamp_subsec_millis(), 123);
        assert!(parse_epoch_millis("").is_none());
    }

    #[test]
    fn test_parse_millis_since_midnight() {
        let t = parse_millis_since_midnight("20700000").expect("should parse");
        assert_eq!((t.hour(), t.minute(), t.second()), (5, 45, 0));
        let late = parse_millis_since_midnight("90000000").expect("should parse");
        assert_eq!((late.hour(), late.minute()), (1, 0));
        assert!(parse_millis_since_midnight("-1").is_none());
    }
}
