use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Format a bucket hour on a 12-hour clock, e.g. "8 PM on 8/7/2023".
pub fn hour_label(date: NaiveDate, hour: u32) -> String {
    let (display, half) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{} {} on {}", display, half, short_date(date))
}

/// M/D/YYYY without zero padding.
pub fn short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Timestamp format used by feed rendering.
pub fn timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_hour_label_afternoon() {
        assert_eq!(hour_label(date(2023, 8, 7), 20), "8 PM on 8/7/2023");
    }

    #[test]
    fn test_hour_label_morning() {
        assert_eq!(hour_label(date(2023, 8, 7), 10), "10 AM on 8/7/2023");
    }

    #[test]
    fn test_hour_label_midnight_and_noon() {
        assert_eq!(hour_label(date(2023, 1, 1), 0), "12 AM on 1/1/2023");
        assert_eq!(hour_label(date(2023, 1, 1), 12), "12 PM on 1/1/2023");
    }

    #[test]
    fn test_short_date_no_padding() {
        assert_eq!(short_date(date(2023, 12, 31)), "12/31/2023");
        assert_eq!(short_date(date(2023, 4, 3)), "4/3/2023");
    }

    #[test]
    fn test_timestamp() {
        let dt = Utc.with_ymd_and_hms(2023, 8, 7, 20, 24, 0).unwrap();
        assert_eq!(timestamp(&dt), "2023-08-07 20:24:00");
    }
}
