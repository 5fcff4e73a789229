/// Busiest-hour computation: which calendar hour holds the most messages.
use chrono::{NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::StatsError;
use crate::model::Message;
use crate::timefmt;

/// A calendar date + hour-of-day aggregation key with its message count.
/// Derived per call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBucket {
    pub date: NaiveDate,
    /// Hour of day, 0..=23, from the stored UTC timestamp.
    pub hour: u32,
    pub count: u64,
}

impl HourBucket {
    /// 12-hour clock label, e.g. "8 PM on 8/7/2023".
    pub fn label(&self) -> String {
        timefmt::hour_label(self.date, self.hour)
    }
}

/// Finds the single calendar hour containing the most messages.
///
/// Messages sharing a date and hour land in the same bucket regardless of
/// minute and second. Bucketing uses the stored UTC timestamp as-is. When
/// several buckets tie for the maximum, the earliest one wins. Zero
/// messages fail with `StatsError::EmptyInput`.
pub fn busiest_hour<'a, I>(messages: I) -> Result<HourBucket, StatsError>
where
    I: IntoIterator<Item = &'a Message>,
{
    let mut buckets: BTreeMap<(NaiveDate, u32), u64> = BTreeMap::new();
    for message in messages {
        let key = (message.created_at.date_naive(), message.created_at.hour());
        *buckets.entry(key).or_insert(0) += 1;
    }

    // Keys iterate in chronological order; a strict comparison keeps the
    // earliest bucket among equals.
    let mut best: Option<HourBucket> = None;
    for ((date, hour), count) in buckets {
        if best.as_ref().map_or(true, |b| count > b.count) {
            best = Some(HourBucket { date, hour, count });
        }
    }
    best.ok_or(StatsError::EmptyInput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MessageId, UserId};
    use chrono::{TimeZone, Utc};

    fn message(id: u64, y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Message {
        Message {
            id: MessageId(id),
            content: "test".to_string(),
            created_at: Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap(),
            author: UserId(1),
            edited: false,
        }
    }

    #[test]
    fn test_single_hour_wins() {
        let messages = vec![
            message(1, 2023, 8, 7, 20, 22),
            message(2, 2023, 8, 7, 20, 54),
            message(3, 2023, 8, 7, 21, 2),
        ];
        let bucket = busiest_hour(&messages).unwrap();
        assert_eq!(bucket.hour, 20);
        assert_eq!(bucket.count, 2);
        assert_eq!(bucket.label(), "8 PM on 8/7/2023");
    }

    #[test]
    fn test_same_hour_different_dates_are_different_buckets() {
        let messages = vec![
            message(1, 2023, 8, 7, 14, 0),
            message(2, 2023, 8, 8, 14, 0),
            message(3, 2023, 8, 8, 14, 30),
        ];
        let bucket = busiest_hour(&messages).unwrap();
        assert_eq!(bucket.date, NaiveDate::from_ymd_opt(2023, 8, 8).unwrap());
        assert_eq!(bucket.count, 2);
    }

    #[test]
    fn test_tie_goes_to_earliest_bucket() {
        let messages = vec![
            message(1, 2023, 8, 7, 21, 0),
            message(2, 2023, 8, 7, 14, 0),
            message(3, 2023, 8, 7, 14, 59),
            message(4, 2023, 8, 7, 21, 30),
        ];
        let bucket = busiest_hour(&messages).unwrap();
        assert_eq!(bucket.hour, 14);
    }

    #[test]
    fn test_empty_input_fails() {
        let messages: Vec<Message> = Vec::new();
        assert_eq!(busiest_hour(&messages), Err(StatsError::EmptyInput));
    }
}
