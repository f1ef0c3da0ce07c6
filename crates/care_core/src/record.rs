use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Date strings are `YYYY-MM-DD`, time strings are 24-hour `HH:MM`.
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid birthday {input:?}")]
    BirthdayParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("invalid last-watered value {input:?}")]
    LastWateredParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Immutable snapshot of a plant's two temporal facts: the birthday
/// (planting or acquisition date, possibly unknown) and the exact
/// instant of the last watering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleRecord {
    birthday: Option<NaiveDate>,
    last_watered: NaiveDateTime,
}

impl ScheduleRecord {
    /// Returns a fresh builder seeded with the current local clock.
    pub fn builder() -> ScheduleRecordBuilder {
        ScheduleRecordBuilder::new()
    }

    pub fn birthday(&self) -> Option<NaiveDate> {
        self.birthday
    }

    pub fn last_watered(&self) -> NaiveDateTime {
        self.last_watered
    }

    /// Replaces the birthday outright.
    pub fn set_birthday(&mut self, birthday: Option<NaiveDate>) {
        self.birthday = birthday;
    }

    /// Replaces the last-watered instant outright.
    pub fn set_last_watered(&mut self, last_watered: NaiveDateTime) {
        self.last_watered = last_watered;
    }
}

/// Builder for [`ScheduleRecord`]. Every call to [`ScheduleRecord::builder`]
/// yields an independently owned builder, so concurrent constructions never
/// share state. Both fields start out as "now"; either can be overwritten
/// from a structured value or from strictly parsed strings.
#[derive(Debug, Clone)]
pub struct ScheduleRecordBuilder {
    record: ScheduleRecord,
}

impl ScheduleRecordBuilder {
    fn new() -> Self {
        let now = Local::now().naive_local();
        Self {
            record: ScheduleRecord {
                birthday: Some(now.date()),
                last_watered: now,
            },
        }
    }

    pub fn birthday(mut self, birthday: NaiveDate) -> Self {
        self.record.birthday = Some(birthday);
        self
    }

    /// Parses a `YYYY-MM-DD` date. Malformed or impossible dates fail
    /// loudly instead of falling back to the seeded value.
    pub fn birthday_str(mut self, input: &str) -> Result<Self, RecordError> {
        let parsed = NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| {
            RecordError::BirthdayParse {
                input: input.to_string(),
                source,
            }
        })?;
        self.record.birthday = Some(parsed);
        Ok(self)
    }

    /// Marks the birthday as unknown.
    pub fn no_birthday(mut self) -> Self {
        self.record.birthday = None;
        self
    }

    pub fn last_watered(mut self, last_watered: NaiveDateTime) -> Self {
        self.record.last_watered = last_watered;
        self
    }

    /// Parses a `YYYY-MM-DD` date plus a 24-hour `HH:MM` time.
    pub fn last_watered_str(mut self, date: &str, time: &str) -> Result<Self, RecordError> {
        let day = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|source| {
            RecordError::LastWateredParse {
                input: date.to_string(),
                source,
            }
        })?;
        let clock = NaiveTime::parse_from_str(time, TIME_FORMAT).map_err(|source| {
            RecordError::LastWateredParse {
                input: time.to_string(),
                source,
            }
        })?;
        self.record.last_watered = day.and_time(clock);
        Ok(self)
    }

    pub fn build(self) -> ScheduleRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_both_fields_to_now() {
        let record = ScheduleRecord::builder().build();
        // Both fields come from the same clock sample.
        assert_eq!(record.birthday(), Some(record.last_watered().date()));
    }

    #[test]
    fn builds_last_watered_from_date_and_time_strings() {
        let record = ScheduleRecord::builder()
            .last_watered_str("2024-01-01", "08:00")
            .unwrap()
            .build();
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assert_eq!(record.last_watered(), expected);
    }

    #[test]
    fn rejects_impossible_calendar_date() {
        let err = ScheduleRecord::builder()
            .birthday_str("2024-02-30")
            .unwrap_err();
        assert!(matches!(err, RecordError::BirthdayParse { ref input, .. } if input == "2024-02-30"));
    }

    #[test]
    fn rejects_malformed_time_string() {
        let err = ScheduleRecord::builder()
            .last_watered_str("2024-01-01", "8 o'clock")
            .unwrap_err();
        assert!(matches!(err, RecordError::LastWateredParse { .. }));
    }

    #[test]
    fn birthday_can_be_marked_unknown() {
        let record = ScheduleRecord::builder().no_birthday().build();
        assert!(record.birthday().is_none());
    }

    #[test]
    fn setters_replace_fields_outright() {
        let mut record = ScheduleRecord::builder().build();
        let instant = NaiveDate::from_ymd_opt(2023, 6, 15)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        record.set_last_watered(instant);
        record.set_birthday(None);
        assert_eq!(record.last_watered(), instant);
        assert!(record.birthday().is_none());
    }
}
