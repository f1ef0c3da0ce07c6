use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Computes the signed time remaining until the next watering is due.
///
/// Sign convention: `elapsed = now - last_watered`, result is
/// `interval - elapsed`. A non-negative result means time remains;
/// zero or negative means watering is due, with the magnitude giving
/// the overdue amount. `now` is passed in explicitly so callers sample
/// the clock exactly once per calculation.
pub fn time_until_due(
    last_watered: NaiveDateTime,
    interval: Duration,
    now: NaiveDateTime,
) -> Duration {
    let elapsed = now - last_watered;
    interval - elapsed
}

/// Elapsed time since the birthday, counted from midnight at the start
/// of that day. An unknown birthday yields `None`; a birthday in the
/// future yields a negative duration, preserved as-is.
pub fn age(birthday: Option<NaiveDate>, now: NaiveDateTime) -> Option<Duration> {
    birthday.map(|day| now - day.and_time(NaiveTime::MIN))
}
