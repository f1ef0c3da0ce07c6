use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Time units used for duration display.
///
/// Years and months are fixed-length approximations (365 days and
/// 30.42-day months), not calendar-exact values. Sub-minute precision
/// is never represented.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TimespanUnit {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
}

impl TimespanUnit {
    /// Minutes in one unit of this size.
    pub const fn minutes(self) -> i64 {
        match self {
            TimespanUnit::Years => 525_600,
            TimespanUnit::Months => 43_805,
            TimespanUnit::Days => 1_440,
            TimespanUnit::Hours => 60,
            TimespanUnit::Minutes => 1,
        }
    }
}

/// The unit ladder in descending size order.
pub const LADDER: [TimespanUnit; 5] = [
    TimespanUnit::Years,
    TimespanUnit::Months,
    TimespanUnit::Days,
    TimespanUnit::Hours,
    TimespanUnit::Minutes,
];

/// Display captions for the five ladder units. Lookup is injected per
/// call so one formatting engine serves any label set.
pub trait Captions {
    fn unit(&self, unit: TimespanUnit) -> &str;
}

/// Greedily decomposes a duration into `(unit, count)` pairs, most
/// significant unit first, walking only units at or above `floor`.
/// Units that contribute nothing are omitted. Division truncates
/// toward zero, so a negative duration yields negative counts.
pub fn decompose(duration: Duration, floor: TimespanUnit) -> Vec<(TimespanUnit, i64)> {
    let mut remaining = duration.num_minutes();
    let mut parts = Vec::new();
    for unit in LADDER {
        if unit.minutes() < floor.minutes() {
            break;
        }
        let count = remaining / unit.minutes();
        if count == 0 {
            continue;
        }
        parts.push((unit, count));
        remaining -= count * unit.minutes();
    }
    parts
}

/// Renders a duration as `"<count> <caption>"` segments joined by
/// single spaces, e.g. `"1 years 2 days"`. A duration that truncates
/// to zero whole minutes renders as the empty string.
pub fn format_duration(duration: Duration, captions: &dyn Captions) -> String {
    format_duration_above(duration, TimespanUnit::Minutes, captions)
}

/// Variant of [`format_duration`] that discards units below `floor`.
pub fn format_duration_above(
    duration: Duration,
    floor: TimespanUnit,
    captions: &dyn Captions,
) -> String {
    let mut out = String::new();
    for (unit, count) in decompose(duration, floor) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&count.to_string());
        out.push(' ');
        out.push_str(captions.unit(unit));
    }
    out
}

/// One locale's worth of display strings: the five unit captions plus
/// the message shown when watering is due. Deserializable so label
/// sets can be swapped from a file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Labels {
    pub years: String,
    pub months: String,
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub water_now: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            years: "years".to_string(),
            months: "months".to_string(),
            days: "days".to_string(),
            hours: "hours".to_string(),
            minutes: "minutes".to_string(),
            water_now: "Water me now!".to_string(),
        }
    }
}

impl Captions for Labels {
    fn unit(&self, unit: TimespanUnit) -> &str {
        match unit {
            TimespanUnit::Years => &self.years,
            TimespanUnit::Months => &self.months,
            TimespanUnit::Days => &self.days,
            TimespanUnit::Hours => &self.hours,
            TimespanUnit::Minutes => &self.minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Labels {
        Labels::default()
    }

    #[test]
    fn zero_duration_renders_empty() {
        assert_eq!(format_duration(Duration::zero(), &labels()), "");
    }

    #[test]
    fn sub_minute_precision_is_discarded() {
        assert_eq!(format_duration(Duration::seconds(59), &labels()), "");
    }

    #[test]
    fn renders_plain_day_count() {
        assert_eq!(format_duration(Duration::days(2), &labels()), "2 days");
    }

    #[test]
    fn skips_units_that_contribute_nothing() {
        // Exactly one ladder-year plus two days: no months, hours or minutes.
        let duration = Duration::minutes(TimespanUnit::Years.minutes() + 2 * 1_440);
        assert_eq!(format_duration(duration, &labels()), "1 years 2 days");
    }

    #[test]
    fn walks_the_full_ladder() {
        let duration = Duration::minutes(
            TimespanUnit::Years.minutes() + TimespanUnit::Months.minutes() + 1_440 + 60 + 1,
        );
        assert_eq!(
            format_duration(duration, &labels()),
            "1 years 1 months 1 days 1 hours 1 minutes"
        );
    }

    #[test]
    fn floor_discards_smaller_units() {
        let duration = Duration::minutes(2 * 1_440 + 3 * 60 + 25);
        assert_eq!(
            format_duration_above(duration, TimespanUnit::Hours, &labels()),
            "2 days 3 hours"
        );
        assert_eq!(
            format_duration_above(duration, TimespanUnit::Days, &labels()),
            "2 days"
        );
    }

    #[test]
    fn decomposition_reconstructs_truncated_input() {
        for minutes in [1i64, 59, 61, 1_439, 1_441, 43_805, 525_599, 1_234_567] {
            let parts = decompose(Duration::minutes(minutes), TimespanUnit::Minutes);
            let total: i64 = parts.iter().map(|(unit, count)| unit.minutes() * count).sum();
            assert_eq!(total, minutes);
            assert!(parts.iter().all(|(_, count)| *count != 0));
            for pair in parts.windows(2) {
                assert!(pair[0].0.minutes() > pair[1].0.minutes());
            }
        }
    }

    #[test]
    fn labels_deserialize_with_defaults_filled_in() {
        let labels: Labels = serde_json::from_str(r#"{"days": "Tage", "water_now": "Jetzt!"}"#).unwrap();
        assert_eq!(labels.days, "Tage");
        assert_eq!(labels.water_now, "Jetzt!");
        assert_eq!(labels.hours, "hours");
    }
}
