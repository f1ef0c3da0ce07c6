use std::fmt;

use chrono::{Duration, NaiveDateTime};

use crate::format::{self, Labels};
use crate::plant::Plant;
use crate::schedule;

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read-only wrapper over a plant that renders every displayable field
/// as text, including the time to the next watering.
pub struct PlantView<'a> {
    plant: &'a Plant,
    labels: &'a Labels,
}

impl<'a> PlantView<'a> {
    pub fn new(plant: &'a Plant, labels: &'a Labels) -> Self {
        Self { plant, labels }
    }

    pub fn id(&self) -> i64 {
        self.plant.id
    }

    pub fn name(&self) -> &str {
        &self.plant.name
    }

    /// Message informing the user of when to water the plant. Once the
    /// due duration reaches zero the configured "water now" message is
    /// returned instead of a decomposed phrase.
    pub fn time_to_next_watering(&self, now: NaiveDateTime) -> String {
        let due = schedule::time_until_due(
            self.plant.last_watered,
            self.plant.watering_interval,
            now,
        );
        if due <= Duration::zero() {
            return self.labels.water_now.clone();
        }
        format::format_duration(due, self.labels)
    }

    pub fn last_watered(&self) -> String {
        self.plant.last_watered.format(DATE_TIME_FORMAT).to_string()
    }

    pub fn watering_interval(&self) -> String {
        format::format_duration(self.plant.watering_interval, self.labels)
    }

    pub fn birthday(&self) -> Option<String> {
        self.plant
            .birthday
            .map(|day| day.format(DATE_FORMAT).to_string())
    }

    /// Formatted age, or `None` when the birthday is unknown.
    pub fn age(&self, now: NaiveDateTime) -> Option<String> {
        schedule::age(self.plant.birthday, now)
            .map(|elapsed| format::format_duration(elapsed, self.labels))
    }

    pub fn has_photo(&self) -> bool {
        self.plant.has_photo()
    }
}

impl fmt::Display for PlantView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID = {}, name = {}, birthday = {}, last_watered = {}, watering_interval = {}, has_photo = {}",
            self.id(),
            self.name(),
            self.birthday().unwrap_or_else(|| "null".to_string()),
            self.last_watered(),
            self.watering_interval(),
            self.has_photo(),
        )
    }
}
