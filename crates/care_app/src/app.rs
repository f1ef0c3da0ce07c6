use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use care_core::{Labels, Plant, PlantView, ScheduleRecord};
use chrono::{Duration, Local};
use tracing::{debug, info};

/// Runtime configuration sourced from the environment.
///
/// `CARE_PLANTS_FILE` names a JSON array of plants; `CARE_LABELS_FILE`
/// optionally overrides the English label set. Without a plants file a
/// single ad-hoc plant can be described inline through
/// `CARE_INTERVAL_MINUTES`, `CARE_PLANT_NAME`, `CARE_BIRTHDAY` and
/// `CARE_LAST_WATERED_DATE`/`CARE_LAST_WATERED_TIME`.
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub plants_file: Option<PathBuf>,
    pub labels_file: Option<PathBuf>,
    pub plant_name: Option<String>,
    pub birthday: Option<String>,
    pub last_watered: Option<(String, String)>,
    pub interval_minutes: Option<i64>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(path) = std::env::var("CARE_PLANTS_FILE") {
            config.plants_file = Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var("CARE_LABELS_FILE") {
            config.labels_file = Some(PathBuf::from(path));
        }
        if let Ok(name) = std::env::var("CARE_PLANT_NAME") {
            config.plant_name = Some(name);
        }
        if let Ok(birthday) = std::env::var("CARE_BIRTHDAY") {
            config.birthday = Some(birthday);
        }
        if let (Ok(date), Ok(time)) = (
            std::env::var("CARE_LAST_WATERED_DATE"),
            std::env::var("CARE_LAST_WATERED_TIME"),
        ) {
            config.last_watered = Some((date, time));
        }
        if let Ok(minutes) = std::env::var("CARE_INTERVAL_MINUTES") {
            if let Ok(value) = minutes.trim().parse::<i64>() {
                config.interval_minutes = Some(value.max(0));
            }
        }
        Ok(config)
    }
}

pub fn run(config: AppConfig) -> Result<()> {
    let labels = load_labels(config.labels_file.as_deref())?;
    let mut plants = match &config.plants_file {
        Some(path) => load_plants(path)?,
        None => Vec::new(),
    };
    if plants.is_empty() {
        if let Some(plant) = adhoc_plant(&config)? {
            plants.push(plant);
        }
    }
    info!(count = plants.len(), "loaded plant list");

    let now = Local::now().naive_local();
    for plant in &plants {
        let view = PlantView::new(plant, &labels);
        debug!(%view, "plant details");
        println!("[{}] {}: {}", view.id(), view.name(), view.time_to_next_watering(now));
    }
    Ok(())
}

pub(crate) fn load_plants(path: &Path) -> Result<Vec<Plant>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading plant list from {}", path.display()))?;
    let plants = serde_json::from_str(&raw)
        .with_context(|| format!("parsing plant list from {}", path.display()))?;
    Ok(plants)
}

pub(crate) fn load_labels(path: Option<&Path>) -> Result<Labels> {
    let Some(path) = path else {
        return Ok(Labels::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading label set from {}", path.display()))?;
    let labels = serde_json::from_str(&raw)
        .with_context(|| format!("parsing label set from {}", path.display()))?;
    Ok(labels)
}

/// Builds a single plant from the inline environment description, if
/// an interval was given. Date and time strings go through the record
/// builder, so malformed values surface as parse errors rather than
/// being replaced with the current clock.
pub(crate) fn adhoc_plant(config: &AppConfig) -> Result<Option<Plant>> {
    let Some(minutes) = config.interval_minutes else {
        return Ok(None);
    };
    let mut builder = ScheduleRecord::builder();
    match &config.birthday {
        Some(birthday) => builder = builder.birthday_str(birthday)?,
        None => builder = builder.no_birthday(),
    }
    if let Some((date, time)) = &config.last_watered {
        builder = builder.last_watered_str(date, time)?;
    }
    let record = builder.build();
    Ok(Some(Plant {
        id: 0,
        name: config
            .plant_name
            .clone()
            .unwrap_or_else(|| "unnamed plant".to_string()),
        birthday: record.birthday(),
        last_watered: record.last_watered(),
        watering_interval: Duration::minutes(minutes),
        photo: None,
    }))
}
