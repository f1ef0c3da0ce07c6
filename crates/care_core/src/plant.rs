use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A tracked plant as handed over by the storage layer.
///
/// The engine never decodes the photo bytes; only their presence is
/// observable. The watering interval travels as a whole-minute count
/// on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plant {
    pub id: i64,
    pub name: String,
    pub birthday: Option<NaiveDate>,
    pub last_watered: NaiveDateTime,
    #[serde(with = "interval_minutes")]
    pub watering_interval: Duration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<u8>>,
}

impl Plant {
    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }
}

mod interval_minutes {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(value.num_minutes())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let minutes = i64::deserialize(deserializer)?;
        Ok(Duration::minutes(minutes))
    }
}
