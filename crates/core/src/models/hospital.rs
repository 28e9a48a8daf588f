use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i32,
    pub name: String,
    pub specialty: String,
    pub experience: String,
    pub hospital_id: i32,
}

/// Public directory entry for a hospital. Account credentials live in a
/// separate row shape and are never part of this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub consultation_fee: String,
    pub rating: String,
    pub experience: Option<String>,
    pub wait_time: String,
    pub contact: String,
    pub ambulance: i32,
    pub blood: i32,
    pub oxygen: i32,
    pub beds: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub specialities: Vec<String>,
    pub about: Option<String>,
    #[serde(with = "iso_millis")]
    pub next_available: DateTime<Utc>,
    pub verified: bool,
    pub amenities: Vec<String>,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
}

/// ISO-8601 with millisecond precision and a `Z` suffix,
/// e.g. `2025-03-01T09:30:00.000Z`.
pub mod iso_millis {
    use super::*;

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
