use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::models::{NewSensorReading, SensorReading};

/// Wire form of a stored reading. Field names are the stable public contract.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SensorReadingDto {
    pub id: i64,
    /// Server date at ingestion (`YYYY-MM-DD`)
    #[serde(rename = "data")]
    pub date: NaiveDate,
    /// Server time at ingestion (`HH:MM:SS`)
    #[serde(rename = "hora")]
    pub time: NaiveTime,
    /// Relative humidity percentage
    #[serde(rename = "umidade")]
    pub humidity: f64,
    /// Degrees Celsius
    #[serde(rename = "temperatura")]
    pub temperature: f64,
    #[serde(rename = "luminosidade")]
    pub luminosity: f64,
    #[serde(rename = "irrigacao_ativa")]
    pub irrigation_active: bool,
    #[serde(rename = "nitrogenio")]
    pub nitrogen: f64,
    #[serde(rename = "fosforo")]
    pub phosphorus: f64,
    #[serde(rename = "potassio")]
    pub potassium: f64,
}

/// Request body for `POST /leituras/`.
///
/// `id`, `data` and `hora` are assigned by the server; if present in the
/// body they are ignored, as are any other unknown fields.
///
/// Bodies are checked field by field in `payload`, not deserialized into
/// this type; `Deserialize` is derived for the serde renames the schema reads.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct CreateSensorReadingRequest {
    #[serde(rename = "umidade")]
    #[schema(example = 55.2)]
    pub humidity: f64,
    #[serde(rename = "temperatura")]
    #[schema(example = 23.4)]
    pub temperature: f64,
    #[serde(rename = "luminosidade")]
    #[schema(example = 812.0)]
    pub luminosity: f64,
    #[serde(rename = "irrigacao_ativa")]
    #[schema(example = true)]
    pub irrigation_active: bool,
    #[serde(rename = "nitrogenio")]
    #[schema(example = 12.1)]
    pub nitrogen: f64,
    #[serde(rename = "fosforo")]
    #[schema(example = 4.4)]
    pub phosphorus: f64,
    #[serde(rename = "potassio")]
    #[schema(example = 9.9)]
    pub potassium: f64,
}

impl From<SensorReading> for SensorReadingDto {
    fn from(r: SensorReading) -> Self {
        Self {
            id: r.id,
            date: r.date,
            time: r.time,
            humidity: r.humidity,
            temperature: r.temperature,
            luminosity: r.luminosity,
            irrigation_active: r.irrigation_active,
            nitrogen: r.nitrogen,
            phosphorus: r.phosphorus,
            potassium: r.potassium,
        }
    }
}

impl From<CreateSensorReadingRequest> for NewSensorReading {
    fn from(r: CreateSensorReadingRequest) -> Self {
        Self {
            humidity: r.humidity,
            temperature: r.temperature,
            luminosity: r.luminosity,
            irrigation_active: r.irrigation_active,
            nitrogen: r.nitrogen,
            phosphorus: r.phosphorus,
            potassium: r.potassium,
        }
    }
}
