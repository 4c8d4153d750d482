use sqlx::PgPool;
use tracing::{debug, info};

use crate::db::models::{NewSensorReading, ReadingTimestamp, SensorReading};

/// Newest first. `id` breaks ties between readings stamped in the same second.
const LIST_READINGS: &str = r#"
    SELECT id, reading_date, reading_time,
           humidity, temperature, luminosity, irrigation_active,
           nitrogen, phosphorus, potassium
    FROM sensor_readings
    ORDER BY reading_date DESC, reading_time DESC, id DESC
"#;

const INSERT_READING: &str = r#"
    INSERT INTO sensor_readings
        (reading_date, reading_time,
         humidity, temperature, luminosity, irrigation_active,
         nitrogen, phosphorus, potassium)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
    RETURNING id, reading_date, reading_time,
              humidity, temperature, luminosity, irrigation_active,
              nitrogen, phosphorus, potassium
"#;

/// Stores and retrieves sensor readings. Holds no state besides the pool,
/// so cloning it per request is cheap.
#[derive(Debug, Clone)]
pub struct ReadingService {
    pool: PgPool,
}

impl ReadingService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All readings, ordered by date then time, most recent first.
    pub async fn list(&self) -> Result<Vec<SensorReading>, sqlx::Error> {
        let rows = sqlx::query_as::<_, SensorReading>(LIST_READINGS)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = rows.len(), "Listed sensor readings");
        Ok(rows)
    }

    /// Stamps `reading` with the server's current date and time and inserts
    /// it as a single row.
    pub async fn create(&self, reading: NewSensorReading) -> Result<SensorReading, sqlx::Error> {
        let stamp = ReadingTimestamp::now();

        let row = sqlx::query_as::<_, SensorReading>(INSERT_READING)
            .bind(stamp.date)
            .bind(stamp.time)
            .bind(reading.humidity)
            .bind(reading.temperature)
            .bind(reading.luminosity)
            .bind(reading.irrigation_active)
            .bind(reading.nitrogen)
            .bind(reading.phosphorus)
            .bind(reading.potassium)
            .fetch_one(&self.pool)
            .await?;

        info!(id = row.id, reading = %row, "Sensor reading persisted");
        Ok(row)
    }

    #[cfg(test)]
    pub(crate) async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sensor_readings")
            .fetch_one(&self.pool)
            .await
    }
}
