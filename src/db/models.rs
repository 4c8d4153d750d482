use std::fmt;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound};
use sqlx::FromRow;

/// A persisted sensor reading. Rows are never updated once inserted.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SensorReading {
    pub id: i64,
    /// Server-local date at ingestion.
    #[sqlx(rename = "reading_date")]
    pub date: NaiveDate,
    /// Server-local time at ingestion, whole seconds.
    #[sqlx(rename = "reading_time")]
    pub time: NaiveTime,
    /// Relative humidity percentage
    pub humidity: f64,
    /// Degrees Celsius
    pub temperature: f64,
    pub luminosity: f64,
    pub irrigation_active: bool,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

/// Diagnostic one-liner, e.g. `2025-03-26 18:45:00 - Temp: 23.4°C - Umid: 55.2%`.
impl fmt::Display for SensorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the trailing `.0` on whole numbers.
        write!(
            f,
            "{} {} - Temp: {:?}°C - Umid: {:?}%",
            self.date, self.time, self.temperature, self.humidity
        )
    }
}

/// The client-supplied part of a reading, before the server stamps it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSensorReading {
    pub humidity: f64,
    pub temperature: f64,
    pub luminosity: f64,
    pub irrigation_active: bool,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

/// Date and time assigned to a reading at the moment it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingTimestamp {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl ReadingTimestamp {
    /// Stamp taken from the server's local clock.
    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }

    /// Drops sub-second precision so the stored time matches its `HH:MM:SS`
    /// wire form exactly.
    pub fn from_datetime(at: NaiveDateTime) -> Self {
        let at = at.trunc_subsecs(0);
        Self {
            date: at.date(),
            time: at.time(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    fn make_reading(temperature: f64, humidity: f64) -> SensorReading {
        SensorReading {
            id: 1,
            date: NaiveDate::from_ymd_opt(2025, 3, 26).unwrap(),
            time: NaiveTime::from_hms_opt(18, 45, 0).unwrap(),
            humidity,
            temperature,
            luminosity: 812.0,
            irrigation_active: true,
            nitrogen: 12.1,
            phosphorus: 4.4,
            potassium: 9.9,
        }
    }

    #[test]
    fn display_summarises_temperature_and_humidity() {
        let r = make_reading(23.4, 55.2);
        assert_eq!(r.to_string(), "2025-03-26 18:45:00 - Temp: 23.4°C - Umid: 55.2%");
    }

    #[test]
    fn display_keeps_decimal_on_whole_numbers() {
        let r = make_reading(20.0, 45.0);
        assert_eq!(r.to_string(), "2025-03-26 18:45:00 - Temp: 20.0°C - Umid: 45.0%");
    }

    #[test]
    fn timestamp_truncates_subseconds() {
        let at = NaiveDate::from_ymd_opt(2025, 3, 26)
            .unwrap()
            .and_hms_micro_opt(23, 59, 59, 999_999)
            .unwrap();
        let ts = ReadingTimestamp::from_datetime(at);

        assert_eq!(ts.date, NaiveDate::from_ymd_opt(2025, 3, 26).unwrap());
        assert_eq!(ts.time, NaiveTime::from_hms_opt(23, 59, 59).unwrap());
        assert_eq!(ts.time.nanosecond(), 0);
    }

    #[test]
    fn timestamp_now_tracks_local_clock() {
        let before = Local::now().naive_local().trunc_subsecs(0);
        let ts = ReadingTimestamp::now();
        let after = Local::now().naive_local();

        let stamped = ts.date.and_time(ts.time);
        assert!(stamped >= before && stamped <= after);
    }
}
