//! Time and altitude conversion helpers.
//!
//! Mission timelines are exchanged as "jsec" values: seconds since
//! 2000-01-01 00:00:00 UTC.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

/// Reference epoch for jsec values: 2000-01-01 00:00:00.
pub fn jsec_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("fixed epoch date is valid")
}

/// Seconds since the 2000-01-01 epoch, with sub-second resolution.
pub fn datetime_to_jsec(dt: NaiveDateTime) -> f64 {
    let delta = dt - jsec_epoch();
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1e6,
        None => delta.num_seconds() as f64,
    }
}

/// Datetime for a jsec value.
pub fn jsec_to_datetime(jsecs: f64) -> NaiveDateTime {
    jsec_epoch() + Duration::microseconds((jsecs * 1e6) as i64)
}

/// Fractional hour of day (0.0..24.0) for a jsec value.
pub fn hour_of_day(jsecs: f64) -> f64 {
    let date = jsec_to_datetime(jsecs);
    date.hour() as f64 + date.minute() as f64 / 60.0 + date.second() as f64 / 3600.0
}

/// Pressure altitude in kilometers for a pressure in hPa.
///
/// ICAO standard atmosphere below the tropopause (288.15 K surface
/// temperature, 6.5 K/km lapse rate, 1013.25 hPa surface pressure).
pub fn pressure_to_altitude_km(pressure_hpa: f64) -> f64 {
    (288.15 / 0.0065) * (1.0 - (pressure_hpa / 1013.25).powf(1.0 / 5.255)) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::assert_approx_eq;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_epoch_is_zero() {
        assert_approx_eq!(datetime_to_jsec(jsec_epoch()), 0.0, 1e-12);
    }

    #[test]
    fn test_jsec_roundtrip() {
        let t = dt(2012, 7, 1, 13, 45, 30);
        let jsecs = datetime_to_jsec(t);
        assert_eq!(jsec_to_datetime(jsecs), t);
    }

    #[test]
    fn test_one_day_is_86400() {
        assert_approx_eq!(datetime_to_jsec(dt(2000, 1, 2, 0, 0, 0)), 86_400.0, 1e-9);
    }

    #[test]
    fn test_hour_of_day_fractional() {
        let jsecs = datetime_to_jsec(dt(2010, 3, 4, 6, 30, 0));
        assert_approx_eq!(hour_of_day(jsecs), 6.5, 1e-9);
        let jsecs = datetime_to_jsec(dt(2010, 3, 4, 18, 0, 36));
        assert_approx_eq!(hour_of_day(jsecs), 18.01, 1e-9);
    }

    #[test]
    fn test_pressure_to_altitude() {
        // surface pressure -> sea level
        assert_approx_eq!(pressure_to_altitude_km(1013.25), 0.0, 1e-9);
        // ~500 hPa is roughly 5.6 km in the standard atmosphere
        assert_approx_eq!(pressure_to_altitude_km(500.0), 5.57, 0.05);
        // lower pressure is higher up
        assert!(pressure_to_altitude_km(200.0) > pressure_to_altitude_km(300.0));
    }
}
