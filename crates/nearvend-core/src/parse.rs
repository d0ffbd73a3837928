//! Field-level parsing shared by query-string and body validation.

use chrono::NaiveTime;
use nearvend_geo::{parse_time_of_day, GeoPoint};

use crate::InputError;

/// Treat an absent or blank parameter as missing.
pub(crate) fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

pub(crate) fn required<'a>(field: &'static str, raw: Option<&'a str>) -> Result<&'a str, InputError> {
    present(raw).ok_or(InputError::Missing { field })
}

/// `true` only for a case-insensitive `"true"`.
pub(crate) fn flag(raw: Option<&str>) -> bool {
    present(raw).is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

pub(crate) fn float(field: &'static str, raw: &str) -> Result<f64, InputError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::Malformed {
            field,
            expected: "number",
            value: raw.to_string(),
        })
}

pub(crate) fn integer(field: &'static str, raw: &str) -> Result<i64, InputError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| InputError::Malformed {
            field,
            expected: "integer",
            value: raw.to_string(),
        })
}

pub(crate) fn time_of_day(field: &'static str, raw: &str) -> Result<NaiveTime, InputError> {
    parse_time_of_day(raw).map_err(|_| InputError::Malformed {
        field,
        expected: "time of day (HH:MM or HH:MM:SS)",
        value: raw.to_string(),
    })
}

/// Check `value` against an inclusive range and narrow it to `u32`.
pub(crate) fn within(field: &'static str, value: i64, min: u32, max: u32) -> Result<u32, InputError> {
    let out_of_range = InputError::OutOfRange {
        field,
        value,
        min: i64::from(min),
        max: i64::from(max),
    };
    u32::try_from(value)
        .ok()
        .filter(|v| (min..=max).contains(v))
        .ok_or(out_of_range)
}

pub(crate) fn location(latitude: f64, longitude: f64) -> Result<GeoPoint, InputError> {
    Ok(GeoPoint::new(latitude, longitude)?)
}

pub(crate) fn non_empty(field: &'static str, value: &str) -> Result<(), InputError> {
    if value.trim().is_empty() {
        Err(InputError::Empty { field })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_count_as_absent() {
        assert_eq!(present(Some("  ")), None);
        assert_eq!(present(Some(" 12 ")), Some("12"));
        assert_eq!(
            required("lat", Some("")),
            Err(InputError::Missing { field: "lat" })
        );
    }

    #[test]
    fn flag_only_accepts_true() {
        assert!(flag(Some("true")));
        assert!(flag(Some("TRUE")));
        assert!(!flag(Some("yes")));
        assert!(!flag(Some("1")));
        assert!(!flag(None));
    }

    #[test]
    fn float_rejects_text_and_non_finite() {
        assert_eq!(float("lat", "12.5"), Ok(12.5));
        assert!(float("lat", "north").is_err());
        assert!(float("lat", "NaN").is_err());
        assert!(float("lat", "inf").is_err());
    }

    #[test]
    fn integer_rejects_fractions() {
        assert_eq!(integer("distance", "500"), Ok(500));
        assert!(matches!(
            integer("distance", "500.5"),
            Err(InputError::Malformed { field: "distance", .. })
        ));
    }

    #[test]
    fn within_is_inclusive() {
        assert_eq!(within("distance", 0, 0, 20_000), Ok(0));
        assert_eq!(within("distance", 20_000, 0, 20_000), Ok(20_000));
        assert!(within("distance", 20_001, 0, 20_000).is_err());
        assert!(within("distance", -1, 0, 20_000).is_err());
    }

    #[test]
    fn time_of_day_accepts_both_forms() {
        assert_eq!(
            time_of_day("currentTime", "09:30"),
            Ok(NaiveTime::from_hms_opt(9, 30, 0).unwrap())
        );
        assert_eq!(
            time_of_day("currentTime", "09:30:15"),
            Ok(NaiveTime::from_hms_opt(9, 30, 15).unwrap())
        );
        assert!(time_of_day("currentTime", "25:00").is_err());
    }
}
