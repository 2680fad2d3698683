//! JSON report printed by the `ridestats` binary.

use crate::config::Settings;
use crate::constants::{KM_TO_MI, STANDARD_RIDE_TYPES};
use crate::error::{AppError, Result};
use crate::models::{standard_ride_type_index, DistanceKm, RideType};
use serde_json::{json, Value};

/// Build the report from loaded settings and the raw `--km=` and
/// `--ride-type=` option values.
pub fn build(settings: &Settings, km: Option<&str>, ride_type: Option<&str>) -> Result<Value> {
    let mut report = json!({
        "stats_configured": settings.is_stats_configured(),
        "chart_configured": settings.is_chart_configured(),
        "km_to_mi": KM_TO_MI,
        "standard_ride_types": &STANDARD_RIDE_TYPES[..],
    });

    if let Some(raw) = km {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidArgument(format!("Invalid --km value: {}", raw)))?;
        let km = DistanceKm::new(value)?;
        report["conversion"] = json!({ "km": km, "mi": km.to_miles() });
    }

    if let Some(label) = ride_type {
        let ride = RideType::classify(label);
        report["ride_type"] = json!({
            "label": ride,
            "standard": ride.is_standard(),
            "index": standard_ride_type_index(label),
        });
    }

    Ok(report)
}
