use crate::constants::KM_TO_MI;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

fn validate(value: f64) -> Result<f64> {
    if value < 0.0 {
        return Err(AppError::InvalidDistance(
            "Distance cannot be negative".to_string(),
        ));
    }
    if !value.is_finite() {
        return Err(AppError::InvalidDistance(
            "Distance must be a finite number".to_string(),
        ));
    }
    Ok(value)
}

/// Distance in kilometers, as recorded in trip exports.
/// Always finite and non-negative, including after deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DistanceKm(f64);

impl DistanceKm {
    pub fn new(km: f64) -> Result<Self> {
        validate(km).map(DistanceKm)
    }

    /// Convert to miles using [`KM_TO_MI`]
    pub fn to_miles(self) -> DistanceMiles {
        DistanceMiles(self.0 * KM_TO_MI)
    }

    pub fn as_km(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for DistanceKm {
    type Error = AppError;

    fn try_from(km: f64) -> Result<Self> {
        Self::new(km)
    }
}

impl From<DistanceKm> for f64 {
    fn from(km: DistanceKm) -> Self {
        km.0
    }
}

impl fmt::Display for DistanceKm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}km", self.0)
    }
}

impl From<DistanceMiles> for DistanceKm {
    fn from(miles: DistanceMiles) -> Self {
        miles.to_km()
    }
}

/// Summing two valid distances stays non-negative. Overflow to infinity is
/// not checked.
impl Add for DistanceKm {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        DistanceKm(self.0 + other.0)
    }
}

/// Distance in statute miles
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DistanceMiles(f64);

impl DistanceMiles {
    pub fn new(miles: f64) -> Result<Self> {
        validate(miles).map(DistanceMiles)
    }

    pub fn to_km(self) -> DistanceKm {
        DistanceKm(self.0 / KM_TO_MI)
    }

    pub fn as_miles(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for DistanceMiles {
    type Error = AppError;

    fn try_from(miles: f64) -> Result<Self> {
        Self::new(miles)
    }
}

impl From<DistanceMiles> for f64 {
    fn from(miles: DistanceMiles) -> Self {
        miles.0
    }
}

impl fmt::Display for DistanceMiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}mi", self.0)
    }
}

impl From<DistanceKm> for DistanceMiles {
    fn from(km: DistanceKm) -> Self {
        km.to_miles()
    }
}

/// See the note on `DistanceKm`'s `Add`.
impl Add for DistanceMiles {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        DistanceMiles(self.0 + other.0)
    }
}
