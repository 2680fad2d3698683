//! Fixed reference data shared across the crate.
//!
//! These never change at runtime. Environment-driven settings live in
//! [`Settings`](crate::config::Settings) instead.

// --- Environment variable names ---

/// Key for the stats service uplink.
pub const STATS_ANVIL_API_VAR: &str = "STATS_ANVIL_API";
/// Key for the chart service uplink.
pub const CHART_ANVIL_API_VAR: &str = "CHART_ANVIL_API";

// --- Unit conversion ---

/// Miles per kilometer.
pub const KM_TO_MI: f64 = 0.62137119;

// --- Ride categories ---

/// Ride-type labels as they appear in trip exports, in declaration order.
///
/// Matching against this list is case-sensitive: `UberX` and `uberX` are
/// separate entries.
pub const STANDARD_RIDE_TYPES: [&str; 40] = [
    "UberX",
    "Lyft fare",
    "WAV",
    "Lux fare",
    "Shared fare",
    "Lyft XL fare",
    "Connect",
    "Comfort",
    "Wait & Save fare",
    "UberXL",
    "Black",
    "PSTA",
    "Premier",
    "Shared Saver fare",
    "Select",
    "Pool",
    "Lux Black fare",
    "Lux Black XL fare",
    "Lyft Prebook fare",
    "UberCab",
    "Español",
    "Lux",
    "Minnie Van™ fare",
    "Lyft Later fare",
    "VIP",
    "Access fare",
    "Preferred fare",
    "Premium",
    "Flash",
    "Green Mode fare",
    "Assist",
    "Taxi",
    "Moto",
    "uberX",
    "Military",
    "Self-Driving fare",
    "Hourly",
    "UberYA",
    "Copter",
    "Car seat fare",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_km_to_mi_exact() {
        assert_eq!(KM_TO_MI, 0.62137119);
    }

    #[test]
    fn test_ride_types_order() {
        assert_eq!(STANDARD_RIDE_TYPES.len(), 40);
        assert_eq!(STANDARD_RIDE_TYPES[0], "UberX");
        assert_eq!(STANDARD_RIDE_TYPES[1], "Lyft fare");
        assert_eq!(STANDARD_RIDE_TYPES[20], "Español");
        assert_eq!(STANDARD_RIDE_TYPES[22], "Minnie Van™ fare");
        assert_eq!(STANDARD_RIDE_TYPES[33], "uberX");
        assert_eq!(STANDARD_RIDE_TYPES[39], "Car seat fare");
    }

    #[test]
    fn test_ride_types_case_variants_are_distinct() {
        let upper = STANDARD_RIDE_TYPES.iter().position(|t| *t == "UberX");
        let lower = STANDARD_RIDE_TYPES.iter().position(|t| *t == "uberX");
        assert_eq!(upper, Some(0));
        assert_eq!(lower, Some(33));
    }
}
