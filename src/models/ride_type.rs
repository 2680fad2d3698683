use crate::constants::STANDARD_RIDE_TYPES;
use serde::{Serialize, Serializer};
use std::fmt;

/// A trip's ride-type label, classified against [`STANDARD_RIDE_TYPES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RideType<'a> {
    /// Listed label; `index` is its position in the standard list
    Standard { label: &'static str, index: usize },
    Other(&'a str),
}

impl<'a> RideType<'a> {
    /// Exact, case-sensitive match against the standard list.
    pub fn classify(label: &'a str) -> Self {
        match standard_ride_type_index(label) {
            Some(index) => RideType::Standard {
                label: STANDARD_RIDE_TYPES[index],
                index,
            },
            None => RideType::Other(label),
        }
    }

    pub fn label(&self) -> &'a str {
        match *self {
            RideType::Standard { label, .. } => label,
            RideType::Other(label) => label,
        }
    }

    pub fn is_standard(&self) -> bool {
        matches!(self, RideType::Standard { .. })
    }
}

impl fmt::Display for RideType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for RideType<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Position of the first matching entry in [`STANDARD_RIDE_TYPES`].
pub fn standard_ride_type_index(label: &str) -> Option<usize> {
    STANDARD_RIDE_TYPES.iter().position(|t| *t == label)
}

pub fn is_standard_ride_type(label: &str) -> bool {
    standard_ride_type_index(label).is_some()
}
