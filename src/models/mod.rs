pub mod distance;
pub mod ride_type;

pub use distance::{DistanceKm, DistanceMiles};
pub use ride_type::{is_standard_ride_type, standard_ride_type_index, RideType};
