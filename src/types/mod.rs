pub mod identifiers;
pub mod satellite;

pub use identifiers::{SatelliteId, SatelliteIdError, MAX_ID, MIN_ID};
pub use satellite::{Altitude, Inclination, Link, SatState, Satellite};
