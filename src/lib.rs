//! Height-balanced satellite index.
//!
//! `satnet-core` keeps satellite records in an AVL tree keyed by catalog id.
//! Inserts, removals and the bulk removal of deorbited satellites all restore
//! ordering and balance before returning, so lookups stay logarithmic.
//!
//! Heights count nodes: a leaf has height 1 and a missing child counts as 0.

pub mod network;
pub mod types;

pub use network::{SatNet, SatNetError};
pub use types::{Altitude, Inclination, SatState, Satellite, SatelliteId, MAX_ID, MIN_ID};
