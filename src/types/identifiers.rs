use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Smallest catalog id accepted by the index.
pub const MIN_ID: i32 = 10000;
/// Largest catalog id accepted by the index.
pub const MAX_ID: i32 = 99999;

/// A catalog id that has been checked against `[MIN_ID, MAX_ID]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SatelliteId(i32);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SatelliteIdError {
    #[error("Satellite ID out of range (ID: {0})")]
    OutOfRange(i32),
}

impl SatelliteId {
    pub fn new(raw: i32) -> Result<Self, SatelliteIdError> {
        if Self::in_range(raw) {
            Ok(SatelliteId(raw))
        } else {
            Err(SatelliteIdError::OutOfRange(raw))
        }
    }

    pub fn in_range(raw: i32) -> bool {
        (MIN_ID..=MAX_ID).contains(&raw)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for SatelliteId {
    type Error = SatelliteIdError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        SatelliteId::new(raw)
    }
}

impl fmt::Display for SatelliteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
