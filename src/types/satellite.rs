use serde::{Deserialize, Serialize};
use std::fmt;

/// Owning link to a child subtree.
pub type Link = Option<Box<Satellite>>;

/// Orbital altitude class, in miles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Altitude {
    #[default]
    Mi208,
    Mi215,
    Mi340,
    Mi350,
}

/// Orbital inclination class, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Inclination {
    #[default]
    I48,
    I53,
    I70,
    I97,
}

/// Operational state. Only `Deorbited` means anything to the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SatState {
    #[default]
    Active,
    Deorbited,
    Decaying,
}

impl fmt::Display for Altitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Altitude::Mi208 => "208 miles",
            Altitude::Mi215 => "215 miles",
            Altitude::Mi340 => "340 miles",
            Altitude::Mi350 => "350 miles",
        };
        f.write_str(text)
    }
}

impl fmt::Display for Inclination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Inclination::I48 => "48 degrees",
            Inclination::I53 => "53 degrees",
            Inclination::I70 => "70 degrees",
            Inclination::I97 => "97 degrees",
        };
        f.write_str(text)
    }
}

impl fmt::Display for SatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SatState::Active => "Active",
            SatState::Deorbited => "Deorbited",
            SatState::Decaying => "Decaying",
        };
        f.write_str(text)
    }
}

/// A satellite record and, once indexed, a node of the tree.
///
/// Identity is the id alone: two records with the same id compare equal
/// whatever their attributes.
///
/// `height` counts nodes on the longest downward path, so a leaf inside a
/// tree has height 1 and an absent child counts as 0. A record that has
/// never been indexed has height 0.
///
/// Only the identity fields are serialized; tree linkage is skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Satellite {
    pub(crate) id: i32,
    pub(crate) altitude: Altitude,
    pub(crate) inclination: Inclination,
    pub(crate) state: SatState,
    #[serde(skip)]
    pub(crate) height: i32,
    #[serde(skip)]
    pub(crate) left: Link,
    #[serde(skip)]
    pub(crate) right: Link,
}

impl Satellite {
    pub fn new(id: i32, altitude: Altitude, inclination: Inclination, state: SatState) -> Self {
        Self {
            id,
            altitude,
            inclination,
            state,
            height: 0,
            left: None,
            right: None,
        }
    }

    /// Record with default attributes: MI208, I48, active.
    pub fn with_id(id: i32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn altitude(&self) -> Altitude {
        self.altitude
    }

    pub fn inclination(&self) -> Inclination {
        self.inclination
    }

    pub fn state(&self) -> SatState {
        self.state
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn left(&self) -> Option<&Satellite> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Satellite> {
        self.right.as_deref()
    }

    pub fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    pub fn set_altitude(&mut self, altitude: Altitude) {
        self.altitude = altitude;
    }

    pub fn set_inclination(&mut self, inclination: Inclination) {
        self.inclination = inclination;
    }

    pub fn set_state(&mut self, state: SatState) {
        self.state = state;
    }

    pub fn set_height(&mut self, height: i32) {
        self.height = height;
    }

    pub fn set_left(&mut self, left: Link) {
        self.left = left;
    }

    pub fn set_right(&mut self, right: Link) {
        self.right = right;
    }

    pub fn take_left(&mut self) -> Link {
        self.left.take()
    }

    pub fn take_right(&mut self) -> Link {
        self.right.take()
    }

    /// Copy of the identity fields with no linkage, as a fresh tree leaf.
    pub(crate) fn detached_leaf(&self) -> Box<Satellite> {
        let mut leaf = Satellite::new(self.id, self.altitude, self.inclination, self.state);
        leaf.height = 1;
        Box::new(leaf)
    }
}

impl PartialEq for Satellite {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Satellite {}
