use thiserror::Error;
use tracing::debug;

use super::avl;
use crate::types::{Inclination, Link, SatState, Satellite, SatelliteId, SatelliteIdError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SatNetError {
    #[error("Satellite already exists (ID: {0})")]
    DuplicateKey(i32),
    #[error("Satellite ID out of range (ID: {0})")]
    OutOfRange(i32),
}

impl From<SatelliteIdError> for SatNetError {
    fn from(err: SatelliteIdError) -> Self {
        match err {
            SatelliteIdError::OutOfRange(id) => SatNetError::OutOfRange(id),
        }
    }
}

/// Satellite index: an AVL tree keyed by satellite id.
///
/// Owns its whole node graph. `Clone` is a deep structural copy; the two
/// trees share nothing afterwards.
#[derive(Debug, Clone, Default)]
pub struct SatNet {
    root: Link,
}

impl SatNet {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Index a copy of `satellite` as a fresh leaf.
    ///
    /// Any children or height carried by `satellite` are ignored. On error
    /// the tree is left untouched.
    pub fn insert(&mut self, satellite: &Satellite) -> Result<(), SatNetError> {
        let id = SatelliteId::new(satellite.id())?.as_i32();
        if self.find(id) {
            return Err(SatNetError::DuplicateKey(id));
        }

        self.root = Some(avl::insert(self.root.take(), satellite.detached_leaf()));
        debug!(id, "inserted satellite");
        Ok(())
    }

    /// Remove the satellite with `id`. Unknown or out-of-range ids are ignored.
    pub fn remove(&mut self, id: i32) {
        if !SatelliteId::in_range(id) || !self.find(id) {
            return;
        }

        self.root = avl::remove(self.root.take(), id);
        debug!(id, "removed satellite");
    }

    pub fn find(&self, id: i32) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: i32) -> Option<&Satellite> {
        avl::find(&self.root, id)
    }

    /// Returns false if no satellite has `id`.
    pub fn set_state(&mut self, id: i32, state: SatState) -> bool {
        match avl::find_mut(&mut self.root, id) {
            Some(node) => {
                node.set_state(state);
                true
            }
            None => false,
        }
    }

    /// Remove every deorbited satellite in one post-order pass and return
    /// how many were removed.
    pub fn remove_deorbited(&mut self) -> usize {
        let mut removed = 0;
        self.root = avl::remove_deorbited(self.root.take(), &mut removed);
        debug!(removed, remaining = self.len(), "removed deorbited satellites");
        removed
    }

    pub fn count_matching(&self, inclination: Inclination) -> usize {
        self.traverse_in_order()
            .into_iter()
            .filter(|sat| sat.inclination() == inclination)
            .count()
    }

    /// All satellites in ascending id order.
    pub fn traverse_in_order(&self) -> Vec<&Satellite> {
        let mut out = Vec::new();
        avl::in_order(&self.root, &mut out);
        out
    }

    pub fn len(&self) -> usize {
        avl::count(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&Satellite> {
        self.root.as_deref()
    }

    /// Release every node, children before parents.
    pub fn clear(&mut self) {
        let released = avl::release(self.root.take());
        if released > 0 {
            debug!(released, "cleared satellite network");
        }
    }

    /// Replace this tree's contents with a deep copy of `other`.
    ///
    /// The existing graph is released first. Assigning a tree to itself
    /// cannot be expressed, so no self-check is needed.
    pub fn assign_from(&mut self, other: &SatNet) {
        self.clear();
        self.root = other.root.clone();
        debug!(size = self.len(), "assigned satellite network");
    }
}

impl Drop for SatNet {
    fn drop(&mut self) {
        avl::release(self.root.take());
    }
}
