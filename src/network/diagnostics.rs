// Read-only views used for verification and printing.
// Nothing here mutates the tree.

use std::fmt::Write;

use super::avl;
use super::satnet::SatNet;
use crate::types::{Satellite, MAX_ID, MIN_ID};

impl SatNet {
    /// Left height minus right height. An absent node has factor 0.
    pub fn balance_factor(node: Option<&Satellite>) -> i32 {
        node.map_or(0, avl::balance_factor)
    }

    /// Whether every key under `node` lies in `[min, max]`, narrowing the
    /// bounds to `key - 1` on the left and `key + 1` on the right.
    pub fn is_bst_valid(node: Option<&Satellite>, min: i32, max: i32) -> bool {
        let Some(node) = node else {
            return true;
        };

        let key = node.id();
        if key < min || key > max {
            return false;
        }

        Self::is_bst_valid(node.left(), min, key - 1)
            && Self::is_bst_valid(node.right(), key + 1, max)
    }

    /// Ordering check over the whole tree and the full id range.
    pub fn is_valid(&self) -> bool {
        Self::is_bst_valid(self.root(), MIN_ID, MAX_ID)
    }

    /// Every node has `|balance_factor| <= 1` and an up-to-date height.
    pub fn is_balanced(&self) -> bool {
        fn checked_height(node: Option<&Satellite>) -> Option<i32> {
            let Some(node) = node else {
                return Some(0);
            };
            let left = checked_height(node.left())?;
            let right = checked_height(node.right())?;
            let height = 1 + left.max(right);
            ((left - right).abs() <= 1 && node.height() == height).then_some(height)
        }

        checked_height(self.root()).is_some()
    }

    /// Parenthesized in-order dump of `id:height` pairs.
    pub fn dump_tree(&self) -> String {
        fn dump(node: Option<&Satellite>, out: &mut String) {
            if let Some(node) = node {
                out.push('(');
                dump(node.left(), out);
                let _ = write!(out, "{}:{}", node.id(), node.height());
                dump(node.right(), out);
                out.push(')');
            }
        }

        let mut out = String::new();
        dump(self.root(), &mut out);
        out
    }

    /// One `id: state: inclination: altitude` line per satellite, by id.
    pub fn list_satellites(&self) -> String {
        let mut out = String::new();
        for sat in self.traverse_in_order() {
            let _ = writeln!(
                out,
                "{}: {}: {}: {}",
                sat.id(),
                sat.state(),
                sat.inclination(),
                sat.altitude()
            );
        }
        out
    }

    /// Pretty JSON array of all satellites in id order.
    pub fn listing_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.traverse_in_order())
    }
}
