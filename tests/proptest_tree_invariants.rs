//! Property-based invariant tests for the satellite index.
//!
//! For any sequence of operations:
//!
//! 1. Every node keeps `|balance_factor| <= 1` and a correct cached height.
//! 2. Keys stay ordered within the valid id range.
//! 3. The index agrees with a `BTreeSet` model of which ids are present.
//! 4. Rejected inserts leave the tree unchanged.

use std::collections::BTreeSet;

use proptest::prelude::*;
use satnet_core::network::{SatNet, SatNetError};
use satnet_core::types::{SatState, Satellite, MAX_ID, MIN_ID};

#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    Remove(i32),
    Deorbit(i32),
    Sweep,
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn id_strategy() -> impl Strategy<Value = i32> {
    // Narrow window so operations collide often.
    MIN_ID..MIN_ID + 256
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => id_strategy().prop_map(Op::Insert),
        2 => id_strategy().prop_map(Op::Remove),
        2 => id_strategy().prop_map(Op::Deorbit),
        1 => Just(Op::Sweep),
    ]
}

fn model_ids(net: &SatNet) -> Vec<i32> {
    net.traverse_in_order().iter().map(|s| s.id()).collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1–3. Balance, ordering and model agreement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn operations_preserve_invariants(ops in prop::collection::vec(op_strategy(), 1..300)) {
        let mut net = SatNet::new();
        let mut present = BTreeSet::new();
        let mut deorbited = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(id) => {
                    let result = net.insert(&Satellite::with_id(id));
                    if present.insert(id) {
                        prop_assert!(result.is_ok());
                    } else {
                        prop_assert_eq!(result, Err(SatNetError::DuplicateKey(id)));
                    }
                }
                Op::Remove(id) => {
                    net.remove(id);
                    present.remove(&id);
                    deorbited.remove(&id);
                }
                Op::Deorbit(id) => {
                    let found = net.set_state(id, SatState::Deorbited);
                    prop_assert_eq!(found, present.contains(&id));
                    if found {
                        deorbited.insert(id);
                    }
                }
                Op::Sweep => {
                    let removed = net.remove_deorbited();
                    prop_assert_eq!(removed, deorbited.len());
                    for id in std::mem::take(&mut deorbited) {
                        present.remove(&id);
                    }
                }
            }

            prop_assert!(net.is_balanced(), "unbalanced: {}", net.dump_tree());
            prop_assert!(SatNet::is_bst_valid(net.root(), MIN_ID, MAX_ID));
        }

        prop_assert_eq!(model_ids(&net), present.into_iter().collect::<Vec<_>>());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Rejected inserts leave the tree unchanged
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn out_of_range_insert_is_rejected(
        seed in prop::collection::btree_set(id_strategy(), 0..64),
        bad in prop_oneof![i32::MIN..MIN_ID, (MAX_ID + 1)..=i32::MAX],
    ) {
        let mut net = SatNet::new();
        for &id in &seed {
            net.insert(&Satellite::with_id(id)).unwrap();
        }
        let before = net.dump_tree();

        prop_assert_eq!(net.insert(&Satellite::with_id(bad)), Err(SatNetError::OutOfRange(bad)));
        prop_assert_eq!(net.dump_tree(), before);
    }
}
