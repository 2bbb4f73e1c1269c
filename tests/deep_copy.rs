use satnet_core::network::SatNet;
use satnet_core::types::{SatState, Satellite};

fn network_of(ids: impl IntoIterator<Item = i32>) -> SatNet {
    let mut net = SatNet::new();
    for id in ids {
        net.insert(&Satellite::with_id(id)).unwrap();
    }
    net
}

#[test]
fn invariant_assignment_copies_structure() {
    let source = network_of(10000..10100);
    let mut copy = SatNet::new();

    copy.assign_from(&source);

    assert_eq!(copy.dump_tree(), source.dump_tree(), "shape and heights match");
    assert_eq!(copy.list_satellites(), source.list_satellites());
    assert!(copy.is_balanced());
}

#[test]
fn invariant_copies_are_independent() {
    let mut a = network_of(10000..10050);
    let mut b = SatNet::new();
    b.assign_from(&a);

    a.insert(&Satellite::with_id(20000)).unwrap();
    assert!(a.find(20000));
    assert!(!b.find(20000));

    b.insert(&Satellite::with_id(30000)).unwrap();
    assert!(b.find(30000));
    assert!(!a.find(30000));

    a.remove(10010);
    assert!(b.find(10010));

    b.set_state(10020, SatState::Deorbited);
    assert_eq!(a.get(10020).unwrap().state(), SatState::Active);
}

#[test]
fn invariant_assignment_replaces_existing_contents() {
    let source = network_of([10001, 10002, 10003]);
    let mut target = network_of([50000, 50001, 50002, 50003]);

    target.assign_from(&source);

    let ids: Vec<i32> = target.traverse_in_order().iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec![10001, 10002, 10003]);
    assert!(!target.find(50000));
}

#[test]
fn invariant_assignment_from_empty_clears() {
    let empty = SatNet::new();
    let mut target = network_of([10001, 10002]);

    target.assign_from(&empty);

    assert!(target.is_empty());
}

#[test]
fn invariant_clone_is_deep() {
    let a = network_of(10000..10020);
    let mut b = a.clone();

    b.remove(10005);
    b.clear();

    assert_eq!(a.len(), 20);
    assert!(a.find(10005));
    assert!(a.is_balanced());
}
