//! Height bookkeeping, rotations and structural edits on owned subtrees.
//!
//! Every function takes ownership of a subtree and hands back its new root,
//! so callers never need to know whether the node they started from is still
//! on top.

use std::cmp::Ordering;

use tracing::trace;

use crate::types::{Link, SatState, Satellite};

pub(crate) fn height(link: &Link) -> i32 {
    link.as_ref().map_or(0, |node| node.height)
}

pub(crate) fn update_height(node: &mut Satellite) {
    node.height = 1 + height(&node.left).max(height(&node.right));
}

pub(crate) fn balance_factor(node: &Satellite) -> i32 {
    height(&node.left) - height(&node.right)
}

fn rotate_right(mut node: Box<Satellite>) -> Box<Satellite> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    trace!(id = node.id, pivot = pivot.id, "rotate right");

    node.left = pivot.right.take();
    update_height(&mut node);
    pivot.right = Some(node);
    update_height(&mut pivot);
    pivot
}

fn rotate_left(mut node: Box<Satellite>) -> Box<Satellite> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    trace!(id = node.id, pivot = pivot.id, "rotate left");

    node.right = pivot.left.take();
    update_height(&mut node);
    pivot.left = Some(node);
    update_height(&mut pivot);
    pivot
}

/// Recompute the height of `node` and rotate if it is out of balance.
///
/// Handles a height difference of at most 2 between the children, which is
/// all a single insert or delete below `node` can cause.
pub(crate) fn rebalance(mut node: Box<Satellite>) -> Box<Satellite> {
    update_height(&mut node);
    let balance = balance_factor(&node);

    if balance > 1 {
        if node.left.as_deref().map_or(0, balance_factor) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if balance < -1 {
        if node.right.as_deref().map_or(0, balance_factor) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

/// Hang `left` and `right` under `mid`, whatever their height difference.
///
/// Both inputs must be valid AVL trees with every key of `left` below
/// `mid.id` and every key of `right` above it. Within a difference of 2 this
/// is exactly `rebalance`; beyond that `mid` is pushed down the taller
/// side's inner spine until it meets a subtree of matching height.
pub(crate) fn join(left: Link, mut mid: Box<Satellite>, right: Link) -> Box<Satellite> {
    let (left_height, right_height) = (height(&left), height(&right));

    match (left, right) {
        (Some(mut tall), right) if left_height > right_height + 2 => {
            tall.right = Some(join(tall.right.take(), mid, right));
            rebalance(tall)
        }
        (left, Some(mut tall)) if right_height > left_height + 2 => {
            tall.left = Some(join(left, mid, tall.left.take()));
            rebalance(tall)
        }
        (left, right) => {
            mid.left = left;
            mid.right = right;
            rebalance(mid)
        }
    }
}

/// Insert a fresh leaf. An equal id leaves the subtree untouched.
pub(crate) fn insert(link: Link, leaf: Box<Satellite>) -> Box<Satellite> {
    let Some(mut node) = link else {
        return leaf;
    };

    match leaf.id.cmp(&node.id) {
        Ordering::Less => node.left = Some(insert(node.left.take(), leaf)),
        Ordering::Greater => node.right = Some(insert(node.right.take(), leaf)),
        Ordering::Equal => return node,
    }

    rebalance(node)
}

/// Remove the record with `id`, if present.
pub(crate) fn remove(link: Link, id: i32) -> Link {
    let mut node = link?;

    match id.cmp(&node.id) {
        Ordering::Less => node.left = remove(node.left.take(), id),
        Ordering::Greater => node.right = remove(node.right.take(), id),
        Ordering::Equal => return detach(node),
    }

    Some(rebalance(node))
}

/// Drop `node` and return whatever should take its place.
///
/// With fewer than two children the remaining child moves up. Otherwise the
/// in-order successor is unlinked from the right subtree and takes the
/// node's position, carrying its own record with it.
pub(crate) fn detach(mut node: Box<Satellite>) -> Link {
    match (node.left.take(), node.right.take()) {
        (None, only) | (only, None) => only,
        (left, Some(right)) => {
            let (rest, successor) = take_min(right);
            Some(join(left, successor, rest))
        }
    }
}

/// Unlink the leftmost node of `node`'s subtree.
///
/// Returns the remaining subtree and the detached node, which comes back
/// with no children.
pub(crate) fn take_min(mut node: Box<Satellite>) -> (Link, Box<Satellite>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (rest, node)
        }
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            (Some(rebalance(node)), min)
        }
    }
}

/// Post-order sweep removing every deorbited record. Adds the number of
/// removed records to `removed`.
pub(crate) fn remove_deorbited(link: Link, removed: &mut usize) -> Link {
    let mut node = link?;

    let left = remove_deorbited(node.left.take(), removed);
    let right = remove_deorbited(node.right.take(), removed);

    if node.state == SatState::Deorbited {
        *removed += 1;
        node.left = left;
        node.right = right;
        return detach(node);
    }

    Some(join(left, node, right))
}

pub(crate) fn find(link: &Link, id: i32) -> Option<&Satellite> {
    let mut current = link.as_deref();
    while let Some(node) = current {
        current = match id.cmp(&node.id) {
            Ordering::Less => node.left.as_deref(),
            Ordering::Greater => node.right.as_deref(),
            Ordering::Equal => return Some(node),
        };
    }
    None
}

pub(crate) fn find_mut(link: &mut Link, id: i32) -> Option<&mut Satellite> {
    let mut current = link.as_deref_mut();
    while let Some(node) = current {
        current = match id.cmp(&node.id) {
            Ordering::Less => node.left.as_deref_mut(),
            Ordering::Greater => node.right.as_deref_mut(),
            Ordering::Equal => return Some(node),
        };
    }
    None
}

pub(crate) fn in_order<'a>(link: &'a Link, out: &mut Vec<&'a Satellite>) {
    if let Some(node) = link {
        in_order(&node.left, out);
        out.push(node);
        in_order(&node.right, out);
    }
}

pub(crate) fn count(link: &Link) -> usize {
    link.as_ref()
        .map_or(0, |node| 1 + count(&node.left) + count(&node.right))
}

/// Release every node of the subtree, children before parents. Returns the
/// number of nodes released.
pub(crate) fn release(link: Link) -> usize {
    let mut pending: Vec<Box<Satellite>> = link.into_iter().collect();
    let mut released = Vec::with_capacity(pending.len());

    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
        released.push(node);
    }

    // Each child was pushed after its parent, so popping frees it first.
    let total = released.len();
    while let Some(node) = released.pop() {
        drop(node);
    }
    total
}
