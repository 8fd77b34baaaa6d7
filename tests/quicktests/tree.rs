use linked_bst::{NodeRef, Tree};

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut HashSet<K>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                bst.delete(k);
                set.remove(k);
            }
        }
    }
}

/// Collects every key in the subtree under `node` while checking that each one is strictly
/// between `lower` and `upper` and that each child points back at its parent.
fn ordered_and_linked(node: NodeRef<'_, i16>, lower: Option<i16>, upper: Option<i16>) -> bool {
    let value = *node.value();
    if lower.map_or(false, |lower| value <= lower) || upper.map_or(false, |upper| value >= upper) {
        return false;
    }

    let left_ok = node.left().map_or(true, |left| {
        left.parent() == Some(node) && ordered_and_linked(left, lower, Some(value))
    });
    let right_ok = node.right().map_or(true, |right| {
        right.parent() == Some(node) && ordered_and_linked(right, Some(value), upper)
    });
    left_ok && right_ok
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = HashSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len()
        && set.iter().all(|key| tree.contains(key))
        && tree.check_invariants().is_ok()
}

#[quickcheck]
fn len_counts_distinct_values(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.iter().copied());
    let distinct: HashSet<_> = xs.into_iter().collect();

    tree.len() == distinct.len()
}

#[quickcheck]
fn search_order_and_parent_links(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
    let mut tree = Tree::from_values(xs);
    for delete in &deletes {
        tree.delete(delete);
    }

    tree.root()
        .map_or(true, |root| root.parent().is_none() && ordered_and_linked(root, None, None))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.iter().copied());

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.iter().copied());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn delete_present_shrinks_by_one(xs: Vec<i8>, pick: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let mut tree = Tree::from_values(xs.iter().copied());
    let target = xs[pick % xs.len()];
    let before = tree.len();

    tree.delete(&target) == Some(target) && !tree.contains(&target) && tree.len() == before - 1
}

#[quickcheck]
fn delete_absent_is_a_no_op(xs: Vec<i8>, w: i8) -> bool {
    if xs.contains(&w) {
        return true;
    }
    let mut tree = Tree::from_values(xs.iter().copied());
    let before = tree.len();

    tree.delete(&w).is_none() && tree.len() == before && xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn duplicate_insert_keeps_len(xs: Vec<i8>) -> bool {
    let mut tree = Tree::from_values(xs.iter().copied());
    let before = tree.len();
    for x in &xs {
        tree.insert(*x);
    }

    tree.len() == before
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::from_values(xs.iter().copied());
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && tree.len() == still_present.iter().collect::<HashSet<_>>().len()
}
