use cbst::counted::Tree;

use std::collections::HashMap;

use crate::Op;

/// Applies a set of operations to a tree and a multiset kept in a hashmap.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same occurrence count for every key.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, counts: &mut HashMap<K, usize>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                *counts.entry(k.clone()).or_insert(0) += 1;
            }
            Op::Remove(k) => {
                bst.delete(k);
                if let Some(count) = counts.get_mut(k) {
                    *count -= 1;
                    if *count == 0 {
                        counts.remove(k);
                    }
                }
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut counts = HashMap::new();

        do_ops(&ops, &mut tree, &mut counts);
        tree.inorder().len() == counts.len()
            && counts.keys().all(|key| tree.find(key) == counts.get(key).copied())
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| {
            let expected = xs.iter().filter(|y| *y == x).count();
            tree.find(x) == Some(expected)
        })
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        nots.iter()
            .filter(|&x| !xs.contains(x))
            .all(|x| tree.find(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        let mut counts = HashMap::new();
        for x in &xs {
            tree.insert(*x);
            *counts.entry(*x).or_insert(0usize) += 1;
        }
        for delete in &deletes {
            tree.delete(delete);
            if let Some(count) = counts.get_mut(delete) {
                *count -= 1;
                if *count == 0 {
                    counts.remove(delete);
                }
            }
        }

        counts.iter().all(|(key, count)| tree.find(key) == Some(*count))
            && deletes
                .iter()
                .filter(|&key| !counts.contains_key(key))
                .all(|key| tree.find(key).is_none())
    }
}

quickcheck::quickcheck! {
    fn mirror_reverses_inorder(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        let mut forward: Vec<(i8, usize)> =
            tree.inorder().into_iter().map(|(k, c)| (*k, c)).collect();
        tree.mirror_in_place();
        let backward: Vec<(i8, usize)> =
            tree.inorder().into_iter().map(|(k, c)| (*k, c)).collect();

        forward.reverse();
        forward == backward
    }
}

quickcheck::quickcheck! {
    fn mirror_copy_agrees_with_clone_then_mirror(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        let mirrored = tree.mirror_copy();
        let mut cloned = tree.clone();
        cloned.mirror_in_place();

        mirrored.level_order() == cloned.level_order()
            && mirrored.preorder() == cloned.preorder()
    }
}

quickcheck::quickcheck! {
    fn mutating_a_clone_leaves_the_source_alone(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let before: Vec<(i8, usize)> =
            tree.inorder().into_iter().map(|(k, c)| (*k, c)).collect();

        let mut copy = tree.clone();
        for delete in &deletes {
            copy.delete(delete);
        }
        copy.insert(0);

        let after: Vec<(i8, usize)> =
            tree.inorder().into_iter().map(|(k, c)| (*k, c)).collect();
        before == after
    }
}
