//! A mutable BST that stores duplicate keys as a per-node occurrence count.
//!
//! Every distinct key lives in exactly one node alongside a count of how many
//! times it has been inserted. Inserting an existing key increments that
//! count; deleting decrements it and only unlinks the node once the last
//! occurrence is gone. The tree also supports the usual classroom toolkit:
//! the three depth-first traversals, breadth-first levels, depth, mirroring
//! (in place and as a copy), deep copy, and leaf/parent enumeration.
//!
//! # Examples
//!
//! ```
//! use cbst::counted::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.insert(1);
//! tree.insert(1);
//!
//! // Both occurrences share a single node.
//! assert_eq!(tree.find(&1), Some(2));
//!
//! // Deleting removes one occurrence at a time.
//! tree.delete(&1);
//! assert_eq!(tree.find(&1), Some(1));
//! tree.delete(&1);
//! assert_eq!(tree.find(&1), None);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;

type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree in which each distinct key is stored once together
/// with the number of times it has been inserted. This can be used for
/// inserting, finding, and deleting keys with multiset semantics: repeated
/// insertions of a key never allocate a second node for it.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    root: Link<K>,
}

#[derive(Clone, Debug)]
struct Node<K> {
    key: K,
    count: usize,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Potentially finds the occurrence count for the given key in this
    /// tree. If no node has the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use cbst::counted::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(2));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<usize>
    where
        K: Ord,
    {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            match key.cmp(&n.key) {
                Ordering::Less => node = n.left.as_deref(),
                Ordering::Equal => return Some(n.count),
                Ordering::Greater => node = n.right.as_deref(),
            }
        }
        None
    }

    /// Inserts one occurrence of the given key. If the key is already in the
    /// tree its node's count is incremented; otherwise a new single-occurrence
    /// node is created at the appropriate empty child position.
    ///
    /// # Examples
    ///
    /// ```
    /// use cbst::counted::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.find(&1), Some(1));
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.find(&1), Some(2));
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        insert_into(&mut self.root, key);
    }

    /// Deletes one occurrence of the given key from the tree. If the tree
    /// does not contain a node with the key, nothing happens. If the node
    /// holds more than one occurrence its count is decremented and the
    /// structure is untouched. Deleting the last occurrence unlinks the node
    /// using standard BST deletion.
    ///
    /// When the deleted node has two children it is replaced by its in-order
    /// successor (the minimum of its right subtree), and the successor node
    /// is detached from the right subtree wholesale. The successor's entire
    /// count moves with it, so the donor node must be fully removed rather
    /// than decremented.
    ///
    /// # Examples
    ///
    /// ```
    /// use cbst::counted::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// tree.delete(&1);
    /// assert_eq!(tree.find(&1), Some(1));
    ///
    /// tree.delete(&1);
    /// assert_eq!(tree.find(&1), None);
    ///
    /// // Deleting an absent key is a no-op, not an error.
    /// tree.delete(&42);
    /// ```
    pub fn delete(&mut self, key: &K)
    where
        K: Ord,
    {
        self.root = remove_one(self.root.take(), key);
    }

    /// Returns the in-order sequence of `(key, count)` pairs. Because of the
    /// BST ordering invariant the keys come out in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cbst::counted::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3, 1] {
    ///     tree.insert(key);
    /// }
    ///
    /// assert_eq!(tree.inorder(), vec![(&1, 2), (&2, 1), (&3, 1)]);
    /// ```
    pub fn inorder(&self) -> Vec<(&K, usize)> {
        let mut out = Vec::new();
        collect_inorder(&self.root, &mut out);
        out
    }

    /// Returns the pre-order (parent, left, right) sequence of
    /// `(key, count)` pairs.
    pub fn preorder(&self) -> Vec<(&K, usize)> {
        let mut out = Vec::new();
        collect_preorder(&self.root, &mut out);
        out
    }

    /// Returns the post-order (left, right, parent) sequence of
    /// `(key, count)` pairs.
    pub fn postorder(&self) -> Vec<(&K, usize)> {
        let mut out = Vec::new();
        collect_postorder(&self.root, &mut out);
        out
    }

    /// Returns the depth of the tree: the number of nodes on the longest
    /// path from the root to a leaf. An empty tree has depth 0 and a
    /// single-node tree has depth 1.
    pub fn depth(&self) -> usize {
        depth_of(&self.root)
    }

    /// Converts the tree to its mirror image in place by swapping the left
    /// and right children of every node. Afterwards `inorder` yields keys in
    /// descending order. Applying this twice restores the original tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use cbst::counted::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key);
    /// }
    ///
    /// tree.mirror_in_place();
    /// assert_eq!(tree.inorder(), vec![(&3, 1), (&2, 1), (&1, 1)]);
    /// ```
    pub fn mirror_in_place(&mut self) {
        mirror_at(&mut self.root);
    }

    /// Returns a new tree that is the structural mirror of this one, leaving
    /// this tree untouched. The children are swapped while copying, so this
    /// is a single pass rather than a clone followed by
    /// [`Tree::mirror_in_place`].
    pub fn mirror_copy(&self) -> Self
    where
        K: Clone,
    {
        Self {
            root: self.root.as_deref().map(mirror_node),
        }
    }

    /// Returns the keys of all leaf nodes (nodes with no children) in
    /// pre-order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cbst::counted::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [50, 30, 20, 40, 70, 60, 80] {
    ///     tree.insert(key);
    /// }
    ///
    /// assert_eq!(tree.leaf_nodes(), vec![&20, &40, &60, &80]);
    /// ```
    pub fn leaf_nodes(&self) -> Vec<&K> {
        let mut out = Vec::new();
        collect_leaves(&self.root, &mut out);
        out
    }

    /// Returns, in pre-order, one `(parent key, left child key, right child
    /// key)` record for every node with at least one child. Leaf nodes are
    /// omitted.
    pub fn parent_child_pairs(&self) -> Vec<(&K, Option<&K>, Option<&K>)> {
        let mut out = Vec::new();
        collect_parents(&self.root, &mut out);
        out
    }

    /// Returns the tree level by level, root first, as a breadth-first
    /// traversal. Each level lists its `(key, count)` pairs left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use cbst::counted::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key);
    /// }
    ///
    /// assert_eq!(
    ///     tree.level_order(),
    ///     vec![vec![(&2, 1)], vec![(&1, 1), (&3, 1)]],
    /// );
    /// ```
    pub fn level_order(&self) -> Vec<Vec<(&K, usize)>> {
        let mut levels = Vec::new();
        let mut queue: VecDeque<&Node<K>> = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back(root);
        }

        while !queue.is_empty() {
            let level_size = queue.len();
            let mut level = Vec::with_capacity(level_size);
            for _ in 0..level_size {
                let node = queue.pop_front().expect("level_size nodes are queued");
                level.push((&node.key, node.count));
                if let Some(left) = node.left.as_deref() {
                    queue.push_back(left);
                }
                if let Some(right) = node.right.as_deref() {
                    queue.push_back(right);
                }
            }
            levels.push(level);
        }

        levels
    }

    /// Removes every node from the tree, leaving it empty.
    pub fn clear(&mut self) {
        self.root = None;
    }
}

fn insert_into<K>(link: &mut Link<K>, key: K)
where
    K: Ord,
{
    match link {
        None => {
            *link = Some(Box::new(Node {
                key,
                count: 1,
                left: None,
                right: None,
            }))
        }
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => insert_into(&mut node.left, key),
            Ordering::Equal => node.count += 1,
            Ordering::Greater => insert_into(&mut node.right, key),
        },
    }
}

/// Deletes one occurrence of `key` from the subtree rooted at `link` and
/// returns the (possibly replaced) subtree root.
fn remove_one<K>(link: Link<K>, key: &K) -> Link<K>
where
    K: Ord,
{
    let mut node = match link {
        Some(node) => node,
        None => return None,
    };

    match key.cmp(&node.key) {
        Ordering::Less => {
            node.left = remove_one(node.left.take(), key);
            Some(node)
        }
        Ordering::Greater => {
            node.right = remove_one(node.right.take(), key);
            Some(node)
        }
        Ordering::Equal => {
            if node.count > 1 {
                node.count -= 1;
                return Some(node);
            }

            // Last occurrence - unlink the node itself.
            match (node.left.take(), node.right.take()) {
                (None, right) => right,
                (left, None) => left,
                (left, Some(right)) => {
                    // Two children: splice in the in-order successor. The
                    // successor keeps its whole count, so it leaves the right
                    // subtree wholesale rather than being decremented there.
                    let (mut successor, rest) = detach_min(right);
                    successor.left = left;
                    successor.right = rest;
                    Some(successor)
                }
            }
        }
    }
}

/// Detaches the minimum node of the subtree rooted at `node`, returning it
/// (children cleared) along with what remains of the subtree. The minimum has
/// no left child, so it is always replaced by its right child.
fn detach_min<K>(mut node: Box<Node<K>>) -> (Box<Node<K>>, Link<K>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (node, rest)
        }
        Some(left) => {
            let (min, rest) = detach_min(left);
            node.left = rest;
            (min, Some(node))
        }
    }
}

fn collect_inorder<'a, K>(link: &'a Link<K>, out: &mut Vec<(&'a K, usize)>) {
    if let Some(node) = link {
        collect_inorder(&node.left, out);
        out.push((&node.key, node.count));
        collect_inorder(&node.right, out);
    }
}

fn collect_preorder<'a, K>(link: &'a Link<K>, out: &mut Vec<(&'a K, usize)>) {
    if let Some(node) = link {
        out.push((&node.key, node.count));
        collect_preorder(&node.left, out);
        collect_preorder(&node.right, out);
    }
}

fn collect_postorder<'a, K>(link: &'a Link<K>, out: &mut Vec<(&'a K, usize)>) {
    if let Some(node) = link {
        collect_postorder(&node.left, out);
        collect_postorder(&node.right, out);
        out.push((&node.key, node.count));
    }
}

fn depth_of<K>(link: &Link<K>) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + depth_of(&node.left).max(depth_of(&node.right)),
    }
}

fn mirror_at<K>(link: &mut Link<K>) {
    if let Some(node) = link {
        std::mem::swap(&mut node.left, &mut node.right);
        mirror_at(&mut node.left);
        mirror_at(&mut node.right);
    }
}

fn mirror_node<K>(node: &Node<K>) -> Box<Node<K>>
where
    K: Clone,
{
    Box::new(Node {
        key: node.key.clone(),
        count: node.count,
        left: node.right.as_deref().map(mirror_node),
        right: node.left.as_deref().map(mirror_node),
    })
}

fn collect_leaves<'a, K>(link: &'a Link<K>, out: &mut Vec<&'a K>) {
    if let Some(node) = link {
        if node.left.is_none() && node.right.is_none() {
            out.push(&node.key);
        }
        collect_leaves(&node.left, out);
        collect_leaves(&node.right, out);
    }
}

fn collect_parents<'a, K>(
    link: &'a Link<K>,
    out: &mut Vec<(&'a K, Option<&'a K>, Option<&'a K>)>,
) {
    if let Some(node) = link {
        let left = node.left.as_deref().map(|n| &n.key);
        let right = node.right.as_deref().map(|n| &n.key);
        if left.is_some() || right.is_some() {
            out.push((&node.key, left, right));
        }
        collect_parents(&node.left, out);
        collect_parents(&node.right, out);
    }
}
