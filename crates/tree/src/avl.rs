//! AVL dictionary engine
//!
//! A self-balancing binary search tree from string keys to arbitrary
//! values, ordered by an injected [`Collation`] policy. Mutation happens
//! only through [`AvlTree::insert`]; there is no delete. Rebalancing keeps
//! every node's child heights within one of each other, so the depth of
//! any descent (including the insert recursion) stays O(log n).
//!
//! The insert recursion follows the returned-subtree-root pattern: each
//! call hands back the (possibly rebalanced) root of the subtree it was
//! given, and the caller reattaches it. No parent links, no cycles.
//!
//! # Example
//!
//! ```
//! use olelo_tree::{AvlTree, Lexicographic};
//!
//! let mut tree = AvlTree::with_collation(Lexicographic);
//! tree.insert("30", 'A');
//! tree.insert("20", 'B');
//! tree.insert("10", 'C');
//! assert_eq!(tree.first(), Some(&'C'));
//! assert_eq!(tree.predecessor("30"), Some(&'B'));
//! ```

use std::cmp::Ordering;

use olelo_core::{Error, Result};

use crate::collation::{Collation, HawaiianCollation};
use crate::iter::Iter;
use crate::node::Node;

/// AVL-balanced map from string keys to values of type `V`
///
/// Ordering is defined entirely by the collation policy `C`; keys that the
/// policy considers equal are one key. The default policy is
/// [`HawaiianCollation`].
pub struct AvlTree<V, C: Collation = HawaiianCollation> {
    root: Option<Box<Node<V>>>,
    size: usize,
    collation: C,
}

impl<V> AvlTree<V> {
    /// Create an empty tree with the default Hawaiian collation
    pub fn new() -> Self {
        Self::with_collation(HawaiianCollation)
    }
}

impl<V> Default for AvlTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, C: Collation> AvlTree<V, C> {
    /// Create an empty tree ordered by `collation`
    pub fn with_collation(collation: C) -> Self {
        AvlTree {
            root: None,
            size: 0,
            collation,
        }
    }

    /// Insert a key/value pair, replacing the value if the key exists
    ///
    /// A structural insert rebalances every ancestor on the way back up and
    /// grows the size by one. Replacing an existing key changes only the
    /// payload, never the shape or the size.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let (root, inserted) = insert_at(self.root.take(), key.into(), value, &self.collation);
        self.root = Some(root);
        if inserted {
            self.size += 1;
        }
    }

    /// Whether a key equal to `key` exists
    pub fn contains(&self, key: &str) -> bool {
        self.locate(key).is_some()
    }

    /// The value stored under `key`, or `None`
    pub fn get(&self, key: &str) -> Option<&V> {
        self.locate(key).map(|node| &node.value)
    }

    /// The value stored under `key`, or [`Error::KeyNotFound`]
    ///
    /// The one lookup that treats a miss as a hard failure: use it where
    /// the key is unconditionally expected to be present.
    pub fn get_required(&self, key: &str) -> Result<&V> {
        self.get(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    /// The value under the least key, or `None` for an empty tree
    pub fn first(&self) -> Option<&V> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// The value under the greatest key, or `None` for an empty tree
    pub fn last(&self) -> Option<&V> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// The value under the greatest key strictly less than `key`
    ///
    /// `key` itself need not be present. Descends left on comparator ≤ 0;
    /// on > 0 records the current node as candidate and descends right.
    pub fn predecessor(&self, key: &str) -> Option<&V> {
        let mut node = self.root.as_deref();
        let mut candidate = None;
        while let Some(n) = node {
            if self.collation.compare(key, &n.key) == Ordering::Greater {
                candidate = Some(&n.value);
                node = n.right.as_deref();
            } else {
                node = n.left.as_deref();
            }
        }
        candidate
    }

    /// The value under the least key strictly greater than `key`
    pub fn successor(&self, key: &str) -> Option<&V> {
        let mut node = self.root.as_deref();
        let mut candidate = None;
        while let Some(n) = node {
            if self.collation.compare(key, &n.key) == Ordering::Less {
                candidate = Some(&n.value);
                node = n.left.as_deref();
            } else {
                node = n.right.as_deref();
            }
        }
        candidate
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no keys
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Height of the tree (0 when empty)
    pub fn height(&self) -> u32 {
        Node::height_of(&self.root)
    }

    /// Lazy in-order iteration in ascending collation order
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self.root.as_deref())
    }

    fn locate(&self, key: &str) -> Option<&Node<V>> {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            match self.collation.compare(key, &n.key) {
                Ordering::Equal => return Some(n),
                Ordering::Less => node = n.left.as_deref(),
                Ordering::Greater => node = n.right.as_deref(),
            }
        }
        None
    }
}

impl<'a, V, C: Collation> IntoIterator for &'a AvlTree<V, C> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

/// Recursive insert returning the (possibly rebalanced) subtree root and
/// whether a node was structurally added
fn insert_at<V, C: Collation>(
    node: Option<Box<Node<V>>>,
    key: String,
    value: V,
    collation: &C,
) -> (Box<Node<V>>, bool) {
    let Some(mut node) = node else {
        return (Box::new(Node::new(key, value)), true);
    };
    let inserted = match collation.compare(&key, &node.key) {
        Ordering::Equal => {
            node.value = value;
            false
        }
        Ordering::Less => {
            let (child, inserted) = insert_at(node.left.take(), key, value, collation);
            node.left = Some(child);
            inserted
        }
        Ordering::Greater => {
            let (child, inserted) = insert_at(node.right.take(), key, value, collation);
            node.right = Some(child);
            inserted
        }
    };
    if inserted {
        node = rebalance(node);
    }
    (node, inserted)
}

/// Restore height and balance invariants at `node` after an insert below it
///
/// The rotation case is decided by the child's balance factor: a left-heavy
/// node with a balanced-or-left-heavy left child takes a single right
/// rotation; with a right-heavy left child, the child is left-rotated
/// first. Symmetric on the right.
fn rebalance<V>(mut node: Box<Node<V>>) -> Box<Node<V>> {
    node.recompute_height();
    let balance = node.balance();
    if balance > 1 {
        if node.left.as_ref().map_or(0, |left| left.balance()) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if balance < -1 {
        if node.right.as_ref().map_or(0, |right| right.balance()) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    }
}

/// Promote the right child; the demoted node adopts the child's left
/// subtree. Heights are recomputed demoted-node-first.
fn rotate_left<V>(mut node: Box<Node<V>>) -> Box<Node<V>> {
    // Callers only rotate when the pivot child exists; stay total anyway.
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.recompute_height();
    pivot.left = Some(node);
    pivot.recompute_height();
    pivot
}

/// Promote the left child; mirror of [`rotate_left`]
fn rotate_right<V>(mut node: Box<Node<V>>) -> Box<Node<V>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.recompute_height();
    pivot.right = Some(node);
    pivot.recompute_height();
    pivot
}
