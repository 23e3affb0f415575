use crate::treap::node::Node;
use std::borrow::Borrow;
use std::cmp::{self, Ordering};

pub type Tree<T> = Option<Box<Node<T>>>;

// `pivot` must be the former left child of `root`, already detached from it.
pub fn rotate_right<T>(mut root: Box<Node<T>>, mut pivot: Box<Node<T>>) -> Box<Node<T>> {
    root.left = pivot.right.take();
    pivot.right = Some(root);
    pivot
}

// `pivot` must be the former right child of `root`, already detached from it.
pub fn rotate_left<T>(mut root: Box<Node<T>>, mut pivot: Box<Node<T>>) -> Box<Node<T>> {
    root.right = pivot.left.take();
    pivot.left = Some(root);
    pivot
}

pub fn find<'a, T, Q>(tree: &'a Tree<T>, key: &Q) -> Option<&'a Node<T>>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| match key.cmp(node.key.borrow()) {
        Ordering::Less => find(&node.left, key),
        Ordering::Greater => find(&node.right, key),
        Ordering::Equal => Some(&**node),
    })
}

pub fn contains<T, Q>(tree: &Tree<T>, key: &Q) -> bool
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    find(tree, key).is_some()
}

pub fn get<'a, T, Q>(tree: &'a Tree<T>, key: &Q) -> Option<&'a T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    find(tree, key).map(|node| &node.key)
}

/// Inserts `new_node` into `tree` and returns the new root of the subtree, along with whether the
/// node was added. If the key already exists, the subtree is returned unchanged and `new_node` is
/// dropped.
///
/// After each recursive call the child that received the node is compared against its parent. A
/// child with a higher priority is rotated above it, so the new node climbs one level per frame
/// until the heap property holds again.
pub fn insert<T: Ord>(tree: Tree<T>, new_node: Node<T>) -> (Box<Node<T>>, bool) {
    let mut node = match tree {
        Some(node) => node,
        None => return (Box::new(new_node), true),
    };

    match new_node.key.cmp(&node.key) {
        Ordering::Less => {
            let (left, inserted) = insert(node.left.take(), new_node);
            if left.priority > node.priority {
                (rotate_right(node, left), inserted)
            } else {
                node.left = Some(left);
                (node, inserted)
            }
        },
        Ordering::Greater => {
            let (right, inserted) = insert(node.right.take(), new_node);
            if right.priority > node.priority {
                (rotate_left(node, right), inserted)
            } else {
                node.right = Some(right);
                (node, inserted)
            }
        },
        Ordering::Equal => (node, false),
    }
}

/// Removes `key` from `tree` and returns the new root of the subtree, along with the removed key.
///
/// A target with two children is rotated towards the child with the higher priority, which keeps
/// the nodes above it heap-ordered, and the removal continues in the subtree it moved into. Once
/// the target has at most one child it is replaced by that child.
pub fn remove<T, Q>(tree: Tree<T>, key: &Q) -> (Tree<T>, Option<T>)
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut node = match tree {
        Some(node) => node,
        None => return (None, None),
    };

    match key.cmp(node.key.borrow()) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), key);
            node.left = left;
            (Some(node), removed)
        },
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), key);
            node.right = right;
            (Some(node), removed)
        },
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, child) | (child, None) => {
                let Node { key, .. } = *node;
                (child, Some(key))
            },
            (Some(left), Some(right)) => {
                if left.priority > right.priority {
                    node.right = Some(right);
                    let mut root = rotate_right(node, left);
                    let (right, removed) = remove(root.right.take(), key);
                    root.right = right;
                    (Some(root), removed)
                } else {
                    node.left = Some(left);
                    let mut root = rotate_left(node, right);
                    let (left, removed) = remove(root.left.take(), key);
                    root.left = left;
                    (Some(root), removed)
                }
            },
        },
    }
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        Some(node) => 1 + cmp::max(height(&node.left), height(&node.right)),
        None => 0,
    }
}

/// Returns `true` if every key lies strictly between the keys of its ancestors on the
/// corresponding sides, and no node has a higher priority than its parent.
#[cfg(test)]
pub fn has_treap_properties<T: Ord>(tree: &Tree<T>) -> bool {
    fn check<'a, T: Ord>(
        tree: &'a Tree<T>,
        lower: Option<&'a T>,
        upper: Option<&'a T>,
        max_priority: u32,
    ) -> bool {
        match tree {
            None => true,
            Some(node) => {
                lower.map_or(true, |lower| *lower < node.key)
                    && upper.map_or(true, |upper| node.key < *upper)
                    && node.priority <= max_priority
                    && check(&node.left, lower, Some(&node.key), node.priority)
                    && check(&node.right, Some(&node.key), upper, node.priority)
            },
        }
    }
    check(tree, None, None, u32::MAX)
}
