use crate::priority::{PriorityGenerator, RandomPriority};
use crate::treap::node::Node;
use crate::treap::tree;
use log::trace;
use std::borrow::Borrow;

/// An ordered set implemented by a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. Each
/// node has a key and a priority. The key of any node is greater than all keys in its left subtree
/// and less than all keys occuring in its right subtree. The priority of a node is greater than or
/// equal to the priority of all nodes in its subtrees. By randomly generating priorities, the
/// expected height of the tree is proportional to the logarithm of the number of keys.
///
/// Priorities come from a [`PriorityGenerator`]. `TreapSet::new` uses uniformly random priorities;
/// `TreapSet::with_generator` accepts any other source, including a closure.
///
/// # Examples
///
/// ```
/// use treap_collections::treap::TreapSet;
///
/// let mut t = TreapSet::new();
/// t.insert(String::from("f"));
/// t.insert(String::from("d"));
///
/// assert!(t.contains("f"));
/// assert!(!t.contains("h"));
/// assert_eq!(t.len(), 2);
///
/// assert_eq!(t.remove("f"), Some(String::from("f")));
/// assert_eq!(t.remove("f"), None);
/// ```
pub struct TreapSet<T, G = RandomPriority> {
    root: tree::Tree<T>,
    generator: G,
    len: usize,
}

impl<T: Ord> TreapSet<T> {
    /// Constructs a new, empty `TreapSet<T>` with uniformly random priorities.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let t: TreapSet<String> = TreapSet::new();
    /// assert!(t.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_generator(RandomPriority::new())
    }
}

impl<T: Ord> Default for TreapSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, G> TreapSet<T, G>
where
    T: Ord,
    G: PriorityGenerator,
{
    /// Constructs a new, empty `TreapSet<T, G>` that draws node priorities from `generator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::priority::RandomPriority;
    /// use treap_collections::treap::TreapSet;
    ///
    /// let seeded: TreapSet<u32, _> = TreapSet::with_generator(RandomPriority::from_seed([1, 1, 1, 1]).unwrap());
    ///
    /// let mut priorities = vec![3u32, 2, 1].into_iter();
    /// let mut fixed = TreapSet::with_generator(move || priorities.next().unwrap_or(0));
    /// fixed.insert("b");
    /// fixed.insert("a");
    /// fixed.insert("c");
    /// assert_eq!(fixed.height(), 2);
    /// ```
    pub fn with_generator(generator: G) -> Self {
        TreapSet {
            root: None,
            generator,
            len: 0,
        }
    }

    /// Inserts a key into the treap. Returns `true` if the key was not already present.
    ///
    /// Inserting a key that already exists leaves the treap unchanged: the stored key and its
    /// priority are kept, and the key passed in is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// assert!(t.insert("a"));
    /// assert!(t.contains(&"a"));
    /// assert!(!t.insert("a"));
    /// assert_eq!(t.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let TreapSet {
            root,
            generator,
            len,
        } = self;
        let new_node = Node::new(key, generator.next_priority());
        let (new_root, inserted) = tree::insert(root.take(), new_node);
        *root = Some(new_root);
        if inserted {
            *len += 1;
            trace!("inserted key; treap holds {} keys", *len);
        }
        inserted
    }
}

impl<T: Ord, G> TreapSet<T, G> {
    /// Removes a key from the treap. If the key exists in the treap, it will return the removed
    /// key. Otherwise it will return `None` and leave the treap unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(1);
    /// assert_eq!(t.remove(&1), Some(1));
    /// assert_eq!(t.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (new_root, removed) = tree::remove(self.root.take(), key);
        self.root = new_root;
        if removed.is_some() {
            self.len -= 1;
            trace!("removed key; treap holds {} keys", self.len);
        }
        removed
    }

    /// Checks if a key exists in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(String::from("b"));
    /// assert!(!t.contains("a"));
    /// assert!(t.contains("b"));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::contains(&self.root, key)
    }

    /// Returns a reference to the stored key equal to `key`, or `None` if no such key exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(String::from("b"));
    /// assert_eq!(t.get("b"), Some(&String::from("b")));
    /// assert_eq!(t.get("c"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::get(&self.root, key)
    }

    /// Returns the number of keys in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(1);
    /// assert_eq!(t.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the treap has no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// assert!(t.is_empty());
    /// t.insert(1);
    /// assert!(!t.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears the treap, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(1);
    /// t.clear();
    /// assert!(t.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
        trace!("cleared treap");
    }

    /// Returns the minimum key of the treap. Returns `None` if the treap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(1);
    /// t.insert(3);
    /// assert_eq!(t.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    /// Returns the maximum key of the treap. Returns `None` if the treap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(1);
    /// t.insert(3);
    /// assert_eq!(t.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. The height of an
    /// empty treap is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// assert_eq!(t.height(), 0);
    /// t.insert(1);
    /// assert_eq!(t.height(), 1);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }
}
