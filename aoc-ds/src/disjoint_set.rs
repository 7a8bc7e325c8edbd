//! Incremental [disjoint-set data structure] using union by size with path halving.
//!
//! Elements live in an arena and are addressed by [`SetId`], which is simply the
//! element's slot. Sets are created one at a time with [`DisjointSet::new_set`]
//! and only ever coarsen: there is no way to split a set or remove an element.
//!
//! [disjoint-set data structure]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
use std::cell::Cell;
use std::fmt;
use thiserror::Error;

/// Handle to an element of a [`DisjointSet`].
///
/// The wrapped id is assigned in creation order starting at 0, so it can be
/// stored and turned back into a handle with [`From<usize>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SetId(usize);

impl SetId {
    /// The id of the element, equal to its creation order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for SetId {
    fn from(index: usize) -> Self {
        SetId(index)
    }
}

impl From<SetId> for usize {
    fn from(id: SetId) -> Self {
        id.0
    }
}

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error when querying a [`DisjointSet`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisjointSetError {
    /// The handle does not refer to an element created by this structure.
    #[error("unknown element: {0}")]
    NotFound(SetId),
}

/// Outcome of [`DisjointSet::union`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Union {
    /// Both elements were already in the set represented by this root.
    Same(SetId),
    /// Two distinct sets were merged.
    Merged {
        /// Representative of the combined set.
        root: SetId,
        /// Former representative, now a child of `root`.
        absorbed: SetId,
    },
}

impl Union {
    /// Representative of the set containing both elements after the union.
    pub fn root(self) -> SetId {
        match self {
            Union::Same(root) | Union::Merged { root, .. } => root,
        }
    }

    /// Whether two distinct sets were merged.
    pub fn is_merged(self) -> bool {
        matches!(self, Union::Merged { .. })
    }
}

/// Partition of every element ever created into disjoint sets.
///
/// Parent links sit in [`Cell`]s so that [`find`](Self::find) can shorten
/// paths through a shared reference. This also makes the structure `!Sync`;
/// callers sharing it across threads must serialise access themselves.
#[derive(Clone)]
pub struct DisjointSet {
    parents: Vec<Cell<usize>>,
    // Only meaningful at roots.
    sizes: Vec<usize>,
    set_count: usize,
}

impl fmt::Debug for DisjointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisjointSet")
            .field("len", &self.len())
            .field("set_count", &self.set_count)
            .finish()
    }
}

impl DisjointSet {
    /// Creates an empty structure.
    pub fn new() -> Self {
        DisjointSet {
            parents: Vec::new(),
            sizes: Vec::new(),
            set_count: 0,
        }
    }

    /// Creates an empty structure with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        DisjointSet {
            parents: Vec::with_capacity(capacity),
            sizes: Vec::with_capacity(capacity),
            set_count: 0,
        }
    }

    /// Creates `count` singleton sets with ids `0..count`.
    pub fn with_sets(count: usize) -> Self {
        DisjointSet {
            parents: (0..count).map(Cell::new).collect(),
            sizes: vec![1; count],
            set_count: count,
        }
    }

    /// Adds a new element as its own singleton set.
    #[must_use]
    pub fn new_set(&mut self) -> SetId {
        let index = self.parents.len();
        self.parents.push(Cell::new(index));
        self.sizes.push(1);
        self.set_count += 1;
        SetId(index)
    }

    /// Number of elements ever created.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Whether no element has been created yet.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Number of distinct sets.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Whether `id` refers to an element of this structure.
    pub fn contains(&self, id: SetId) -> bool {
        id.0 < self.parents.len()
    }

    fn check(&self, id: SetId) -> Result<usize, DisjointSetError> {
        if self.contains(id) {
            Ok(id.0)
        } else {
            tracing::debug!(id = id.0, len = self.len(), "rejected unknown element");
            Err(DisjointSetError::NotFound(id))
        }
    }

    /// Walks to the root, pointing each visited node at its grandparent.
    fn root_of(&self, mut index: usize) -> usize {
        loop {
            let parent = self.parents[index].get();
            if parent == index {
                break index;
            }
            let grandparent = self.parents[parent].get();
            self.parents[index].set(grandparent);
            index = grandparent;
        }
    }

    /// Returns the representative of the set containing `id`.
    ///
    /// Shortens the path from `id` to its root as a side effect, which never
    /// changes the answer for any element.
    pub fn find(&self, id: SetId) -> Result<SetId, DisjointSetError> {
        let index = self.check(id)?;
        Ok(SetId(self.root_of(index)))
    }

    /// Merges the sets containing `a` and `b`, reporting which roots were involved.
    ///
    /// The root of the smaller set is attached under the root of the larger one.
    /// On equal sizes the root of `a` is kept.
    pub fn union(&mut self, a: SetId, b: SetId) -> Result<Union, DisjointSetError> {
        let a = self.check(a)?;
        let b = self.check(b)?;
        let a = self.root_of(a);
        let b = self.root_of(b);

        if a == b {
            return Ok(Union::Same(SetId(a)));
        }

        let (root, absorbed) = if self.sizes[a] >= self.sizes[b] {
            (a, b)
        } else {
            (b, a)
        };

        self.parents[absorbed].set(root);
        self.sizes[root] += self.sizes[absorbed];
        self.set_count -= 1;
        tracing::trace!(
            root,
            absorbed,
            size = self.sizes[root],
            set_count = self.set_count,
            "merged sets"
        );

        Ok(Union::Merged {
            root: SetId(root),
            absorbed: SetId(absorbed),
        })
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `true` if two distinct sets were merged and `false` if the
    /// elements already shared a set.
    pub fn merge(&mut self, a: SetId, b: SetId) -> Result<bool, DisjointSetError> {
        self.union(a, b).map(Union::is_merged)
    }

    /// Whether `a` and `b` are in the same set.
    pub fn same_set(&self, a: SetId, b: SetId) -> Result<bool, DisjointSetError> {
        let a = self.check(a)?;
        let b = self.check(b)?;
        Ok(self.root_of(a) == self.root_of(b))
    }

    /// Number of elements in the set containing `id`.
    pub fn set_size(&self, id: SetId) -> Result<usize, DisjointSetError> {
        let root = self.find(id)?;
        Ok(self.sizes[root.0])
    }

    /// Iterator over those ids `i` for which `find(i) = i`, in id order.
    pub fn roots(&self) -> impl Iterator<Item = SetId> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter(|(index, parent)| *index == parent.get())
            .map(|(index, _)| SetId(index))
    }

    /// Every representative together with the size of its set.
    pub fn set_sizes(&self) -> impl Iterator<Item = (SetId, usize)> + '_ {
        self.roots().map(move |root| (root, self.sizes[root.0]))
    }
}

impl Default for DisjointSet {
    fn default() -> Self {
        Self::new()
    }
}
