// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The public mapping façade: condition registration and whole-path translation.

use smallvec::SmallVec;

use crate::condition::Condition;
use crate::node::Node;
use crate::types::{DynamicIndex, DynamicIndexPath, IndexPath};

/// Maps index paths between the fixed, full-size (static) numbering and the
/// compacted (dynamic) numbering induced by the registered conditions.
///
/// The mapper owns a sparse tree of conditions keyed by position. Nodes are
/// created on demand when a condition is registered at or below a position
/// and vanish again when the last condition under them is removed, so an
/// untouched mapper costs nothing and translates as the identity.
///
/// ```rust
/// use coppice_path_map::{DynamicIndex, PathMapper};
///
/// let mut mapper = PathMapper::new();
/// mapper.set_condition(&[1], || false);
///
/// assert_eq!(mapper.static_to_dynamic(&[4])[0], DynamicIndex::Visible(3));
/// assert_eq!(mapper.dynamic_to_static(&[3])[0], 4);
/// ```
///
/// The mapper never observes condition changes: re-run a translation whenever
/// external state a condition reads may have changed. All operations are
/// synchronous tree walks on the calling thread, with no internal
/// synchronization — a single logical owner must serialize mutation and
/// translation.
#[derive(Debug, Default)]
pub struct PathMapper {
    root: Node,
}

impl PathMapper {
    /// Creates a mapper with no conditions; both translations start out as
    /// the identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a closure condition for `path`, replacing any previous
    /// condition there and discarding conditions registered below it.
    ///
    /// Register for the most generic path that covers what you want to hide:
    /// a condition at `[1]` is enough to hide everything under static index
    /// `1`; there is no need to condition each descendant.
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty.
    pub fn set_condition(&mut self, path: &[usize], condition: impl Fn() -> bool + 'static) {
        self.set_condition_with(path, Condition::closure(condition));
    }

    /// Registers a prebuilt [`Condition`] for `path`, replacing any previous
    /// condition there and discarding conditions registered below it.
    ///
    /// This is the entry point for the declarative form built with
    /// [`Condition::predicate`], and for reusing a [`Condition`] value
    /// constructed elsewhere.
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty.
    pub fn set_condition_with(&mut self, path: &[usize], condition: Condition) {
        assert!(!path.is_empty(), "index paths must have depth >= 1");
        self.root.set_condition(path, condition);
    }

    /// Removes the condition registered for `path`, if any.
    ///
    /// The affected positions fall back to the default always-active
    /// behavior. With `descendants`, every condition registered below `path`
    /// is removed as well. Removing from a path with nothing registered is a
    /// no-op.
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty.
    pub fn remove_condition(&mut self, path: &[usize], descendants: bool) {
        assert!(!path.is_empty(), "index paths must have depth >= 1");
        self.root.remove_condition(path, descendants);
    }

    /// Translates a static index path into the compacted numbering.
    ///
    /// Each index shifts down by the number of inactive preceding siblings at
    /// its depth. An inactive position yields [`DynamicIndex::Hidden`] for
    /// itself and every deeper index. The input is never mutated; conditions
    /// relevant to the path are evaluated during the call, each at most once.
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty.
    #[must_use]
    pub fn static_to_dynamic(&self, path: &[usize]) -> DynamicIndexPath {
        assert!(!path.is_empty(), "index paths must have depth >= 1");
        let mut mapped: DynamicIndexPath = path
            .iter()
            .map(|&index| DynamicIndex::Visible(index))
            .collect();
        self.root.map_static_to_dynamic(&mut mapped);
        mapped
    }

    /// Translates a dynamic index path back into the full static numbering.
    ///
    /// The compacted numbering contains only active positions by
    /// construction, so the result is always fully resolved. The input is
    /// never mutated; conditions relevant to the path are evaluated during
    /// the call, each at most once.
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty.
    #[must_use]
    pub fn dynamic_to_static(&self, path: &[usize]) -> IndexPath {
        assert!(!path.is_empty(), "index paths must have depth >= 1");
        let mut mapped: IndexPath = SmallVec::from_slice(path);
        self.root.map_dynamic_to_static(&mut mapped);
        mapped
    }
}
