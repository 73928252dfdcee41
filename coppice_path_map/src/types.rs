// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for index paths and translated positions.

use smallvec::SmallVec;

/// An owned index path in the full (static) numbering.
///
/// Index paths are ordered sequences of per-depth sibling indices, depth ≥ 1.
/// List-widget hosts overwhelmingly use depth 1 (sections) or 2 (rows), so
/// the inline capacity keeps translated paths off the heap.
pub type IndexPath = SmallVec<[usize; 4]>;

/// An owned index path in the compacted (dynamic) numbering.
pub type DynamicIndexPath = SmallVec<[DynamicIndex; 4]>;

/// One translated position in the compacted (dynamic) numbering.
///
/// `Hidden` is not an error: it is the expected result for a position that is
/// currently inactive, or whose ancestor is. It is kept out of the index
/// domain by construction rather than by a sentinel value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DynamicIndex {
    /// The entry is active and occupies this position in the compacted view.
    Visible(usize),
    /// The entry, or an ancestor of it, is currently inactive and has no
    /// position in the compacted view.
    Hidden,
}

impl DynamicIndex {
    /// Returns the compacted position, or `None` if the entry is hidden.
    #[must_use]
    pub const fn visible(self) -> Option<usize> {
        match self {
            Self::Visible(index) => Some(index),
            Self::Hidden => None,
        }
    }

    /// Returns `true` if the entry has no position in the compacted view.
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}
