// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=coppice_section_map --heading-base-level=0

//! Coppice Section Map: two-level (section, row) visibility mapping.
//!
//! Most list widgets address entries with a (section, row) pair. This crate
//! wraps a [`PathMapper`] in that addressing scheme: the **static** space is
//! your data source — every section and row that could ever exist — and the
//! **dynamic** space is what is currently on screen.
//!
//! Hiding a whole section is different from hiding each of its rows: a
//! section condition removes the section itself (including any header or
//! footer the host renders for it), while row conditions leave an empty but
//! present section behind. The two compose — a section condition at depth 1
//! and row conditions at depth 2 are evaluated independently, and a hidden
//! section hides all of its rows regardless of their own conditions.
//!
//! ## Minimal example
//!
//! ```rust
//! use coppice_path_map::DynamicIndex;
//! use coppice_section_map::SectionMap;
//!
//! let mut map = SectionMap::new();
//!
//! // Hide section 1 and the third row of section 0.
//! map.set_section_condition(1, || false);
//! map.set_row_condition(0, 2, || false);
//!
//! // Section 2 moves up into slot 1…
//! assert_eq!(map.dynamic_section(2), DynamicIndex::Visible(1));
//! // …and the row after the hidden one fills its place.
//! let row = map.dynamic_row(0, 3);
//! assert_eq!(row.row, DynamicIndex::Visible(2));
//!
//! // A tap on visible section 1 resolves back to data-source section 2.
//! assert_eq!(map.static_section(1), 2);
//! ```
//!
//! Like the underlying mapper, this type never observes condition changes
//! and never notifies anyone: when external state a condition reads may have
//! changed, the host re-queries the map and issues its own insert/delete
//! updates to the widget.
//!
//! Conditions deeper than (section, row) — or prebuilt
//! [`Condition`](coppice_path_map::Condition) values — can be mixed in
//! through [`SectionMap::mapper_mut`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use coppice_path_map::{DynamicIndex, PathMapper};

/// A translated (section, row) pair in the compacted numbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RowRef {
    /// The section's position in the compacted view, or hidden.
    pub section: DynamicIndex,
    /// The row's position within its section, or hidden.
    pub row: DynamicIndex,
}

impl RowRef {
    /// Returns the `(section, row)` pair if both are visible.
    #[must_use]
    pub const fn visible(self) -> Option<(usize, usize)> {
        match (self.section.visible(), self.row.visible()) {
            (Some(section), Some(row)) => Some((section, row)),
            _ => None,
        }
    }
}

/// Two-level convenience façade over [`PathMapper`].
///
/// Sections are depth-1 index paths, rows depth-2. Everything else —
/// default-active behavior, lazy evaluation, pruning on removal — is the
/// underlying mapper's contract, unchanged.
#[derive(Debug, Default)]
pub struct SectionMap {
    mapper: PathMapper,
}

impl SectionMap {
    /// Creates a map with no conditions; every section and row is visible.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a shared reference to the underlying mapper.
    #[must_use]
    pub fn mapper(&self) -> &PathMapper {
        &self.mapper
    }

    /// Returns a mutable reference to the underlying mapper, for mixing in
    /// generic index-path operations.
    pub fn mapper_mut(&mut self) -> &mut PathMapper {
        &mut self.mapper
    }

    /// Registers a visibility condition for a whole section, replacing any
    /// previous one and discarding row conditions registered under it.
    ///
    /// While the condition returns `false`, the section and everything in it
    /// disappear from the dynamic space.
    pub fn set_section_condition(&mut self, section: usize, condition: impl Fn() -> bool + 'static) {
        self.mapper.set_condition(&[section], condition);
    }

    /// Removes the condition for `section`, restoring the default (visible)
    /// behavior.
    ///
    /// With `including_rows`, conditions registered for the section's rows
    /// (and anything deeper) are removed as well; without it they stay in
    /// effect.
    pub fn remove_section_condition(&mut self, section: usize, including_rows: bool) {
        self.mapper.remove_condition(&[section], including_rows);
    }

    /// Registers a visibility condition for one row, replacing any previous
    /// one.
    ///
    /// The section itself stays present while rows inside it are hidden.
    pub fn set_row_condition(
        &mut self,
        section: usize,
        row: usize,
        condition: impl Fn() -> bool + 'static,
    ) {
        self.mapper.set_condition(&[section, row], condition);
    }

    /// Removes the condition for one row, restoring the default (visible)
    /// behavior.
    ///
    /// Conditions registered deeper than the row are removed with it. Use
    /// [`SectionMap::mapper_mut`] with `descendants = false` to keep them.
    pub fn remove_row_condition(&mut self, section: usize, row: usize) {
        self.mapper.remove_condition(&[section, row], true);
    }

    /// Translates a data-source section into its on-screen position.
    #[must_use]
    pub fn dynamic_section(&self, section: usize) -> DynamicIndex {
        self.mapper.static_to_dynamic(&[section])[0]
    }

    /// Translates an on-screen section back into the data-source numbering.
    #[must_use]
    pub fn static_section(&self, section: usize) -> usize {
        self.mapper.dynamic_to_static(&[section])[0]
    }

    /// Translates a data-source (section, row) pair into its on-screen
    /// position.
    #[must_use]
    pub fn dynamic_row(&self, section: usize, row: usize) -> RowRef {
        let mapped = self.mapper.static_to_dynamic(&[section, row]);
        RowRef {
            section: mapped[0],
            row: mapped[1],
        }
    }

    /// Translates an on-screen (section, row) pair back into the data-source
    /// numbering.
    #[must_use]
    pub fn static_row(&self, section: usize, row: usize) -> (usize, usize) {
        let mapped = self.mapper.dynamic_to_static(&[section, row]);
        (mapped[0], mapped[1])
    }
}

#[cfg(test)]
mod tests {
    use coppice_path_map::DynamicIndex;

    use super::{RowRef, SectionMap};

    #[test]
    fn hiding_a_section_renumbers_later_sections() {
        let mut map = SectionMap::new();
        map.set_section_condition(1, || false);

        assert_eq!(map.dynamic_section(0), DynamicIndex::Visible(0));
        assert_eq!(map.dynamic_section(1), DynamicIndex::Hidden);
        assert_eq!(map.dynamic_section(2), DynamicIndex::Visible(1));
        assert_eq!(map.static_section(1), 2);
    }

    #[test]
    fn row_conditions_apply_within_their_section() {
        let mut map = SectionMap::new();
        map.set_row_condition(0, 2, || false);

        assert_eq!(map.dynamic_row(0, 2).row, DynamicIndex::Hidden);
        assert_eq!(
            map.dynamic_row(0, 3),
            RowRef {
                section: DynamicIndex::Visible(0),
                row: DynamicIndex::Visible(2),
            }
        );
        // Other sections are unaffected.
        assert_eq!(
            map.dynamic_row(1, 2).visible(),
            Some((1, 2)),
            "conditions must not leak across sections"
        );
    }

    #[test]
    fn hidden_sections_cascade_to_their_rows() {
        let mut map = SectionMap::new();
        map.set_section_condition(1, || false);

        let row = map.dynamic_row(1, 0);
        assert!(row.section.is_hidden());
        assert!(row.row.is_hidden());
        assert_eq!(row.visible(), None);
    }

    #[test]
    fn section_and_row_conditions_compose() {
        // Section condition first, then a row condition beneath it; the
        // section keeps its own condition.
        let mut map = SectionMap::new();
        map.set_section_condition(1, || true);
        map.set_row_condition(1, 0, || false);

        assert_eq!(map.dynamic_section(1), DynamicIndex::Visible(1));
        assert!(map.dynamic_row(1, 0).row.is_hidden());
        assert_eq!(map.dynamic_row(1, 1).row, DynamicIndex::Visible(0));
    }

    #[test]
    fn removing_a_section_condition_can_keep_row_conditions() {
        let mut map = SectionMap::new();
        map.set_section_condition(1, || false);
        map.set_row_condition(1, 0, || false);
        assert_eq!(map.dynamic_section(1), DynamicIndex::Hidden);

        map.remove_section_condition(1, false);
        assert_eq!(map.dynamic_section(1), DynamicIndex::Visible(1));
        assert!(map.dynamic_row(1, 0).row.is_hidden(), "row condition stays");

        map.remove_section_condition(1, true);
        assert_eq!(map.dynamic_row(1, 0).visible(), Some((1, 0)));
    }

    #[test]
    fn round_trips_at_both_depths() {
        let mut map = SectionMap::new();
        map.set_section_condition(0, || false);
        map.set_row_condition(2, 1, || false);

        let section = map.dynamic_section(2).visible().expect("section visible");
        assert_eq!(map.static_section(section), 2);

        let (section, row) = map.dynamic_row(2, 3).visible().expect("row visible");
        assert_eq!(map.static_row(section, row), (2, 3));
    }

    #[test]
    fn deeper_conditions_mix_in_through_the_mapper() {
        let mut map = SectionMap::new();
        map.mapper_mut().set_condition(&[0, 1, 2], || false);

        let mapped = map.mapper().static_to_dynamic(&[0, 1, 2]);
        assert_eq!(mapped[2], DynamicIndex::Hidden);
        // The (section, row) view above the deep condition is untouched.
        assert_eq!(map.dynamic_row(0, 1).visible(), Some((0, 1)));
    }
}
