// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=coppice_path_map --heading-base-level=0

//! Coppice Path Map: conditional index-path mapping for hierarchical lists.
//!
//! This crate lets a host present a *filtered, renumbered view* of a
//! hierarchical list (for example, the sections and rows of a list widget)
//! without touching the underlying data. You attach boolean visibility
//! conditions to positions in the fixed, full-size (**static**) index
//! hierarchy; the mapper computes, on demand, the corresponding compacted
//! (**dynamic**) positions and the inverse.
//!
//! The core concepts are:
//!
//! - [`Condition`]: a lazily evaluated, boolean-producing predicate attached
//!   to one position. A position with no condition is always active and never
//!   participates in the mapping.
//! - [`PathMapper`]: the entry point. Conditions are registered per index
//!   path at arbitrary depth; [`PathMapper::static_to_dynamic`] and
//!   [`PathMapper::dynamic_to_static`] translate whole paths in either
//!   direction.
//! - [`DynamicIndex`]: one translated position in the compacted numbering,
//!   either [`DynamicIndex::Visible`] or [`DynamicIndex::Hidden`] when the
//!   position (or one of its ancestors) is currently inactive.
//!
//! Conditions nest: a condition registered for path `[1]` governs the whole
//! subtree under static index `1`, while a condition for `[1, 4]` only
//! matters for paths that already passed through index `1`. Translating
//! `[2, 5]` evaluates the condition at `[1]` (it shifts the first index) but
//! never the one at `[1, 4]`.
//!
//! This crate deliberately does **not** know about widgets or any particular
//! UI framework. Host frameworks are responsible for:
//!
//! - Owning the data being shown and deciding what the static numbering means.
//! - Re-running a translation whenever external state a condition reads may
//!   have changed — the mapper never observes condition changes itself.
//! - Issuing their own insert/delete notifications when a translation result
//!   changes, and converting to their own addressing scheme (see the
//!   `coppice_section_map` crate for the common section/row case).
//!
//! ## Minimal example
//!
//! ```rust
//! use coppice_path_map::{DynamicIndex, PathMapper};
//!
//! let mut mapper = PathMapper::new();
//!
//! // Hide the second of five entries.
//! mapper.set_condition(&[1], || false);
//!
//! // Entries after it shift up by one in the compacted view…
//! assert_eq!(mapper.static_to_dynamic(&[2])[0], DynamicIndex::Visible(1));
//! // …and the hidden entry has no dynamic counterpart.
//! assert_eq!(mapper.static_to_dynamic(&[1])[0], DynamicIndex::Hidden);
//!
//! // The inverse walks the compacted view back to the full numbering.
//! assert_eq!(mapper.dynamic_to_static(&[1])[0], 2);
//! ```
//!
//! ## Conditions bound to state
//!
//! Conditions can be plain closures, or a predicate bound to an owned
//! subject via [`Condition::predicate`]:
//!
//! ```rust
//! use coppice_path_map::{Condition, DynamicIndex, PathMapper};
//!
//! struct Account {
//!     premium: bool,
//! }
//!
//! let mut mapper = PathMapper::new();
//! mapper.set_condition_with(
//!     &[2, 0],
//!     Condition::predicate(Account { premium: false }, |a| a.premium),
//! );
//!
//! // The premium-only row inside section 2 is hidden; section 2 itself is not.
//! let mapped = mapper.static_to_dynamic(&[2, 0]);
//! assert_eq!(mapped[0], DynamicIndex::Visible(2));
//! assert_eq!(mapped[1], DynamicIndex::Hidden);
//! ```
//!
//! Every translation call re-walks the condition tree and re-evaluates the
//! conditions encountered along the path — each at most once per call, and
//! nothing is cached across calls. The mapper is a plain single-owner data
//! structure with no internal synchronization; mutate and query it from one
//! logical owner at a time (typically a UI-thread-bound list controller).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod condition;
mod mapper;
mod node;
mod types;

pub use condition::Condition;
pub use mapper::PathMapper;
pub use types::{DynamicIndex, DynamicIndexPath, IndexPath};
