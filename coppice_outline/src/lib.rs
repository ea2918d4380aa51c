// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=coppice_outline --heading-base-level=0

//! Coppice Outline: tree flattening and expansion state for collapsible outlines.
//!
//! This crate is the headless core of an outline view: it turns an
//! arbitrarily deep tree (think a database browser with servers, databases,
//! schemas, tables, and columns) into a flat list of rows, and it keeps
//! track of which rows are open. It does **not** know anything about
//! widgets, styling, or rendering; callers hand it a tree of [`Node`]s with
//! opaque payloads and apply its visibility answers however they draw.
//!
//! The moving parts are:
//!
//! - [`Node`]: the caller's nested tree, generic over an opaque presentation
//!   payload the engine never reads.
//! - [`flatten`]: one pre-order pass producing an [`Outline`], the list of
//!   [`FlatRow`]s (id, depth, parent link, has-children hint, node
//!   back-reference) plus an [`Adjacency`] relation for subtree walks.
//! - [`ExpansionState`]: an immutable value holding the open set and the
//!   **remembered subtrees**. [`toggle`](ExpansionState::toggle) takes the
//!   disclosure widget's naive "these should be open" set and returns a
//!   successor state plus which rows newly opened.
//! - [`Outline::is_visible`] / [`Outline::visible_rows`]: a row is visible
//!   exactly when every strict ancestor is expanded.
//!
//! ## Minimal example
//!
//! ```rust
//! use coppice_outline::{ExpansionState, Node, flatten};
//!
//! let tree = vec![Node::with_children(
//!     "postgres",
//!     (),
//!     vec![Node::with_children(
//!         "analytics",
//!         (),
//!         vec![Node::new("events", ()), Node::new("metrics", ())],
//!     )],
//! )];
//! let outline = flatten(&tree);
//!
//! // Expand the root; its child row becomes visible, the grandchildren
//! // stay hidden until `analytics` is expanded too.
//! let postgres = outline.rows()[0].id();
//! let state = ExpansionState::new()
//!     .toggle_row(postgres, outline.adjacency())
//!     .state;
//!
//! let visible: Vec<&str> = outline.visible_rows(&state).map(|row| row.name()).collect();
//! assert_eq!(visible, ["postgres", "analytics"]);
//! ```
//!
//! ## Remembered subtrees
//!
//! Collapsing a row snapshots which of its descendants were open at that
//! moment. Re-expanding it restores that exact shape instead of a fully
//! collapsed subtree, the way outliners and file browsers are expected to
//! behave:
//!
//! ```rust
//! use coppice_outline::{ExpansionState, Node, flatten};
//!
//! let tree = vec![Node::with_children(
//!     "a",
//!     (),
//!     vec![Node::with_children("b", (), vec![Node::new("c", ())])],
//! )];
//! let outline = flatten(&tree);
//! let adjacency = outline.adjacency();
//! let a = outline.rows()[0].id();
//! let b = outline.rows()[1].id();
//!
//! // Open both, then collapse `a`. The open `b` below it is remembered.
//! let open = ExpansionState::new().toggle([a, b], adjacency).state;
//! let collapsed = open.toggle([], adjacency).state;
//! assert!(!collapsed.is_expanded(b));
//!
//! // Re-opening `a` restores `b` without the widget asking for it.
//! let outcome = collapsed.toggle([a], adjacency);
//! assert!(outcome.state.is_expanded(b));
//! assert_eq!(outcome.newly_expanded, [a, b]);
//! ```
//!
//! Because [`ExpansionState`] is a value, toggles commit atomically:
//! observers only ever see whole states, `==` answers "did anything
//! change?", and keeping old states around gives undo for free.
//!
//! ## Lifecycle
//!
//! The outline is a projection, not a store: re-run [`flatten`] whenever
//! the tree's structure changes and keep the [`ExpansionState`] across the
//! rebuild. [`RowId`]s are assigned in pre-order, so an append (see
//! [`with_child_appended`]) leaves every id before the new row meaning the
//! same thing; ids after it shift, and edits above open rows call for a
//! fresh state. Ids from a stale pass are tolerated everywhere as no-ops.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adjacency;
mod edit;
mod expansion;
mod flatten;
mod node;
mod row;

pub use adjacency::Adjacency;
pub use edit::{node_at, with_child_appended};
pub use expansion::{ExpansionState, ToggleOutcome};
pub use flatten::{Outline, VisibleRows, flatten};
pub use node::Node;
pub use row::{FlatRow, RowId};
