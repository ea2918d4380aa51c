// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row identity and per-row descriptors.

use crate::node::Node;

/// Identifier of a row within one flatten pass.
///
/// Ids are assigned by a monotonic counter during the pre-order walk, so they
/// are dense (`0..outline.len()`) and their `Ord` is display order: `a < b`
/// exactly when row `a` sits above row `b`.
///
/// Ids are unique within the pass that produced them and are not stable
/// across structural edits: re-flattening after an insert or removal may
/// assign the same numbers to different nodes. Callers that restructure the
/// tree beyond appending children should start from a fresh
/// [`ExpansionState`](crate::ExpansionState); ids from a stale pass are
/// tolerated everywhere as no-ops.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(usize);

impl RowId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the dense index of this row, which is also its position in
    /// display order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One row of a flattened outline.
///
/// Rows are produced by [`flatten`](crate::flatten) in display order. Each
/// row links back to the [`Node`] it came from, so presentation data stays
/// reachable without the engine knowing its type.
#[derive(Debug)]
pub struct FlatRow<'t, P> {
    pub(crate) id: RowId,
    pub(crate) depth: usize,
    pub(crate) parent: Option<RowId>,
    pub(crate) has_children: bool,
    pub(crate) node: &'t Node<P>,
}

// Derived `Clone`/`Copy` would require `P: Clone`/`P: Copy`, but rows only
// hold a shared reference to the node.
impl<P> Clone for FlatRow<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for FlatRow<'_, P> {}

impl<'t, P> FlatRow<'t, P> {
    /// Returns this row's id.
    #[must_use]
    pub const fn id(&self) -> RowId {
        self.id
    }

    /// Returns this row's nesting depth: `0` for top-level rows, otherwise
    /// one more than its parent's depth.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the id of this row's parent, or `None` for top-level rows.
    #[must_use]
    pub const fn parent(&self) -> Option<RowId> {
        self.parent
    }

    /// Returns `true` if the source node has at least one child.
    ///
    /// A rendering hint for disclosure affordances; toggling is never gated
    /// on it.
    #[must_use]
    pub const fn has_children(&self) -> bool {
        self.has_children
    }

    /// Returns the source node this row was flattened from.
    #[must_use]
    pub const fn node(&self) -> &'t Node<P> {
        self.node
    }

    /// Returns the display name of the source node.
    #[must_use]
    pub fn name(&self) -> &'t str {
        &self.node.name
    }

    /// Returns the opaque payload of the source node.
    #[must_use]
    pub const fn payload(&self) -> &'t P {
        &self.node.payload
    }
}
