// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parent-to-children adjacency for one flatten pass.

use alloc::vec::Vec;

use crate::row::RowId;

/// Ordered parent-to-children relation over the rows of one flatten pass.
///
/// Built by [`flatten`](crate::flatten) alongside the row list and consumed
/// by [`ExpansionState::toggle`](crate::ExpansionState::toggle) to enumerate
/// the subtree below a collapsing row. Children are stored dense, indexed by
/// [`RowId`], in declaration order.
///
/// Ids from a previous flatten pass are tolerated: out-of-range lookups
/// yield no children rather than panicking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Adjacency {
    /// Ids of the top-level rows, in display order.
    roots: Vec<RowId>,
    /// `children[id.index()]` holds the immediate children of `id`.
    children: Vec<Vec<RowId>>,
}

impl Adjacency {
    /// Records a freshly assigned row under its parent.
    ///
    /// Rows arrive in pre-order, so a parent is always recorded before its
    /// children and ids are dense.
    pub(crate) fn record(&mut self, parent: Option<RowId>, id: RowId) {
        debug_assert_eq!(
            id.index(),
            self.children.len(),
            "rows must be recorded in id order"
        );
        self.children.push(Vec::new());
        match parent {
            Some(parent) => self.children[parent.index()].push(id),
            None => self.roots.push(id),
        }
    }

    /// Returns the number of rows this relation covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the relation covers no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if `id` belongs to the pass this relation was built
    /// from.
    #[must_use]
    pub fn contains(&self, id: RowId) -> bool {
        id.index() < self.children.len()
    }

    /// Returns the ids of the top-level rows, in display order.
    #[must_use]
    pub fn roots(&self) -> &[RowId] {
        &self.roots
    }

    /// Returns the immediate children of `parent`, in display order.
    ///
    /// `None` addresses the virtual root, i.e. returns the same ids as
    /// [`roots`](Self::roots). Unknown ids have no children.
    #[must_use]
    pub fn children_of(&self, parent: Option<RowId>) -> &[RowId] {
        match parent {
            None => &self.roots,
            Some(id) => {
                let idx = id.index();
                if idx < self.children.len() {
                    self.children[idx].as_slice()
                } else {
                    &[]
                }
            }
        }
    }

    /// Returns an iterator over all transitive descendants of `id`, in
    /// pre-order, excluding `id` itself.
    ///
    /// Unknown ids yield nothing.
    pub fn descendants_of(&self, id: RowId) -> impl Iterator<Item = RowId> + '_ {
        Descendants::new(self, id)
    }
}

/// Depth-first iterator over transitive descendants.
///
/// The relation is a tree, so no id can be reached twice and no visited set
/// is needed. Children are pushed in reverse so they pop in display order.
struct Descendants<'a> {
    adjacency: &'a Adjacency,
    stack: Vec<RowId>,
}

impl<'a> Descendants<'a> {
    fn new(adjacency: &'a Adjacency, start: RowId) -> Self {
        let mut stack = Vec::new();
        stack.extend(adjacency.children_of(Some(start)).iter().rev());
        Self { adjacency, stack }
    }
}

impl Iterator for Descendants<'_> {
    type Item = RowId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.adjacency.children_of(Some(id)).iter().rev());
        Some(id)
    }
}
