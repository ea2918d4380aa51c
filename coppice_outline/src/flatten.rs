// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pre-order flattening and the visible-row projection.

use alloc::vec::Vec;

use crate::adjacency::Adjacency;
use crate::expansion::ExpansionState;
use crate::node::Node;
use crate::row::{FlatRow, RowId};

/// Flattens a nested tree into an [`Outline`].
///
/// The walk is depth-first pre-order with children in declaration order, so
/// rows come out in display order and the monotonically assigned [`RowId`]s
/// agree with it. The input is borrowed, not copied; each row links back to
/// its source [`Node`].
///
/// Flattening is a pure function of the input. Rebuild the outline whenever
/// the tree's structure changes; there is no incremental diffing.
pub fn flatten<P>(roots: &[Node<P>]) -> Outline<'_, P> {
    let mut rows: Vec<FlatRow<'_, P>> = Vec::new();
    let mut adjacency = Adjacency::default();

    // Explicit stack instead of recursion, so depth is bounded by the heap.
    // Children go on reversed to pop in declaration order.
    let mut stack: Vec<(&Node<P>, usize, Option<RowId>)> = Vec::new();
    stack.extend(roots.iter().rev().map(|node| (node, 0, None)));

    while let Some((node, depth, parent)) = stack.pop() {
        let id = RowId::new(rows.len());
        rows.push(FlatRow {
            id,
            depth,
            parent,
            has_children: node.has_children(),
            node,
        });
        adjacency.record(parent, id);
        stack.extend(
            node.children
                .iter()
                .rev()
                .map(|child| (child, depth + 1, Some(id))),
        );
    }

    Outline { rows, adjacency }
}

/// The product of one flatten pass: rows in display order plus their
/// parent-to-children relation.
///
/// An `Outline` borrows the tree it was flattened from and is immutable;
/// pair it with an [`ExpansionState`] to decide which of its rows to render.
#[derive(Debug)]
pub struct Outline<'t, P> {
    rows: Vec<FlatRow<'t, P>>,
    adjacency: Adjacency,
}

impl<'t, P> Outline<'t, P> {
    /// Returns all rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[FlatRow<'t, P>] {
        &self.rows
    }

    /// Returns the row with the given id, or `None` for ids this pass did
    /// not assign.
    #[must_use]
    pub fn row(&self, id: RowId) -> Option<&FlatRow<'t, P>> {
        self.rows.get(id.index())
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the outline has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the parent-to-children relation of this pass.
    #[must_use]
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Returns `true` if the row is visible under `state`: every strict
    /// ancestor is expanded, or the row is top-level.
    ///
    /// The row's own expansion plays no part; a collapsed row is still
    /// visible, only its descendants are hidden. Unknown ids are not
    /// visible.
    #[must_use]
    pub fn is_visible(&self, id: RowId, state: &ExpansionState) -> bool {
        let Some(row) = self.row(id) else {
            return false;
        };
        let mut parent = row.parent();
        while let Some(ancestor) = parent {
            if !state.is_expanded(ancestor) {
                return false;
            }
            parent = self.rows[ancestor.index()].parent();
        }
        true
    }

    /// Returns an iterator over the rows visible under `state`, in display
    /// order.
    ///
    /// Equivalent to filtering [`rows`](Self::rows) with
    /// [`is_visible`](Self::is_visible), but a single scan: a collapsed
    /// row's whole subtree is contiguous in pre-order and gets skipped in
    /// one run.
    pub fn visible_rows<'a>(&'a self, state: &'a ExpansionState) -> VisibleRows<'a, 't, P> {
        VisibleRows {
            rows: &self.rows,
            state,
            index: 0,
            skip_below: None,
        }
    }

    /// Returns the child-index path from the tree roots to the row's node,
    /// or `None` for ids this pass did not assign.
    ///
    /// The path addresses the same node in the borrowed tree, which makes it
    /// the bridge from a row back to editing helpers like
    /// [`with_child_appended`](crate::with_child_appended).
    #[must_use]
    pub fn path_to(&self, id: RowId) -> Option<Vec<usize>> {
        let mut row = self.row(id)?;
        let mut path = Vec::new();
        loop {
            let siblings = self.adjacency.children_of(row.parent());
            let position = siblings.iter().position(|&sibling| sibling == row.id())?;
            path.push(position);
            match row.parent() {
                Some(parent) => row = &self.rows[parent.index()],
                None => break,
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Iterator over the rows visible under an expansion state, in display
/// order.
///
/// Returned by [`Outline::visible_rows`].
#[derive(Debug)]
pub struct VisibleRows<'a, 't, P> {
    rows: &'a [FlatRow<'t, P>],
    state: &'a ExpansionState,
    index: usize,
    /// When set, rows deeper than this are inside a collapsed subtree.
    skip_below: Option<usize>,
}

impl<'t, P> Iterator for VisibleRows<'_, 't, P> {
    type Item = FlatRow<'t, P>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.rows.len() {
            let row = self.rows[self.index];
            self.index += 1;
            if let Some(depth) = self.skip_below {
                if row.depth() > depth {
                    continue;
                }
                self.skip_below = None;
            }
            if !self.state.is_expanded(row.id()) {
                self.skip_below = Some(row.depth());
            }
            return Some(row);
        }
        None
    }
}
