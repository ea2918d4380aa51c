// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path-addressed tree editing.
//!
//! The editing helpers address nodes by child-index paths (`[1, 0, 2]` is
//! the third child of the first child of the second root), the form
//! [`Outline::path_to`](crate::Outline::path_to) produces for a clicked
//! row. [`with_child_appended`] rebuilds the tree with one child added and
//! leaves the input alone, which pairs with the usual flow of re-flattening
//! after every structural change.

use alloc::vec::Vec;

use crate::node::Node;

/// Resolves a child-index path to a node, or `None` if the path leads out
/// of the tree.
///
/// The empty path resolves to nothing: the forest of roots has no node of
/// its own.
#[must_use]
pub fn node_at<'t, P>(roots: &'t [Node<P>], path: &[usize]) -> Option<&'t Node<P>> {
    let (&first, rest) = path.split_first()?;
    let mut node = roots.get(first)?;
    for &index in rest {
        node = node.children.get(index)?;
    }
    Some(node)
}

/// Returns a copy of the tree with `child` appended to the node at `path`,
/// or `None` if the path leads out of the tree.
///
/// The input is untouched, so the caller can keep flattened views of the
/// old tree alive while building the new one. After a re-flatten, rows
/// before the appended node in pre-order keep their ids while later rows
/// shift to make room; the usual flow of adding under a row that was just
/// expanded therefore keeps the carried-over
/// [`ExpansionState`](crate::ExpansionState) meaningful, but edits above
/// open rows call for a fresh one.
#[must_use]
pub fn with_child_appended<P: Clone>(
    roots: &[Node<P>],
    path: &[usize],
    child: Node<P>,
) -> Option<Vec<Node<P>>> {
    let mut roots = roots.to_vec();
    node_at_mut(&mut roots, path)?.children.push(child);
    Some(roots)
}

fn node_at_mut<'t, P>(roots: &'t mut [Node<P>], path: &[usize]) -> Option<&'t mut Node<P>> {
    let (&first, rest) = path.split_first()?;
    let mut node = roots.get_mut(first)?;
    for &index in rest {
        node = node.children.get_mut(index)?;
    }
    Some(node)
}
