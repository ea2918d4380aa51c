// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The nested input tree.

use alloc::string::String;
use alloc::vec::Vec;

/// A node in the caller's nested tree.
///
/// `Node` is the input side of the engine: an ordered tree that the caller
/// builds (and rebuilds after edits) and hands to [`flatten`](crate::flatten).
/// The engine reads only `name` and `children`; `payload` is opaque
/// presentation data (icons, style hooks, disabled flags, activation
/// callbacks) carried through to [`FlatRow`](crate::FlatRow) untouched.
///
/// Children are stored by value, so the tree is acyclic by construction and
/// no cycle checking is needed anywhere downstream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<P> {
    /// Display name of this node.
    pub name: String,
    /// Ordered children. An empty vector is a leaf.
    pub children: Vec<Node<P>>,
    /// Caller-owned presentation data. Never inspected by the engine.
    pub payload: P,
}

impl<P> Node<P> {
    /// Creates a leaf node.
    #[must_use]
    pub fn new(name: impl Into<String>, payload: P) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            payload,
        }
    }

    /// Creates a node with the given children.
    #[must_use]
    pub fn with_children(name: impl Into<String>, payload: P, children: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            children,
            payload,
        }
    }

    /// Returns `true` if this node has at least one child.
    ///
    /// This is what populates the has-children hint on flattened rows. It is
    /// a rendering hint only; expansion state is free to carry ids of
    /// childless rows (for example a container whose empty state is rendered
    /// from the payload).
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Appends a child in place.
    ///
    /// For callers that do not own the tree mutably, see
    /// [`with_child_appended`](crate::with_child_appended).
    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }
}
