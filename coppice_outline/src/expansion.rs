// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expansion state and the toggle algorithm.

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

use crate::adjacency::Adjacency;
use crate::row::RowId;

/// Which rows are open, plus the remembered shape of collapsed subtrees.
///
/// `ExpansionState` is an immutable value: [`toggle`](Self::toggle) borrows
/// the current state and returns a successor inside a [`ToggleOutcome`],
/// leaving the original untouched. This keeps every observable state
/// complete (callers never see a half-applied toggle), makes "did anything
/// change?" a plain `==`, and lets callers keep old values for undo.
///
/// Two pieces of state are tracked:
///
/// - The **expanded set**: ids whose children are currently set to render.
/// - The **remembered subtrees**: for each collapsed row, which of its
///   descendants were open at the moment it collapsed. Re-expanding the row
///   restores exactly that shape instead of a fully collapsed subtree.
///
/// Remembered entries never affect visibility on their own; they are
/// consumed only when their row turns up expanded again.
///
/// The state holds plain ids and knows nothing about the tree; the tree
/// shape comes in through the [`Adjacency`] argument of `toggle`. Ids from a
/// previous flatten pass are tolerated as no-ops. When the tree's identity
/// changes entirely, start over with [`ExpansionState::new`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<RowId>,
    remembered: HashMap<RowId, HashSet<RowId>>,
}

/// The result of a toggle: the successor state plus what newly opened.
///
/// Returned by [`ExpansionState::toggle`]. The caller replaces its state
/// value with `state` and may drive side effects (lazy loading, announcing
/// rows to assistive tech) off `newly_expanded`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// The state after the toggle.
    pub state: ExpansionState,
    /// Ids expanded by this toggle: present in the new state's expanded set
    /// but not the old one, restricted to rows the adjacency knows, in
    /// ascending id order (which is display order).
    pub newly_expanded: Vec<RowId>,
}

impl ExpansionState {
    /// Creates the empty state: nothing expanded, nothing remembered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `id` is currently expanded.
    #[must_use]
    pub fn is_expanded(&self, id: RowId) -> bool {
        self.expanded.contains(&id)
    }

    /// Returns the number of expanded rows.
    #[must_use]
    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    /// Returns `true` if nothing is expanded and nothing is remembered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty() && self.remembered.is_empty()
    }

    /// Returns an iterator over the expanded ids.
    ///
    /// The iteration order is not specified and may vary across runs or
    /// platforms; sort by id when display order matters.
    pub fn expanded(&self) -> impl Iterator<Item = RowId> + '_ {
        self.expanded.iter().copied()
    }

    /// Returns `true` if a remembered subtree is stored for `id`.
    ///
    /// This distinguishes "collapsed with an empty snapshot" (the entry
    /// exists and holds no ids) from "never collapsed" (no entry).
    #[must_use]
    pub fn has_remembered(&self, id: RowId) -> bool {
        self.remembered.contains_key(&id)
    }

    /// Returns an iterator over the remembered subtree stored for `id`,
    /// empty when there is no entry.
    ///
    /// The iteration order is not specified and may vary across runs or
    /// platforms.
    pub fn remembered(&self, id: RowId) -> impl Iterator<Item = RowId> + '_ {
        self.remembered.get(&id).into_iter().flatten().copied()
    }

    /// Applies the widget layer's reported target expanded-id set and
    /// returns the successor state.
    ///
    /// `requested` is taken at face value: a controlled disclosure widget
    /// reports "what should be open now" without knowing the tree shape, so
    /// closing a row typically leaves that row's open descendants in the
    /// reported set. This method reconciles the request with the tree:
    ///
    /// 1. Rows expanded before but absent from `requested` are collapsing.
    /// 2. For each such row, the ids of its descendants that were open are
    ///    snapshotted into the remembered subtrees (an empty snapshot is
    ///    still stored, overwriting any earlier one).
    /// 3. All of its descendants are then dropped from the working set, so a
    ///    collapse hides the whole subtree regardless of what the widget
    ///    reported below it.
    /// 4. One restoration round: every row of the working set with a
    ///    remembered entry has that entry unioned back in and consumed.
    ///    Rows restored by the round keep their own entries until a later
    ///    toggle finds them expanded.
    /// 5. Everything that ended up open but was not open before is reported
    ///    in [`ToggleOutcome::newly_expanded`].
    ///
    /// Requested ids the adjacency does not know may linger in the expanded
    /// set but stay out of snapshots, visibility, and notifications.
    ///
    /// Toggling the expanded set into itself leaves the open set unchanged
    /// and reports nothing newly expanded (step 4 may still consume entries
    /// for rows that are already open).
    #[must_use]
    pub fn toggle(
        &self,
        requested: impl IntoIterator<Item = RowId>,
        adjacency: &Adjacency,
    ) -> ToggleOutcome {
        let requested: HashSet<RowId> = requested.into_iter().collect();

        let mut expanded = requested.clone();
        let mut remembered = self.remembered.clone();

        // Collapses are judged against the requested set as reported, not
        // against the working set the discarding below mutates.
        for &collapsing in self.expanded.iter().filter(|id| !requested.contains(*id)) {
            // Ids from a stale pass have no subtree here; leave no snapshot
            // behind for them.
            if !adjacency.contains(collapsing) {
                continue;
            }
            let mut open = HashSet::new();
            for descendant in adjacency.descendants_of(collapsing) {
                if self.expanded.contains(&descendant) {
                    open.insert(descendant);
                }
                expanded.remove(&descendant);
            }
            remembered.insert(collapsing, open);
        }

        if !remembered.is_empty() {
            // Snapshot the round's candidates first: ids restored below must
            // not have their own entries mined until a later toggle.
            let restoring: Vec<RowId> = expanded
                .iter()
                .filter(|id| remembered.contains_key(*id))
                .copied()
                .collect();
            for id in restoring {
                if let Some(saved) = remembered.remove(&id) {
                    expanded.extend(saved);
                }
            }
        }

        let mut newly_expanded: Vec<RowId> = expanded
            .difference(&self.expanded)
            .filter(|id| adjacency.contains(**id))
            .copied()
            .collect();
        newly_expanded.sort_unstable();

        ToggleOutcome {
            state: Self {
                expanded,
                remembered,
            },
            newly_expanded,
        }
    }

    /// Flips a single row and returns the successor state.
    ///
    /// Convenience over [`toggle`](Self::toggle) for callers that handle one
    /// disclosure control at a time: the requested set is the current
    /// expanded set with `id` added or removed, exactly what a controlled
    /// widget would report for that click.
    #[must_use]
    pub fn toggle_row(&self, id: RowId, adjacency: &Adjacency) -> ToggleOutcome {
        let mut requested: Vec<RowId> = self.expanded.iter().copied().collect();
        if let Some(position) = requested.iter().position(|&open| open == id) {
            requested.swap_remove(position);
        } else {
            requested.push(id);
        }
        self.toggle(requested, adjacency)
    }
}
