// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A terminal database explorer driven by the outline engine.
//!
//! Walks the whole lifecycle: flatten a nested tree, toggle rows open in
//! click order, collapse a branch and watch its remembered shape come
//! back, then append a table and re-flatten with the expansion state
//! carried over.
//!
//! Run:
//! - `cargo run -p coppice_demos --example database_explorer`

use coppice_demos::{Meta, database_tree, new_table};
use coppice_outline::{ExpansionState, Outline, RowId, flatten, node_at, with_child_appended};

/// Looks up a row id by display name.
fn id_of(outline: &Outline<'_, Meta>, name: &str) -> RowId {
    outline
        .rows()
        .iter()
        .find(|row| row.name() == name)
        .map(|row| row.id())
        .expect("the sample data contains the row")
}

/// Prints every expansion the toggle reported, in display order.
fn report(outline: &Outline<'_, Meta>, newly_expanded: &[RowId]) {
    for &id in newly_expanded {
        if let Some(row) = outline.row(id) {
            println!("  expanded: {}", row.name());
        }
    }
}

/// Prints the visible rows with indentation and disclosure markers.
fn print_visible(outline: &Outline<'_, Meta>, state: &ExpansionState) {
    for row in outline.visible_rows(state) {
        let meta = row.payload();
        let marker = if !row.has_children() {
            ' '
        } else if state.is_expanded(row.id()) {
            '-'
        } else {
            '+'
        };
        let disabled = if meta.disabled { "  (disabled)" } else { "" };
        println!(
            "{:indent$}{marker} [{}] {}{disabled}",
            "",
            meta.icon.glyph(),
            row.name(),
            indent = row.depth() * 2,
        );
        if !row.has_children()
            && state.is_expanded(row.id())
            && let Some(hint) = meta.empty_hint
        {
            println!("{:indent$}      {hint}", "", indent = row.depth() * 2);
        }
    }
}

fn main() {
    let tree = database_tree();
    let outline = flatten(&tree);
    let mut state = ExpansionState::new();

    println!("Database explorer: {} rows flattened", outline.len());
    print_visible(&outline, &state);

    // Drill into the production analytics schema, one click per level.
    // `public` is opened along the way to show its empty state.
    println!();
    println!("Opening the analytics events table, one click per level:");
    for name in [
        "Production Server",
        "PostgreSQL",
        "public",
        "analytics",
        "events",
    ] {
        let outcome = state.toggle_row(id_of(&outline, name), outline.adjacency());
        report(&outline, &outcome.newly_expanded);
        state = outcome.state;
    }
    println!();
    print_visible(&outline, &state);

    // Collapse PostgreSQL. The open shape underneath is remembered.
    let postgres = id_of(&outline, "PostgreSQL");
    state = state.toggle_row(postgres, outline.adjacency()).state;
    println!();
    println!("Collapsed PostgreSQL:");
    print_visible(&outline, &state);

    // One click brings the whole branch back the way it was left.
    let outcome = state.toggle_row(postgres, outline.adjacency());
    state = outcome.state;
    println!();
    println!("Re-expanded PostgreSQL:");
    report(&outline, &outcome.newly_expanded);
    println!();
    print_visible(&outline, &state);

    // Add a third table under the open `analytics` schema, then re-flatten.
    // The appended subtree lands after every currently open row, so the
    // carried state still points at the same rows.
    let path = outline
        .path_to(id_of(&outline, "analytics"))
        .expect("analytics is in the outline");
    let number = node_at(&tree, &path)
        .expect("the path came from this tree")
        .children
        .len()
        + 1;
    let tree = with_child_appended(&tree, &path, new_table(number))
        .expect("the path came from this tree");
    let outline = flatten(&tree);

    println!();
    println!(
        "Added new_table_{number} under analytics ({} rows now):",
        outline.len()
    );
    print_visible(&outline, &state);
}
