// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use coppice_outline::{ExpansionState, Node, RowId, flatten};
use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

/// Builds a uniform tree with `arity` children per node down to `levels`
/// levels below the roots.
fn uniform(levels: usize, arity: usize, counter: &mut u32) -> Node<u32> {
    let payload = *counter;
    *counter += 1;
    let children = if levels == 0 {
        Vec::new()
    } else {
        (0..arity)
            .map(|_| uniform(levels - 1, arity, counter))
            .collect()
    };
    Node::with_children(format!("node-{payload}"), payload, children)
}

fn uniform_forest(roots: usize, levels: usize, arity: usize) -> Vec<Node<u32>> {
    let mut counter = 0;
    (0..roots)
        .map(|_| uniform(levels, arity, &mut counter))
        .collect()
}

/// Builds a single chain of `len` nodes, iteratively so the setup itself
/// does not recurse.
fn chain(len: usize) -> Vec<Node<u32>> {
    let mut node = Node::new(format!("node-{}", len - 1), (len - 1) as u32);
    for index in (0..len - 1).rev() {
        node = Node::with_children(format!("node-{index}"), index as u32, vec![node]);
    }
    vec![node]
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline/flatten");

    // Wide and deep shapes at comparable node counts; throughput is rows
    // produced per second.
    for &(roots, levels, arity) in &[(4, 2, 8), (4, 5, 3), (1, 1, 1024)] {
        let tree = uniform_forest(roots, levels, arity);
        let rows = flatten(&tree).len();
        group.throughput(Throughput::Elements(rows as u64));

        group.bench_with_input(
            BenchmarkId::new(format!("uniform_l{levels}_a{arity}"), rows),
            &tree,
            |b, tree| {
                b.iter(|| black_box(flatten(tree)));
            },
        );
    }

    // Degenerate depth: the explicit stack should keep this linear.
    for len in [1_024usize, 8_192] {
        let tree = chain(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("chain", len), &tree, |b, tree| {
            b.iter(|| black_box(flatten(tree)));
        });
    }

    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline/toggle");

    // Hypothesis: collapsing the roots of a fully expanded forest is the
    // worst case (every subtree is enumerated and snapshotted), while
    // re-expanding restores from the snapshots without walking the tree.
    for &(roots, levels, arity) in &[(4, 2, 8), (4, 5, 3)] {
        let tree = uniform_forest(roots, levels, arity);
        let outline = flatten(&tree);
        let adjacency = outline.adjacency();
        let rows = outline.len();
        group.throughput(Throughput::Elements(rows as u64));

        let all: Vec<RowId> = outline.rows().iter().map(|row| row.id()).collect();
        let expanded = ExpansionState::new().toggle(all.iter().copied(), adjacency).state;
        let root_ids: Vec<RowId> = adjacency.roots().to_vec();
        let collapsed = expanded
            .toggle(root_ids.iter().copied(), adjacency)
            .state;

        // Re-opening the first level consumes one remembered entry per
        // child, each restoring that child's whole subtree.
        let mut reopen = root_ids.clone();
        for &root in &root_ids {
            reopen.extend(adjacency.children_of(Some(root)));
        }

        group.bench_with_input(
            BenchmarkId::new("collapse_to_roots", rows),
            &(&expanded, &root_ids),
            |b, (expanded, root_ids)| {
                b.iter(|| black_box(expanded.toggle(root_ids.iter().copied(), adjacency)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("reopen_first_level", rows),
            &(&collapsed, &reopen),
            |b, (collapsed, reopen)| {
                b.iter(|| black_box(collapsed.toggle(reopen.iter().copied(), adjacency)));
            },
        );
    }

    group.finish();
}

fn bench_visible_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline/visible_rows");

    // Everything expanded is the worst case for the scan: no subtree can
    // be skipped.
    for &(roots, levels, arity) in &[(4, 2, 8), (4, 5, 3)] {
        let tree = uniform_forest(roots, levels, arity);
        let outline = flatten(&tree);
        let rows = outline.len();
        let all: Vec<RowId> = outline.rows().iter().map(|row| row.id()).collect();
        let expanded = ExpansionState::new()
            .toggle(all.iter().copied(), outline.adjacency())
            .state;
        group.throughput(Throughput::Elements(rows as u64));

        group.bench_with_input(
            BenchmarkId::new("fully_expanded", rows),
            &expanded,
            |b, expanded| {
                b.iter(|| black_box(outline.visible_rows(expanded).count()));
            },
        );

        let collapsed = ExpansionState::new();
        group.bench_with_input(
            BenchmarkId::new("fully_collapsed", rows),
            &collapsed,
            |b, collapsed| {
                b.iter(|| black_box(outline.visible_rows(collapsed).count()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_flatten, bench_toggle, bench_visible_rows);
criterion_main!(benches);
