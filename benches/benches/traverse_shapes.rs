// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Rect, Vec2};
use understory_traverse::{
    ElementDesc, ElementFlags, ElementId, Outcome, Traversal, TraversalOrder, ViewTree,
};

/// Every `clip_every`-th element clips; everything is a view.
fn desc(i: usize, clip_every: usize) -> ElementDesc {
    let mut flags = ElementFlags::VIEW;
    if clip_every != 0 && i % clip_every == 0 {
        flags |= ElementFlags::CLIPS_TO_BOUNDS;
    }
    let step = (i % 7) as f64;
    ElementDesc {
        bounds: Rect::new(0.0, 0.0, 100.0, 40.0),
        transform: Affine::translate(Vec2::new(step * 3.0, step * 5.0)),
        z_index: (i % 5) as i32,
        flags,
    }
}

/// A complete tree of the given depth and fan-out.
fn gen_balanced(depth: usize, fan_out: usize, clip_every: usize) -> (ViewTree, ElementId) {
    let mut tree = ViewTree::new();
    let root = tree.insert(None, desc(0, clip_every));
    let mut level = vec![root];
    let mut n = 1;
    for _ in 0..depth {
        let mut next = Vec::with_capacity(level.len() * fan_out);
        for &parent in &level {
            for _ in 0..fan_out {
                next.push(tree.insert(Some(parent), desc(n, clip_every)));
                n += 1;
            }
        }
        level = next;
    }
    (tree, root)
}

/// One long chain: worst case for nesting, best case for the pending stack.
fn gen_chain(len: usize, clip_every: usize) -> (ViewTree, ElementId) {
    let mut tree = ViewTree::new();
    let root = tree.insert(None, desc(0, clip_every));
    let mut cur = root;
    for i in 1..len {
        cur = tree.insert(Some(cur), desc(i, clip_every));
    }
    (tree, root)
}

/// A root with many leaf children: worst case for the pending stack.
fn gen_flat(count: usize, clip_every: usize) -> (ViewTree, ElementId) {
    let mut tree = ViewTree::new();
    let root = tree.insert(None, desc(0, clip_every));
    for i in 1..=count {
        let _ = tree.insert(Some(root), desc(i, clip_every));
    }
    (tree, root)
}

fn bench_shapes(c: &mut Criterion) {
    let shapes = [
        ("balanced_d6_f4", gen_balanced(6, 4, 3)),
        ("chain_4096", gen_chain(4096, 3)),
        ("flat_4096", gen_flat(4096, 3)),
    ];
    let orders = [
        ("forward", TraversalOrder::Forward),
        ("backward_z", TraversalOrder::Backward { use_z_order: true }),
    ];

    let mut group = c.benchmark_group("traverse");
    for (shape, (tree, root)) in &shapes {
        group.throughput(Throughput::Elements(tree.len() as u64));
        for (order_name, order) in orders {
            group.bench_function(format!("{shape}/{order_name}"), |b| {
                b.iter(|| {
                    let walk = Traversal::with_order(tree, *root, order).unwrap();
                    let mut clipped = 0_usize;
                    for node in walk {
                        clipped += usize::from(node.bounding_rect.is_some());
                    }
                    black_box(clipped)
                });
            });
        }
    }
    group.finish();
}

fn bench_early_stop(c: &mut Criterion) {
    let (tree, root) = gen_balanced(6, 4, 0);
    c.bench_function("traverse/for_each_stop_after_64", |b| {
        b.iter(|| {
            let mut walk = Traversal::forward(&tree, root).unwrap();
            let mut seen = 0;
            let done = walk.for_each_node(|_, _, _| {
                seen += 1;
                if seen == 64 {
                    Outcome::Stop
                } else {
                    Outcome::Continue
                }
            });
            black_box((done, walk.pending_len()))
        });
    });
}

criterion_group!(benches, bench_shapes, bench_early_stop);
criterion_main!(benches);
