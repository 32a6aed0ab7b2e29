use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use bintree::ordered::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting keys in ascending order. Nothing rebalances so this is a chain
/// leaning right.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32, i32> {
    (0..)
        .take(num_nodes_in_full_tree(num_levels))
        .map(|x| (x, x))
        .collect()
}

/// Builds a tree by inserting keys in an order that leaves it balanced: each range is split at
/// its midpoint before either half is inserted.
///
/// It ensures there are `num_levels` of nodes, all full.
fn get_balanced_tree(num_levels: usize) -> Tree<i32, i32> {
    let xs = (0..)
        .take(num_nodes_in_full_tree(num_levels))
        .collect::<Vec<_>>();
    let mut tree = Tree::new();
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree<i32, i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(xs[mid], xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group. Every iteration gets a fresh copy of the tree.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32, i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // Unbalanced trees are as deep as they are long and the recursive operations follow them
    // all the way down, so stay well clear of the stack limit.
    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) - 1;
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_with_input(id, &largest_element_in_tree, |b, &largest| {
                b.iter_batched(
                    || tree.clone(),
                    |mut tree| f(&mut tree, black_box(largest as i32)),
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

/// All tests are run against balanced and unbalanced trees of various sizes and test
/// successful and unsuccessful actions.
pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _value = black_box(tree.find(&i));
    });
    bench_helper(c, "delete", |tree, i| {
        black_box(tree.delete(&i));
    });

    bench_helper(c, "insert", |tree, i| {
        black_box(tree.insert(i + 1, i + 1));
    });

    bench_helper(c, "find-miss", |tree, i| {
        let _value = black_box(tree.find(&(i + 1)));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        black_box(tree.delete(&(i + 1)));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
