use bintree::positional::Tree;

/// Lays out `0..len` in level order, so the parent of node `i` is `(i - 1) / 2`.
fn complete_tree(len: usize) -> Tree<usize> {
    let values: Vec<_> = (0..len).map(Some).collect();
    Tree::build(&values)
}

/// The indices from `i` up to the root.
fn ancestors(mut i: usize) -> Vec<usize> {
    let mut path = vec![i];
    while i > 0 {
        i = (i - 1) / 2;
        path.push(i);
    }
    path
}

quickcheck::quickcheck! {
    fn lca_matches_index_arithmetic(len: u8, a: u8, b: u8) -> bool {
        let len = usize::from(len);
        let (a, b) = (usize::from(a), usize::from(b));
        let tree = complete_tree(len);

        let expected = if a < len && b < len {
            let above_b = ancestors(b);
            ancestors(a).into_iter().find(|i| above_b.contains(i))
        } else {
            None
        };

        tree.find_lowest_common_ancestor(&a, &b).copied() == expected
    }

    fn gaps_remove_whole_subtrees(len: u8, gap: u8) -> bool {
        let len = usize::from(len);
        let gap = usize::from(gap);
        let mut values: Vec<_> = (0..len).map(Some).collect();
        if let Some(slot) = values.get_mut(gap) {
            *slot = None;
        }
        let tree = Tree::build(&values);

        (0..len).all(|i| tree.contains(&i) == !ancestors(i).contains(&gap))
    }
}
