use bintree::ordered::Tree;

use std::collections::HashSet;

fn tree_of(xs: &[i8]) -> Tree<i8, i16> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x, i16::from(*x) * 3);
    }
    tree
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);

        xs.iter().all(|x| tree.find(x) == Some(&(i16::from(*x) * 3)))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = tree_of(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none())
    }

    fn in_order_is_sorted_and_unique(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);
        let mut expected: Vec<_> = xs.iter().copied().collect::<HashSet<_>>().into_iter().collect();
        expected.sort_unstable();

        let keys: Vec<_> = tree.traverse_in_order().into_iter().map(|(k, _)| *k).collect();
        keys == expected && tree.len() == expected.len()
    }

    fn duplicate_insert_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
        let mut tree = tree_of(&xs);
        tree.insert(x, 0);
        let before = format!("{:?}", tree);
        let shape = tree.render(&Default::default());

        !tree.insert(x, 1) && format!("{:?}", tree) == before && tree.render(&Default::default()) == shape
    }

    fn insert_then_find(xs: Vec<i8>, x: i8, value: i16) -> bool {
        let mut tree = tree_of(&xs);
        tree.delete(&x);

        tree.insert(x, value) && tree.find(&x) == Some(&value)
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = tree_of(&xs);
        for delete in &deletes {
            tree.delete(delete);
        }

        let mut still_present = xs;
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| tree.find(x).is_none())
            && still_present.iter().all(|x| tree.find(x) == Some(&(i16::from(*x) * 3)))
    }

    fn second_delete_fails(xs: Vec<i8>, x: i8) -> bool {
        let mut tree = tree_of(&xs);
        tree.delete(&x);
        let before = format!("{:?}", tree);

        !tree.delete(&x) && format!("{:?}", tree) == before
    }
}
