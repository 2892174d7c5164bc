use std::collections::BTreeSet;

use scapegoat::ScapegoatSet;

use crate::{ordered_values, pick_alpha, Op};

quickcheck::quickcheck! {
    fn matches_btree_set(alpha: u8, ops: Vec<Op>) -> bool {
        let mut set = ScapegoatSet::new(pick_alpha(alpha)).unwrap();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(x) => assert_eq!(set.insert(x), model.insert(x)),
                Op::Remove(x) => assert_eq!(set.remove(&x), model.remove(&x)),
            }

            if let Some(tree) = set.tree() {
                let mut values = Vec::new();
                ordered_values(tree.root(), true, &mut values);
                assert_eq!(values.len(), model.len());
                assert!(tree.height() <= tree.alpha().height_bound(tree.max_size()));
            }
        }

        set.iter().eq(model.iter()) && set.len() == model.len()
    }
}

quickcheck::quickcheck! {
    fn bulk_operations(xs: Vec<i8>, ys: Vec<i8>) -> bool {
        let mut set = ScapegoatSet::new(0.5).unwrap();
        set.extend(xs.iter().copied());
        let mut model: BTreeSet<i8> = xs.into_iter().collect();

        assert_eq!(set.remove_all(&ys), ys.iter().any(|y| model.contains(y)));
        for y in &ys {
            model.remove(y);
        }
        assert!(set.contains_all(&model));

        set.retain(|x| x % 2 == 0);
        model.retain(|x| x % 2 == 0);
        set.to_vec() == model.into_iter().collect::<Vec<_>>()
    }
}
