//! Property-based tests: `IndexedList` against a `Vec` model.

use proptest::prelude::*;

use indexed_list::IndexedList;
use indexed_list::threshold;

// =============================================================================
// Test helpers
// =============================================================================

/// A random list operation, with positions as fractions of the current length.
#[derive(Clone, Debug)]
enum ListOp {
    Insert { pos_pct: f64, value: i32 },
    Remove { pos_pct: f64 },
    Set { pos_pct: f64, value: i32 },
}

fn arbitrary_list_op() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        // Bias toward inserts so lists grow large enough to split.
        3 => (0.0..=1.0f64, any::<i32>()).prop_map(|(pos_pct, value)| ListOp::Insert { pos_pct, value }),
        2 => (0.0..=1.0f64).prop_map(|pos_pct| ListOp::Remove { pos_pct }),
        1 => (0.0..=1.0f64, any::<i32>()).prop_map(|(pos_pct, value)| ListOp::Set { pos_pct, value }),
    ]
}

fn apply(list: &mut IndexedList<i32>, model: &mut Vec<i32>, op: &ListOp) {
    let len = model.len();
    match op {
        ListOp::Insert { pos_pct, value } => {
            let pos = ((*pos_pct * len as f64) as usize).min(len);
            list.insert(pos, *value).unwrap();
            model.insert(pos, *value);
        }
        ListOp::Remove { pos_pct } => {
            if len == 0 {
                assert!(list.remove(0).is_err());
                return;
            }
            let pos = ((*pos_pct * len as f64) as usize).min(len - 1);
            assert_eq!(list.remove(pos).unwrap(), model.remove(pos));
        }
        ListOp::Set { pos_pct, value } => {
            if len == 0 {
                assert!(list.set(0, *value).is_err());
                return;
            }
            let pos = ((*pos_pct * len as f64) as usize).min(len - 1);
            let old = std::mem::replace(&mut model[pos], *value);
            assert_eq!(list.set(pos, *value).unwrap(), old);
        }
    }
}

fn block_invariant_holds(list: &IndexedList<i32>) -> bool {
    let sizes = list.block_sizes();
    if list.is_empty() {
        return sizes == vec![0];
    }
    let t = threshold(list.len());
    let bounded = sizes.iter().all(|&s| s >= 1 && s < 2 * t);
    let merged = sizes.windows(2).all(|pair| pair[0] + pair[1] >= t);
    bounded && merged && sizes.iter().sum::<usize>() == list.len()
}

// =============================================================================
// Model properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any sequence of edits leaves the list equal to the Vec model.
    #[test]
    fn matches_vec_model(ops in prop::collection::vec(arbitrary_list_op(), 1..300)) {
        let mut list = IndexedList::new();
        let mut model = Vec::new();
        for op in &ops {
            apply(&mut list, &mut model, op);
            prop_assert_eq!(list.len(), model.len());
        }
        prop_assert_eq!(list.to_vec(), model);
    }

    /// Block sizes stay within bounds after every completed operation.
    #[test]
    fn block_sizes_stay_bounded(ops in prop::collection::vec(arbitrary_list_op(), 1..300)) {
        let mut list = IndexedList::new();
        let mut model = Vec::new();
        for op in &ops {
            apply(&mut list, &mut model, op);
            prop_assert!(block_invariant_holds(&list), "sizes {:?}", list.block_sizes());
        }
    }

    /// insert(i, v) followed by get(i) returns v.
    #[test]
    fn insert_then_get(
        initial in prop::collection::vec(any::<i32>(), 0..200),
        pos_pct in 0.0..=1.0f64,
        value in any::<i32>(),
    ) {
        let mut list: IndexedList<_> = initial.iter().copied().collect();
        let pos = ((pos_pct * initial.len() as f64) as usize).min(initial.len());
        list.insert(pos, value).unwrap();
        prop_assert_eq!(list.get(pos), Ok(&value));
    }

    /// Inserting shifts later elements right; removing shifts them back.
    #[test]
    fn insert_and_remove_shift(
        initial in prop::collection::vec(any::<i32>(), 1..200),
        pos_pct in 0.0..=1.0f64,
    ) {
        let mut list: IndexedList<_> = initial.iter().copied().collect();
        let pos = ((pos_pct * initial.len() as f64) as usize).min(initial.len() - 1);

        list.insert(pos, 0).unwrap();
        for i in pos..initial.len() {
            prop_assert_eq!(list.get(i + 1), Ok(&initial[i]));
        }

        list.remove(pos).unwrap();
        list.remove(pos).unwrap();
        for i in pos + 1..initial.len() {
            prop_assert_eq!(list.get(i - 1), Ok(&initial[i]));
        }
    }

    /// Out-of-range indices are rejected without changing anything.
    #[test]
    fn out_of_range_is_rejected(
        initial in prop::collection::vec(any::<i32>(), 0..100),
        past_end in 0usize..50,
    ) {
        let mut list: IndexedList<_> = initial.iter().copied().collect();
        let len = initial.len();
        let sizes = list.block_sizes();

        prop_assert!(list.get(len + past_end).is_err());
        prop_assert!(list.set(len + past_end, 1).is_err());
        prop_assert!(list.remove(len + past_end).is_err());
        prop_assert!(list.insert(len + past_end + 1, 1).is_err());

        prop_assert_eq!(list.to_vec(), initial);
        prop_assert_eq!(list.block_sizes(), sizes);
    }
}
