use huffcode::tools::freq_count::freqs;
use huffcode::tools::priority_queue::PriorityQueue;
use huffcode::{build_code_table, build_tree, Error, HuffmanNode, NodeData, MAX_MERGES};
use proptest::prelude::*;

/// Collects leaf symbols and checks the internal node invariants on the way down.
fn collect_leaves(node: &HuffmanNode, leaves: &mut Vec<char>) {
    match node.node_data() {
        NodeData::Leaf(sym) => {
            assert_eq!(node.label().chars().collect::<Vec<_>>(), vec![*sym]);
            leaves.push(*sym);
        }
        NodeData::Kids(left, right) => {
            assert_eq!(node.label(), format!("{}{}", left.label(), right.label()));
            assert_eq!(node.priority(), left.priority() + right.priority());
            collect_leaves(left, leaves);
            collect_leaves(right, leaves);
        }
    }
}

proptest! {
    /// k distinct symbols take k-1 merges and the root weighs the whole input.
    #[test]
    fn prop_merge_count_and_root_weight(text in "[a-p]{1,200}") {
        let freqs = freqs(&text);
        let tree = build_tree(&freqs, MAX_MERGES).unwrap();
        prop_assert_eq!(tree.merges, 2 * (freqs.len() - 1));
        prop_assert_eq!(tree.root.priority() as usize, text.chars().count());
    }

    /// Leaves are exactly the distinct input symbols, labels concatenate children.
    #[test]
    fn prop_tree_shape(text in "\\PC{1,100}") {
        let freqs = freqs(&text);
        let tree = build_tree(&freqs, usize::MAX).unwrap();
        let mut leaves = vec![];
        collect_leaves(&tree.root, &mut leaves);
        leaves.sort_unstable();
        let mut distinct = freqs.keys().copied().collect::<Vec<_>>();
        distinct.sort_unstable();
        prop_assert_eq!(leaves, distinct);
    }

    /// Every extraction returns a priority no smaller than anything left behind.
    #[test]
    fn prop_queue_extracts_max(values in prop::collection::vec(0..1000u32, 1..100)) {
        let mut pq: PriorityQueue<u32> = values.iter().copied().collect();
        let mut previous = u32::MAX;
        while !pq.is_empty() {
            let top = pq.extract_highest().unwrap();
            prop_assert!(top <= previous);
            if let Some(next) = pq.peek_priority() {
                prop_assert!(top >= next);
            }
            previous = top;
        }
        prop_assert!(matches!(pq.extract_highest(), Err(Error::EmptyQueue)));
    }

    /// The table has one entry per distinct symbol whenever the budget allows the tree.
    #[test]
    fn prop_table_covers_alphabet(text in "\\PC{0,100}") {
        let distinct = freqs(&text).len();
        match build_code_table(&text, MAX_MERGES) {
            Ok(table) => prop_assert_eq!(table.len(), distinct),
            Err(Error::TreeTooLarge { merges, .. }) => {
                prop_assert!(merges > MAX_MERGES);
                prop_assert_eq!(merges, 2 * (distinct - 1));
            }
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }

    /// Building twice from the same text gives the same table.
    #[test]
    fn prop_deterministic(text in "[a-z ]{0,120}") {
        let first = build_code_table(&text, MAX_MERGES).unwrap();
        let second = build_code_table(&text, MAX_MERGES).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn alphabet_of_257_symbols_is_too_large() {
    let text = (0..257u32).filter_map(char::from_u32).collect::<String>();
    assert!(matches!(
        build_code_table(&text, MAX_MERGES),
        Err(Error::TreeTooLarge { merges: 512, .. })
    ));
}

#[test]
fn sample_sentence_table() {
    let text = "The quick brown fox jumps over the lazy dog";
    let table = build_code_table(text, MAX_MERGES).unwrap();
    assert_eq!(table.len(), freqs(text).len());
    assert_eq!(table.to_string().lines().count(), table.len());
}
