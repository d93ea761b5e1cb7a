//! Code table derivation for a finished Huffman tree.
//!
//! Codes come from one shared 8 bit counter carried through a pre-order walk of the tree. Moving to
//! a left child leaves the counter alone, moving to a right child bumps it by one. Whenever the
//! child is a leaf, the current counter value is added onto that symbol's entry. The counter and
//! the entries wrap around at 256.
//!
//! The codes are numeric values, not bit paths, so two symbols are not guaranteed distinct codes.
//! A tree that is a single leaf gives its symbol the code 0.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use log::{debug, warn};

use super::huffman::{HuffmanNode, NodeData};

/// Symbol to code mapping, iterated in symbol order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, u8>,
}

impl CodeTable {
    pub fn get(&self, symbol: char) -> Option<u8> {
        self.codes.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.codes.iter().map(|(&sym, &code)| (sym, code))
    }
}

impl Display for CodeTable {
    /// One line per symbol, with the code printed in binary.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (sym, code) in self.iter() {
            writeln!(f, "{}; code -> {:b}", sym, code)?;
        }
        Ok(())
    }
}

/// Walk state: the shared counter and the entries built so far.
struct Tableify {
    counter: u8,
    wrapped: bool,
    codes: BTreeMap<char, u8>,
}

impl Tableify {
    fn visit(&mut self, node: &HuffmanNode) {
        if let NodeData::Kids(left, right) = node.node_data() {
            self.record(left);
            self.visit(left);

            self.step();
            self.record(right);
            self.visit(right);
        }
    }

    fn step(&mut self) {
        let (next, overflow) = self.counter.overflowing_add(1);
        self.counter = next;
        self.wrapped |= overflow;
    }

    fn record(&mut self, node: &HuffmanNode) {
        if let Some(sym) = node.symbol() {
            let entry = self.codes.entry(sym).or_insert(0);
            let (sum, overflow) = entry.overflowing_add(self.counter);
            *entry = sum;
            self.wrapped |= overflow;
        }
    }
}

/// Derive the code table of the tree under `root`.
pub fn code_table(root: &HuffmanNode) -> CodeTable {
    let mut walk = Tableify {
        counter: 0,
        wrapped: false,
        codes: BTreeMap::new(),
    };

    match root.symbol() {
        Some(sym) => {
            walk.codes.insert(sym, 0);
        }
        None => walk.visit(root),
    }

    if walk.wrapped {
        warn!("Code counter wrapped past 255, some codes were truncated");
    }
    debug!("Derived {} codes", walk.codes.len());
    CodeTable { codes: walk.codes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman_coding::huffman::{build_tree, MAX_MERGES};
    use crate::tools::freq_count::freqs;

    fn table_for(text: &str, max_merges: usize) -> (HuffmanNode, CodeTable) {
        let tree = build_tree(&freqs(text), max_merges).unwrap();
        let table = code_table(&tree.root);
        (tree.root, table)
    }

    #[test]
    fn three_symbols() {
        // a:4 b:2 merge first, then "ab" (left) with c (right)
        let (_, table) = table_for("aaaabbc", MAX_MERGES);
        let codes = table.iter().collect::<Vec<_>>();
        assert_eq!(codes, vec![('a', 0), ('b', 1), ('c', 2)]);
    }

    #[test]
    fn hand_built_tree() {
        // ((x y) (z w)): x=0, y=1, z=2 after the root's right step, w=3
        let root = HuffmanNode::merge(
            HuffmanNode::merge(HuffmanNode::leaf('x', 3), HuffmanNode::leaf('y', 2)),
            HuffmanNode::merge(HuffmanNode::leaf('z', 2), HuffmanNode::leaf('w', 1)),
        );
        let table = code_table(&root);
        assert_eq!(table.get('x'), Some(0));
        assert_eq!(table.get('y'), Some(1));
        assert_eq!(table.get('z'), Some(2));
        assert_eq!(table.get('w'), Some(3));
    }

    #[test]
    fn lone_leaf_gets_zero() {
        let table = code_table(&HuffmanNode::leaf('q', 9));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get('q'), Some(0));
    }

    #[test]
    fn counter_wraps_at_256() {
        let text = (0..300u32).filter_map(char::from_u32).collect::<String>();
        let (root, table) = table_for(&text, usize::MAX);
        assert_eq!(table.len(), 300);

        // The rightmost leaf is recorded last, after every one of the 299 right steps
        let mut node = &root;
        while let Some(right) = node.right() {
            node = right;
        }
        let last = node.symbol().unwrap();
        assert_eq!(table.get(last), Some((299 % 256) as u8));
    }

    #[test]
    fn display_prints_binary_codes() {
        let (_, table) = table_for("aaaabbc", MAX_MERGES);
        assert_eq!(table.to_string(), "a; code -> 0\nb; code -> 1\nc; code -> 10\n");
    }
}
