use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::code_table::{code_table, CodeTable};
use crate::error::{Error, Result};
use crate::tools::freq_count::freqs;
use crate::tools::priority_queue::{Prioritized, PriorityQueue};

/// Default merge budget. Each merge consumes two queue entries and counts as 2.
pub const MAX_MERGES: usize = 256;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<HuffmanNode>, Box<HuffmanNode>),
    Leaf(char),
}

/// A node of the Huffman tree. Nodes are never changed once built; a merge makes a new parent.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct HuffmanNode {
    label: String,
    priority: u32,
    node_data: NodeData,
}

impl HuffmanNode {
    /// Create a new leaf for a single symbol
    pub fn leaf(symbol: char, priority: u32) -> HuffmanNode {
        HuffmanNode {
            label: symbol.to_string(),
            priority,
            node_data: NodeData::Leaf(symbol),
        }
    }

    /// Create a new parent owning both children. Label and priority are the sums of the children's.
    pub fn merge(left: HuffmanNode, right: HuffmanNode) -> HuffmanNode {
        let mut label = String::with_capacity(left.label.len() + right.label.len());
        label.push_str(&left.label);
        label.push_str(&right.label);
        HuffmanNode {
            label,
            priority: left.priority + right.priority,
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn node_data(&self) -> &NodeData {
        &self.node_data
    }

    /// The symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<char> {
        match self.node_data {
            NodeData::Leaf(sym) => Some(sym),
            NodeData::Kids(..) => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    pub fn left(&self) -> Option<&HuffmanNode> {
        match &self.node_data {
            NodeData::Kids(left, _) => Some(left),
            NodeData::Leaf(_) => None,
        }
    }

    pub fn right(&self) -> Option<&HuffmanNode> {
        match &self.node_data {
            NodeData::Kids(_, right) => Some(right),
            NodeData::Leaf(_) => None,
        }
    }
}

impl Prioritized for HuffmanNode {
    fn priority(&self) -> u32 {
        self.priority
    }
}

/// A finished tree along with the merge counter accumulated while building it.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    pub root: HuffmanNode,
    pub merges: usize,
}

/// Build a Huffman tree from symbol frequencies. Fails with `TreeTooLarge` when the merge counter
/// goes past `max_merges`, and with `EmptyQueue` when there are no symbols at all.
pub fn build_tree(freqs: &FxHashMap<char, u32>, max_merges: usize) -> Result<HuffmanTree> {
    // Seed in symbol order so equal frequencies always merge the same way
    let mut symbols = freqs
        .iter()
        .map(|(&sym, &freq)| (sym, freq))
        .collect::<Vec<(char, u32)>>();
    symbols.sort_unstable();

    let mut pq = PriorityQueue::with_capacity(symbols.len());
    pq.extend(
        symbols
            .into_iter()
            .map(|(sym, freq)| HuffmanNode::leaf(sym, freq)),
    );

    // Pull off the two biggest nodes and push back their parent until only the root is left.
    let mut merges = 0;
    while pq.len() > 1 {
        let left = pq.extract_highest()?;
        let right = pq.extract_highest()?;
        trace!(
            "Merging {:?} ({}) with {:?} ({})",
            left.label,
            left.priority,
            right.label,
            right.priority
        );
        pq.insert(HuffmanNode::merge(left, right));
        merges += 2;
    }

    if merges > max_merges {
        return Err(Error::TreeTooLarge {
            merges,
            max: max_merges,
        });
    }

    let root = pq.extract_highest()?;
    debug!(
        "Built tree over {} chars with {} merges, root weight {}",
        root.label.chars().count(),
        merges / 2,
        root.priority
    );
    Ok(HuffmanTree { root, merges })
}

/// Count the symbols of `text`, build the tree and derive its code table.
/// Empty text gives an empty table.
pub fn build_code_table(text: &str, max_merges: usize) -> Result<CodeTable> {
    let freqs = freqs(text);
    if freqs.is_empty() {
        debug!("No input symbols, returning an empty code table");
        return Ok(CodeTable::default());
    }
    let tree = build_tree(&freqs, max_merges)?;
    Ok(code_table(&tree.root))
}
