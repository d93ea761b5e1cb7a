use std::fmt::{Display, Formatter};

use crate::huffman_coding::huffman::HuffmanNode;

/// Pre-order listing of a tree for inspection: the root, then every left and right child with its
/// label and priority.
pub struct TreeDump<'a>(pub &'a HuffmanNode);

impl Display for TreeDump<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_node(f, "ROOT", self.0)?;
        write_kids(f, self.0)
    }
}

fn write_node(f: &mut Formatter<'_>, tag: &str, node: &HuffmanNode) -> std::fmt::Result {
    writeln!(
        f,
        "{}\nNode char: {:?}\nNode priority: {}\n",
        tag,
        node.label(),
        node.priority()
    )
}

fn write_kids(f: &mut Formatter<'_>, node: &HuffmanNode) -> std::fmt::Result {
    if let Some(left) = node.left() {
        write_node(f, "LNODE", left)?;
        write_kids(f, left)?;
    }
    if let Some(right) = node.right() {
        write_node(f, "RNODE", right)?;
        write_kids(f, right)?;
    }
    Ok(())
}

#[test]
fn dump_lists_nodes_in_pre_order() {
    let root = HuffmanNode::merge(
        HuffmanNode::merge(HuffmanNode::leaf('a', 2), HuffmanNode::leaf('b', 1)),
        HuffmanNode::leaf('c', 1),
    );
    let dump = TreeDump(&root).to_string();
    let tags = dump
        .lines()
        .filter(|line| line.ends_with("NODE") || *line == "ROOT")
        .collect::<Vec<_>>();
    assert_eq!(tags, vec!["ROOT", "LNODE", "LNODE", "RNODE", "RNODE"]);
    assert!(dump.starts_with("ROOT\nNode char: \"abc\"\nNode priority: 4\n\n"));
    assert!(dump.ends_with("RNODE\nNode char: \"c\"\nNode priority: 1\n\n"));
}

#[test]
fn dump_of_a_lone_leaf_is_just_the_root() {
    let dump = TreeDump(&HuffmanNode::leaf('z', 5)).to_string();
    assert_eq!(dump, "ROOT\nNode char: \"z\"\nNode priority: 5\n\n");
}
