//! Huffman code tables for text.
//!
//! Counts the characters of a text, builds a Huffman tree by repeatedly merging the two most
//! frequent nodes, and derives a numeric code for every character from the finished tree.
//!
//! Basic usage:
//!
//! ```
//! let table = huffcode::build_code_table("aab", huffcode::MAX_MERGES).unwrap();
//! assert_eq!(table.get('a'), Some(0));
//! assert_eq!(table.get('b'), Some(1));
//! ```
//!
//! The binary prints the table for the text given on the command line:
//!
//! `$> huffcode "The quick brown fox jumps over the lazy dog"`
//!
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use error::{Error, Result};
pub use huffman_coding::code_table::{code_table, CodeTable};
pub use huffman_coding::huffman::{
    build_code_table, build_tree, HuffmanNode, HuffmanTree, NodeData, MAX_MERGES,
};
