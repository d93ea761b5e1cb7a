//! The huffman module builds the Huffman tree for a piece of text and derives a code table from it.
//!
//! Symbols are counted, seeded into a max-priority queue as leaves, and the two heaviest nodes are
//! merged into a new parent until only the root remains. Every merge adds 2 to a counter which is
//! checked against a budget (256 by default) before the tree is handed back.
//!
//! The code table is then derived by a pre-order walk of the finished tree.
//!
//! The whole process is sequential and does not benefit from multithreading.
//!

pub mod code_table;
pub mod huffman;
