//! The tools module provides the helper pieces around the Huffman engine.
//!
//! The tools are:
//! - cli: Command line interface and program options.
//! - freq_count: Frequency count of the input symbols.
//! - priority_queue: Max-priority queue that drives the tree merges.
//! - tree_dump: Pre-order listing of a tree for inspection.
//!
pub mod cli;
pub mod freq_count;
pub mod priority_queue;
pub mod tree_dump;
