//! The huffman module turns a byte frequency table into a prefix code and uses it to encode data.
//!
//! Coding happens in three sequential stages:
//! - tree: greedily merge the two lightest nodes until a single root remains.
//! - code_table: walk the finished tree, appending '0' for each left branch and '1' for each right
//!   branch, and record the path at every leaf.
//! - encoder: replace every input byte with its code, in input order.
//!
//! The alphabet is fixed at 256 byte values, so the tree never holds more than 511 nodes. A full
//! re-sort of the working pool on each merge is cheap at that size and keeps tie-breaking simple:
//! among equal weights, earlier pool entries win, which means lower byte values first and freshly
//! merged nodes after any leaf of the same weight.
//!
//! Codes are kept as text ('0'/'1' symbols). Packing them into bytes is left to the caller.
//!

pub mod code_table;
pub mod encoder;
pub mod tree;
