//! Derives the per-byte code table from a finished tree.

use log::debug;

use super::tree::{HuffTree, NodeData, NodeId, TreeBuilder};
use crate::{Frequencies, HuffError};

/// Code assigned to the only symbol of a one-symbol alphabet.
const SINGLE_SYMBOL_CODE: &str = "0";

/// Maps each byte value to its code, written as '0'/'1' symbols. Bytes that never occurred
/// have an empty entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<String>,
}

impl CodeTable {
    /// Walk the tree depth first and record the path to every leaf.
    pub fn from_tree(tree: &HuffTree<'_>) -> Self {
        let mut codes = vec![String::new(); 256];
        match tree.node(tree.root()).node_data {
            NodeData::Leaf(byte) => {
                // No merges happened, so the path to the only leaf is empty.
                debug!("Single symbol alphabet, byte {} gets code {}", byte, SINGLE_SYMBOL_CODE);
                codes[byte as usize] = SINGLE_SYMBOL_CODE.to_string();
            }
            NodeData::Kids(..) => {
                let mut path = String::with_capacity(256);
                assign_codes(tree, tree.root(), &mut path, &mut codes);
            }
        }
        CodeTable { codes }
    }

    /// Build a throwaway tree and derive the table from it.
    pub fn from_frequencies(freqs: &Frequencies) -> Result<Self, HuffError> {
        let mut builder = TreeBuilder::new();
        let tree = builder.build(freqs)?;
        Ok(Self::from_tree(&tree))
    }

    pub fn lookup(&self, byte: u8) -> Result<&str, HuffError> {
        match self.codes[byte as usize].as_str() {
            "" => Err(HuffError::MissingCode(byte)),
            code => Ok(code),
        }
    }

    pub fn code(&self, byte: u8) -> Option<&str> {
        self.lookup(byte).ok()
    }

    /// Length of the byte's code, or 0 if it has none.
    pub fn code_len(&self, byte: u8) -> usize {
        self.codes[byte as usize].len()
    }

    /// Number of bytes that have a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|code| !code.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over (byte, code) for every byte that has a code, in byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, code)| !code.is_empty())
            .map(|(byte, code)| (byte as u8, code.as_str()))
    }

    pub fn max_code_len(&self) -> usize {
        self.codes.iter().map(String::len).max().unwrap_or(0)
    }

    /// Bits needed to encode data with exactly these frequencies.
    pub fn weighted_len(&self, freqs: &Frequencies) -> u64 {
        freqs
            .iter()
            .zip(&self.codes)
            .map(|(&count, code)| count * code.len() as u64)
            .sum()
    }

    /// True if no code is a prefix of another. Compares every pair of codes, which is fine for a
    /// 256 symbol table; meant for tests and diagnostics, not the encoding path.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&str> = self.iter().map(|(_, code)| code).collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !b.starts_with(*a))
        })
    }
}

/// Recursively walk the tree. Left appends '0', right appends '1'; a leaf takes the path so far.
fn assign_codes(tree: &HuffTree<'_>, id: NodeId, path: &mut String, codes: &mut [String]) {
    match tree.node(id).node_data {
        NodeData::Kids(left, right) => {
            path.push('0');
            assign_codes(tree, left, path, codes);
            path.pop();
            path.push('1');
            assign_codes(tree, right, path, codes);
            path.pop();
        }
        NodeData::Leaf(byte) => codes[byte as usize] = path.clone(),
    }
}
