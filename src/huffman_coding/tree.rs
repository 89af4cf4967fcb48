//! Builds the Huffman tree from a frequency table.
//!
//! Nodes live in an arena owned by the `TreeBuilder` and refer to their children by index. The
//! builder clears the arena before every build, so one builder can be reused for any number of
//! tables without earlier nodes leaking into a later tree.

use log::{debug, trace};

use crate::{Frequencies, HuffError};

/// Most nodes a 256 symbol alphabet can produce: 256 leaves plus 255 merges.
pub const MAX_NODES: usize = 2 * 256 - 1;

/// Index of a node in the builder's arena.
pub type NodeId = usize;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum NodeData {
    Kids(NodeId, NodeId),
    Leaf(u8),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: u64, node_data: NodeData) -> Node {
        Node { weight, node_data }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }
}

/// Owns the node arena and the working pool used while merging.
#[derive(Debug)]
pub struct TreeBuilder {
    /// Every node created during the current build, leaves first.
    nodes: Vec<Node>,
    /// Nodes not yet merged into a parent.
    pool: Vec<NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(MAX_NODES),
            pool: Vec::with_capacity(256),
        }
    }

    /// Drop all nodes from a previous build.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.pool.clear();
    }

    /// Count of nodes in the arena. After a build this is 2n - 1 for n leaves.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Build a tree from the frequency table. Fails with EmptyAlphabet if every count is zero.
    /// A single non-zero count yields a tree whose root is that leaf.
    pub fn build(&mut self, freqs: &Frequencies) -> Result<HuffTree<'_>, HuffError> {
        self.reset();

        // Seed the pool with one leaf per byte that occurs, in byte order.
        for (byte, &count) in freqs.iter().enumerate() {
            if count > 0 {
                let id = self.push_node(Node::new(count, NodeData::Leaf(byte as u8)));
                self.pool.push(id);
            }
        }
        if self.pool.is_empty() {
            return Err(HuffError::EmptyAlphabet);
        }
        debug!("Building tree from {} symbols", self.pool.len());

        while self.pool.len() > 1 {
            // Stable sort, so equal weights keep their pool order.
            let nodes = &self.nodes;
            self.pool.sort_by_key(|&id| nodes[id].weight);

            let left = self.pool.remove(0);
            let right = self.pool.remove(0);
            let weight = self.nodes[left].weight + self.nodes[right].weight;
            let id = self.push_node(Node::new(weight, NodeData::Kids(left, right)));
            self.pool.push(id);
            trace!("Merged nodes {} and {} into {} (weight {})", left, right, id, weight);
        }
        debug_assert!(self.nodes.len() <= MAX_NODES);

        Ok(HuffTree {
            nodes: &self.nodes,
            root: self.pool[0],
        })
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A finished tree. It borrows the builder's arena, so it is gone before the next build starts.
#[derive(Debug, Clone, Copy)]
pub struct HuffTree<'a> {
    nodes: &'a [Node],
    root: NodeId,
}

impl<'a> HuffTree<'a> {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &'a Node {
        &self.nodes[id]
    }

    /// Total weight of the tree, equal to the sum of all frequencies.
    pub fn weight(&self) -> u64 {
        self.nodes[self.root].weight
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 0_usize)];
        while let Some((id, depth)) = stack.pop() {
            match self.nodes[id].node_data {
                NodeData::Kids(left, right) => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
                NodeData::Leaf(_) => deepest = deepest.max(depth),
            }
        }
        deepest
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn table(pairs: &[(u8, u64)]) -> Frequencies {
        let mut freqs = [0_u64; 256];
        for &(byte, count) in pairs {
            freqs[byte as usize] = count;
        }
        freqs
    }

    #[test]
    fn empty_alphabet_test() {
        let mut builder = TreeBuilder::new();
        let result = builder.build(&[0; 256]);
        assert!(matches!(result, Err(HuffError::EmptyAlphabet)));
        assert_eq!(builder.node_count(), 0);
    }

    #[test]
    fn single_leaf_is_root_test() {
        let mut builder = TreeBuilder::new();
        let tree = builder.build(&table(&[(b'x', 7)])).unwrap();
        assert_eq!(tree.node(tree.root()).node_data, NodeData::Leaf(b'x'));
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.weight(), 7);
    }

    #[test]
    fn lightest_goes_left_test() {
        let mut builder = TreeBuilder::new();
        let tree = builder.build(&table(&[(b'a', 3), (b'b', 1)])).unwrap();
        let root = tree.node(tree.root());
        assert_eq!(root.weight, 4);
        match root.node_data {
            NodeData::Kids(left, right) => {
                assert_eq!(tree.node(left).node_data, NodeData::Leaf(b'b'));
                assert_eq!(tree.node(right).node_data, NodeData::Leaf(b'a'));
            }
            NodeData::Leaf(_) => panic!("root should have kids"),
        }
    }

    #[test]
    fn ties_favor_leaves_and_low_bytes_test() {
        // a and b merge first (lowest bytes among the 1s), then c beats the new node of weight 2.
        let mut builder = TreeBuilder::new();
        let tree = builder.build(&table(&[(b'c', 2), (b'a', 1), (b'b', 1)])).unwrap();
        let (left, right) = match tree.node(tree.root()).node_data {
            NodeData::Kids(l, r) => (l, r),
            NodeData::Leaf(_) => panic!("root should have kids"),
        };
        assert_eq!(tree.node(left).node_data, NodeData::Leaf(b'c'));
        match tree.node(right).node_data {
            NodeData::Kids(l, r) => {
                assert_eq!(tree.node(l).node_data, NodeData::Leaf(b'a'));
                assert_eq!(tree.node(r).node_data, NodeData::Leaf(b'b'));
            }
            NodeData::Leaf(_) => panic!("merged node expected on the right"),
        }
    }

    #[test]
    fn byte_zero_is_a_leaf_test() {
        let mut builder = TreeBuilder::new();
        let tree = builder.build(&table(&[(0, 5), (1, 2)])).unwrap();
        assert_eq!(tree.leaf_count(), 2);
        assert!(tree.node(0).is_leaf());
        assert_eq!(tree.node(0).node_data, NodeData::Leaf(0));
    }

    #[test]
    fn full_alphabet_node_count_test() {
        let mut builder = TreeBuilder::new();
        let tree = builder.build(&[1; 256]).unwrap();
        assert_eq!(tree.leaf_count(), 256);
        assert_eq!(tree.depth(), 8);
        assert_eq!(builder.node_count(), MAX_NODES);
    }

    #[test]
    fn powers_of_two_depth_test() {
        // 1, 1, 2, 4, ... 2^30 chains into a tree 31 levels deep.
        let mut freqs = [0_u64; 256];
        freqs[0] = 1;
        for i in 1..32 {
            freqs[i] = 1 << (i - 1);
        }
        let mut builder = TreeBuilder::new();
        let tree = builder.build(&freqs).unwrap();
        assert_eq!(tree.depth(), 31);
        assert_eq!(tree.weight(), 1 << 31);
    }

    #[test]
    fn counts_above_u32_test() {
        let big = u32::MAX as u64 + 5;
        let mut builder = TreeBuilder::new();
        let tree = builder.build(&table(&[(b'a', big), (b'b', big), (b'c', 1)])).unwrap();
        assert_eq!(tree.weight(), 2 * big + 1);
        assert_eq!(tree.leaf_count(), 3);
    }

    #[test]
    fn reuse_resets_pool_test() {
        let mut builder = TreeBuilder::new();
        builder.build(&[3; 256]).unwrap();
        let tree = builder.build(&table(&[(b'q', 1), (b'r', 1)])).unwrap();
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.weight(), 2);
        assert_eq!(builder.node_count(), 3);
    }
}
