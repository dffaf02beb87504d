use std::collections::HashMap;

use bitvec::vec::BitVec;
use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::frequency::Symbol;

/// Node of a Huffman tree.
///
/// A leaf carries exactly one symbol. An internal node carries the symbols of
/// its subtree, left before right; they are only used for display.
#[derive(Debug, Clone)]
pub struct HuffmanNode<S: Symbol> {
    /// Symbols covered by this subtree
    pub symbols: Vec<S>,
    /// Aggregate frequency of the subtree
    pub weight: usize,
    /// Index of the parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Left child (bit 0)
    pub left: Option<Index>,
    /// Right child (bit 1)
    pub right: Option<Index>,
    /// Descent from the root, empty for the root itself
    pub code_path: BitVec,
}

impl<S: Symbol> HuffmanNode<S> {
    pub(crate) fn leaf(symbol: S, weight: usize) -> Self {
        Self {
            symbols: vec![symbol],
            weight,
            parent: None,
            left: None,
            right: None,
            code_path: BitVec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The symbol of a leaf, None for internal nodes.
    pub fn symbol(&self) -> Option<&S> {
        if self.is_leaf() {
            self.symbols.first()
        } else {
            None
        }
    }

    /// Child reached by `bit`: 1 goes right, 0 goes left.
    pub fn child(&self, bit: bool) -> Option<Index> {
        if bit {
            self.right
        } else {
            self.left
        }
    }
}

/// Arena-backed Huffman tree.
///
/// The arena owns every node; `left`/`right` links express ownership from
/// parent to child, `parent` is a plain back-reference. A tree starts unbuilt,
/// is built exactly once and is read-only afterwards.
#[derive(Debug, Clone)]
pub struct HuffmanTree<S: Symbol> {
    pub(crate) arena: Arena<HuffmanNode<S>>,
    pub(crate) root: Option<Index>,
    pub(crate) built: bool,
    pub(crate) leaf_index: HashMap<S, Index>,
    /// Code of a leaf that is also the root: a single `0` bit
    pub(crate) lone_leaf_code: BitVec,
}

impl<S: Symbol> Default for HuffmanTree<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> HuffmanTree<S> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            built: false,
            leaf_index: HashMap::new(),
            lone_leaf_code: BitVec::repeat(false, 1),
        }
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn root_node(&self) -> Option<&HuffmanNode<S>> {
        self.root.and_then(|idx| self.arena.get(idx))
    }

    pub fn node(&self, idx: Index) -> Option<&HuffmanNode<S>> {
        self.arena.get(idx)
    }

    /// Number of nodes, leaves and internal.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The leaf carrying `symbol`.
    pub fn leaf_for(&self, symbol: &S) -> Option<&HuffmanNode<S>> {
        self.leaf_index.get(symbol).and_then(|&idx| self.arena.get(idx))
    }

    /// Root index of a tree that can be used for coding.
    pub(crate) fn ready_root(&self) -> DomainResult<Index> {
        if !self.built {
            return Err(DomainError::TreeNotBuilt);
        }
        self.root.ok_or(DomainError::EmptyTree)
    }

    pub(crate) fn node_at(&self, idx: Index) -> DomainResult<&HuffmanNode<S>> {
        // Indices only ever come from this arena and nodes are never removed.
        self.arena.get(idx).ok_or(DomainError::DanglingNode)
    }

    /// Pre-order traversal: node, left subtree, right subtree.
    pub fn iter(&self) -> TreeIterator<'_, S> {
        TreeIterator::new(self)
    }

    pub fn iter_postorder(&self) -> PostOrderIterator<'_, S> {
        PostOrderIterator::new(self)
    }

    /// Leaves from left to right.
    pub fn leaves(&self) -> impl Iterator<Item = &HuffmanNode<S>> {
        self.iter()
            .map(|(_, node)| node)
            .filter(|node| node.is_leaf())
    }

    /// Levels in the tree, 0 when there is no root.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();

        while let Some((idx, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some(node) = self.arena.get(idx) {
                for child in [node.left, node.right].into_iter().flatten() {
                    stack.push((child, depth + 1));
                }
            }
        }

        max_depth
    }

    /// First node in pre-order whose weight equals `weight`.
    #[instrument(level = "debug", skip(self))]
    pub fn find_by_weight(&self, weight: usize) -> Option<(Index, &HuffmanNode<S>)> {
        self.iter().find(|(_, node)| node.weight == weight)
    }
}

pub struct TreeIterator<'a, S: Symbol> {
    tree: &'a HuffmanTree<S>,
    stack: Vec<Index>,
}

impl<'a, S: Symbol> TreeIterator<'a, S> {
    fn new(tree: &'a HuffmanTree<S>) -> Self {
        let stack = tree.root.into_iter().collect();
        Self { tree, stack }
    }
}

impl<'a, S: Symbol> Iterator for TreeIterator<'a, S> {
    type Item = (Index, &'a HuffmanNode<S>);

    fn next(&mut self) -> Option<Self::Item> {
        let current_idx = self.stack.pop()?;
        let node = self.tree.arena.get(current_idx)?;
        // Right first so that left is popped next
        if let Some(right) = node.right {
            self.stack.push(right);
        }
        if let Some(left) = node.left {
            self.stack.push(left);
        }
        Some((current_idx, node))
    }
}

pub struct PostOrderIterator<'a, S: Symbol> {
    tree: &'a HuffmanTree<S>,
    stack: Vec<(Index, bool)>,
}

impl<'a, S: Symbol> PostOrderIterator<'a, S> {
    fn new(tree: &'a HuffmanTree<S>) -> Self {
        let stack = tree.root.map(|r| (r, false)).into_iter().collect();
        Self { tree, stack }
    }
}

impl<'a, S: Symbol> Iterator for PostOrderIterator<'a, S> {
    type Item = (Index, &'a HuffmanNode<S>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.arena.get(current_idx) {
                if visited {
                    return Some((current_idx, node));
                }
                self.stack.push((current_idx, true));
                if let Some(right) = node.right {
                    self.stack.push((right, false));
                }
                if let Some(left) = node.left {
                    self.stack.push((left, false));
                }
            }
        }
        None
    }
}
