//! Code-path assignment and symbol lookup.

use bitvec::slice::BitSlice;
use bitvec::vec::BitVec;
use generational_arena::Index;
use tracing::{instrument, trace};

use crate::domain::arena::{HuffmanNode, HuffmanTree};
use crate::domain::frequency::Symbol;

/// Give every node its descent from the root and index the leaves by symbol.
///
/// The root gets the empty path; a left child gets its parent's path plus `0`,
/// a right child its parent's path plus `1`. The result depends only on the
/// shape of the tree.
#[instrument(level = "trace", skip(tree))]
pub(crate) fn assign_code_paths<S: Symbol>(tree: &mut HuffmanTree<S>) {
    tree.leaf_index.clear();
    let mut stack: Vec<(Index, BitVec)> = tree.root.map(|r| (r, BitVec::new())).into_iter().collect();

    while let Some((idx, path)) = stack.pop() {
        let Some(node) = tree.arena.get_mut(idx) else {
            continue;
        };
        node.code_path = path.clone();

        if node.is_leaf() {
            if let Some(symbol) = node.symbols.first() {
                trace!("code {:?}: {} bit(s)", symbol, path.len());
                tree.leaf_index.insert(symbol.clone(), idx);
            }
            continue;
        }

        if let Some(right) = node.right {
            let mut right_path = path.clone();
            right_path.push(true);
            stack.push((right, right_path));
        }
        if let Some(left) = node.left {
            let mut left_path = path;
            left_path.push(false);
            stack.push((left, left_path));
        }
    }
}

impl<S: Symbol> HuffmanTree<S> {
    /// Bits written for `leaf`.
    ///
    /// This is the leaf's code path, except for a leaf that is the root: its
    /// path is empty, so it is coded as a single `0`.
    pub(crate) fn effective_code<'a>(&'a self, leaf: &'a HuffmanNode<S>) -> &'a BitSlice {
        if leaf.parent.is_none() && leaf.is_leaf() {
            &self.lone_leaf_code
        } else {
            &leaf.code_path
        }
    }

    /// Huffman code of `symbol`, None if the tree has no leaf for it.
    pub fn code_for(&self, symbol: &S) -> Option<&BitSlice> {
        self.leaf_for(symbol).map(|leaf| self.effective_code(leaf))
    }

    /// `(symbol, code)` for every leaf, left to right.
    pub fn codebook(&self) -> Vec<(S, BitVec)> {
        self.leaves()
            .filter_map(|leaf| {
                leaf.symbol()
                    .map(|symbol| (symbol.clone(), self.effective_code(leaf).to_bitvec()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use bitvec::prelude::*;

    use super::*;

    #[test]
    fn given_built_tree_when_inspecting_then_every_node_has_a_path() {
        let tree = HuffmanTree::from_symbols("aaabbc".chars());

        let root = tree.root_node().unwrap();
        assert!(root.code_path.is_empty());
        for (_, node) in tree.iter() {
            if let Some(parent) = node.parent {
                let parent_path = &tree.node(parent).unwrap().code_path;
                assert_eq!(node.code_path.len(), parent_path.len() + 1);
                assert_eq!(&node.code_path[..parent_path.len()], parent_path.as_bitslice());
            }
        }
    }

    #[test]
    fn given_built_tree_when_listing_codebook_then_left_to_right() {
        let tree = HuffmanTree::from_symbols("aabc".chars());

        let codebook = tree.codebook();
        assert_eq!(
            codebook,
            vec![
                ('a', bitvec![0]),
                ('b', bitvec![1, 0]),
                ('c', bitvec![1, 1]),
            ]
        );
        assert_eq!(tree.code_for(&'c').map(|c| c.to_bitvec()), Some(bitvec![1, 1]));
        assert_eq!(tree.code_for(&'z'), None);
    }

    #[test]
    fn given_single_symbol_tree_when_listing_codes_then_one_zero_bit() {
        let tree = HuffmanTree::from_symbols("aaa".chars());

        assert!(tree.root_node().unwrap().code_path.is_empty());
        assert_eq!(tree.code_for(&'a').map(|c| c.to_bitvec()), Some(bitvec![0]));
        assert_eq!(tree.codebook(), vec![('a', bitvec![0])]);
    }
}
