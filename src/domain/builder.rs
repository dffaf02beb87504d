//! Greedy Huffman tree construction.
//!
//! The active collection starts with one leaf per distinct symbol in
//! first-occurrence order. Each round takes the two lightest nodes out of it and
//! appends their merge at the end, until a single node (the root) is left.
//!
//! Ties are broken by position in the active collection: the earliest node of
//! minimum weight is selected first and becomes the left child, the earliest
//! node of minimum weight among the remaining ones is selected second and
//! becomes the right child.

use generational_arena::{Arena, Index};
use tracing::{debug, instrument, trace};

use crate::domain::arena::{HuffmanNode, HuffmanTree};
use crate::domain::codes::assign_code_paths;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::frequency::{FrequencyTable, Symbol};

impl<S: Symbol> HuffmanTree<S> {
    /// Build a tree over every symbol of `symbols`.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Self::from_table(&FrequencyTable::from_symbols(symbols))
    }

    /// Build a tree from an existing frequency table.
    pub fn from_table(table: &FrequencyTable<S>) -> Self {
        let mut tree = Self::new();
        tree.grow(table);
        tree
    }

    /// Build this tree from `table`.
    ///
    /// A tree can be built only once; afterwards it is read-only. Building from
    /// an empty table succeeds but leaves the tree without a root.
    #[instrument(level = "debug", skip(self, table), fields(symbols = table.len()))]
    pub fn build(&mut self, table: &FrequencyTable<S>) -> DomainResult<()> {
        if self.built {
            return Err(DomainError::AlreadyBuilt);
        }
        self.grow(table);
        Ok(())
    }

    fn grow(&mut self, table: &FrequencyTable<S>) {
        let mut active: Vec<Index> = table
            .iter()
            .map(|(symbol, count)| self.arena.insert(HuffmanNode::leaf(symbol.clone(), count)))
            .collect();

        while active.len() > 1 {
            let (first, second) = select_two_lowest(&self.arena, &active);
            let left = active[first];
            let right = active[second];

            // Remove the later position first so the earlier one stays valid
            active.remove(first.max(second));
            active.remove(first.min(second));

            active.push(self.merge(left, right));
        }

        self.root = active.pop();
        self.built = true;
        assign_code_paths(self);

        debug!(
            "built tree: {} node(s), {} leaf/leaves, root weight {}",
            self.arena.len(),
            self.leaf_index.len(),
            self.root_node().map_or(0, |root| root.weight)
        );
    }

    /// Create the parent of `left` and `right` and link both children to it.
    fn merge(&mut self, left: Index, right: Index) -> Index {
        let (l, r) = (&self.arena[left], &self.arena[right]);
        let weight = l.weight + r.weight;
        let symbols: Vec<S> = l.symbols.iter().chain(r.symbols.iter()).cloned().collect();
        trace!(
            "merge {:?} ({}) + {:?} ({}) -> {}",
            l.symbols,
            l.weight,
            r.symbols,
            r.weight,
            weight
        );

        let parent = self.arena.insert(HuffmanNode {
            symbols,
            weight,
            parent: None,
            left: Some(left),
            right: Some(right),
            code_path: Default::default(),
        });
        self.arena[left].parent = Some(parent);
        self.arena[right].parent = Some(parent);
        parent
    }
}

/// Positions in `active` of the two nodes to merge next.
///
/// `active` must hold at least two nodes.
fn select_two_lowest<S: Symbol>(arena: &Arena<HuffmanNode<S>>, active: &[Index]) -> (usize, usize) {
    debug_assert!(active.len() >= 2, "need two nodes to merge");
    let weight = |pos: usize| arena[active[pos]].weight;

    let mut first = 0;
    for pos in 1..active.len() {
        if weight(pos) < weight(first) {
            first = pos;
        }
    }

    let mut second = if first == 0 { 1 } else { 0 };
    for pos in second + 1..active.len() {
        if pos != first && weight(pos) < weight(second) {
            second = pos;
        }
    }

    (first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::to_bit_string;

    fn code_of(tree: &HuffmanTree<char>, symbol: char) -> String {
        to_bit_string(&tree.leaf_for(&symbol).unwrap().code_path)
    }

    #[test]
    fn given_equal_weights_when_building_then_earlier_symbol_goes_left() {
        let tree = HuffmanTree::from_symbols("ab".chars());

        let root = tree.root_node().unwrap();
        assert_eq!(root.symbols, vec!['a', 'b']);
        assert_eq!(code_of(&tree, 'a'), "0");
        assert_eq!(code_of(&tree, 'b'), "1");
    }

    #[test]
    fn given_merged_node_tied_with_leaf_when_building_then_leaf_selected_first() {
        // b+c -> 2 is appended after 'a' (2), so 'a' wins the tie
        let tree = HuffmanTree::from_symbols("aabc".chars());

        let root = tree.root_node().unwrap();
        assert_eq!(root.symbols, vec!['a', 'b', 'c']);
        assert_eq!(code_of(&tree, 'a'), "0");
        assert_eq!(code_of(&tree, 'b'), "10");
        assert_eq!(code_of(&tree, 'c'), "11");
    }

    #[test]
    fn given_built_tree_when_building_again_then_already_built() {
        let table = FrequencyTable::from_symbols("abc".chars());
        let mut tree = HuffmanTree::new();
        tree.build(&table).unwrap();

        assert_eq!(tree.build(&table), Err(DomainError::AlreadyBuilt));
    }

    #[test]
    fn given_empty_table_when_building_twice_then_already_built() {
        let table = FrequencyTable::<char>::new();
        let mut tree = HuffmanTree::new();
        tree.build(&table).unwrap();

        assert!(tree.is_built());
        assert!(tree.root().is_none());
        assert_eq!(tree.build(&table), Err(DomainError::AlreadyBuilt));
    }

    #[test]
    fn given_children_when_building_then_parent_links_point_to_merge() {
        let tree = HuffmanTree::from_symbols("aabbbc".chars());

        for (idx, node) in tree.iter() {
            for child in [node.left, node.right].into_iter().flatten() {
                assert_eq!(tree.node(child).unwrap().parent, Some(idx));
            }
        }
        assert_eq!(tree.root_node().unwrap().parent, None);
    }

    fn active_nodes(weights: &[usize]) -> (Arena<HuffmanNode<char>>, Vec<Index>) {
        let mut arena = Arena::new();
        let active = weights
            .iter()
            .zip('a'..)
            .map(|(&weight, symbol)| arena.insert(HuffmanNode::leaf(symbol, weight)))
            .collect();
        (arena, active)
    }

    #[test]
    fn given_minimum_at_front_when_selecting_then_second_is_earliest_of_rest() {
        let (arena, active) = active_nodes(&[1, 3, 2, 2]);
        assert_eq!(select_two_lowest(&arena, &active), (0, 2));
    }

    #[test]
    fn given_minimum_later_when_selecting_then_first_position_can_be_second() {
        let (arena, active) = active_nodes(&[2, 5, 1]);
        assert_eq!(select_two_lowest(&arena, &active), (2, 0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "need two nodes to merge")]
    fn given_single_active_node_when_selecting_then_panics() {
        let (arena, active) = active_nodes(&[4]);
        select_two_lowest(&arena, &active);
    }
}
