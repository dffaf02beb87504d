//! Text views of a built tree for console output.

use std::fmt;

use generational_arena::Index;
use itertools::Itertools;
use termtree::Tree;
use tracing::instrument;

use crate::bits::to_bit_string;
use crate::domain::{HuffmanNode, HuffmanTree, Symbol};

impl<S: Symbol + fmt::Display> fmt::Display for HuffmanNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Symbol: {}, Value: {}, Path: {}",
            self.symbols.iter().join(""),
            self.weight,
            to_bit_string(&self.code_path)
        )
    }
}

/// Labelling of internal nodes in [`TreeRender::to_tree_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Label internal nodes like leaves, with symbols and code path
    pub show_internal: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_internal: true,
        }
    }
}

pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String> {
        self.to_tree_string_with(RenderOptions::default())
    }

    fn to_tree_string_with(&self, options: RenderOptions) -> Tree<String>;
}

impl<S: Symbol + fmt::Display> TreeRender for HuffmanTree<S> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string_with(&self, options: RenderOptions) -> Tree<String> {
        fn label<S: Symbol + fmt::Display>(node: &HuffmanNode<S>, options: RenderOptions) -> String {
            if node.is_leaf() || options.show_internal {
                node.to_string()
            } else {
                format!("Value: {}", node.weight)
            }
        }

        fn build_tree<S: Symbol + fmt::Display>(
            tree: &HuffmanTree<S>,
            node_idx: Index,
            parent_tree: &mut Tree<String>,
            options: RenderOptions,
        ) {
            if let Some(node) = tree.node(node_idx) {
                for child_idx in [node.left, node.right].into_iter().flatten() {
                    if let Some(child) = tree.node(child_idx) {
                        let mut child_tree = Tree::new(label(child, options));
                        build_tree(tree, child_idx, &mut child_tree, options);
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        match self.root().zip(self.root_node()) {
            Some((root_idx, root)) => {
                let mut tree = Tree::new(label(root, options));
                build_tree(self, root_idx, &mut tree, options);
                tree
            }
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

/// One `symbol [=] code (weight)` line per leaf, left to right.
pub fn code_table<S: Symbol + fmt::Display>(tree: &HuffmanTree<S>) -> Vec<String> {
    tree.leaves()
        .map(|leaf| {
            format!(
                "{} [=] {} ({})",
                leaf.symbols.iter().join(""),
                to_bit_string(tree.effective_code(leaf)),
                leaf.weight
            )
        })
        .collect()
}
