use bitvec::vec::BitVec;
use tracing::{debug, instrument};

use crate::domain::arena::HuffmanTree;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::frequency::Symbol;
use crate::domain::options::{CodecOptions, SingleSymbolPolicy};

/// Turns messages into bitstreams using a built tree.
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'t, S: Symbol> {
    tree: &'t HuffmanTree<S>,
    options: CodecOptions,
}

impl<'t, S: Symbol> Encoder<'t, S> {
    pub fn new(tree: &'t HuffmanTree<S>) -> Self {
        Self::with_options(tree, CodecOptions::default())
    }

    pub fn with_options(tree: &'t HuffmanTree<S>, options: CodecOptions) -> Self {
        Self { tree, options }
    }

    /// Concatenate the code of every symbol of `message`, in order.
    ///
    /// Fails with `TreeNotBuilt`/`EmptyTree` if the tree cannot code anything
    /// and with `UnknownSymbol` for a symbol the tree was not built with.
    #[instrument(level = "debug", skip(self, message))]
    pub fn encode<I>(&self, message: I) -> DomainResult<BitVec>
    where
        I: IntoIterator<Item = S>,
    {
        let root = self.tree.ready_root()?;
        let single_leaf = self.tree.node_at(root)?.is_leaf();
        if single_leaf && self.options.single_symbol == SingleSymbolPolicy::Reject {
            return Err(DomainError::SingleSymbolAlphabet);
        }

        let mut bits = BitVec::new();
        let mut symbols = 0;
        for (position, symbol) in message.into_iter().enumerate() {
            let leaf = self
                .tree
                .leaf_for(&symbol)
                .ok_or_else(|| DomainError::UnknownSymbol {
                    symbol: format!("{:?}", symbol),
                    position,
                })?;
            bits.extend_from_bitslice(self.tree.effective_code(leaf));
            symbols += 1;
        }

        debug!("encoded {} symbol(s) into {} bit(s)", symbols, bits.len());
        Ok(bits)
    }
}

impl<S: Symbol> HuffmanTree<S> {
    /// Encode with default [`CodecOptions`].
    pub fn encode<I>(&self, message: I) -> DomainResult<BitVec>
    where
        I: IntoIterator<Item = S>,
    {
        Encoder::new(self).encode(message)
    }
}
