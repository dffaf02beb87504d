use bitvec::slice::BitSlice;
use tracing::{debug, instrument, warn};

use crate::domain::arena::HuffmanTree;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::frequency::Symbol;
use crate::domain::options::{CodecOptions, SingleSymbolPolicy, TruncatedPolicy};

/// Outcome of decoding up to the end of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<S: Symbol> {
    /// Symbols of every complete code
    pub symbols: Vec<S>,
    /// Bits of a final incomplete code, 0 for a well-formed stream
    pub trailing_bits: usize,
}

impl<S: Symbol> Decoded<S> {
    pub fn is_complete(&self) -> bool {
        self.trailing_bits == 0
    }
}

/// Turns bitstreams back into symbols using a built tree.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'t, S: Symbol> {
    tree: &'t HuffmanTree<S>,
    options: CodecOptions,
}

impl<'t, S: Symbol> Decoder<'t, S> {
    pub fn new(tree: &'t HuffmanTree<S>) -> Self {
        Self::with_options(tree, CodecOptions::default())
    }

    pub fn with_options(tree: &'t HuffmanTree<S>, options: CodecOptions) -> Self {
        Self { tree, options }
    }

    /// Decode `bits`, applying the truncation policy to a trailing partial code.
    #[instrument(level = "debug", skip(self, bits), fields(bits = bits.len()))]
    pub fn decode(&self, bits: &BitSlice) -> DomainResult<Vec<S>> {
        let decoded = self.decode_partial(bits)?;
        if decoded.is_complete() {
            return Ok(decoded.symbols);
        }

        match self.options.truncated {
            TruncatedPolicy::Error => Err(DomainError::TruncatedCode {
                decoded: decoded.symbols.len(),
                trailing_bits: decoded.trailing_bits,
            }),
            TruncatedPolicy::Drop => {
                warn!(
                    "dropping {} trailing bit(s) of an incomplete code",
                    decoded.trailing_bits
                );
                Ok(decoded.symbols)
            }
        }
    }

    /// Decode every complete code of `bits` and report what is left over.
    ///
    /// The cursor starts at the root, moves right on `1` and left on `0`, and
    /// goes back to the root after emitting the symbol of each leaf it reaches.
    #[instrument(level = "debug", skip(self, bits), fields(bits = bits.len()))]
    pub fn decode_partial(&self, bits: &BitSlice) -> DomainResult<Decoded<S>> {
        let root = self.tree.ready_root()?;
        let root_node = self.tree.node_at(root)?;

        if root_node.is_leaf() {
            return self.decode_single_leaf(root_node.symbol(), bits);
        }

        let mut symbols = Vec::new();
        let mut cursor = root;
        let mut pending = 0;
        for (position, bit) in bits.iter().by_vals().enumerate() {
            let next = self
                .tree
                .node_at(cursor)?
                .child(bit)
                .ok_or(DomainError::InvalidCode { position })?;
            let node = self.tree.node_at(next)?;

            match node.symbol() {
                Some(symbol) => {
                    symbols.push(symbol.clone());
                    cursor = root;
                    pending = 0;
                }
                None => {
                    cursor = next;
                    pending += 1;
                }
            }
        }

        debug!(
            "decoded {} symbol(s), {} trailing bit(s)",
            symbols.len(),
            pending
        );
        Ok(Decoded {
            symbols,
            trailing_bits: pending,
        })
    }

    fn decode_single_leaf(&self, symbol: Option<&S>, bits: &BitSlice) -> DomainResult<Decoded<S>> {
        if self.options.single_symbol == SingleSymbolPolicy::Reject {
            return Err(DomainError::SingleSymbolAlphabet);
        }
        let symbol = symbol.ok_or(DomainError::EmptyTree)?;

        if let Some(position) = bits.first_one() {
            return Err(DomainError::InvalidCode { position });
        }
        Ok(Decoded {
            symbols: vec![symbol.clone(); bits.len()],
            trailing_bits: 0,
        })
    }
}

impl<S: Symbol> HuffmanTree<S> {
    /// Decode with default [`CodecOptions`].
    pub fn decode(&self, bits: &BitSlice) -> DomainResult<Vec<S>> {
        Decoder::new(self).decode(bits)
    }
}
