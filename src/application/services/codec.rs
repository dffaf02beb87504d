//! Text codec service
//!
//! Builds trees over the characters of a text and codes messages against them.
//! No tree format is persisted: decoding rebuilds the tree from the same text.

use bitvec::vec::BitVec;
use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::bits::{parse_bit_string, to_bit_string};
use crate::domain::{CodecOptions, Decoder, Encoder, HuffmanTree};

/// Output of a build/encode/decode cycle over one message.
#[derive(Debug, Clone)]
pub struct RoundTrip {
    pub original: String,
    pub encoded: BitVec,
    pub decoded: String,
    /// Tree built from `original`
    pub tree: HuffmanTree<char>,
}

impl RoundTrip {
    pub fn is_lossless(&self) -> bool {
        self.original == self.decoded
    }

    pub fn encoded_string(&self) -> String {
        to_bit_string(&self.encoded)
    }
}

/// Service for coding text with character-level Huffman trees.
#[derive(Debug, Clone, Default)]
pub struct CodecService {
    options: CodecOptions,
}

impl CodecService {
    /// Create a new codec service.
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> CodecOptions {
        self.options
    }

    /// Tree over the characters of `text`.
    pub fn build_tree(&self, text: &str) -> HuffmanTree<char> {
        HuffmanTree::from_symbols(text.chars())
    }

    /// Build a tree from `message`, encode the message with it and decode the result.
    #[instrument(level = "debug", skip(self))]
    pub fn round_trip(&self, message: &str) -> ApplicationResult<RoundTrip> {
        let tree = self.build_tree(message);
        let encoded = Encoder::with_options(&tree, self.options).encode(message.chars())?;
        let decoded: String = Decoder::with_options(&tree, self.options)
            .decode(&encoded)?
            .into_iter()
            .collect();
        debug!(
            "round trip: {} char(s) -> {} bit(s)",
            message.chars().count(),
            encoded.len()
        );

        Ok(RoundTrip {
            original: message.to_string(),
            encoded,
            decoded,
            tree,
        })
    }

    /// Encode `message` with the tree of `alphabet`, as a `0`/`1` string.
    #[instrument(level = "debug", skip(self))]
    pub fn encode(&self, alphabet: &str, message: &str) -> ApplicationResult<String> {
        let tree = self.build_tree(alphabet);
        let bits = Encoder::with_options(&tree, self.options).encode(message.chars())?;
        Ok(to_bit_string(&bits))
    }

    /// Decode a `0`/`1` string with the tree of `alphabet`.
    #[instrument(level = "debug", skip(self))]
    pub fn decode(&self, alphabet: &str, bits: &str) -> ApplicationResult<String> {
        let tree = self.build_tree(alphabet);
        let bits = parse_bit_string(bits)?;
        let symbols = Decoder::with_options(&tree, self.options).decode(&bits)?;
        Ok(symbols.into_iter().collect())
    }
}
