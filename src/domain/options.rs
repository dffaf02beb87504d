//! Codec policies for the two inputs a plain Huffman tree cannot code cleanly.

use serde::{Deserialize, Serialize};

/// What decoding does with a bitstream that ends inside a code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TruncatedPolicy {
    /// Fail with `TruncatedCode`
    #[default]
    Error,
    /// Discard the partial code and return what was decoded
    Drop,
}

/// How a tree with a single leaf (root without children) codes its symbol.
///
/// The lone leaf has an empty code path, so its messages cannot be told apart
/// by length once encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SingleSymbolPolicy {
    /// Emit one `0` bit per symbol; decoding reads every `0` as one symbol
    #[default]
    OneBit,
    /// Refuse to encode or decode with `SingleSymbolAlphabet`
    Reject,
}

/// Policies applied by [`Encoder`](crate::domain::Encoder) and [`Decoder`](crate::domain::Decoder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    pub truncated: TruncatedPolicy,
    pub single_symbol: SingleSymbolPolicy,
}
