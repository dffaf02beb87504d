//! Domain layer: Huffman tree construction and coding
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod codes;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod options;

pub use arena::{HuffmanNode, HuffmanTree, PostOrderIterator, TreeIterator};
pub use decoder::{Decoded, Decoder};
pub use encoder::Encoder;
pub use error::{DomainError, DomainResult};
pub use frequency::{FrequencyTable, Symbol};
pub use options::{CodecOptions, SingleSymbolPolicy, TruncatedPolicy};
