//! # rshuff
//!
//! Huffman prefix-code trees over arbitrary symbols.
//!
//! A [`HuffmanTree`](domain::HuffmanTree) is built once from the symbol
//! frequencies of an input, assigns a code path to every node, and is then used
//! read-only to encode messages into bitstreams and decode them back.
//!
//! ```
//! use rshuff::domain::HuffmanTree;
//!
//! let tree = HuffmanTree::from_symbols("abracadabra".chars());
//! let bits = tree.encode("cab".chars())?;
//! let decoded: String = tree.decode(&bits)?.into_iter().collect();
//! assert_eq!(decoded, "cab");
//! # Ok::<(), rshuff::domain::DomainError>(())
//! ```
//!
//! Layers, innermost first: `domain` (tree, codec), `application` (text
//! use cases), `config`, `cli`. `bits` and `render` turn bits and trees into
//! text.

pub mod application;
pub mod bits;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod render;
pub mod util;
