//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the tree lifecycle or malformed codec input.
/// These are independent of configuration and CLI concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("tree has already been built")]
    AlreadyBuilt,

    #[error("tree has not been built")]
    TreeNotBuilt,

    #[error("tree is empty: built from an empty input")]
    EmptyTree,

    #[error("unknown symbol {symbol} at position {position}")]
    UnknownSymbol { symbol: String, position: usize },

    #[error("truncated code: {trailing_bits} trailing bit(s) after {decoded} decoded symbol(s)")]
    TruncatedCode { decoded: usize, trailing_bits: usize },

    #[error("single-symbol alphabet cannot be coded unambiguously")]
    SingleSymbolAlphabet,

    #[error("invalid code at bit {position}")]
    InvalidCode { position: usize },

    #[error("node index does not belong to this tree")]
    DanglingNode,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
