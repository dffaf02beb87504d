//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic for text messages and owns the textual
//! bit formats exposed to users.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::{CodecService, RoundTrip};
