//! Port traits defining external boundaries.
//!
//! The only boundary of the identifier core is its source of randomness.
//! Implementations live in `src/adapters/`.

pub mod byte_source;

pub use byte_source::{ByteSource, ByteSourceError};
