//! Live adapters for real external interactions.

pub mod byte_source;

pub use byte_source::LiveByteSource;
