//! Live adapter for the `ByteSource` port.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::ports::{ByteSource, ByteSourceError};

/// Live byte source backed by the operating system CSPRNG.
pub struct LiveByteSource;

impl LiveByteSource {
    /// Creates a new live byte source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiveByteSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSource for LiveByteSource {
    fn random_bytes(&self, n: usize) -> Result<Vec<u8>, ByteSourceError> {
        let mut buf = vec![0u8; n];
        OsRng.try_fill_bytes(&mut buf)?;
        Ok(buf)
    }
}
