//! Byte source port for drawing cryptographically secure random bytes.

/// Error reported by a byte source.
pub type ByteSourceError = Box<dyn std::error::Error + Send + Sync>;

/// Supplies uniformly random, unpredictable bytes.
///
/// Abstracting the random source allows deterministic replay by substituting
/// recorded draws during tests and cassette playback. Implementations must
/// not silently return fewer than `n` bytes; the generator treats a short
/// answer as a fatal entropy shortage.
pub trait ByteSource: Send + Sync {
    /// Returns `n` random bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot produce randomness.
    fn random_bytes(&self, n: usize) -> Result<Vec<u8>, ByteSourceError>;
}
