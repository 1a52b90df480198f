//! Identifier generation.
//!
//! Random bytes are fed most-significant-byte-first into a bit accumulator,
//! fixed-width groups are cut from its top, and each group is reduced to a
//! dictionary index. Under [`Reduction::Modulo`] exactly one byte request is
//! made per identifier. Under [`Reduction::Rejection`] a rejected group is
//! redrawn from the leftover bits, topping up from the byte source only when
//! the first request runs dry.

use crate::config::{bytes_for_units, Config, Reduction};
use crate::error::GenerateError;
use crate::ports::ByteSource;

/// Upper bound on top-up requests per identifier under rejection sampling.
///
/// A uniform source needs a top-up with probability below one half per
/// request, so hitting this bound means the source is not random.
pub const MAX_TOP_UPS: usize = 64;

/// Holds bits that have been read from the byte stream but not yet used.
///
/// The accumulator never holds more than `bits_per_unit + 7` bits, which is
/// at most 39 for the 32-bit unit width ceiling.
#[derive(Debug, Default)]
struct BitAccumulator {
    bits: u64,
    held: u32,
}

impl BitAccumulator {
    fn push(&mut self, byte: u8) {
        self.bits = (self.bits << 8) | u64::from(byte);
        self.held += 8;
    }

    /// Cuts the top `width` bits off; the low bits stay for the next unit.
    fn take(&mut self, width: u32) -> u64 {
        let mask = (1u64 << width) - 1;
        let raw = (self.bits >> (self.held - width)) & mask;
        self.held -= width;
        self.bits &= (1u64 << self.held) - 1;
        raw
    }
}

/// Generates identifiers for a configuration from a byte source.
pub struct Generator<'a> {
    config: &'a Config,
    source: &'a dyn ByteSource,
}

impl<'a> Generator<'a> {
    /// Creates a generator over `config` drawing from `source`.
    #[must_use]
    pub fn new(config: &'a Config, source: &'a dyn ByteSource) -> Self {
        Self { config, source }
    }

    /// Generates one identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InsufficientEntropy`] if the byte source hands
    /// back fewer bytes than requested, [`GenerateError::ByteSource`] if it
    /// fails outright, and [`GenerateError::TooManyRejections`] if rejection
    /// sampling keeps discarding draws.
    pub fn generate(&self) -> Result<String, GenerateError> {
        let width = self.config.bits_per_unit();
        let num_units = self.config.num_units();
        let dictionary = self.config.dictionary();

        let mut stream = self.draw(self.config.bytes_per_identifier())?.into_iter();
        let mut acc = BitAccumulator::default();
        let mut selected: Vec<&str> = Vec::with_capacity(num_units);
        let mut top_ups = 0;
        let mut consumed = 0;

        while selected.len() < num_units {
            while acc.held < width {
                if let Some(byte) = stream.next() {
                    acc.push(byte);
                    consumed += 1;
                    continue;
                }
                if self.config.reduction() == Reduction::Modulo {
                    // Only reachable if the byte count arithmetic is wrong.
                    return Err(GenerateError::InsufficientEntropy {
                        requested: consumed + 1,
                        received: consumed,
                    });
                }
                top_ups += 1;
                if top_ups > MAX_TOP_UPS {
                    tracing::warn!(top_ups = MAX_TOP_UPS, "byte source keeps yielding rejected draws");
                    return Err(GenerateError::TooManyRejections { top_ups: MAX_TOP_UPS });
                }
                let remaining = num_units - selected.len();
                stream = self.draw(bytes_for_units(remaining, width))?.into_iter();
            }

            let raw = acc.take(width);
            match self.reduce(raw).and_then(|index| dictionary.get(index)) {
                Some(unit) => selected.push(unit),
                None => tracing::trace!(raw, "rejected raw unit index"),
            }
        }

        Ok(selected.join(&self.config.separator().to_string()))
    }

    /// Generates `count` identifiers, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Generator::generate`].
    pub fn generate_batch(&self, count: usize) -> Result<Vec<String>, GenerateError> {
        (0..count).map(|_| self.generate()).collect()
    }

    /// Bits of simulated entropy consumed per identifier.
    #[must_use]
    pub fn entropy_bits(&self) -> u64 {
        self.config.entropy_bits()
    }

    /// Entropy carried by the dictionary choice itself.
    #[must_use]
    pub fn effective_entropy_bits(&self) -> f64 {
        self.config.effective_entropy_bits()
    }

    /// Requests exactly `n` bytes, treating a short answer as fatal.
    fn draw(&self, n: usize) -> Result<Vec<u8>, GenerateError> {
        let mut bytes = self.source.random_bytes(n).map_err(|e| {
            tracing::warn!(error = %e, "byte source failed");
            GenerateError::ByteSource(e.to_string())
        })?;
        if bytes.len() < n {
            return Err(GenerateError::InsufficientEntropy { requested: n, received: bytes.len() });
        }
        bytes.truncate(n);
        tracing::debug!(bytes = n, "drew random bytes");
        Ok(bytes)
    }

    /// Maps a raw bit group to a dictionary index, or `None` if rejected.
    fn reduce(&self, raw: u64) -> Option<usize> {
        let size = self.config.dictionary().len() as u64;
        match self.config.reduction() {
            Reduction::Modulo => usize::try_from(raw % size).ok(),
            Reduction::Rejection => {
                let limit = ((1u64 << self.config.bits_per_unit()) / size) * size;
                if raw < limit {
                    usize::try_from(raw % size).ok()
                } else {
                    None
                }
            }
        }
    }
}
