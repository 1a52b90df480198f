//! Error types for generation and configuration.

/// Errors raised while generating an identifier.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GenerateError {
    /// The byte source handed back fewer bytes than were requested.
    #[error("insufficient entropy: requested {requested} random bytes, received {received}")]
    InsufficientEntropy {
        /// Bytes asked for.
        requested: usize,
        /// Bytes actually supplied.
        received: usize,
    },

    /// The byte source itself failed.
    #[error("byte source failed: {0}")]
    ByteSource(String),

    /// Rejection sampling discarded draws past the top-up limit.
    #[error("gave up after {top_ups} top-up draws were all rejected")]
    TooManyRejections {
        /// Top-up requests made before giving up.
        top_ups: usize,
    },
}

/// Errors raised while building or loading a [`crate::Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The dictionary has no units.
    #[error("dictionary is empty")]
    EmptyDictionary,

    /// The same unit appears twice.
    #[error("dictionary contains duplicate unit {0:?}")]
    DuplicateUnit(String),

    /// A unit is the empty string.
    #[error("dictionary unit at index {0} is empty")]
    EmptyUnit(usize),

    /// A unit contains the separator and could never validate.
    #[error("dictionary unit {unit:?} contains the separator {separator:?}")]
    UnitContainsSeparator {
        /// Offending unit.
        unit: String,
        /// Configured separator.
        separator: char,
    },

    /// Bits per unit must lie in `1..=32`.
    #[error("bits per unit must be between 1 and 32, got {0}")]
    BitsPerUnitOutOfRange(u32),

    /// An identifier must have at least one unit.
    #[error("number of units must be at least 1")]
    ZeroUnits,

    /// The unit count exceeds the supported maximum.
    #[error("number of units must be at most {max}, got {found}")]
    TooManyUnits {
        /// Requested unit count.
        found: usize,
        /// [`crate::config::MAX_NUM_UNITS`].
        max: usize,
    },

    /// Some units could never be selected.
    #[error("dictionary has {size} units but {bits} bits per unit only address {range}")]
    DictionaryExceedsRange {
        /// Dictionary size.
        size: usize,
        /// Configured bits per unit.
        bits: u32,
        /// `2^bits`.
        range: u64,
    },

    /// Reading a config file failed.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// File path.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A config file is not valid YAML for [`crate::Config`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
