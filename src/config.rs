//! Identifier configuration: dictionary, unit width, unit count and separator.
//!
//! A [`Config`] is validated once at construction and is immutable
//! afterwards, so generation and validation never see a defective setup.

use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::dictionary::{Dictionary, REFERENCE_UNITS};
use crate::error::ConfigError;

/// Bits of simulated entropy consumed per unit in the reference setup.
pub const BITS_PER_UNIT: u32 = 13;

/// Units per identifier in the reference setup.
pub const NUM_UNITS: usize = 10;

/// Largest accepted unit count. Bounds the byte draw at 1 KiB per identifier.
pub const MAX_NUM_UNITS: usize = 256;

/// Character joining units.
pub const SEPARATOR: char = '-';

/// Process-wide reference configuration, built on first use.
pub static REFERENCE: LazyLock<Config> = LazyLock::new(Config::reference);

/// How a raw bit group is reduced to a dictionary index.
///
/// `Modulo` keeps byte-for-byte parity with the reference generator and is
/// biased towards low indices whenever `2^bits_per_unit` is not a multiple of
/// the dictionary size. `Rejection` discards raw values in the incomplete top
/// bucket and draws again, giving a uniform choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reduction {
    /// `raw % size`.
    #[default]
    Modulo,
    /// Reject `raw >= floor(2^bits / size) * size` and redraw.
    Rejection,
}

impl std::fmt::Display for Reduction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Modulo => write!(f, "modulo"),
            Self::Rejection => write!(f, "rejection"),
        }
    }
}

/// On-disk shape of a configuration. Every field falls back to the reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Bits consumed per unit.
    pub bits_per_unit: u32,
    /// Units per identifier.
    pub num_units: usize,
    /// Joining character.
    pub separator: char,
    /// Index reduction strategy.
    pub reduction: Reduction,
    /// Units in index order.
    pub dictionary: Vec<String>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            bits_per_unit: BITS_PER_UNIT,
            num_units: NUM_UNITS,
            separator: SEPARATOR,
            reduction: Reduction::default(),
            dictionary: REFERENCE_UNITS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// A validated, immutable identifier configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    dictionary: Dictionary,
    bits_per_unit: u32,
    num_units: usize,
    separator: char,
    reduction: Reduction,
}

impl Config {
    /// The reference configuration: 64 units, 13 bits per unit, 10 units, `-`.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            dictionary: Dictionary::reference(),
            bits_per_unit: BITS_PER_UNIT,
            num_units: NUM_UNITS,
            separator: SEPARATOR,
            reduction: Reduction::Modulo,
        }
    }

    /// Builds a configuration, rejecting any defect up front.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an empty or duplicated dictionary, an
    /// empty unit, a unit containing the separator, a unit width outside
    /// `1..=32`, a unit count outside `1..=MAX_NUM_UNITS`, or a dictionary
    /// too large for the unit width.
    pub fn new<I, S>(
        units: I,
        bits_per_unit: u32,
        num_units: usize,
        separator: char,
        reduction: Reduction,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !(1..=32).contains(&bits_per_unit) {
            return Err(ConfigError::BitsPerUnitOutOfRange(bits_per_unit));
        }
        if num_units == 0 {
            return Err(ConfigError::ZeroUnits);
        }
        if num_units > MAX_NUM_UNITS {
            return Err(ConfigError::TooManyUnits { found: num_units, max: MAX_NUM_UNITS });
        }

        let dictionary = Dictionary::new(units).map_err(ConfigError::DuplicateUnit)?;
        if dictionary.is_empty() {
            return Err(ConfigError::EmptyDictionary);
        }
        for (index, unit) in dictionary.iter().enumerate() {
            if unit.is_empty() {
                return Err(ConfigError::EmptyUnit(index));
            }
            if unit.contains(separator) {
                return Err(ConfigError::UnitContainsSeparator { unit: unit.to_string(), separator });
            }
        }

        let range = 1u64 << bits_per_unit;
        if dictionary.len() as u64 > range {
            return Err(ConfigError::DictionaryExceedsRange {
                size: dictionary.len(),
                bits: bits_per_unit,
                range,
            });
        }

        Ok(Self { dictionary, bits_per_unit, num_units, separator, reduction })
    }

    /// Parses a YAML configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or describes a defective setup.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_yaml::from_str(yaml)?;
        Self::try_from(file)
    }

    /// Loads a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content is rejected.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            units = config.dictionary.len(),
            "loaded uupid config"
        );
        Ok(config)
    }

    /// Returns the configuration as its on-disk shape.
    #[must_use]
    pub fn to_file(&self) -> ConfigFile {
        ConfigFile {
            bits_per_unit: self.bits_per_unit,
            num_units: self.num_units,
            separator: self.separator,
            reduction: self.reduction,
            dictionary: self.dictionary.iter().map(str::to_string).collect(),
        }
    }

    /// The unit dictionary.
    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Bits consumed per unit.
    #[must_use]
    pub fn bits_per_unit(&self) -> u32 {
        self.bits_per_unit
    }

    /// Units per identifier.
    #[must_use]
    pub fn num_units(&self) -> usize {
        self.num_units
    }

    /// Joining character.
    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Index reduction strategy.
    #[must_use]
    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Random bytes needed for one identifier: `ceil(units * bits / 8)`.
    #[must_use]
    pub fn bytes_per_identifier(&self) -> usize {
        bytes_for_units(self.num_units, self.bits_per_unit)
    }

    /// Bits of simulated entropy per identifier: `units * bits_per_unit`.
    #[must_use]
    pub fn entropy_bits(&self) -> u64 {
        self.num_units as u64 * u64::from(self.bits_per_unit)
    }

    /// Entropy carried by the dictionary choice itself: `units * log2(size)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn effective_entropy_bits(&self) -> f64 {
        self.num_units as f64 * (self.dictionary.len() as f64).log2()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::reference()
    }
}

impl TryFrom<ConfigFile> for Config {
    type Error = ConfigError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        Self::new(file.dictionary, file.bits_per_unit, file.num_units, file.separator, file.reduction)
    }
}

/// Bytes needed to carry `units * bits` bits.
pub(crate) fn bytes_for_units(units: usize, bits: u32) -> usize {
    (units * bits as usize).div_ceil(8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_needs_17_bytes() {
        let config = Config::reference();
        assert_eq!(config.bits_per_unit(), 13);
        assert_eq!(config.num_units(), 10);
        assert_eq!(config.separator(), '-');
        assert_eq!(config.dictionary().len(), 64);
        assert_eq!(config.bytes_per_identifier(), 17);
        assert_eq!(config.reduction(), Reduction::Modulo);
    }

    #[test]
    fn reference_entropy_budget() {
        let config = Config::reference();
        assert_eq!(config.entropy_bits(), 130);
        assert!((config.effective_entropy_bits() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn lazy_reference_matches_constructor() {
        assert_eq!(*REFERENCE, Config::reference());
    }

    #[test]
    fn rejects_duplicate_units() {
        let err = Config::new(["Aqua", "Aqua"], 13, 10, '-', Reduction::Modulo).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateUnit(u) if u == "Aqua"));
    }

    #[test]
    fn rejects_empty_dictionary() {
        let err = Config::new(Vec::<String>::new(), 13, 10, '-', Reduction::Modulo).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyDictionary));
    }

    #[test]
    fn rejects_empty_unit() {
        let err = Config::new(["Aqua", ""], 13, 10, '-', Reduction::Modulo).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyUnit(1)));
    }

    #[test]
    fn rejects_unit_containing_separator() {
        let err = Config::new(["Aq-ua"], 13, 10, '-', Reduction::Modulo).unwrap_err();
        assert!(matches!(err, ConfigError::UnitContainsSeparator { separator: '-', .. }));
    }

    #[test]
    fn rejects_bits_out_of_range() {
        assert!(matches!(
            Config::new(["Aqua"], 0, 10, '-', Reduction::Modulo),
            Err(ConfigError::BitsPerUnitOutOfRange(0))
        ));
        assert!(matches!(
            Config::new(["Aqua"], 33, 10, '-', Reduction::Modulo),
            Err(ConfigError::BitsPerUnitOutOfRange(33))
        ));
    }

    #[test]
    fn rejects_zero_units() {
        assert!(matches!(
            Config::new(["Aqua"], 13, 0, '-', Reduction::Modulo),
            Err(ConfigError::ZeroUnits)
        ));
    }

    #[test]
    fn rejects_too_many_units() {
        assert!(Config::new(["Aqua"], 32, MAX_NUM_UNITS, '-', Reduction::Modulo).is_ok());
        assert!(matches!(
            Config::new(["Aqua"], 13, MAX_NUM_UNITS + 1, '-', Reduction::Modulo),
            Err(ConfigError::TooManyUnits { found: 257, max: 256 })
        ));
        assert!(matches!(
            Config::new(["Aqua"], 13, usize::MAX, '-', Reduction::Modulo),
            Err(ConfigError::TooManyUnits { .. })
        ));
    }

    #[test]
    fn yaml_with_huge_unit_count_is_rejected() {
        let err = Config::from_yaml_str("num_units: 18446744073709551615\n").unwrap_err();
        assert!(err.to_string().contains("at most 256"), "{err}");
    }

    #[test]
    fn rejects_dictionary_larger_than_unit_range() {
        let err = Config::new(["A", "B", "C"], 1, 4, '-', Reduction::Modulo).unwrap_err();
        assert!(matches!(err, ConfigError::DictionaryExceedsRange { size: 3, bits: 1, range: 2 }));
    }

    #[test]
    fn yaml_with_no_fields_is_reference() {
        let config = Config::from_yaml_str("{}").unwrap();
        assert_eq!(config, Config::reference());
    }

    #[test]
    fn yaml_overrides_fields() {
        let yaml = "bits_per_unit: 4\nnum_units: 3\nseparator: '.'\nreduction: rejection\ndictionary: [ka, ki, ku]\n";
        let config = Config::from_yaml_str(yaml).unwrap();
        assert_eq!(config.bits_per_unit(), 4);
        assert_eq!(config.num_units(), 3);
        assert_eq!(config.separator(), '.');
        assert_eq!(config.reduction(), Reduction::Rejection);
        assert_eq!(config.dictionary().len(), 3);
        assert_eq!(config.bytes_per_identifier(), 2);
    }

    #[test]
    fn yaml_rejects_unknown_fields() {
        let err = Config::from_yaml_str("unit_count: 4\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("uupid.yaml");
        let yaml = serde_yaml::to_string(&Config::reference().to_file()).unwrap();
        std::fs::write(&path, yaml).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::reference());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
