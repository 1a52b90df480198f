//! Pronounceable unit dictionary.

use std::collections::HashSet;

/// The reference dictionary of 64 pronounceable units, in index order.
///
/// Casing is part of each unit's identity.
pub const REFERENCE_UNITS: [&str; 64] = [
    "Aqua", "Blit", "Cron", "Deep", "Echo", "Flux", "Grid", "Hymn", //
    "Icon", "Jade", "Kite", "Luna", "Myst", "Nova", "Omen", "Pure", //
    "Quas", "Rune", "Shor", "Tron", "Unic", "Vort", "Wave", "Xyle", //
    "Yarn", "Zest", "Glim", "Fush", "Koda", "Lyra", "Nomi", "Poin", //
    "Aura", "View", "Star", "Path", "Trek", "Find", "More", "Zone", //
    "Link", "Crea", "Rela", "Cyan", "Blue", "Gold", "Riva", "Swif", //
    "Tide", "Blom", "Eria", "Sent", "Sync", "Data", "Core", "Arch", //
    "Base", "Meta", "Omni", "Port", "Code", "Nexa", "Prim", "Quest",
];

/// An ordered set of distinct units.
///
/// Position gives the index used during generation; the hash set backs the
/// exact-match membership test used during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    units: Vec<String>,
    members: HashSet<String>,
}

impl Dictionary {
    /// Builds a dictionary, returning the first repeated unit on failure.
    ///
    /// # Errors
    ///
    /// Returns the duplicated unit when two entries are identical.
    pub fn new<I, S>(units: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let units: Vec<String> = units.into_iter().map(Into::into).collect();
        let mut members = HashSet::with_capacity(units.len());
        for unit in &units {
            if !members.insert(unit.clone()) {
                return Err(unit.clone());
            }
        }
        Ok(Self { units, members })
    }

    /// The reference 64-unit dictionary.
    #[must_use]
    pub fn reference() -> Self {
        let units: Vec<String> = REFERENCE_UNITS.iter().map(|s| (*s).to_string()).collect();
        let members = units.iter().cloned().collect();
        Self { units, members }
    }

    /// Number of units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the dictionary has no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Unit at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.units.get(index).map(String::as_str)
    }

    /// Exact, case-sensitive membership.
    #[must_use]
    pub fn contains(&self, unit: &str) -> bool {
        self.members.contains(unit)
    }

    /// Units in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_has_64_distinct_units() {
        let dict = Dictionary::reference();
        assert_eq!(dict.len(), 64);
        assert!(Dictionary::new(REFERENCE_UNITS).is_ok());
    }

    #[test]
    fn reference_order_is_preserved() {
        let dict = Dictionary::reference();
        assert_eq!(dict.get(0), Some("Aqua"));
        assert_eq!(dict.get(9), Some("Jade"));
        assert_eq!(dict.get(63), Some("Quest"));
        assert_eq!(dict.get(64), None);
    }

    #[test]
    fn membership_is_case_sensitive() {
        let dict = Dictionary::reference();
        assert!(dict.contains("Nova"));
        assert!(!dict.contains("nova"));
        assert!(!dict.contains("NOVA"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn duplicate_is_reported() {
        let err = Dictionary::new(["Aqua", "Blit", "Aqua"]).unwrap_err();
        assert_eq!(err, "Aqua");
    }

    #[test]
    fn case_variants_are_distinct_entries() {
        let dict = Dictionary::new(["Aqua", "aqua"]).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("aqua"));
    }
}
