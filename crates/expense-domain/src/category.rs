//! The category list offered for entry: fixed presets plus user-added labels.

use serde::{Deserialize, Serialize};

/// Built-in labels, always offered first and never removable.
pub const PRESET_CATEGORIES: [&str; 4] = ["Food", "Rent", "Travel", "Shopping"];

/// Preset labels followed by user-added labels.
///
/// Invariant: no label appears twice across presets and custom labels, and custom
/// labels keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredCategories")]
pub struct CategorySet {
    custom: Vec<String>,
}

/// Wire form of a [`CategorySet`]; deserialized labels go through [`CategorySet::from_custom`].
#[derive(Deserialize)]
struct StoredCategories {
    #[serde(default)]
    custom: Vec<String>,
}

impl From<StoredCategories> for CategorySet {
    fn from(stored: StoredCategories) -> Self {
        Self::from_custom(stored.custom)
    }
}

impl CategorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a set from persisted custom labels, skipping blanks, duplicates and
    /// labels that collide with a preset.
    pub fn from_custom<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for label in labels {
            set.add(label.as_ref());
        }
        set
    }

    pub fn presets(&self) -> impl Iterator<Item = &str> {
        PRESET_CATEGORIES.iter().copied()
    }

    pub fn custom(&self) -> &[String] {
        &self.custom
    }

    /// Iterates every label, presets first.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.presets().chain(self.custom.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        PRESET_CATEGORIES.len() + self.custom.len()
    }

    /// Presets are always present, so a set is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels().any(|existing| existing == label)
    }

    /// Adds a trimmed custom label. Returns `false` when the label is blank or already present.
    pub fn add(&mut self, label: &str) -> bool {
        let trimmed = label.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        self.custom.push(trimmed.to_string());
        true
    }

    /// Removes a custom label. Presets are fixed, so removing one is a no-op returning `false`.
    pub fn remove(&mut self, label: &str) -> bool {
        let trimmed = label.trim();
        let before = self.custom.len();
        self.custom.retain(|existing| existing != trimmed);
        self.custom.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_list_presets_before_custom_entries() {
        let mut set = CategorySet::new();
        assert!(set.add("Gym"));
        assert!(set.add("Books"));

        let labels: Vec<_> = set.labels().collect();
        assert_eq!(
            labels,
            vec!["Food", "Rent", "Travel", "Shopping", "Gym", "Books"]
        );
    }

    #[test]
    fn add_rejects_blank_and_duplicate_labels() {
        let mut set = CategorySet::new();
        assert!(!set.add("   "));
        assert!(!set.add("Food"));
        assert!(set.add("  Gym "));
        assert!(!set.add("Gym"));
        assert_eq!(set.custom(), ["Gym".to_string()]);
    }

    #[test]
    fn presets_cannot_be_removed() {
        let mut set = CategorySet::from_custom(["Gym"]);
        assert!(!set.remove("Rent"));
        assert!(set.contains("Rent"));
        assert!(set.remove("Gym"));
        assert!(!set.contains("Gym"));
    }

    #[test]
    fn remove_trims_like_add() {
        let mut set = CategorySet::from_custom(["Gym"]);
        assert!(set.remove(" Gym  "));
        assert!(set.custom().is_empty());
    }

    #[test]
    fn deserialized_sets_keep_labels_unique() {
        let set: CategorySet =
            serde_json::from_str(r#"{"custom": ["Gym", "Food", " Gym ", "", "Pets"]}"#)
                .expect("category set parses");
        assert_eq!(set.custom(), ["Gym".to_string(), "Pets".to_string()]);

        let empty: CategorySet = serde_json::from_str("{}").expect("empty set parses");
        assert_eq!(empty, CategorySet::new());
    }

    #[test]
    fn from_custom_drops_collisions() {
        let set = CategorySet::from_custom(["Gym", "Food", "Gym", "", "Pets"]);
        assert_eq!(set.custom(), ["Gym".to_string(), "Pets".to_string()]);
        assert_eq!(set.len(), 6);
    }
}
