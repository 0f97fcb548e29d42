/// Category taxonomy management
///
/// The catalog maps main-category names to their subcategory lists. Habits
/// only ever embed `(main, sub)` pairs by value; the catalog exists so the
/// edit form has something to pick from and somewhere to add new entries.
/// State is explicit and owned here, loaded and saved through the store
/// rather than held in ambient module state.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::storage::{KvStore, CATEGORIES_KEY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    map: BTreeMap<String, Vec<String>>,
}

impl CategoryCatalog {
    /// The preset taxonomy written on first launch
    pub fn preset() -> Self {
        let entries: [(&str, &[&str]); 10] = [
            ("Physical", &["Exercise", "Nutrition", "Sleep", "Hygiene"]),
            ("Mental", &["Learning", "Mindfulness", "Journaling", "Reading"]),
            ("Emotional", &["Stress Management", "Gratitude", "Self-Compassion"]),
            ("Social", &["Relationships", "Community", "Networking"]),
            ("Career", &["Productivity", "Skill Development", "Professional Growth"]),
            ("Personal Growth", &["Hobbies", "Creative Projects", "New Skills"]),
            ("Financial", &["Budgeting", "Saving", "Investing"]),
            ("Home & Environment", &["Organization", "Cleaning", "Decluttering"]),
            ("Project", &["Side Projects", "Creative Work", "Business Ventures"]),
            ("Life", &["Life Planning", "Goal Setting", "Life Review"]),
        ];

        let map = entries
            .iter()
            .map(|(main, subs)| {
                (
                    main.to_string(),
                    subs.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect();
        Self { map }
    }

    /// Load the taxonomy from the store's `categories` key
    ///
    /// When the key is absent or unusable the preset taxonomy is written
    /// back and used; a failed write-back is logged and ignored.
    pub fn load(store: &dyn KvStore) -> Self {
        let stored = match store.get(CATEGORIES_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to read category taxonomy: {}", e);
                None
            }
        };

        if let Some(value) = stored {
            match serde_json::from_value::<BTreeMap<String, Vec<String>>>(value) {
                Ok(map) => return Self { map },
                Err(e) => {
                    tracing::error!("Malformed category taxonomy in store, using preset: {}", e);
                }
            }
        }

        let preset = Self::preset();
        match preset.to_value() {
            Ok(value) => {
                if let Err(e) = store.set(CATEGORIES_KEY, &value) {
                    tracing::warn!("Failed to write preset category taxonomy: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize preset category taxonomy: {}", e),
        }
        preset
    }

    /// Add a main category; blank or already-present names are ignored
    ///
    /// Returns whether the catalog changed.
    pub fn add_main(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.map.contains_key(name) {
            return false;
        }
        self.map.insert(name.to_string(), Vec::new());
        true
    }

    /// Add a subcategory under an existing main category
    ///
    /// Blank names, unknown main categories and duplicates are ignored.
    /// Returns whether the catalog changed.
    pub fn add_sub(&mut self, main: &str, sub: &str) -> bool {
        let sub = sub.trim();
        if sub.is_empty() {
            return false;
        }
        match self.map.get_mut(main) {
            Some(subs) if !subs.iter().any(|s| s == sub) => {
                subs.push(sub.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn main_categories(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    pub fn subcategories(&self, main: &str) -> Option<&[String]> {
        self.map.get(main).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The taxonomy as the JSON value persisted under the `categories` key
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(&self.map)
    }
}
