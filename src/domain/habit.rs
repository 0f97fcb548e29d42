/// Habit entity and related functionality
///
/// This module defines the core Habit struct and the HabitDraft carrying the
/// editable fields of a habit through the edit boundary. The on-disk JSON
/// representation keeps the original dashboard's camelCase field names so
/// previously persisted collections load unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{
    Category, Color, CompletionState, DayOfWeek, FrequencyType, HabitId, HabitKind, PeriodUnit,
};

/// A habit the user tracks day by day
///
/// `id` is immutable after creation and `completed` is only ever mutated
/// through [`Habit::toggle_completion`]; every other field is replaced
/// wholesale when an edit is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier, assigned by the repository
    pub id: HabitId,
    /// Display name; non-emptiness is enforced at the edit boundary
    pub name: String,
    /// Free-form description, may be empty
    #[serde(default)]
    pub description: String,
    /// Semantic color token for the presentation layer
    pub color: Color,
    /// Which of the three habit variants this is
    #[serde(rename = "type")]
    pub kind: HabitKind,
    /// Category tag pairs, no duplicates
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Scheduling rule family
    pub frequency_type: FrequencyType,
    /// Weekdays, meaningful only for `SpecificDays`
    #[serde(default)]
    pub selected_days: Vec<DayOfWeek>,
    /// Occurrence count, meaningful only for `XTimesPerPeriod`
    pub times_per_period: u32,
    /// Period unit, meaningful only for `XTimesPerPeriod`
    pub period_unit: PeriodUnit,
    /// Day interval, meaningful only for `EveryXDays`
    pub repeat_days: u32,
    /// Sparse day-key -> tri-state completion map
    #[serde(default)]
    pub completed: BTreeMap<String, CompletionState>,
}

impl Habit {
    /// Build a habit from draft data with a fresh repository-assigned id
    ///
    /// The completion map always starts empty; sample or imported data only
    /// ever enters through the storage layer.
    pub fn from_draft(id: HabitId, draft: HabitDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            color: draft.color,
            kind: draft.kind,
            categories: draft.categories,
            frequency_type: draft.frequency_type,
            selected_days: draft.selected_days,
            times_per_period: draft.times_per_period,
            period_unit: draft.period_unit,
            repeat_days: draft.repeat_days,
            completed: BTreeMap::new(),
        }
    }

    /// Replace every editable field from the draft
    ///
    /// `id` and `completed` are preserved regardless of what the caller
    /// hands in.
    pub fn apply_draft(&mut self, draft: HabitDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.color = draft.color;
        self.kind = draft.kind;
        self.categories = draft.categories;
        self.frequency_type = draft.frequency_type;
        self.selected_days = draft.selected_days;
        self.times_per_period = draft.times_per_period;
        self.period_unit = draft.period_unit;
        self.repeat_days = draft.repeat_days;
    }

    /// Completion state for a day; a missing key reads as `Unknown`
    pub fn completion_state(&self, day_key: &str) -> CompletionState {
        self.completed.get(day_key).copied().unwrap_or_default()
    }

    /// Advance one day's cell through the Unknown -> Done -> Failed cycle
    ///
    /// This is the only mutator of `completed`. The cell is kept in the map
    /// even when it cycles back to `Unknown`, matching how the original
    /// dashboard stored an explicit null; both read back identically.
    pub fn toggle_completion(&mut self, day_key: &str) -> CompletionState {
        let next = self.completion_state(day_key).toggled();
        self.completed.insert(day_key.to_string(), next);
        next
    }
}

/// Editable habit fields as submitted from the edit form
///
/// Everything a habit carries except its identity and completion history.
/// The editing boundary normalizes and validates a draft before the
/// repository ever sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub color: Color,
    #[serde(rename = "type")]
    pub kind: HabitKind,
    #[serde(default)]
    pub categories: Vec<Category>,
    pub frequency_type: FrequencyType,
    #[serde(default)]
    pub selected_days: Vec<DayOfWeek>,
    pub times_per_period: u32,
    pub period_unit: PeriodUnit,
    pub repeat_days: u32,
}

impl HabitDraft {
    /// A plain everyday habit draft; form defaults for the remaining fields
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            color: Color::Green,
            kind: HabitKind::Habit,
            categories: Vec::new(),
            frequency_type: FrequencyType::Anytime,
            selected_days: Vec::new(),
            times_per_period: 1,
            period_unit: PeriodUnit::Week,
            repeat_days: 1,
        }
    }

    pub fn with_kind(mut self, kind: HabitKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}
