/// In-memory habit collection
///
/// The repository is the sole owner of the habit collection. It assigns ids,
/// keeps insertion order stable across updates, and hosts the only mutation
/// path into a habit's completion map. It performs no validation of its own;
/// the editing boundary decides what is allowed in.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::{CompletionState, Habit, HabitDraft, HabitId, HabitKind};
use crate::storage::{KvStore, HABITS_KEY};

pub struct HabitRepository {
    habits: Vec<Habit>,
    next_id: i64,
}

impl HabitRepository {
    /// Empty repository, starting ids at 1
    pub fn new() -> Self {
        Self {
            habits: Vec::new(),
            next_id: 1,
        }
    }

    /// Load the collection from the store's `habits` key
    ///
    /// An absent or malformed value falls back to the seed set; the failure
    /// is logged and never surfaced, so the dashboard always starts usable.
    pub fn load(store: &dyn KvStore) -> Self {
        match store.get(HABITS_KEY) {
            Ok(Some(value)) => match serde_json::from_value::<Vec<Habit>>(value) {
                Ok(habits) => Self::from_habits(habits),
                Err(e) => {
                    tracing::error!("Malformed habit collection in store, using seed data: {}", e);
                    Self::seeded()
                }
            },
            Ok(None) => Self::seeded(),
            Err(e) => {
                tracing::error!("Failed to read habit collection, using seed data: {}", e);
                Self::seeded()
            }
        }
    }

    /// Repository pre-populated with the example habits
    pub fn seeded() -> Self {
        Self::from_habits(seed_habits())
    }

    fn from_habits(habits: Vec<Habit>) -> Self {
        let next_id = habits.iter().map(|h| h.id.0).max().unwrap_or(0) + 1;
        Self { habits, next_id }
    }

    /// Append a new habit built from the draft
    ///
    /// Assigns the next id and an empty completion map. Accepts whatever it
    /// is handed; validation happens upstream at the edit boundary.
    pub fn create(&mut self, draft: HabitDraft) -> &Habit {
        let id = HabitId(self.next_id);
        self.next_id += 1;
        self.habits.push(Habit::from_draft(id, draft));
        self.habits.last().expect("just pushed")
    }

    /// Replace the editable fields of an existing habit
    ///
    /// `id` and `completed` are preserved and the collection keeps its
    /// order. Returns `None` when no habit carries the id.
    pub fn update(&mut self, id: HabitId, draft: HabitDraft) -> Option<&Habit> {
        let habit = self.habits.iter_mut().find(|h| h.id == id)?;
        habit.apply_draft(draft);
        Some(habit)
    }

    /// Remove a habit by id; returns whether anything was removed
    pub fn delete(&mut self, id: HabitId) -> bool {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != id);
        self.habits.len() != before
    }

    /// Advance one day's completion cell for a habit
    ///
    /// Returns the new state, or `None` when the id is unknown.
    pub fn toggle(&mut self, id: HabitId, day_key: &str) -> Option<CompletionState> {
        let habit = self.habits.iter_mut().find(|h| h.id == id)?;
        Some(habit.toggle_completion(day_key))
    }

    pub fn get(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// All habits in insertion order
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Number of anchor habits, for the editor's cardinality check
    pub fn anchor_count(&self) -> usize {
        self.count_kind(HabitKind::AnchorHabit)
    }

    /// Number of life-goal habits, for the editor's cardinality check
    pub fn life_goal_count(&self) -> usize {
        self.count_kind(HabitKind::LifeGoalHabit)
    }

    fn count_kind(&self, kind: HabitKind) -> usize {
        self.habits.iter().filter(|h| h.kind == kind).count()
    }

    /// The collection as the JSON value persisted under the `habits` key
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(&self.habits)
    }
}

impl Default for HabitRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed example habits used when nothing (usable) is stored
///
/// Two carry sample completion data so the week view and stats have
/// something to show on first launch, one starts empty.
fn seed_habits() -> Vec<Habit> {
    use crate::domain::{Color, FrequencyType, PeriodUnit};

    let sample = |entries: &[(&str, bool)]| -> BTreeMap<String, CompletionState> {
        entries
            .iter()
            .map(|(key, done)| (key.to_string(), CompletionState::from(Some(*done))))
            .collect()
    };

    let base = |id: i64, name: &str, kind: HabitKind, color: Color| Habit {
        id: HabitId(id),
        name: name.to_string(),
        description: String::new(),
        color,
        kind,
        categories: Vec::new(),
        frequency_type: FrequencyType::Everyday,
        selected_days: Vec::new(),
        times_per_period: 1,
        period_unit: PeriodUnit::Week,
        repeat_days: 1,
        completed: BTreeMap::new(),
    };

    let mut open_app = base(1, "Open App", HabitKind::AnchorHabit, Color::Blue);
    open_app.completed = sample(&[
        ("2025-08-25", true),
        ("2025-08-26", true),
        ("2025-08-27", true),
    ]);

    let mut morning_jog = base(2, "Morning Jog", HabitKind::LifeGoalHabit, Color::Green);
    morning_jog.completed = sample(&[("2025-08-25", true), ("2025-08-26", false)]);

    let code = base(3, "Code for 30 minutes", HabitKind::Habit, Color::Purple);

    vec![open_app, morning_jog, code]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageError;
    use serde_json::json;

    /// Store stub that hands back a fixed response
    struct StubStore(Result<Option<Value>, ()>);

    impl KvStore for StubStore {
        fn get(&self, _key: &str) -> Result<Option<Value>, StorageError> {
            match &self.0 {
                Ok(value) => Ok(value.clone()),
                Err(()) => Err(StorageError::Connection("stub failure".to_string())),
            }
        }

        fn set(&self, _key: &str, _value: &Value) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids_and_empty_history() {
        let mut repo = HabitRepository::new();
        let first = repo.create(HabitDraft::new("One")).id;
        let second = repo.create(HabitDraft::new("Two")).id;

        assert_eq!(first, HabitId(1));
        assert_eq!(second, HabitId(2));
        assert!(repo.get(first).unwrap().completed.is_empty());
    }

    #[test]
    fn test_update_preserves_identity_history_and_order() {
        let mut repo = HabitRepository::new();
        let a = repo.create(HabitDraft::new("A")).id;
        let b = repo.create(HabitDraft::new("B")).id;
        repo.toggle(a, "2025-08-25");

        let updated = repo.update(a, HabitDraft::new("A renamed")).unwrap();
        assert_eq!(updated.name, "A renamed");

        let habits = repo.habits();
        assert_eq!(habits[0].id, a);
        assert_eq!(habits[1].id, b);
        assert_eq!(
            habits[0].completion_state("2025-08-25"),
            CompletionState::Done
        );
    }

    #[test]
    fn test_update_unknown_id_is_a_noop() {
        let mut repo = HabitRepository::new();
        repo.create(HabitDraft::new("Only"));

        assert!(repo.update(HabitId(99), HabitDraft::new("Ghost")).is_none());
        assert_eq!(repo.habits().len(), 1);
        assert_eq!(repo.habits()[0].name, "Only");
    }

    #[test]
    fn test_delete_removes_by_id_and_tolerates_missing() {
        let mut repo = HabitRepository::new();
        let id = repo.create(HabitDraft::new("Gone soon")).id;

        assert!(repo.delete(id));
        assert!(!repo.delete(id));
        assert!(repo.habits().is_empty());
    }

    #[test]
    fn test_toggle_unknown_id_returns_none() {
        let mut repo = HabitRepository::new();
        assert!(repo.toggle(HabitId(7), "2025-08-25").is_none());
    }

    #[test]
    fn test_seed_set_matches_first_launch_contents() {
        let repo = HabitRepository::seeded();
        let names: Vec<&str> = repo.habits().iter().map(|h| h.name.as_str()).collect();

        assert_eq!(names, ["Open App", "Morning Jog", "Code for 30 minutes"]);
        assert_eq!(repo.anchor_count(), 1);
        assert_eq!(repo.life_goal_count(), 1);
        assert_eq!(
            repo.habits()[0].completion_state("2025-08-26"),
            CompletionState::Done
        );
        assert_eq!(
            repo.habits()[1].completion_state("2025-08-26"),
            CompletionState::Failed
        );
        assert!(repo.habits()[2].completed.is_empty());
    }

    #[test]
    fn test_load_falls_back_to_seeds_on_malformed_value() {
        let store = StubStore(Ok(Some(json!("definitely not a habit list"))));
        let repo = HabitRepository::load(&store);
        assert_eq!(repo.habits().len(), 3);
        assert_eq!(repo.habits()[0].name, "Open App");
    }

    #[test]
    fn test_load_falls_back_to_seeds_on_store_error() {
        let store = StubStore(Err(()));
        let repo = HabitRepository::load(&store);
        assert_eq!(repo.habits().len(), 3);
    }

    #[test]
    fn test_load_continues_id_sequence_after_stored_ids() {
        let store = StubStore(Ok(Some(json!([{
            "id": 41,
            "name": "Stored",
            "type": "Habit",
            "color": "red",
            "description": "",
            "categories": [],
            "frequencyType": "Anytime",
            "selectedDays": [],
            "timesPerPeriod": 1,
            "periodUnit": "Week",
            "repeatDays": 1,
            "completed": {}
        }]))));

        let mut repo = HabitRepository::load(&store);
        assert_eq!(repo.habits().len(), 1);
        let fresh = repo.create(HabitDraft::new("Next")).id;
        assert_eq!(fresh, HabitId(42));
    }
}
