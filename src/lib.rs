/// Public library interface for the habit dashboard core
///
/// This crate holds the data model and derived statistics behind a personal
/// habit-tracking dashboard: habit CRUD, tri-state daily completion, streak
/// and total calculations, and the category taxonomy, all persisted through
/// a string-keyed JSON store. It is a pure in-process library; rendering and
/// navigation live with the embedding application.

use chrono::NaiveDate;
use thiserror::Error;

mod categories;
mod domain;
mod editor;
mod repository;
mod storage;

// Re-export public modules and types
pub use categories::CategoryCatalog;
pub use domain::*;
pub use editor::{prepare_submission, ANCHOR_HABIT_LIMIT, LIFE_GOAL_HABIT_LIMIT};
pub use repository::HabitRepository;
pub use storage::{KvStore, SqliteStore, StorageError, CATEGORIES_KEY, HABITS_KEY};

/// Errors surfaced by the dashboard facade
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Store error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Validation error: {0}")]
    Domain(#[from] domain::DomainError),
}

/// The dashboard: habit collection, category taxonomy and their store
///
/// Owns all mutable state and is the single writer context. Every mutation
/// is followed by a fire-and-forget write of the full value back to the
/// store; a failed write is logged and the in-memory state stays
/// authoritative for the rest of the session.
pub struct Dashboard {
    store: Box<dyn KvStore>,
    habits: HabitRepository,
    categories: CategoryCatalog,
}

impl Dashboard {
    /// Load (or seed) a dashboard from the given store
    ///
    /// Never fails: absent or malformed state falls back to the seed habits
    /// and the preset taxonomy, both written back so the next session finds
    /// them.
    pub fn open(store: Box<dyn KvStore>) -> Self {
        let habits = HabitRepository::load(&*store);
        let categories = CategoryCatalog::load(&*store);

        let dashboard = Self {
            store,
            habits,
            categories,
        };
        dashboard.persist_habits();
        dashboard
    }

    /// Open a dashboard backed by a SQLite store at the default location
    pub fn open_default() -> Result<Self, DashboardError> {
        let path = SqliteStore::default_path().ok_or_else(|| {
            StorageError::Connection("No writable data directory available".to_string())
        })?;
        let store = SqliteStore::open(path)?;
        Ok(Self::open(Box::new(store)))
    }

    /// All habits in insertion order
    pub fn habits(&self) -> &[Habit] {
        self.habits.habits()
    }

    pub fn habit(&self, id: HabitId) -> Option<&Habit> {
        self.habits.get(id)
    }

    /// Save a habit submission coming from the edit form
    ///
    /// Routes through the edit boundary: the draft is normalized, an empty
    /// name or an over-limit kind refuses the whole submission and nothing
    /// is created or changed. `editing` carries the id of the habit the form
    /// was opened for; `None` creates a new habit.
    pub fn save_habit(
        &mut self,
        draft: HabitDraft,
        editing: Option<HabitId>,
    ) -> Result<HabitId, DomainError> {
        let draft = editor::prepare_submission(draft, &self.habits, editing)?;

        let id = match editing {
            Some(id) => match self.habits.update(id, draft) {
                Some(habit) => habit.id,
                // Ids only reach the form through normal navigation; a stale
                // one is treated as a no-op rather than an error.
                None => return Ok(id),
            },
            None => self.habits.create(draft).id,
        };

        self.persist_habits();
        Ok(id)
    }

    /// Remove a habit; unknown ids are a no-op
    pub fn delete_habit(&mut self, id: HabitId) -> bool {
        let removed = self.habits.delete(id);
        if removed {
            self.persist_habits();
        }
        removed
    }

    /// Cycle one day's completion cell for a habit
    pub fn toggle_completion(&mut self, id: HabitId, day_key: &str) -> Option<CompletionState> {
        let state = self.habits.toggle(id, day_key)?;
        self.persist_habits();
        Some(state)
    }

    /// Derived statistics for a habit's edit view
    ///
    /// Uses the shipped always-scheduled predicate; callers wanting a
    /// rule-aware streak can call [`current_streak`] with their own
    /// [`Schedule`] implementation.
    pub fn habit_stats(&self, id: HabitId, reference: NaiveDate) -> Option<HabitStats> {
        self.habits
            .get(id)
            .map(|habit| HabitStats::for_habit(habit, reference, &AlwaysScheduled))
    }

    pub fn categories(&self) -> &CategoryCatalog {
        &self.categories
    }

    /// Add a main category to the taxonomy
    pub fn add_main_category(&mut self, name: &str) -> bool {
        let changed = self.categories.add_main(name);
        if changed {
            self.persist_categories();
        }
        changed
    }

    /// Add a subcategory under an existing main category
    pub fn add_subcategory(&mut self, main: &str, sub: &str) -> bool {
        let changed = self.categories.add_sub(main, sub);
        if changed {
            self.persist_categories();
        }
        changed
    }

    fn persist_habits(&self) {
        match self.habits.to_value() {
            Ok(value) => {
                if let Err(e) = self.store.set(HABITS_KEY, &value) {
                    tracing::warn!("Failed to persist habit collection: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize habit collection: {}", e),
        }
    }

    fn persist_categories(&self) {
        match self.categories.to_value() {
            Ok(value) => {
                if let Err(e) = self.store.set(CATEGORIES_KEY, &value) {
                    tracing::warn!("Failed to persist category taxonomy: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize category taxonomy: {}", e),
        }
    }
}
