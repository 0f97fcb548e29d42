/// Edit-boundary validation for habit submissions
///
/// The repository stores whatever it is handed; this module is where a
/// submission can be refused. It normalizes the draft (trimming, category
/// de-duplication) and enforces the rules the entity does not self-enforce:
/// a non-empty name and the collection-wide cardinality limits.

use crate::domain::{DomainError, HabitDraft, HabitId, HabitKind};
use crate::repository::HabitRepository;

/// At most one anchor habit across the collection
pub const ANCHOR_HABIT_LIMIT: usize = 1;

/// At most three life-goal habits across the collection
pub const LIFE_GOAL_HABIT_LIMIT: usize = 3;

/// Normalize and validate a draft against the current collection
///
/// `editing` names the habit the form was opened for, if any; a habit may
/// always keep its own kind even when that kind is at its limit, since
/// saving it adds nothing new.
pub fn prepare_submission(
    mut draft: HabitDraft,
    repository: &HabitRepository,
    editing: Option<HabitId>,
) -> Result<HabitDraft, DomainError> {
    draft.name = draft.name.trim().to_string();
    draft.description = draft.description.trim().to_string();
    dedup_categories(&mut draft);

    if draft.name.is_empty() {
        return Err(DomainError::EmptyHabitName);
    }
    check_cardinality(&draft, repository, editing)?;

    Ok(draft)
}

/// Drop repeated `(main, sub)` pairs, keeping first occurrences
///
/// The form toggles pairs on and off, so duplicates only appear through
/// hand-built drafts; they are silently collapsed rather than refused.
fn dedup_categories(draft: &mut HabitDraft) {
    let mut seen = Vec::new();
    draft.categories.retain(|category| {
        let key = (category.main.clone(), category.sub.clone());
        if seen.contains(&key) {
            false
        } else {
            seen.push(key);
            true
        }
    });
}

fn check_cardinality(
    draft: &HabitDraft,
    repository: &HabitRepository,
    editing: Option<HabitId>,
) -> Result<(), DomainError> {
    let limit = match draft.kind {
        HabitKind::AnchorHabit => ANCHOR_HABIT_LIMIT,
        HabitKind::LifeGoalHabit => LIFE_GOAL_HABIT_LIMIT,
        HabitKind::Habit => return Ok(()),
    };

    let occupied = repository
        .habits()
        .iter()
        .filter(|h| h.kind == draft.kind && Some(h.id) != editing)
        .count();

    if occupied >= limit {
        return Err(DomainError::HabitLimitReached {
            kind: draft.kind.label(),
            limit,
        });
    }
    Ok(())
}
