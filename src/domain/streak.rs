/// Streak calculation and completion aggregation
///
/// The statistics engine reads a habit's completion map on demand and never
/// mutates it. The scheduling predicate is injected so a rule-aware
/// implementation can replace the shipped stub without touching the walk
/// itself.

use chrono::NaiveDate;

use crate::domain::dates::{add_days, day_key};
use crate::domain::{CompletionState, Habit};

/// How far back the streak walk will look before giving up (two years)
pub const STREAK_HORIZON_DAYS: u32 = 730;

/// Decides whether a habit is due on a given date
///
/// Extension point for the frequency families (`SpecificDays`,
/// `XTimesPerPeriod`, `EveryXDays`). The streak walk only consumes this
/// trait, so substituting a rule-aware implementation never changes the
/// walk.
pub trait Schedule {
    fn is_scheduled(&self, habit: &Habit, date: NaiveDate) -> bool;
}

/// The shipped scheduling predicate: every habit is due every day
///
/// An acknowledged simplification carried over from the original dashboard;
/// `frequency_type` and its parameters are deliberately ignored here.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysScheduled;

impl Schedule for AlwaysScheduled {
    fn is_scheduled(&self, _habit: &Habit, _date: NaiveDate) -> bool {
        true
    }
}

/// Count of days marked `Done`, independent of map order
pub fn total_completions(habit: &Habit) -> u32 {
    habit
        .completed
        .values()
        .filter(|state| state.is_done())
        .count() as u32
}

/// Consecutive scheduled `Done` days walking backward from `reference`
///
/// A scheduled day that is not `Done` breaks the streak, with one exception:
/// the reference day itself may legitimately not be done yet (the user is
/// reviewing stats mid-day), so it neither breaks nor extends the streak.
/// Unscheduled days are skipped. The walk is bounded at
/// [`STREAK_HORIZON_DAYS`].
pub fn current_streak(habit: &Habit, reference: NaiveDate, schedule: &dyn Schedule) -> u32 {
    let mut streak = 0;
    let mut cursor = reference;

    for _ in 0..STREAK_HORIZON_DAYS {
        if schedule.is_scheduled(habit, cursor) {
            match habit.completion_state(&day_key(cursor)) {
                CompletionState::Done => streak += 1,
                // Today's cell may just not be done yet
                _ if cursor == reference => {}
                _ => break,
            }
        }
        cursor = add_days(cursor, -1);
    }

    streak
}

/// Derived numbers shown when a habit's edit view opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HabitStats {
    pub total_completions: u32,
    pub highest_streak: u32,
}

impl HabitStats {
    pub fn for_habit(habit: &Habit, reference: NaiveDate, schedule: &dyn Schedule) -> Self {
        Self {
            total_completions: total_completions(habit),
            highest_streak: current_streak(habit, reference, schedule),
        }
    }
}
