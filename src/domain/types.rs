/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental types like HabitId, Color, HabitKind,
/// FrequencyType and CompletionState that are used by the Habit entity and
/// the statistics engine.

use serde::{Deserialize, Serialize};

/// Unique identifier for a habit
///
/// A thin wrapper around an integer to provide type safety. Ids are assigned
/// by the repository from a monotonic counter, so they are unique within a
/// collection regardless of how quickly habits are created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(pub i64);

impl std::fmt::Display for HabitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Semantic color token attached to a habit
///
/// The palette is fixed; values outside it (e.g. hand-edited store contents)
/// deserialize to `Neutral` instead of failing the whole load, since the
/// entity itself never validates colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Purple,
    /// Fallback for unrecognized stored values
    Neutral,
}

impl Color {
    /// The token as it appears in persisted habit records
    pub fn token(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Indigo => "indigo",
            Color::Purple => "purple",
            Color::Neutral => "neutral",
        }
    }

    /// Background style class for the presentation layer
    pub fn background_class(&self) -> &'static str {
        match self {
            Color::Red => "bg-red-500",
            Color::Orange => "bg-orange-500",
            Color::Yellow => "bg-yellow-500",
            Color::Green => "bg-green-500",
            Color::Blue => "bg-blue-500",
            Color::Indigo => "bg-indigo-500",
            Color::Purple => "bg-purple-500",
            Color::Neutral => "bg-gray-500",
        }
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        match s.as_str() {
            "red" => Color::Red,
            "orange" => Color::Orange,
            "yellow" => Color::Yellow,
            "green" => Color::Green,
            "blue" => Color::Blue,
            "indigo" => Color::Indigo,
            "purple" => Color::Purple,
            _ => Color::Neutral,
        }
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.token().to_string()
    }
}

/// The three mutually-exclusive habit variants
///
/// `AnchorHabit` and `LifeGoalHabit` are cardinality-limited across the whole
/// collection (at most 1 and 3 respectively). The limits are enforced by the
/// editing boundary, not by the entity or the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HabitKind {
    #[serde(rename = "Habit")]
    Habit,
    #[serde(rename = "Anchor Habit")]
    AnchorHabit,
    #[serde(rename = "Life Goal Habit")]
    LifeGoalHabit,
}

impl HabitKind {
    /// Display label, matching the persisted representation
    pub fn label(&self) -> &'static str {
        match self {
            HabitKind::Habit => "Habit",
            HabitKind::AnchorHabit => "Anchor Habit",
            HabitKind::LifeGoalHabit => "Life Goal Habit",
        }
    }
}

/// Scheduling rule family declared on a habit
///
/// Only declares which rule applies; the per-family parameters live on the
/// habit itself (`selected_days`, `times_per_period`/`period_unit`,
/// `repeat_days`). The shipped scheduling predicate ignores all of this for
/// now, but the data is kept so a rule-aware predicate can be substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrequencyType {
    #[serde(rename = "Anytime")]
    Anytime,
    #[serde(rename = "Everyday")]
    Everyday,
    #[serde(rename = "Specific Days")]
    SpecificDays,
    #[serde(rename = "X times per period")]
    XTimesPerPeriod,
    #[serde(rename = "Every X days")]
    EveryXDays,
}

/// Period unit for the `XTimesPerPeriod` frequency family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodUnit {
    Week,
    Month,
}

/// Day of the week as selected in the `SpecificDays` frequency family
///
/// Persisted as full English day names, the form the original data uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Convert to the chrono weekday for calendar math
    pub fn to_weekday(self) -> chrono::Weekday {
        match self {
            DayOfWeek::Monday => chrono::Weekday::Mon,
            DayOfWeek::Tuesday => chrono::Weekday::Tue,
            DayOfWeek::Wednesday => chrono::Weekday::Wed,
            DayOfWeek::Thursday => chrono::Weekday::Thu,
            DayOfWeek::Friday => chrono::Weekday::Fri,
            DayOfWeek::Saturday => chrono::Weekday::Sat,
            DayOfWeek::Sunday => chrono::Weekday::Sun,
        }
    }
}

/// Tri-state completion value for a single (habit, day) cell
///
/// A day the user never touched is `Unknown`; one tap marks it `Done`,
/// another marks it explicitly `Failed`, a third returns it to `Unknown`.
/// On the wire this is `true | false | null`, so maps written by earlier
/// versions of the dashboard load unchanged. A missing key and an explicit
/// `Unknown` are equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum CompletionState {
    #[default]
    Unknown,
    Done,
    Failed,
}

impl CompletionState {
    /// The next state in the toggle cycle: Unknown -> Done -> Failed -> Unknown
    pub fn toggled(self) -> Self {
        match self {
            CompletionState::Unknown => CompletionState::Done,
            CompletionState::Done => CompletionState::Failed,
            CompletionState::Failed => CompletionState::Unknown,
        }
    }

    pub fn is_done(self) -> bool {
        matches!(self, CompletionState::Done)
    }
}

impl From<Option<bool>> for CompletionState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => CompletionState::Done,
            Some(false) => CompletionState::Failed,
            None => CompletionState::Unknown,
        }
    }
}

impl From<CompletionState> for Option<bool> {
    fn from(state: CompletionState) -> Self {
        match state {
            CompletionState::Done => Some(true),
            CompletionState::Failed => Some(false),
            CompletionState::Unknown => None,
        }
    }
}

/// A `(main, sub)` category tag pair
///
/// Always embedded by value inside a habit; the available taxonomy itself is
/// managed by the category catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub main: String,
    pub sub: String,
}

impl Category {
    pub fn new(main: impl Into<String>, sub: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            sub: sub.into(),
        }
    }
}
