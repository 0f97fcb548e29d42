/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, CompletionState, Category)
/// along with the pure date helpers and the statistics engine that derives
/// streaks and totals from a habit's completion history.

pub mod dates;
pub mod habit;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use streak::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
///
/// All of these surface at the editing boundary; the repository itself
/// treats missing ids as no-ops rather than errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Habit name cannot be empty")]
    EmptyHabitName,

    #[error("At most {limit} habit(s) of type {kind} allowed")]
    HabitLimitReached { kind: &'static str, limit: usize },
}
