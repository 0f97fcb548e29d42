/// End-to-end dashboard tests over a real SQLite store
use chrono::NaiveDate;
use mastery_dashboard::*;
use tempfile::NamedTempFile;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn open_in_memory() -> Dashboard {
    let store = SqliteStore::open_in_memory().expect("Failed to open in-memory store");
    Dashboard::open(Box::new(store))
}

#[test]
fn test_first_launch_seeds_habits_and_taxonomy() {
    let dashboard = open_in_memory();

    let names: Vec<&str> = dashboard.habits().iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, ["Open App", "Morning Jog", "Code for 30 minutes"]);
    assert_eq!(dashboard.categories().len(), 10);
    assert!(dashboard.categories().subcategories("Life").is_some());
}

#[test]
fn test_seed_statistics_match_sample_data() {
    let dashboard = open_in_memory();
    let reference = date(2025, 8, 27);

    // "Open App" has three consecutive done days ending on the reference
    let open_app = dashboard.habits()[0].id;
    let stats = dashboard.habit_stats(open_app, reference).unwrap();
    assert_eq!(stats.highest_streak, 3);
    assert_eq!(stats.total_completions, 3);

    // "Morning Jog" failed the day before the reference, so no streak
    let morning_jog = dashboard.habits()[1].id;
    let stats = dashboard.habit_stats(morning_jog, reference).unwrap();
    assert_eq!(stats.highest_streak, 0);
    assert_eq!(stats.total_completions, 1);
}

#[test]
fn test_collection_survives_a_restart() {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    let path = file.path().to_path_buf();

    let (created, seed_anchor) = {
        let store = SqliteStore::open(path.clone()).expect("Failed to open store");
        let mut dashboard = Dashboard::open(Box::new(store));

        let id = dashboard
            .save_habit(HabitDraft::new("Read before bed"), None)
            .expect("Submission should pass validation");
        dashboard.toggle_completion(id, "2025-08-27");
        dashboard.toggle_completion(id, "2025-08-28");
        dashboard.toggle_completion(id, "2025-08-28"); // Done -> Failed

        (id, dashboard.habits()[0].id)
    };

    let store = SqliteStore::open(path).expect("Failed to reopen store");
    let dashboard = Dashboard::open(Box::new(store));

    let habit = dashboard.habit(created).expect("Created habit should persist");
    assert_eq!(habit.name, "Read before bed");
    assert_eq!(habit.completion_state("2025-08-27"), CompletionState::Done);
    assert_eq!(habit.completion_state("2025-08-28"), CompletionState::Failed);

    // The seed data written on first launch is still there too
    assert_eq!(dashboard.habit(seed_anchor).unwrap().name, "Open App");
}

#[test]
fn test_editing_preserves_completion_history() {
    let mut dashboard = open_in_memory();
    let id = dashboard
        .save_habit(HabitDraft::new("Meditate"), None)
        .unwrap();
    dashboard.toggle_completion(id, "2025-08-27");

    let saved = dashboard
        .save_habit(
            HabitDraft::new("Meditate for 10 minutes").with_color(Color::Indigo),
            Some(id),
        )
        .unwrap();
    assert_eq!(saved, id);

    let habit = dashboard.habit(id).unwrap();
    assert_eq!(habit.name, "Meditate for 10 minutes");
    assert_eq!(habit.color, Color::Indigo);
    assert_eq!(habit.completion_state("2025-08-27"), CompletionState::Done);
}

#[test]
fn test_anchor_limit_is_enforced_over_the_seeded_collection() {
    // The seed set already contains the one allowed anchor habit
    let mut dashboard = open_in_memory();
    let result = dashboard.save_habit(
        HabitDraft::new("Second anchor").with_kind(HabitKind::AnchorHabit),
        None,
    );

    assert!(matches!(
        result,
        Err(DomainError::HabitLimitReached { limit: 1, .. })
    ));
    assert_eq!(dashboard.habits().len(), 3); // nothing was created
}

#[test]
fn test_blank_name_submission_creates_nothing() {
    let mut dashboard = open_in_memory();
    let result = dashboard.save_habit(HabitDraft::new("  "), None);

    assert!(matches!(result, Err(DomainError::EmptyHabitName)));
    assert_eq!(dashboard.habits().len(), 3);
}

#[test]
fn test_delete_then_toggle_is_a_noop() {
    let mut dashboard = open_in_memory();
    let id = dashboard.save_habit(HabitDraft::new("Ephemeral"), None).unwrap();

    assert!(dashboard.delete_habit(id));
    assert!(!dashboard.delete_habit(id));
    assert!(dashboard.toggle_completion(id, "2025-08-27").is_none());
}

#[test]
fn test_custom_categories_survive_a_restart() {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    let path = file.path().to_path_buf();

    {
        let store = SqliteStore::open(path.clone()).expect("Failed to open store");
        let mut dashboard = Dashboard::open(Box::new(store));
        assert!(dashboard.add_main_category("Music"));
        assert!(dashboard.add_subcategory("Music", "Practice scales"));
        assert!(!dashboard.add_subcategory("Music", "Practice scales"));
    }

    let store = SqliteStore::open(path).expect("Failed to reopen store");
    let dashboard = Dashboard::open(Box::new(store));
    assert_eq!(
        dashboard.categories().subcategories("Music").unwrap(),
        ["Practice scales"]
    );
}

#[test]
fn test_toggle_cycle_through_the_facade() {
    let mut dashboard = open_in_memory();
    let id = dashboard.habits()[2].id; // "Code for 30 minutes", empty history

    assert_eq!(
        dashboard.toggle_completion(id, "2025-08-27"),
        Some(CompletionState::Done)
    );
    assert_eq!(
        dashboard.toggle_completion(id, "2025-08-27"),
        Some(CompletionState::Failed)
    );
    assert_eq!(
        dashboard.toggle_completion(id, "2025-08-27"),
        Some(CompletionState::Unknown)
    );
}
