use rstopwatch::core::persistence::{KeyValueStore, STORAGE_KEY};
use rstopwatch::errors::AppError;
use rstopwatch::models::stopwatch::UNTITLED;

mod common;
use common::{empty_registry, restore};

#[test]
fn test_restore_from_empty_store_creates_one_stopwatch() {
    let (clock, store, _) = empty_registry();
    let registry = restore(&clock, &store);

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.stopwatches()[0].name, "Stopwatch 1");
    assert!(!registry.any_running());

    let saved = store.get_item(STORAGE_KEY).unwrap().expect("saved on load");
    assert!(saved.contains("Stopwatch 1"));
}

#[test]
fn test_default_names_follow_count() {
    let (_, _, mut registry) = empty_registry();
    registry.add(None, 0);
    registry.add(Some("   "), 0);
    registry.add(Some("  Tea  "), 0);

    let names: Vec<&str> = registry.stopwatches().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Stopwatch 1", "Stopwatch 2", "Tea"]);
}

#[test]
fn test_ids_are_unique() {
    let (_, _, mut registry) = empty_registry();
    for _ in 0..50 {
        registry.add(None, 0);
    }
    let mut ids: Vec<&str> = registry.stopwatches().iter().map(|s| s.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}

#[test]
fn test_start_then_pause_accumulates_delta() {
    let (clock, _, mut registry) = empty_registry();
    registry.add(None, 5_000);

    assert!(registry.start("1").unwrap());
    clock.advance(1_500);
    assert_eq!(registry.elapsed("1").unwrap(), 6_500);

    assert!(registry.pause("1").unwrap());
    clock.advance(10_000);
    assert_eq!(registry.elapsed("1").unwrap(), 6_500);
    assert_eq!(registry.get("1").unwrap().baseline_ms(), 6_500);
    assert_eq!(registry.get("1").unwrap().last_start(), None);
}

#[test]
fn test_start_then_immediate_pause_keeps_elapsed() {
    let (_, _, mut registry) = empty_registry();
    registry.add(None, 42_000);

    registry.start("1").unwrap();
    registry.pause("1").unwrap();
    assert_eq!(registry.elapsed("1").unwrap(), 42_000);
}

#[test]
fn test_start_and_pause_only_from_valid_state() {
    let (clock, _, mut registry) = empty_registry();
    registry.add(None, 0);

    assert!(!registry.pause("1").unwrap());
    assert!(registry.start("1").unwrap());
    clock.advance(700);
    // second start must not move last_start
    assert!(!registry.start("1").unwrap());
    clock.advance(300);
    assert_eq!(registry.elapsed("1").unwrap(), 1_000);
}

#[test]
fn test_toggle_twice_equals_start_pause() {
    let (clock, _, mut registry) = empty_registry();
    registry.add(None, 0);

    assert!(registry.toggle("1").unwrap());
    clock.advance(2_000);
    assert!(!registry.toggle("1").unwrap());
    assert_eq!(registry.elapsed("1").unwrap(), 2_000);
}

#[test]
fn test_reset_while_running_keeps_running_from_zero() {
    let (clock, _, mut registry) = empty_registry();
    registry.add(None, 0);
    registry.start("1").unwrap();
    clock.advance(9_000);

    registry.reset("1").unwrap();
    assert_eq!(registry.elapsed("1").unwrap(), 0);
    assert!(registry.get("1").unwrap().is_running());

    clock.advance(2_000);
    assert_eq!(registry.elapsed("1").unwrap(), 2_000);
}

#[test]
fn test_reset_while_paused() {
    let (_, _, mut registry) = empty_registry();
    registry.add(None, 77_000);
    registry.reset("1").unwrap();
    assert_eq!(registry.elapsed("1").unwrap(), 0);
    assert!(!registry.get("1").unwrap().is_running());
}

#[test]
fn test_apply_time_on_running_rebases() {
    let (clock, _, mut registry) = empty_registry();
    registry.add(None, 0);
    registry.start("1").unwrap();
    clock.advance(50_000);

    assert_eq!(registry.apply_time("1", "2:03").unwrap(), 123_000);
    assert_eq!(registry.elapsed("1").unwrap(), 123_000);

    clock.advance(1_000);
    assert_eq!(registry.elapsed("1").unwrap(), 124_000);
}

#[test]
fn test_apply_time_invalid_leaves_state_untouched() {
    let (clock, _, mut registry) = empty_registry();
    registry.add(None, 30_000);
    registry.start("1").unwrap();
    clock.advance(1_000);
    let before = registry.get("1").unwrap().clone();

    let err = registry.apply_time("1", "1:2:3:4").unwrap_err();
    assert!(matches!(err, AppError::InvalidTime(_)));
    assert!(err.to_string().contains("Use formats like 90, 2:03, or 1:02:03."));
    assert_eq!(registry.get("1").unwrap(), &before);
    assert_eq!(registry.elapsed("1").unwrap(), 31_000);
}

#[test]
fn test_rename_blank_becomes_untitled() {
    let (_, _, mut registry) = empty_registry();
    registry.add(Some("Laundry"), 0);
    registry.rename("1", "  Oven  ").unwrap();
    assert_eq!(registry.get("1").unwrap().name, "Oven");
    registry.rename("1", "   ").unwrap();
    assert_eq!(registry.get("1").unwrap().name, UNTITLED);
}

#[test]
fn test_selectors_by_id_and_position() {
    let (_, _, mut registry) = empty_registry();
    registry.add(Some("a"), 0);
    let id_b = registry.add(Some("b"), 0).id.clone();

    assert_eq!(registry.get("2").unwrap().name, "b");
    assert_eq!(registry.get(&id_b).unwrap().name, "b");
    assert!(matches!(registry.find("0"), Err(AppError::StopwatchNotFound(_))));
    assert!(matches!(registry.find("3"), Err(AppError::StopwatchNotFound(_))));
    assert!(matches!(registry.find("sw-nope"), Err(AppError::StopwatchNotFound(_))));
}

#[test]
fn test_adding_keeps_existing_positions() {
    let (_, _, mut registry) = empty_registry();
    registry.add(Some("first"), 0);
    registry.add(Some("second"), 0);
    assert_eq!(registry.get("1").unwrap().name, "first");

    registry.add(Some("third"), 0);
    let names: Vec<&str> = registry.stopwatches().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["first", "second", "third"]);
    assert_eq!(registry.get("1").unwrap().name, "first");
    assert_eq!(registry.get("3").unwrap().name, "third");
}

#[test]
fn test_remove_only_that_record() {
    let (clock, store, mut registry) = empty_registry();
    registry.add(Some("a"), 1_000);
    let b = registry.add(Some("b"), 2_000).id.clone();
    registry.add(Some("c"), 3_000);

    let removed = registry.remove(&b).unwrap();
    assert_eq!(removed.name, "b");

    let names: Vec<&str> = registry.stopwatches().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["a", "c"]);

    let saved = store.get_item(STORAGE_KEY).unwrap().unwrap();
    assert!(!saved.contains(&b));

    let reloaded = restore(&clock, &store);
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.find(&b).is_err());

    assert!(registry.remove(&b).is_err());
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_round_trip_restores_everything_paused() {
    let (clock, store, mut registry) = empty_registry();
    registry.add(Some("paused"), 65_000);
    registry.add(Some("running"), 1_000);
    registry.start("2").unwrap();
    clock.advance(4_250);
    registry.on_teardown();

    let now = registry.now_ms();
    let expected: Vec<(String, String, u64)> = registry
        .stopwatches()
        .iter()
        .map(|s| (s.id.clone(), s.name.clone(), s.elapsed(now)))
        .collect();

    clock.advance(60_000);
    let reloaded = restore(&clock, &store);

    let got: Vec<(String, String, u64)> = reloaded
        .stopwatches()
        .iter()
        .map(|s| (s.id.clone(), s.name.clone(), s.baseline_ms()))
        .collect();

    assert_eq!(got, expected);
    assert_eq!(got[1].2, 5_250);
    assert!(!reloaded.any_running());
}

#[test]
fn test_every_mutation_saves() {
    let (clock, store, mut registry) = empty_registry();
    registry.add(Some("a"), 0);
    registry.start("1").unwrap();
    clock.advance(3_000);
    registry.pause("1").unwrap();

    let saved = store.get_item(STORAGE_KEY).unwrap().unwrap();
    assert!(saved.contains("\"timeMs\":3000"));

    registry.apply_time("1", "90").unwrap();
    let saved = store.get_item(STORAGE_KEY).unwrap().unwrap();
    assert!(saved.contains("\"timeMs\":90000"));
}
