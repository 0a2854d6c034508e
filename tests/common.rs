#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rstopwatch::core::clock::ManualClock;
use rstopwatch::core::persistence::MemoryStore;
use rstopwatch::core::registry::StopwatchRegistry;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

pub type TestRegistry = StopwatchRegistry<Rc<ManualClock>, MemoryStore>;

pub fn rsw() -> Command {
    cargo_bin_cmd!("rstopwatch")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rstopwatch.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize an empty DB through the CLI
pub fn init_db(db_path: &str) {
    rsw()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Empty registry on a manual clock and a fresh in-memory store
pub fn empty_registry() -> (Rc<ManualClock>, MemoryStore, TestRegistry) {
    let clock = Rc::new(ManualClock::new(10_000));
    let store = MemoryStore::new();
    let registry = StopwatchRegistry::new(
        Rc::clone(&clock),
        store.clone(),
        "multi-stopwatches-v1",
        "Stopwatch",
    );
    (clock, store, registry)
}

/// Registry restored from `store`, sharing `clock`
pub fn restore(clock: &Rc<ManualClock>, store: &MemoryStore) -> TestRegistry {
    StopwatchRegistry::restore(
        Rc::clone(clock),
        store.clone(),
        "multi-stopwatches-v1",
        "Stopwatch",
    )
}
