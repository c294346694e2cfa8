//! Several OS processes hammering one key through a shared lock directory
//!
//! The test binary re-executes itself; the child role is selected through
//! environment variables and is a no-op in a normal test run.

use mzcache::{Cache, CacheConfigBuilder, LockCoordinator};
use std::env;
use std::process::Command;
use tempfile::TempDir;

const CHILD_ROOT_ENV: &str = "MZCACHE_TEST_CHILD_ROOT";
const CHILD_LOCKS_ENV: &str = "MZCACHE_TEST_CHILD_LOCKS";
const CHILD_ID_ENV: &str = "MZCACHE_TEST_CHILD_ID";
const ROUNDS: usize = 25;

fn payload(writer: &str, round: usize) -> String {
    format!("{writer}:{round}|").repeat(512)
}

fn is_complete(value: &str) -> bool {
    let Some((unit, _)) = value.split_once('|') else {
        return false;
    };
    let unit = format!("{unit}|");
    value.len() == unit.len() * 512 && value == unit.repeat(512)
}

#[test]
fn child_round_trips() {
    let (Ok(root), Ok(locks), Ok(id)) = (
        env::var(CHILD_ROOT_ENV),
        env::var(CHILD_LOCKS_ENV),
        env::var(CHILD_ID_ENV),
    ) else {
        return;
    };

    let cache = Cache::new(
        CacheConfigBuilder::new()
            .with_cache_dir(root)
            .with_lock_dir(locks)
            .build(),
    )
    .unwrap();

    for round in 0..ROUNDS {
        cache.write("shared", &payload(&id, round)).unwrap();
        let value = cache.read("shared", 1).unwrap();
        assert!(is_complete(&value), "torn value observed");
    }
}

#[test]
fn test_processes_share_one_key() {
    let root = TempDir::new().unwrap();
    let locks = LockCoordinator::initialize(root.path()).unwrap();
    let exe = env::current_exe().unwrap();

    let children: Vec<_> = (0..4)
        .map(|id| {
            Command::new(&exe)
                .args(["child_round_trips", "--exact", "--test-threads=1"])
                .env(CHILD_ROOT_ENV, root.path())
                .env(CHILD_LOCKS_ENV, locks.lock_dir())
                .env(CHILD_ID_ENV, format!("child{id}"))
                .spawn()
                .unwrap()
        })
        .collect();

    for mut child in children {
        assert!(child.wait().unwrap().success());
    }

    let cache = Cache::with_coordinator(
        CacheConfigBuilder::new().with_cache_dir(root.path()).build(),
        std::sync::Arc::new(locks),
    );
    let value = cache.read("shared", 1).unwrap();
    assert!(is_complete(&value));
    assert!(value.starts_with("child"));
}
