// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the process-wide environment cache.
//!
//! Every test owns the variable names it touches so the tests can share one
//! process.

use red_session::core::env::environment;
use red_session::core::env::split::join_paths;
use red_session::error::SessionError;
use red_session::platform::PATH_SEPARATOR;

// =============================================================================
// Reads and writes through the cache
// =============================================================================

#[test]
fn env_set_then_get() {
    let env = environment().unwrap();
    env.set("RED_SESSION_IT_FOO", "BAR").unwrap();

    assert_eq!(
        env.get("RED_SESSION_IT_FOO").unwrap().as_deref(),
        Some("BAR")
    );
    assert_eq!(
        std::env::var("RED_SESSION_IT_FOO").as_deref(),
        Ok("BAR"),
        "the OS block sees the write"
    );
}

#[test]
fn env_external_removal_is_observed() {
    let env = environment().unwrap();
    env.set("RED_SESSION_IT_A", "1").unwrap();
    assert!(env.contains("RED_SESSION_IT_A").unwrap());

    // SAFETY: the variable name is unique to this test and only read by it.
    unsafe {
        std::env::remove_var("RED_SESSION_IT_A");
    }

    assert!(!env.contains("RED_SESSION_IT_A").unwrap());
    assert!(!env.keys().any(|key| key == "RED_SESSION_IT_A"));
}

#[test]
fn env_external_set_is_adopted() {
    // SAFETY: the variable name is unique to this test and only read by it.
    unsafe {
        std::env::set_var("RED_SESSION_IT_EXTERNAL", "outside");
    }

    let env = environment().unwrap();
    assert_eq!(
        env.get("RED_SESSION_IT_EXTERNAL").unwrap().as_deref(),
        Some("outside")
    );

    // SAFETY: Same as above
    unsafe {
        std::env::set_var("RED_SESSION_IT_EXTERNAL", "changed");
    }
    assert_eq!(
        env.var("RED_SESSION_IT_EXTERNAL").unwrap().to_string(),
        "changed"
    );
}

#[test]
fn env_split_path_list() {
    let env = environment().unwrap();
    env.set("RED_SESSION_IT_PATHS", &join_paths(["/a", "/b", "/c"]))
        .unwrap();

    let var = env.var("RED_SESSION_IT_PATHS").unwrap();
    let segments: Vec<String> = var.split().iter().map(str::to_owned).collect();
    assert_eq!(segments, ["/a", "/b", "/c"]);
    assert!(var.value().unwrap().contains(PATH_SEPARATOR));
}

#[test]
fn env_erase_and_unset_handle() {
    let env = environment().unwrap();
    env.set("RED_SESSION_IT_ERASE", "x").unwrap();
    env.erase("RED_SESSION_IT_ERASE");
    env.erase("RED_SESSION_IT_ERASE");

    assert!(std::env::var_os("RED_SESSION_IT_ERASE").is_none());
    let var = env.var("RED_SESSION_IT_ERASE").unwrap();
    assert!(!var.is_set());
    assert_eq!(var.to_string(), "");
    assert_eq!(var.split().iter().count(), 0);
}

#[test]
fn env_handle_assign_writes_through() {
    let env = environment().unwrap();
    let mut var = env.var("RED_SESSION_IT_ASSIGN").unwrap();
    var.assign("first").unwrap().assign("second").unwrap();

    assert_eq!(var.value(), Some("second"));
    assert_eq!(
        env.get("RED_SESSION_IT_ASSIGN").unwrap().as_deref(),
        Some("second")
    );
}

#[test]
fn env_invalid_names_rejected() {
    let env = environment().unwrap();

    for key in ["", "RED_SESSION=IT"] {
        let err = env.set(key, "v").unwrap_err();
        assert!(
            matches!(err, SessionError::SystemCall(_)),
            "unexpected error for {key:?}: {err:?}"
        );
    }
    assert!(matches!(
        env.set("RED_SESSION_IT_NUL", "a\0b"),
        Err(SessionError::SystemCall(_))
    ));
}

// =============================================================================
// Enumeration
// =============================================================================

#[test]
fn env_keys_are_unique_and_restartable() {
    let env = environment().unwrap();
    env.set("RED_SESSION_IT_KEYS", "1").unwrap();

    let first: Vec<String> = env.keys().collect();
    let mut deduped = first.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), first.len(), "keys must be unique");
    assert!(first.iter().any(|key| key == "RED_SESSION_IT_KEYS"));

    let mut keys = env.keys();
    env.set("RED_SESSION_IT_KEYS_LATE", "1").unwrap();
    assert!(
        !keys.any(|key| key == "RED_SESSION_IT_KEYS_LATE"),
        "a traversal started before the write does not see it"
    );
    assert!(env.keys().any(|key| key == "RED_SESSION_IT_KEYS_LATE"));
}

#[test]
fn env_refresh_adopts_block() {
    // SAFETY: the variable name is unique to this test and only read by it.
    unsafe {
        std::env::set_var("RED_SESSION_IT_REFRESH", "block");
    }

    let env = environment().unwrap();
    env.refresh().unwrap();
    assert!(
        env.entries()
            .any(|entry| entry.key() == "RED_SESSION_IT_REFRESH" && entry.value() == "block")
    );
}

#[test]
fn env_same_instance_everywhere() {
    let first = environment().unwrap();
    let second = std::thread::spawn(|| environment().unwrap())
        .join()
        .unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn env_concurrent_writers() {
    let env = environment().unwrap();
    std::thread::scope(|scope| {
        for i in 0..8 {
            scope.spawn(move || {
                let key = format!("RED_SESSION_IT_THREAD_{i}");
                for round in 0..50 {
                    env.set(&key, &round.to_string()).unwrap();
                    assert!(env.contains(&key).unwrap());
                }
            });
        }
    });

    for i in 0..8 {
        assert_eq!(
            env.get(&format!("RED_SESSION_IT_THREAD_{i}"))
                .unwrap()
                .as_deref(),
            Some("49")
        );
    }
}
