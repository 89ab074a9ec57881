use crate::helpers::{no_cb, spawn_app};
use std::sync::{Arc, Mutex};
use tasklist_test_helper::{CRASH_USERNAME, GHOST_USERNAME};

#[tokio::test]
async fn check_username_finds_a_seeded_user() {
    // Arrange
    let app = spawn_app().await;
    let user_id = app.store.seed_user("alice");

    // Act
    let outcome = app
        .core_client
        .check_username("alice", no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("lookup request failed");

    // Assert
    assert_eq!(outcome, Some(user_id));
}

#[tokio::test]
async fn check_username_miss_returns_none() {
    // Arrange
    let app = spawn_app().await;
    app.store.seed_user("alice");

    // Act
    let outcome = app
        .core_client
        .check_username("bob", no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("lookup request failed");

    // Assert
    assert_eq!(outcome, None);
}

#[tokio::test]
async fn check_username_matches_exactly_not_by_prefix() {
    // Arrange
    let app = spawn_app().await;
    app.store.seed_user("alice");

    // Act
    let outcome = app
        .core_client
        .check_username("ali", no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("lookup request failed");

    // Assert
    assert_eq!(outcome, None);
}

#[tokio::test]
async fn check_username_blank_id_is_treated_as_a_miss() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let outcome = app
        .core_client
        .check_username(GHOST_USERNAME, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("lookup request failed");

    // Assert
    assert_eq!(outcome, None);
}

#[tokio::test]
async fn check_username_server_error_is_reported() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let outcome = app
        .core_client
        .check_username(CRASH_USERNAME, no_cb)
        .await
        .expect("failed to receive from rx");

    // Assert
    assert!(outcome.is_err(), "expected the lookup to fail");
}

#[tokio::test]
async fn ensure_call_back_is_run() {
    // Arrange
    let app = spawn_app().await;
    let test_flag = Arc::new(Mutex::new(false));
    let test_flag_clone = Arc::clone(&test_flag);

    // Act
    app.core_client
        .check_username("bob", move || {
            *test_flag_clone.lock().unwrap() = true;
        })
        .await
        .expect("failed to receive from rx")
        .expect("lookup request failed");

    // Assert
    assert!(*test_flag.lock().unwrap(), "flag was not flipped");
}
