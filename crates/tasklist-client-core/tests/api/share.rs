use crate::helpers::{no_cb, spawn_app};
use tasklist_shared::{
    id::UserId,
    req_args::api::task_list::{ShareReqArgs, UnshareReqArgs, UpdatePermissionReqArgs},
    share::SharePermission,
};

#[tokio::test]
async fn sharing_grants_access_to_every_selected_user() {
    // Arrange
    let app = spawn_app().await;
    let list_id = app.store.seed_task_list("Groceries");
    let bob = app.store.seed_user("bob");
    let carol = app.store.seed_user("carol");
    let args = ShareReqArgs {
        users: vec![bob.clone(), carol.clone()],
        permission: SharePermission::Edit,
    };

    // Act
    let msg = app
        .core_client
        .share_task_list(&list_id, &args, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to share task list");

    // Assert
    assert_eq!(msg.message, "Task list shared");
    let shared_with = app
        .core_client
        .get_shared_with(&list_id, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to get shared with list");
    assert_eq!(shared_with.len(), 2);
    for entry in &shared_with {
        assert_eq!(entry.permission, SharePermission::Edit);
    }
    let usernames: Vec<_> = shared_with
        .iter()
        .map(|entry| entry.user.username.as_ref())
        .collect();
    assert_eq!(usernames, ["bob", "carol"]);
}

#[tokio::test]
async fn sharing_with_an_unknown_user_fails() {
    // Arrange
    let app = spawn_app().await;
    let list_id = app.store.seed_task_list("Groceries");
    let args = ShareReqArgs {
        users: vec![UserId::from("no-such-user")],
        permission: SharePermission::View,
    };

    // Act
    let outcome = app
        .core_client
        .share_task_list(&list_id, &args, no_cb)
        .await
        .expect("failed to receive from rx");

    // Assert
    assert!(outcome.unwrap_err().to_string().contains("User not found"));
    let shared_with = app
        .core_client
        .get_shared_with(&list_id, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to get shared with list");
    assert!(shared_with.is_empty(), "failed share must not grant access");
}

#[tokio::test]
async fn sharing_twice_updates_the_permission_instead_of_duplicating() {
    // Arrange
    let app = spawn_app().await;
    let list_id = app.store.seed_task_list("Groceries");
    let bob = app.store.seed_user("bob");
    let view_args = ShareReqArgs {
        users: vec![bob.clone()],
        permission: SharePermission::View,
    };
    let edit_args = ShareReqArgs {
        users: vec![bob.clone()],
        permission: SharePermission::Edit,
    };

    // Act
    for args in [&view_args, &edit_args] {
        app.core_client
            .share_task_list(&list_id, args, no_cb)
            .await
            .expect("failed to receive from rx")
            .expect("failed to share task list");
    }

    // Assert
    let shared_with = app
        .core_client
        .get_shared_with(&list_id, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to get shared with list");
    assert_eq!(shared_with.len(), 1);
    assert_eq!(shared_with[0].permission, SharePermission::Edit);
}

#[tokio::test]
async fn unsharing_revokes_only_the_listed_users() {
    // Arrange
    let app = spawn_app().await;
    let list_id = app.store.seed_task_list("Groceries");
    let bob = app.store.seed_user("bob");
    let carol = app.store.seed_user("carol");
    let share_args = ShareReqArgs {
        users: vec![bob.clone(), carol.clone()],
        permission: SharePermission::View,
    };
    app.core_client
        .share_task_list(&list_id, &share_args, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to share task list");

    // Act
    let msg = app
        .core_client
        .unshare_task_list(&list_id, &UnshareReqArgs { users: vec![bob] }, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to unshare task list");

    // Assert
    assert_eq!(msg.message, "Task list unshared");
    let shared_with = app
        .core_client
        .get_shared_with(&list_id, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to get shared with list");
    assert_eq!(shared_with.len(), 1);
    assert_eq!(shared_with[0].user.id, carol);
}

#[tokio::test]
async fn updating_the_permission_changes_the_tier() {
    // Arrange
    let app = spawn_app().await;
    let list_id = app.store.seed_task_list("Groceries");
    let bob = app.store.seed_user("bob");
    let share_args = ShareReqArgs {
        users: vec![bob.clone()],
        permission: SharePermission::View,
    };
    app.core_client
        .share_task_list(&list_id, &share_args, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to share task list");

    // Act
    let msg = app
        .core_client
        .update_permission(
            &list_id,
            &UpdatePermissionReqArgs {
                permission: SharePermission::Edit,
                user_id: bob,
            },
            no_cb,
        )
        .await
        .expect("failed to receive from rx")
        .expect("failed to update permission");

    // Assert
    assert_eq!(msg.message, "Permission updated");
    let shared_with = app
        .core_client
        .get_shared_with(&list_id, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to get shared with list");
    assert_eq!(shared_with.len(), 1);
    assert_eq!(shared_with[0].permission, SharePermission::Edit);
    assert!(shared_with[0].updated_at >= shared_with[0].created_at);
}

#[tokio::test]
async fn updating_the_permission_of_an_unshared_user_fails() {
    // Arrange
    let app = spawn_app().await;
    let list_id = app.store.seed_task_list("Groceries");
    let bob = app.store.seed_user("bob");

    // Act
    let outcome = app
        .core_client
        .update_permission(
            &list_id,
            &UpdatePermissionReqArgs {
                permission: SharePermission::Edit,
                user_id: bob,
            },
            no_cb,
        )
        .await
        .expect("failed to receive from rx");

    // Assert
    assert!(outcome.unwrap_err().to_string().contains("Share not found"));
}

#[tokio::test]
async fn sharing_a_received_list_is_rejected() {
    // Arrange
    let app = spawn_app().await;
    let list_id = app.store.seed_task_list_shared_with_me("Theirs");
    let bob = app.store.seed_user("bob");
    let args = ShareReqArgs {
        users: vec![bob],
        permission: SharePermission::View,
    };

    // Act
    let outcome = app
        .core_client
        .share_task_list(&list_id, &args, no_cb)
        .await
        .expect("failed to receive from rx");

    // Assert
    assert!(outcome.unwrap_err().to_string().contains("owner"));
}

#[tokio::test]
async fn shared_with_of_a_received_list_is_rejected() {
    // Arrange
    let app = spawn_app().await;
    let list_id = app.store.seed_task_list_shared_with_me("Theirs");

    // Act
    let outcome = app
        .core_client
        .get_shared_with(&list_id, no_cb)
        .await
        .expect("failed to receive from rx");

    // Assert
    assert!(outcome.unwrap_err().to_string().contains("owner"));
}
