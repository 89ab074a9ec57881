use crate::helpers::{no_cb, spawn_app};
use tasklist_shared::{
    id::TaskListId,
    req_args::api::task_list::{NewTaskListReqArgs, UpdateTaskListReqArgs},
    task::TaskTitle,
};

#[tokio::test]
async fn overview_starts_empty() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let task_lists = app
        .core_client
        .get_task_lists(no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to get task lists");

    // Assert
    assert!(task_lists.is_empty());
}

#[tokio::test]
async fn created_list_shows_up_in_the_overview() {
    // Arrange
    let app = spawn_app().await;
    let args = NewTaskListReqArgs {
        title: TaskTitle::try_from("Groceries").unwrap(),
    };

    // Act
    let msg = app
        .core_client
        .create_task_list(&args, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to create task list");

    // Assert
    assert_eq!(msg.message, "Task list created");
    let task_lists = app
        .core_client
        .get_task_lists(no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to get task lists");
    assert_eq!(task_lists.len(), 1);
    assert_eq!(task_lists[0].title.as_ref(), "Groceries");
    assert!(task_lists[0].is_own);
}

#[tokio::test]
async fn received_lists_are_marked_as_not_own() {
    // Arrange
    let app = spawn_app().await;
    app.store.seed_task_list("Mine");
    app.store.seed_task_list_shared_with_me("Theirs");

    // Act
    let task_lists = app
        .core_client
        .get_task_lists(no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to get task lists");

    // Assert
    let own: Vec<_> = task_lists.iter().filter(|list| list.is_own).collect();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].title.as_ref(), "Mine");
    let received: Vec<_> = task_lists.iter().filter(|list| !list.is_own).collect();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].title.as_ref(), "Theirs");
}

#[tokio::test]
async fn detail_includes_the_todos() {
    // Arrange
    let app = spawn_app().await;
    let list_id = app.store.seed_task_list("Groceries");
    app.store.seed_todo(&list_id, "Milk");
    app.store.seed_todo(&list_id, "Eggs");

    // Act
    let detail = app
        .core_client
        .get_task_list(&list_id, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to get task list");

    // Assert
    assert_eq!(detail.id, list_id);
    assert_eq!(detail.title.as_ref(), "Groceries");
    assert!(detail.is_own);
    let descriptions: Vec<_> = detail
        .todos
        .iter()
        .map(|todo| todo.description.as_ref())
        .collect();
    assert_eq!(descriptions, ["Milk", "Eggs"]);
}

#[tokio::test]
async fn detail_of_a_missing_list_is_an_error() {
    // Arrange
    let app = spawn_app().await;
    let bogus_id = TaskListId::from("no-such-list");

    // Act
    let outcome = app
        .core_client
        .get_task_list(&bogus_id, no_cb)
        .await
        .expect("failed to receive from rx");

    // Assert
    assert!(outcome
        .unwrap_err()
        .to_string()
        .contains("Task list not found"));
}

#[tokio::test]
async fn rename_changes_the_title() {
    // Arrange
    let app = spawn_app().await;
    let list_id = app.store.seed_task_list("Groseries");
    let args = UpdateTaskListReqArgs {
        title: TaskTitle::try_from("Groceries").unwrap(),
    };

    // Act
    let msg = app
        .core_client
        .update_task_list(&list_id, &args, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to rename task list");

    // Assert
    assert_eq!(msg.message, "Task list updated");
    let detail = app
        .core_client
        .get_task_list(&list_id, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to get task list");
    assert_eq!(detail.title.as_ref(), "Groceries");
}

#[tokio::test]
async fn rename_of_a_received_list_is_rejected() {
    // Arrange
    let app = spawn_app().await;
    let list_id = app.store.seed_task_list_shared_with_me("Theirs");
    let args = UpdateTaskListReqArgs {
        title: TaskTitle::try_from("Mine now").unwrap(),
    };

    // Act
    let outcome = app
        .core_client
        .update_task_list(&list_id, &args, no_cb)
        .await
        .expect("failed to receive from rx");

    // Assert
    assert!(outcome.unwrap_err().to_string().contains("owner"));
}

#[tokio::test]
async fn delete_removes_the_list() {
    // Arrange
    let app = spawn_app().await;
    let keep_id = app.store.seed_task_list("Keep");
    let drop_id = app.store.seed_task_list("Drop");

    // Act
    let msg = app
        .core_client
        .delete_task_list(&drop_id, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to delete task list");

    // Assert
    assert_eq!(msg.message, "Task list deleted");
    let task_lists = app
        .core_client
        .get_task_lists(no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to get task lists");
    assert_eq!(task_lists.len(), 1);
    assert_eq!(task_lists[0].id, keep_id);
    let outcome = app
        .core_client
        .get_task_list(&drop_id, no_cb)
        .await
        .expect("failed to receive from rx");
    assert!(outcome.is_err(), "deleted list should be gone");
}

#[tokio::test]
async fn delete_of_a_received_list_is_rejected() {
    // Arrange
    let app = spawn_app().await;
    let list_id = app.store.seed_task_list_shared_with_me("Theirs");

    // Act
    let outcome = app
        .core_client
        .delete_task_list(&list_id, no_cb)
        .await
        .expect("failed to receive from rx");

    // Assert
    assert!(outcome.unwrap_err().to_string().contains("owner"));
}
