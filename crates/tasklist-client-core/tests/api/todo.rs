use crate::helpers::{no_cb, spawn_app};
use tasklist_shared::{
    id::TodoId,
    req_args::api::todo::{NewTodoReqArgs, UpdateTodoReqArgs},
    task::{TodoDescription, TodoStatus},
};

#[tokio::test]
async fn created_todo_starts_pending() {
    // Arrange
    let app = spawn_app().await;
    let list_id = app.store.seed_task_list("Groceries");
    let args = NewTodoReqArgs {
        description: TodoDescription::try_from("Milk").unwrap(),
    };

    // Act
    let msg = app
        .core_client
        .create_todo(&list_id, &args, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to create todo");

    // Assert
    assert_eq!(msg.message, "Todo created");
    let detail = app
        .core_client
        .get_task_list(&list_id, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to get task list");
    assert_eq!(detail.todos.len(), 1);
    assert_eq!(detail.todos[0].description.as_ref(), "Milk");
    assert_eq!(detail.todos[0].status, TodoStatus::Pending);
}

#[tokio::test]
async fn completing_a_todo_keeps_its_description() {
    // Arrange
    let app = spawn_app().await;
    let list_id = app.store.seed_task_list("Groceries");
    let todo_id = app.store.seed_todo(&list_id, "Milk");
    let args = UpdateTodoReqArgs {
        description: TodoDescription::try_from("Milk").unwrap(),
        status: TodoStatus::Completed,
    };

    // Act
    let msg = app
        .core_client
        .update_todo(&list_id, &todo_id, &args, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to update todo");

    // Assert
    assert_eq!(msg.message, "Todo updated");
    let detail = app
        .core_client
        .get_task_list(&list_id, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to get task list");
    assert_eq!(detail.todos[0].status, TodoStatus::Completed);
    assert_eq!(detail.todos[0].description.as_ref(), "Milk");
}

#[tokio::test]
async fn editing_a_todo_description_keeps_its_status() {
    // Arrange
    let app = spawn_app().await;
    let list_id = app.store.seed_task_list("Groceries");
    let todo_id = app.store.seed_todo(&list_id, "Milk");
    let args = UpdateTodoReqArgs {
        description: TodoDescription::try_from("Oat milk").unwrap(),
        status: TodoStatus::Pending,
    };

    // Act
    app.core_client
        .update_todo(&list_id, &todo_id, &args, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to update todo");

    // Assert
    let detail = app
        .core_client
        .get_task_list(&list_id, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to get task list");
    assert_eq!(detail.todos[0].description.as_ref(), "Oat milk");
    assert_eq!(detail.todos[0].status, TodoStatus::Pending);
}

#[tokio::test]
async fn deleting_a_todo_removes_it() {
    // Arrange
    let app = spawn_app().await;
    let list_id = app.store.seed_task_list("Groceries");
    let keep_id = app.store.seed_todo(&list_id, "Milk");
    let drop_id = app.store.seed_todo(&list_id, "Eggs");

    // Act
    let msg = app
        .core_client
        .delete_todo(&list_id, &drop_id, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to delete todo");

    // Assert
    assert_eq!(msg.message, "Todo deleted");
    let detail = app
        .core_client
        .get_task_list(&list_id, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to get task list");
    assert_eq!(detail.todos.len(), 1);
    assert_eq!(detail.todos[0].id, keep_id);
}

#[tokio::test]
async fn updating_a_missing_todo_is_an_error() {
    // Arrange
    let app = spawn_app().await;
    let list_id = app.store.seed_task_list("Groceries");
    let bogus_id = TodoId::from("no-such-todo");
    let args = UpdateTodoReqArgs {
        description: TodoDescription::try_from("Milk").unwrap(),
        status: TodoStatus::Completed,
    };

    // Act
    let outcome = app
        .core_client
        .update_todo(&list_id, &bogus_id, &args, no_cb)
        .await
        .expect("failed to receive from rx");

    // Assert
    assert!(outcome.unwrap_err().to_string().contains("Todo not found"));
}

#[tokio::test]
async fn received_lists_accept_todo_edits() {
    // Arrange
    let app = spawn_app().await;
    let list_id = app.store.seed_task_list_shared_with_me("Theirs");
    let args = NewTodoReqArgs {
        description: TodoDescription::try_from("Bread").unwrap(),
    };

    // Act
    let outcome = app
        .core_client
        .create_todo(&list_id, &args, no_cb)
        .await
        .expect("failed to receive from rx");

    // Assert
    assert!(outcome.is_ok(), "editors may add todos to received lists");
    let detail = app
        .core_client
        .get_task_list(&list_id, no_cb)
        .await
        .expect("failed to receive from rx")
        .expect("failed to get task list");
    assert_eq!(detail.todos.len(), 1);
}
