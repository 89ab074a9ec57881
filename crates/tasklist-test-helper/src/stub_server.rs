//! Routes and handlers for the in-memory stand-in of the task list API.
//! Response conventions mirror the real API: the username check returns a
//! bare object, reads wrap their payload in a data envelope and mutations
//! return a message.

use std::net::TcpListener;

use actix_web::{dev::Server, error, web, App, HttpRequest, HttpResponse, HttpServer};
use anyhow::Context;
use tasklist_shared::{
    debug_panic,
    id::{ShareId, TaskListId, TodoId, UserId},
    req_args::api::{
        task_list::{
            NewTaskListReqArgs, ShareReqArgs, UnshareReqArgs, UpdatePermissionReqArgs,
            UpdateTaskListReqArgs,
        },
        todo::{NewTodoReqArgs, UpdateTodoReqArgs},
    },
    responses::{ApiMessage, CheckUsernameResponse, DataEnvelope},
    share::SharedWith,
    task::{TaskListDetail, TaskListSummary, Todo, TodoStatus},
};
use tasklist_time::Timestamp;
use uuid::Uuid;

use crate::{StoreHandle, StoredList};

/// Username the stub always fails to look up, for driving the error path
pub const CRASH_USERNAME: &str = "crash";

/// Username the stub answers with a blank id, for driving the
/// degenerate-match path
pub const GHOST_USERNAME: &str = "ghost";

pub(crate) fn run(listener: TcpListener, store: StoreHandle) -> anyhow::Result<Server> {
    let store = web::Data::new(store);
    let server = HttpServer::new(move || {
        App::new()
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/users")
                            .route("/check/{username}", web::get().to(check_username)),
                    )
                    .service(
                        web::scope("/tasklists")
                            .route("", web::get().to(task_list_overview))
                            .route("", web::post().to(task_list_create))
                            .route("/{id}", web::get().to(task_list_detail))
                            .route("/{id}", web::put().to(task_list_update))
                            .route("/{id}", web::delete().to(task_list_delete))
                            .route("/{id}/shared", web::get().to(shared_with_overview))
                            .route("/{id}/share", web::post().to(task_list_share))
                            .route("/{id}/unshare", web::post().to(task_list_unshare))
                            .route("/{id}/permission", web::put().to(permission_update))
                            .route("/{id}/todos", web::post().to(todo_create))
                            .route("/{id}/todos/{todo_id}", web::put().to(todo_update))
                            .route("/{id}/todos/{todo_id}", web::delete().to(todo_delete)),
                    ),
            )
            .app_data(store.clone())
            .default_service(web::route().to(not_found))
    })
    .listen(listener)
    .context("Failed to bind HTTP Server to listener")?
    .run();
    Ok(server)
}

fn task_list_not_found() -> actix_web::Error {
    error::ErrorNotFound("Task list not found")
}

fn owner_only() -> actix_web::Error {
    error::ErrorForbidden("Only the owner can do that")
}

#[tracing::instrument(skip(store))]
async fn check_username(
    store: web::Data<StoreHandle>,
    path: web::Path<String>,
) -> actix_web::Result<web::Json<CheckUsernameResponse>> {
    let username = path.into_inner();
    if username == CRASH_USERNAME {
        return Err(error::ErrorInternalServerError("something went wrong"));
    }
    if username == GHOST_USERNAME {
        return Ok(web::Json(CheckUsernameResponse {
            id: Some(UserId::from("")),
        }));
    }
    let id = store
        .lock()
        .users
        .iter()
        .find(|user| user.username.as_ref() == username)
        .map(|user| user.id.clone());
    Ok(web::Json(CheckUsernameResponse { id }))
}

#[tracing::instrument(skip(store))]
async fn task_list_overview(
    store: web::Data<StoreHandle>,
) -> web::Json<DataEnvelope<Vec<TaskListSummary>>> {
    let data = store.lock().lists.iter().map(|list| list.to_summary()).collect();
    web::Json(DataEnvelope { data })
}

#[tracing::instrument(skip(store))]
async fn task_list_create(
    store: web::Data<StoreHandle>,
    web::Json(args): web::Json<NewTaskListReqArgs>,
) -> web::Json<ApiMessage> {
    store.lock().lists.push(StoredList {
        id: TaskListId::from(Uuid::new_v4().to_string()),
        title: args.title,
        is_own: true,
        todos: Vec::new(),
        shares: Vec::new(),
    });
    web::Json(ApiMessage {
        message: "Task list created".to_string(),
    })
}

#[tracing::instrument(skip(store))]
async fn task_list_detail(
    store: web::Data<StoreHandle>,
    path: web::Path<String>,
) -> actix_web::Result<web::Json<DataEnvelope<TaskListDetail>>> {
    let id = TaskListId::from(path.into_inner());
    let store = store.lock();
    let list = store.find(&id).ok_or_else(task_list_not_found)?;
    Ok(web::Json(DataEnvelope {
        data: list.to_detail(),
    }))
}

#[tracing::instrument(skip(store))]
async fn task_list_update(
    store: web::Data<StoreHandle>,
    path: web::Path<String>,
    web::Json(args): web::Json<UpdateTaskListReqArgs>,
) -> actix_web::Result<web::Json<ApiMessage>> {
    let id = TaskListId::from(path.into_inner());
    let mut store = store.lock();
    let list = store.list_mut(&id).ok_or_else(task_list_not_found)?;
    if !list.is_own {
        return Err(owner_only());
    }
    list.title = args.title;
    Ok(web::Json(ApiMessage {
        message: "Task list updated".to_string(),
    }))
}

#[tracing::instrument(skip(store))]
async fn task_list_delete(
    store: web::Data<StoreHandle>,
    path: web::Path<String>,
) -> actix_web::Result<web::Json<ApiMessage>> {
    let id = TaskListId::from(path.into_inner());
    let mut store = store.lock();
    let list = store.find(&id).ok_or_else(task_list_not_found)?;
    if !list.is_own {
        return Err(owner_only());
    }
    store.lists.retain(|list| list.id != id);
    Ok(web::Json(ApiMessage {
        message: "Task list deleted".to_string(),
    }))
}

#[tracing::instrument(skip(store))]
async fn shared_with_overview(
    store: web::Data<StoreHandle>,
    path: web::Path<String>,
) -> actix_web::Result<web::Json<DataEnvelope<Vec<SharedWith>>>> {
    let id = TaskListId::from(path.into_inner());
    let store = store.lock();
    let list = store.find(&id).ok_or_else(task_list_not_found)?;
    if !list.is_own {
        return Err(owner_only());
    }
    Ok(web::Json(DataEnvelope {
        data: list.shares.clone(),
    }))
}

#[tracing::instrument(skip(store))]
async fn task_list_share(
    store: web::Data<StoreHandle>,
    path: web::Path<String>,
    web::Json(args): web::Json<ShareReqArgs>,
) -> actix_web::Result<web::Json<ApiMessage>> {
    let id = TaskListId::from(path.into_inner());
    let mut store = store.lock();
    {
        let list = store.find(&id).ok_or_else(task_list_not_found)?;
        if !list.is_own {
            return Err(owner_only());
        }
    }
    let users = args
        .users
        .iter()
        .map(|user_id| {
            store
                .users
                .iter()
                .find(|user| &user.id == user_id)
                .cloned()
                .ok_or_else(|| error::ErrorNotFound("User not found"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let now = Timestamp::now();
    let list = store.list_mut(&id).expect("presence checked above");
    // Granting to an already shared user updates the permission in place
    for user in users {
        match list.shares.iter_mut().find(|share| share.user.id == user.id) {
            Some(existing) => {
                existing.permission = args.permission;
                existing.updated_at = now;
            }
            None => list.shares.push(SharedWith {
                id: ShareId::from(Uuid::new_v4().to_string()),
                permission: args.permission,
                user,
                created_at: now,
                updated_at: now,
            }),
        }
    }
    Ok(web::Json(ApiMessage {
        message: "Task list shared".to_string(),
    }))
}

#[tracing::instrument(skip(store))]
async fn task_list_unshare(
    store: web::Data<StoreHandle>,
    path: web::Path<String>,
    web::Json(args): web::Json<UnshareReqArgs>,
) -> actix_web::Result<web::Json<ApiMessage>> {
    let id = TaskListId::from(path.into_inner());
    let mut store = store.lock();
    let list = store.list_mut(&id).ok_or_else(task_list_not_found)?;
    if !list.is_own {
        return Err(owner_only());
    }
    list.shares
        .retain(|share| !args.users.contains(&share.user.id));
    Ok(web::Json(ApiMessage {
        message: "Task list unshared".to_string(),
    }))
}

#[tracing::instrument(skip(store))]
async fn permission_update(
    store: web::Data<StoreHandle>,
    path: web::Path<String>,
    web::Json(args): web::Json<UpdatePermissionReqArgs>,
) -> actix_web::Result<web::Json<ApiMessage>> {
    let id = TaskListId::from(path.into_inner());
    let mut store = store.lock();
    let list = store.list_mut(&id).ok_or_else(task_list_not_found)?;
    if !list.is_own {
        return Err(owner_only());
    }
    let share = list
        .shares
        .iter_mut()
        .find(|share| share.user.id == args.user_id)
        .ok_or_else(|| error::ErrorNotFound("Share not found"))?;
    share.permission = args.permission;
    share.updated_at = Timestamp::now();
    Ok(web::Json(ApiMessage {
        message: "Permission updated".to_string(),
    }))
}

// Todo routes skip the ownership check, the implicit user is assumed to hold
// edit rights on every list shared with them

#[tracing::instrument(skip(store))]
async fn todo_create(
    store: web::Data<StoreHandle>,
    path: web::Path<String>,
    web::Json(args): web::Json<NewTodoReqArgs>,
) -> actix_web::Result<web::Json<ApiMessage>> {
    let id = TaskListId::from(path.into_inner());
    let mut store = store.lock();
    let list = store.list_mut(&id).ok_or_else(task_list_not_found)?;
    list.todos.push(Todo {
        id: TodoId::from(Uuid::new_v4().to_string()),
        description: args.description,
        status: TodoStatus::Pending,
    });
    Ok(web::Json(ApiMessage {
        message: "Todo created".to_string(),
    }))
}

#[tracing::instrument(skip(store))]
async fn todo_update(
    store: web::Data<StoreHandle>,
    path: web::Path<(String, String)>,
    web::Json(args): web::Json<UpdateTodoReqArgs>,
) -> actix_web::Result<web::Json<ApiMessage>> {
    let (id, todo_id) = path.into_inner();
    let id = TaskListId::from(id);
    let todo_id = TodoId::from(todo_id);
    let mut store = store.lock();
    let list = store.list_mut(&id).ok_or_else(task_list_not_found)?;
    let todo = list
        .todos
        .iter_mut()
        .find(|todo| todo.id == todo_id)
        .ok_or_else(|| error::ErrorNotFound("Todo not found"))?;
    todo.description = args.description;
    todo.status = args.status;
    Ok(web::Json(ApiMessage {
        message: "Todo updated".to_string(),
    }))
}

#[tracing::instrument(skip(store))]
async fn todo_delete(
    store: web::Data<StoreHandle>,
    path: web::Path<(String, String)>,
) -> actix_web::Result<web::Json<ApiMessage>> {
    let (id, todo_id) = path.into_inner();
    let id = TaskListId::from(id);
    let todo_id = TodoId::from(todo_id);
    let mut store = store.lock();
    let list = store.list_mut(&id).ok_or_else(task_list_not_found)?;
    let before = list.todos.len();
    list.todos.retain(|todo| todo.id != todo_id);
    if list.todos.len() == before {
        return Err(error::ErrorNotFound("Todo not found"));
    }
    Ok(web::Json(ApiMessage {
        message: "Todo deleted".to_string(),
    }))
}

#[tracing::instrument]
async fn not_found(req: HttpRequest) -> HttpResponse {
    tracing::error!("Failed to match route");
    debug_panic!(format!(
        "404 - {} to '{}' Not found\n",
        req.method(),
        req.path()
    ));
    HttpResponse::NotFound().body(format!(
        "404 - {} to '{}' Not found\n",
        req.method(),
        req.path()
    ))
}
