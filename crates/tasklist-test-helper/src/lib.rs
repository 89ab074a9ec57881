//! Spins up an in-memory stand-in for the task list API so the client side
//! can be exercised end to end without a real backend

#![warn(unused_crate_dependencies)]

mod stub_server;

use std::{
    fmt::Debug,
    net::TcpListener,
    ops::Deref,
    sync::{Arc, LazyLock, Mutex, MutexGuard},
};

use tasklist_shared::{
    id::{TaskListId, TodoId, UserId},
    share::{SharedUser, SharedWith},
    task::{TaskListDetail, TaskListSummary, TaskTitle, Todo, TodoDescription, TodoStatus},
    telemetry::{self, get_subscriber, init_subscriber},
    user::Username,
};
use uuid::Uuid;

pub use stub_server::{CRASH_USERNAME, GHOST_USERNAME};

// Ensure that the `tracing` stack is only initialised once
pub static TRACING: LazyLock<String> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let log_file_name = format!("client_tests{}", Uuid::new_v4());
        let (file, path) = telemetry::create_trace_file(&log_file_name).unwrap();
        let subscriber = get_subscriber(subscriber_name, default_filter_level, file);
        init_subscriber(subscriber).unwrap();
        format!("Traces for tests being written to: {path:?}")
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).unwrap();
        "Traces set to std::io::sink".to_string()
    }
});

pub struct TestApp<C> {
    pub address: String,
    pub core_client: C,
    pub store: StoreHandle,
}

impl<C> Debug for TestApp<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestApp")
            .field("address", &self.address)
            .finish()
    }
}

/// Empty function for use when a call back isn't needed
pub fn no_cb() {}

/// Binds to a random OS port and readies the stub server. The caller decides
/// which runtime the returned server future gets spawned onto.
pub fn prepare_stub_app(store: StoreHandle) -> (actix_web::dev::Server, String) {
    start_tracing();
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind random port");
    let port = listener
        .local_addr()
        .expect("failed to get local address of listener")
        .port();
    let server = stub_server::run(listener, store).expect("failed to build stub server");
    (server, port_to_test_address(port))
}

pub fn build_test_app<C, F>(address: String, build_client: F, store: StoreHandle) -> TestApp<C>
where
    F: FnOnce(String) -> C,
{
    let core_client = build_client(address.clone());
    TestApp {
        address,
        core_client,
        store,
    }
}

pub fn port_to_test_address(application_port: u16) -> String {
    format!("http://localhost:{application_port}")
}

fn start_tracing() {
    // Accessing TRACING also forces the LazyLock to initialize
    let logging_msg = TRACING.deref();
    println!("{logging_msg}");
}

/// Shared ownership of the stub's backing data, used to seed state before
/// driving the client.
///
/// All requests are treated as coming from one implicit user. Lists seeded or
/// created as "own" accept every operation, lists shared with that user only
/// accept todo edits.
#[derive(Debug, Clone, Default)]
pub struct StoreHandle(Arc<Mutex<Store>>);

#[derive(Debug, Default)]
pub(crate) struct Store {
    pub(crate) users: Vec<SharedUser>,
    pub(crate) lists: Vec<StoredList>,
}

#[derive(Debug)]
pub(crate) struct StoredList {
    pub(crate) id: TaskListId,
    pub(crate) title: TaskTitle,
    pub(crate) is_own: bool,
    pub(crate) todos: Vec<Todo>,
    pub(crate) shares: Vec<SharedWith>,
}

impl StoreHandle {
    pub(crate) fn lock(&self) -> MutexGuard<'_, Store> {
        self.0.lock().expect("store mutex poisoned")
    }

    pub fn seed_user(&self, username: &str) -> UserId {
        let id = UserId::from(Uuid::new_v4().to_string());
        let username = Username::try_from(username).expect("invalid username to seed");
        self.lock().users.push(SharedUser {
            id: id.clone(),
            username,
        });
        id
    }

    /// Seeds a list owned by the requesting user
    pub fn seed_task_list(&self, title: &str) -> TaskListId {
        self.seed_list(title, true)
    }

    /// Seeds a list owned by someone else that was shared with the requesting
    /// user with edit rights
    pub fn seed_task_list_shared_with_me(&self, title: &str) -> TaskListId {
        self.seed_list(title, false)
    }

    fn seed_list(&self, title: &str, is_own: bool) -> TaskListId {
        let id = TaskListId::from(Uuid::new_v4().to_string());
        self.lock().lists.push(StoredList {
            id: id.clone(),
            title: TaskTitle::try_from(title).expect("invalid title to seed"),
            is_own,
            todos: Vec::new(),
            shares: Vec::new(),
        });
        id
    }

    pub fn seed_todo(&self, list_id: &TaskListId, description: &str) -> TodoId {
        let id = TodoId::from(Uuid::new_v4().to_string());
        let mut store = self.lock();
        let list = store
            .list_mut(list_id)
            .expect("list to seed a todo into not found");
        list.todos.push(Todo {
            id: id.clone(),
            description: TodoDescription::try_from(description)
                .expect("invalid description to seed"),
            status: TodoStatus::Pending,
        });
        id
    }
}

impl Store {
    pub(crate) fn find(&self, id: &TaskListId) -> Option<&StoredList> {
        self.lists.iter().find(|list| &list.id == id)
    }

    pub(crate) fn list_mut(&mut self, id: &TaskListId) -> Option<&mut StoredList> {
        self.lists.iter_mut().find(|list| &list.id == id)
    }
}

impl StoredList {
    pub(crate) fn to_summary(&self) -> TaskListSummary {
        TaskListSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            is_own: self.is_own,
        }
    }

    pub(crate) fn to_detail(&self) -> TaskListDetail {
        TaskListDetail {
            id: self.id.clone(),
            title: self.title.clone(),
            is_own: self.is_own,
            todos: self.todos.clone(),
        }
    }
}
