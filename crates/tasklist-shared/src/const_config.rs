//! Stores settings that are not expected to need to change but grouped together
//! for discoverability and reuse. Each constant should be prefixed by the module
//! name to allow importing the constant only and still be readable

use tasklist_time::Millis;

pub const PANIC_ON_RARE_ERR: bool = true;

pub mod client {
    use super::*;

    /// Quiet period of typing before a username lookup request is issued
    pub const SEARCH_DEBOUNCE: Millis = Millis::new(500);

    /// How long a notification stays on screen before it is dropped
    pub const NOTIFICATION_TTL: Millis = Millis::from_secs(6);

    pub const DEFAULT_SERVER_ADDRESS: &str = "http://localhost:8789";
}

pub mod path {
    mod path_spec;
    pub use path_spec::{PathSpec, ResolvedPath};

    pub const PATH_API_USER_CHECK: PathSpec = PathSpec::get("/api/users/check/:username");

    pub const PATH_API_TASK_LISTS: PathSpec = PathSpec::get("/api/tasklists");
    pub const PATH_API_TASK_LIST_CREATE: PathSpec = PathSpec::post("/api/tasklists");
    pub const PATH_API_TASK_LIST: PathSpec = PathSpec::get("/api/tasklists/:id");
    pub const PATH_API_TASK_LIST_UPDATE: PathSpec = PathSpec::put("/api/tasklists/:id");
    pub const PATH_API_TASK_LIST_DELETE: PathSpec = PathSpec::delete("/api/tasklists/:id");

    pub const PATH_API_TASK_LIST_SHARED_WITH: PathSpec =
        PathSpec::get("/api/tasklists/:id/shared");
    pub const PATH_API_TASK_LIST_SHARE: PathSpec = PathSpec::post("/api/tasklists/:id/share");
    pub const PATH_API_TASK_LIST_UNSHARE: PathSpec = PathSpec::post("/api/tasklists/:id/unshare");
    pub const PATH_API_TASK_LIST_PERMISSION: PathSpec =
        PathSpec::put("/api/tasklists/:id/permission");

    pub const PATH_API_TODO_CREATE: PathSpec = PathSpec::post("/api/tasklists/:id/todos");
    pub const PATH_API_TODO_UPDATE: PathSpec = PathSpec::put("/api/tasklists/:id/todos/:todo_id");
    pub const PATH_API_TODO_DELETE: PathSpec =
        PathSpec::delete("/api/tasklists/:id/todos/:todo_id");
}
