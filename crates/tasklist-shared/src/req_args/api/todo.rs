use crate::task::{TodoDescription, TodoStatus};

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct NewTodoReqArgs {
    pub description: TodoDescription,
}

/// Both fields are always sent, the caller copies over the one it is not
/// changing
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct UpdateTodoReqArgs {
    pub description: TodoDescription,
    pub status: TodoStatus,
}
