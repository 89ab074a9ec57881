use crate::{id::UserId, share::SharePermission, task::TaskTitle};

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct NewTaskListReqArgs {
    pub title: TaskTitle,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct UpdateTaskListReqArgs {
    pub title: TaskTitle,
}

/// Grants `permission` to every user in `users`
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct ShareReqArgs {
    pub users: Vec<UserId>,
    pub permission: SharePermission,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct UnshareReqArgs {
    pub users: Vec<UserId>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct UpdatePermissionReqArgs {
    pub permission: SharePermission,
    pub user_id: UserId,
}
