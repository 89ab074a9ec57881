use futures::channel::oneshot;
use tasklist_shared::{
    const_config::path::{
        PATH_API_TASK_LIST, PATH_API_TASK_LISTS, PATH_API_TASK_LIST_CREATE,
        PATH_API_TASK_LIST_DELETE, PATH_API_TASK_LIST_UPDATE,
    },
    id::TaskListId,
    req_args::api::task_list::{NewTaskListReqArgs, UpdateTaskListReqArgs},
    responses::ApiMessage,
    task::{TaskListDetail, TaskListSummary},
};

use crate::{
    client::{UiCallBack, DUMMY_ARGUMENT},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn get_task_lists<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<TaskListSummary>>> {
        self.send_request_expect_enveloped(
            (&PATH_API_TASK_LISTS).into(),
            &DUMMY_ARGUMENT,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn get_task_list<F: UiCallBack>(
        &self,
        id: &TaskListId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<TaskListDetail>> {
        let path = PATH_API_TASK_LIST.resolve(&[("id", id.as_ref())]);
        self.send_request_expect_enveloped(path, &DUMMY_ARGUMENT, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn create_task_list<F: UiCallBack>(
        &self,
        args: &NewTaskListReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<ApiMessage>> {
        self.send_request_expect_json((&PATH_API_TASK_LIST_CREATE).into(), args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_task_list<F: UiCallBack>(
        &self,
        id: &TaskListId,
        args: &UpdateTaskListReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<ApiMessage>> {
        let path = PATH_API_TASK_LIST_UPDATE.resolve(&[("id", id.as_ref())]);
        self.send_request_expect_json(path, args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_task_list<F: UiCallBack>(
        &self,
        id: &TaskListId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<ApiMessage>> {
        let path = PATH_API_TASK_LIST_DELETE.resolve(&[("id", id.as_ref())]);
        self.send_request_expect_json(path, &"", ui_notify)
    }
}
