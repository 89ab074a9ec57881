use futures::channel::oneshot;
use tasklist_shared::{
    const_config::path::{PATH_API_TODO_CREATE, PATH_API_TODO_DELETE, PATH_API_TODO_UPDATE},
    id::{TaskListId, TodoId},
    req_args::api::todo::{NewTodoReqArgs, UpdateTodoReqArgs},
    responses::ApiMessage,
};

use crate::{client::UiCallBack, Client};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn create_todo<F: UiCallBack>(
        &self,
        list_id: &TaskListId,
        args: &NewTodoReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<ApiMessage>> {
        let path = PATH_API_TODO_CREATE.resolve(&[("id", list_id.as_ref())]);
        self.send_request_expect_json(path, args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_todo<F: UiCallBack>(
        &self,
        list_id: &TaskListId,
        todo_id: &TodoId,
        args: &UpdateTodoReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<ApiMessage>> {
        let path =
            PATH_API_TODO_UPDATE.resolve(&[("id", list_id.as_ref()), ("todo_id", todo_id.as_ref())]);
        self.send_request_expect_json(path, args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_todo<F: UiCallBack>(
        &self,
        list_id: &TaskListId,
        todo_id: &TodoId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<ApiMessage>> {
        let path =
            PATH_API_TODO_DELETE.resolve(&[("id", list_id.as_ref()), ("todo_id", todo_id.as_ref())]);
        self.send_request_expect_json(path, &"", ui_notify)
    }
}
