use futures::channel::oneshot;
use tasklist_shared::{
    const_config::path::{
        PATH_API_TASK_LIST_PERMISSION, PATH_API_TASK_LIST_SHARE, PATH_API_TASK_LIST_SHARED_WITH,
        PATH_API_TASK_LIST_UNSHARE,
    },
    id::TaskListId,
    req_args::api::task_list::{ShareReqArgs, UnshareReqArgs, UpdatePermissionReqArgs},
    responses::ApiMessage,
    share::SharedWith,
};

use crate::{
    client::{UiCallBack, DUMMY_ARGUMENT},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn get_shared_with<F: UiCallBack>(
        &self,
        id: &TaskListId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<SharedWith>>> {
        let path = PATH_API_TASK_LIST_SHARED_WITH.resolve(&[("id", id.as_ref())]);
        self.send_request_expect_enveloped(path, &DUMMY_ARGUMENT, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn share_task_list<F: UiCallBack>(
        &self,
        id: &TaskListId,
        args: &ShareReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<ApiMessage>> {
        let path = PATH_API_TASK_LIST_SHARE.resolve(&[("id", id.as_ref())]);
        self.send_request_expect_json(path, args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn unshare_task_list<F: UiCallBack>(
        &self,
        id: &TaskListId,
        args: &UnshareReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<ApiMessage>> {
        let path = PATH_API_TASK_LIST_UNSHARE.resolve(&[("id", id.as_ref())]);
        self.send_request_expect_json(path, args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_permission<F: UiCallBack>(
        &self,
        id: &TaskListId,
        args: &UpdatePermissionReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<ApiMessage>> {
        let path = PATH_API_TASK_LIST_PERMISSION.resolve(&[("id", id.as_ref())]);
        self.send_request_expect_json(path, args, ui_notify)
    }
}
