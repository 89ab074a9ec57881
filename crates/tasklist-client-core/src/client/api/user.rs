use futures::channel::oneshot;
use tasklist_shared::{
    const_config::path::PATH_API_USER_CHECK, id::UserId, responses::CheckUsernameResponse,
};

use crate::{
    client::{process_json_body, send_or_discard, UiCallBack, DUMMY_ARGUMENT},
    Client,
};

impl Client {
    /// Looks up `username` against the user search endpoint.
    ///
    /// The raw text is substituted into the path verbatim. `Ok(None)` means
    /// the server answered but no user matched; a blank id in the body counts
    /// as no match too. `Err` covers transport failures and non-2xx
    /// responses.
    #[tracing::instrument(skip(ui_notify))]
    pub fn check_username<F: UiCallBack>(
        &self,
        username: &str,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Option<UserId>>> {
        let (tx, rx) = oneshot::channel();
        let path = PATH_API_USER_CHECK.resolve(&[("username", username)]);
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async {
            let msg = process_json_body::<CheckUsernameResponse>(resp)
                .await
                .map(|body| body.id.filter(|id| !id.as_ref().is_empty()));
            send_or_discard(tx, msg);
            ui_notify();
        };
        self.initiate_request(path, &DUMMY_ARGUMENT, on_done);
        rx
    }
}
