use tasklist_client_core::Client;
use tasklist_test_helper::{build_test_app, prepare_stub_app, StoreHandle, TestApp};

pub use tasklist_test_helper::no_cb;

pub async fn spawn_app() -> TestApp<Client> {
    let store = StoreHandle::default();
    let (server, address) = prepare_stub_app(store.clone());
    // Launch the stub as a background task, dropping the handle detaches it
    tokio::spawn(server);
    build_test_app(address, Client::new, store)
}
