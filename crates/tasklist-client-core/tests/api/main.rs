#![cfg(not(target_arch = "wasm32"))]

mod helpers;
mod share;
mod task_list;
mod todo;
mod user_check;
