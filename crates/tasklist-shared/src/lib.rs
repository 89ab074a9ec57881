//! Code shared between the client crates and the test tooling

#![warn(unused_crate_dependencies)]

pub mod const_config;
pub mod errors;
pub mod id;
mod macros;
pub mod req_args;
pub mod responses;
pub mod share;
pub mod task;
pub mod user;

#[cfg(not(target_arch = "wasm32"))]
pub mod telemetry;
