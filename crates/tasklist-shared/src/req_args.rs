//! This module stores the expected format of the arguments for the requests.
//! The structure of the module is supposed to match the path of the endpoints.
//! For example `/api/tasklists/:id/share` maps to
//! [`api::task_list::ShareReqArgs`]. Path placeholders are not part of these
//! structs, they are filled in when the path is resolved.

pub mod api;
