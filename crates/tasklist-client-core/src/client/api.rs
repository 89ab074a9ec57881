pub mod share;
pub mod task_list;
pub mod todo;
pub mod user;
