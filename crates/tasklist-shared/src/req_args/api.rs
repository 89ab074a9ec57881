pub mod task_list;
pub mod todo;
