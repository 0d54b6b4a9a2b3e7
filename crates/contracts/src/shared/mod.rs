pub mod forms;
pub mod query;
