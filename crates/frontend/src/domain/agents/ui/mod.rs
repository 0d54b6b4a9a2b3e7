mod list;
mod supervisors;

pub use list::AgentList;
pub use supervisors::SupervisorList;
