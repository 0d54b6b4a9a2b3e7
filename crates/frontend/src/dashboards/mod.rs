mod api;

pub mod consumption;
pub mod performance;
