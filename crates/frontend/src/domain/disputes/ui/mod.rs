mod details;
mod list;

pub use details::DisputeDetails;
pub use list::DisputeList;
