mod list;
mod topups;

pub use list::VendorList;
pub use topups::TopUpList;
