pub mod agents;
pub mod customers;
pub mod disputes;
pub mod meters;
pub mod payments;
pub mod vendors;
