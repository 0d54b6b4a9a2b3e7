pub mod agent;
pub mod analytics;
pub mod common;
pub mod customer;
pub mod dispute;
pub mod meter;
pub mod payment;
pub mod vendor;
