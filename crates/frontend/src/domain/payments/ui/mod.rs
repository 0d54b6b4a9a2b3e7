mod list;

pub use list::PaymentList;
