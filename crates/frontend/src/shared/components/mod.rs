pub mod date_range_picker;
pub mod error_banner;
pub mod page_header;
pub mod pagination_controls;
pub mod polling_controls;
pub mod stat_card;
pub mod ui;
pub mod wizard_frame;

pub use date_range_picker::DateRangePicker;
pub use error_banner::ErrorBanner;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use polling_controls::PollingControls;
pub use stat_card::{StatCard, ValueFormat};
pub use wizard_frame::WizardFrame;
