pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod flash;
pub mod icons;
pub mod polling;
pub mod print_export;
