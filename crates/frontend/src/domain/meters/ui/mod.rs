mod installation;
mod list;

pub use installation::MeterInstallationWizard;
pub use list::MeterList;
