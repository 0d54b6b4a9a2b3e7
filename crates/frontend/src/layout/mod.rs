mod shell;
mod sidebar;

pub use shell::Shell;
