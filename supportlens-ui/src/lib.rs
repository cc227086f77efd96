pub mod api;
pub mod components;
pub mod config;
pub mod format;
pub mod interop;
pub mod shell;
pub mod theme;

pub use api::*;
pub use components::*;
pub use shell::AppShell;
