//! Application shell: header, tab switcher and the refresh signal.

pub mod state;
mod view;

pub use view::AppShell;
