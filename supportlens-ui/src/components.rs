pub mod chat;
pub mod common;
pub mod dashboard;
pub mod styles;

pub use chat::ChatView;
pub use dashboard::DashboardView;
