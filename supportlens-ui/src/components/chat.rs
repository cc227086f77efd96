//! Chat App Component
//!
//! Linear support conversation with optimistic user entries. Each saved
//! exchange notifies the shell so the dashboard picks up the new trace.

pub mod model;
mod styles;
mod view;

pub use view::ChatView;
