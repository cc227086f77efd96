//! Dashboard App Component
//!
//! Analytics cards, a per-category bar chart, a category filter and the trace
//! table with a detail overlay. Refetches whenever the shell's refresh signal
//! changes; filtering is local to the last successful load.

pub mod model;
mod styles;
mod view;

pub use view::DashboardView;
