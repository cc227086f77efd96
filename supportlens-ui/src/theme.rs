//! Category colours.

use shared_types::Category;

/// Display attributes for one category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    /// Foreground and bar colour.
    pub color: &'static str,
    /// Tinted badge background.
    pub light: &'static str,
    pub dot: &'static str,
}

pub const FALLBACK_STYLE: CategoryStyle = CategoryStyle {
    color: "#9ca3af",
    light: "#1f2937",
    dot: "#6b7280",
};

pub fn category_style(category: &Category) -> CategoryStyle {
    match category {
        Category::Billing => CategoryStyle {
            color: "#60a5fa",
            light: "#1e3a5f",
            dot: "#3b82f6",
        },
        Category::Refund => CategoryStyle {
            color: "#fbbf24",
            light: "#3d2e0a",
            dot: "#f59e0b",
        },
        Category::AccountAccess => CategoryStyle {
            color: "#34d399",
            light: "#0d3326",
            dot: "#10b981",
        },
        Category::Cancellation => CategoryStyle {
            color: "#f87171",
            light: "#3b1111",
            dot: "#ef4444",
        },
        Category::GeneralInquiry => CategoryStyle {
            color: "#c084fc",
            light: "#2d1a47",
            dot: "#a855f7",
        },
        Category::Other(_) => FALLBACK_STYLE,
    }
}

/// Inline style for a category badge.
pub fn badge_style(category: &Category) -> String {
    let style = category_style(category);
    format!(
        "color: {}; background: {}; border: 1px solid {}44;",
        style.color, style.light, style.color
    )
}
