//! Shared types between the SupportLens UI and the support backend
//!
//! These mirror the JSON bodies the backend serves on `/traces/`,
//! `/analytics/` and `/chat/`. Serializable with serde for JSON over HTTP.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Categories
// ============================================================================

/// Support-ticket classification assigned to a trace by the backend.
///
/// The backend only ever emits the five known labels, but anything else
/// decodes into [`Category::Other`] so one bad row cannot break a render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Billing,
    Refund,
    AccountAccess,
    Cancellation,
    GeneralInquiry,
    Other(String),
}

impl Category {
    /// The closed set of known categories, in display order.
    pub const ALL: [Category; 5] = [
        Category::Billing,
        Category::Refund,
        Category::AccountAccess,
        Category::Cancellation,
        Category::GeneralInquiry,
    ];

    pub fn label(&self) -> &str {
        match self {
            Category::Billing => "Billing",
            Category::Refund => "Refund",
            Category::AccountAccess => "Account Access",
            Category::Cancellation => "Cancellation",
            Category::GeneralInquiry => "General Inquiry",
            Category::Other(label) => label,
        }
    }

    /// Compact label used on chart axes.
    pub fn short_label(&self) -> &str {
        match self {
            Category::AccountAccess => "Acct Access",
            Category::GeneralInquiry => "General",
            other => other.label(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        match label {
            "Billing" => Category::Billing,
            "Refund" => Category::Refund,
            "Account Access" => Category::AccountAccess,
            "Cancellation" => Category::Cancellation,
            "General Inquiry" => Category::GeneralInquiry,
            other => Category::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from(label.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category selection for trace lists. `All` is the "no filter" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// `All` followed by every known category, the order the filter panel uses.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn category(&self) -> Option<&Category> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(category),
        }
    }

    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl From<Option<Category>> for CategoryFilter {
    fn from(category: Option<Category>) -> Self {
        category.map_or(CategoryFilter::All, CategoryFilter::Only)
    }
}

// ============================================================================
// Traces
// ============================================================================

/// One recorded chat exchange. Owned by the backend, read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub user_message: String,
    pub bot_response: String,
    pub category: Category,
    pub response_time_ms: u64,
}

// ============================================================================
// Analytics
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryStats {
    pub count: u64,
    pub percentage: f64,
}

/// Aggregate view over all traces, recomputed server-side on every fetch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_traces: u64,
    #[serde(default)]
    pub average_response_time_ms: f64,
    /// Keyed by category label. Entries may be missing.
    #[serde(default)]
    pub category_breakdown: HashMap<String, CategoryStats>,
}

impl AnalyticsSummary {
    /// Stats for `category`, zeroed when the backend omitted the entry.
    pub fn stats_for(&self, category: &Category) -> CategoryStats {
        self.category_breakdown
            .get(category.label())
            .copied()
            .unwrap_or_default()
    }
}

// ============================================================================
// Chat
// ============================================================================

/// Body of `POST /chat/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_message: String,
}

/// Reply from `POST /chat/`.
///
/// The backend answers with the persisted trace; only the reply fields are
/// required, the trace identity is kept when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub bot_response: String,
    pub category: Category,
    pub response_time_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

// ============================================================================
// Tests
// ============================================================================
