use chrono::{DateTime, TimeZone};
use shared_types::Category;

/// Placeholder for a figure the backend has not provided.
pub const MISSING_FIGURE: &str = "—";

pub fn format_clock_time<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.format("%I:%M:%S %p").to_string()
}

pub fn format_calendar_date<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.format("%b %-d, %Y").to_string()
}

pub fn format_latency(ms: u64) -> String {
    format!("{ms}ms")
}

/// Average latency card value. Zero means no traces yet and renders as missing.
pub fn format_average_latency(average_ms: Option<f64>) -> String {
    match average_ms {
        Some(ms) if ms > 0.0 => format!("{ms}ms"),
        _ => MISSING_FIGURE.to_string(),
    }
}

pub fn format_count(count: Option<u64>) -> String {
    count.map_or_else(|| MISSING_FIGURE.to_string(), |c| c.to_string())
}

pub fn format_share(percentage: f64) -> String {
    format!("{percentage}% of total")
}

/// Tag under a bot reply, e.g. `Refund · 120ms`.
pub fn format_reply_tag(category: &Category, response_time_ms: u64) -> String {
    format!("{} · {}", category.label(), format_latency(response_time_ms))
}
