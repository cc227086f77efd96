use std::rc::Rc;

use chrono::Local;
use dioxus::prelude::*;
use shared_types::{CategoryFilter, Trace};
use uuid::Uuid;

use super::model::{
    apply_load, bar_height_pct, begin_load, chart_entries, filter_counts, filter_traces,
    find_trace, load_dashboard, stat_cards, ChartEntry, DashboardData, DashboardState,
    LoadSequencer,
};
use super::styles::DASHBOARD_STYLES;
use crate::api::HttpApi;
use crate::components::common::{CategoryBadge, StatCard};
use crate::format::{format_calendar_date, format_clock_time, format_latency};
use crate::interop::listen_for_key;
use crate::shell::state::RefreshSignal;
use crate::theme::category_style;

const TABLE_COLUMNS: [&str; 5] = [
    "Timestamp",
    "User Message",
    "Bot Response",
    "Category",
    "Latency",
];

// ── DashboardView component ──────────────────────────────────────────────────

#[component]
pub fn DashboardView(api: HttpApi, refresh: Memo<RefreshSignal>) -> Element {
    let mut state = use_signal(DashboardState::default);
    let mut sequencer = use_signal(LoadSequencer::default);
    let filter = use_signal(CategoryFilter::default);
    let mut selected = use_signal(|| None::<Uuid>);

    // Escape closes the detail overlay.
    use_hook(move || {
        Rc::new(listen_for_key("Escape", move || {
            if selected.peek().is_some() {
                selected.set(None);
            }
        }))
    });

    // Load on mount and on every refresh signal change.
    use_effect(move || {
        let generation = refresh().generation();
        let ticket = begin_load(
            &mut sequencer.write(),
            &mut state.write(),
            &mut selected.write(),
        );

        let api = api.clone();
        spawn(async move {
            let outcome = load_dashboard(&api).await;
            if let Err(e) = &outcome {
                dioxus_logger::tracing::error!(
                    "Failed to load dashboard (refresh {}, status {:?}): {}",
                    generation,
                    e.status(),
                    e
                );
            }

            if !apply_load(&sequencer.peek(), &mut state.write(), ticket, outcome) {
                dioxus_logger::tracing::debug!(
                    "Discarding stale dashboard load {:?} (refresh {})",
                    ticket,
                    generation
                );
            }
        });
    });

    let body = match &*state.read() {
        DashboardState::Loading => rsx! {
            div { class: "dashboard-status", "Loading…" }
        },
        DashboardState::Error(message) => rsx! {
            div {
                class: "dashboard-status",
                div { class: "dashboard-error", "⚠ {message}" }
            }
        },
        DashboardState::Ready(data) => rsx! {
            DashboardReady { data: data.clone(), filter, selected }
        },
    };

    rsx! {
        style { {DASHBOARD_STYLES} }
        {body}
    }
}

#[component]
fn DashboardReady(
    data: DashboardData,
    filter: Signal<CategoryFilter>,
    selected: Signal<Option<Uuid>>,
) -> Element {
    let mut selected = selected;
    let cards = stat_cards(Some(&data.analytics));
    let chart = chart_entries(Some(&data.analytics));
    let counts = filter_counts(&data.traces);
    let shown: Vec<Trace> = filter_traces(&data.traces, &filter.read())
        .into_iter()
        .cloned()
        .collect();
    let detail = selected().and_then(|id| find_trace(&data.traces, &id).cloned());

    rsx! {
        div {
            class: "stat-grid",
            for card in cards.iter() {
                StatCard {
                    key: "{card.title}",
                    title: card.title.clone(),
                    value: card.value.clone(),
                    sub: card.sub.clone(),
                    accent: card.accent.to_string(),
                }
            }
        }

        div {
            class: "dashboard-row",
            CategoryChart { entries: chart }
            FilterPanel { counts, filter }
        }

        TraceTable { traces: shown, selected }

        if let Some(trace) = detail {
            TraceModal {
                trace,
                on_close: move |_| selected.set(None),
            }
        }
    }
}

// ── Chart ────────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq)]
struct Bar {
    label: String,
    full_label: String,
    count: u64,
    height_pct: f64,
    color: &'static str,
}

#[component]
fn CategoryChart(entries: Vec<ChartEntry>) -> Element {
    let max_count = entries.iter().map(|e| e.count).max().unwrap_or(0);
    let bars: Vec<Bar> = entries
        .iter()
        .map(|entry| Bar {
            label: entry.label.clone(),
            full_label: entry.category.label().to_string(),
            count: entry.count,
            height_pct: bar_height_pct(entry.count, max_count),
            color: category_style(&entry.category).color,
        })
        .collect();

    rsx! {
        div {
            class: "panel",
            p { class: "panel-title", "Traces by Category" }
            div {
                class: "bar-chart",
                for bar in bars.iter() {
                    div {
                        key: "{bar.full_label}",
                        class: "bar-column",
                        title: "{bar.full_label}: {bar.count} traces",
                        span { class: "bar-value", "{bar.count}" }
                        div {
                            class: "bar",
                            style: "height: {bar.height_pct}%; background: {bar.color};",
                        }
                    }
                }
            }
            div {
                class: "bar-labels",
                for bar in bars.iter() {
                    span { key: "{bar.full_label}", class: "bar-label", "{bar.label}" }
                }
            }
        }
    }
}

// ── Filter panel ─────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq)]
struct FilterRow {
    filter: CategoryFilter,
    label: String,
    count: usize,
    dot: Option<&'static str>,
    active: bool,
}

#[component]
fn FilterPanel(counts: Vec<(CategoryFilter, usize)>, filter: Signal<CategoryFilter>) -> Element {
    let mut filter = filter;
    let active = filter();
    let rows: Vec<FilterRow> = counts
        .into_iter()
        .map(|(option, count)| FilterRow {
            label: option.label().to_string(),
            dot: option.category().map(|c| category_style(c).dot),
            active: option == active,
            filter: option,
            count,
        })
        .collect();

    rsx! {
        div {
            class: "panel",
            p { class: "panel-title", "Filter by Category" }
            div {
                class: "filter-list",
                for row in rows {
                    button {
                        key: "{row.label}",
                        class: if row.active { "filter-option active" } else { "filter-option" },
                        onclick: {
                            let option = row.filter.clone();
                            move |_| filter.set(option.clone())
                        },
                        span {
                            class: "filter-option-name",
                            if let Some(dot) = row.dot {
                                span { class: "filter-dot", style: "background: {dot};" }
                            }
                            "{row.label}"
                        }
                        span { class: "filter-count", "{row.count}" }
                    }
                }
            }
        }
    }
}

// ── Trace table ──────────────────────────────────────────────────────────────

#[component]
fn TraceTable(traces: Vec<Trace>, selected: Signal<Option<Uuid>>) -> Element {
    let mut selected = selected;

    rsx! {
        div {
            class: "trace-table",
            div {
                class: "trace-table-head",
                for column in TABLE_COLUMNS {
                    span { key: "{column}", "{column}" }
                }
            }

            if traces.is_empty() {
                div { class: "trace-empty", "No traces for this category yet." }
            }

            for trace in traces.iter() {
                TraceRow {
                    key: "{trace.id}",
                    trace: trace.clone(),
                    on_select: move |id| selected.set(Some(id)),
                }
            }
        }
    }
}

#[component]
fn TraceRow(trace: Trace, on_select: EventHandler<Uuid>) -> Element {
    let local = trace.timestamp.with_timezone(&Local);
    let time = format_clock_time(&local);
    let date = format_calendar_date(&local);
    let latency = format_latency(trace.response_time_ms);
    let id = trace.id;

    rsx! {
        div {
            class: "trace-row",
            onclick: move |_| on_select.call(id),
            div {
                div { class: "trace-time", "{time}" }
                div { class: "trace-date", "{date}" }
            }
            div {
                class: "trace-cell-text",
                title: "{trace.user_message}",
                "{trace.user_message}"
            }
            div {
                class: "trace-cell-text muted",
                title: "{trace.bot_response}",
                "{trace.bot_response}"
            }
            div {
                CategoryBadge { category: trace.category.clone() }
            }
            div { class: "trace-latency", "{latency}" }
        }
    }
}

// ── Detail overlay ───────────────────────────────────────────────────────────

/// Full text of one trace. Clicking the backdrop or the close button closes
/// it; Escape is handled by the dashboard.
#[component]
fn TraceModal(trace: Trace, on_close: EventHandler<()>) -> Element {
    let accent = category_style(&trace.category).color;
    let local = trace.timestamp.with_timezone(&Local);
    let when = format!(
        "{} at {} · {}",
        format_calendar_date(&local),
        format_clock_time(&local),
        format_latency(trace.response_time_ms)
    );

    rsx! {
        div {
            class: "trace-modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "trace-modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "trace-modal-accent", style: "background: {accent};" }

                div {
                    class: "trace-modal-head",
                    div {
                        class: "trace-modal-meta",
                        CategoryBadge { category: trace.category.clone() }
                        span { class: "trace-modal-when", "{when}" }
                    }
                    button {
                        class: "trace-modal-close",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                div {
                    class: "trace-modal-section",
                    p { class: "trace-modal-label", "User Message" }
                    div { class: "trace-modal-body", "{trace.user_message}" }
                }

                div {
                    p { class: "trace-modal-label", "Bot Response" }
                    div { class: "trace-modal-body", "{trace.bot_response}" }
                }
            }
        }
    }
}
