//! Dashboard pure logic — no RSX, no signals

use futures_util::future::try_join;
use shared_types::{AnalyticsSummary, Category, CategoryFilter, Trace};
use uuid::Uuid;

use crate::api::{RequestError, SupportApi};
use crate::format::{format_average_latency, format_count, format_share};
use crate::theme::category_style;

pub const LOAD_ERROR_MESSAGE: &str = "Could not load data. Is the backend running?";

/// Everything one successful load brings back.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub analytics: AnalyticsSummary,
    pub traces: Vec<Trace>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    #[default]
    Loading,
    Ready(DashboardData),
    /// User-facing message only; the cause is logged.
    Error(String),
}

impl DashboardState {
    pub fn from_outcome(outcome: Result<DashboardData, RequestError>) -> Self {
        match outcome {
            Ok(data) => DashboardState::Ready(data),
            Err(_) => DashboardState::Error(LOAD_ERROR_MESSAGE.to_string()),
        }
    }
}

/// Fetch analytics and the unfiltered trace list concurrently.
/// Either failure fails the whole load.
pub async fn load_dashboard<A: SupportApi>(api: &A) -> Result<DashboardData, RequestError> {
    let (analytics, traces) =
        try_join(api.get_analytics(), api.list_traces(&CategoryFilter::All)).await?;
    Ok(DashboardData { analytics, traces })
}

/// Identifies one dashboard load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// Hands out monotonically increasing tickets so a slow, superseded load
/// cannot overwrite the result of a newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSequencer {
    issued: u64,
}

impl LoadSequencer {
    pub fn issue(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.issued
    }
}

/// Enter `Loading` for a fresh load and close any open trace overlay, since
/// the row it points at may not survive the reload.
pub fn begin_load(
    sequencer: &mut LoadSequencer,
    state: &mut DashboardState,
    selected: &mut Option<Uuid>,
) -> LoadTicket {
    *state = DashboardState::Loading;
    *selected = None;
    sequencer.issue()
}

/// Store the outcome of the load holding `ticket` unless a newer load has
/// been issued since. Returns whether `state` changed.
pub fn apply_load(
    sequencer: &LoadSequencer,
    state: &mut DashboardState,
    ticket: LoadTicket,
    outcome: Result<DashboardData, RequestError>,
) -> bool {
    if !sequencer.is_current(ticket) {
        return false;
    }
    *state = DashboardState::from_outcome(outcome);
    true
}

/// The subset of `traces` shown under `filter`, in fetched order.
pub fn filter_traces<'a>(traces: &'a [Trace], filter: &CategoryFilter) -> Vec<&'a Trace> {
    traces.iter().filter(|t| filter.matches(&t.category)).collect()
}

/// Counts next to each filter option, taken from the fetched list.
pub fn filter_counts(traces: &[Trace]) -> Vec<(CategoryFilter, usize)> {
    CategoryFilter::options()
        .into_iter()
        .map(|filter| {
            let count = traces.iter().filter(|t| filter.matches(&t.category)).count();
            (filter, count)
        })
        .collect()
}

pub fn find_trace<'a>(traces: &'a [Trace], id: &Uuid) -> Option<&'a Trace> {
    traces.iter().find(|t| &t.id == id)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartEntry {
    pub category: Category,
    pub label: String,
    pub count: u64,
    pub percentage: f64,
}

/// One bar per known category, zero-filled where the breakdown is silent.
pub fn chart_entries(analytics: Option<&AnalyticsSummary>) -> Vec<ChartEntry> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let stats = analytics
                .map(|a| a.stats_for(&category))
                .unwrap_or_default();
            ChartEntry {
                label: category.short_label().to_string(),
                count: stats.count,
                percentage: stats.percentage,
                category,
            }
        })
        .collect()
}

/// Bar height as a percentage of the tallest bar.
pub fn bar_height_pct(count: u64, max_count: u64) -> f64 {
    if max_count == 0 {
        0.0
    } else {
        count as f64 / max_count as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCardData {
    pub title: String,
    pub value: String,
    pub sub: Option<String>,
    pub accent: &'static str,
}

pub fn stat_cards(analytics: Option<&AnalyticsSummary>) -> Vec<StatCardData> {
    let mut cards = vec![
        StatCardData {
            title: "Total Traces".to_string(),
            value: format_count(analytics.map(|a| a.total_traces)),
            sub: None,
            accent: "#60a5fa",
        },
        StatCardData {
            title: "Avg Response".to_string(),
            value: format_average_latency(analytics.map(|a| a.average_response_time_ms)),
            sub: None,
            accent: "#34d399",
        },
    ];

    cards.extend(chart_entries(analytics).into_iter().map(|entry| StatCardData {
        title: entry.category.label().to_string(),
        value: entry.count.to_string(),
        sub: Some(format_share(entry.percentage)),
        accent: category_style(&entry.category).color,
    }));

    cards
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::api::testing::{summary, trace, FakeApi};

    fn sample_traces() -> Vec<Trace> {
        vec![
            trace(Category::Billing, "charged twice"),
            trace(Category::Refund, "I need a refund"),
            trace(Category::Billing, "invoice missing"),
            trace(Category::Other("Shipping".into()), "where is my parcel"),
        ]
    }

    #[test]
    fn all_filter_returns_everything_unchanged() {
        let traces = sample_traces();
        let shown = filter_traces(&traces, &CategoryFilter::All);
        assert_eq!(shown.len(), traces.len());
        assert!(shown.iter().zip(&traces).all(|(a, b)| *a == b));
    }

    #[test]
    fn category_filter_keeps_order() {
        let traces = sample_traces();
        let shown = filter_traces(&traces, &CategoryFilter::Only(Category::Billing));
        let messages: Vec<&str> = shown.iter().map(|t| t.user_message.as_str()).collect();
        assert_eq!(messages, vec!["charged twice", "invoice missing"]);
    }

    #[test]
    fn refund_filter_scenario() {
        let traces = vec![
            trace(Category::Billing, "a"),
            trace(Category::Refund, "b"),
        ];
        let shown = filter_traces(&traces, &CategoryFilter::Only(Category::Refund));
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].category, Category::Refund);
    }

    #[test]
    fn filter_counts_cover_all_options() {
        let counts = filter_counts(&sample_traces());
        assert_eq!(counts.len(), 6);
        assert_eq!(counts[0], (CategoryFilter::All, 4));
        assert_eq!(counts[1], (CategoryFilter::Only(Category::Billing), 2));
        assert_eq!(counts[2], (CategoryFilter::Only(Category::Refund), 1));
        assert_eq!(counts[3].1, 0);
    }

    #[test]
    fn chart_entries_zero_fill_missing_categories() {
        let analytics = summary(&[(Category::Billing, 3), (Category::Refund, 1)]);
        let entries = chart_entries(Some(&analytics));
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].count, 3);
        assert_eq!(entries[0].percentage, 75.0);
        assert_eq!(entries[2].label, "Acct Access");
        assert_eq!(entries[2].count, 0);
        assert_eq!(entries[4].label, "General");
        assert_eq!(entries[4].percentage, 0.0);

        assert!(chart_entries(None).iter().all(|e| e.count == 0));
    }

    #[test]
    fn bar_heights_scale_to_tallest() {
        assert_eq!(bar_height_pct(0, 0), 0.0);
        assert_eq!(bar_height_pct(2, 4), 50.0);
        assert_eq!(bar_height_pct(4, 4), 100.0);
    }

    #[test]
    fn stat_cards_without_analytics_show_placeholders() {
        let cards = stat_cards(None);
        assert_eq!(cards.len(), 7);
        assert_eq!(cards[0].value, "—");
        assert_eq!(cards[1].value, "—");
        assert_eq!(cards[2].value, "0");
        assert_eq!(cards[2].sub.as_deref(), Some("0% of total"));
    }

    #[test]
    fn stat_cards_with_analytics() {
        let analytics = summary(&[(Category::Refund, 1), (Category::Cancellation, 3)]);
        let cards = stat_cards(Some(&analytics));
        assert_eq!(cards[0].value, "4");
        assert_eq!(cards[1].value, "250ms");
        let refund = cards.iter().find(|c| c.title == "Refund").unwrap();
        assert_eq!(refund.value, "1");
        assert_eq!(refund.sub.as_deref(), Some("25% of total"));
    }

    #[test]
    fn load_succeeds_when_both_fetches_do() {
        let api = FakeApi::with_data(sample_traces(), summary(&[(Category::Billing, 2)]));
        let state = DashboardState::from_outcome(block_on(load_dashboard(&api)));
        let DashboardState::Ready(data) = state else {
            panic!("expected ready state");
        };
        assert_eq!(data.traces.len(), 4);
        assert_eq!(data.analytics.total_traces, 2);
        assert_eq!(api.trace_calls.get(), 1);
        assert_eq!(api.analytics_calls.get(), 1);
    }

    #[test]
    fn analytics_failure_fails_the_whole_load() {
        let api = FakeApi::default();
        *api.traces.borrow_mut() = Ok(sample_traces());
        *api.analytics.borrow_mut() = Err(RequestError::http(500, "HTTP error: 500"));

        let state = DashboardState::from_outcome(block_on(load_dashboard(&api)));
        assert_eq!(state, DashboardState::Error(LOAD_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn traces_failure_fails_the_whole_load() {
        let api = FakeApi::default();
        *api.analytics.borrow_mut() = Ok(summary(&[]));

        let outcome = block_on(load_dashboard(&api));
        assert!(outcome.is_err());
    }

    #[test]
    fn filtering_does_not_refetch() {
        let api = FakeApi::with_data(sample_traces(), summary(&[]));
        let data = block_on(load_dashboard(&api)).unwrap();
        for filter in CategoryFilter::options() {
            let _ = filter_traces(&data.traces, &filter);
        }
        assert_eq!(api.trace_calls.get(), 1);
    }

    #[test]
    fn stale_ticket_is_not_current() {
        let mut sequencer = LoadSequencer::default();
        let first = sequencer.issue();
        let second = sequencer.issue();
        assert!(first < second);
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn find_trace_by_id() {
        let traces = sample_traces();
        let id = traces[1].id;
        assert_eq!(find_trace(&traces, &id).map(|t| t.category.clone()), Some(Category::Refund));
        assert!(find_trace(&traces, &Uuid::new_v4()).is_none());
    }

    #[test]
    fn begin_load_enters_loading_and_clears_selection() {
        let traces = sample_traces();
        let mut sequencer = LoadSequencer::default();
        let mut state = DashboardState::Ready(DashboardData {
            analytics: summary(&[]),
            traces: traces.clone(),
        });
        let mut selected = Some(traces[0].id);

        let ticket = begin_load(&mut sequencer, &mut state, &mut selected);
        assert_eq!(state, DashboardState::Loading);
        assert_eq!(selected, None);
        assert!(sequencer.is_current(ticket));
    }

    #[test]
    fn older_load_resolving_late_is_discarded() {
        let older = FakeApi::with_data(
            vec![trace(Category::Billing, "before refresh")],
            summary(&[(Category::Billing, 1)]),
        );
        let newer = FakeApi::with_data(sample_traces(), summary(&[(Category::Billing, 2)]));

        let mut sequencer = LoadSequencer::default();
        let mut state = DashboardState::default();
        let mut selected = None;
        let first = begin_load(&mut sequencer, &mut state, &mut selected);
        let second = begin_load(&mut sequencer, &mut state, &mut selected);

        let applied = apply_load(&sequencer, &mut state, second, block_on(load_dashboard(&newer)));
        assert!(applied);
        let after_newest = state.clone();

        let applied = apply_load(&sequencer, &mut state, first, block_on(load_dashboard(&older)));
        assert!(!applied);
        assert_eq!(state, after_newest);
        let DashboardState::Ready(data) = state else {
            panic!("expected ready state");
        };
        assert_eq!(data.traces.len(), 4);
    }

    #[test]
    fn stale_failure_does_not_replace_fresh_data() {
        let mut sequencer = LoadSequencer::default();
        let mut state = DashboardState::default();
        let mut selected = None;
        let first = begin_load(&mut sequencer, &mut state, &mut selected);
        let second = begin_load(&mut sequencer, &mut state, &mut selected);

        let api = FakeApi::with_data(sample_traces(), summary(&[]));
        assert!(apply_load(&sequencer, &mut state, second, block_on(load_dashboard(&api))));

        let failing = FakeApi::default();
        assert!(!apply_load(&sequencer, &mut state, first, block_on(load_dashboard(&failing))));
        assert!(matches!(state, DashboardState::Ready(_)));
    }

    #[test]
    fn current_failure_becomes_error_state() {
        let mut sequencer = LoadSequencer::default();
        let mut state = DashboardState::default();
        let mut selected = None;
        let ticket = begin_load(&mut sequencer, &mut state, &mut selected);

        let failing = FakeApi::default();
        assert!(apply_load(&sequencer, &mut state, ticket, block_on(load_dashboard(&failing))));
        assert_eq!(state, DashboardState::Error(LOAD_ERROR_MESSAGE.to_string()));
    }
}
