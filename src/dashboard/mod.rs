//! Dashboard state transitions.
//!
//! Each user interaction is an [`Event`]; [`render`] maps the previous state
//! and the event to the next state, recomputing the report from scratch. The
//! caller owns the state between events.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::dataset::{Dataset, SalesRecord};
use crate::errors::ReportError;
use crate::report::{
    available_categories, build_report, filter_records, CategoryFilter, DateRange, Filter,
    FilteredView, Report, ReportOptions, ALL_CATEGORIES,
};

pub const WELCOME_MESSAGE: &str = "Welcome to Sales Report!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Shows the welcome notice.
    Welcome,
    /// Dismisses the notice and resets the click counter.
    Reset,
}

#[derive(Debug)]
pub enum Event {
    Loaded(Dataset),
    LoadFailed(ReportError),
    SetRange { start: NaiveDate, end: NaiveDate },
    SetCategory(String),
    ResetFilters,
    Configure(ReportOptions),
    Click(Button),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub dataset: Option<Arc<Dataset>>,
    pub bounds: Option<DateRange>,
    pub filter: Option<Filter>,
    pub categories: Vec<String>,
    pub options: ReportOptions,
    pub report: Option<Report>,
    pub notice: Option<Notice>,
    pub welcome_clicks: u32,
}

impl DashboardState {
    pub fn with_options(options: ReportOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn has_data(&self) -> bool {
        self.dataset.is_some()
    }

    /// Rows of the current filter; empty when nothing is loaded.
    pub fn filtered(&self) -> FilteredView<'_> {
        match (&self.dataset, &self.filter) {
            (Some(dataset), Some(filter)) => filter_records(&dataset.records, filter),
            _ => FilteredView::default(),
        }
    }

    /// Choices offered for the category filter, `All` first.
    pub fn category_choices(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(self.categories.iter().cloned())
            .collect()
    }

    fn records(&self) -> &[SalesRecord] {
        self.dataset
            .as_deref()
            .map(|dataset| dataset.records.as_slice())
            .unwrap_or(&[])
    }

    fn recompute(mut self) -> Self {
        self.report = self
            .filter
            .as_ref()
            .map(|filter| build_report(self.records(), filter, &self.options));
        self
    }

    fn with_notice(mut self, level: NoticeLevel, message: impl Into<String>) -> Self {
        self.notice = Some(Notice::new(level, message));
        self
    }
}

/// Applies one event and returns the next state; `state` is left untouched.
pub fn render(state: &DashboardState, event: Event) -> DashboardState {
    let mut next = state.clone();
    next.notice = None;

    match event {
        Event::Loaded(dataset) => on_loaded(next, dataset),
        Event::LoadFailed(err) => {
            tracing::warn!(error = %err, "dataset load failed");
            next.with_notice(NoticeLevel::Error, format!("Error loading file: {err}"))
        }
        Event::SetRange { start, end } => {
            let Some(bounds) = next.bounds else {
                return next.with_notice(NoticeLevel::Error, "Load a dataset first.");
            };
            match bounds.narrow(start, end) {
                Ok(range) => {
                    let category = current_category(&next);
                    next.filter = Some(Filter::new(range, category));
                    next.recompute()
                }
                Err(err) => next.with_notice(NoticeLevel::Error, err.to_string()),
            }
        }
        Event::SetCategory(choice) => {
            let Some(filter) = next.filter.clone() else {
                return next.with_notice(NoticeLevel::Error, "Load a dataset first.");
            };
            let category = CategoryFilter::from_choice(&choice);
            if let CategoryFilter::Only(name) = &category {
                if !next.categories.contains(name) {
                    return next.with_notice(
                        NoticeLevel::Error,
                        format!("Unknown category `{name}`."),
                    );
                }
            }
            next.filter = Some(Filter::new(filter.range, category));
            next.recompute()
        }
        Event::ResetFilters => {
            let Some(bounds) = next.bounds else {
                return next.with_notice(NoticeLevel::Error, "Load a dataset first.");
            };
            next.filter = Some(Filter::new(bounds, CategoryFilter::All));
            next.recompute()
        }
        Event::Configure(options) => {
            next.options = options;
            next.recompute()
        }
        Event::Click(Button::Welcome) => {
            next.welcome_clicks += 1;
            next.with_notice(NoticeLevel::Success, WELCOME_MESSAGE)
        }
        Event::Click(Button::Reset) => {
            next.welcome_clicks = 0;
            next
        }
    }
}

fn on_loaded(mut next: DashboardState, dataset: Dataset) -> DashboardState {
    let rows = dataset.len();
    let name = dataset.name.clone();
    let bounds = dataset
        .date_bounds()
        .and_then(|(start, end)| DateRange::new(start, end).ok());

    next.categories = available_categories(&dataset.records);
    next.bounds = bounds;
    next.filter = bounds.map(|range| Filter::new(range, CategoryFilter::All));
    next.dataset = Some(Arc::new(dataset));

    if bounds.is_none() {
        next.report = None;
        return next.with_notice(NoticeLevel::Warning, format!("`{name}` has no records."));
    }
    next.recompute().with_notice(
        NoticeLevel::Success,
        format!("Loaded {rows} records from `{name}`."),
    )
}

fn current_category(state: &DashboardState) -> CategoryFilter {
    state
        .filter
        .as_ref()
        .map(|filter| filter.category.clone())
        .unwrap_or_default()
}
