//! Askama templates for the web frontend.

use askama::Template;
use chrono::{Days, NaiveDate};

use crate::domain::StationCode;
use crate::pipeline::{FilterMode, SelectionState, SortMode, ViewRow};
use crate::recent::split_entry;

use super::dto::DATE_FORMAT;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Dashboard with the search form and recent searches.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    /// Prefilled origin input
    pub from: String,
    /// Prefilled destination input
    pub to: String,
    /// Validation message for the last submission
    pub message: Option<String>,
    pub recent: Vec<RecentView>,
    /// Whether autocomplete has any stations to offer
    pub autocomplete: bool,
}

impl DashboardTemplate {
    pub fn new(recent: &[String], autocomplete: bool) -> Self {
        Self {
            from: String::new(),
            to: String::new(),
            message: None,
            recent: recent
                .iter()
                .enumerate()
                .map(|(index, entry)| RecentView::new(index, entry))
                .collect(),
            autocomplete,
        }
    }

    /// Redisplay a rejected submission.
    pub fn with_rejected(mut self, from: &str, to: &str, message: &str) -> Self {
        self.from = from.to_string();
        self.to = to.to_string();
        self.message = Some(message.to_string());
        self
    }
}

/// About page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

/// Results page for one station pair.
#[derive(Template)]
#[template(path = "route.html")]
pub struct RouteTemplate {
    /// e.g. "NDLS → HWH"
    pub title: String,
    pub from: String,
    pub to: String,
    pub date: String,
    pub sort: &'static str,
    pub filter: &'static str,
    pub date_buttons: Vec<DateButton>,
    pub sort_options: Vec<ChoiceView>,
    pub filter_options: Vec<ChoiceView>,
    pub rows: Vec<ViewRow>,
    /// Shown instead of the rows
    pub message: Option<String>,
}

impl RouteTemplate {
    /// A results page with no rows yet.
    pub fn new(from: &str, to: &str, selection: &SelectionState, today: NaiveDate) -> Self {
        let from = from.trim().to_string();
        let to = to.trim().to_string();

        let mut page = Self {
            title: format!("{} → {}", from, to),
            date: selection.selected_date.format(DATE_FORMAT).to_string(),
            sort: selection.sort_mode.as_str(),
            filter: selection.filter_mode.as_str(),
            date_buttons: Vec::new(),
            sort_options: SortMode::choices()
                .into_iter()
                .map(|(mode, label)| {
                    ChoiceView::new(mode.as_str(), label, mode == selection.sort_mode)
                })
                .collect(),
            filter_options: FilterMode::choices()
                .into_iter()
                .map(|(mode, label)| {
                    ChoiceView::new(mode.as_str(), label, mode == selection.filter_mode)
                })
                .collect(),
            from,
            to,
            rows: Vec::new(),
            message: None,
        };
        let buttons = date_buttons(today, selection.selected_date, |date| page.date_href(date));
        page.date_buttons = buttons;
        page
    }

    pub fn with_rows(mut self, rows: Vec<ViewRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Link to this page with a different date.
    ///
    /// `from` and `to` may be raw user input, so they are percent-encoded.
    pub fn date_href(&self, date: &str) -> String {
        format!(
            "/route?from={}&to={}&date={}&sort={}&filter={}",
            urlencoding::encode(&self.from),
            urlencoding::encode(&self.to),
            date,
            self.sort,
            self.filter
        )
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
    pub details: Option<String>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A recent search on the dashboard.
#[derive(Debug, Clone)]
pub struct RecentView {
    pub index: usize,
    pub entry: String,
    /// Results link, when both halves of the entry carry a code
    pub href: Option<String>,
}

impl RecentView {
    pub fn new(index: usize, entry: &str) -> Self {
        let href = split_entry(entry).and_then(|(from, to)| {
            let from = StationCode::from_input(from).ok()?;
            let to = StationCode::from_input(to).ok()?;
            Some(format!("/route?from={}&to={}", from, to))
        });

        Self {
            index,
            entry: entry.to_string(),
            href,
        }
    }
}

/// One of the quick date buttons on the results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateButton {
    pub label: String,
    /// `YYYY-MM-DD`
    pub value: String,
    pub href: String,
    pub active: bool,
}

/// Today, tomorrow and the day after, linked with `href`.
pub fn date_buttons(
    today: NaiveDate,
    selected: NaiveDate,
    href: impl Fn(&str) -> String,
) -> Vec<DateButton> {
    (0..3u64)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .enumerate()
        .map(|(offset, date)| {
            let value = date.format(DATE_FORMAT).to_string();
            DateButton {
                label: match offset {
                    0 => "Today".to_string(),
                    1 => "Tomorrow".to_string(),
                    _ => date.format("%a %-d %b").to_string(),
                },
                href: href(&value),
                value,
                active: date == selected,
            }
        })
        .collect()
}

/// An option in a sort or filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl ChoiceView {
    pub fn new(value: &'static str, label: &'static str, selected: bool) -> Self {
        Self {
            value,
            label,
            selected,
        }
    }
}
