//! Display normalization: canonical train names and view rows.
//!
//! Raw names from the API are upper-case abbreviations with occasional
//! junk ("12301 RAJ EXP NDLS → HWH"). The normalizer strips the junk,
//! expands the abbreviations and projects each record into a [`ViewRow`].

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::domain::{DAY_LABELS, DAYS_IN_WEEK};

use super::Route;
use super::schedule::DecoratedTrainRecord;

/// Placeholder for a missing train name.
pub const NAME_PLACEHOLDER: &str = "Train";

/// Placeholder for missing numbers and times.
pub const VALUE_PLACEHOLDER: &str = "--";

/// Whole-word replacements, applied in this order.
///
/// Longer phrases come before their suffixes ("JAN SHATABDI" before
/// "SHATABDI") so the phrase wins.
const REPLACEMENTS: &[(&str, &str)] = &[
    (r"(?i)\bEXPRESS\b", "Express"),
    (r"(?i)\bEXP\b", "Express"),
    (r"(?i)\bSF\b", "Superfast"),
    (r"(?i)\bPASS\b", "Passenger"),
    (r"(?i)\bRAJ\b", "Rajdhani"),
    (r"(?i)\bJAN\s+SHATABDI\b", "Jan Shatabdi"),
    (r"(?i)\bSHATABDI\b", "Shatabdi"),
    (r"(?i)\bSAMPARK\s+KRANTI\b", "Sampark Kranti"),
    (r"(?i)\bDURONTO\b", "Duronto"),
    (r"(?i)\bTEJAS\b", "Tejas"),
    (r"(?i)\bVANDE\s+BHARAT\b", "Vande Bharat"),
    (r"(?i)\bMEMU\b", "MEMU"),
];

/// Upper bound on normalization passes. Real names settle in one or two.
const MAX_PASSES: usize = 8;

lazy_static! {
    /// Train number echoed at the start of the name. Train numbers are
    /// four or five digits, so shorter numbers stay part of the name.
    static ref LEADING_NUMBER: Regex = Regex::new(r"^(?:\d{4,5}\s+)+").unwrap();

    /// Route annotation such as " NDLS → HWH" at the end of the name.
    static ref ROUTE_SUFFIX: Regex = Regex::new(r"(?i)\s+[A-Z]{1,4}\s*→\s*[A-Z]{1,4}$").unwrap();

    static ref COMPILED_REPLACEMENTS: Vec<(Regex, &'static str)> = REPLACEMENTS
        .iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
        .collect();
}

/// Whether a token is a plain word for duplicate collapsing.
fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// Collapse runs of the same word (ignoring case) to their first
/// occurrence. Whitespace is normalised to single spaces.
fn collapse_repeated_words(name: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for token in name.split_whitespace() {
        let repeated = kept.last().is_some_and(|prev| {
            is_word(prev) && is_word(token) && prev.to_lowercase() == token.to_lowercase()
        });
        if !repeated {
            kept.push(token);
        }
    }
    kept.join(" ")
}

fn normalize_pass(name: &str) -> String {
    let mut name = LEADING_NUMBER.replace(name.trim(), "").into_owned();

    while let Some(m) = ROUTE_SUFFIX.find(&name) {
        name.truncate(m.start());
    }

    let mut name = collapse_repeated_words(&name);
    for (pattern, replacement) in COMPILED_REPLACEMENTS.iter() {
        name = pattern.replace_all(&name, *replacement).into_owned();
    }
    collapse_repeated_words(&name)
}

/// Canonicalize a raw train name for display.
///
/// ```
/// use train_search::pipeline::normalize_train_name;
///
/// assert_eq!(normalize_train_name("12301 RAJ EXP NDLS → HWH"), "Rajdhani Express");
/// assert_eq!(normalize_train_name("NEW DELHI JAN SHATABDI"), "NEW DELHI Jan Shatabdi");
/// assert_eq!(normalize_train_name(""), "Train");
/// ```
pub fn normalize_train_name(raw: &str) -> String {
    let mut name = raw.to_string();
    for _ in 0..MAX_PASSES {
        let next = normalize_pass(&name);
        if next == name {
            break;
        }
        name = next;
    }

    if name.is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        name
    }
}

/// A weekday badge for templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBadge {
    pub label: &'static str,
    pub active: bool,
}

/// Display-ready projection of a train record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewRow {
    pub train_number: String,
    pub display_name: String,
    pub from_code: String,
    pub to_code: String,
    pub departure: String,
    pub arrival: String,
    pub duration: String,
    /// Running flags, Monday first.
    pub day_badges: [bool; DAYS_IN_WEEK],
    pub runs_today: bool,
}

impl ViewRow {
    /// Build the view row for a decorated record.
    ///
    /// Missing fields fall back to placeholders; missing station codes fall
    /// back to the queried route.
    pub fn from_decorated(train: &DecoratedTrainRecord<'_>, route: &Route) -> Self {
        let record = train.record;
        let or_placeholder = |value: &Option<String>| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(VALUE_PLACEHOLDER)
                .to_string()
        };

        Self {
            train_number: or_placeholder(&record.train_number),
            display_name: normalize_train_name(record.name_or_empty()),
            from_code: record
                .from_station_code
                .clone()
                .unwrap_or_else(|| route.from.to_string()),
            to_code: record
                .to_station_code
                .clone()
                .unwrap_or_else(|| route.to.to_string()),
            departure: or_placeholder(&record.departure_time),
            arrival: or_placeholder(&record.arrival_time),
            duration: or_placeholder(&record.travel_time),
            day_badges: record.running_days.days(),
            runs_today: train.runs_on_selected_date,
        }
    }

    /// Labelled day badges, Monday first.
    pub fn badges(&self) -> Vec<DayBadge> {
        DAY_LABELS
            .into_iter()
            .zip(self.day_badges)
            .map(|(label, active)| DayBadge { label, active })
            .collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Tokens that exercise every rule, plus neutral words.
    fn arb_token() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec![
            "RAJ", "raj", "EXP", "Express", "EXPRESS", "SF", "PASS", "MEMU", "memu", "JAN",
            "SHATABDI", "Shatabdi", "SAMPARK", "KRANTI", "DURONTO", "TEJAS", "VANDE", "BHARAT",
            "GOA", "goa", "HOWRAH", "NDLS", "HWH", "12301", "2", "→", "A-B",
        ])
    }

    proptest! {
        /// Normalizing twice gives the same result as normalizing once
        #[test]
        fn idempotent(tokens in prop::collection::vec(arb_token(), 0..8)) {
            let raw = tokens.join(" ");
            let once = normalize_train_name(&raw);
            let twice = normalize_train_name(&once);
            prop_assert_eq!(once, twice);
        }

        /// The output never carries leading or trailing whitespace
        #[test]
        fn trimmed(tokens in prop::collection::vec(arb_token(), 0..8)) {
            let name = normalize_train_name(&tokens.join("  "));
            prop_assert_eq!(name.trim(), name.as_str());
            prop_assert!(!name.is_empty());
        }
    }
}
