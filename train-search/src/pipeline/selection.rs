//! User selection driving the results pipeline.

use std::fmt;

use chrono::{Local, NaiveDate};

/// How the results list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Ascending departure time.
    #[default]
    Earliest,
    /// Descending departure time.
    Latest,
    /// Ascending travel time.
    ShortestDuration,
    /// Keep the order the filter stage produced.
    AsFetched,
}

impl SortMode {
    /// Parse a query-string value. Unknown values keep the fetched order.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "early" | "earliest" => SortMode::Earliest,
            "late" | "latest" => SortMode::Latest,
            "duration" | "shortest-duration" | "shortest" => SortMode::ShortestDuration,
            _ => SortMode::AsFetched,
        }
    }

    /// Query-string value for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Earliest => "earliest",
            SortMode::Latest => "latest",
            SortMode::ShortestDuration => "shortest-duration",
            SortMode::AsFetched => "as-fetched",
        }
    }

    /// Modes offered in the UI, with labels.
    pub fn choices() -> [(SortMode, &'static str); 3] {
        [
            (SortMode::Earliest, "Earliest departure"),
            (SortMode::Latest, "Latest departure"),
            (SortMode::ShortestDuration, "Shortest duration"),
        ]
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which category of trains is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    /// Only trains running on the selected date.
    AvailableToday,
    Superfast,
    VandeBharat,
    Passenger,
    Express,
}

impl FilterMode {
    /// Parse a query-string value. Unknown values show everything.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" | "available-today" => FilterMode::AvailableToday,
            "superfast" => FilterMode::Superfast,
            "vande" | "vande-bharat" => FilterMode::VandeBharat,
            "passenger" => FilterMode::Passenger,
            "express" => FilterMode::Express,
            _ => FilterMode::All,
        }
    }

    /// Query-string value for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::AvailableToday => "available-today",
            FilterMode::Superfast => "superfast",
            FilterMode::VandeBharat => "vande-bharat",
            FilterMode::Passenger => "passenger",
            FilterMode::Express => "express",
        }
    }

    /// Modes offered in the UI, with labels.
    pub fn choices() -> [(FilterMode, &'static str); 6] {
        [
            (FilterMode::All, "All trains"),
            (FilterMode::AvailableToday, "Running on date"),
            (FilterMode::Superfast, "Superfast"),
            (FilterMode::VandeBharat, "Vande Bharat"),
            (FilterMode::Passenger, "Passenger / MEMU"),
            (FilterMode::Express, "Express"),
        ]
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the user has chosen on the results page.
///
/// The pipeline is a pure function of the cached train list and this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_date: NaiveDate,
    pub sort_mode: SortMode,
    pub filter_mode: FilterMode,
}

impl SelectionState {
    /// Create a selection for the given date with default sort and filter.
    pub fn for_date(selected_date: NaiveDate) -> Self {
        Self {
            selected_date,
            sort_mode: SortMode::default(),
            filter_mode: FilterMode::default(),
        }
    }

    /// Set the sort mode.
    pub fn with_sort(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }

    /// Set the filter mode.
    pub fn with_filter(mut self, filter_mode: FilterMode) -> Self {
        self.filter_mode = filter_mode;
        self
    }
}

impl Default for SelectionState {
    /// Today in local time, earliest first, all trains.
    fn default() -> Self {
        Self::for_date(Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_mode_accepts_short_and_long_names() {
        assert_eq!(SortMode::parse_lenient("early"), SortMode::Earliest);
        assert_eq!(SortMode::parse_lenient("earliest"), SortMode::Earliest);
        assert_eq!(SortMode::parse_lenient("late"), SortMode::Latest);
        assert_eq!(SortMode::parse_lenient("LATEST"), SortMode::Latest);
        assert_eq!(
            SortMode::parse_lenient("duration"),
            SortMode::ShortestDuration
        );
        assert_eq!(
            SortMode::parse_lenient("shortest-duration"),
            SortMode::ShortestDuration
        );
    }

    #[test]
    fn unknown_sort_keeps_order() {
        assert_eq!(SortMode::parse_lenient("fastest"), SortMode::AsFetched);
        assert_eq!(SortMode::parse_lenient(""), SortMode::AsFetched);
    }

    #[test]
    fn filter_mode_accepts_short_and_long_names() {
        assert_eq!(
            FilterMode::parse_lenient("available"),
            FilterMode::AvailableToday
        );
        assert_eq!(
            FilterMode::parse_lenient("available-today"),
            FilterMode::AvailableToday
        );
        assert_eq!(FilterMode::parse_lenient("vande"), FilterMode::VandeBharat);
        assert_eq!(
            FilterMode::parse_lenient("vande-bharat"),
            FilterMode::VandeBharat
        );
        assert_eq!(FilterMode::parse_lenient("Express"), FilterMode::Express);
    }

    #[test]
    fn unknown_filter_is_all() {
        assert_eq!(FilterMode::parse_lenient("sleeper"), FilterMode::All);
        assert_eq!(FilterMode::parse_lenient(""), FilterMode::All);
    }

    #[test]
    fn as_str_parses_back() {
        for (mode, _) in FilterMode::choices() {
            assert_eq!(FilterMode::parse_lenient(mode.as_str()), mode);
        }
        for (mode, _) in SortMode::choices() {
            assert_eq!(SortMode::parse_lenient(mode.as_str()), mode);
        }
    }

    #[test]
    fn builder_sets_modes() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
        let selection = SelectionState::for_date(date)
            .with_sort(SortMode::Latest)
            .with_filter(FilterMode::Express);

        assert_eq!(selection.selected_date, date);
        assert_eq!(selection.sort_mode, SortMode::Latest);
        assert_eq!(selection.filter_mode, FilterMode::Express);
    }

    #[test]
    fn defaults() {
        let selection = SelectionState::default();
        assert_eq!(selection.sort_mode, SortMode::Earliest);
        assert_eq!(selection.filter_mode, FilterMode::All);
    }
}
