//! Category filtering by train-name keywords.
//!
//! Matching is a case-insensitive substring search over the raw train
//! name, so short keywords such as "raj" also match unrelated words that
//! happen to contain them.

use super::schedule::DecoratedTrainRecord;
use super::selection::FilterMode;

/// Keywords that put a train in the superfast bucket.
const SUPERFAST_KEYWORDS: &[&str] = &[
    "sf",
    "superfast",
    "raj",
    "shatabdi",
    "jan shatabdi",
    "sampark",
    "duronto",
    "tejas",
];

const VANDE_BHARAT_KEYWORDS: &[&str] = &["vande"];

const PASSENGER_KEYWORDS: &[&str] = &["pass", "memu"];

fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| name.contains(k))
}

/// Whether a single decorated record passes the filter.
pub fn matches(train: &DecoratedTrainRecord<'_>, mode: FilterMode) -> bool {
    let name = train.record.name_or_empty().to_lowercase();

    match mode {
        FilterMode::All => true,
        FilterMode::AvailableToday => train.runs_on_selected_date,
        FilterMode::Superfast => contains_any(&name, SUPERFAST_KEYWORDS),
        FilterMode::VandeBharat => contains_any(&name, VANDE_BHARAT_KEYWORDS),
        FilterMode::Passenger => contains_any(&name, PASSENGER_KEYWORDS),
        // Superfast expresses are kept out of the plain express bucket.
        FilterMode::Express => name.contains("exp") && !name.contains("sf"),
    }
}

/// Keep the records that match `mode`, preserving order.
pub fn apply<'a>(
    trains: Vec<DecoratedTrainRecord<'a>>,
    mode: FilterMode,
) -> Vec<DecoratedTrainRecord<'a>> {
    if mode == FilterMode::All {
        return trains;
    }
    trains.into_iter().filter(|t| matches(t, mode)).collect()
}
