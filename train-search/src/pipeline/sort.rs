//! Ordering of the filtered train list.

use crate::domain::time_to_minutes;

use super::schedule::DecoratedTrainRecord;
use super::selection::SortMode;

/// Departure ordering key for a record.
fn departure_key(train: &DecoratedTrainRecord<'_>) -> u32 {
    time_to_minutes(train.record.departure_time.as_deref())
}

/// Travel-time ordering key for a record.
fn duration_key(train: &DecoratedTrainRecord<'_>) -> u32 {
    time_to_minutes(train.record.travel_time.as_deref())
}

/// Stable-sort `trains` in place according to `mode`.
///
/// `Latest` is a plain descending sort, so trains without a departure
/// time come first there.
pub fn apply(trains: &mut [DecoratedTrainRecord<'_>], mode: SortMode) {
    match mode {
        SortMode::Earliest => trains.sort_by_key(departure_key),
        SortMode::Latest => trains.sort_by_key(|t| std::cmp::Reverse(departure_key(t))),
        SortMode::ShortestDuration => trains.sort_by_key(duration_key),
        SortMode::AsFetched => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TrainRecord;

    fn record(name: &str, dep: Option<&str>, travel: Option<&str>) -> TrainRecord {
        TrainRecord {
            train_name: Some(name.to_string()),
            departure_time: dep.map(String::from),
            travel_time: travel.map(String::from),
            ..Default::default()
        }
    }

    fn decorate(records: &[TrainRecord]) -> Vec<DecoratedTrainRecord<'_>> {
        records
            .iter()
            .map(|record| DecoratedTrainRecord {
                record,
                runs_on_selected_date: true,
            })
            .collect()
    }

    fn names<'a>(trains: &[DecoratedTrainRecord<'a>]) -> Vec<&'a str> {
        trains.iter().map(|t| t.record.name_or_empty()).collect()
    }

    fn sample() -> Vec<TrainRecord> {
        vec![
            record("B", Some("16.55"), Some("17.00")),
            record("A", Some("06.00"), Some("08.30")),
            record("X", None, None),
            record("C", Some("9:45"), Some("02.15")),
            record("D", Some("23.10"), Some("12.00")),
        ]
    }

    #[test]
    fn earliest_ascending_with_malformed_last() {
        let records = sample();
        let mut trains = decorate(&records);
        apply(&mut trains, SortMode::Earliest);
        assert_eq!(names(&trains), vec!["A", "B", "D", "X", "C"]);
    }

    #[test]
    fn latest_is_descending() {
        let records = sample();
        let mut trains = decorate(&records);
        apply(&mut trains, SortMode::Latest);
        assert_eq!(names(&trains), vec!["X", "C", "D", "B", "A"]);
    }

    #[test]
    fn shortest_duration() {
        let records = sample();
        let mut trains = decorate(&records);
        apply(&mut trains, SortMode::ShortestDuration);
        assert_eq!(names(&trains), vec!["C", "A", "D", "B", "X"]);
    }

    #[test]
    fn as_fetched_keeps_order() {
        let records = sample();
        let mut trains = decorate(&records);
        apply(&mut trains, SortMode::AsFetched);
        assert_eq!(names(&trains), vec!["B", "A", "X", "C", "D"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let records = vec![
            record("first", Some("10.00"), None),
            record("early", Some("08.00"), None),
            record("second", Some("10.00"), None),
            record("third", Some("10.00"), None),
        ];
        let mut trains = decorate(&records);
        apply(&mut trains, SortMode::Earliest);
        assert_eq!(names(&trains), vec!["early", "first", "second", "third"]);

        let mut trains = decorate(&records);
        apply(&mut trains, SortMode::Latest);
        assert_eq!(names(&trains), vec!["first", "second", "third", "early"]);
    }
}
