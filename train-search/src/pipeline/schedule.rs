//! Schedule resolution: does each train run on the selected date?

use chrono::NaiveDate;

use crate::domain::{TrainRecord, mask_index};

/// A train record paired with whether it runs on the selected date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoratedTrainRecord<'a> {
    pub record: &'a TrainRecord,
    pub runs_on_selected_date: bool,
}

/// Decorate every record with its running status on `date`.
///
/// Output is index-aligned with the input.
pub fn resolve(records: &[TrainRecord], date: NaiveDate) -> Vec<DecoratedTrainRecord<'_>> {
    let index = mask_index(date);
    records
        .iter()
        .map(|record| DecoratedTrainRecord {
            record,
            runs_on_selected_date: record.running_days.runs_on(index),
        })
        .collect()
}
