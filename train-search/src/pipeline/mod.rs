//! Results pipeline for a station pair.
//!
//! Every change to the date, filter or sort re-runs the four stages over
//! the cached train list:
//!
//! 1. [`resolve`] marks which trains run on the selected date.
//! 2. [`filter::apply`] keeps the selected category.
//! 3. [`sort::apply`] orders the survivors (stable).
//! 4. [`ViewRow::from_decorated`] normalizes names and builds view rows.
//!
//! The pipeline is pure and never fails; malformed fields are defaulted
//! record by record.

pub mod filter;
mod normalize;
mod schedule;
mod selection;
pub mod sort;


pub use normalize::{
    DayBadge, NAME_PLACEHOLDER, VALUE_PLACEHOLDER, ViewRow, normalize_train_name,
};
pub use schedule::{DecoratedTrainRecord, resolve};
pub use selection::{FilterMode, SelectionState, SortMode};

use crate::domain::{StationCode, TrainRecord};

/// The queried station pair. Used as a fallback for missing station codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route {
    pub from: StationCode,
    pub to: StationCode,
}

impl Route {
    pub fn new(from: StationCode, to: StationCode) -> Self {
        Self { from, to }
    }
}

/// Run the full pipeline over `records`.
pub fn run(records: &[TrainRecord], selection: &SelectionState, route: &Route) -> Vec<ViewRow> {
    let decorated = resolve(records, selection.selected_date);
    let mut filtered = filter::apply(decorated, selection.filter_mode);
    sort::apply(&mut filtered, selection.sort_mode);

    filtered
        .iter()
        .map(|train| ViewRow::from_decorated(train, route))
        .collect()
}
