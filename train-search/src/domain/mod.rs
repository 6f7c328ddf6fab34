//! Domain types for train route search.
//!
//! These types represent train data after it has left the wire format.
//! Parsing is lenient where the API is unreliable (running days, times)
//! and strict where user input is involved (station codes).

mod record;
mod running_days;
mod station;
mod time;

pub use record::TrainRecord;
pub use running_days::{DAY_LABELS, DAYS_IN_WEEK, RunningDays, mask_index, mask_index_for_weekday};
pub use station::{InvalidStationCode, StationCode};
pub use time::{SENTINEL_MINUTES, TimeError, parse_dotted, time_to_minutes};
