//! Station list used for autocomplete.
//!
//! The list is a static JSON document (`{ stations: [{ stnName, stnCode }] }`)
//! loaded once at startup.

mod error;
mod list;

pub use error::StationError;
pub use list::{DEFAULT_SUGGESTIONS, MAX_SUGGESTIONS, Station, StationList, StationsDocument};
