//! Train records as returned by the trains-between-stations API.

use super::RunningDays;

/// One train running between the queried stations.
///
/// Every text field is optional because the API omits fields rather than
/// failing; the results pipeline substitutes placeholders. Records are
/// never mutated after conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainRecord {
    /// Train number, e.g. "12301".
    pub train_number: Option<String>,

    /// Raw train name, e.g. "HOWRAH RAJ EXP".
    pub train_name: Option<String>,

    /// Code of the station the train leaves from on this route.
    pub from_station_code: Option<String>,

    /// Code of the station the train arrives at on this route.
    pub to_station_code: Option<String>,

    /// Departure time as "HH.MM".
    pub departure_time: Option<String>,

    /// Arrival time as "HH.MM".
    pub arrival_time: Option<String>,

    /// Travel duration as "HH.MM".
    pub travel_time: Option<String>,

    /// Weekdays the train runs on.
    pub running_days: RunningDays,
}

impl TrainRecord {
    /// The train name, or the empty string when absent.
    pub fn name_or_empty(&self) -> &str {
        self.train_name.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_never_runs() {
        let record = TrainRecord::default();
        assert!(record.running_days.is_never());
        assert_eq!(record.name_or_empty(), "");
    }

    #[test]
    fn name_or_empty_returns_name() {
        let record = TrainRecord {
            train_name: Some("HWH RAJ".into()),
            ..Default::default()
        };
        assert_eq!(record.name_or_empty(), "HWH RAJ");
    }
}
