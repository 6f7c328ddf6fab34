//! Conversion from API DTOs to domain types.

use tracing::{debug, warn};

use crate::domain::{RunningDays, TrainRecord};

use super::error::ApiError;
use super::types::{ResponseData, TrainBase, TrainItem, TrainsBetweenResponse};

/// Drop empty or whitespace-only strings.
fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Convert the raw `train_base` fields of one train.
pub fn convert_train_base(base: &TrainBase) -> TrainRecord {
    let running_days = RunningDays::from_mask(base.running_days.as_deref().map(str::trim));
    if base.running_days.is_some() && running_days.is_never() {
        debug!(
            train_no = ?base.train_no,
            mask = ?base.running_days,
            "running days mask is malformed or empty"
        );
    }

    TrainRecord {
        train_number: non_empty(&base.train_no),
        train_name: non_empty(&base.train_name),
        from_station_code: non_empty(&base.from_stn_code),
        to_station_code: non_empty(&base.to_stn_code),
        departure_time: non_empty(&base.from_time),
        arrival_time: non_empty(&base.to_time),
        travel_time: non_empty(&base.travel_time),
        running_days,
    }
}

/// Convert one element of the `data` array.
///
/// A missing `train_base` becomes a record with every field absent.
pub fn convert_item(item: &TrainItem) -> TrainRecord {
    item.train_base
        .as_ref()
        .map(convert_train_base)
        .unwrap_or_default()
}

/// Convert a whole response, failing if the API reported failure.
pub fn convert_response(response: &TrainsBetweenResponse) -> Result<Vec<TrainRecord>, ApiError> {
    if !response.success {
        let message = match &response.data {
            Some(ResponseData::Message(m)) => m.clone(),
            _ => "request was not successful".to_string(),
        };
        return Err(ApiError::Unsuccessful { message });
    }

    match &response.data {
        Some(ResponseData::Trains(items)) => Ok(items.iter().map(convert_item).collect()),
        Some(ResponseData::Message(m)) => {
            warn!(message = %m, "successful response carried a message instead of trains");
            Ok(Vec::new())
        }
        None => Ok(Vec::new()),
    }
}
