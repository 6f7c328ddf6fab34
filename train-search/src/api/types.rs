//! Trains API response DTOs.
//!
//! These types map directly to the JSON returned by
//! `GET /trains/betweenStations`. Every field is optional because the API
//! omits fields rather than sending nulls.

use serde::{Deserialize, Serialize};

/// Top-level response envelope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrainsBetweenResponse {
    /// Whether the API considers the request successful.
    pub success: bool,

    /// Train list on success; sometimes an error message on failure.
    #[serde(default)]
    pub data: Option<ResponseData>,
}

/// The `data` member, which changes shape on failure.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Trains(Vec<TrainItem>),
    Message(String),
}

/// One element of the `data` array.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TrainItem {
    pub train_base: Option<TrainBase>,
}

/// Raw train fields.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TrainBase {
    /// Train number, e.g. "12301".
    pub train_no: Option<String>,

    /// Upper-case abbreviated train name.
    pub train_name: Option<String>,

    /// Code of the boarding station on this route.
    pub from_stn_code: Option<String>,

    /// Name of the boarding station on this route.
    pub from_stn_name: Option<String>,

    /// Code of the alighting station on this route.
    pub to_stn_code: Option<String>,

    /// Name of the alighting station on this route.
    pub to_stn_name: Option<String>,

    /// Departure from the boarding station, "HH.MM".
    pub from_time: Option<String>,

    /// Arrival at the alighting station, "HH.MM".
    pub to_time: Option<String>,

    /// Travel time between the two stations, "HH.MM".
    pub travel_time: Option<String>,

    /// Seven '0'/'1' characters, Monday first.
    pub running_days: Option<String>,
}
