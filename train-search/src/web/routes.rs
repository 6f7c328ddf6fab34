//! HTTP route handlers.

use std::path::Path as FsPath;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use chrono::{Local, NaiveDate};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::api::ApiError;
use crate::domain::{InvalidStationCode, StationCode};
use crate::pipeline::{self, Route, SelectionState, ViewRow};
use crate::recent::{RecentError, format_entry};
use crate::stations::DEFAULT_SUGGESTIONS;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Shown when origin or destination is missing or unparseable.
pub const INVALID_STATIONS: &str = "Invalid stations";

/// Shown when the trains API cannot be reached or answers with an error.
pub const API_UNAVAILABLE: &str = "API error. Is the trains API running?";

/// Shown when the API has no trains for the pair.
pub const NO_TRAINS_FOUND: &str = "No trains found";

/// Shown when the filter leaves nothing.
pub const NO_TRAINS_MATCH: &str = "No trains available";

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &FsPath) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/health", get(health))
        .route("/about", get(about_page))
        .route("/search", get(search))
        .route("/route", get(route_page))
        .route("/api/stations/search", get(search_stations))
        .route("/api/recent", get(recent_searches))
        .route("/recent/:index/delete", post(delete_recent))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Dashboard with search form and recent searches.
async fn dashboard_page(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let recent = state.recent.entries().await;
    let template = DashboardTemplate::new(&recent, !state.stations.is_empty());
    Ok(render(&template)?)
}

/// About page.
async fn about_page() -> Result<Html<String>, PageError> {
    Ok(render(&AboutTemplate)?)
}

/// Unknown paths.
async fn not_found() -> PageError {
    PageError(AppError::NotFound {
        message: "There is nothing at this address.".to_string(),
    })
}

/// Handle the dashboard form: remember the search and show its results.
async fn search(
    State(state): State<AppState>,
    Query(req): Query<SearchQuery>,
) -> Result<Response, PageError> {
    if req.from.trim().is_empty() || req.to.trim().is_empty() {
        return Ok(rejected_search(&state, &req, "Please select both stations").await?);
    }

    let (from, to) = match (
        StationCode::from_input(&req.from),
        StationCode::from_input(&req.to),
    ) {
        (Ok(from), Ok(to)) => (from, to),
        _ => return Ok(rejected_search(&state, &req, "Invalid station selection").await?),
    };

    if let Err(e) = state.recent.save(&format_entry(&req.from, &req.to)).await {
        // The search still works without history
        warn!(error = %e, "failed to save recent search");
    }

    Ok(Redirect::to(&format!("/route?from={}&to={}", from, to)).into_response())
}

/// Redisplay the dashboard with the rejected form values.
async fn rejected_search(
    state: &AppState,
    req: &SearchQuery,
    message: &str,
) -> Result<Response, AppError> {
    let recent = state.recent.entries().await;
    let template = DashboardTemplate::new(&recent, !state.stations.is_empty())
        .with_rejected(&req.from, &req.to, message);
    Ok((StatusCode::BAD_REQUEST, render(&template)?).into_response())
}

/// Results for one station pair.
async fn route_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<RouteQuery>,
) -> Result<Response, AppError> {
    let today = Local::now().date_naive();
    let selection = query.selection(today);
    let results = find_trains(&state, &query, &selection).await;

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let page = route_template(&query, &selection, today, results);
        return Ok(render(&page)?.into_response());
    }

    let results = results?;
    Ok(Json(RouteResponse::new(
        &results.route,
        &selection,
        results.fetched,
        results.rows,
    ))
    .into_response())
}

/// Pipeline output for one request.
struct RouteResults {
    route: Route,
    /// Trains returned by the API, before filtering
    fetched: usize,
    rows: Vec<ViewRow>,
}

async fn find_trains(
    state: &AppState,
    query: &RouteQuery,
    selection: &SelectionState,
) -> Result<RouteResults, AppError> {
    let route = query.route().inspect_err(|e| {
        debug!(from = ?query.from, to = ?query.to, error = %e, "invalid stations");
    })?;

    let trains = state
        .trains
        .trains_between(&route.from, &route.to)
        .await
        .inspect_err(|e| {
            warn!(from = %route.from, to = %route.to, error = %e, "failed to fetch trains");
        })?;

    let rows = pipeline::run(&trains, selection, &route);
    debug!(
        from = %route.from,
        to = %route.to,
        date = %selection.selected_date,
        sort = %selection.sort_mode,
        filter = %selection.filter_mode,
        fetched = trains.len(),
        shown = rows.len(),
        "ran results pipeline"
    );

    Ok(RouteResults {
        route,
        fetched: trains.len(),
        rows,
    })
}

/// Build the results page, turning failures into an inline message.
fn route_template(
    query: &RouteQuery,
    selection: &SelectionState,
    today: NaiveDate,
    results: Result<RouteResults, AppError>,
) -> RouteTemplate {
    match results {
        Ok(results) => {
            let page = RouteTemplate::new(
                results.route.from.as_str(),
                results.route.to.as_str(),
                selection,
                today,
            );
            if results.fetched == 0 {
                page.with_message(NO_TRAINS_FOUND)
            } else if results.rows.is_empty() {
                page.with_message(NO_TRAINS_MATCH)
            } else {
                page.with_rows(results.rows)
            }
        }
        Err(e) => RouteTemplate::new(
            query.from.as_deref().unwrap_or_default(),
            query.to.as_deref().unwrap_or_default(),
            selection,
            today,
        )
        .with_message(e.message()),
    }
}

/// Search stations by name or code.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req.limit.unwrap_or(DEFAULT_SUGGESTIONS);

    let stations = state
        .stations
        .search(&req.q, limit)
        .into_iter()
        .map(StationSearchResult::from_station)
        .collect();

    Json(StationSearchResponse { stations })
}

/// Recent searches, most recent first.
async fn recent_searches(State(state): State<AppState>) -> Json<RecentResponse> {
    let searches = state
        .recent
        .entries()
        .await
        .iter()
        .enumerate()
        .map(|(index, entry)| RecentSearchResult::new(index, entry))
        .collect();

    Json(RecentResponse { searches })
}

/// Delete one recent search and go back to the dashboard.
async fn delete_recent(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Redirect, PageError> {
    if let Some(removed) = state.recent.remove(index).await.map_err(AppError::from)? {
        info!(entry = %removed, "removed recent search");
    }
    Ok(Redirect::to("/"))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::BadGateway { message }
            | AppError::Internal { message } => message,
        }
    }

    fn log(&self) {
        let status = self.status();
        if status.is_server_error() {
            error!(%status, message = self.message(), "request failed");
        } else {
            debug!(%status, message = self.message(), "request rejected");
        }
    }
}

impl From<InvalidStationCode> for AppError {
    fn from(_: InvalidStationCode) -> Self {
        AppError::BadRequest {
            message: INVALID_STATIONS.to_string(),
        }
    }
}

impl From<ApiError> for AppError {
    fn from(_: ApiError) -> Self {
        AppError::BadGateway {
            message: API_UNAVAILABLE.to_string(),
        }
    }
}

impl From<RecentError> for AppError {
    fn from(e: RecentError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.message().to_string(),
        });
        (status, body).into_response()
    }
}

/// An [`AppError`] rendered as an HTML error page.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(e: AppError) -> Self {
        PageError(e)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let PageError(error) = self;
        error.log();

        let status = error.status();
        let template = ErrorTemplate {
            title: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            message: error.message().to_string(),
            details: None,
        };

        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => (status, format!("Template error: {}", e)).into_response(),
        }
    }
}
