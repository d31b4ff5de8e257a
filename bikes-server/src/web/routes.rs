//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::warn;

use crate::domain::{Station, StationError, StationSummary};
use crate::query::{Paginated, SortDir, SortKey, StationFilter, run_query};
use crate::validate;

use super::dto::*;
use super::state::AppState;

/// Default page size when the caller does not specify one.
const DEFAULT_PAGE_SIZE: i64 = 10;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations).post(create_station))
        .route("/api/stations/summary", get(summary))
        .route(
            "/api/stations/:number",
            get(get_station).put(update_station).delete(delete_station),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List stations with filtering, sorting and pagination.
async fn list_stations(
    State(state): State<AppState>,
    Query(query): Query<ListStationsQuery>,
) -> Json<Paginated<StationView>> {
    let stations = state.repo.list_all().await;

    let filter = StationFilter {
        status: query.status,
        min_bikes: query.min_bikes,
        search: query.search,
    };
    let key = SortKey::parse(query.sort.as_deref().unwrap_or("name"));
    let dir = SortDir::parse(query.dir.as_deref().unwrap_or("asc"));
    let page = query.page.unwrap_or(1).max(1) as usize;
    let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1) as usize;

    let result = run_query(stations, &filter, key, dir, page, page_size);
    Json(result.map(StationView::from))
}

/// Fetch one station by number.
async fn get_station(
    State(state): State<AppState>,
    Path(number): Path<i32>,
) -> Result<Json<StationView>, AppError> {
    state
        .repo
        .get_by_number(number)
        .await
        .map(|s| Json(StationView::from(s)))
        .ok_or_else(|| AppError::NotFound {
            message: format!("Station {number} not found."),
        })
}

/// Aggregate catalog summary.
async fn summary(State(state): State<AppState>) -> Json<StationSummary> {
    Json(state.repo.summary().await)
}

/// Create a station.
async fn create_station(
    State(state): State<AppState>,
    Json(input): Json<StationInput>,
) -> Result<(StatusCode, Json<StationView>), AppError> {
    let station = Station::from(input);
    validate::check(&station)?;

    let created = state.repo.create(station).await?;
    Ok((StatusCode::CREATED, Json(StationView::from(created))))
}

/// Update a station. The path number wins over any number in the body.
async fn update_station(
    State(state): State<AppState>,
    Path(number): Path<i32>,
    Json(input): Json<StationInput>,
) -> Result<Json<StationView>, AppError> {
    let mut station = Station::from(input);
    station.number = number;
    validate::check(&station)?;

    let updated = state.repo.update(station).await?;
    Ok(Json(StationView::from(updated)))
}

/// Delete a station.
async fn delete_station(
    State(state): State<AppState>,
    Path(number): Path<i32>,
) -> Result<StatusCode, AppError> {
    if state.repo.delete(number).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound {
            message: format!("Station {number} not found."),
        })
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { errors: Vec<String> },
    NotFound { message: String },
    Conflict { message: String },
}

impl From<StationError> for AppError {
    fn from(e: StationError) -> Self {
        match e {
            StationError::Validation(errors) => AppError::BadRequest { errors },
            StationError::NotFound(number) => AppError::NotFound {
                message: format!("Station {number} not found."),
            },
            StationError::Conflict(number) => AppError::Conflict {
                message: format!("Station {number} already exists."),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest { errors } => {
                warn!(?errors, "rejected station payload");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorBody { errors }),
                )
                    .into_response()
            }
            AppError::NotFound { message } => {
                (StatusCode::NOT_FOUND, Json(MessageBody { message })).into_response()
            }
            AppError::Conflict { message } => {
                (StatusCode::CONFLICT, Json(MessageBody { message })).into_response()
            }
        }
    }
}
