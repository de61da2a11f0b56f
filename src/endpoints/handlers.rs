use super::page::{render_dashboard, render_error_page};
use crate::error::DatasetError;
use crate::resolver::{Selection, location_options, resolve, soil_type_options};
use crate::server::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Raw dropdown values as submitted by the page.
#[derive(Debug, Default, Deserialize)]
pub struct SelectionQuery {
    pub location: Option<String>,
    pub soil_type: Option<String>,
}

impl SelectionQuery {
    pub fn selection(&self) -> Selection {
        Selection::from_inputs(self.location.as_deref(), self.soil_type.as_deref())
    }
}

fn dataset_error_status(err: &DatasetError) -> StatusCode {
    match err {
        DatasetError::Fetch { .. } => StatusCode::BAD_GATEWAY,
        DatasetError::Schema { .. } | DatasetError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn json_error(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

pub async fn dashboard_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SelectionQuery>,
) -> Response {
    let dataset = match state.cache.get().await {
        Ok(dataset) => dataset,
        Err(e) => {
            return (
                dataset_error_status(&e),
                Html(render_error_page(&state.page, &e)),
            )
                .into_response();
        }
    };

    let selection = query.selection();
    let resolution = resolve(&dataset, &selection)
        .inspect_err(|e| debug!(error = %e, "Nothing to display for selection"))
        .ok();

    Html(render_dashboard(
        &state.page,
        &dataset,
        &selection,
        resolution.as_ref(),
    ))
    .into_response()
}

pub async fn locations_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.cache.get().await {
        Ok(dataset) => Json(location_options(&dataset, &state.page.default_location)).into_response(),
        Err(e) => json_error(dataset_error_status(&e), e.to_string()),
    }
}

pub async fn soil_types_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.cache.get().await {
        Ok(dataset) => Json(soil_type_options(&dataset)).into_response(),
        Err(e) => json_error(dataset_error_status(&e), e.to_string()),
    }
}

pub async fn resolve_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SelectionQuery>,
) -> Response {
    let dataset = match state.cache.get().await {
        Ok(dataset) => dataset,
        Err(e) => return json_error(dataset_error_status(&e), e.to_string()),
    };

    match resolve(&dataset, &query.selection()) {
        Ok(resolution) => Json(resolution).into_response(),
        Err(e) => json_error(StatusCode::NOT_FOUND, e.to_string()),
    }
}

pub async fn refresh_handler(State(state): State<Arc<AppState>>) -> StatusCode {
    state.cache.invalidate().await;
    StatusCode::NO_CONTENT
}
