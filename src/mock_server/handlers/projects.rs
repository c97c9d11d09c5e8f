//! Project endpoint handlers.
//!
//! Every failure is answered with the Daizy error body,
//! `{"success": false, "errors": [{"field", "type", "message"}]}`.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;
use crate::{FieldError, Project, ResponseError};

type SharedState = Arc<RwLock<MockState>>;

/// Response for listing projects.
#[derive(Debug, Serialize)]
pub struct ListProjectsResponse {
    pub projects: Vec<Project>,
    pub total: i64,
    #[serde(rename = "columnFilters")]
    pub column_filters: serde_json::Value,
}

/// Body accepted by create and update.
#[derive(Debug, Deserialize)]
pub struct ProjectBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub user_id: i64,
}

/// Build a Daizy error response.
pub fn error_response(status: StatusCode, field: &str, error_type: &str, message: &str) -> Response {
    let body = ResponseError {
        success: false,
        status: status.as_u16(),
        errors: vec![FieldError {
            field: field.to_string(),
            error_type: error_type.to_string(),
            message: message.to_string(),
        }],
    };
    (status, Json(body)).into_response()
}

/// Check the bearer token and organisation shared by every route.
fn authorize(state: &MockState, headers: &HeaderMap, organisation: &str) -> Result<(), Response> {
    if let Some(required) = &state.required_token {
        let expected = format!("Bearer {required}");
        let provided = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        if provided != Some(expected.as_str()) {
            return Err(error_response(
                StatusCode::UNAUTHORIZED,
                "authorization",
                "UNAUTHORIZED",
                "A valid bearer token is required",
            ));
        }
    }

    if !state.serves(organisation) {
        return Err(error_response(
            StatusCode::NOT_FOUND,
            "organisation",
            "NOT_FOUND",
            &format!("No organisation found with id: {organisation}"),
        ));
    }

    Ok(())
}

fn parse_id(id: &str) -> Result<i64, Response> {
    id.parse().map_err(|_| {
        error_response(
            StatusCode::BAD_REQUEST,
            "id",
            "NUMERIC",
            "A numeric value is required",
        )
    })
}

fn parse_body(body: &[u8]) -> Result<ProjectBody, Response> {
    let params: ProjectBody = serde_json::from_slice(body).map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            "body",
            "INVALID_JSON",
            &format!("Request body is not valid JSON: {e}"),
        )
    })?;

    if params.name.trim().is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "name",
            "REQUIRED",
            "A name is required",
        ));
    }

    Ok(params)
}

fn project_not_found(id: i64) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "id",
        "NOT_FOUND",
        &format!("No project found with id: {id}"),
    )
}

/// GET /api/v1/organisation/{org}/projects
pub async fn list_projects(
    State(state): State<SharedState>,
    Path(organisation): Path<String>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;

    if let Err(response) = authorize(&state, &headers, &organisation) {
        return response;
    }

    let projects: Vec<Project> = state.list_projects().into_iter().cloned().collect();
    let total = projects.len() as i64;

    (
        StatusCode::OK,
        Json(ListProjectsResponse {
            projects,
            total,
            column_filters: serde_json::json!({}),
        }),
    )
        .into_response()
}

/// GET /api/v1/organisation/{org}/project/{id}
pub async fn get_project(
    State(state): State<SharedState>,
    Path((organisation, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;

    if let Err(response) = authorize(&state, &headers, &organisation) {
        return response;
    }
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.get_project(id) {
        Some(project) => (StatusCode::OK, Json(project.clone())).into_response(),
        None => project_not_found(id),
    }
}

/// POST /api/v1/organisation/{org}/project
pub async fn create_project(
    State(state): State<SharedState>,
    Path(organisation): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let mut state = state.write().await;

    if let Err(response) = authorize(&state, &headers, &organisation) {
        return response;
    }
    let params = match parse_body(&body) {
        Ok(params) => params,
        Err(response) => return response,
    };

    let project = state.create_project(params.name, params.user_id);
    (StatusCode::OK, Json(project.clone())).into_response()
}

/// PUT /api/v1/organisation/{org}/project/{id}
pub async fn update_project(
    State(state): State<SharedState>,
    Path((organisation, id)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let mut state = state.write().await;

    if let Err(response) = authorize(&state, &headers, &organisation) {
        return response;
    }
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let params = match parse_body(&body) {
        Ok(params) => params,
        Err(response) => return response,
    };

    match state.update_project(id, params.name, params.user_id) {
        Some(project) => (StatusCode::OK, Json(project.clone())).into_response(),
        None => project_not_found(id),
    }
}

/// DELETE /api/v1/organisation/{org}/project/{id}
///
/// Answers 200 with an empty body.
pub async fn delete_project(
    State(state): State<SharedState>,
    Path((organisation, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    let mut state = state.write().await;

    if let Err(response) = authorize(&state, &headers, &organisation) {
        return response;
    }
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.delete_project(id) {
        Some(_) => StatusCode::OK.into_response(),
        None => project_not_found(id),
    }
}
