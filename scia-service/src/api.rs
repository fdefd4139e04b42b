use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use foundation_model::params::Parametrization;
use foundation_model::prelude::*;
use foundation_model::scia::{DEFINITION_FILE_NAME, INPUT_FILE_NAME, TEMPLATE_FILE_NAME};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

use crate::analysis::{self, AnalysisError};
use crate::config::ServiceConfig;
use crate::executor::{AnalysisEngine, ExecutorError};
use crate::models::{reaction_data, GeometryAndDataResponse, GeometryResponse};

const SERVICE_NAME: &str = "SCIA Pile Foundation Service";
const XML_CONTENT_TYPE: &str = "application/xml";
const BINARY_CONTENT_TYPE: &str = "application/octet-stream";

/// Application state
pub struct AppState<E> {
    engine: E,
    config: ServiceConfig,
}

impl<E: AnalysisEngine> AppState<E> {
    pub fn new(engine: E, config: ServiceConfig) -> Self {
        Self { engine, config }
    }
}

/// Build the API router
pub fn create_router<E: AnalysisEngine>(engine: E, config: ServiceConfig) -> Router {
    let state = AppState::new(engine, config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check::<E>))
        .route("/api/v1/version", get(version_handler))
        .route("/api/v1/parametrization", get(parametrization_handler))
        .route("/api/v1/views/geometry", post(geometry_view_handler))
        .route("/api/v1/views/scia", post(scia_view_handler::<E>))
        .route("/api/v1/downloads/input-xml", post(input_xml_handler))
        .route("/api/v1/downloads/input-def", get(input_def_handler))
        .route("/api/v1/downloads/input-esa", get(input_esa_handler::<E>))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Root endpoint
async fn root_handler() -> Json<serde_json::Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "description": "Slab on a 4x3 pile grid, modelled and analysed with SCIA Engineer",
        "views": ["geometry", "scia"],
        "downloads": [INPUT_FILE_NAME, DEFINITION_FILE_NAME, TEMPLATE_FILE_NAME]
    }))
}

/// Health check endpoint
async fn health_check<E: AnalysisEngine>(
    State(state): State<Arc<AppState<E>>>,
) -> Json<serde_json::Value> {
    let runner_available = state.engine.is_available().await;

    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "runner_available": runner_available,
        "runner_command": state.config.runner_path.display().to_string(),
        "template_present": state.config.template_path.exists()
    }))
}

/// Version endpoint
async fn version_handler() -> Json<serde_json::Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "engine": "SCIA Engineer (esa_xml)"
    }))
}

/// Input form description
async fn parametrization_handler() -> Json<Parametrization> {
    Json(parametrization())
}

/// 3D view of the model
async fn geometry_view_handler(
    payload: Result<Json<FoundationParams>, JsonRejection>,
) -> Result<Json<GeometryResponse>, ApiError> {
    let Json(params) = payload?;
    let model = build_foundation_model(&params)?;
    let geometries = visualization_geometries(&params, &model)?;

    tracing::debug!("Geometry view: {} primitives", geometries.len());
    Ok(Json(GeometryResponse { geometries }))
}

/// 3D view plus the maximum pile reaction from a SCIA run
async fn scia_view_handler<E: AnalysisEngine>(
    State(state): State<Arc<AppState<E>>>,
    payload: Result<Json<FoundationParams>, JsonRejection>,
) -> Result<Json<GeometryAndDataResponse>, ApiError> {
    let Json(params) = payload?;
    let job_id = Uuid::new_v4().to_string();
    tracing::info!("Received analysis request {}", job_id);

    let model = build_foundation_model(&params)?;
    let geometries = visualization_geometries(&params, &model)?;

    let template = analysis::load_template(&state.config.template_path).await?;
    let reaction =
        analysis::run_analysis(&state.engine, &params, template, state.config.timeout).await?;

    Ok(Json(GeometryAndDataResponse {
        geometries,
        data: reaction_data(reaction),
        job_id,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

/// Generated XML input for the current parameters
async fn input_xml_handler(
    payload: Result<Json<FoundationParams>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(params) = payload?;
    let model = build_foundation_model(&params)?;
    let xml = write_input_xml(&model)?;
    Ok(attachment(INPUT_FILE_NAME, XML_CONTENT_TYPE, xml))
}

/// Definition file matching every generated input
async fn input_def_handler() -> Result<Response, ApiError> {
    let def = write_definition_file()?;
    Ok(attachment(DEFINITION_FILE_NAME, XML_CONTENT_TYPE, def))
}

/// The `.esa` template the input is applied to
async fn input_esa_handler<E: AnalysisEngine>(
    State(state): State<Arc<AppState<E>>>,
) -> Result<Response, ApiError> {
    let template = analysis::load_template(&state.config.template_path).await?;
    Ok(attachment(TEMPLATE_FILE_NAME, BINARY_CONTENT_TYPE, template))
}

fn attachment(file_name: &str, content_type: &str, body: impl IntoResponse) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        body,
    )
        .into_response()
}

/// API Errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid parameters: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    InternalError(String),
    #[error("Engine error: {0}")]
    EngineError(String),
    #[error("Timeout: {0}")]
    Timeout(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::TemplateMissing(_) => ApiError::NotFound(err.to_string()),
            AnalysisError::TemplateRead { .. } | AnalysisError::Model(_) => {
                ApiError::InternalError(err.to_string())
            }
            AnalysisError::Executor(ExecutorError::Timeout(_)) => ApiError::Timeout(err.to_string()),
            AnalysisError::Executor(_) => ApiError::EngineError(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::EngineError(_) => StatusCode::BAD_GATEWAY,
            ApiError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        };
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
