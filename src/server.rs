//! HTTP layer: the generation endpoint plus static frontend serving.
//!
//! One JSON endpoint does the real work; everything else is glue. Failures
//! from the agent ride inside the normal 200 response body, so the only
//! non-200 outcome under normal operation is the payload-size rejection.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::agent::{self, DocstringAgent};
use crate::config::Config;

/// Largest accepted source snippet, in characters.
const MAX_SOURCE_LEN: usize = 100_000;

/// Generous cap on the raw request body; the character limit above is the
/// real constraint.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

const SUCCESS_MESSAGE: &str = "Docstrings generated successfully!";
const FAILURE_MESSAGE: &str = "Failed or empty input.";
const PAYLOAD_TOO_LARGE_DETAIL: &str = "Payload too large. Please process smaller files.";

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub source_code: String,
    #[serde(default = "GenerateRequest::default_filename")]
    pub filename: String,
}

impl GenerateRequest {
    fn default_filename() -> String {
        "snippet.py".to_string()
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub documented_code: String,
    pub message: String,
}

/// Build the application router.
pub fn router(agent: DocstringAgent, frontend_dir: &Path) -> Router {
    Router::new()
        .route("/api/generate", post(generate))
        .route_service("/", ServeFile::new(frontend_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(frontend_dir))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(Arc::new(agent))
}

async fn generate(
    State(agent): State<Arc<DocstringAgent>>,
    Json(request): Json<GenerateRequest>,
) -> Response {
    if request.source_code.chars().count() > MAX_SOURCE_LEN {
        let detail = serde_json::json!({ "detail": PAYLOAD_TOO_LARGE_DETAIL });
        return (StatusCode::PAYLOAD_TOO_LARGE, Json(detail)).into_response();
    }

    info!(
        filename = %request.filename,
        bytes = request.source_code.len(),
        "generate request"
    );

    let documented_code = agent.generate_docstrings(&request.source_code).await;
    let message = if agent::is_error_output(&documented_code) {
        FAILURE_MESSAGE
    } else {
        SUCCESS_MESSAGE
    };

    Json(GenerateResponse {
        documented_code,
        message: message.to_string(),
    })
    .into_response()
}

/// Bind the listener and serve until the process is stopped.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let agent = DocstringAgent::new(&config);
    let app = router(agent, &config.frontend_dir);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
