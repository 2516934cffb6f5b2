use axum::{
    Json, Router,
    extract::{Multipart, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use telugu_lipi::{
    LipiError, Pipeline, ProcessingMode, ProcessingResult, RemoteOcrProvider, SampleMode,
    SampleRecognizer, TextRecognizer,
};

#[derive(Deserialize)]
pub struct ProcessTextRequest {
    pub text: String,
    pub mode: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse().unwrap()),
        )
        .init();

    // Prefer the remote recognition service; fall back to the sample corpus
    let recognizer: Arc<dyn TextRecognizer> = match RemoteOcrProvider::from_env() {
        Ok(provider) => Arc::new(provider),
        Err(_) => {
            info!("LIPI_OCR_ENDPOINT not set, serving the sample recognition corpus");
            Arc::new(SampleRecognizer::new(SampleMode::Rotate))
        }
    };
    info!(backend = recognizer.recognizer_name(), "recognition backend ready");

    let state = AppState {
        pipeline: Arc::new(Pipeline::new(recognizer)),
    };

    info!("📜 Starting Telugu Lipi web server");

    // Build router
    let app = Router::new()
        .route("/", get(serve_index))
        .route("/api/process", post(process_image))
        .route("/api/process-text", post(process_text))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    info!("🚀 Server running at http://127.0.0.1:3000");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn serve_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("static/index.html"),
    )
}

async fn process_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ProcessingResult>, (StatusCode, Json<ErrorResponse>)> {
    let mut image: Option<Vec<u8>> = None;
    let mut mode = ProcessingMode::Summarize;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        bad_request(format!("Malformed multipart request: {}", e))
    })? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("image") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| bad_request(format!("Failed to read image field: {}", e)))?;
                image = Some(bytes.to_vec());
            }
            Some("mode") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| bad_request(format!("Failed to read mode field: {}", e)))?;
                mode = value
                    .parse()
                    .map_err(|e: LipiError| bad_request(e.to_string()))?;
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| bad_request("Missing 'image' field".to_string()))?;

    info!(bytes = image.len(), mode = mode.as_str(), "processing upload");

    let result = state
        .pipeline
        .process_image(&image, mode)
        .await
        .map_err(error_response)?;

    Ok(Json(result))
}

async fn process_text(
    State(state): State<AppState>,
    Json(request): Json<ProcessTextRequest>,
) -> Result<Json<ProcessingResult>, (StatusCode, Json<ErrorResponse>)> {
    let mode = match request.mode.as_deref() {
        Some(value) => value
            .parse()
            .map_err(|e: LipiError| bad_request(e.to_string()))?,
        None => ProcessingMode::Summarize,
    };

    let result = state
        .pipeline
        .process_text(&request.text, mode)
        .map_err(error_response)?;

    Ok(Json(result))
}

fn bad_request(message: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
}

fn error_response(err: LipiError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        LipiError::ConfigError(_) | LipiError::InvalidLanguage(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
