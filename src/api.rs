//! HTTP surface for the design generation service.
//!
//! One JSON welcome endpoint and one multipart endpoint that runs the
//! full generation flow. Per-request failures are translated into
//! `{"detail": "..."}` bodies by the [`Error`] response mapping.

use crate::app::App;
use crate::models::{DesignRequest, GeneratedImage, DEFAULT_ROOM_SIZE};
use crate::Error;
use axum::extract::multipart::Field;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

// Room photos straight off a phone camera run well past axum's 2 MB
// default body limit.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone)]
struct AppState {
    app: Arc<App>,
}

/// Build the service router around a configured [`App`].
pub fn router(app: App) -> Router {
    let state = AppState { app: Arc::new(app) };

    Router::new()
        .route("/", get(welcome_handler))
        .route("/generate_design/", post(generate_design_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn welcome_handler() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to the RoomStyler API. POST a room photo and style preferences to /generate_design/ to restyle it."
    }))
}

async fn generate_design_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<GeneratedImage>, Error> {
    let request_id = Uuid::new_v4();
    let request = read_design_request(&mut multipart).await?;

    info!(
        "[{}] Generating design: room_type={:?} style={:?} color_palette={:?} room_size={:?} image={} bytes",
        request_id,
        request.room_type,
        request.style,
        request.color_palette,
        request.room_size,
        request.image.len()
    );

    let generated = state.app.generate_design(request).await.map_err(|e| {
        warn!("[{}] Design generation failed: {}", request_id, e);
        e
    })?;

    info!("[{}] Design generation complete", request_id);
    Ok(Json(generated))
}

/// Collect the multipart fields into a [`DesignRequest`], applying the
/// room size default and rejecting incomplete forms.
async fn read_design_request(multipart: &mut Multipart) -> Result<DesignRequest, Error> {
    let mut image = None;
    let mut room_type = None;
    let mut style = None;
    let mut color_palette = None;
    let mut room_size = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::InvalidInput(format!("Malformed multipart form: {}", e)))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "image" => {
                let bytes = field.bytes().await.map_err(|e| {
                    Error::InvalidInput(format!("Could not read uploaded image: {}", e))
                })?;
                image = Some(bytes.to_vec());
            }
            "room_type" => room_type = Some(read_text_field(field, "room_type").await?),
            "style" => style = Some(read_text_field(field, "style").await?),
            "color_palette" => {
                color_palette = Some(read_text_field(field, "color_palette").await?)
            }
            "room_size" => room_size = Some(read_text_field(field, "room_size").await?),
            other => {
                warn!("Ignoring unexpected form field {:?}", other);
            }
        }
    }

    Ok(DesignRequest {
        room_type: required_field(room_type, "room_type")?,
        style: required_field(style, "style")?,
        color_palette: required_field(color_palette, "color_palette")?,
        room_size: room_size.unwrap_or_else(|| DEFAULT_ROOM_SIZE.to_string()),
        image: required_field(image, "image")?,
    })
}

async fn read_text_field(field: Field<'_>, name: &str) -> Result<String, Error> {
    field
        .text()
        .await
        .map_err(|e| Error::InvalidInput(format!("Could not read form field {:?}: {}", name, e)))
}

fn required_field<T>(value: Option<T>, name: &str) -> Result<T, Error> {
    value.ok_or_else(|| Error::InvalidInput(format!("Missing required form field {:?}", name)))
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            // Mirror the provider's status so callers see what it saw.
            Error::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Error::UpstreamEmptyResult
            | Error::Communication(_)
            | Error::Config(_)
            | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
