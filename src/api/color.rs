use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::ColorReport;
use crate::services::{parse_path_hex, ColorReporter};

/// Liveness banner
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = String),
    ),
    tag = "Colors"
)]
pub async fn handle_root() -> &'static str {
    "Color API is live and kicking!"
}

/// Describe one color
///
/// Returns the nearest common names, the nearest RAL, Pantone and NCS codes
/// with their CIEDE2000 distance, a five-color natural gradient and the color
/// in RGB, HSL, HSV, Lab and CMYK notation.
#[utoipa::path(
    get,
    path = "/colors/{hex}",
    responses(
        (status = 200, description = "Color report", body = ColorReport),
        (status = 400, description = "Not a six-digit hex color"),
    ),
    params(
        ("hex" = String, Path, description = "Six hex digits without '#' (e.g., '8a4578')"),
    ),
    tag = "Colors"
)]
pub async fn handle_color(
    State(reporter): State<Arc<ColorReporter>>,
    Path(hex): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let color = parse_path_hex(&hex).inspect_err(|e| {
        tracing::debug!(input = %hex, %e, "Rejected color");
    })?;

    let report = reporter.report(&color);
    tracing::info!(
        color = %report.base.color,
        name = report.base.name.as_deref().unwrap_or(""),
        "Color report"
    );

    Ok(Json(report))
}
