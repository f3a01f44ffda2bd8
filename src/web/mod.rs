//! Web API module for PaintCalc.
//!
//! This module provides a stateless REST API over the calculator so the
//! site's paint-calculator page can request estimates and color
//! suggestions.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/rooms` - Room catalog with coverage and price
//! - `POST /api/estimate` - Paint estimate for a room
//! - `GET /api/colors/{hex}` - Full color report
//! - `GET /api/colors/{hex}/suggestions` - Complementary and analogous colors
//! - `GET /api/colors/{hex}/tone` - Tone and room advice
//! - `GET /api/palette` - Curated palette
//! - `GET /api/palette/random` - One random curated color
//! - `GET /api/config` - Active pricing table

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::config::{Config, PricingTable};
use crate::error::ValidationError;
use crate::models::palette::random_color;
use crate::models::{
    CalculationResult, ColorReport, ColorSuggestionSet, RgbColor, RoomSpecInput, RoomType, Tone,
    CURATED_PALETTE,
};
use crate::services::{
    classify_tone, derive_suggestions, describe_color, room_catalog, PaintEstimator, RoomInfo,
};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Estimator bound to the configured pricing table
    estimator: Arc<PaintEstimator>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let estimator = PaintEstimator::new(config.pricing.clone());
        Self {
            config: Arc::new(config),
            estimator: Arc::new(estimator),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Room catalog response.
#[derive(Debug, Serialize)]
pub struct RoomListResponse {
    /// Available room types.
    pub rooms: Vec<RoomInfo>,
    /// Currency symbol for the listed prices.
    pub currency_symbol: String,
}

/// Estimate request body.
///
/// Dimensions and counts may be numbers or numeric strings.
#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    /// Room geometry and openings.
    #[serde(flatten)]
    pub room: RoomSpecInput,
    /// Room type identifier (e.g., "livingRoom").
    #[serde(alias = "roomType")]
    pub room_type: Option<String>,
}

/// Estimate response.
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    /// Room type the estimate was priced for.
    pub room_type: RoomType,
    /// Display name of the room type.
    pub room_name: String,
    /// Currency symbol for the cost.
    pub currency_symbol: String,
    /// Computed figures.
    #[serde(flatten)]
    pub result: CalculationResult,
}

/// Tone response.
#[derive(Debug, Serialize)]
pub struct ToneResponse {
    /// Classified color.
    pub color: RgbColor,
    /// Perceptual brightness (0-255).
    pub brightness: f64,
    /// Tone bucket.
    pub tone: Tone,
    /// Room-suitability advice.
    pub suitability: String,
}

/// Palette response.
#[derive(Debug, Serialize)]
pub struct PaletteResponse {
    /// Featured colors in display order.
    pub colors: Vec<RgbColor>,
}

/// Random palette pick response.
#[derive(Debug, Serialize)]
pub struct RandomColorResponse {
    /// The chosen color.
    pub color: RgbColor,
    /// Its tone bucket.
    pub tone: Tone,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn bad_request(err: &ValidationError) -> (StatusCode, Json<ApiError>) {
    debug!(field = err.field(), "Rejected request: {}", err);
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::with_details("Validation failed", err.to_string())),
    )
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/rooms - List room types with their rates.
async fn list_rooms(State(state): State<AppState>) -> Json<RoomListResponse> {
    let pricing = state.estimator.pricing();
    Json(RoomListResponse {
        rooms: room_catalog(pricing),
        currency_symbol: pricing.currency_symbol.clone(),
    })
}

/// POST /api/estimate - Compute a paint estimate.
async fn create_estimate(
    State(state): State<AppState>,
    Json(request): Json<EstimateRequest>,
) -> ApiResult<EstimateResponse> {
    let room_type = match request.room_type.as_deref() {
        Some(id) => id.parse::<RoomType>().map_err(|e| bad_request(&e))?,
        None => RoomType::default(),
    };

    let room = request.room.parse().map_err(|e| bad_request(&e))?;
    let result = state
        .estimator
        .estimate(&room, room_type)
        .map_err(|e| bad_request(&e))?;

    Ok(Json(EstimateResponse {
        room_type,
        room_name: room_type.display_name().to_string(),
        currency_symbol: state.estimator.pricing().currency_symbol.clone(),
        result,
    }))
}

/// GET /api/colors/{hex} - Full color report.
async fn get_color(Path(hex): Path<String>) -> ApiResult<ColorReport> {
    let color = RgbColor::from_hex(&hex).map_err(|e| bad_request(&e))?;
    Ok(Json(describe_color(color)))
}

/// GET /api/colors/{hex}/suggestions - Complementary and analogous colors.
async fn get_suggestions(Path(hex): Path<String>) -> ApiResult<ColorSuggestionSet> {
    let color = RgbColor::from_hex(&hex).map_err(|e| bad_request(&e))?;
    Ok(Json(derive_suggestions(color)))
}

/// GET /api/colors/{hex}/tone - Tone and room advice.
async fn get_tone(Path(hex): Path<String>) -> ApiResult<ToneResponse> {
    let color = RgbColor::from_hex(&hex).map_err(|e| bad_request(&e))?;
    let tone = classify_tone(color);
    Ok(Json(ToneResponse {
        color,
        brightness: color.brightness(),
        tone,
        suitability: tone.suitability().to_string(),
    }))
}

/// GET /api/palette - Curated palette.
async fn list_palette() -> Json<PaletteResponse> {
    Json(PaletteResponse {
        colors: CURATED_PALETTE.to_vec(),
    })
}

/// GET /api/palette/random - One random curated color.
async fn random_palette_color() -> Json<RandomColorResponse> {
    let color = random_color();
    Json(RandomColorResponse {
        color,
        tone: classify_tone(color),
    })
}

/// GET /api/config - Active pricing table.
async fn get_config(State(state): State<AppState>) -> Json<PricingTable> {
    Json(state.config.pricing.clone())
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - the site frontend is served from a different origin.
    // NOTE: Every endpoint is read-only and stateless, so a permissive policy
    // exposes nothing beyond the public price list.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Calculator endpoints
        .route("/api/rooms", get(list_rooms))
        .route("/api/estimate", post(create_estimate))
        // Color endpoints
        .route("/api/colors/{hex}", get(get_color))
        .route("/api/colors/{hex}/suggestions", get(get_suggestions))
        .route("/api/colors/{hex}/tone", get(get_tone))
        .route("/api/palette", get(list_palette))
        .route("/api/palette/random", get(random_palette_color))
        // Config endpoint
        .route("/api/config", get(get_config))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Arguments
///
/// * `config` - Application configuration
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config);
    let app = create_router(state);

    info!("Starting PaintCalc web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
