//! Booking endpoint server

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::booking::{validate_submission, BookingId, BookingRequest, BookingResponse};
use crate::config::AppConfig;
use crate::Result;

pub const BOOKING_PATH: &str = "/api/booking";

struct ApiState {
    start_time: Instant,
}

/// Build the router with its layers
pub fn router(config: &AppConfig) -> Router {
    let state = Arc::new(ApiState {
        start_time: Instant::now(),
    });

    Router::new()
        .route(BOOKING_PATH, get(booking_info).post(submit_booking))
        .route("/health", get(health))
        .layer(cors_layer(&config.server.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let parsed = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                    None
                }
            })
            .collect::<Vec<_>>();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

async fn submit_booking(body: Bytes) -> (StatusCode, Json<BookingResponse>) {
    // An undecodable body is treated as an unexpected failure, not a
    // validation error.
    let booking: BookingRequest = match serde_json::from_slice(&body) {
        Ok(booking) => booking,
        Err(e) => {
            error!("Booking submission error: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(BookingResponse::internal_error()),
            );
        }
    };

    let errors = validate_submission(&booking);
    if !errors.is_empty() {
        info!(errors = errors.len(), "Booking rejected");
        return (StatusCode::BAD_REQUEST, Json(BookingResponse::rejected(errors)));
    }

    let booking_id = BookingId::generate();
    info!(
        booking_id = %booking_id,
        name = %booking.name,
        email = %booking.email,
        phone = %booking.phone,
        vehicle_brand = %booking.vehicle_brand,
        service_type = %booking.service_type,
        preferred_date = %booking.preferred_date,
        preferred_time = %booking.preferred_time,
        timestamp = %Utc::now().to_rfc3339(),
        "New booking received"
    );

    (StatusCode::OK, Json(BookingResponse::confirmed(booking_id)))
}

async fn booking_info() -> Json<Value> {
    Json(json!({ "message": "Booking API - Use POST to submit a booking" }))
}

async fn health(State(state): State<Arc<ApiState>>) -> Json<Value> {
    Json(json!({
        "ok": true,
        "uptime_secs": state.start_time.elapsed().as_secs()
    }))
}

/// Booking endpoint bound to the configured address
pub struct ApiServer {
    config: Arc<AppConfig>,
}

impl ApiServer {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Bind and serve until the shutdown signal flips to `true`
    pub async fn run(&self, shutdown_rx: watch::Receiver<bool>) -> Result<()> {
        let addr: SocketAddr = self.config.server.bind_addr.parse()?;
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener, shutdown_rx).await
    }

    /// Serve on an already bound listener
    pub async fn serve(
        &self,
        listener: TcpListener,
        mut shutdown_rx: watch::Receiver<bool>,
    ) -> Result<()> {
        info!("Booking endpoint listening on http://{}", listener.local_addr()?);

        axum::serve(listener, router(&self.config))
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.wait_for(|stop| *stop).await;
                info!("Booking endpoint shutting down");
            })
            .await?;

        Ok(())
    }
}
