//! Client for submitting bookings to the endpoint

use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;

use crate::booking::{BookingId, BookingRequest, BookingResponse};
use crate::config::BookingConfig;
use crate::{Error, Result};

/// What the endpoint decided about a submission
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    Confirmed(BookingId),
    /// Validation failed; messages as returned by the endpoint
    Rejected(Vec<String>),
}

#[derive(Clone)]
pub struct BookingClient {
    http: reqwest::Client,
    endpoint: String,
}

impl BookingClient {
    pub fn new(config: &BookingConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post a booking and interpret the response
    ///
    /// Transport failures and 5xx responses are errors; a 400 with
    /// validation messages is a [`BookingOutcome::Rejected`].
    pub async fn submit(&self, booking: &BookingRequest) -> Result<BookingOutcome> {
        debug!("Submitting booking to {}", self.endpoint);
        let response = self.http.post(&self.endpoint).json(booking).send().await?;
        let status = response.status();
        let body: BookingResponse = response.json().await?;

        if status == StatusCode::OK && body.success {
            if let Some(id) = body.booking_id {
                return Ok(BookingOutcome::Confirmed(id));
            }
        } else if status == StatusCode::BAD_REQUEST && !body.errors.is_empty() {
            return Ok(BookingOutcome::Rejected(body.errors));
        }

        Err(Error::Server {
            status: status.as_u16(),
            message: body
                .error
                .unwrap_or_else(|| "unexpected response from booking endpoint".to_string()),
        })
    }
}
