use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};

/// Booking form payload as posted by the site
///
/// Absent or `null` fields decode to empty values so they are reported by
/// validation instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vehicle_brand: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub service_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferred_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferred_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub consent: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Synthetic booking reference: `BK-<unix millis>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    pub fn generate() -> Self {
        Self(format!("BK-{}", Utc::now().timestamp_millis()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body returned by the booking endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<BookingId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BookingResponse {
    pub fn confirmed(booking_id: BookingId) -> Self {
        Self {
            success: true,
            message: Some("Booking received successfully".to_string()),
            booking_id: Some(booking_id),
            errors: Vec::new(),
            error: None,
        }
    }

    pub fn rejected(errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: None,
            booking_id: None,
            errors,
            error: None,
        }
    }

    pub fn internal_error() -> Self {
        Self {
            success: false,
            message: None,
            booking_id: None,
            errors: Vec::new(),
            error: Some("Internal server error".to_string()),
        }
    }
}
