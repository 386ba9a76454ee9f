use std::fmt;

use chrono::NaiveDate;

use super::catalog::{lookup, SERVICE_TYPES, TIME_SLOTS, VEHICLE_BRANDS};
use super::models::BookingRequest;
use crate::validate::{is_valid_email, is_valid_phone, is_valid_uae_phone};

/// Minimum trimmed name length, in UTF-16 code units as the browser form
/// measures it (one emoji outside the BMP already counts as two)
const MIN_NAME_UNITS: usize = 2;
const DATE_FORMAT: &str = "%Y-%m-%d";

fn name_is_valid(name: &str) -> bool {
    name.trim().encode_utf16().count() >= MIN_NAME_UNITS
}

/// Endpoint-side validation
///
/// Only checks presence and the generic phone length. Messages are part of
/// the endpoint's response contract and come back in field order.
pub fn validate_submission(booking: &BookingRequest) -> Vec<String> {
    let checks = [
        (
            name_is_valid(&booking.name),
            "Name is required and must be at least 2 characters",
        ),
        (is_valid_email(&booking.email), "Valid email is required"),
        (is_valid_phone(&booking.phone), "Valid phone number is required"),
        (!booking.vehicle_brand.is_empty(), "Vehicle brand is required"),
        (!booking.service_type.is_empty(), "Service type is required"),
        (!booking.preferred_date.is_empty(), "Preferred date is required"),
        (!booking.preferred_time.is_empty(), "Preferred time is required"),
        (booking.consent, "Consent is required"),
    ];

    checks
        .into_iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, message)| message.to_string())
        .collect()
}

/// A problem with one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the field
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Form-side validation, run before a booking is submitted
///
/// Stricter than [`validate_submission`]: the phone must be a UAE number,
/// selections must come from the catalogs and the date cannot be before
/// `today`.
pub fn validate_form(booking: &BookingRequest, today: NaiveDate) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !name_is_valid(&booking.name) {
        errors.push(FieldError::new("name", "Please enter your full name"));
    }
    if !is_valid_email(&booking.email) {
        errors.push(FieldError::new("email", "Please enter a valid email address"));
    }
    if !is_valid_uae_phone(&booking.phone) {
        errors.push(FieldError::new(
            "phone",
            "Please enter a UAE number, e.g. +971 50 123 4567",
        ));
    }
    if lookup(VEHICLE_BRANDS, &booking.vehicle_brand).is_none() {
        errors.push(FieldError::new("vehicleBrand", "Select Vehicle Brand"));
    }
    if lookup(SERVICE_TYPES, &booking.service_type).is_none() {
        errors.push(FieldError::new("serviceType", "Select Service Type"));
    }
    match NaiveDate::parse_from_str(&booking.preferred_date, DATE_FORMAT) {
        Ok(date) if date < today => {
            errors.push(FieldError::new(
                "preferredDate",
                "Preferred date cannot be in the past",
            ));
        }
        Ok(_) => {}
        Err(_) => {
            errors.push(FieldError::new(
                "preferredDate",
                "Preferred date must be in YYYY-MM-DD format",
            ));
        }
    }
    if lookup(TIME_SLOTS, &booking.preferred_time).is_none() {
        errors.push(FieldError::new("preferredTime", "Select Preferred Time"));
    }
    if !booking.consent {
        errors.push(FieldError::new(
            "consent",
            "Please agree to be contacted about your booking",
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_booking() -> BookingRequest {
        BookingRequest {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "+971501234567".to_string(),
            vehicle_brand: "bmw".to_string(),
            service_type: "oil-change".to_string(),
            preferred_date: "2026-02-01".to_string(),
            preferred_time: "10:00".to_string(),
            message: None,
            consent: true,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn test_valid_submission_has_no_errors() {
        assert!(validate_submission(&valid_booking()).is_empty());
    }

    #[test]
    fn test_empty_submission_reports_every_field_in_order() {
        let errors = validate_submission(&BookingRequest::default());
        assert_eq!(
            errors,
            vec![
                "Name is required and must be at least 2 characters",
                "Valid email is required",
                "Valid phone number is required",
                "Vehicle brand is required",
                "Service type is required",
                "Preferred date is required",
                "Preferred time is required",
                "Consent is required",
            ]
        );
    }

    #[test]
    fn test_name_length_counts_utf16_units() {
        let astral = BookingRequest {
            name: "\u{1F697}".to_string(),
            ..valid_booking()
        };
        assert!(validate_submission(&astral).is_empty());

        let single = BookingRequest {
            name: "\u{00C9}".to_string(),
            ..valid_booking()
        };
        assert_eq!(
            validate_submission(&single),
            vec!["Name is required and must be at least 2 characters"]
        );
    }

    #[test]
    fn test_name_is_trimmed_before_length_check() {
        let booking = BookingRequest {
            name: "  J  ".to_string(),
            ..valid_booking()
        };
        assert_eq!(
            validate_submission(&booking),
            vec!["Name is required and must be at least 2 characters"]
        );

        let booking = BookingRequest {
            name: "Jo".to_string(),
            ..valid_booking()
        };
        assert!(validate_submission(&booking).is_empty());
    }

    #[test]
    fn test_submission_accepts_any_plausible_phone() {
        let booking = BookingRequest {
            phone: "+44 20 7946 0958".to_string(),
            vehicle_brand: "toyota".to_string(),
            ..valid_booking()
        };
        assert!(validate_submission(&booking).is_empty());
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate_form(&valid_booking(), today()).is_empty());
    }

    #[test]
    fn test_form_is_stricter_than_endpoint() {
        let booking = BookingRequest {
            phone: "+44 20 7946 0958".to_string(),
            vehicle_brand: "toyota".to_string(),
            ..valid_booking()
        };
        let fields: Vec<_> = validate_form(&booking, today())
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["phone", "vehicleBrand"]);
    }

    #[test]
    fn test_form_rejects_past_and_malformed_dates() {
        let past = BookingRequest {
            preferred_date: "2026-01-14".to_string(),
            ..valid_booking()
        };
        let errors = validate_form(&past, today());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Preferred date cannot be in the past");

        let same_day = BookingRequest {
            preferred_date: "2026-01-15".to_string(),
            ..valid_booking()
        };
        assert!(validate_form(&same_day, today()).is_empty());

        let malformed = BookingRequest {
            preferred_date: "01/02/2026".to_string(),
            ..valid_booking()
        };
        assert_eq!(validate_form(&malformed, today())[0].field, "preferredDate");
    }

    #[test]
    fn test_form_rejects_off_catalog_time() {
        let booking = BookingRequest {
            preferred_time: "18:00".to_string(),
            ..valid_booking()
        };
        assert_eq!(
            validate_form(&booking, today())[0].to_string(),
            "preferredTime: Select Preferred Time"
        );
    }
}
