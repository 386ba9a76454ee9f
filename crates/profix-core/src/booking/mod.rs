//! Booking submissions: wire models, option catalogs and the two levels of
//! validation (strict form checks, loose endpoint checks)

pub mod catalog;
mod models;
mod validation;

pub use catalog::{CatalogEntry, SERVICE_TYPES, TIME_SLOTS, VEHICLE_BRANDS};
pub use models::{BookingId, BookingRequest, BookingResponse};
pub use validation::{validate_form, validate_submission, FieldError};
