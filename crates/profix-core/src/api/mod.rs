//! HTTP surface of the booking form
//!
//! The server is a stub: it validates and logs submissions and hands back a
//! synthetic booking id. Nothing is persisted or forwarded.

mod client;
mod server;

pub use client::{BookingClient, BookingOutcome};
pub use server::{router, ApiServer, BOOKING_PATH};
