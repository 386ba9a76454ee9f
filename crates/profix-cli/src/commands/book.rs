use anyhow::{bail, Result};
use clap::Args;
use tracing::debug;

use profix_core::booking::catalog::{
    label_for, CatalogEntry, SERVICE_TYPES, TIME_SLOTS, VEHICLE_BRANDS,
};
use profix_core::booking::{validate_form, BookingRequest};
use profix_core::{format_phone_number, AppConfig, BookingClient, BookingOutcome};

#[derive(Args)]
pub struct BookArgs {
    /// Full name
    #[arg(long)]
    pub name: String,
    /// Email address
    #[arg(long)]
    pub email: String,
    /// UAE phone number
    #[arg(long)]
    pub phone: String,
    #[arg(long, help = options_help("Vehicle brand", VEHICLE_BRANDS))]
    pub brand: String,
    #[arg(long, help = options_help("Service type", SERVICE_TYPES))]
    pub service: String,
    /// Preferred date, YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    #[arg(long, help = options_help("Preferred time slot", TIME_SLOTS))]
    pub time: String,
    /// Additional notes
    #[arg(long)]
    pub message: Option<String>,
    /// Agree to be contacted about this booking
    #[arg(long)]
    pub consent: bool,
}

/// Help line listing the accepted values of a catalog
fn options_help(what: &str, entries: &[CatalogEntry]) -> String {
    let values: Vec<&str> = entries.iter().map(|e| e.value).collect();
    format!("{} ({})", what, values.join(", "))
}

impl From<BookArgs> for BookingRequest {
    fn from(args: BookArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            phone: args.phone,
            vehicle_brand: args.brand,
            service_type: args.service,
            preferred_date: args.date,
            preferred_time: args.time,
            message: args.message,
            consent: args.consent,
        }
    }
}

pub async fn run(config: &AppConfig, args: BookArgs) -> Result<()> {
    let booking = BookingRequest::from(args);

    // Same checks the form runs before it submits
    let today = chrono::Local::now().date_naive();
    let problems = validate_form(&booking, today);
    if !problems.is_empty() {
        eprintln!("The booking form has problems:");
        for problem in &problems {
            eprintln!("  - {}", problem);
        }
        bail!("{} field(s) need attention", problems.len());
    }

    let client = BookingClient::new(&config.booking)?;
    debug!("Submitting booking to {}", client.endpoint());

    match client.submit(&booking).await? {
        BookingOutcome::Confirmed(booking_id) => {
            println!("Booking received: {}", booking_id);
            println!("  Name:    {}", booking.name.trim());
            println!("  Phone:   {}", format_phone_number(&booking.phone));
            println!("  Vehicle: {}", label_for(VEHICLE_BRANDS, &booking.vehicle_brand));
            println!("  Service: {}", label_for(SERVICE_TYPES, &booking.service_type));
            println!(
                "  When:    {} at {}",
                booking.preferred_date,
                label_for(TIME_SLOTS, &booking.preferred_time)
            );
            Ok(())
        }
        BookingOutcome::Rejected(errors) => {
            eprintln!("The booking endpoint rejected the request:");
            for error in &errors {
                eprintln!("  - {}", error);
            }
            bail!("booking rejected");
        }
    }
}
