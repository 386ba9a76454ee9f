use anyhow::Result;

use profix_core::format_phone_number;
use profix_core::validate::{digits_only, is_valid_email, is_valid_phone, is_valid_uae_phone};

fn verdict(ok: bool) -> &'static str {
    if ok {
        "valid"
    } else {
        "invalid"
    }
}

pub fn email(value: &str) -> Result<()> {
    println!("{}: {}", value, verdict(is_valid_email(value)));
    Ok(())
}

pub fn phone(value: &str) -> Result<()> {
    let digits = digits_only(value);
    println!("{} ({} digits)", value, digits.len());
    println!("  Booking form (UAE):   {}", verdict(is_valid_uae_phone(value)));
    println!("  Booking endpoint:     {}", verdict(is_valid_phone(value)));
    println!("  Display:              {}", format_phone_number(value));
    Ok(())
}
