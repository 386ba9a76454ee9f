//! Display formatting for form values

use crate::validate::digits_only;

const UAE_COUNTRY_CODE: &str = "971";

/// Group a UAE number as `+971 XX XXX XXXX`
///
/// Anything whose digits do not start with the UAE country code is
/// returned as given. Short numbers lose their trailing groups instead of
/// padding with blanks.
pub fn format_phone_number(phone: &str) -> String {
    let digits = digits_only(phone);
    if !digits.starts_with(UAE_COUNTRY_CODE) {
        return phone.to_string();
    }

    // Group boundaries after the country code, operator and exchange digits
    let groups = [0..3, 3..5, 5..8, 8..digits.len()]
        .into_iter()
        .filter_map(|range| {
            let end = range.end.min(digits.len());
            digits.get(range.start..end)
        })
        .filter(|group| !group.is_empty())
        .collect::<Vec<_>>();

    format!("+{}", groups.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_uae_number() {
        assert_eq!(format_phone_number("971501234567"), "+971 50 123 4567");
        assert_eq!(format_phone_number("+971 501 234 567"), "+971 50 123 4567");
    }

    #[test]
    fn test_passes_through_other_numbers() {
        assert_eq!(format_phone_number("0501234567"), "0501234567");
        assert_eq!(format_phone_number("+44 20 7946 0958"), "+44 20 7946 0958");
        assert_eq!(format_phone_number(""), "");
    }

    #[test]
    fn test_short_uae_prefix_does_not_panic() {
        assert_eq!(format_phone_number("971"), "+971");
        assert_eq!(format_phone_number("97150"), "+971 50");
        assert_eq!(format_phone_number("9715012"), "+971 50 12");
    }
}
