//! Options offered by the booking form

/// One selectable option: wire value plus display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub value: &'static str,
    pub label: &'static str,
}

const fn entry(value: &'static str, label: &'static str) -> CatalogEntry {
    CatalogEntry { value, label }
}

pub const VEHICLE_BRANDS: &[CatalogEntry] = &[
    entry("bmw", "BMW"),
    entry("mercedes", "Mercedes-Benz"),
    entry("audi", "Audi"),
    entry("porsche", "Porsche"),
    entry("volkswagen", "Volkswagen"),
    entry("mini", "MINI"),
    entry("other", "Other German Brand"),
];

pub const SERVICE_TYPES: &[CatalogEntry] = &[
    entry("oil-change", "Oil Change"),
    entry("brake-service", "Brake Service"),
    entry("diagnostics", "Computer Diagnostics"),
    entry("suspension", "Suspension & Steering"),
    entry("ac-service", "AC Service"),
    entry("transmission", "Transmission Service"),
    entry("general-repair", "General Repair"),
    entry("inspection", "Pre-Purchase Inspection"),
    entry("other", "Other Service"),
];

pub const TIME_SLOTS: &[CatalogEntry] = &[
    entry("08:00", "8:00 AM"),
    entry("09:00", "9:00 AM"),
    entry("10:00", "10:00 AM"),
    entry("11:00", "11:00 AM"),
    entry("12:00", "12:00 PM"),
    entry("13:00", "1:00 PM"),
    entry("14:00", "2:00 PM"),
    entry("15:00", "3:00 PM"),
    entry("16:00", "4:00 PM"),
    entry("17:00", "5:00 PM"),
];

pub fn lookup(entries: &'static [CatalogEntry], value: &str) -> Option<&'static CatalogEntry> {
    entries.iter().find(|e| e.value == value)
}

/// Display label for a wire value, falling back to the value itself
pub fn label_for<'a>(entries: &'static [CatalogEntry], value: &'a str) -> &'a str {
    lookup(entries, value).map(|e| e.label).unwrap_or(value)
}
