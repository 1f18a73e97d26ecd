use once_cell::sync::Lazy;

// office hours: 9 AM to 5 PM, one-hour slots
pub const OPENING_HOUR: u32 = 9;
pub const CLOSING_HOUR: u32 = 17;

static DAILY_SLOTS: Lazy<Vec<String>> = Lazy::new(|| {
    (OPENING_HOUR..CLOSING_HOUR)
        .map(|hour| format!("{}:00 - {}:00", hour, hour + 1))
        .collect()
});

/// The fixed candidate grid, identical every day. No zero padding,
/// the labels are compared literally against stored appointments.
pub fn generate_daily_slots() -> Vec<String> {
    DAILY_SLOTS.clone()
}

/// Grid minus the booked set, grid order preserved. Booked entries
/// that are not on the grid are ignored.
pub fn resolve_availability(booked: &[String]) -> Vec<String> {
    DAILY_SLOTS
        .iter()
        .filter(|slot| !booked.contains(slot))
        .cloned()
        .collect()
}
