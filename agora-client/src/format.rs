use crate::api::Time;

/// Compact relative time, eg. "5m" or "2h"
pub fn time_ago(date: Time, now: Time) -> String {
    let elapsed = now.signed_duration_since(date);
    if elapsed.num_minutes() < 1 {
        return String::from("now");
    }
    if elapsed.num_hours() < 1 {
        return format!("{}m", elapsed.num_minutes());
    }
    if elapsed.num_days() < 1 {
        return format!("{}h", elapsed.num_hours());
    }
    if elapsed.num_weeks() < 1 {
        return format!("{}d", elapsed.num_days());
    }
    if elapsed.num_days() < 365 {
        return format!("{}w", elapsed.num_weeks());
    }
    format!("{}y", elapsed.num_days() / 365)
}

/// Counter as displayed on chips: 950, 1.2K, 3M
pub fn compact_count(n: u64) -> String {
    match n {
        0..=999 => format!("{n}"),
        1_000..=999_999 => with_suffix(n, 1_000, "K"),
        _ => with_suffix(n, 1_000_000, "M"),
    }
}

fn with_suffix(n: u64, unit: u64, suffix: &str) -> String {
    let tenths = u128::from(n) * 10 / u128::from(unit);
    match (tenths % 10, tenths >= 100) {
        (0, _) | (_, true) => format!("{}{suffix}", tenths / 10),
        (d, false) => format!("{}.{d}{suffix}", tenths / 10),
    }
}
