// File: crates/crop-engine/src/months.rs
// Summary: Default month axis labels (Italian short names, as on the dashboard pages).

use chrono::Month;

fn short_name(month: Month) -> &'static str {
    match month {
        Month::January => "Gen",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "Mag",
        Month::June => "Giu",
        Month::July => "Lug",
        Month::August => "Ago",
        Month::September => "Set",
        Month::October => "Ott",
        Month::November => "Nov",
        Month::December => "Dic",
    }
}

/// `n` short month names starting at January, wrapping after December.
pub fn default_month_labels(n: usize) -> Vec<String> {
    (0..n)
        .filter_map(|i| Month::try_from((i % 12 + 1) as u8).ok())
        .map(|m| short_name(m).to_string())
        .collect()
}
