/// Utilities for rendering dates in tables
///
/// Records carry ISO instants; the UI shows the local calendar day.
use contracts::shared::dates::iso_instant_to_date;

/// Format an ISO instant (or plain `YYYY-MM-DD`) as the local day, DD/MM/YYYY.
/// Unparseable input is returned unchanged.
/// Example: "2024-03-15" -> "15/03/2024"
pub fn format_date(value: &str) -> String {
    match iso_instant_to_date(value) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => value.to_string(),
    }
}
