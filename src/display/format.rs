//! Shared formatting helpers

use crate::services::summary::clamp_percentage;

/// Format an amount with two decimals and the currency symbol
///
/// Negative amounts put the sign before the symbol: `-$12.50`.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, -amount)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Format a computed (unclamped) percentage with one decimal
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.1}%", percentage)
}

/// Text progress bar; the fill is clamped to the bar width
pub fn progress_bar(percentage: f64, width: usize) -> String {
    let filled = ((clamp_percentage(percentage) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
