// src/display.rs
use crate::models::{ComparisonResult, Fuel, StoredInputs};
use std::fmt::Write as _;

pub const BAR_WIDTH: usize = 20;
const MIN_INNER_WIDTH: usize = 30;

/// Renders the result overlay shown after a successful calculation.
#[must_use]
pub fn render_result(result: &ComparisonResult) -> String {
    let headline = match result.recommended {
        Fuel::Alcohol => "Fill up with ALCOHOL",
        Fuel::Gasoline => "Fill up with GASOLINE",
    };

    let lines = [
        headline.to_owned(),
        format!("Ratio: {}", result.ratio_text()),
        render_bar(result.bar_fraction(), BAR_WIDTH),
        String::new(),
        "[close]".to_owned(),
    ];
    render_box(&lines)
}

/// Renders the welcome overlay.
#[must_use]
pub fn render_welcome() -> String {
    render_box(&["Welcome!".to_owned(), String::new(), "[close]".to_owned()])
}

/// Renders the two stored texts, using `-` for a missing key.
#[must_use]
pub fn render_inputs(inputs: &StoredInputs) -> String {
    format!(
        "alcool:   {}\ngasolina: {}",
        inputs.ethanol.as_deref().unwrap_or("-"),
        inputs.gasoline.as_deref().unwrap_or("-"),
    )
}

/// A bar of `width` cells with `fraction` of them filled.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "fraction is clamped to [0, 1] so the cell count fits"
)]
pub fn render_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

fn render_box(lines: &[String]) -> String {
    // Grows past the minimum so long ratios like `1e20` stay inside the border.
    let inner = lines
        .iter()
        .map(|line| line.chars().count())
        .fold(MIN_INNER_WIDTH, usize::max);
    let border = "-".repeat(inner + 2);

    let mut out = String::new();
    let _ = writeln!(out, "+{border}+");
    for line in lines {
        let _ = writeln!(out, "| {line:<inner$} |");
    }
    let _ = write!(out, "+{border}+");
    out
}
