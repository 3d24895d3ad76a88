//! Plain-text rendering of probability tables and quantiles
//!
//! Tables follow the layout of a simple two-column report: the support
//! column is right-aligned, the probability column left-aligned, and a rule
//! of dashes separates the header from the rows.

use crate::distribution::table::{Output, ProbabilityTable};
use crate::io::configuration::{
    COLUMN_GAP, DEFAULT_SIGNIFICANT_DIGITS, RULE_CHAR, SUPPORT_COLUMN_HEADER,
};

/// Format a probability with `digits` decimal places, or with
/// [`DEFAULT_SIGNIFICANT_DIGITS`] significant digits when `digits` is `None`
pub fn format_probability(value: f64, digits: Option<usize>) -> String {
    digits.map_or_else(
        || format_significant(value, DEFAULT_SIGNIFICANT_DIGITS),
        |digits| format!("{value:.digits$}"),
    )
}

/// Drop trailing zeros of a decimal fraction, and the point if nothing is left
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// General format with `significant` digits, as C's `%g`
///
/// Fixed notation is used for decimal exponents in `-4..significant`,
/// scientific notation with a two-digit exponent otherwise. Trailing zeros
/// are removed in both.
pub fn format_significant(value: f64, significant: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    let significant = significant.max(1);
    let precision = significant - 1;
    let scientific = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i64>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= significant as i64 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i64 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Render a table as aligned text lines without a trailing newline
pub fn render_table(table: &ProbabilityTable, digits: Option<usize>) -> String {
    let cells: Vec<(String, String)> = table
        .rows
        .iter()
        .map(|row| (row.k.to_string(), format_probability(row.probability, digits)))
        .collect();

    let k_width = cells
        .iter()
        .map(|(k, _)| k.chars().count())
        .chain(std::iter::once(SUPPORT_COLUMN_HEADER.chars().count()))
        .max()
        .unwrap_or_default();
    let value_width = cells
        .iter()
        .map(|(_, value)| value.chars().count())
        .chain(std::iter::once(table.label.chars().count()))
        .max()
        .unwrap_or_default();

    let gap = " ".repeat(COLUMN_GAP);
    let rule = |width: usize| RULE_CHAR.to_string().repeat(width);

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(format!(
        "{:>k_width$}{gap}{}",
        SUPPORT_COLUMN_HEADER, table.label
    ));
    lines.push(format!("{}{gap}{}", rule(k_width), rule(value_width)));
    for (k, value) in &cells {
        lines.push(format!("{k:>k_width$}{gap}{value}"));
    }

    lines.join("\n")
}

/// Render any request output
pub fn render_output(output: &Output, digits: Option<usize>) -> String {
    match output {
        Output::Table(table) => render_table(table, digits),
        Output::Quantile(k) => k.to_string(),
    }
}
