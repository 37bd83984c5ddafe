//! Tick label formatters

use chrono::{TimeZone, Utc};

/// Formatter applied to numeric tick values
pub type TickFormat = fn(f64) -> String;

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
const SUPERSCRIPT_MINUS: char = '⁻';

/// Label for a log-scale tick: `1000` becomes `10³`.
///
/// The exponent is the rounded base-10 logarithm.
/// Values without a finite logarithm (zero, negatives, NaN) print as is.
pub fn log10_tick_format(value: f64) -> String {
    let exponent = value.log10();
    if !exponent.is_finite() {
        return value.to_string();
    }
    let power = exponent.round() as i64;

    let mut label = String::from("10");
    if power < 0 {
        label.push(SUPERSCRIPT_MINUS);
    }
    label.extend(
        power
            .unsigned_abs()
            .to_string()
            .bytes()
            .map(|b| SUPERSCRIPT_DIGITS[(b - b'0') as usize]),
    );
    label
}

/// Default linear tick label: just enough decimals to tell ticks `step` apart
pub fn step_tick_format(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let label = format!("{:.prec$}", value, prec = decimals);
    // "-0" reads badly on an axis
    if label.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        label.trim_start_matches('-').to_string()
    } else {
        label
    }
}

const SI_SUFFIXES: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Two-decimal tick label with a K/M/B suffix for thousands and up
pub fn format_large_number(num: f64) -> String {
    let magnitude = num.abs();
    SI_SUFFIXES
        .iter()
        .find(|(unit, _)| magnitude >= *unit)
        .map_or_else(
            || format!("{num:.2}"),
            |(unit, suffix)| format!("{:.2}{suffix}", num / unit),
        )
}

/// Format timestamp for chart axes, coarser for wider tick intervals
pub fn format_time(timestamp_ms: i64, interval_secs: i64) -> String {
    let Some(dt) = Utc.timestamp_millis_opt(timestamp_ms).single() else {
        return timestamp_ms.to_string();
    };

    if interval_secs >= 86400 {
        dt.format("%b %d").to_string()
    } else if interval_secs >= 60 {
        dt.format("%H:%M").to_string()
    } else {
        dt.format("%H:%M:%S").to_string()
    }
}
