//! Tick label formatting.
//!
//! Three formatters cover the axis surface: a `%g`-style general formatter
//! rounded to significant digits, a minimal-mantissa scientific formatter, and
//! the log-decade filter that labels only ticks near integer powers of ten.

use serde::{Deserialize, Serialize};

/// Significant digits used by the default general label policy.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 4;

/// Nudge added before the decade test so exact powers of ten survive the
/// floating-point error in `log10`.
const DECADE_EPSILON: f64 = 1e-6;

/// Fractional-decade band inside which a tick counts as "near" a power of
/// ten. The comparison is strict: an offset of exactly 0.3 does not match.
const DECADE_BAND: f64 = 0.3;

/// Formats `value` to the given significant digits, picking fixed or
/// scientific notation the way `%g` does and trimming trailing zeros.
///
/// Fixed notation is used while the decimal exponent sits in
/// `[-4, significant_digits)`; everything outside that window goes
/// scientific.
#[must_use]
pub fn format_general(value: f64, significant_digits: usize) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = significant_digits.max(1);
    // Round first so a value like 9.999 decides its notation from the
    // rounded exponent, not the raw one.
    let rounded = format!("{value:.precision$e}", precision = digits - 1);
    let (mantissa, exponent_text) = match rounded.split_once('e') {
        Some(parts) => parts,
        None => (rounded.as_str(), "0"),
    };
    let exponent: i32 = exponent_text.parse().unwrap_or(0);

    if exponent >= -4 && exponent < digits as i32 {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_trailing_zeros(format!("{value:.decimals$}"))
    } else {
        let mantissa = trim_trailing_zeros(mantissa.to_owned());
        if exponent < 0 {
            format!("{mantissa}e-{}", -exponent)
        } else {
            format!("{mantissa}e+{exponent}")
        }
    }
}

/// Formats `value` in scientific notation with a minimal mantissa and an
/// explicit exponent sign: `1e+2`, `3.16e+1`, `5e-3`.
#[must_use]
pub fn format_scientific(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let raw = format!("{value:e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => raw,
    }
}

/// Labels a logarithmic-axis tick only when it sits within [`DECADE_BAND`]
/// decades above an integer power of ten, in scientific notation; every other
/// tick gets the empty string. Non-positive input yields the empty string.
///
/// The log ladder is dense, so unfiltered labels would overwrite each other;
/// keeping the near-decade ones leaves one readable label per decade.
#[must_use]
pub fn log_decade_label(value: f64) -> String {
    if !(value > 0.0) || !value.is_finite() {
        return String::new();
    }
    let x = value.log10() + DECADE_EPSILON;
    if (x - x.floor()).abs() < DECADE_BAND {
        format_scientific(value)
    } else {
        String::new()
    }
}

/// How an axis turns tick values into label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickLabelPolicy {
    /// `%g`-style labels rounded to significant digits.
    General { significant_digits: usize },
    /// Scientific notation for every tick.
    Scientific,
    /// Scientific labels on near-decade ticks, empty strings elsewhere.
    LogDecades,
}

impl TickLabelPolicy {
    #[must_use]
    pub fn label(self, value: f64) -> String {
        match self {
            Self::General { significant_digits } => format_general(value, significant_digits),
            Self::Scientific => format_scientific(value),
            Self::LogDecades => log_decade_label(value),
        }
    }
}

impl Default for TickLabelPolicy {
    fn default() -> Self {
        Self::General {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }
}

fn trim_trailing_zeros(mut text: String) -> String {
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}
