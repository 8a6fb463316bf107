// crates/citygeo-core/src/population.rs

//! Cleaning of free-text `population` tags.
//!
//! OSM population values show up as `"1,234,567"`, `"12,5"`, `"ca. 40000"`,
//! `"٣٥٠٠٠"` and worse. [`parse_population`] reduces them to a best-effort
//! integer and never fails; [`parse_population_checked`] exposes the failure.

use thiserror::Error;
use tracing::warn;

/// The cleaned string could not be read as a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not parse population value: {raw:?}")]
pub struct PopulationParseError {
    pub raw: String,
    pub cleaned: String,
}

/// Parse a population tag, returning 0 on failure.
///
/// Cleaning rules:
/// 1. Keep only decimal digits, `,` and `.`.
/// 2. A single comma with no period is a decimal comma (`"12,5"` → `12.5`).
///    Otherwise commas are thousands separators and are dropped
///    (`"1,234,567"`, `"1,234.5"`).
/// 3. Parse as a float and truncate.
///
/// Note: a lone period is always read as a decimal point, so `"1.234"`
/// gives `1`, not `1234`. That reading is kept as-is for compatibility
/// with existing datasets.
///
/// Empty input yields 0 silently. Anything else that fails to parse is
/// logged as a warning and yields 0.
///
/// # Examples
/// ```rust
/// use citygeo_core::population::parse_population;
///
/// assert_eq!(parse_population("1,234,567"), 1_234_567);
/// assert_eq!(parse_population("12,5"), 12);
/// assert_eq!(parse_population("abc"), 0);
/// ```
pub fn parse_population(raw: &str) -> u64 {
    if raw.is_empty() {
        return 0;
    }
    match parse_population_checked(raw) {
        Ok(n) => n,
        Err(e) => {
            warn!(raw = %e.raw, cleaned = %e.cleaned, "could not parse population value");
            0
        }
    }
}

/// Fallible form of [`parse_population`].
pub fn parse_population_checked(raw: &str) -> Result<u64, PopulationParseError> {
    let cleaned = clean(raw);
    let decimal_comma = cleaned.matches(',').count() == 1 && !cleaned.contains('.');
    let normalized = if decimal_comma {
        cleaned.replace(',', ".")
    } else {
        cleaned.replace(',', "")
    };

    match normalized.parse::<f64>() {
        // `as` saturates, and the cleaned string can't carry a sign
        Ok(v) if v.is_finite() => Ok(v.trunc() as u64),
        _ => Err(PopulationParseError {
            raw: raw.to_owned(),
            cleaned: normalized,
        }),
    }
}

fn clean(raw: &str) -> String {
    raw.chars()
        .filter_map(|c| match c {
            ',' | '.' => Some(c),
            _ => decimal_digit(c),
        })
        .collect()
}

/// Fold a decimal digit from the scripts common in our source regions to ASCII.
///
/// Only the scripts listed in `ZEROS` are recognised. Digits from any other
/// script (Bengali, Thai, ...) are dropped like any other noise character.
fn decimal_digit(c: char) -> Option<char> {
    const ZEROS: [u32; 5] = [
        '0' as u32,
        0x0660, // Arabic-Indic
        0x06F0, // Extended Arabic-Indic (Persian, Urdu)
        0x0966, // Devanagari
        0xFF10, // Fullwidth
    ];
    let cp = c as u32;
    ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&cp))
        .and_then(|&zero| char::from_digit(cp - zero, 10))
}
