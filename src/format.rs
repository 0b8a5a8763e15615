//! Text rendering of coordinates and multipliers.
//!
//! Numbers follow the ECMAScript `Number` formatting rules so that rendered
//! quantities read the same across ports: shortest round-trip digits, with
//! exponential notation (explicit exponent sign) outside `[1e-6, 1e21)`.

use std::fmt;

use crate::unit::Unit;

/// How a single real number is turned into text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NumberFormat {
    /// Shortest digits that round-trip.
    #[default]
    Shortest,
    /// Fixed number of digits after the decimal point.
    Fixed(usize),
    /// Total number of significant digits.
    Precision(usize),
    /// Exponential notation with this many digits after the point.
    Exponential(usize),
}

impl NumberFormat {
    pub fn format(self, x: f64) -> String {
        if !x.is_finite() {
            return non_finite(x);
        }
        match self {
            Self::Shortest => shortest(x),
            Self::Fixed(digits) => {
                if x.abs() >= 1e21 {
                    shortest(x)
                } else {
                    format!("{:.*}", digits, x)
                }
            }
            Self::Precision(precision) => to_precision(x, precision.max(1)),
            Self::Exponential(digits) => signed_exponent(&format!("{:.*e}", digits, x)),
        }
    }
}

fn non_finite(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x > 0.0 {
        "Infinity".to_string()
    } else {
        "-Infinity".to_string()
    }
}

fn shortest(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    let abs = x.abs();
    if (1e-6..1e21).contains(&abs) {
        format!("{x}")
    } else {
        signed_exponent(&format!("{x:e}"))
    }
}

fn to_precision(x: f64, precision: usize) -> String {
    let sci = format!("{:.*e}", precision - 1, x);
    let exponent = sci
        .rsplit_once('e')
        .and_then(|(_, e)| e.parse::<i64>().ok())
        .unwrap_or(0);
    if exponent < -6 || exponent >= precision as i64 {
        signed_exponent(&sci)
    } else {
        let decimals = (precision as i64 - 1 - exponent).max(0) as usize;
        format!("{:.*}", decimals, x)
    }
}

/// Rust renders `1e21`; ECMAScript renders `1e+21`.
fn signed_exponent(s: &str) -> String {
    match s.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => s.to_string(),
    }
}

/// Renders terms `c*label` joined by signs, skipping zero coordinates.
///
/// A coefficient of magnitude one shows only its label, and the scalar label `1`
/// is never written after a number. A non-identity unit is appended in compact form.
pub(crate) fn write_coordinates<W: fmt::Write>(
    out: &mut W,
    coords: &[f64],
    labels: &[&str],
    style: NumberFormat,
    uom: Option<&Unit>,
) -> fmt::Result {
    let mut empty = true;
    for (&c, &label) in coords.iter().zip(labels) {
        if c == 0.0 {
            continue;
        }
        // NaN carries no sign, whatever its sign bit says.
        if c < 0.0 {
            out.write_char('-')?;
        } else if !empty {
            out.write_char('+')?;
        }
        empty = false;
        let n = c.abs();
        if n == 1.0 {
            out.write_str(label)?;
        } else {
            out.write_str(&style.format(n))?;
            if label != "1" {
                write!(out, "*{label}")?;
            }
        }
    }
    if empty {
        return out.write_char('0');
    }
    match uom {
        Some(u) if !u.is_one() => write!(out, " {}", u.format(NumberFormat::Shortest, true)),
        _ => Ok(()),
    }
}
