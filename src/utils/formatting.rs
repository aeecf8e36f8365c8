// src/utils/formatting.rs

/// Formats `value` in C-style scientific notation: `precision` digits after
/// the point and a signed exponent of at least two digits (`1.23450e+03`).
///
/// Rust's `{:e}` writes `1.23450e3`, which Fortran-style readers downstream
/// do not always accept.
pub fn format_scientific(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let rust_style = format!("{:.*e}", precision, value);
    let (mantissa, exponent) = match rust_style.split_once('e') {
        Some(parts) => parts,
        None => return rust_style,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.abs())
}

/// `format_scientific` right-aligned in a field of `width` characters.
pub fn format_scientific_width(value: f64, width: usize, precision: usize) -> String {
    format!("{:>width$}", format_scientific(value, precision), width = width)
}

/// Fixed-point, right-aligned in a field of `width` characters.
pub fn format_fixed_width(value: f64, width: usize, precision: usize) -> String {
    format!("{:>width$.precision$}", value, width = width, precision = precision)
}
