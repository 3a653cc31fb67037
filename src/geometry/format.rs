/// Areas at or above this many square meters are shown in hectares
pub const HECTARE_THRESHOLD_M2: f64 = 10_000.0;

/// Lengths at or above this many meters are shown in kilometers
pub const KILOMETER_THRESHOLD_M: f64 = 1_000.0;

/// Format a number with a fixed count of decimals, rounding half away from
/// zero, and grouping the integer part in threes.
pub fn format_number(value: f64, decimals: u32, decimal_sep: &str, thousands_sep: &str) -> String {
    let scale = 10u64.pow(decimals);
    let units = (value.abs() * scale as f64).round() as u64;
    let whole = units / scale;
    let frac = units % scale;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(thousands_sep);
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && units != 0 { "-" } else { "" };
    if decimals == 0 {
        format!("{sign}{grouped}")
    } else {
        format!(
            "{sign}{grouped}{decimal_sep}{frac:0width$}",
            width = decimals as usize
        )
    }
}

/// Display string for an area in square meters.
///
/// Missing, zero and NaN areas render as `-`. Large areas switch to hectares
/// with a decimal comma; smaller ones are whole square meters with dot
/// thousands separators, e.g. `5.000 m²`, `2,50 ha`.
pub fn format_area(area: Option<f64>) -> String {
    let area = match area {
        Some(a) if a != 0.0 && !a.is_nan() => a,
        _ => return "-".to_string(),
    };

    if area >= HECTARE_THRESHOLD_M2 {
        let hectares = area / HECTARE_THRESHOLD_M2;
        format!("{} ha", format_number(hectares, 2, ",", "."))
    } else {
        format!("{} m²", format_number(area, 0, ",", "."))
    }
}

/// Display string for a length in meters, e.g. `500 m`, `1.50 km`.
pub fn format_length(length: f64) -> String {
    if length >= KILOMETER_THRESHOLD_M {
        format!(
            "{} km",
            format_number(length / KILOMETER_THRESHOLD_M, 2, ".", "")
        )
    } else {
        format!("{} m", format_number(length, 0, ".", ""))
    }
}
