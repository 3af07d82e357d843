//! Pace rendering for table output.

/// Render seconds-per-unit as `M:SS`.
///
/// Values that are zero, negative, or non-finite mean no pace could be
/// computed for the window and render as `"-"`. The remainder is rounded to
/// the nearest whole second; a remainder that rounds up to a full minute
/// carries into the minutes so `119.5` renders `"2:00"` and never `"1:60"`.
pub fn format_pace(seconds_per_unit: f64) -> String {
    if !seconds_per_unit.is_finite() || seconds_per_unit <= 0.0 {
        return "-".to_string();
    }

    let mut minutes = (seconds_per_unit / 60.0).floor() as u64;
    let mut rest = (seconds_per_unit - minutes as f64 * 60.0).round() as u64;
    if rest == 60 {
        minutes += 1;
        rest = 0;
    }

    format!("{minutes}:{rest:02}")
}
