//! Formatting utilities used for the console reports.

use unicode_width::UnicodeWidthStr;

pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", " ".repeat(fill), s)
}

/// Split whole seconds into (hours, minutes, seconds) with floor division,
/// so negative totals keep `h * 3600 + m * 60 + s == secs` with `0 <= m, s < 60`.
pub fn split_hms(secs: i64) -> (i64, i64, i64) {
    let hours = secs.div_euclid(3600);
    let rest = secs.rem_euclid(3600);
    (hours, rest / 60, rest % 60)
}

/// es: 3661 → "1 Hours 1 Minutes 1 Seconds"
pub fn secs2readable(secs: i64) -> String {
    let (h, m, s) = split_hms(secs);
    format!("{} Hours {} Minutes {} Seconds", h, m, s)
}

/// Render a trip duration without a trailing ".0" for whole seconds.
pub fn format_duration_cell(secs: f64) -> String {
    if secs.fract() == 0.0 {
        format!("{:.0}", secs)
    } else {
        format!("{}", secs)
    }
}
