//! Formatting utilities used by the statistics reports.

use unicode_width::UnicodeWidthStr;

const NANOS_PER_SEC: i128 = 1_000_000_000;
const SECS_PER_DAY: i128 = 86_400;

/// Render a signed nanosecond span as `D days HH:MM:SS`.
///
/// Days are floored, so the clock part is never negative; for negative
/// spans it carries an explicit sign: -1s renders as `-1 days +23:59:59`.
/// A sub-second remainder is appended with 6 digits when it is a whole
/// number of microseconds, 9 otherwise.
pub fn format_timedelta(nanos: i128) -> String {
    let day_ns = SECS_PER_DAY * NANOS_PER_SEC;
    let days = nanos.div_euclid(day_ns);
    let rest = nanos.rem_euclid(day_ns);

    let secs = rest / NANOS_PER_SEC;
    let frac = rest % NANOS_PER_SEC;
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);

    let sign = if days < 0 { "+" } else { "" };
    let mut out = format!("{} days {}{:02}:{:02}:{:02}", days, sign, h, m, s);
    if frac != 0 {
        if frac % 1000 == 0 {
            out.push_str(&format!(".{:06}", frac / 1000));
        } else {
            out.push_str(&format!(".{:09}", frac));
        }
    }
    out
}

pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}

/// Two-column `value  count` listing, values left-aligned.
pub fn format_counts(counts: &[(String, usize)]) -> String {
    let width = counts
        .iter()
        .map(|(v, _)| UnicodeWidthStr::width(v.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (value, count) in counts {
        out.push_str(&pad_right(value, width));
        out.push_str("  ");
        out.push_str(&count.to_string());
        out.push('\n');
    }
    out
}
