// File: crates/chart-compose/src/format.rs
// Summary: Text formatting helpers for captions and legend stats (durations, unit prefixes, times).

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

const UNITS: [(i64, &str); 5] = [
    (7 * 24 * 3_600_000, "w"),
    (24 * 3_600_000, "d"),
    (3_600_000, "h"),
    (60_000, "m"),
    (1_000, "s"),
];

/// Short duration using the largest unit that divides it evenly, e.g. `3h`, `90s`, `250ms`.
pub fn duration(millis: i64) -> String {
    if millis == 0 {
        return "0s".to_string();
    }
    for (size, suffix) in UNITS {
        if millis % size == 0 {
            return format!("{}{}", millis / size, suffix);
        }
    }
    format!("{millis}ms")
}

const BIG_PREFIXES: [(f64, &str); 5] = [
    (1e15, "P"),
    (1e12, "T"),
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "k"),
];

const SMALL_PREFIXES: [(f64, &str); 3] = [(1e-3, "m"), (1e-6, "u"), (1e-9, "n")];

/// Compact count, e.g. `950`, `12.3k`, `4.0M`.
pub fn compact_count(n: u64) -> String {
    if n < 1_000 {
        return n.to_string();
    }
    compact_value(n as f64)
}

/// Compact decimal value with a unit prefix and three significant digits.
pub fn compact_value(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Inf".to_string() } else { "-Inf".to_string() };
    }
    let abs = v.abs();
    if abs == 0.0 {
        return "0".to_string();
    }
    if let Some((scale, prefix)) = BIG_PREFIXES.iter().find(|(s, _)| abs >= *s) {
        return format!("{}{}", significant(v / scale), prefix);
    }
    if abs >= 1.0 {
        return significant(v);
    }
    match SMALL_PREFIXES.iter().find(|(s, _)| abs >= *s) {
        Some((scale, prefix)) => format!("{}{}", significant(v / scale), prefix),
        None => format!("{v:.2e}"),
    }
}

// |v| is in [1, 1000) here.
fn significant(v: f64) -> String {
    let abs = v.abs();
    let digits = if abs >= 100.0 {
        0
    } else if abs >= 10.0 {
        1
    } else {
        2
    };
    let s = format!("{v:.digits$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// End-of-frame timestamp in the configured zone, e.g. `2024-03-01T12:00 UTC`.
pub fn end_time(t: DateTime<Utc>, tz: Tz) -> String {
    t.with_timezone(&tz).format("%Y-%m-%dT%H:%M %Z").to_string()
}

/// Short clock label for the time axis, e.g. `14:05`.
pub fn time_label(t: DateTime<Utc>, tz: Tz) -> String {
    t.with_timezone(&tz).format("%H:%M").to_string()
}
