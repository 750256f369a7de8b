use chrono::{SecondsFormat, Utc};
use std::time::Instant;

/// Runs `f` and returns its result with the elapsed time in milliseconds,
/// rounded to two decimal places.
pub fn timed<T, F>(f: F) -> (T, f64)
where
    F: FnOnce() -> T,
{
    let started = Instant::now();
    let result = f();
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    (result, (elapsed_ms * 100.0).round() / 100.0)
}

/// Timestamp no mesmo formato do `toISOString()`: `2025-03-01T12:00:00.000Z`
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
