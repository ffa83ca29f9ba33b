//! Output formatting helpers.

use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use colored::Colorize;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Human,
    Json,
}

/// Print a success message. Suppressed in JSON mode.
pub fn success(format: Format, msg: &str) {
    if format == Format::Human {
        println!("{} {}", "✓".green(), msg);
    }
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a dimmed note on stderr.
pub fn note(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print `value` as JSON, or hand it to `human` for text output.
pub fn emit<T: Serialize>(format: Format, value: &T, human: impl FnOnce(&T)) -> Result<()> {
    match format {
        Format::Json => json(value),
        Format::Human => {
            human(value);
            Ok(())
        }
    }
}

/// Render seconds since the epoch as RFC 3339. Zero means never.
pub fn timestamp(secs: f64) -> String {
    if secs <= 0.0 {
        return "-".to_string();
    }
    DateTime::<Utc>::from_timestamp(secs.trunc() as i64, (secs.fract() * 1e9) as u32)
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| secs.to_string())
}

/// Like [`timestamp`] for servers that send the number as a string.
pub fn timestamp_str(secs: &str) -> String {
    secs.parse::<f64>()
        .map(timestamp)
        .unwrap_or_else(|_| secs.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps() {
        assert_eq!(timestamp(0.0), "-");
        assert_eq!(timestamp(1594251513.6553159), "2020-07-08T23:38:33Z");
        assert_eq!(timestamp_str("1594251513.6553159"), "2020-07-08T23:38:33Z");
        assert_eq!(timestamp_str("soon"), "soon");
    }
}
