//! Command handlers. Each returns the rendered output instead of printing it.

pub(crate) mod keys;
pub(crate) mod multikey;

use anyhow::Result;
use serde_json::{Map, Value};

use crate::config::OutputFormat;

/// Renders `(name, value)` pairs in the requested format.
fn render(fields: &[(&str, String)], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let map: Map<String, Value> = fields
                .iter()
                .map(|(name, value)| ((*name).to_string(), Value::String(value.clone())))
                .collect();
            Ok(serde_json::to_string_pretty(&Value::Object(map))?)
        }
        OutputFormat::Text => Ok(fields
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Parses a hex argument, tolerating surrounding whitespace and a `0x` prefix.
fn parse_hex(arg: &str) -> Result<Vec<u8>> {
    let arg = arg.trim();
    let arg = arg.strip_prefix("0x").unwrap_or(arg);
    Ok(hex::decode(arg)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_text() {
        let fields = [("a", "1".to_string()), ("b", "2".to_string())];
        assert_eq!(render(&fields, OutputFormat::Text).unwrap(), "a: 1\nb: 2");
    }

    #[test]
    fn renders_json() {
        let fields = [("a", "1".to_string())];
        let rendered = render(&fields, OutputFormat::Json).unwrap();
        let json: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["a"], "1");
    }

    #[test]
    fn parses_prefixed_hex() {
        assert_eq!(parse_hex(" 0x0a0b ").unwrap(), vec![0x0a, 0x0b]);
        assert!(parse_hex("xyz").is_err());
    }
}
