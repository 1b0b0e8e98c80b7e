use color_eyre::eyre::Result;
use serde::Serialize;
use tinta_theme::Rgb;

use crate::config::OutputFormat;

/// A two-cell block in 24-bit ANSI color.
pub fn swatch(rgb: Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m██\x1b[0m", rgb.r, rgb.g, rgb.b)
}

pub fn to_json<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let json = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Compact => serde_json::to_string(value)?,
    };
    Ok(json)
}

pub fn print_json<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    println!("{}", to_json(value, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swatch_escape() {
        assert_eq!(
            swatch(Rgb::new(59, 130, 246)),
            "\x1b[38;2;59;130;246m██\x1b[0m"
        );
    }

    #[test]
    fn test_json_formats() {
        let value = serde_json::json!({"a": 1});
        assert_eq!(to_json(&value, OutputFormat::Compact).unwrap(), r#"{"a":1}"#);
        assert_eq!(
            to_json(&value, OutputFormat::Pretty).unwrap(),
            "{\n  \"a\": 1\n}"
        );
    }
}
