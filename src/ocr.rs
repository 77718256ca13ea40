// Thin wrapper around the tesseract binary plus text extraction helpers for
// the numeric readouts (pot and stack amounts).

use std::fs;
use std::process::Command;

use anyhow::{bail, Context, Result};
use image::DynamicImage;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::VisionConfig;

static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    // "1,5" or "12.50" or "1 234.5", optional currency markers around it.
    Regex::new(r"(\d[\d\s]*(?:[.,]\d+)?)").unwrap()
});

/// Runs tesseract over an image crop and returns raw stdout.
pub fn extract_text(img: &DynamicImage, config: &VisionConfig, psm: &str, whitelist: &str) -> Result<String> {
    let temp_path = std::env::temp_dir().join(format!("plutos_ocr_{}.png", std::process::id()));
    img.save(&temp_path)
        .with_context(|| format!("failed to save OCR temp image {}", temp_path.display()))?;

    let output = Command::new(&config.tesseract_path)
        .arg(&temp_path)
        .arg("stdout")
        .arg("--psm")
        .arg(psm)
        .arg("-c")
        .arg(format!("tessedit_char_whitelist={whitelist}"))
        .output()
        .context("failed to run tesseract")?;

    let _ = fs::remove_file(&temp_path);

    if !output.status.success() {
        bail!(
            "tesseract failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// OCR pass for a single rank glyph.
pub fn read_rank_text(img: &DynamicImage, config: &VisionConfig) -> Result<String> {
    extract_text(img, config, &config.rank_psm, &config.rank_whitelist)
}

/// OCR pass for a numeric readout, parsed into big blinds.
pub fn read_amount(img: &DynamicImage, config: &VisionConfig) -> Result<Option<f64>> {
    let text = extract_text(img, config, &config.number_psm, &config.number_whitelist)?;
    Ok(parse_amount(&text))
}

/// Parses the first numeric amount in OCR output. Some clients print the
/// decimal separator as a comma.
pub fn parse_amount(text: &str) -> Option<f64> {
    let caps = AMOUNT_RE.captures(text)?;
    let raw: String = caps
        .get(1)?
        .as_str()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    raw.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_plain() {
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount("1500"), Some(1500.0));
    }

    #[test]
    fn test_parse_amount_comma_decimal() {
        assert_eq!(parse_amount("1,5"), Some(1.5));
        assert_eq!(parse_amount("Pot: 22,75 BB"), Some(22.75));
    }

    #[test]
    fn test_parse_amount_with_spaces() {
        assert_eq!(parse_amount("1 250.5"), Some(1250.5));
    }

    #[test]
    fn test_parse_amount_garbage() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("no digits here"), None);
    }
}
