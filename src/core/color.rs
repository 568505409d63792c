//! Normalisierung von Farbwerten für Farbwähler im Style-Editor.

use regex::Regex;
use std::sync::LazyLock;

/// Fallback für nicht lesbare Farbwerte.
pub const FALLBACK_COLOR: &str = "#000000";

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("statisches Regex-Pattern ist gültig"));

/// Normalisiert einen Farbwert auf `#rrggbb`.
///
/// - `#...` wird unverändert übernommen
/// - `rgb(...)` / `rgba(...)`: die ersten drei Zahlen werden als zweistellige Hex-Werte formatiert
/// - alles andere ergibt `#000000`
pub fn normalize_color(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with('#') {
        return trimmed.to_string();
    }
    if trimmed.starts_with("rgb") {
        let channels: Vec<u8> = NUMBER_RE
            .find_iter(trimmed)
            .take(3)
            // überlange Zahl → 255
            .map(|m| m.as_str().parse::<u32>().map_or(255, |v| v.min(255)) as u8)
            .collect();
        if let [r, g, b] = channels[..] {
            return format_hex_rgb([r, g, b]);
        }
        log::debug!("Farbwert mit weniger als drei Kanälen: '{}'", input);
    }
    FALLBACK_COLOR.to_string()
}

/// Formatiert RGB-Kanäle als `#rrggbb`.
pub fn format_hex_rgb([r, g, b]: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Liest `#rgb` oder `#rrggbb` in RGB-Kanäle ein.
pub fn parse_hex_rgb(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.trim().strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => {
            let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            Some([channel(0)?, channel(2)?, channel(4)?])
        }
        3 => {
            let channel = |i: usize| {
                u8::from_str_radix(&digits[i..i + 1], 16)
                    .ok()
                    .map(|v| v * 17)
            };
            Some([channel(0)?, channel(1)?, channel(2)?])
        }
        _ => None,
    }
}
