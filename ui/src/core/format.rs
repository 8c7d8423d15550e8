//! Formatting helpers for inline styles and wallet labels.

/// CSS pixel length, trimming a redundant fractional part (`184px`, `67.5px`).
pub fn px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}px")
    } else {
        format!("{value}px")
    }
}

/// Shorten a hex account address to `0x1234…abcd`. Short inputs pass through.
pub fn short_address(address: &str) -> String {
    let address = address.trim();
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}
