//! RGBA colors and CSS color string parsing.

use regex::Regex;
use std::sync::OnceLock;

/// An RGBA color with all components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

fn rgb_func_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^rgb(a?)\(\s*([0-9]*\.?[0-9]+)\s*,\s*([0-9]*\.?[0-9]+)\s*,\s*([0-9]*\.?[0-9]+)\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
        )
        .unwrap()
    })
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Color { r, g, b, a }
    }

    /// Parses a CSS color string: `#rgb`, `#rrggbb`, `#rrggbbaa`,
    /// `rgb(r, g, b)`, `rgba(r, g, b, a)`, or a basic named color.
    /// Returns `None` on anything else.
    pub fn parse(input: &str) -> Option<Color> {
        let s = input.trim().to_ascii_lowercase();
        if let Some(hex) = s.strip_prefix('#') {
            return Color::parse_hex(hex);
        }
        if let Some(caps) = rgb_func_regex().captures(&s) {
            let has_alpha = !caps[1].is_empty();
            let r: f64 = caps[2].parse().ok()?;
            let g: f64 = caps[3].parse().ok()?;
            let b: f64 = caps[4].parse().ok()?;
            let a: f64 = match caps.get(5) {
                Some(m) => {
                    if !has_alpha {
                        return None;
                    }
                    m.as_str().parse().ok()?
                }
                None => {
                    if has_alpha {
                        return None;
                    }
                    1.0
                }
            };
            if r > 255.0 || g > 255.0 || b > 255.0 || a > 1.0 {
                return None;
            }
            return Some(Color::new(r / 255.0, g / 255.0, b / 255.0, a));
        }
        named_color(&s)
    }

    fn parse_hex(hex: &str) -> Option<Color> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => {
                let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
                Some(Color::new(
                    f64::from(r * 17) / 255.0,
                    f64::from(g * 17) / 255.0,
                    f64::from(b * 17) / 255.0,
                    1.0,
                ))
            }
            6 => Some(Color::new(
                f64::from(byte(0)?) / 255.0,
                f64::from(byte(2)?) / 255.0,
                f64::from(byte(4)?) / 255.0,
                1.0,
            )),
            8 => Some(Color::new(
                f64::from(byte(0)?) / 255.0,
                f64::from(byte(2)?) / 255.0,
                f64::from(byte(4)?) / 255.0,
                f64::from(byte(6)?) / 255.0,
            )),
            _ => None,
        }
    }
}

fn named_color(name: &str) -> Option<Color> {
    let rgb = |r: u8, g: u8, b: u8| {
        Some(Color::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            1.0,
        ))
    };
    match name {
        "black" => rgb(0, 0, 0),
        "silver" => rgb(192, 192, 192),
        "gray" | "grey" => rgb(128, 128, 128),
        "white" => rgb(255, 255, 255),
        "maroon" => rgb(128, 0, 0),
        "red" => rgb(255, 0, 0),
        "purple" => rgb(128, 0, 128),
        "fuchsia" | "magenta" => rgb(255, 0, 255),
        "green" => rgb(0, 128, 0),
        "lime" => rgb(0, 255, 0),
        "olive" => rgb(128, 128, 0),
        "yellow" => rgb(255, 255, 0),
        "navy" => rgb(0, 0, 128),
        "blue" => rgb(0, 0, 255),
        "teal" => rgb(0, 128, 128),
        "aqua" | "cyan" => rgb(0, 255, 255),
        "orange" => rgb(255, 165, 0),
        "transparent" => Some(Color::new(0.0, 0.0, 0.0, 0.0)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex() {
        assert_eq!(Color::parse("#ff0000"), Some(Color::new(1.0, 0.0, 0.0, 1.0)));
        assert_eq!(Color::parse("#f00"), Some(Color::new(1.0, 0.0, 0.0, 1.0)));
        assert_eq!(
            Color::parse("#00ff0080"),
            Some(Color::new(0.0, 1.0, 0.0, 128.0 / 255.0))
        );
    }

    #[test]
    fn parses_functional_notation() {
        assert_eq!(
            Color::parse("rgb(255, 0, 0)"),
            Some(Color::new(1.0, 0.0, 0.0, 1.0))
        );
        assert_eq!(
            Color::parse("rgba(0, 0, 255, 0.5)"),
            Some(Color::new(0.0, 0.0, 1.0, 0.5))
        );
        // rgb() takes exactly three components, rgba() exactly four.
        assert_eq!(Color::parse("rgb(0, 0, 255, 0.5)"), None);
        assert_eq!(Color::parse("rgba(0, 0, 255)"), None);
    }

    #[test]
    fn parses_named_colors() {
        assert_eq!(Color::parse("white"), Some(Color::new(1.0, 1.0, 1.0, 1.0)));
        assert_eq!(Color::parse("Red"), Some(Color::new(1.0, 0.0, 0.0, 1.0)));
        assert_eq!(
            Color::parse("transparent"),
            Some(Color::new(0.0, 0.0, 0.0, 0.0))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Color::parse("not a color"), None);
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("#gggggg"), None);
        assert_eq!(Color::parse("rgb(300, 0, 0)"), None);
    }
}
