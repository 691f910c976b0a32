use palette::{Hsl, IntoColor, Srgb};

use crate::error::ColorError;

// ---------------------------------------------------------------------------
// Color-spec parsing: mineral color string → Srgb
// ---------------------------------------------------------------------------

/// Resolve a mineral color spec to an sRGB triple.
///
/// Accepts CSS-style color names (`"goldenrod"`, case-insensitive) and
/// `#rrggbb` hex strings.
pub fn parse_color(spec: &str) -> Result<Srgb<u8>, ColorError> {
    let spec = spec.trim();
    if let Some(hex) = spec.strip_prefix('#') {
        return parse_hex(hex, spec);
    }
    palette::named::from_str(&spec.to_ascii_lowercase())
        .ok_or_else(|| ColorError::UnknownName(spec.to_string()))
}

fn parse_hex(hex: &str, original: &str) -> Result<Srgb<u8>, ColorError> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(original.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).expect("validated hex digits")
    };
    Ok(Srgb::new(channel(0..2), channel(2..4), channel(4..6)))
}

// ---------------------------------------------------------------------------
// Series palette for chart lines
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn series_palette(n: usize) -> Vec<Srgb<u8>> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n.max(1) as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            rgb.into_format()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("goldenrod", (218, 165, 32); "named lowercase")]
    #[test_case("Goldenrod", (218, 165, 32); "named mixed case")]
    #[test_case("black", (0, 0, 0); "named black")]
    #[test_case("#3a7bd5", (0x3a, 0x7b, 0xd5); "hex")]
    #[test_case("  white ", (255, 255, 255); "surrounding whitespace")]
    fn resolves_color_specs(spec: &str, expected: (u8, u8, u8)) {
        let rgb = parse_color(spec).unwrap();
        assert_eq!((rgb.red, rgb.green, rgb.blue), expected);
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(matches!(
            parse_color("not-a-color"),
            Err(ColorError::UnknownName(_))
        ));
    }

    #[test_case("#ff00"; "too short")]
    #[test_case("#gggggg"; "non hex digits")]
    fn bad_hex_is_rejected(spec: &str) {
        assert!(matches!(parse_color(spec), Err(ColorError::InvalidHex(_))));
    }

    #[test]
    fn palette_has_distinct_entries() {
        let colors = series_palette(4);
        assert_eq!(colors.len(), 4);
        assert_ne!(colors[0], colors[2]);
    }
}
