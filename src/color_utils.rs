/// Colour parsing and formatting for plot styling
use palette::Srgba;

/// Parse a hex color string into an sRGB colour
/// Accepts:
/// - "transparent" => (0, 0, 0, 0)
/// - #RRGGBB or RRGGBB => (r, g, b, 255)
/// - #RRGGBBAA or RRGGBBAA => (r, g, b, a)
///
/// Used as a clap value parser, hence the `String` error.
pub fn parse_color_result(color_str: &str) -> Result<Srgba<u8>, String> {
    if color_str.eq_ignore_ascii_case("transparent") {
        return Ok(Srgba::new(0, 0, 0, 0));
    }

    let trimmed = color_str.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !hex.is_ascii() {
        return Err(format!("Invalid colour '{color_str}'"));
    }

    let component = |range: std::ops::Range<usize>, name: &str| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| format!("Invalid hex digit in {name} component"))
    };

    match hex.len() {
        6 => Ok(Srgba::new(
            component(0..2, "R")?,
            component(2..4, "G")?,
            component(4..6, "B")?,
            255,
        )),
        8 => Ok(Srgba::new(
            component(0..2, "R")?,
            component(2..4, "G")?,
            component(4..6, "B")?,
            component(6..8, "A")?,
        )),
        _ => Err(format!(
            "Expected 6 or 8 hex digits (RRGGBB or RRGGBBAA), got {}",
            hex.len()
        )),
    }
}

/// Format the RGB part as an SVG colour, e.g. "#7ac36a"
pub fn to_svg_hex(color: Srgba<u8>) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        color.color.red, color.color.green, color.color.blue
    )
}

/// Alpha as an SVG opacity in [0, 1]
pub fn to_svg_opacity(color: Srgba<u8>) -> f64 {
    f64::from(color.alpha) / 255.0
}

/// Check if a colour is fully transparent
pub fn is_transparent(color: Srgba<u8>) -> bool {
    color.alpha == 0
}
