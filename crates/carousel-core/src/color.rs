//! HSL helpers shared by the background gradient and the TV materials.

use glam::Vec3;

/// Convert HSL (hue in degrees, any range; saturation/lightness in 0..=1) to linear-ish RGB.
///
/// The hue wraps the same way CSS `hsl()` does, so negative or >360 hues are fine.
pub fn hsl_to_rgb(hue_deg: f32, saturation: f32, lightness: f32) -> Vec3 {
    let h = hue_deg.rem_euclid(360.0) / 60.0;
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    Vec3::new(r + m, g + m, b + m)
}

/// sRGB-encoded channel to linear, for colours written into an sRGB render target.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn srgb_to_linear_vec3(rgb: Vec3) -> Vec3 {
    Vec3::new(
        srgb_to_linear(rgb.x),
        srgb_to_linear(rgb.y),
        srgb_to_linear(rgb.z),
    )
}

/// Format a number the way a CSS string expects it: integers without a
/// fractional part, everything else with at most two decimals.
pub fn css_number(v: f32) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        let s = format!("{:.2}", rounded);
        s.trim_end_matches('0').to_string()
    }
}
