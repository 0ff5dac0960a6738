//! Colors, hex parsing, and straight-alpha RGBA8 pixel ops for icon tinting.

use core::fmt;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use num_traits::Float as _;

/// sRGB color with straight (non-premultiplied) alpha.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// White, fully opaque.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Black, fully opaque.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Mid gray, fully opaque.
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    /// Material Design blue 700.
    pub const MATERIAL_BLUE: Color = Color::rgb(25, 118, 210);
    /// Transparent black.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a packed `0xRRGGBB` value. Upper bits are ignored.
    pub const fn from_rgb_u32(v: u32) -> Self {
        Self::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    /// Same RGB with alpha `round(clamp01(opacity) * 255)`.
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self {
            a: opacity_to_alpha(opacity),
            ..self
        }
    }

    /// Same RGB, fully opaque.
    pub const fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }

    /// Alpha as a fraction in `0.0..=1.0`.
    pub fn opacity(self) -> f32 {
        self.a as f32 / 255.0
    }

    /// Parse `RRGGBB` or `AARRGGBB` hex, with optional `#`, `0x` or `0X` prefix.
    ///
    /// Note the 8-digit form carries alpha *first*.
    pub fn parse_hex(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        let bytes = hex.as_bytes();
        if !bytes.iter().all(u8::is_ascii_hexdigit) {
            log::debug!("rejecting hex color {s:?}: non-hex digit");
            return Err(ColorError::InvalidDigit);
        }
        match bytes.len() {
            6 => Ok(Self::rgb(
                parse_byte(bytes[0], bytes[1])?,
                parse_byte(bytes[2], bytes[3])?,
                parse_byte(bytes[4], bytes[5])?,
            )),
            8 => Ok(Self::rgba(
                parse_byte(bytes[2], bytes[3])?,
                parse_byte(bytes[4], bytes[5])?,
                parse_byte(bytes[6], bytes[7])?,
                parse_byte(bytes[0], bytes[1])?,
            )),
            n => {
                log::debug!("rejecting hex color {s:?}: {n} digits");
                Err(ColorError::InvalidLength(n))
            }
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

/// Hex color parse error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorError {
    /// Digit count was not 6 or 8.
    InvalidLength(usize),
    /// A character was not a hex digit.
    InvalidDigit,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(n) => write!(f, "expected #RRGGBB or #AARRGGBB, got {n} digits"),
            Self::InvalidDigit => f.write_str("invalid hex digit"),
        }
    }
}

impl core::error::Error for ColorError {}

/// Clamp to `0.0..=1.0`. NaN becomes 0.
pub fn clamp01(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// `round(clamp01(opacity) * 255)`.
pub fn opacity_to_alpha(opacity: f32) -> u8 {
    (clamp01(opacity) * 255.0).round() as u8
}

/// Paint `tint` over `px`, keeping `px`'s alpha (Porter-Duff source-atop).
///
/// Fully transparent pixels stay transparent, so an icon's silhouette keeps
/// its shape while taking on the tint color.
pub fn tint_src_atop(px: [u8; 4], tint: Color) -> [u8; 4] {
    let ta = tint.a as u32;
    let mix = |src: u8, dst: u8| -> u8 {
        ((src as u32 * ta + dst as u32 * (255 - ta) + 127) / 255) as u8
    };
    [
        mix(tint.r, px[0]),
        mix(tint.g, px[1]),
        mix(tint.b, px[2]),
        px[3],
    ]
}

/// Scale `px`'s alpha by `opacity` (source-over onto transparent).
pub fn fade(px: [u8; 4], opacity: f32) -> [u8; 4] {
    let a = (px[3] as f32 * clamp01(opacity)).round() as u8;
    [px[0], px[1], px[2], a]
}

/// [`tint_src_atop`] over an RGBA8 buffer. A trailing partial pixel is left untouched.
pub fn tint_rgba(buf: &mut [u8], tint: Color) {
    for px in buf.chunks_exact_mut(4) {
        let out = tint_src_atop([px[0], px[1], px[2], px[3]], tint);
        px.copy_from_slice(&out);
    }
}

/// [`fade`] over an RGBA8 buffer.
pub fn fade_rgba(buf: &mut [u8], opacity: f32) {
    if opacity >= 0.999 {
        return;
    }
    for px in buf.chunks_exact_mut(4) {
        let out = fade([px[0], px[1], px[2], px[3]], opacity);
        px.copy_from_slice(&out);
    }
}

fn hex_val(ch: u8) -> Result<u8, ColorError> {
    match ch {
        b'0'..=b'9' => Ok(ch - b'0'),
        b'a'..=b'f' => Ok(ch - b'a' + 10),
        b'A'..=b'F' => Ok(ch - b'A' + 10),
        _ => Err(ColorError::InvalidDigit),
    }
}

fn parse_byte(hi: u8, lo: u8) -> Result<u8, ColorError> {
    Ok(hex_val(hi)? << 4 | hex_val(lo)?)
}
