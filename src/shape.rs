//! Rounded rectangles, per-corner rounded paths, and layered drop shadows.
//!
//! # Example
//!
//! ```
//! use panelfit::shape::PanelStyle;
//!
//! let paint = PanelStyle::default().paint(320, 180).unwrap();
//!
//! // One translucent layer per pixel of shadow spread.
//! assert_eq!(paint.shadows.len(), 10);
//! let body = paint.body.unwrap();
//! assert_eq!((body.shape.x, body.shape.y), (10, 10));
//! assert_eq!((body.shape.width, body.shape.height), (300, 160));
//! ```

use alloc::vec::Vec;

use kurbo::{BezPath, Point, RoundedRect, Shape};

use crate::color::{Color, ColorError, clamp01, opacity_to_alpha};

/// Per-corner radii in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CornerRadii {
    pub top_left: u32,
    pub top_right: u32,
    pub bottom_right: u32,
    pub bottom_left: u32,
}

impl Default for CornerRadii {
    fn default() -> Self {
        Self::uniform(16)
    }
}

impl CornerRadii {
    /// Same radius on every corner.
    pub const fn uniform(r: u32) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }

    /// Limit each radius to half the shorter side of a `w × h` box.
    pub fn clamped(self, w: u32, h: u32) -> Self {
        let max = w.min(h) / 2;
        Self {
            top_left: self.top_left.min(max),
            top_right: self.top_right.min(max),
            bottom_right: self.bottom_right.min(max),
            bottom_left: self.bottom_left.min(max),
        }
    }
}

/// Outline of a `w × h` box with independently rounded corners.
///
/// Starts at `(tl, 0)` and runs clockwise. Each corner is a quadratic curve
/// whose control point is the box corner; a zero radius is a sharp corner.
pub fn rounded_path(w: u32, h: u32, radii: CornerRadii) -> BezPath {
    let CornerRadii {
        top_left: tl,
        top_right: tr,
        bottom_right: br,
        bottom_left: bl,
    } = radii.clamped(w, h);
    let (w, h) = (w as f64, h as f64);
    let (tl, tr, br, bl) = (tl as f64, tr as f64, br as f64, bl as f64);

    let mut p = BezPath::new();
    p.move_to((tl, 0.0));
    p.line_to((w - tr, 0.0));
    corner(&mut p, tr, (w, 0.0), (w, tr));
    p.line_to((w, h - br));
    corner(&mut p, br, (w, h), (w - br, h));
    p.line_to((bl, h));
    corner(&mut p, bl, (0.0, h), (0.0, h - bl));
    p.line_to((0.0, tl));
    corner(&mut p, tl, (0.0, 0.0), (tl, 0.0));
    p.close_path();
    p
}

fn corner(p: &mut BezPath, r: f64, ctrl: (f64, f64), end: (f64, f64)) {
    if r > 0.0 {
        p.quad_to(ctrl, end);
    } else {
        p.line_to(ctrl);
    }
}

/// Whether `(x, y)` falls inside [`rounded_path`] for the same box.
pub fn contains(w: u32, h: u32, radii: CornerRadii, x: i32, y: i32) -> bool {
    if x < 0 || y < 0 || x as i64 >= w as i64 || y as i64 >= h as i64 {
        return false;
    }
    rounded_path(w, h, radii).contains(Point::new(x as f64, y as f64))
}

/// A rounded rectangle with elliptical corners, as filled by a 2D canvas.
///
/// `arc_width`/`arc_height` are the corner ellipse *diameters*.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RoundRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub arc_width: u32,
    pub arc_height: u32,
}

impl RoundRect {
    /// Circular-cornered approximation as a kurbo shape.
    pub fn to_kurbo(&self) -> RoundedRect {
        let x0 = self.x as f64;
        let y0 = self.y as f64;
        let x1 = x0 + self.width as f64;
        let y1 = y0 + self.height as f64;
        let radius = (self.arc_width.min(self.arc_height) as f64 / 2.0)
            .min(self.width.min(self.height) as f64 / 2.0);
        RoundedRect::new(x0, y0, x1, y1, radius)
    }
}

/// A rounded rect filled with a single color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fill {
    pub shape: RoundRect,
    pub color: Color,
}

/// Everything a rounded panel paints, back to front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelPaint {
    /// Shadow layers in paint order: innermost (densest) first, each later
    /// layer one pixel wider and fainter, so alpha accumulates toward the body.
    pub shadows: Vec<Fill>,
    /// Panel body, inset by the shadow size. `None` when the shadow eats it.
    pub body: Option<Fill>,
}

/// Side insets in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Insets {
    pub top: u32,
    pub left: u32,
    pub bottom: u32,
    pub right: u32,
}

impl Insets {
    /// Same inset on all sides.
    pub const fn uniform(v: u32) -> Self {
        Self {
            top: v,
            left: v,
            bottom: v,
            right: v,
        }
    }
}

/// Rounded panel with a soft drop shadow.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelStyle {
    /// Corner ellipse width.
    pub arc_width: u32,
    /// Corner ellipse height.
    pub arc_height: u32,
    /// Shadow spread in pixels; also the panel's content inset.
    pub shadow_size: u32,
    /// Opacity of the innermost shadow layer, `0.0..=1.0`.
    pub shadow_opacity: f32,
    /// Opacity applied to `background`, `0.0..=1.0`.
    pub background_opacity: f32,
    pub shadow_color: Color,
    pub background: Color,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            arc_width: 24,
            arc_height: 24,
            shadow_size: 10,
            shadow_opacity: 0.25,
            background_opacity: 1.0,
            shadow_color: Color::BLACK,
            background: Color::WHITE,
        }
    }
}

impl PanelStyle {
    /// Set corner arc diameters.
    pub fn arc(mut self, width: u32, height: u32) -> Self {
        self.arc_width = width;
        self.arc_height = height;
        self
    }

    /// Set shadow spread and opacity (clamped to `0.0..=1.0`).
    pub fn shadow(mut self, size: u32, opacity: f32) -> Self {
        self.shadow_size = size;
        self.shadow_opacity = clamp01(opacity);
        self
    }

    /// Set shadow color. Its alpha is ignored; use the shadow opacity.
    pub fn shadow_color(mut self, color: Color) -> Self {
        self.shadow_color = color.opaque();
        self
    }

    /// Set background color and opacity (clamped to `0.0..=1.0`).
    pub fn background(mut self, color: Color, opacity: f32) -> Self {
        self.background = color.opaque();
        self.background_opacity = clamp01(opacity);
        self
    }

    /// Set background from `#RRGGBB` or `#AARRGGBB`.
    /// A translucent alpha becomes the background opacity.
    pub fn set_background_hex(&mut self, hex: &str) -> Result<(), ColorError> {
        let c = Color::parse_hex(hex)?;
        if c.a < 255 {
            self.background_opacity = c.opacity();
        }
        self.background = c.opaque();
        Ok(())
    }

    /// Set shadow color from `#RRGGBB` or `#AARRGGBB`.
    /// A translucent alpha becomes the shadow opacity.
    pub fn set_shadow_hex(&mut self, hex: &str) -> Result<(), ColorError> {
        let c = Color::parse_hex(hex)?;
        self.shadow_color = c.opaque();
        if c.a < 255 {
            self.shadow_opacity = c.opacity();
        }
        Ok(())
    }

    /// Content inset: the shadow size on every side.
    pub fn insets(&self) -> Insets {
        Insets::uniform(self.shadow_size)
    }

    /// Compute the fills for a `width × height` panel.
    ///
    /// Returns `None` if either dimension is zero.
    pub fn paint(&self, width: u32, height: u32) -> Option<PanelPaint> {
        if width == 0 || height == 0 {
            log::trace!("rounded panel {width}x{height}: nothing to paint");
            return None;
        }
        let s = self.shadow_size as i64;
        let rw = width as i64 - 2 * s;
        let rh = height as i64 - 2 * s;
        let shadow_opacity = clamp01(self.shadow_opacity);

        let mut shadows = Vec::new();
        if s > 0 && shadow_opacity > 0.0 {
            // Layers narrower than one pixel are dropped, so skip straight to
            // the first outset that has positive width and height.
            let first = first_visible_outset(rw).max(first_visible_outset(rh));
            if first < s {
                shadows.reserve((s - first) as usize);
            }
            for e in first..s {
                let i = s - e;
                let alpha = opacity_to_alpha(shadow_opacity * i as f32 / s as f32);
                let fill = round_rect(
                    s - e,
                    s - e,
                    rw + 2 * e,
                    rh + 2 * e,
                    self.arc_width as i64 + 2 * e,
                    self.arc_height as i64 + 2 * e,
                )
                .map(|shape| Fill {
                    shape,
                    color: Color {
                        a: alpha,
                        ..self.shadow_color
                    },
                });
                shadows.extend(fill);
            }
        }

        let body = round_rect(
            s,
            s,
            rw,
            rh,
            self.arc_width as i64,
            self.arc_height as i64,
        )
        .map(|shape| Fill {
            shape,
            color: self.background.with_opacity(self.background_opacity),
        });

        Some(PanelPaint { shadows, body })
    }
}

/// Smallest `e >= 0` with `len + 2e > 0`.
fn first_visible_outset(len: i64) -> i64 {
    if len > 0 { 0 } else { -len / 2 + 1 }
}

fn round_rect(x: i64, y: i64, w: i64, h: i64, aw: i64, ah: i64) -> Option<RoundRect> {
    if w <= 0 || h <= 0 {
        return None;
    }
    Some(RoundRect {
        x: x.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
        y: y.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
        width: w.min(u32::MAX as i64) as u32,
        height: h.min(u32::MAX as i64) as u32,
        arc_width: aw.clamp(0, u32::MAX as i64) as u32,
        arc_height: ah.clamp(0, u32::MAX as i64) as u32,
    })
}
