//! Destination rectangle computation for drawing an image into a panel.
//!
//! Given source image dimensions, panel dimensions and a [`ScalePolicy`],
//! computes where the image lands in panel coordinates. Pure geometry — no
//! pixel operations, no allocations.
//!
//! # Example
//!
//! ```
//! use panelfit::{DestRect, ScalePolicy, Size};
//!
//! let dest = ScalePolicy::Fill
//!     .dest_rect(Size::new(200, 100), Size::new(100, 100))
//!     .unwrap();
//!
//! // Scaled to cover the panel; the horizontal overflow is left to the clip.
//! assert_eq!(dest, DestRect::new(-50, 0, 200, 100));
//! assert!(dest.covers(Size::new(100, 100)));
//! ```

use core::fmt;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use num_traits::Float as _;

/// How a source image is mapped onto a panel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScalePolicy {
    /// Show the entire image, preserving aspect ratio. Letterboxed on one axis.
    Fit,
    /// Cover the entire panel, preserving aspect ratio.
    /// Overflow on one axis is cropped by the destination clip.
    Fill,
    /// Map the image to exactly the panel bounds, distorting aspect ratio.
    #[default]
    Stretch,
    /// Place the unscaled image at the panel's center.
    Center,
}

impl ScalePolicy {
    /// All policies, in declaration order.
    pub const ALL: [ScalePolicy; 4] = [Self::Fit, Self::Fill, Self::Stretch, Self::Center];

    /// Canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fit => "fit",
            Self::Fill => "fill",
            Self::Stretch => "stretch",
            Self::Center => "center",
        }
    }

    /// Whether the policy scales the image while keeping its aspect ratio.
    pub const fn preserves_aspect(self) -> bool {
        matches!(self, Self::Fit | Self::Fill | Self::Center)
    }

    /// Compute the destination rectangle for `image` drawn into `panel`.
    pub fn dest_rect(self, image: Size, panel: Size) -> Result<DestRect, FitError> {
        if image.is_empty() {
            return Err(FitError::InvalidImageDimensions {
                width: image.width as i64,
                height: image.height as i64,
            });
        }
        if panel.is_empty() {
            return Err(FitError::InvalidPanelDimensions {
                width: panel.width as i64,
                height: panel.height as i64,
            });
        }

        let (width, height) = match self {
            Self::Stretch => return Ok(DestRect::new(0, 0, panel.width, panel.height)),
            Self::Center => (image.width, image.height),
            Self::Fit => scale_to(image, panel, false),
            Self::Fill => scale_to(image, panel, true),
        };

        Ok(DestRect {
            x: centered(panel.width, width),
            y: centered(panel.height, height),
            width,
            height,
        })
    }
}

impl fmt::Display for ScalePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalePolicy {
    type Err = ParsePolicyError;

    /// Accepts the canonical names plus the CSS `object-fit` aliases
    /// (`contain`, `cover`, `none`) and `distort`. Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let policy = if s.eq_ignore_ascii_case("fit") || s.eq_ignore_ascii_case("contain") {
            Self::Fit
        } else if s.eq_ignore_ascii_case("fill") || s.eq_ignore_ascii_case("cover") {
            Self::Fill
        } else if s.eq_ignore_ascii_case("stretch") || s.eq_ignore_ascii_case("distort") {
            Self::Stretch
        } else if s.eq_ignore_ascii_case("center") || s.eq_ignore_ascii_case("none") {
            Self::Center
        } else {
            return Err(ParsePolicyError);
        };
        Ok(policy)
    }
}

/// A string did not name a [`ScalePolicy`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParsePolicyError;

impl fmt::Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of fit, fill, stretch, center")
    }
}

impl core::error::Error for ParsePolicyError {}

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width divided by height.
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Axis-aligned rectangle in non-negative pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether this rect covers the whole `(0, 0, w, h)` area.
    pub fn is_full(&self, w: u32, h: u32) -> bool {
        self.x == 0 && self.y == 0 && self.width == w && self.height == h
    }
}

/// Placement of an image in panel coordinates.
///
/// `x` and `y` may be negative and the extent may exceed the panel (for
/// [`ScalePolicy::Fill`] and [`ScalePolicy::Center`]). Callers rely on the
/// destination clip, or use [`visible`](Self::visible) and
/// [`source_region`](Self::source_region) to blit only what shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DestRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl DestRect {
    /// Create a new destination rect.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Whether the rect covers every pixel of the panel.
    pub fn covers(&self, panel: Size) -> bool {
        self.x <= 0
            && self.y <= 0
            && self.right() >= panel.width as i64
            && self.bottom() >= panel.height as i64
    }

    /// Whether the rect lies entirely inside the panel.
    pub fn is_within(&self, panel: Size) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.right() <= panel.width as i64
            && self.bottom() <= panel.height as i64
    }

    /// The part of the rect inside `(0, 0, panel.width, panel.height)`.
    pub fn visible(&self, panel: Size) -> Option<Rect> {
        let x0 = (self.x as i64).max(0);
        let y0 = (self.y as i64).max(0);
        let x1 = self.right().min(panel.width as i64);
        let y1 = self.bottom().min(panel.height as i64);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect::new(
            x0 as u32,
            y0 as u32,
            (x1 - x0) as u32,
            (y1 - y0) as u32,
        ))
    }

    /// The region of the source image that lands on the visible part of the
    /// panel. Edges are widened to whole source pixels.
    pub fn source_region(&self, image: Size, panel: Size) -> Option<Rect> {
        if image.is_empty() || self.width == 0 || self.height == 0 {
            return None;
        }
        let vis = self.visible(panel)?;
        let (sx0, sx1) = map_span(
            vis.x as i64 - self.x as i64,
            vis.width,
            self.width,
            image.width,
        );
        let (sy0, sy1) = map_span(
            vis.y as i64 - self.y as i64,
            vis.height,
            self.height,
            image.height,
        );
        Some(Rect::new(sx0, sy0, sx1 - sx0, sy1 - sy0))
    }
}

/// Fit-rect computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FitError {
    /// Image width or height is zero or negative.
    InvalidImageDimensions { width: i64, height: i64 },
    /// Panel width or height is zero or negative.
    InvalidPanelDimensions { width: i64, height: i64 },
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidImageDimensions { width, height } => {
                write!(f, "invalid image dimensions {width}x{height}")
            }
            Self::InvalidPanelDimensions { width, height } => {
                write!(f, "invalid panel dimensions {width}x{height}")
            }
        }
    }
}

impl core::error::Error for FitError {}

/// Compute the destination rectangle from raw integer dimensions.
///
/// Any dimension ≤ 0 is rejected; the caller should skip drawing the frame.
pub fn compute_dest_rect(
    image_width: i32,
    image_height: i32,
    panel_width: i32,
    panel_height: i32,
    policy: ScalePolicy,
) -> Result<DestRect, FitError> {
    if image_width <= 0 || image_height <= 0 {
        return Err(FitError::InvalidImageDimensions {
            width: image_width as i64,
            height: image_height as i64,
        });
    }
    if panel_width <= 0 || panel_height <= 0 {
        return Err(FitError::InvalidPanelDimensions {
            width: panel_width as i64,
            height: panel_height as i64,
        });
    }
    policy.dest_rect(
        Size::new(image_width as u32, image_height as u32),
        Size::new(panel_width as u32, panel_height as u32),
    )
}

// ============================================================================
// Internal geometry
// ============================================================================

/// Scale `image` against `panel` keeping aspect ratio.
///
/// `cover = false` keeps the whole image inside the panel (contain);
/// `cover = true` makes the image cover the whole panel.
fn scale_to(image: Size, panel: Size, cover: bool) -> (u32, u32) {
    let ir = image.aspect();
    let pr = panel.aspect();
    // Panel relatively wider than the image: height limits for contain,
    // width limits for cover.
    let width_limits = if cover { pr > ir } else { pr <= ir };
    if width_limits {
        (panel.width, round_dim(panel.width as f64 / ir))
    } else {
        (round_dim(panel.height as f64 * ir), panel.height)
    }
}

/// Round half away from zero; never 0.
fn round_dim(v: f64) -> u32 {
    (v.round() as u32).max(1)
}

/// Offset that centers `content` in `space`, truncating toward zero.
fn centered(space: u32, content: u32) -> i32 {
    let d = (space as i64 - content as i64) / 2;
    d.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Map a span `[offset, offset + len)` of a `dest_len` axis onto a
/// `src_len` axis. Start rounds down, end rounds up.
fn map_span(offset: i64, len: u32, dest_len: u32, src_len: u32) -> (u32, u32) {
    let d = dest_len as i128;
    let s = src_len as i128;
    let start = offset as i128 * s / d;
    let end = ((offset as i128 + len as i128) * s + d - 1) / d;
    let start = start.clamp(0, s - 1);
    let end = end.clamp(start + 1, s);
    (start as u32, end as u32)
}
