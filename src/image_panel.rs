//! Image panel: decides where (and whether) to draw an image each frame.

use crate::color::Color;
use crate::fit::{DestRect, Rect, ScalePolicy, Size};

/// Resampling hint passed to the host's image blit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Interpolation {
    NearestNeighbor,
    Bilinear,
}

/// One image blit for the current frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageDraw {
    /// Where the whole image lands; may extend past the panel.
    pub dest: DestRect,
    /// Part of the panel actually covered.
    pub visible: Rect,
    /// Source pixels that land in `visible`.
    pub source: Rect,
    pub interpolation: Interpolation,
}

/// Panel that shows a single image under a [`ScalePolicy`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImagePanel {
    /// Dimensions of the current image, if one is loaded.
    pub image: Option<Size>,
    pub scale_policy: ScalePolicy,
    /// Request smooth resampling.
    pub high_quality: bool,
    /// Fill used by hosts that show an empty-state placeholder.
    pub placeholder_color: Color,
}

impl Default for ImagePanel {
    fn default() -> Self {
        Self {
            image: None,
            scale_policy: ScalePolicy::Stretch,
            high_quality: true,
            placeholder_color: Color::rgb(230, 230, 230),
        }
    }
}

impl ImagePanel {
    /// Size hosts should offer when the panel has no layout constraints.
    pub const PREFERRED_SIZE: Size = Size::new(320, 180);

    /// Panel showing an image of the given dimensions.
    pub fn new(image: Size, policy: ScalePolicy) -> Self {
        Self {
            image: Some(image),
            scale_policy: policy,
            ..Self::default()
        }
    }

    /// Interpolation hint for the current quality setting.
    pub fn interpolation(&self) -> Interpolation {
        if self.high_quality {
            Interpolation::Bilinear
        } else {
            Interpolation::NearestNeighbor
        }
    }

    /// Plan the blit for a panel of size `panel`.
    ///
    /// `None` means skip drawing this frame: no image is loaded, a dimension
    /// is zero, or the image falls entirely outside the panel.
    pub fn paint(&self, panel: Size) -> Option<ImageDraw> {
        let image = self.image?;
        let dest = match self.scale_policy.dest_rect(image, panel) {
            Ok(dest) => dest,
            Err(e) => {
                log::debug!("image panel skips frame: {e}");
                return None;
            }
        };
        Some(ImageDraw {
            dest,
            visible: dest.visible(panel)?,
            source: dest.source_region(image, panel)?,
            interpolation: self.interpolation(),
        })
    }
}
