//! Image-panel geometry: fit, fill, stretch and center placement, plus the
//! paint decisions of the rounded widgets that host it.
//!
//! Pure geometry. The crate never touches pixels except for the small RGBA
//! helpers in [`color`]; hosts draw with whatever toolkit they have.
//!
//! # Modules
//!
//! - [`fit`] — Scale policies and destination rectangle computation
//! - [`image_panel`] — Per-frame blit planning for a panel showing one image
//! - [`color`] — RGBA colors, hex parsing, icon tint and fade
//! - [`shape`] — Rounded paths, hit testing, layered drop shadows
//! - [`button`] — Hover/press state and rounded/icon button paint
//! - [`field`] — Text field input filtering, underline and icon sizing
//! - [`table`] — Row striping, action column sizing and palettes
//! - `svg` — SVG renderings for docs and debugging (feature `svg`)
//!
//! # Example
//!
//! ```
//! use panelfit::{DestRect, ScalePolicy, Size, compute_dest_rect};
//!
//! let dest = compute_dest_rect(200, 100, 100, 100, ScalePolicy::Fit).unwrap();
//! assert_eq!(dest, DestRect::new(0, 25, 100, 50));
//!
//! let centered = ScalePolicy::Center
//!     .dest_rect(Size::new(50, 50), Size::new(100, 100))
//!     .unwrap();
//! assert_eq!(centered, DestRect::new(25, 25, 50, 50));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod button;
pub mod color;
pub mod field;
pub mod fit;
pub mod image_panel;
pub mod shape;
#[cfg(feature = "svg")]
pub mod svg;
pub mod table;

pub use button::{ButtonState, MouseButton, PointerEvent, RoundedButtonStyle, Visual};
pub use color::{Color, ColorError};
pub use fit::{DestRect, FitError, ParsePolicyError, Rect, ScalePolicy, Size, compute_dest_rect};
pub use image_panel::{ImageDraw, ImagePanel, Interpolation};
pub use shape::{CornerRadii, PanelStyle};
