//! Button interaction state and the paint decisions that depend on it.
//!
//! Host toolkits forward pointer callbacks to [`ButtonState::handle`] and
//! repaint with the resulting [`Visual`].

use kurbo::BezPath;

use crate::color::{Color, clamp01};
use crate::fit::Size;
use crate::shape::{self, CornerRadii};

/// Physical mouse button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Pointer callback delivered by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    /// Pointer moved onto the button.
    Entered,
    /// Pointer left the button.
    Exited,
    /// A mouse button went down over the button.
    Pressed(MouseButton),
    /// A mouse button came up; `inside` is whether the pointer is still over
    /// the button.
    Released { inside: bool },
}

/// What a button looks like right now.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visual {
    #[default]
    Normal,
    Hovered,
    Pressed,
}

/// Hover/press flags driven by pointer events.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ButtonState {
    pub hovered: bool,
    pub pressed: bool,
}

impl ButtonState {
    /// Apply one pointer event. Returns whether the visual changed, i.e.
    /// whether the host should repaint.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        let before = self.visual();
        match event {
            PointerEvent::Entered => self.hovered = true,
            PointerEvent::Exited => {
                self.hovered = false;
                self.pressed = false;
            }
            PointerEvent::Pressed(MouseButton::Left) => self.pressed = true,
            PointerEvent::Pressed(_) => {}
            PointerEvent::Released { inside } => {
                self.pressed = false;
                self.hovered = inside;
            }
        }
        self.visual() != before
    }

    /// Current visual. Pressed wins over hovered.
    pub fn visual(&self) -> Visual {
        if self.pressed {
            Visual::Pressed
        } else if self.hovered {
            Visual::Hovered
        } else {
            Visual::Normal
        }
    }
}

/// Border stroke.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Border {
    pub color: Color,
    pub thickness: u32,
}

/// Filled button with per-corner rounding and state overlays.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoundedButtonStyle {
    pub radii: CornerRadii,
    pub background: Color,
    pub foreground: Color,
    /// Painted over the background while hovered.
    pub hover_overlay: Option<Color>,
    /// Painted over the background while pressed. Without one, a press
    /// under the pointer keeps the hover overlay.
    pub pressed_overlay: Option<Color>,
    pub border: Option<Border>,
    /// Tint applied to the icon, if any.
    pub icon_color: Option<Color>,
    /// Size the icon to the button instead of its natural size.
    pub auto_resize_icon: bool,
    pub icon_padding: u32,
}

impl Default for RoundedButtonStyle {
    fn default() -> Self {
        Self {
            radii: CornerRadii::default(),
            background: Color::MATERIAL_BLUE,
            foreground: Color::WHITE,
            hover_overlay: Some(Color::rgba(0, 0, 0, 20)),
            pressed_overlay: Some(Color::rgba(0, 0, 0, 40)),
            border: None,
            icon_color: None,
            auto_resize_icon: true,
            icon_padding: 6,
        }
    }
}

/// Paint instructions for one frame of a rounded button.
#[derive(Clone, Debug)]
pub struct ButtonPaint {
    /// Outline shared by the background, overlay and border.
    pub path: BezPath,
    pub background: Color,
    pub overlay: Option<Color>,
    /// Border to stroke, only when the thickness is non-zero.
    pub border: Option<Border>,
}

impl RoundedButtonStyle {
    /// Set the same radius on all corners.
    pub fn radius(mut self, r: u32) -> Self {
        self.radii = CornerRadii::uniform(r);
        self
    }

    /// Set a border; a zero thickness disables it.
    pub fn border(mut self, color: Color, thickness: u32) -> Self {
        self.border = Some(Border { color, thickness });
        self
    }

    /// Paint decisions for a `width × height` button in `state`.
    pub fn paint(&self, state: ButtonState, width: u32, height: u32) -> ButtonPaint {
        let hover = self.hover_overlay.filter(|_| state.hovered);
        let overlay = match state.visual() {
            Visual::Pressed => self.pressed_overlay.or(hover),
            Visual::Hovered => hover,
            Visual::Normal => None,
        };
        ButtonPaint {
            path: shape::rounded_path(width, height, self.radii),
            background: self.background,
            overlay,
            border: self.border.filter(|b| b.thickness > 0),
        }
    }

    /// Hit test honouring the rounded corners.
    pub fn contains(&self, width: u32, height: u32, x: i32, y: i32) -> bool {
        shape::contains(width, height, self.radii, x, y)
    }

    /// Size to draw `icon` at on a `button`-sized button.
    ///
    /// With auto-resize the icon becomes a square of the button's short side
    /// minus padding, unless that leaves 4px or less.
    pub fn icon_size(&self, icon: Size, button: Size) -> Size {
        if self.auto_resize_icon {
            let side = button.width.min(button.height) as i64 - 2 * self.icon_padding as i64;
            if side > 4 {
                let side = side as u32;
                return Size::new(side, side);
            }
        }
        icon
    }
}

/// Which image an icon button shows while hovered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HoverIcon {
    /// A dedicated hover image supplied by the host.
    Explicit,
    /// The base icon tinted with this color.
    Tinted(Color),
    /// The unchanged base icon.
    Base,
}

/// Flat icon-only button.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IconButtonStyle {
    pub icon_size: Size,
    pub hover_tint: Color,
    pub use_tint_on_hover: bool,
    /// Icon opacity while hovered, `0.1..=1.0`.
    pub hover_opacity: f32,
    /// Tint applied to the base icon in every state.
    pub base_tint: Option<Color>,
}

impl Default for IconButtonStyle {
    fn default() -> Self {
        Self {
            icon_size: Size::new(24, 24),
            hover_tint: Color::GRAY,
            use_tint_on_hover: true,
            hover_opacity: 1.0,
            base_tint: None,
        }
    }
}

/// Icon opacity while the pointer is held down.
pub const PRESSED_ICON_OPACITY: f32 = 0.85;

impl IconButtonStyle {
    /// Set hover opacity, clamped to `0.1..=1.0`.
    pub fn hover_opacity(mut self, opacity: f32) -> Self {
        self.hover_opacity = clamp01(opacity).max(0.1);
        self
    }

    /// Icon opacity for `visual`.
    pub fn icon_opacity(&self, visual: Visual) -> f32 {
        match visual {
            Visual::Normal => 1.0,
            Visual::Hovered => clamp01(self.hover_opacity).max(0.1),
            Visual::Pressed => PRESSED_ICON_OPACITY,
        }
    }

    /// Resolve the hover image. An explicit hover image wins, then a tint of
    /// the base icon, then the base icon itself.
    pub fn hover_icon(&self, has_explicit_hover: bool) -> HoverIcon {
        if has_explicit_hover {
            HoverIcon::Explicit
        } else if self.use_tint_on_hover {
            HoverIcon::Tinted(self.hover_tint)
        } else {
            HoverIcon::Base
        }
    }

    /// Icon draw size; a zero dimension falls back to the icon's own size.
    pub fn icon_draw_size(&self, natural: Size) -> Size {
        if self.icon_size.is_empty() {
            natural
        } else {
            self.icon_size
        }
    }
}
