//! Styled data table: row colors, grid lines, and the always-visible
//! actions column with up to three icon buttons per row.

use alloc::string::String;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

#[cfg(not(feature = "std"))]
use num_traits::Float as _;

use crate::button::Visual;
use crate::color::Color;
use crate::fit::Size;

/// Number of action buttons in the actions column.
pub const ACTION_BUTTONS: usize = 3;

/// Padding around each action icon, in pixels.
const ACTION_ICON_PAD: u32 = 12;
/// Narrowest the actions column may get.
const ACTION_COLUMN_MIN: u32 = 72;
/// Slack allowed past the ideal actions column width.
const ACTION_COLUMN_SLACK: u32 = 200;
/// Narrowest an auto-fitted column may get.
const AUTO_FIT_MIN: u32 = 50;
/// Horizontal margin added to the widest cell when auto-fitting.
const AUTO_FIT_MARGIN: u32 = 26;

/// Header names that mark the actions column when the configured name is absent.
const ACTION_KEYWORDS: [&str; 4] = ["acoes", "acao", "actions", "action"];

/// Table colors and metrics.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableStyle {
    pub hover_enabled: bool,
    pub hover_color: Color,
    pub selection_background: Color,
    pub selection_foreground: Color,
    pub grid_line_color: Color,
    /// At least 1.
    pub grid_line_thickness: u32,
    /// At least 24.
    pub row_height: u32,
    pub header_background: Color,
    pub header_foreground: Color,
    pub header_divider_color: Color,
    /// At least 32.
    pub header_height: u32,
    pub header_padding: u32,
    pub action_icon_size: u32,
    /// Header text that names the actions column.
    pub actions_header: String,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            hover_enabled: true,
            hover_color: Color::from_rgb_u32(0xE3F2FD),
            selection_background: Color::from_rgb_u32(0xBBDEFB),
            selection_foreground: Color::from_rgb_u32(0x212121),
            grid_line_color: Color::from_rgb_u32(0xE0E0E0),
            grid_line_thickness: 1,
            row_height: 40,
            header_background: Color::WHITE,
            header_foreground: Color::from_rgb_u32(0x424242),
            header_divider_color: Color::from_rgb_u32(0xE0E0E0),
            header_height: 56,
            header_padding: 16,
            action_icon_size: 20,
            actions_header: String::from("Ações"),
        }
    }
}

impl TableStyle {
    /// Set row height, at least 24.
    pub fn row_height(mut self, h: u32) -> Self {
        self.row_height = h.max(24);
        self
    }

    /// Set header height, at least 32.
    pub fn header_height(mut self, h: u32) -> Self {
        self.header_height = h.max(32);
        self
    }

    /// Set grid line thickness, at least 1.
    pub fn grid_line_thickness(mut self, t: u32) -> Self {
        self.grid_line_thickness = t.max(1);
        self
    }

    /// Background override for `row`. `None` = the host's default.
    pub fn row_background(&self, row: usize, hovered_row: Option<usize>, selected: bool) -> Option<Color> {
        if selected {
            Some(self.selection_background)
        } else if self.hover_enabled && hovered_row == Some(row) {
            Some(self.hover_color)
        } else {
            None
        }
    }

    /// Y of the horizontal grid line under a row starting at `row_y`.
    pub fn grid_line_y(&self, row_y: i32, row_height: u32) -> i32 {
        let t = self.grid_line_thickness.max(1);
        let y = row_y as i64 + row_height as i64 - (t / 2) as i64;
        y.clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }

    /// Width constraints for the actions column.
    pub fn action_column_width(&self) -> ColumnWidth {
        action_column_width(self.action_icon_size)
    }

    /// Preferred size of one action button.
    pub fn action_button_size(&self) -> Size {
        action_button_size(self.row_height.max(24), self.action_icon_size)
    }
}

/// Min / preferred / max width of a column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColumnWidth {
    pub min: u32,
    pub preferred: u32,
    pub max: u32,
}

/// Width constraints for an actions column holding three buttons with
/// `icon`-pixel icons.
pub fn action_column_width(icon: u32) -> ColumnWidth {
    let ideal = (ACTION_BUTTONS as u32)
        .saturating_mul(icon.saturating_add(ACTION_ICON_PAD))
        .saturating_add(2 * 6 + 8);
    ColumnWidth {
        min: ACTION_COLUMN_MIN,
        preferred: ideal.max(ACTION_COLUMN_MIN),
        max: ideal.saturating_add(ACTION_COLUMN_SLACK),
    }
}

/// Preferred size of one action button on rows `row_height` tall.
pub fn action_button_size(row_height: u32, icon: u32) -> Size {
    let h = row_height.saturating_sub(8).clamp(24, 36);
    Size::new(icon.saturating_add(ACTION_ICON_PAD), h)
}

/// Locate the actions column among `names`.
///
/// Compares case- and accent-insensitively against `header`, then looks for
/// a name containing one of the usual action keywords, then falls back to the
/// last column. `None` only when there are no columns.
pub fn find_actions_column<S: AsRef<str>>(names: &[S], header: &str) -> Option<usize> {
    if names.is_empty() {
        return None;
    }
    let target = normalize(header);
    let normalized: alloc::vec::Vec<String> = names.iter().map(|n| normalize(n.as_ref())).collect();

    if let Some(i) = normalized.iter().position(|n| *n == target) {
        return Some(i);
    }
    if let Some(i) = normalized
        .iter()
        .position(|n| ACTION_KEYWORDS.iter().any(|k| n.contains(k)))
    {
        return Some(i);
    }
    log::trace!("no actions column named {header:?}; using the last column");
    Some(names.len() - 1)
}

/// Strip diacritics (NFD, then drop combining marks), lowercase and trim.
fn normalize(s: &str) -> String {
    s.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Icon colors for the action buttons, per state, with optional per-button
/// overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActionPalette {
    pub normal: Color,
    pub hover: Color,
    pub pressed: Color,
    pub overrides: [ActionColors; ACTION_BUTTONS],
}

/// Per-button colors; `None` falls back to the palette.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActionColors {
    pub normal: Option<Color>,
    pub hover: Option<Color>,
    pub pressed: Option<Color>,
}

impl Default for ActionPalette {
    fn default() -> Self {
        Self {
            normal: Color::from_rgb_u32(0x424242),
            hover: Color::from_rgb_u32(0x1E88E5),
            pressed: Color::from_rgb_u32(0x0D47A1),
            overrides: [ActionColors::default(); ACTION_BUTTONS],
        }
    }
}

/// Background of an action button at rest.
pub const ACTION_BUTTON_BACKGROUND: Color = Color::rgb(245, 245, 245);
/// Background of an action button under the pointer.
pub const ACTION_BUTTON_HOVER_BACKGROUND: Color = Color::rgb(224, 224, 224);

impl ActionPalette {
    /// Icon color for button `index` (0-based). Indices past the last
    /// button use the last button's overrides.
    pub fn effective(&self, index: usize, visual: Visual) -> Color {
        let o = &self.overrides[index.min(ACTION_BUTTONS - 1)];
        match visual {
            Visual::Normal => o.normal.unwrap_or(self.normal),
            Visual::Hovered => o.hover.unwrap_or(self.hover),
            Visual::Pressed => o.pressed.unwrap_or(self.pressed),
        }
    }

    /// Button background for `visual`. Pressing keeps the hover background.
    pub fn background(visual: Visual) -> Color {
        match visual {
            Visual::Normal => ACTION_BUTTON_BACKGROUND,
            Visual::Hovered | Visual::Pressed => ACTION_BUTTON_HOVER_BACKGROUND,
        }
    }
}

/// Scale `icon` to fit a `target × target` square, keeping aspect ratio.
/// Each side is at least 1. An empty icon is returned unchanged.
pub fn normalize_icon(icon: Size, target: u32) -> Size {
    if icon.is_empty() {
        return icon;
    }
    let scale = (target as f64 / icon.width as f64).min(target as f64 / icon.height as f64);
    let side = |v: u32| ((v as f64 * scale).round() as u32).max(1);
    Size::new(side(icon.width), side(icon.height))
}

/// Preferred width of a column from the measured header and cell widths.
pub fn auto_fit_width(header: u32, cells: impl IntoIterator<Item = u32>) -> u32 {
    cells
        .into_iter()
        .chain(core::iter::once(header))
        .map(|w| w.saturating_add(AUTO_FIT_MARGIN))
        .fold(AUTO_FIT_MIN, u32::max)
}
