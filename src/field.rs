//! Composite text field: typed input filtering, underline, placeholder and
//! icon auto-sizing.
//!
//! # Example
//!
//! ```
//! use panelfit::field::{Edit, InputFilter, InputKind};
//!
//! let filter = InputFilter::new(InputKind::Decimal).max_length(6);
//! assert_eq!(filter.insert("12", 2, ",5"), Edit::Applied("12,5".into()));
//! assert_eq!(filter.insert("12,5", 4, ","), Edit::Rejected);
//! ```

use alloc::string::String;

#[cfg(not(feature = "std"))]
use num_traits::Float as _;

use crate::color::Color;

/// What a field accepts. Validation is partial: every prefix of a valid
/// value is accepted so the user can keep typing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InputKind {
    /// Anything.
    #[default]
    Text,
    /// Digits, with an optional leading `-` when negatives are allowed.
    Integer,
    /// Digits with at most one `.` or `,` separator.
    Decimal,
    /// Address characters with at most one `@`.
    Email,
    /// Digits, spaces, parentheses, `+` and `-`.
    Phone,
}

/// Result of filtering an edit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edit {
    /// The edit (possibly truncated) was applied; the new document text.
    Applied(String),
    /// Nothing to apply, e.g. the field is already at its maximum length.
    Unchanged,
    /// The edit would make the text invalid. Hosts typically beep.
    Rejected,
}

/// Input filter for one field.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputFilter {
    pub kind: InputKind,
    /// Maximum length in chars. `None` = unlimited.
    pub max_length: Option<usize>,
    /// Allow a leading `-` for [`InputKind::Integer`] and [`InputKind::Decimal`].
    pub allow_negative: bool,
}

impl InputFilter {
    /// Unlimited filter of the given kind.
    pub const fn new(kind: InputKind) -> Self {
        Self {
            kind,
            max_length: None,
            allow_negative: false,
        }
    }

    /// Limit the text to `len` chars.
    pub const fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    /// Allow negative numbers.
    pub const fn allow_negative(mut self, allow: bool) -> Self {
        self.allow_negative = allow;
        self
    }

    /// Whether `text` is acceptable (possibly incomplete) input.
    pub fn accepts(&self, text: &str) -> bool {
        if text.is_empty() {
            return true;
        }
        match self.kind {
            InputKind::Text => true,
            InputKind::Integer => is_integer(text, self.allow_negative),
            InputKind::Decimal => is_decimal(text, self.allow_negative),
            InputKind::Email => is_email_partial(text),
            InputKind::Phone => text
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '(' | ')' | '+' | '-')),
        }
    }

    /// Insert `incoming` at char offset `offset` of `current`.
    pub fn insert(&self, current: &str, offset: usize, incoming: &str) -> Edit {
        self.replace(current, offset, 0, incoming)
    }

    /// Replace `len` chars at char offset `offset` of `current` with `text`.
    ///
    /// The max length truncates `text` to the room left after the removal.
    /// If the replacement is rejected but a range was selected, the
    /// deletion alone is applied.
    pub fn replace(&self, current: &str, offset: usize, len: usize, text: &str) -> Edit {
        let start = byte_offset(current, offset);
        let end = byte_offset(&current[start..], len) + start;
        let kept_chars = current[..start].chars().count() + current[end..].chars().count();

        let mut incoming = text;
        if let Some(max) = self.max_length {
            let room = max.saturating_sub(kept_chars);
            incoming = &text[..byte_offset(text, room)];
        }

        if incoming.is_empty() {
            return if start == end {
                Edit::Unchanged
            } else {
                Edit::Applied(splice(current, start, end, ""))
            };
        }

        let candidate = splice(current, start, end, incoming);
        if self.accepts(&candidate) {
            Edit::Applied(candidate)
        } else {
            log::debug!("{:?} field rejected {incoming:?}", self.kind);
            if start == end {
                Edit::Rejected
            } else {
                Edit::Applied(splice(current, start, end, ""))
            }
        }
    }
}

/// Byte index of char `n` in `s`, clamped to the end.
fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

fn splice(s: &str, start: usize, end: usize, insert: &str) -> String {
    let mut out = String::with_capacity(s.len() - (end - start) + insert.len());
    out.push_str(&s[..start]);
    out.push_str(insert);
    out.push_str(&s[end..]);
    out
}

fn strip_sign(s: &str, allow_negative: bool) -> &str {
    if allow_negative {
        s.strip_prefix('-').unwrap_or(s)
    } else {
        s
    }
}

fn is_integer(s: &str, allow_negative: bool) -> bool {
    let digits = strip_sign(s, allow_negative);
    // A lone "-" is not an integer yet.
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_decimal(s: &str, allow_negative: bool) -> bool {
    let body = strip_sign(s, allow_negative);
    let mut seen_separator = false;
    body.bytes().all(|b| match b {
        b'0'..=b'9' => true,
        b'.' | b',' if !seen_separator => {
            seen_separator = true;
            true
        }
        _ => false,
    })
}

fn is_email_partial(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-' | '@'))
        && s.matches('@').count() <= 1
}

/// The line drawn along the bottom edge of the field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Underline {
    pub y: i32,
    pub width: u32,
    pub thickness: u32,
    pub color: Color,
}

/// Material-style underline text field.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldStyle {
    pub line_color: Color,
    pub focused_line_color: Color,
    pub error_line_color: Color,
    pub placeholder: String,
    pub placeholder_color: Color,
    pub left_padding: u32,
    pub right_padding: u32,
    /// Underline thickness, at least 1.
    pub line_thickness: u32,
    /// Underline thickness while focused, at least 1.
    pub focused_line_thickness: u32,
    pub icon_text_gap: u32,
    pub background: Color,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            line_color: Color::rgb(190, 200, 210),
            focused_line_color: Color::MATERIAL_BLUE,
            error_line_color: Color::rgb(211, 47, 47),
            placeholder: String::from("Type here..."),
            placeholder_color: Color::rgb(150, 150, 150),
            left_padding: 8,
            right_padding: 8,
            line_thickness: 2,
            focused_line_thickness: 3,
            icon_text_gap: 8,
            background: Color::WHITE,
        }
    }
}

impl FieldStyle {
    /// Set underline thicknesses; each is raised to at least 1.
    pub fn line_thickness(mut self, normal: u32, focused: u32) -> Self {
        self.line_thickness = normal.max(1);
        self.focused_line_thickness = focused.max(1);
        self
    }

    /// Underline for a `width × height` field.
    ///
    /// The error color wins over focus; focus picks the thicker line.
    pub fn underline(&self, width: u32, height: u32, focused: bool, error: bool) -> Underline {
        let thickness = if focused {
            self.focused_line_thickness
        } else {
            self.line_thickness
        }
        .max(1);
        let color = if error {
            self.error_line_color
        } else if focused {
            self.focused_line_color
        } else {
            self.line_color
        };
        let y = (height as i64 - thickness as i64).clamp(i32::MIN as i64, i32::MAX as i64);
        Underline {
            y: y as i32,
            width,
            thickness,
            color,
        }
    }

    /// Placeholder shows only on an unfocused, empty, non-blank-placeholder field.
    pub fn shows_placeholder(&self, focused: bool, text: &str) -> bool {
        !focused && text.is_empty() && !self.placeholder.is_empty()
    }

    /// Left edge of the placeholder text, after a leading icon block of
    /// `icon_block` pixels (0 when there is no icon).
    pub fn placeholder_origin_x(&self, icon_block: u32) -> u32 {
        self.left_padding.max(icon_block + self.left_padding)
    }

    /// Thickest underline, which the icon must stay clear of.
    pub fn max_line_thickness(&self) -> u32 {
        self.line_thickness.max(self.focused_line_thickness)
    }
}

/// Automatic square icon sizing for the field's leading icon.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IconSizing {
    pub auto_size: bool,
    /// Smallest icon side, at least 1.
    pub min: u32,
    /// Largest icon side, at least `min`.
    pub max: u32,
    /// Fraction of the usable height, `0.1..=1.5`.
    pub scale_factor: f32,
}

impl Default for IconSizing {
    fn default() -> Self {
        Self {
            auto_size: true,
            min: 12,
            max: 28,
            scale_factor: 0.9,
        }
    }
}

impl IconSizing {
    /// Set bounds; `min` is raised to 1 and `max` to `min`.
    pub fn bounds(mut self, min: u32, max: u32) -> Self {
        self.min = min.max(1);
        self.max = max.max(self.min);
        self
    }

    /// Set scale factor, clamped to `0.1..=1.5`.
    pub fn scale_factor(mut self, factor: f32) -> Self {
        self.scale_factor = if factor.is_nan() {
            0.1
        } else {
            factor.clamp(0.1, 1.5)
        };
        self
    }

    /// Icon side for a field `field_height` tall whose underline is at most
    /// `line` thick and whose text is `text_height` tall.
    ///
    /// `None` when auto-sizing is off.
    pub fn target(&self, field_height: u32, line: u32, text_height: u32) -> Option<u32> {
        if !self.auto_size {
            return None;
        }
        let useful = field_height.saturating_sub(line);
        let base = useful.max(text_height) as f32;
        let target = (base * self.scale_factor).round() as u32;
        let min = self.min.max(1);
        let target = target.clamp(min, self.max.max(min));
        (target > 0).then_some(target)
    }
}
