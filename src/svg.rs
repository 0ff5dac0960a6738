//! SVG visualization of panel geometry.
//!
//! Renders fit-rect placements, rounded panels with their shadow layers, and
//! button outlines as standalone SVG documents for docs and debugging.
//!
//! # Example
//!
//! ```
//! use panelfit::{ScalePolicy, Size, svg::render_fit_svg};
//!
//! let svg = render_fit_svg(Size::new(200, 100), Size::new(100, 100), ScalePolicy::Fill);
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("Fill  200×100 → 100×100"));
//! ```

use kurbo::BezPath;

use crate::button::{ButtonState, RoundedButtonStyle};
use crate::color::Color;
use crate::fit::{ScalePolicy, Size};
use crate::shape::{Fill, PanelStyle};

/// Maximum width the panel is drawn at.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum height the panel is drawn at.
const MAX_PANEL_H: f64 = 200.0;
/// Horizontal margin, also leaves room for overflowing destination rects.
const MARGIN_X: f64 = 160.0;
/// Top margin.
const MARGIN_TOP: f64 = 30.0;
/// Height of the label line.
const LABEL_H: f64 = 22.0;
/// Room below the panel for the annotation and overflow.
const MARGIN_BOTTOM: f64 = 150.0;

const STYLE: &str = r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .panel { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .dest { fill: none; stroke: #2c6faa; stroke-width: 1.5; stroke-dasharray: 4,2; }
  .visible { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .panel { fill: #2d2d2d; stroke: #555; }
    .dest { stroke: #5a9fd4; }
    .visible { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##;

/// Render where `image` lands in `panel` under `policy`.
///
/// The panel is scaled to at most 300×200. The full destination rect is
/// dashed (it may overflow the panel) and the visible part is filled.
pub fn render_fit_svg(image: Size, panel: Size, policy: ScalePolicy) -> String {
    let label = format!(
        "{}  {}×{} → {}×{}",
        capitalized(policy),
        image.width,
        image.height,
        panel.width,
        panel.height
    );
    let (pw, ph, scale) = scale_to_fit(panel);
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;
    let total_h = MARGIN_TOP + LABEL_H + MAX_PANEL_H + MARGIN_BOTTOM;
    let center_x = total_w / 2.0;
    let px = center_x - pw / 2.0;
    let py = MARGIN_TOP + LABEL_H;

    let mut svg = header(total_w, total_h);
    svg.push_str(STYLE);
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        center_x,
        MARGIN_TOP + 14.0,
        escape_xml(&label)
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<rect x="{px:.1}" y="{py:.1}" width="{pw:.1}" height="{ph:.1}" class="panel"/>"#
    ));
    svg.push('\n');

    let annotation = match policy.dest_rect(image, panel) {
        Ok(dest) => {
            if let Some(vis) = dest.visible(panel) {
                svg.push_str(&format!(
                    r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="visible"/>"#,
                    px + vis.x as f64 * scale,
                    py + vis.y as f64 * scale,
                    vis.width as f64 * scale,
                    vis.height as f64 * scale
                ));
                svg.push('\n');
            }
            svg.push_str(&format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="dest"/>"#,
                px + dest.x as f64 * scale,
                py + dest.y as f64 * scale,
                dest.width as f64 * scale,
                dest.height as f64 * scale
            ));
            svg.push('\n');
            format!(
                "dest ({}, {}) {}×{}",
                dest.x, dest.y, dest.width, dest.height
            )
        }
        Err(e) => format!("{e}"),
    };

    svg.push_str(&format!(
        r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
        center_x,
        py + MAX_PANEL_H + 20.0,
        escape_xml(&annotation)
    ));
    svg.push('\n');
    svg.push_str("</svg>\n");
    svg
}

/// Render a rounded panel at 1:1 with each shadow layer as its own `<rect>`.
pub fn render_panel_svg(style: &PanelStyle, width: u32, height: u32) -> String {
    let mut svg = header(width.max(1) as f64, height.max(1) as f64);
    if let Some(paint) = style.paint(width, height) {
        for fill in paint.shadows.iter().chain(paint.body.iter()) {
            push_fill(&mut svg, fill);
        }
    }
    svg.push_str("</svg>\n");
    svg
}

/// Render a rounded button's outline, fill and state overlay at 1:1.
pub fn render_button_svg(
    style: &RoundedButtonStyle,
    state: ButtonState,
    width: u32,
    height: u32,
) -> String {
    let paint = style.paint(state, width, height);
    let d = path_data(&paint.path);
    let mut svg = header(width.max(1) as f64, height.max(1) as f64);
    svg.push_str(&format!(r#"<path d="{d}" {}/>"#, fill_attrs(paint.background)));
    svg.push('\n');
    if let Some(overlay) = paint.overlay {
        svg.push_str(&format!(r#"<path d="{d}" {}/>"#, fill_attrs(overlay)));
        svg.push('\n');
    }
    if let Some(border) = paint.border {
        svg.push_str(&format!(
            r#"<path d="{d}" fill="none" stroke="{}" stroke-opacity="{:.3}" stroke-width="{}"/>"#,
            hex(border.color),
            border.color.opacity(),
            border.thickness
        ));
        svg.push('\n');
    }
    svg.push_str("</svg>\n");
    svg
}

/// SVG path data (`d` attribute) for a path.
pub fn path_data(path: &BezPath) -> String {
    path.to_svg()
}

fn header(w: f64, h: f64) -> String {
    let mut svg = String::with_capacity(2048);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        w as u32, h as u32, w, h
    ));
    svg.push('\n');
    svg
}

fn push_fill(svg: &mut String, fill: &Fill) {
    let s = &fill.shape;
    svg.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{:.1}" ry="{:.1}" {}/>"#,
        s.x,
        s.y,
        s.width,
        s.height,
        s.arc_width as f64 / 2.0,
        s.arc_height as f64 / 2.0,
        fill_attrs(fill.color)
    ));
    svg.push('\n');
}

fn fill_attrs(c: Color) -> String {
    format!(r#"fill="{}" fill-opacity="{:.3}""#, hex(c), c.opacity())
}

fn hex(c: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn capitalized(policy: ScalePolicy) -> &'static str {
    match policy {
        ScalePolicy::Fit => "Fit",
        ScalePolicy::Fill => "Fill",
        ScalePolicy::Stretch => "Stretch",
        ScalePolicy::Center => "Center",
    }
}

/// Scale a Size to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(size: Size) -> (f64, f64, f64) {
    let w = size.width as f64;
    let h = size.height as f64;
    if w == 0.0 || h == 0.0 {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_svg_shows_dest() {
        let svg = render_fit_svg(Size::new(200, 100), Size::new(100, 100), ScalePolicy::Fit);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("dest (0, 25) 100×50"));
        assert!(svg.contains(r#"class="visible""#));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn fit_svg_reports_errors() {
        let svg = render_fit_svg(Size::new(0, 100), Size::new(100, 100), ScalePolicy::Fit);
        assert!(svg.contains("invalid image dimensions 0x100"));
        assert!(!svg.contains(r#"class="dest""#));
    }

    #[test]
    fn panel_svg_has_one_rect_per_layer() {
        let svg = render_panel_svg(&PanelStyle::default(), 100, 60);
        assert_eq!(svg.matches("<rect").count(), 11);
        assert!(svg.contains(r#"rx="12.0""#));
    }

    #[test]
    fn empty_panel_svg_is_well_formed() {
        let svg = render_panel_svg(&PanelStyle::default(), 0, 0);
        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains("<rect"));
    }

    #[test]
    fn button_svg_overlay_when_pressed() {
        let style = RoundedButtonStyle::default().border(Color::WHITE, 2);
        let idle = render_button_svg(&style, ButtonState::default(), 120, 40);
        assert_eq!(idle.matches("<path").count(), 2);
        assert!(idle.contains("#1976d2"));

        let pressed = ButtonState {
            hovered: true,
            pressed: true,
        };
        let svg = render_button_svg(&style, pressed, 120, 40);
        assert_eq!(svg.matches("<path").count(), 3);
        assert!(svg.contains(r#"fill-opacity="0.157""#));
    }

    #[test]
    fn path_data_starts_with_move() {
        let d = path_data(&crate::shape::rounded_path(10, 10, Default::default()));
        assert!(d.starts_with('M'));
        assert!(d.contains('Q'));
        assert!(d.ends_with('Z'));
    }
}
