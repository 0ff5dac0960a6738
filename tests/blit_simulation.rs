//! Pixel simulation of the host's clipped image blit.
//!
//! Every source pixel stores its own (x, y) coordinates. The destination
//! rectangle is blitted into a panel-sized grid with nearest-neighbor
//! sampling and a clip to the panel bounds, the way a toolkit would draw it.
//! Wrong placement, scale or clipping shows up as missing, stray, or
//! out-of-region source coordinates.

use panelfit::*;

// ---- Pixel simulation ----

/// A panel pixel: untouched, or the source pixel that was drawn there.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Pixel {
    Background,
    Source(u32, u32),
}

#[derive(Clone, Debug)]
struct Grid {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Grid {
    fn panel(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            pixels: vec![Pixel::Background; (size.width * size.height) as usize],
        }
    }

    fn get(&self, x: u32, y: u32) -> Pixel {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Blit `image` scaled to `dest`, clipped to the grid. Samples the source
    /// at each destination pixel center.
    fn blit(&mut self, image: Size, dest: DestRect) {
        for py in 0..self.height {
            for px in 0..self.width {
                let ox = px as i64 - dest.x as i64;
                let oy = py as i64 - dest.y as i64;
                if ox < 0 || oy < 0 || ox >= dest.width as i64 || oy >= dest.height as i64 {
                    continue;
                }
                let sx = (2 * ox + 1) * image.width as i64 / (2 * dest.width as i64);
                let sy = (2 * oy + 1) * image.height as i64 / (2 * dest.height as i64);
                self.pixels[(py * self.width + px) as usize] = Pixel::Source(sx as u32, sy as u32);
            }
        }
    }

    fn drawn(&self) -> impl Iterator<Item = (u32, u32, u32, u32)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).filter_map(move |x| match self.get(x, y) {
                Pixel::Source(sx, sy) => Some((x, y, sx, sy)),
                Pixel::Background => None,
            })
        })
    }

    fn drawn_count(&self) -> usize {
        self.drawn().count()
    }
}

fn contains(r: Rect, x: u32, y: u32) -> bool {
    x >= r.x && y >= r.y && x < r.x + r.width && y < r.y + r.height
}

const IMAGES: [(u32, u32); 8] = [
    (1, 1),
    (3, 1),
    (1, 5),
    (16, 9),
    (9, 16),
    (40, 40),
    (64, 17),
    (13, 50),
];

const PANELS: [(u32, u32); 6] = [(1, 1), (10, 10), (32, 18), (18, 32), (37, 23), (50, 7)];

fn simulate(policy: ScalePolicy, image: Size, panel: Size) -> (Grid, DestRect) {
    let dest = policy.dest_rect(image, panel).unwrap();
    let mut grid = Grid::panel(panel);
    grid.blit(image, dest);
    (grid, dest)
}

fn each_case(mut f: impl FnMut(Size, Size)) {
    for (iw, ih) in IMAGES {
        for (pw, ph) in PANELS {
            f(Size::new(iw, ih), Size::new(pw, ph));
        }
    }
}

// ---- Tests ----

#[test]
fn fill_paints_every_panel_pixel() {
    each_case(|image, panel| {
        let (grid, _) = simulate(ScalePolicy::Fill, image, panel);
        assert_eq!(
            grid.drawn_count(),
            (panel.width * panel.height) as usize,
            "Fill {image:?} → {panel:?} left background showing"
        );
    });
}

#[test]
fn stretch_paints_every_panel_pixel() {
    each_case(|image, panel| {
        let (grid, _) = simulate(ScalePolicy::Stretch, image, panel);
        assert_eq!(grid.drawn_count(), (panel.width * panel.height) as usize);
    });
}

#[test]
fn drawn_area_matches_visible_rect() {
    for policy in ScalePolicy::ALL {
        each_case(|image, panel| {
            let (grid, dest) = simulate(policy, image, panel);
            match dest.visible(panel) {
                Some(vis) => {
                    assert_eq!(
                        grid.drawn_count(),
                        (vis.width * vis.height) as usize,
                        "{policy} {image:?} → {panel:?}"
                    );
                    for (x, y, _, _) in grid.drawn() {
                        assert!(contains(vis, x, y), "{policy}: stray pixel at ({x},{y})");
                    }
                }
                None => assert_eq!(grid.drawn_count(), 0),
            }
        });
    }
}

#[test]
fn sampled_pixels_lie_in_source_region() {
    for policy in ScalePolicy::ALL {
        each_case(|image, panel| {
            let (grid, dest) = simulate(policy, image, panel);
            let Some(region) = dest.source_region(image, panel) else {
                assert_eq!(grid.drawn_count(), 0);
                return;
            };
            assert!(region.x + region.width <= image.width);
            assert!(region.y + region.height <= image.height);
            for (x, y, sx, sy) in grid.drawn() {
                assert!(
                    contains(region, sx, sy),
                    "{policy} {image:?} → {panel:?}: ({x},{y}) sampled ({sx},{sy}) outside {region:?}"
                );
            }
        });
    }
}

#[test]
fn fit_letterboxes_symmetrically() {
    let (grid, dest) = simulate(ScalePolicy::Fit, Size::new(16, 9), Size::new(32, 32));
    assert_eq!(dest, DestRect::new(0, 7, 32, 18));
    for x in 0..32 {
        for y in (0..7).chain(25..32) {
            assert_eq!(grid.get(x, y), Pixel::Background);
        }
        assert!(matches!(grid.get(x, 7), Pixel::Source(_, 0)));
        assert!(matches!(grid.get(x, 24), Pixel::Source(_, 8)));
    }
}

#[test]
fn fill_crops_both_sides_evenly() {
    // 2:1 into a square: the middle half of the source shows.
    let (grid, _) = simulate(ScalePolicy::Fill, Size::new(40, 20), Size::new(20, 20));
    assert_eq!(grid.get(0, 0), Pixel::Source(10, 0));
    assert_eq!(grid.get(19, 19), Pixel::Source(29, 19));
}

#[test]
fn center_is_one_to_one() {
    let (grid, dest) = simulate(ScalePolicy::Center, Size::new(4, 4), Size::new(10, 10));
    assert_eq!(dest, DestRect::new(3, 3, 4, 4));
    for (x, y, sx, sy) in grid.drawn() {
        assert_eq!((sx, sy), (x - 3, y - 3));
    }
}

#[test]
fn image_panel_plan_matches_simulation() {
    let image = Size::new(64, 17);
    let panel = Size::new(37, 23);
    for policy in ScalePolicy::ALL {
        let draw = ImagePanel::new(image, policy).paint(panel).unwrap();
        let (grid, dest) = simulate(policy, image, panel);
        assert_eq!(draw.dest, dest);
        assert_eq!(grid.drawn_count(), (draw.visible.width * draw.visible.height) as usize);
        for (_, _, sx, sy) in grid.drawn() {
            assert!(contains(draw.source, sx, sy));
        }
    }
}
