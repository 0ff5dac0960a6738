//! Parametric checks of every scale policy over a grid of image and panel
//! sizes, including extreme aspect ratios and 1px dimensions.

use panelfit::*;

const DIMS: [u32; 12] = [1, 2, 3, 7, 16, 99, 100, 101, 255, 640, 1001, 4096];

fn all_cases() -> impl Iterator<Item = (Size, Size)> {
    DIMS.iter().flat_map(|&iw| {
        DIMS.iter().flat_map(move |&ih| {
            DIMS.iter().flat_map(move |&pw| {
                DIMS.iter()
                    .map(move |&ph| (Size::new(iw, ih), Size::new(pw, ph)))
            })
        })
    })
}

fn dest(policy: ScalePolicy, image: Size, panel: Size) -> DestRect {
    policy
        .dest_rect(image, panel)
        .unwrap_or_else(|e| panic!("{policy} {image:?} → {panel:?}: {e}"))
}

/// The rounded side stays within half a pixel of the exact scaled length,
/// unless the 1px floor kicked in.
fn assert_aspect(policy: ScalePolicy, image: Size, panel: Size, r: DestRect) {
    let ir = image.width as f64 / image.height as f64;
    let close = |got: u32, exact: f64| (got as f64 - exact).abs() <= 0.5 + 1e-9;
    let width_limited = r.width == panel.width && close(r.height, panel.width as f64 / ir);
    let height_limited = r.height == panel.height && close(r.width, panel.height as f64 * ir);
    let clamped = r.width == 1 || r.height == 1;
    assert!(
        width_limited || height_limited || clamped,
        "{policy} {image:?} → {panel:?}: {r:?}"
    );
}

// ── per-policy invariants ───────────────────────────────────────────────

#[test]
fn stretch_always_equals_panel() {
    for (image, panel) in all_cases() {
        assert_eq!(
            dest(ScalePolicy::Stretch, image, panel),
            DestRect::new(0, 0, panel.width, panel.height)
        );
    }
}

#[test]
fn center_keeps_image_size() {
    for (image, panel) in all_cases() {
        let r = dest(ScalePolicy::Center, image, panel);
        assert_eq!((r.width, r.height), (image.width, image.height));
        assert_eq!(r.x as i64, (panel.width as i64 - image.width as i64) / 2);
        assert_eq!(r.y as i64, (panel.height as i64 - image.height as i64) / 2);
    }
}

#[test]
fn fit_stays_inside_and_touches_an_edge() {
    for (image, panel) in all_cases() {
        let r = dest(ScalePolicy::Fit, image, panel);
        assert!(r.is_within(panel), "Fit {image:?} → {panel:?}: {r:?}");
        assert!(
            r.width == panel.width || r.height == panel.height,
            "Fit {image:?} → {panel:?}: {r:?} touches no edge"
        );
        assert_aspect(ScalePolicy::Fit, image, panel, r);
    }
}

#[test]
fn fill_covers_and_touches_an_edge() {
    for (image, panel) in all_cases() {
        let r = dest(ScalePolicy::Fill, image, panel);
        assert!(r.covers(panel), "Fill {image:?} → {panel:?}: {r:?}");
        assert!(
            r.width == panel.width || r.height == panel.height,
            "Fill {image:?} → {panel:?}: {r:?} touches no edge"
        );
        assert_aspect(ScalePolicy::Fill, image, panel, r);
    }
}

#[test]
fn fit_never_exceeds_fill() {
    for (image, panel) in all_cases() {
        let fit = dest(ScalePolicy::Fit, image, panel);
        let fill = dest(ScalePolicy::Fill, image, panel);
        assert!(fit.width <= fill.width && fit.height <= fill.height);
    }
}

#[test]
fn aspect_policies_are_centered() {
    for (image, panel) in all_cases() {
        for policy in [ScalePolicy::Fit, ScalePolicy::Fill] {
            let r = dest(policy, image, panel);
            let left = r.x as i64;
            let right = panel.width as i64 - r.right();
            let top = r.y as i64;
            let bottom = panel.height as i64 - r.bottom();
            assert!((left - right).abs() <= 1, "{policy} {r:?} in {panel:?}");
            assert!((top - bottom).abs() <= 1, "{policy} {r:?} in {panel:?}");
        }
    }
}

#[test]
fn matching_aspect_fills_panel_exactly() {
    for &k in &[1u32, 2, 3, 10] {
        let image = Size::new(16 * k, 9 * k);
        let panel = Size::new(320, 180);
        for policy in [ScalePolicy::Fit, ScalePolicy::Fill, ScalePolicy::Stretch] {
            assert_eq!(dest(policy, image, panel), DestRect::new(0, 0, 320, 180));
        }
    }
}

// ── concrete cases ──────────────────────────────────────────────────────

#[test]
fn landscape_into_square() {
    let cases = [
        (ScalePolicy::Fit, DestRect::new(0, 25, 100, 50)),
        (ScalePolicy::Fill, DestRect::new(-50, 0, 200, 100)),
        (ScalePolicy::Stretch, DestRect::new(0, 0, 100, 100)),
        (ScalePolicy::Center, DestRect::new(-50, 0, 200, 100)),
    ];
    for (policy, expected) in cases {
        assert_eq!(compute_dest_rect(200, 100, 100, 100, policy), Ok(expected), "{policy}");
    }
}

#[test]
fn portrait_into_landscape() {
    assert_eq!(
        compute_dest_rect(500, 1000, 400, 300, ScalePolicy::Fit),
        Ok(DestRect::new(125, 0, 150, 300))
    );
    assert_eq!(
        compute_dest_rect(500, 1000, 400, 300, ScalePolicy::Fill),
        Ok(DestRect::new(0, -250, 400, 800))
    );
}

#[test]
fn small_image_centered() {
    assert_eq!(
        compute_dest_rect(50, 50, 100, 100, ScalePolicy::Center),
        Ok(DestRect::new(25, 25, 50, 50))
    );
}

// ── errors ──────────────────────────────────────────────────────────────

#[test]
fn non_positive_dimensions_are_rejected() {
    for policy in ScalePolicy::ALL {
        assert_eq!(
            compute_dest_rect(0, 10, 100, 100, policy),
            Err(FitError::InvalidImageDimensions { width: 0, height: 10 })
        );
        assert_eq!(
            compute_dest_rect(10, -3, 100, 100, policy),
            Err(FitError::InvalidImageDimensions { width: 10, height: -3 })
        );
        assert_eq!(
            compute_dest_rect(10, 10, 100, 0, policy),
            Err(FitError::InvalidPanelDimensions { width: 100, height: 0 })
        );
        assert_eq!(
            compute_dest_rect(10, 10, -1, 50, policy),
            Err(FitError::InvalidPanelDimensions { width: -1, height: 50 })
        );
    }
}

#[test]
fn policy_names_round_trip() {
    for policy in ScalePolicy::ALL {
        assert_eq!(policy.to_string().parse::<ScalePolicy>(), Ok(policy));
        assert_eq!(policy.as_str().to_uppercase().parse::<ScalePolicy>(), Ok(policy));
    }
    assert_eq!("zoom".parse::<ScalePolicy>(), Err(ParsePolicyError));
}
