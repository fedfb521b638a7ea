use huxwell_core::constants::*;
use huxwell_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn edge_windows_are_well_formed() {
    assert!(GLOBE_EDGE_MIN < GLOBE_EDGE_MAX);
    assert!(ORBITAL_EDGE_MIN < ORBITAL_EDGE_MAX);
    assert!(GLOBE_EDGE_CAP > 0 && ORBITAL_EDGE_CAP > 0);
    // The orbital shell sits clear of the lifted globe.
    assert!(ORBITAL_RADIUS - ORBITAL_RADIAL_JITTER > GLOBE_RADIUS);
    assert!(SHELL_INNER_RATIO < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_fractions() {
    for k in [SCROLL_SMOOTHING, ROTATION_FOLLOW, MODE_BLEND_FOLLOW] {
        assert!(k > 0.0 && k < 1.0);
    }
    assert!((0.0..=1.0).contains(&REDUCED_MOTION_PROGRESS));
    assert!(ORGANIC_SURFACE_SHARE > 0.0 && ORGANIC_SURFACE_SHARE < 1.0);
}

#[test]
fn milestones_are_sorted_inside_the_scroll() {
    assert!(MILESTONES.windows(2).all(|w| w[0] < w[1]));
    assert!(MILESTONES.iter().all(|&m| m > 0.0 && m < 1.0));
}

#[test]
fn edge_delay_covers_the_point_fade() {
    for params in [ShadingParams::globe(), ShadingParams::brain()] {
        assert!(params.edge_reveal_delay >= params.point_reveal_fade);
        assert!(params.edge_reveal_delay >= params.secondary_reveal_fade || params.edge_alpha == 0.0);
    }
}
