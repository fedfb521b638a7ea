use huxwell_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn fibonacci_sphere_rejects_fewer_than_two_points() {
    assert_eq!(
        fibonacci_sphere(1, 1.0),
        Err(SceneError::InvalidPointCount { count: 1, min: 2 })
    );
    assert!(fibonacci_sphere(0, 1.0).is_err());
}

#[test]
fn two_point_sphere_spans_the_poles() {
    let pts = fibonacci_sphere(2, 3.0).unwrap();
    assert!((pts[0] - glam::Vec3::new(0.0, 3.0, 0.0)).length() < 1e-5);
    assert!((pts[1] - glam::Vec3::new(0.0, -3.0, 0.0)).length() < 1e-5);
}

#[test]
fn fibonacci_points_are_never_coincident() {
    for n in [2usize, 3, 17, 200, 800] {
        let pts = fibonacci_sphere(n, 1.0).unwrap();
        assert_eq!(pts.len(), n);
        let mut min_d = f32::MAX;
        for i in 0..n {
            for j in (i + 1)..n {
                min_d = min_d.min(pts[i].distance(pts[j]));
            }
        }
        assert!(min_d > 1e-4, "n={} min distance {}", n, min_d);
    }
}

#[test]
fn organic_points_stay_finite_and_bounded() {
    let mut rng = StdRng::seed_from_u64(11);
    let shape = OrganicShape::default();
    for _ in 0..2000 {
        let p = organic_point(&mut rng, &shape);
        assert!(p.is_finite());
        // Proportions top out at 1.35 and the bulges add well under 1.
        assert!(p.length() < 3.0, "{:?}", p);
    }
}

#[test]
fn radial_fills_sample_their_ranges() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..1000 {
        let s = RadialFill::Shell.sample(&mut rng);
        assert!((0.85..=1.0).contains(&s), "shell {}", s);
        let v = RadialFill::Volume.sample(&mut rng);
        assert!((0.0..=0.85).contains(&v), "volume {}", v);
        let p = RadialFill::Protrude.sample(&mut rng);
        assert!((0.88..=1.08).contains(&p), "protrude {}", p);
    }
}
