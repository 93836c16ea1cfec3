// Randomized checks over triangles with coordinates on a 1/16 grid. The grid keeps every
// intermediate product exact so the checks below hold without any tolerance.

use tritri3d::math::{Isometry, Point, Real, Vector};
use tritri3d::query::details::{
    intersection_test_local_triangle_triangle, intersection_test_triangle_triangle,
};
use tritri3d::query::sat;
use tritri3d::shape::Triangle;

const NUM_PAIRS: usize = 5000;

fn grid_coord(rng: &mut oorandom::Rand64) -> Real {
    (rng.rand_range(0..161) as Real - 80.0) / 16.0
}

fn random_point(rng: &mut oorandom::Rand64) -> Point<Real> {
    Point::new(grid_coord(rng), grid_coord(rng), grid_coord(rng))
}

fn random_triangle(rng: &mut oorandom::Rand64) -> Triangle {
    Triangle::new(random_point(rng), random_point(rng), random_point(rng))
}

fn random_pair(rng: &mut oorandom::Rand64) -> (Triangle, Triangle) {
    let t1 = random_triangle(rng);
    let t2 = random_triangle(rng);

    // Push half of the second triangles away to get a mix of disjoint and intersecting pairs.
    if rng.rand_range(0..2) == 0 {
        (t1, t2.translated(&(random_point(rng).coords * 2.0)))
    } else {
        (t1, t2)
    }
}

#[test]
fn intersection_is_symmetric() {
    let mut rng = oorandom::Rand64::new(42);

    for _ in 0..NUM_PAIRS {
        let (t1, t2) = random_pair(&mut rng);
        assert_eq!(
            intersection_test_local_triangle_triangle(&t1, &t2),
            intersection_test_local_triangle_triangle(&t2, &t1),
            "{:?} vs {:?}",
            t1,
            t2
        );
    }
}

#[test]
fn triangle_intersects_itself() {
    let mut rng = oorandom::Rand64::new(7);

    for _ in 0..NUM_PAIRS {
        let t = random_triangle(&mut rng);
        assert!(intersection_test_local_triangle_triangle(&t, &t), "{:?}", t);
    }
}

#[test]
fn intersection_is_translation_invariant() {
    let mut rng = oorandom::Rand64::new(1234);

    for _ in 0..NUM_PAIRS {
        let (t1, t2) = random_pair(&mut rng);
        let shift = Vector::new(
            rng.rand_range(0..41) as Real - 20.0,
            rng.rand_range(0..41) as Real - 20.0,
            rng.rand_range(0..41) as Real - 20.0,
        );
        let expected = intersection_test_local_triangle_triangle(&t1, &t2);

        assert_eq!(
            intersection_test_local_triangle_triangle(
                &t1.translated(&shift),
                &t2.translated(&shift)
            ),
            expected
        );
        assert_eq!(
            intersection_test_triangle_triangle(
                &Isometry::translation(shift.x, shift.y, shift.z),
                &t1.translated(&shift),
                &t2
            ),
            expected
        );
    }
}

#[test]
fn disjoint_bounding_spheres_imply_disjoint_triangles() {
    let mut rng = oorandom::Rand64::new(99);
    let mut num_disjoint = 0;

    for _ in 0..NUM_PAIRS {
        let (t1, t2) = random_pair(&mut rng);
        let bs1 = t1.local_bounding_sphere().loosened(1.0e-6);
        let bs2 = t2.local_bounding_sphere();

        if !bs1.intersects(&bs2) {
            num_disjoint += 1;
            assert!(!intersection_test_local_triangle_triangle(&t1, &t2));
        }
    }

    assert!(num_disjoint > NUM_PAIRS / 10);
}

#[test]
fn found_axes_separate_explicit_projections() {
    let mut rng = oorandom::Rand64::new(2001);

    for _ in 0..NUM_PAIRS {
        let (t1, t2) = random_pair(&mut rng);

        if let Some(axis) = sat::triangle_triangle_find_separating_axis(&t1, &t2) {
            let dir = axis.direction(&t1, &t2);
            assert!(
                sat::triangle_triangle_is_separating_axis(&t1, &t2, &dir),
                "{:?} does not separate {:?} and {:?}",
                axis,
                t1,
                t2
            );
        }
    }
}
