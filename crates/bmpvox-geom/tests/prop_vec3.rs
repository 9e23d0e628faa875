use bmpvox_geom::{Aabb, Vec3};
use proptest::num::f32::NORMAL;
use proptest::prelude::*;
use proptest::strategy::Strategy;

fn approx_abs_rel(a: f32, b: f32, atol: f32, rtol: f32) -> bool {
    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs());
    diff <= atol + rtol * scale
}

fn vapprox_abs_rel(a: Vec3, b: Vec3, atol: f32, rtol: f32) -> bool {
    approx_abs_rel(a.x, b.x, atol, rtol)
        && approx_abs_rel(a.y, b.y, atol, rtol)
        && approx_abs_rel(a.z, b.z, atol, rtol)
}

fn bounded_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e6)
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (bounded_f32(), bounded_f32(), bounded_f32())
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn lattice_vec3() -> impl Strategy<Value = Vec3> {
    (0i32..4096, 0i32..4096, 0i32..4096).prop_map(|(x, y, z)| Vec3::from_lattice(x, y, z))
}

proptest! {
    // Midpoint is symmetric
    #[test]
    fn vec3_midpoint_symmetric(
        a in arb_vec3(),
        b in arb_vec3(),
    ) {
        prop_assert!(vapprox_abs_rel(a.midpoint(b), b.midpoint(a), 1e-6, 1e-6));
    }

    // Midpoint of two lattice points is exact in f32
    #[test]
    fn vec3_midpoint_lattice_exact(
        a in lattice_vec3(),
        b in lattice_vec3(),
    ) {
        let m = a.midpoint(b);
        prop_assert_eq!(m * 2.0, a + b);
    }

    // Lattice indices survive the trip to f32 unchanged
    #[test]
    fn vec3_from_lattice_is_exact(
        x in -4096i32..4096,
        y in -4096i32..4096,
        z in -4096i32..4096,
    ) {
        let v = Vec3::from_lattice(x, y, z);
        prop_assert_eq!((v.x as i32, v.y as i32, v.z as i32), (x, y, z));
    }

    // A point strictly inside a box grown by one unit on each side stays inside
    #[test]
    fn aabb_contains_grown_point(
        p in lattice_vec3(),
    ) {
        let aabb = Aabb::new(p + Vec3::splat(-1.0), p + Vec3::splat(1.0));
        prop_assert!(aabb.contains_strict(p));
        prop_assert!(!aabb.contains_strict(aabb.min));
        prop_assert!(!aabb.contains_strict(aabb.max));
    }
}
