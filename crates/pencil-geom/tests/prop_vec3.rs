use pencil_geom::{Aabb, Vec3};
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
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e4)
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (bounded_f32(), bounded_f32(), bounded_f32()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    // Cross product is orthogonal to both inputs (scaled tolerance)
    #[test]
    fn vec3_cross_orthogonal(a in arb_vec3(), b in arb_vec3()) {
        let c = a.cross(b);
        let scale = a.length() * b.length() * a.length().max(b.length()).max(1.0);
        prop_assert!(a.dot(c).abs() <= 1e-3 + 1e-4 * scale);
    }

    // Component scaling by ONE is identity
    #[test]
    fn vec3_scale_one_identity(a in arb_vec3()) {
        prop_assert_eq!(a.scale(Vec3::ONE), a);
    }

    // Centre/size reconstruct the original box
    #[test]
    fn aabb_center_size_reconstructs(c in arb_vec3(), s in arb_vec3()) {
        let size = Vec3::new(s.x.abs(), s.y.abs(), s.z.abs());
        let b = Aabb::from_center_size(c, size);
        prop_assert!(vapprox_abs_rel(b.center(), c, 1e-2, 1e-5));
        prop_assert!(vapprox_abs_rel(b.size(), size, 1e-2, 1e-5));
    }

    // Union is commutative
    #[test]
    fn aabb_union_commutative(a in arb_vec3(), b in arb_vec3(), c in arb_vec3(), d in arb_vec3()) {
        let x = Aabb::new(a, b);
        let y = Aabb::new(c, d);
        prop_assert_eq!(x.union(&y), y.union(&x));
    }
}
