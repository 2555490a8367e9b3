use proptest::prelude::*;

use swizzle_math::Vector;

type V4 = Vector<f64, 4>;
type I3 = Vector<i32, 3>;

fn finite() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6
}

fn vec4() -> impl Strategy<Value = V4> {
    [finite(), finite(), finite(), finite()].prop_map(V4::from)
}

fn ivec3() -> impl Strategy<Value = I3> {
    [-1000..1000, -1000..1000, 1..1000].prop_map(I3::from)
}

fn bits<const D: usize>(v: Vector<f64, D>) -> [u64; D] {
    v.to_array().map(f64::to_bits)
}

// Applies `view op= rhs` to one copy of `$v` and `view.write(view.read() op rhs)` to another,
// then compares the two bit for bit.
macro_rules! assert_compound_matches_write {
    ($v:expr, $rhs:expr, $view:ident, $op:tt, $op_assign:tt) => {{
        let mut compound = $v;
        let mut view = compound.$view();
        view $op_assign $rhs;

        let mut expected = $v;
        let mut view = expected.$view();
        let value = view.read() $op $rhs;
        view.write(value);

        prop_assert_eq!(bits(compound), bits(expected));
    }};
}

proptest! {
    #[test]
    fn identity_swizzle_reads_back_the_vector(v in vec4()) {
        prop_assert_eq!(v.xyzw().read(), v);
        prop_assert_eq!(v.rgba().read(), v);
        prop_assert_eq!(v.stpq().read(), v);
    }

    #[test]
    fn alias_groups_read_the_same_components(v in vec4()) {
        prop_assert_eq!(v.wzx().read(), v.abr().read());
        prop_assert_eq!(v.abr().read(), v.qps().read());
        prop_assert_eq!(v.yy().read(), Vector::<f64, 2>::splat(v.t()));
    }

    #[test]
    fn permuted_write_is_simultaneous(v in vec4()) {
        let mut w = v;
        w.set_wzyx(w.xyzw().read());
        prop_assert_eq!(w, V4::new(v.w(), v.z(), v.y(), v.x()));

        let mut w = v;
        w.set_yzwx(w.xyzw().read());
        prop_assert_eq!(w.yzwx().read(), v);
    }

    #[test]
    fn double_swap_restores(v in vec4()) {
        let mut w = v;
        w.set_yx(w.xy().read());
        w.set_yx(w.xy().read());
        prop_assert_eq!(w, v);
    }

    #[test]
    fn swizzle_operators_match_vector_operators(a in vec4(), b in vec4()) {
        prop_assert_eq!(a.zyx() + b.xxw(), a.zyx().read() + b.xxw().read());
        prop_assert_eq!(a.zyx() - b.xxw(), a.zyx().read() - b.xxw().read());
        prop_assert_eq!(a.zyx() * b.xxw(), a.zyx().read() * b.xxw().read());
        prop_assert_eq!(bits(a.zyx() / b.xxw()), bits(a.zyx().read() / b.xxw().read()));
        prop_assert_eq!(a.wy() * 3.0, a.wy().read() * 3.0);
        prop_assert_eq!(bits(a.wy() / 3.0), bits(a.wy().read() / 3.0));
        prop_assert_eq!(-a.wy(), -a.wy().read());
    }

    #[test]
    fn compound_assignment_touches_only_the_selection(a in vec4(), b in vec4()) {
        let mut c = a;
        let mut xz = c.xz_mut();
        xz += b.yw();
        prop_assert_eq!(c.x(), a.x() + b.y());
        prop_assert_eq!(c.z(), a.z() + b.w());
        prop_assert_eq!(c.yw().read(), a.yw().read());
    }

    #[test]
    fn compound_assignment_is_read_then_write(a in vec4(), b in vec4(), s in finite()) {
        assert_compound_matches_write!(a, b.zw(), xz_mut, +, +=);
        assert_compound_matches_write!(a, b.zw(), xz_mut, -, -=);
        assert_compound_matches_write!(a, b.zw(), xz_mut, *, *=);
        assert_compound_matches_write!(a, b.zw(), xz_mut, /, /=);

        assert_compound_matches_write!(a, b.zw(), xx_mut, +, +=);
        assert_compound_matches_write!(a, b.zw(), xx_mut, -, -=);
        assert_compound_matches_write!(a, b.zw(), xx_mut, *, *=);
        assert_compound_matches_write!(a, b.zw(), xx_mut, /, /=);

        assert_compound_matches_write!(a, b.yzw().read(), wxw_mut, +, +=);
        assert_compound_matches_write!(a, b.yzw().read(), wxw_mut, /, /=);
        assert_compound_matches_write!(a, s, yyyy_mut, -, -=);
        assert_compound_matches_write!(a, s, yyyy_mut, *, *=);
    }

    #[test]
    fn repeated_index_compound_keeps_last_lane(a in vec4(), b in vec4()) {
        let mut c = a;
        let mut xx = c.xx_mut();
        xx += b.zw();
        prop_assert_eq!(c.x(), a.x() + b.w());
        prop_assert_eq!(c.yzw().read(), a.yzw().read());
    }

    #[test]
    fn integer_algebra_is_exact(a in ivec3(), b in ivec3()) {
        prop_assert_eq!(a.zyx() + b.xyz(), I3::new(a.z() + b.x(), a.y() + b.y(), a.x() + b.z()));
        prop_assert_eq!(a.yzx() / b.zzz(), I3::new(a.y() / b.z(), a.z() / b.z(), a.x() / b.z()));

        let mut c = a;
        let mut yx = c.yx_mut();
        yx -= b.xy();
        prop_assert_eq!(c, I3::new(a.x() - b.y(), a.y() - b.x(), a.z()));
    }

    #[test]
    fn equals_is_reflexive(v in vec4()) {
        prop_assert!(v.equals_ulps(v, 0));
        prop_assert!(v.equals(v.xyzw()));
    }

    #[test]
    fn ulps_tolerance_is_monotonic(x in 1.0f64..1.0e6, steps in 0u64..16) {
        let v = Vector::<f64, 2>::new(x, -x);
        let nudged = v.map(|c| f64::from_bits(c.to_bits() + steps));
        let steps = steps as u32;
        prop_assert!(v.equals_ulps(nudged, steps));
        prop_assert!(v.equals_ulps(nudged, steps + 1));
        if steps > 0 {
            prop_assert!(!v.equals_ulps(nudged, steps - 1));
        }
    }
}
