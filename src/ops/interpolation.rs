//! src/ops/interpolation.rs
//! Spherical interpolation between rotors.

use crate::multivector::Geometric3;
use crate::spinor::SpinorE3;

/// Below this half-angle the endpoints are treated as the same rotor.
const COINCIDENT: f64 = 1e-8;

fn even_dot(p: &impl SpinorE3, q: &impl SpinorE3) -> f64 {
    p.a() * q.a() + p.yz() * q.yz() + p.zx() * q.zx() + p.xy() * q.xy()
}

/// Rotor a fraction `t` of the way along the great arc from `r1` to `r2`.
///
/// Only the even part (scalar and bivector) of either endpoint is read. The result is unlocked.
pub fn slerp(r1: &Geometric3, r2: &Geometric3, t: f64) -> Geometric3 {
    let half_angle = even_dot(r1, r2).clamp(-1.0, 1.0).acos();
    if half_angle < COINCIDENT {
        return Geometric3::from_spinor(r1);
    }

    let s = half_angle.sin();
    let w1 = ((1.0 - t) * half_angle).sin() / s;
    let w2 = (t * half_angle).sin() / s;
    let blend = |p: f64, q: f64| w1 * p + w2 * q;

    Geometric3::spinor(
        blend(r1.a(), r2.a()),
        blend(r1.yz(), r2.yz()),
        blend(r1.zx(), r2.zx()),
        blend(r1.xy(), r2.xy()),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector3;

    const EPS: f64 = 1e-12;

    #[test]
    fn slerp_identity_to_90() {
        let r0 = Geometric3::rotor_from_axis_angle(&Vector3::new(0.0, 0.0, 1.0), 0.0).unwrap();
        let r1 = Geometric3::rotor_from_axis_angle(&Vector3::new(0.0, 0.0, 1.0), std::f64::consts::FRAC_PI_2).unwrap();

        let rm = slerp(&r0, &r1, 0.5);
        let v_rot = Geometric3::E1.rotate(&rm).unwrap();

        let expected = Vector3::new(
            (std::f64::consts::FRAC_PI_4).cos(),
            (std::f64::consts::FRAC_PI_4).sin(),
            0.0,
        );
        assert!((v_rot.x() - expected.x).abs() < EPS);
        assert!((v_rot.y() - expected.y).abs() < EPS);
        assert!((v_rot.z() - expected.z).abs() < EPS);
    }

    #[test]
    fn endpoints_are_reproduced() {
        let r0 = Geometric3::rotor_from_axis_angle(&Vector3::new(1.0, 2.0, 0.5), 0.3).unwrap();
        let r1 = Geometric3::rotor_from_axis_angle(&Vector3::new(-1.0, 0.0, 2.0), 1.1).unwrap();
        let start = slerp(&r0, &r1, 0.0);
        let end = slerp(&r0, &r1, 1.0);
        for (p, q) in start.coords().iter().zip(r0.coords()) {
            assert!((p - q).abs() < EPS);
        }
        for (p, q) in end.coords().iter().zip(r1.coords()) {
            assert!((p - q).abs() < EPS);
        }
    }
}
