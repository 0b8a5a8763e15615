//! End-to-end walks through the public API.

use ga_units::{
    AlgebraError, Dimensions, DimensionsSummary, Geometric3, Rational, Unit, Vector3,
};

const EPS: f64 = 1e-12;

#[test]
fn rational_is_reduced_on_construction() {
    let half = Rational::value_of(2, 4);
    assert_eq!(half.numer(), 1);
    assert_eq!(half.denom(), 2);
    assert_eq!(half, Rational::ONE_HALF);
}

#[test]
fn force_is_recognised_from_base_dimensions() {
    let force = Dimensions::MASS
        .mul(&Dimensions::LENGTH)
        .div(&Dimensions::TIME.pow(Rational::TWO));
    assert_eq!(force.summary(), Some(DimensionsSummary::Force));
    assert_eq!(force, Dimensions::FORCE);
}

#[test]
fn basis_vectors_multiply_into_a_bivector() {
    let p = Geometric3::E1.mul(&Geometric3::E2);
    assert_eq!(p.coords(), [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
    assert_eq!(p.to_string(), "e12");
}

#[test]
fn opposite_directions_give_a_half_turn() {
    let back = Geometric3::E1.neg();
    let r = Geometric3::rotor_from_directions(&Geometric3::E1, &back).unwrap();

    assert!(r.a().abs() < EPS);
    // The rotation plane contains e1.
    assert!(r.yz().abs() < EPS);
    assert!((r.xy().powi(2) + r.zx().powi(2) - 1.0).abs() < EPS);

    let turned = Geometric3::E1.rotate(&r).unwrap();
    assert!((turned.x() + 1.0).abs() < 1e-10);
    assert!(turned.y().abs() < 1e-10);
    assert!(turned.z().abs() < 1e-10);
}

#[test]
fn adding_length_to_time_fails() {
    let err = (&Geometric3::METER + &Geometric3::SECOND).unwrap_err();
    assert!(matches!(err, AlgebraError::DimensionMismatch { .. }));
    assert_eq!(err.to_string(), "Dimensions must be equal (length, time)");
}

#[test]
fn work_done_by_a_force() {
    let f = Geometric3::vector(2.0, 0.0, 1.0, Some(&Unit::NEWTON));
    let d = Geometric3::vector(3.0, 4.0, 0.0, Some(&Unit::METER));
    let w = f.scp(&d);
    assert_eq!(w.a(), 6.0);
    assert_eq!(w.uom(), Some(&Unit::JOULE));
    assert_eq!(w.to_string(), "6 J or N·m");
}

#[test]
fn torque_is_a_bivector_with_energy_units() {
    let r = Geometric3::vector(1.0, 0.0, 0.0, Some(&Unit::METER));
    let f = Geometric3::vector(0.0, 5.0, 0.0, Some(&Unit::NEWTON));
    let torque = r.ext(&f);
    assert_eq!(torque.xy(), 5.0);
    assert!(torque.uom().is_some_and(|u| u.dimensions() == &Dimensions::ENERGY_OR_TORQUE));

    let axial = torque.dual().neg();
    assert_eq!(axial.z(), 5.0);
}

#[test]
fn velocity_from_displacement_over_time() {
    let d = Geometric3::vector(6.0, 0.0, -3.0, Some(&Unit::METER));
    let v = d.div_by_scalar(3.0, Some(&Unit::SECOND));
    assert_eq!(v.x(), 2.0);
    assert_eq!(v.z(), -1.0);
    assert_eq!(v.uom(), Some(&Unit::METER_PER_SECOND));
}

#[test]
fn frame_rotation_round_trip() {
    let es = [
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ];
    let r = Geometric3::rotor_from_axis_angle(&Vector3::new(1.0, 1.0, 1.0), 2.0).unwrap();
    let fs = es.map(|e| Geometric3::from_vector(&e).rotate(&r).unwrap().vector_part());
    let back = Geometric3::rotor_from_frame_to_frame(&es, &fs).unwrap();
    for (e, f) in es.iter().zip(&fs) {
        let image = Geometric3::from_vector(e).rotate(&back).unwrap();
        assert!((image.x() - f.x).abs() < 1e-10);
        assert!((image.y() - f.y).abs() < 1e-10);
        assert!((image.z() - f.z).abs() < 1e-10);
    }
}

#[test]
fn dimensioned_logarithm_is_rejected() {
    let err = Geometric3::METER.log().unwrap_err();
    assert_eq!(err.to_string(), "uom 1 m must be dimensionless.");
}
