//! Wire form of `Rational` and `Dimensions`.
#![cfg(feature = "serde")]

use ga_units::{Dimensions, DimensionsSummary, Rational};

#[test]
fn rational_is_a_pair() {
    let json = serde_json::to_string(&Rational::value_of(-2, 6)).unwrap();
    assert_eq!(json, "[-1,3]");
    let back: Rational = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Rational::MINUS_ONE_THIRD);
}

#[test]
fn rational_is_normalized_on_read() {
    let r: Rational = serde_json::from_str("[4,-6]").unwrap();
    assert_eq!((r.numer(), r.denom()), (-2, 3));
    assert!(serde_json::from_str::<Rational>("[1,0]").is_err());
}

#[test]
fn dimensions_keep_their_tag() {
    let json = serde_json::to_string(&Dimensions::FORCE).unwrap();
    assert_eq!(json, "[[1,1],[1,1],[-2,1],[0,1],[0,1],[0,1],[0,1]]");
    let back: Dimensions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Dimensions::FORCE);
    assert_eq!(back.summary(), Some(DimensionsSummary::Force));
}

#[test]
fn dimensions_are_reclassified_on_read() {
    // Length over time, with an unreduced length exponent.
    let d: Dimensions =
        serde_json::from_str("[[0,1],[2,2],[-1,1],[0,1],[0,1],[0,1],[0,1]]").unwrap();
    assert_eq!(d.summary(), Some(DimensionsSummary::Velocity));
    assert_eq!(d, Dimensions::LENGTH.div(&Dimensions::TIME));
    assert_eq!(d, Dimensions::VELOCITY);

    let d: Dimensions =
        serde_json::from_str("[[1,2],[0,1],[0,1],[0,1],[0,1],[0,1],[0,1]]").unwrap();
    assert_eq!(d.summary(), None);
    assert!(!d.is_one());
}
