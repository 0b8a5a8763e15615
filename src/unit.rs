//! Units of measure: a real multiplier attached to a dimension vector.

use std::fmt;

use crate::dimensions::{Dimensions, DimensionsSummary};
use crate::error::{AlgebraError, Result};
use crate::format::NumberFormat;
use crate::rational::Rational;

/// Symbols for the SI base units, in dimension order.
pub const SI_SYMBOLS: [&str; 7] = ["kg", "m", "s", "C", "K", "mol", "cd"];

/// A scalar multiplier paired with dimensions and seven display labels.
///
/// Compatibility for additive combination depends on the dimensions only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unit {
    multiplier: f64,
    dimensions: Dimensions,
    labels: [&'static str; 7],
}

const fn si(dimensions: Dimensions) -> Unit {
    Unit {
        multiplier: 1.0,
        dimensions,
        labels: SI_SYMBOLS,
    }
}

impl Unit {
    pub const ONE: Unit = si(Dimensions::ONE);
    pub const KILOGRAM: Unit = si(Dimensions::MASS);
    pub const METER: Unit = si(Dimensions::LENGTH);
    pub const SECOND: Unit = si(Dimensions::TIME);
    pub const COULOMB: Unit = si(Dimensions::ELECTRIC_CHARGE);
    pub const AMPERE: Unit = si(Dimensions::ELECTRIC_CURRENT);
    pub const KELVIN: Unit = si(Dimensions::THERMODYNAMIC_TEMPERATURE);
    pub const MOLE: Unit = si(Dimensions::AMOUNT_OF_SUBSTANCE);
    pub const CANDELA: Unit = si(Dimensions::LUMINOUS_INTENSITY);
    pub const NEWTON: Unit = si(Dimensions::FORCE);
    pub const JOULE: Unit = si(Dimensions::ENERGY_OR_TORQUE);
    pub const JOULE_SECOND: Unit = si(Dimensions::ANGULAR_MOMENTUM);
    pub const METER_SQUARED: Unit = si(Dimensions::AREA);
    pub const METER_CUBED: Unit = si(Dimensions::VOLUME);
    pub const ELECTRIC_FIELD: Unit = si(Dimensions::ELECTRIC_FIELD);
    pub const COULOMB_SQUARED_PER_NEWTON: Unit = si(Dimensions::ELECTRIC_PERMITTIVITY_TIMES_AREA);
    pub const INV_METER: Unit = si(Dimensions::INV_LENGTH);
    pub const INV_KILOGRAM: Unit = si(Dimensions::INV_MASS);
    pub const INV_KILOGRAM_METER_SQUARED: Unit = si(Dimensions::INV_MOMENT_OF_INERTIA);
    pub const INV_SECOND: Unit = si(Dimensions::INV_TIME);
    pub const KILOGRAM_METER_SQUARED: Unit = si(Dimensions::MOMENT_OF_INERTIA);
    pub const KILOGRAM_METER_PER_SECOND: Unit = si(Dimensions::MOMENTUM);
    pub const KILOGRAM_SQUARED_METER_SQUARED_PER_SECOND_SQUARED: Unit =
        si(Dimensions::MOMENTUM_SQUARED);
    pub const METER_SQUARED_PER_SECOND: Unit = si(Dimensions::RATE_OF_CHANGE_OF_AREA);
    pub const STIFFNESS: Unit = si(Dimensions::STIFFNESS);
    pub const SECOND_SQUARED: Unit = si(Dimensions::TIME_SQUARED);
    pub const METER_PER_SECOND: Unit = si(Dimensions::VELOCITY);
    pub const METER_SQUARED_PER_SECOND_SQUARED: Unit = si(Dimensions::VELOCITY_SQUARED);

    /// A unit labelled with the SI base symbols.
    pub fn new(multiplier: f64, dimensions: Dimensions) -> Self {
        Self::value_of(multiplier, dimensions, SI_SYMBOLS)
    }

    /// A unit with custom labels; there must be exactly seven.
    pub fn with_labels(multiplier: f64, dimensions: Dimensions, labels: &[&'static str]) -> Result<Self> {
        let labels: [&'static str; 7] =
            labels.try_into().map_err(|_| AlgebraError::InvalidArgument {
                name: "labels",
                reason: format!("Expecting 7 elements in the labels array, got {}.", labels.len()),
            })?;
        Ok(Self::value_of(multiplier, dimensions, labels))
    }

    /// Returns the canonical SI unit when the multiplier is one and the dimensions are recognised.
    pub fn value_of(multiplier: f64, dimensions: Dimensions, labels: [&'static str; 7]) -> Self {
        if multiplier == 1.0 && labels == SI_SYMBOLS {
            if let Some(summary) = dimensions.summary() {
                return Self::canonical(summary);
            }
        }
        Self {
            multiplier,
            dimensions,
            labels,
        }
    }

    /// The SI unit for a recognised dimension combination.
    pub const fn canonical(summary: DimensionsSummary) -> Unit {
        match summary {
            DimensionsSummary::AmountOfSubstance => Self::MOLE,
            DimensionsSummary::AngularMomentum => Self::JOULE_SECOND,
            DimensionsSummary::Area => Self::METER_SQUARED,
            DimensionsSummary::ElectricCharge => Self::COULOMB,
            DimensionsSummary::ElectricCurrent => Self::AMPERE,
            DimensionsSummary::ElectricField => Self::ELECTRIC_FIELD,
            DimensionsSummary::ElectricPermittivityTimesArea => Self::COULOMB_SQUARED_PER_NEWTON,
            DimensionsSummary::EnergyOrTorque => Self::JOULE,
            DimensionsSummary::Force => Self::NEWTON,
            DimensionsSummary::InvLength => Self::INV_METER,
            DimensionsSummary::InvMass => Self::INV_KILOGRAM,
            DimensionsSummary::InvMomentOfInertia => Self::INV_KILOGRAM_METER_SQUARED,
            DimensionsSummary::InvTime => Self::INV_SECOND,
            DimensionsSummary::Length => Self::METER,
            DimensionsSummary::LuminousIntensity => Self::CANDELA,
            DimensionsSummary::Mass => Self::KILOGRAM,
            DimensionsSummary::MomentOfInertia => Self::KILOGRAM_METER_SQUARED,
            DimensionsSummary::Momentum => Self::KILOGRAM_METER_PER_SECOND,
            DimensionsSummary::MomentumSquared => {
                Self::KILOGRAM_SQUARED_METER_SQUARED_PER_SECOND_SQUARED
            }
            DimensionsSummary::One => Self::ONE,
            DimensionsSummary::RateOfChangeOfArea => Self::METER_SQUARED_PER_SECOND,
            DimensionsSummary::Stiffness => Self::STIFFNESS,
            DimensionsSummary::ThermodynamicTemperature => Self::KELVIN,
            DimensionsSummary::Time => Self::SECOND,
            DimensionsSummary::TimeSquared => Self::SECOND_SQUARED,
            DimensionsSummary::Velocity => Self::METER_PER_SECOND,
            DimensionsSummary::VelocitySquared => Self::METER_SQUARED_PER_SECOND_SQUARED,
            DimensionsSummary::Volume => Self::METER_CUBED,
        }
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn labels(&self) -> &[&'static str; 7] {
        &self.labels
    }

    pub fn is_one(&self) -> bool {
        self.dimensions.is_one() && self.multiplier == 1.0
    }

    /// Returns `self` when both units have the same dimensions.
    pub fn compatible(&self, rhs: &Unit) -> Result<Unit> {
        self.dimensions.compatible(&rhs.dimensions)?;
        Ok(*self)
    }

    pub fn is_compatible(&self, rhs: &Unit) -> bool {
        self.dimensions == rhs.dimensions
    }

    pub fn mul(&self, rhs: &Unit) -> Unit {
        Self::value_of(
            self.multiplier * rhs.multiplier,
            self.dimensions.mul(&rhs.dimensions),
            self.labels,
        )
    }

    pub fn div(&self, rhs: &Unit) -> Unit {
        Self::value_of(
            self.multiplier / rhs.multiplier,
            self.dimensions.div(&rhs.dimensions),
            self.labels,
        )
    }

    pub fn pow(&self, exponent: Rational) -> Unit {
        Self::value_of(
            self.multiplier.powf(exponent.to_f64()),
            self.dimensions.pow(exponent),
            self.labels,
        )
    }

    pub fn inv(&self) -> Unit {
        Self::value_of(1.0 / self.multiplier, self.dimensions.inv(), self.labels)
    }

    pub fn sqrt(&self) -> Unit {
        Self::value_of(self.multiplier.sqrt(), self.dimensions.sqrt(), self.labels)
    }

    pub fn neg(&self) -> Unit {
        Self::value_of(-self.multiplier, self.dimensions, self.labels)
    }

    pub fn scale(&self, alpha: f64) -> Unit {
        Self::value_of(alpha * self.multiplier, self.dimensions, self.labels)
    }

    /// Renders the unit, preferring a canonical derived-unit name when the exponents match one.
    ///
    /// The compact form drops a multiplier of one.
    pub fn format(&self, style: NumberFormat, compact: bool) -> String {
        if let Some(decode) = derived_name(&self.dimensions) {
            if compact && self.multiplier == 1.0 {
                return decode.to_string();
            }
            return format!("{} * {}", NumberFormat::Shortest.format(self.multiplier), decode);
        }
        let formatted = style.format(self.multiplier);
        let operator = if self.multiplier == 1.0 || self.dimensions.is_one() {
            if compact { "" } else { " " }
        } else {
            " "
        };
        let scale = if self.multiplier == 1.0 && compact { "" } else { formatted.as_str() };
        let factors: Vec<String> = self
            .dimensions
            .exponents()
            .iter()
            .zip(self.labels)
            .filter_map(|(q, label)| match (q.numer(), q.denom()) {
                (0, _) => None,
                (1, 1) => Some(label.to_string()),
                (n, 1) => Some(format!("{label}**{n}")),
                _ => Some(format!("{label}**{q}")),
            })
            .collect();
        format!("{scale}{operator}{}", factors.join(" "))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.format(NumberFormat::Shortest, false))
    }
}

/// Canonical derived units keyed by integer exponents (M, L, T, Q, Θ, N, J).
const DERIVED_UNITS: [([i64; 7], &str); 36] = [
    ([-1, -3, 2, 2, 0, 0, 0], "F/m or C**2/N·m**2"),
    ([-1, -2, 1, 2, 0, 0, 0], "S or A/V"),
    ([-1, -2, 2, 2, 0, 0, 0], "F or C/V"),
    ([-1, -1, 2, 2, 0, 0, 0], "C**2/N"),
    ([-1, 0, 0, 1, 0, 0, 0], "C/kg"),
    ([-1, 3, -2, 0, 0, 0, 0], "N·m·m/kg·kg"),
    ([0, -3, 0, 1, 0, 0, 0], "C/m**3"),
    ([0, -2, 0, 1, 0, 0, 0], "C/m**2"),
    ([0, -1, 0, 1, 0, 0, 0], "C/m"),
    ([0, 2, -2, 0, 0, 0, 0], "J/kg"),
    ([0, 0, -1, 0, 0, 0, 0], "Hz"),
    ([0, 0, -1, 1, 0, 0, 0], "A"),
    ([0, 1, -2, 0, 0, 0, 0], "m/s**2"),
    ([0, 1, -1, 0, 0, 0, 0], "m/s"),
    ([1, 1, -1, 0, 0, 0, 0], "kg·m/s"),
    ([1, -1, -2, 0, 0, 0, 0], "Pa or N/m**2 or J/m**3"),
    ([1, -1, -1, 0, 0, 0, 0], "Pa·s"),
    ([1, 0, -3, 0, 0, 0, 0], "W/m**2"),
    ([1, 0, -2, 0, 0, 0, 0], "N/m"),
    ([1, 0, -1, -1, 0, 0, 0], "T or Wb/m**2"),
    ([1, 1, -3, 0, -1, 0, 0], "W/(m·K)"),
    ([1, 1, -2, -1, 0, 0, 0], "V/m or N/C"),
    ([1, 1, -2, 0, 0, 0, 0], "N"),
    ([1, 1, 0, -2, 0, 0, 0], "H/m"),
    ([1, 2, -2, 0, -1, 0, 0], "J/K"),
    ([0, 2, -2, 0, -1, 0, 0], "J/(kg·K)"),
    ([1, 2, -2, 0, -1, -1, 0], "J/(mol·K)"),
    ([1, 2, -2, 0, 0, -1, 0], "J/mol"),
    ([1, 2, -2, 0, 0, 0, 0], "J or N·m"),
    ([1, 2, -1, 0, 0, 0, 0], "J·s"),
    ([1, 2, -3, 0, 0, 0, 0], "W or J/s"),
    ([1, 2, -2, -1, 0, 0, 0], "V or W/A"),
    ([1, 2, -1, -2, 0, 0, 0], "Ω or V/A"),
    ([1, 2, 0, -2, 0, 0, 0], "H or Wb/A"),
    ([1, 2, -1, -1, 0, 0, 0], "Wb"),
    ([1, 3, -2, -2, 0, 0, 0], "N·m**2/C**2"),
];

fn derived_name(dimensions: &Dimensions) -> Option<&'static str> {
    let exponents = dimensions.exponents();
    if exponents.iter().any(|q| q.denom() != 1) {
        return None;
    }
    let key = exponents.map(|q| q.numer());
    DERIVED_UNITS
        .iter()
        .find(|(pattern, _)| *pattern == key)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn value_of_returns_canonical_units() {
        let n = Unit::new(1.0, Dimensions::MASS.mul(&Dimensions::LENGTH).div(&Dimensions::TIME_SQUARED));
        assert_eq!(n, Unit::NEWTON);
        let km = Unit::new(1000.0, Dimensions::LENGTH);
        assert_eq!(km.multiplier(), 1000.0);
        assert_ne!(km, Unit::METER);
    }

    #[test]
    fn mul_then_div_restores() {
        let u = Unit::new(2.5, Dimensions::FORCE);
        let v = Unit::new(4.0, Dimensions::VELOCITY);
        let back = u.div(&v).mul(&v);
        assert!((back.multiplier() - u.multiplier()).abs() < EPS);
        assert_eq!(back.dimensions(), u.dimensions());
    }

    #[test]
    fn pow_and_sqrt_scale_the_multiplier() {
        let u = Unit::new(3.0, Dimensions::LENGTH);
        let sq = u.pow(Rational::TWO);
        assert!((sq.multiplier() - 9.0).abs() < EPS);
        assert_eq!(*sq.dimensions(), Dimensions::AREA);
        let root = sq.sqrt();
        assert!((root.multiplier() - 3.0).abs() < EPS);
        assert_eq!(*root.dimensions(), Dimensions::LENGTH);
        assert_eq!(Unit::SECOND.inv(), Unit::INV_SECOND);
    }

    #[test]
    fn compatibility_depends_on_dimensions_only() {
        let km = Unit::new(1000.0, Dimensions::LENGTH);
        assert_eq!(km.compatible(&Unit::METER).unwrap(), km);
        assert!(km.is_compatible(&Unit::METER));
        let err = Unit::METER.compatible(&Unit::SECOND).unwrap_err();
        assert!(matches!(err, AlgebraError::DimensionMismatch { .. }));
    }

    #[test]
    fn labels_must_have_seven_entries() {
        let err = Unit::with_labels(1.0, Dimensions::ONE, &["a", "b"]).unwrap_err();
        assert!(matches!(err, AlgebraError::InvalidArgument { name: "labels", .. }));
        let custom = ["M", "L", "T", "Q", "Θ", "N", "J"];
        let u = Unit::with_labels(1.0, Dimensions::LENGTH, &custom).unwrap();
        assert_eq!(u.format(NumberFormat::Shortest, true), "L");
    }

    #[test]
    fn display_prefers_derived_names() {
        assert_eq!(Unit::NEWTON.to_string(), "1 * N");
        assert_eq!(Unit::NEWTON.format(NumberFormat::Shortest, true), "N");
        assert_eq!(Unit::NEWTON.scale(2.0).format(NumberFormat::Shortest, true), "2 * N");
        assert_eq!(Unit::METER_PER_SECOND.format(NumberFormat::Shortest, true), "m/s");
        assert_eq!(Unit::JOULE.format(NumberFormat::Shortest, true), "J or N·m");
    }

    #[test]
    fn display_falls_back_to_base_symbols() {
        assert_eq!(Unit::METER.to_string(), "1 m");
        assert_eq!(Unit::METER.format(NumberFormat::Shortest, true), "m");
        assert_eq!(Unit::KILOGRAM_METER_SQUARED.format(NumberFormat::Shortest, true), "kg m**2");
        let km = Unit::new(1000.0, Dimensions::LENGTH);
        assert_eq!(km.format(NumberFormat::Shortest, true), "1000 m");
        assert_eq!(km.format(NumberFormat::Fixed(1), false), "1000.0 m");
        assert_eq!(Unit::METER.sqrt().format(NumberFormat::Shortest, true), "m**1/2");
    }
}
