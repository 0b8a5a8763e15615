//! Physical dimensions as seven rational exponents over the SI base quantities.
//!
//! Common exponent combinations are recognised and tagged with a
//! [`DimensionsSummary`], which doubles as a key into a read-only registry of
//! shared singletons.

use std::fmt;

use tracing::trace;

use crate::error::{AlgebraError, Result};
use crate::rational::Rational;

/// Closed set of recognised dimension combinations.
///
/// Variants are declared in the same order as [`DimensionsSummary::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DimensionsSummary {
    AmountOfSubstance,
    AngularMomentum,
    Area,
    ElectricCharge,
    ElectricCurrent,
    ElectricField,
    ElectricPermittivityTimesArea,
    EnergyOrTorque,
    Force,
    InvLength,
    InvMass,
    InvMomentOfInertia,
    InvTime,
    Length,
    LuminousIntensity,
    Mass,
    MomentOfInertia,
    Momentum,
    MomentumSquared,
    One,
    RateOfChangeOfArea,
    Stiffness,
    ThermodynamicTemperature,
    Time,
    TimeSquared,
    Velocity,
    VelocitySquared,
    Volume,
}

impl DimensionsSummary {
    pub const ALL: [DimensionsSummary; 28] = [
        Self::AmountOfSubstance,
        Self::AngularMomentum,
        Self::Area,
        Self::ElectricCharge,
        Self::ElectricCurrent,
        Self::ElectricField,
        Self::ElectricPermittivityTimesArea,
        Self::EnergyOrTorque,
        Self::Force,
        Self::InvLength,
        Self::InvMass,
        Self::InvMomentOfInertia,
        Self::InvTime,
        Self::Length,
        Self::LuminousIntensity,
        Self::Mass,
        Self::MomentOfInertia,
        Self::Momentum,
        Self::MomentumSquared,
        Self::One,
        Self::RateOfChangeOfArea,
        Self::Stiffness,
        Self::ThermodynamicTemperature,
        Self::Time,
        Self::TimeSquared,
        Self::Velocity,
        Self::VelocitySquared,
        Self::Volume,
    ];

    /// Integer exponents (M, L, T, Q, Θ, N, J) for this tag.
    pub const fn exponents(self) -> [i64; 7] {
        match self {
            Self::AmountOfSubstance => [0, 0, 0, 0, 0, 1, 0],
            Self::AngularMomentum => [1, 2, -1, 0, 0, 0, 0],
            Self::Area => [0, 2, 0, 0, 0, 0, 0],
            Self::ElectricCharge => [0, 0, 0, 1, 0, 0, 0],
            Self::ElectricCurrent => [0, 0, -1, 1, 0, 0, 0],
            Self::ElectricField => [1, 1, -2, -1, 0, 0, 0],
            Self::ElectricPermittivityTimesArea => [-1, -1, 2, 2, 0, 0, 0],
            Self::EnergyOrTorque => [1, 2, -2, 0, 0, 0, 0],
            Self::Force => [1, 1, -2, 0, 0, 0, 0],
            Self::InvLength => [0, -1, 0, 0, 0, 0, 0],
            Self::InvMass => [-1, 0, 0, 0, 0, 0, 0],
            Self::InvMomentOfInertia => [-1, -2, 0, 0, 0, 0, 0],
            Self::InvTime => [0, 0, -1, 0, 0, 0, 0],
            Self::Length => [0, 1, 0, 0, 0, 0, 0],
            Self::LuminousIntensity => [0, 0, 0, 0, 0, 0, 1],
            Self::Mass => [1, 0, 0, 0, 0, 0, 0],
            Self::MomentOfInertia => [1, 2, 0, 0, 0, 0, 0],
            Self::Momentum => [1, 1, -1, 0, 0, 0, 0],
            Self::MomentumSquared => [2, 2, -2, 0, 0, 0, 0],
            Self::One => [0, 0, 0, 0, 0, 0, 0],
            Self::RateOfChangeOfArea => [0, 2, -1, 0, 0, 0, 0],
            Self::Stiffness => [1, 0, -2, 0, 0, 0, 0],
            Self::ThermodynamicTemperature => [0, 0, 0, 0, 1, 0, 0],
            Self::Time => [0, 0, 1, 0, 0, 0, 0],
            Self::TimeSquared => [0, 0, 2, 0, 0, 0, 0],
            Self::Velocity => [0, 1, -1, 0, 0, 0, 0],
            Self::VelocitySquared => [0, 2, -2, 0, 0, 0, 0],
            Self::Volume => [0, 3, 0, 0, 0, 0, 0],
        }
    }

    /// Looks up the tag for the given exponents, if any.
    pub fn classify(exponents: &[Rational; 7]) -> Option<Self> {
        if exponents.iter().any(|q| q.denom() != 1) {
            return None;
        }
        let n = exponents.map(|q| q.numer());
        let summary = match n {
            [0, 0, 0, 0, 0, 1, 0] => Self::AmountOfSubstance,
            [1, 2, -1, 0, 0, 0, 0] => Self::AngularMomentum,
            [0, 2, 0, 0, 0, 0, 0] => Self::Area,
            [0, 0, 0, 1, 0, 0, 0] => Self::ElectricCharge,
            [0, 0, -1, 1, 0, 0, 0] => Self::ElectricCurrent,
            [1, 1, -2, -1, 0, 0, 0] => Self::ElectricField,
            [-1, -1, 2, 2, 0, 0, 0] => Self::ElectricPermittivityTimesArea,
            [1, 2, -2, 0, 0, 0, 0] => Self::EnergyOrTorque,
            [1, 1, -2, 0, 0, 0, 0] => Self::Force,
            [0, -1, 0, 0, 0, 0, 0] => Self::InvLength,
            [-1, 0, 0, 0, 0, 0, 0] => Self::InvMass,
            [-1, -2, 0, 0, 0, 0, 0] => Self::InvMomentOfInertia,
            [0, 0, -1, 0, 0, 0, 0] => Self::InvTime,
            [0, 1, 0, 0, 0, 0, 0] => Self::Length,
            [0, 0, 0, 0, 0, 0, 1] => Self::LuminousIntensity,
            [1, 0, 0, 0, 0, 0, 0] => Self::Mass,
            [1, 2, 0, 0, 0, 0, 0] => Self::MomentOfInertia,
            [1, 1, -1, 0, 0, 0, 0] => Self::Momentum,
            [2, 2, -2, 0, 0, 0, 0] => Self::MomentumSquared,
            [0, 0, 0, 0, 0, 0, 0] => Self::One,
            [0, 2, -1, 0, 0, 0, 0] => Self::RateOfChangeOfArea,
            [1, 0, -2, 0, 0, 0, 0] => Self::Stiffness,
            [0, 0, 0, 0, 1, 0, 0] => Self::ThermodynamicTemperature,
            [0, 0, 1, 0, 0, 0, 0] => Self::Time,
            [0, 0, 2, 0, 0, 0, 0] => Self::TimeSquared,
            [0, 1, -1, 0, 0, 0, 0] => Self::Velocity,
            [0, 2, -2, 0, 0, 0, 0] => Self::VelocitySquared,
            [0, 3, 0, 0, 0, 0, 0] => Self::Volume,
            _ => return None,
        };
        Some(summary)
    }
}

const LABELS: [&str; 7] = [
    "mass",
    "length",
    "time",
    "charge",
    "thermodynamic temperature",
    "amount of substance",
    "luminous intensity",
];

/// Exponents of mass, length, time, charge, temperature, amount and luminous intensity.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[Rational; 7]", into = "[Rational; 7]")
)]
pub struct Dimensions {
    exponents: [Rational; 7],
    summary: Option<DimensionsSummary>,
}

static REGISTRY: [Dimensions; 28] = {
    let mut out = [Dimensions::ONE; 28];
    let mut i = 0;
    while i < 28 {
        out[i] = Dimensions::tagged(DimensionsSummary::ALL[i]);
        i += 1;
    }
    out
};

impl Dimensions {
    pub const ONE: Dimensions = Dimensions::tagged(DimensionsSummary::One);
    pub const MASS: Dimensions = Dimensions::tagged(DimensionsSummary::Mass);
    pub const LENGTH: Dimensions = Dimensions::tagged(DimensionsSummary::Length);
    pub const TIME: Dimensions = Dimensions::tagged(DimensionsSummary::Time);
    pub const ELECTRIC_CHARGE: Dimensions = Dimensions::tagged(DimensionsSummary::ElectricCharge);
    pub const THERMODYNAMIC_TEMPERATURE: Dimensions =
        Dimensions::tagged(DimensionsSummary::ThermodynamicTemperature);
    pub const AMOUNT_OF_SUBSTANCE: Dimensions =
        Dimensions::tagged(DimensionsSummary::AmountOfSubstance);
    pub const LUMINOUS_INTENSITY: Dimensions =
        Dimensions::tagged(DimensionsSummary::LuminousIntensity);
    pub const ANGULAR_MOMENTUM: Dimensions = Dimensions::tagged(DimensionsSummary::AngularMomentum);
    pub const AREA: Dimensions = Dimensions::tagged(DimensionsSummary::Area);
    pub const ELECTRIC_CURRENT: Dimensions = Dimensions::tagged(DimensionsSummary::ElectricCurrent);
    pub const ELECTRIC_FIELD: Dimensions = Dimensions::tagged(DimensionsSummary::ElectricField);
    pub const ELECTRIC_PERMITTIVITY_TIMES_AREA: Dimensions =
        Dimensions::tagged(DimensionsSummary::ElectricPermittivityTimesArea);
    pub const ENERGY_OR_TORQUE: Dimensions = Dimensions::tagged(DimensionsSummary::EnergyOrTorque);
    pub const FORCE: Dimensions = Dimensions::tagged(DimensionsSummary::Force);
    pub const INV_LENGTH: Dimensions = Dimensions::tagged(DimensionsSummary::InvLength);
    pub const INV_MASS: Dimensions = Dimensions::tagged(DimensionsSummary::InvMass);
    pub const INV_MOMENT_OF_INERTIA: Dimensions =
        Dimensions::tagged(DimensionsSummary::InvMomentOfInertia);
    pub const INV_TIME: Dimensions = Dimensions::tagged(DimensionsSummary::InvTime);
    pub const MOMENT_OF_INERTIA: Dimensions = Dimensions::tagged(DimensionsSummary::MomentOfInertia);
    pub const MOMENTUM: Dimensions = Dimensions::tagged(DimensionsSummary::Momentum);
    pub const MOMENTUM_SQUARED: Dimensions = Dimensions::tagged(DimensionsSummary::MomentumSquared);
    pub const RATE_OF_CHANGE_OF_AREA: Dimensions =
        Dimensions::tagged(DimensionsSummary::RateOfChangeOfArea);
    pub const STIFFNESS: Dimensions = Dimensions::tagged(DimensionsSummary::Stiffness);
    pub const TIME_SQUARED: Dimensions = Dimensions::tagged(DimensionsSummary::TimeSquared);
    pub const VELOCITY: Dimensions = Dimensions::tagged(DimensionsSummary::Velocity);
    pub const VELOCITY_SQUARED: Dimensions = Dimensions::tagged(DimensionsSummary::VelocitySquared);
    pub const VOLUME: Dimensions = Dimensions::tagged(DimensionsSummary::Volume);

    const fn tagged(summary: DimensionsSummary) -> Self {
        let n = summary.exponents();
        let mut exponents = [Rational::ZERO; 7];
        let mut i = 0;
        while i < 7 {
            exponents[i] = match n[i] {
                -2 => Rational::MINUS_TWO,
                -1 => Rational::MINUS_ONE,
                1 => Rational::ONE,
                2 => Rational::TWO,
                3 => Rational::THREE,
                _ => Rational::ZERO,
            };
            i += 1;
        }
        Self {
            exponents,
            summary: Some(summary),
        }
    }

    /// Builds a dimension vector, tagging it when the combination is recognised.
    pub fn value_of(
        m: Rational,
        l: Rational,
        t: Rational,
        q: Rational,
        temperature: Rational,
        amount: Rational,
        intensity: Rational,
    ) -> Self {
        Self::from_exponents([m, l, t, q, temperature, amount, intensity])
    }

    pub fn from_exponents(exponents: [Rational; 7]) -> Self {
        let summary = DimensionsSummary::classify(&exponents);
        if summary.is_none() {
            trace!(dimensions = %DisplayExponents(&exponents), "unclassified dimensions");
        }
        Self { exponents, summary }
    }

    /// The shared registry entry for a tag.
    pub fn cached(summary: DimensionsSummary) -> &'static Dimensions {
        &REGISTRY[summary as usize]
    }

    /// The shared registry entry equal to this value, if it is a recognised combination.
    pub fn singleton(&self) -> Option<&'static Dimensions> {
        self.summary.map(Self::cached)
    }

    pub fn summary(&self) -> Option<DimensionsSummary> {
        self.summary
    }

    pub fn exponents(&self) -> &[Rational; 7] {
        &self.exponents
    }

    pub fn m(&self) -> Rational {
        self.exponents[0]
    }

    pub fn l(&self) -> Rational {
        self.exponents[1]
    }

    pub fn t(&self) -> Rational {
        self.exponents[2]
    }

    pub fn q(&self) -> Rational {
        self.exponents[3]
    }

    pub fn temperature(&self) -> Rational {
        self.exponents[4]
    }

    pub fn amount(&self) -> Rational {
        self.exponents[5]
    }

    pub fn intensity(&self) -> Rational {
        self.exponents[6]
    }

    fn zip_with(&self, rhs: &Dimensions, f: impl Fn(Rational, Rational) -> Rational) -> Self {
        let mut out = self.exponents;
        for (e, r) in out.iter_mut().zip(rhs.exponents) {
            *e = f(*e, r);
        }
        Self::from_exponents(out)
    }

    pub fn mul(&self, rhs: &Dimensions) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }

    pub fn div(&self, rhs: &Dimensions) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }

    pub fn pow(&self, exponent: Rational) -> Self {
        Self::from_exponents(self.exponents.map(|e| e * exponent))
    }

    pub fn sqrt(&self) -> Self {
        Self::from_exponents(self.exponents.map(|e| e / Rational::TWO))
    }

    pub fn inv(&self) -> Self {
        Self::from_exponents(self.exponents.map(|e| -e))
    }

    pub fn is_one(&self) -> bool {
        self.summary == Some(DimensionsSummary::One) || self.exponents.iter().all(Rational::is_zero)
    }

    /// Returns `self` when the dimensions agree, otherwise a `DimensionMismatch`.
    pub fn compatible(&self, rhs: &Dimensions) -> Result<Self> {
        if self == rhs {
            return Ok(*self);
        }
        Err(AlgebraError::DimensionMismatch {
            lhs: self.describe(),
            rhs: rhs.describe(),
        })
    }

    fn describe(&self) -> String {
        if self.is_one() {
            "dimensionless".to_string()
        } else {
            self.to_string()
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::ONE
    }
}

impl PartialEq for Dimensions {
    fn eq(&self, other: &Self) -> bool {
        match (self.summary, other.summary) {
            (Some(a), Some(b)) => a == b,
            _ => self.exponents == other.exponents,
        }
    }
}

impl From<[Rational; 7]> for Dimensions {
    fn from(exponents: [Rational; 7]) -> Self {
        Self::from_exponents(exponents)
    }
}

impl From<Dimensions> for [Rational; 7] {
    fn from(d: Dimensions) -> Self {
        d.exponents
    }
}

struct DisplayExponents<'a>(&'a [Rational; 7]);

impl fmt::Display for DisplayExponents<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for (q, label) in self.0.iter().zip(LABELS) {
            if q.numer() == 0 {
                continue;
            }
            if !first {
                f.write_str(" * ")?;
            }
            first = false;
            match (q.numer(), q.denom()) {
                (1, 1) => f.write_str(label)?,
                (n, 1) => write!(f, "{label} ** {n}")?,
                _ => write!(f, "{label} ** {q}")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&DisplayExponents(&self.exponents), f)
    }
}
