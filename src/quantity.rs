pub mod energy;
pub mod irradiance;
pub mod power;
pub mod speed;
pub mod surface_area;

use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

/// Dimensioned newtype over a raw number.
///
/// The const parameters are the exponents of power, time, area and distance,
/// so for example energy is `POWER = 1, TIME = 1`. Cross-dimension products
/// are implemented per concrete alias pair rather than via const arithmetic.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
pub struct Quantity<T, const POWER: isize, const TIME: isize, const AREA: isize, const DIST: isize>(
    pub T,
);

impl<T, const POWER: isize, const TIME: isize, const AREA: isize, const DIST: isize>
    Quantity<T, POWER, TIME, AREA, DIST>
where
    Self: PartialOrd,
{
    pub fn min(mut self, rhs: Self) -> Self {
        if rhs < self {
            self = rhs;
        }
        self
    }

    pub fn max(mut self, rhs: Self) -> Self {
        if rhs > self {
            self = rhs;
        }
        self
    }

    pub fn clamp(mut self, min: Self, max: Self) -> Self {
        if self < min {
            self = min;
        }
        if self > max {
            self = max;
        }
        self
    }
}

impl<const POWER: isize, const TIME: isize, const AREA: isize, const DIST: isize>
    Quantity<f64, POWER, TIME, AREA, DIST>
{
    pub const ZERO: Self = Self(0.0);
}

impl<T, const POWER: isize, const TIME: isize, const AREA: isize, const DIST: isize> Mul<T>
    for Quantity<T, POWER, TIME, AREA, DIST>
where
    T: Mul<T>,
{
    type Output = Quantity<T::Output, POWER, TIME, AREA, DIST>;

    fn mul(self, rhs: T) -> Self::Output {
        Quantity(self.0 * rhs)
    }
}

impl<T, const POWER: isize, const TIME: isize, const AREA: isize, const DIST: isize> Div<T>
    for Quantity<T, POWER, TIME, AREA, DIST>
where
    T: Div<T>,
{
    type Output = Quantity<T::Output, POWER, TIME, AREA, DIST>;

    fn div(self, rhs: T) -> Self::Output {
        Quantity(self.0 / rhs)
    }
}
