use std::{
    fmt::{Display, Formatter},
    ops::Mul,
};

use chrono::TimeDelta;

use crate::quantity::{Quantity, energy::WattHours, speed::MetresPerSecond};

pub type Watts = Quantity<f64, 1, 0, 0, 0>;

impl Display for Watts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} W", self.0)
    }
}

impl Mul<TimeDelta> for Watts {
    type Output = WattHours;

    fn mul(self, rhs: TimeDelta) -> Self::Output {
        let hours = rhs.as_seconds_f64() / 3600.0;
        Quantity(self.0 * hours)
    }
}

/// Hull constant: how much speed a watt of propulsive power buys.
pub type MetresPerSecondPerWatt = Quantity<f64, -1, -1, 0, 1>;

impl Mul<MetresPerSecondPerWatt> for Watts {
    type Output = MetresPerSecond;

    fn mul(self, rhs: MetresPerSecondPerWatt) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}
