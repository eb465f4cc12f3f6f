use std::{
    fmt::{Display, Formatter},
    ops::Mul,
};

use chrono::TimeDelta;

use crate::quantity::Quantity;

pub type MetresPerSecond = Quantity<f64, 0, -1, 0, 1>;

impl Display for MetresPerSecond {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} m/s", self.0)
    }
}

pub type Metres = Quantity<f64, 0, 0, 0, 1>;

impl Display for Metres {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} m", self.0)
    }
}

impl Mul<TimeDelta> for MetresPerSecond {
    type Output = Metres;

    fn mul(self, rhs: TimeDelta) -> Self::Output {
        Quantity(self.0 * rhs.as_seconds_f64())
    }
}
