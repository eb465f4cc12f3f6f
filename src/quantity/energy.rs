use std::{
    fmt::{Display, Formatter},
    ops::Div,
};

use chrono::TimeDelta;

use crate::quantity::{Quantity, power::Watts};

pub type WattHours = Quantity<f64, 1, 1, 0, 0>;

impl Display for WattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} Wh", self.0)
    }
}

impl Div<TimeDelta> for WattHours {
    type Output = Watts;

    fn div(self, rhs: TimeDelta) -> Self::Output {
        let hours = rhs.as_seconds_f64() / 3600.0;
        Quantity(self.0 / hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_over_time_delta() {
        assert_eq!(WattHours::from(300.0) / TimeDelta::minutes(30), Watts::from(600.0));
    }
}
