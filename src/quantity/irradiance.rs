use std::{
    fmt::{Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, power::Watts, surface_area::SquareMetres};

/// Instantaneous solar power density hitting the panel.
pub type WattsPerSquareMetre = Quantity<f64, 1, 0, -1, 0>;

impl Display for WattsPerSquareMetre {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} W/m²", self.0)
    }
}

impl Mul<SquareMetres> for WattsPerSquareMetre {
    type Output = Watts;

    fn mul(self, rhs: SquareMetres) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}
