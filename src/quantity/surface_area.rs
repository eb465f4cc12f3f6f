use std::fmt::{Display, Formatter};

use crate::quantity::Quantity;

pub type SquareMetres = Quantity<f64, 0, 0, 1, 0>;

impl Display for SquareMetres {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} m²", self.0)
    }
}
