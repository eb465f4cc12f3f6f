use crate::quantity::{irradiance::WattsPerSquareMetre, power::Watts, surface_area::SquareMetres};

/// Photovoltaic panel array.
#[derive(Copy, Clone)]
pub struct Panel {
    pub efficiency: f64,
    pub surface_area: SquareMetres,
    pub max_output_power: Watts,
}

impl Panel {
    /// Solar input after the cell efficiency, clipped to the rated output.
    ///
    /// Upper clamp only: negative irradiation passes through unguarded.
    pub fn output_power(&self, irradiation: WattsPerSquareMetre) -> Watts {
        (irradiation * self.surface_area * self.efficiency).min(self.max_output_power)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> Panel {
        Panel {
            efficiency: 0.2,
            surface_area: SquareMetres::from(2.0),
            max_output_power: Watts::from(1000.0),
        }
    }

    #[test]
    fn output_below_rating() {
        assert_eq!(panel().output_power(WattsPerSquareMetre::from(800.0)), Watts::from(320.0));
    }

    #[test]
    fn output_clips_at_rating() {
        let panel = Panel { max_output_power: Watts::from(100.0), ..panel() };
        assert_eq!(panel.output_power(WattsPerSquareMetre::from(800.0)), Watts::from(100.0));
    }

    #[test]
    fn zero_irradiation() {
        assert_eq!(panel().output_power(WattsPerSquareMetre::ZERO), Watts::ZERO);
    }
}
