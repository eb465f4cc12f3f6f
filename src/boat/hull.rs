use crate::quantity::{
    power::{MetresPerSecondPerWatt, Watts},
    speed::MetresPerSecond,
};

/// Linear hull model: propulsive power buys speed at a fixed rate.
#[derive(Copy, Clone)]
pub struct Hull {
    pub speed_over_power: MetresPerSecondPerWatt,
}

impl Hull {
    pub fn speed(&self, propulsive_power: Watts) -> MetresPerSecond {
        propulsive_power * self.speed_over_power
    }
}
