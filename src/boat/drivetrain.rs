use crate::quantity::power::Watts;

/// One lossy stage of the propulsion chain: ESC, motor or propulsion.
///
/// All three stages share the same shape: an upper clamp on the input power
/// followed by a one-way multiplicative loss on the output. The ESC is the
/// first stage and additionally translates the throttle fraction into an
/// input power via [`Self::throttle_input`].
#[derive(Copy, Clone)]
pub struct PowerConverter {
    pub efficiency: f64,
    pub max_input_power: Watts,
}

impl PowerConverter {
    /// Upper clamp only: an under-powered stage accepts whatever it gets.
    pub fn clamp_input(&self, power: Watts) -> Watts {
        power.min(self.max_input_power)
    }

    /// Throttle entry of the ESC stage: the fraction is clamped to `[0, 1]`
    /// and scaled by the stage's rated input power.
    pub fn throttle_input(&self, throttle: f64) -> Watts {
        self.max_input_power * throttle.clamp(0.0, 1.0)
    }

    pub fn output_power(&self, input_power: Watts) -> Watts {
        input_power * self.efficiency
    }
}
