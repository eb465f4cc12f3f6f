use chrono::TimeDelta;

use crate::{
    boat::{Boat, telemetry::Telemetry},
    race::{
        event::{EventProgress, EventSpec},
        series::Sample,
    },
};

/// Race strategy: decides the motor throttle for the next timestep.
///
/// This is the only hook a competition strategy gets. Everything it might
/// want to pace itself against is handed in read-only: the current input
/// row, the previous telemetry, the event progress so far and the boat
/// itself. The returned fraction is clamped to `[0, 1]` downstream.
pub trait EnergyController {
    #[allow(clippy::too_many_arguments)]
    fn throttle(
        &self,
        dt: TimeDelta,
        sample: &Sample,
        previous: Option<&Telemetry>,
        progress: &EventProgress,
        boat: &Boat,
        event: &EventSpec,
    ) -> f64;
}

/// The simplest possible strategy: hold one throttle the whole race.
pub struct ConstantThrottle(pub f64);

impl EnergyController for ConstantThrottle {
    fn throttle(
        &self,
        _dt: TimeDelta,
        _sample: &Sample,
        _previous: Option<&Telemetry>,
        _progress: &EventProgress,
        _boat: &Boat,
        _event: &EventSpec,
    ) -> f64 {
        self.0
    }
}

/// Eases off the throttle as the battery approaches its reserve.
///
/// Above `reserve_soc` the base throttle is used unchanged; below it the
/// throttle scales down linearly and reaches zero at the battery's own
/// state-of-charge floor.
pub struct SocGuard {
    pub throttle: f64,
    pub reserve_soc: f64,
}

impl EnergyController for SocGuard {
    fn throttle(
        &self,
        _dt: TimeDelta,
        _sample: &Sample,
        _previous: Option<&Telemetry>,
        _progress: &EventProgress,
        boat: &Boat,
        _event: &EventSpec,
    ) -> f64 {
        let floor = boat.battery.min_soc();
        let soc = boat.battery.soc();
        // A reserve at or below the floor leaves no room to scale within.
        if self.reserve_soc <= floor {
            return if soc > floor { self.throttle } else { 0.0 };
        }
        let headroom = ((soc - floor) / (self.reserve_soc - floor)).clamp(0.0, 1.0);
        self.throttle * headroom
    }
}
