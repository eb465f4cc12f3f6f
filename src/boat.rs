pub mod battery;
pub mod drivetrain;
pub mod hull;
pub mod panel;
pub mod telemetry;

use bon::Builder;
use chrono::TimeDelta;

use crate::{
    boat::{
        battery::Battery,
        drivetrain::PowerConverter,
        hull::Hull,
        panel::Panel,
        telemetry::Telemetry,
    },
    quantity::{irradiance::WattsPerSquareMetre, power::Watts},
};

/// Constant hotel load: instruments, pumps, the telemetry radio.
#[derive(Copy, Clone)]
pub struct Auxiliaries {
    pub power: Watts,
}

/// The whole boat: every stage of the power chain plus the hull.
///
/// Power flows along a fixed directed chain, so a timestep resolves in one
/// pass instead of iterating a circuit graph: targets are computed top-down,
/// the battery decides what is achievable, and the achievable power is then
/// propagated back through the same chain.
#[derive(Builder)]
pub struct Boat {
    pub panel: Panel,
    pub battery: Battery,
    pub auxiliaries: Auxiliaries,
    pub esc: PowerConverter,
    pub motor: PowerConverter,
    pub propulsion: PowerConverter,
    pub hull: Hull,
}

impl Boat {
    /// Resolve one timestep of the boat's power balance.
    ///
    /// The five steps below depend on each other in order. The battery is
    /// mutated exactly once, and the returned telemetry is consistent: the
    /// actual powers add up under the achievable battery power.
    pub fn solve(
        &mut self,
        dt: TimeDelta,
        irradiation: WattsPerSquareMetre,
        motor_throttle: f64,
    ) -> Telemetry {
        // Step 1: targets, top-down. The drivetrain target is three input
        // clamps deep with no losses applied yet.
        let target_auxiliaries_power = self.auxiliaries.power;
        let target_pv_power = self.panel.output_power(irradiation);
        let target_esc_input_power = self
            .propulsion
            .clamp_input(self.motor.clamp_input(self.esc.throttle_input(motor_throttle)));
        // Positive is a charging surplus, negative must come out of the battery:
        let target_battery_power =
            target_pv_power - target_esc_input_power - target_auxiliaries_power;

        // Step 2: the battery is the only stage allowed to fall short of
        // the request.
        let actual_battery_power = self.battery.solve(dt, target_battery_power);

        // Step 3: the auxiliaries are always fully served.
        let actual_auxiliaries_power = target_auxiliaries_power;

        // Step 4: re-derive the PV output implied by the achievable battery
        // power. The panel can never exceed its own ceiling:
        let actual_pv_power = (actual_battery_power
            + target_esc_input_power
            + actual_auxiliaries_power)
            .min(target_pv_power);

        // Step 5: whatever remains feeds the drivetrain, never more than it
        // asked for, and propagates through the losses down to the water.
        let actual_esc_input_power = (actual_pv_power
            - actual_battery_power
            - actual_auxiliaries_power)
            .min(target_esc_input_power);
        let actual_esc_output_power = self.esc.output_power(actual_esc_input_power);
        let actual_motor_output_power = self.motor.output_power(actual_esc_output_power);
        let actual_propulsive_power = self.propulsion.output_power(actual_motor_output_power);
        let hull_speed = self.hull.speed(actual_propulsive_power);

        Telemetry {
            target_pv_power,
            target_esc_input_power,
            target_battery_power,
            pv_power: actual_pv_power,
            battery_power: actual_battery_power,
            auxiliaries_power: actual_auxiliaries_power,
            esc_input_power: actual_esc_input_power,
            esc_output_power: actual_esc_output_power,
            motor_output_power: actual_motor_output_power,
            propulsive_power: actual_propulsive_power,
            battery_energy: self.battery.energy(),
            battery_soc: self.battery.soc(),
            hull_speed,
            motor_throttle,
        }
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use crate::quantity::{
        energy::WattHours,
        power::MetresPerSecondPerWatt,
        surface_area::SquareMetres,
    };

    /// A small but fully populated boat shared by the crate's tests.
    pub fn test_boat() -> Boat {
        Boat::builder()
            .panel(Panel {
                efficiency: 0.2,
                surface_area: SquareMetres::from(2.0),
                max_output_power: Watts::from(1000.0),
            })
            .battery(Battery::new(0.5, 0.1, 0.95, WattHours::from(1000.0), Watts::from(500.0)))
            .auxiliaries(Auxiliaries { power: Watts::from(50.0) })
            .esc(PowerConverter { efficiency: 0.97, max_input_power: Watts::from(900.0) })
            .motor(PowerConverter { efficiency: 0.88, max_input_power: Watts::from(850.0) })
            .propulsion(PowerConverter { efficiency: 0.75, max_input_power: Watts::from(800.0) })
            .hull(Hull { speed_over_power: MetresPerSecondPerWatt::from(0.005) })
            .build()
    }
}
