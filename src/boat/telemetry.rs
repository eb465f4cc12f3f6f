use crate::quantity::{energy::WattHours, power::Watts, speed::MetresPerSecond};

/// Immutable per-timestep snapshot of every stage of the power chain.
///
/// Targets are what each stage asked for before the battery resolved the
/// balance; the actual values are what physically flowed. A stage hitting
/// its limit shows up here as `actual < target`, never as an error.
#[derive(Copy, Clone, Debug)]
pub struct Telemetry {
    pub target_pv_power: Watts,
    pub target_esc_input_power: Watts,
    pub target_battery_power: Watts,

    pub pv_power: Watts,
    pub battery_power: Watts,
    pub auxiliaries_power: Watts,
    pub esc_input_power: Watts,
    pub esc_output_power: Watts,
    pub motor_output_power: Watts,
    pub propulsive_power: Watts,

    pub battery_energy: WattHours,
    pub battery_soc: f64,

    pub hull_speed: MetresPerSecond,
    pub motor_throttle: f64,
}
