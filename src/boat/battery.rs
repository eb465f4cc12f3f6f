use chrono::TimeDelta;

use crate::quantity::{energy::WattHours, power::Watts};

/// The boat's traction battery.
///
/// This is the only stateful component on board: the stored energy is a
/// running accumulator carried across every timestep of a race. The battery
/// reports not what was *asked* of it but what was *physically possible*,
/// so that the caller can back-propagate a feasible power through the rest
/// of the chain.
#[derive(Copy, Clone)]
pub struct Battery {
    /// One-way conversion efficiency, applied on the stored side in both
    /// directions: charging stores less than is fed in, and discharging
    /// drains more than is delivered.
    pub efficiency: f64,

    /// Energy floor, `max_energy · min_soc`. The pack is never drained below it.
    pub min_energy: WattHours,

    pub max_energy: WattHours,

    /// Rated pack power. Carried in the configuration, but the drivetrain
    /// input clamps are the de-facto power limiters.
    pub max_power: Watts,

    energy: WattHours,
    soc: f64,
}

impl Battery {
    pub fn new(
        initial_soc: f64,
        min_soc: f64,
        efficiency: f64,
        max_energy: WattHours,
        max_power: Watts,
    ) -> Self {
        Self {
            efficiency,
            min_energy: max_energy * min_soc,
            max_energy,
            max_power,
            energy: max_energy * initial_soc,
            soc: initial_soc,
        }
    }

    /// Currently stored energy.
    pub const fn energy(&self) -> WattHours {
        self.energy
    }

    /// State of charge, `energy / max_energy`.
    pub const fn soc(&self) -> f64 {
        self.soc
    }

    pub fn min_soc(&self) -> f64 {
        self.min_energy.0 / self.max_energy.0
    }

    /// Apply the requested power for the timestep, update the stored energy
    /// and return the achievable power.
    ///
    /// Sign convention: positive power charges the battery, negative power
    /// discharges it, and the returned power carries the same sign. The
    /// magnitude may be smaller than requested when the capacity ceiling or
    /// the energy floor is hit. This is the single state-mutating entry
    /// point and is called exactly once per timestep.
    pub fn solve(&mut self, dt: TimeDelta, target_power: Watts) -> Watts {
        let power = if target_power > Watts::ZERO {
            self.charge(dt, target_power)
        } else {
            -self.discharge(dt, -target_power)
        };
        self.soc = self.energy.0 / self.max_energy.0;
        power
    }

    fn charge(&mut self, dt: TimeDelta, power: Watts) -> Watts {
        self.energy += power * dt * self.efficiency;

        if self.energy > self.max_energy {
            let exceeded_energy = self.energy - self.max_energy;
            self.energy = self.max_energy;
            return power - exceeded_energy / dt;
        }

        power
    }

    fn discharge(&mut self, dt: TimeDelta, power: Watts) -> Watts {
        self.energy -= power * dt * self.efficiency;

        if self.energy < self.min_energy {
            let exceeded_energy = self.min_energy - self.energy;
            self.energy = self.min_energy;
            return power - exceeded_energy / dt;
        }

        power
    }
}
