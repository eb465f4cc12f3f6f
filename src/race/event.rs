use chrono::{DateTime, Utc};
use itertools::Itertools;

use crate::{
    boat::{Boat, telemetry::Telemetry},
    prelude::*,
    quantity::{energy::WattHours, speed::Metres},
    race::{controller::EnergyController, series::Sample},
};

/// One race event: a named inclusive time window.
#[derive(Clone, Debug)]
pub struct EventSpec {
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Running aggregates over the event processed so far.
///
/// Passed to the energy controller every timestep, so a strategy can pace
/// itself against the distance already covered or the energy already spent.
#[derive(Copy, Clone, Debug)]
pub struct EventProgress {
    pub distance: Metres,
    pub harvested_energy: WattHours,
    pub consumed_energy: WattHours,
}

impl Default for EventProgress {
    fn default() -> Self {
        Self {
            distance: Metres::ZERO,
            harvested_energy: WattHours::ZERO,
            consumed_energy: WattHours::ZERO,
        }
    }
}

/// Everything an event produced: per-timestep telemetry plus the totals.
#[derive(Debug)]
pub struct EventOutcome {
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub steps: Vec<(DateTime<Utc>, Telemetry)>,
    pub totals: EventProgress,
    pub final_soc: f64,
}

impl EventSpec {
    /// Drive the boat through the event, one timestep at a time.
    ///
    /// Timesteps run strictly in time order because the battery is a running
    /// accumulator: the first sample only anchors the clock, and every later
    /// sample is solved with the gap to its predecessor as `dt`. The battery
    /// is never reset here, neither inside the event nor between events.
    pub fn run(
        &self,
        samples: &[Sample],
        boat: &mut Boat,
        controller: &dyn EnergyController,
    ) -> EventOutcome {
        let mut progress = EventProgress::default();
        let mut steps = Vec::with_capacity(samples.len().saturating_sub(1));
        let mut previous: Option<Telemetry> = None;

        for (before, sample) in samples.iter().tuple_windows() {
            let dt = sample.time - before.time;
            let throttle =
                controller.throttle(dt, sample, previous.as_ref(), &progress, boat, self);
            let telemetry = boat.solve(dt, sample.irradiation, throttle);

            progress.distance += telemetry.hull_speed * dt;
            progress.harvested_energy += telemetry.pv_power * dt;
            progress.consumed_energy +=
                (telemetry.esc_input_power + telemetry.auxiliaries_power) * dt;

            steps.push((sample.time, telemetry));
            previous = Some(telemetry);
        }

        debug!(
            event = %self.name,
            n_steps = steps.len(),
            distance = %progress.distance,
            "event finished",
        );

        EventOutcome {
            name: self.name.clone(),
            start: self.start,
            end: self.end,
            steps,
            totals: progress,
            final_soc: boat.battery.soc(),
        }
    }
}
