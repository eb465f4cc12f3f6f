use chrono::{DateTime, TimeDelta, Utc};
use clap::{Parser, Subcommand};

use crate::{
    boat::{Auxiliaries, Boat, battery::Battery, drivetrain::PowerConverter, hull::Hull, panel::Panel},
    quantity::{
        energy::WattHours,
        irradiance::WattsPerSquareMetre,
        power::{MetresPerSecondPerWatt, Watts},
        surface_area::SquareMetres,
    },
    race::{
        competition::Competition,
        controller::{ConstantThrottle, EnergyController, SocGuard},
        event::EventSpec,
        series::{Series, clear_day},
    },
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Simulate a competition day and print the per-event summary.
    Race(Box<RaceArgs>),
}

#[derive(Parser)]
pub struct RaceArgs {
    #[clap(flatten)]
    pub panel: PanelArgs,

    #[clap(flatten)]
    pub battery: BatteryArgs,

    #[clap(flatten)]
    pub drivetrain: DrivetrainArgs,

    #[clap(flatten)]
    pub hull: HullArgs,

    #[clap(flatten)]
    pub course: CourseArgs,

    #[clap(flatten)]
    pub strategy: StrategyArgs,

    /// Constant hotel load in watts.
    #[clap(long = "auxiliaries-power-watts", default_value = "30", env = "AUXILIARIES_POWER_WATTS")]
    pub auxiliaries_power: Watts,
}

impl RaceArgs {
    #[must_use]
    pub fn boat(&self) -> Boat {
        Boat::builder()
            .panel(self.panel.panel())
            .battery(self.battery.battery())
            .auxiliaries(Auxiliaries { power: self.auxiliaries_power })
            .esc(PowerConverter {
                efficiency: self.drivetrain.esc_efficiency,
                max_input_power: self.drivetrain.esc_max_input_power,
            })
            .motor(PowerConverter {
                efficiency: self.drivetrain.motor_efficiency,
                max_input_power: self.drivetrain.motor_max_input_power,
            })
            .propulsion(PowerConverter {
                efficiency: self.drivetrain.propulsion_efficiency,
                max_input_power: self.drivetrain.propulsion_max_input_power,
            })
            .hull(Hull { speed_over_power: self.hull.speed_over_power })
            .build()
    }
}

#[derive(Copy, Clone, Parser)]
pub struct PanelArgs {
    #[clap(long = "panel-efficiency", default_value = "0.22", env = "PANEL_EFFICIENCY")]
    pub efficiency: f64,

    /// Panel surface in square metres.
    #[clap(long = "panel-surface-area", default_value = "4.0", env = "PANEL_SURFACE_AREA")]
    pub surface_area: SquareMetres,

    /// Rated panel output in watts.
    #[clap(long = "panel-max-output-watts", default_value = "1100", env = "PANEL_MAX_OUTPUT_WATTS")]
    pub max_output_power: Watts,
}

impl PanelArgs {
    #[must_use]
    pub const fn panel(&self) -> Panel {
        Panel {
            efficiency: self.efficiency,
            surface_area: self.surface_area,
            max_output_power: self.max_output_power,
        }
    }
}

#[derive(Copy, Clone, Parser)]
pub struct BatteryArgs {
    /// State of charge at the start line.
    #[clap(long = "battery-initial-soc", default_value = "1.0", env = "BATTERY_INITIAL_SOC")]
    pub initial_soc: f64,

    /// State-of-charge floor the pack is never drained below.
    #[clap(long = "battery-min-soc", default_value = "0.1", env = "BATTERY_MIN_SOC")]
    pub min_soc: f64,

    #[clap(long = "battery-efficiency", default_value = "0.95", env = "BATTERY_EFFICIENCY")]
    pub efficiency: f64,

    /// Pack capacity in watt-hours.
    #[clap(long = "battery-max-energy-wh", default_value = "1500", env = "BATTERY_MAX_ENERGY_WH")]
    pub max_energy: WattHours,

    /// Rated pack power in watts.
    #[clap(long = "battery-max-power-watts", default_value = "2500", env = "BATTERY_MAX_POWER_WATTS")]
    pub max_power: Watts,
}

impl BatteryArgs {
    #[must_use]
    pub fn battery(&self) -> Battery {
        Battery::new(
            self.initial_soc,
            self.min_soc,
            self.efficiency,
            self.max_energy,
            self.max_power,
        )
    }
}

#[derive(Copy, Clone, Parser)]
pub struct DrivetrainArgs {
    #[clap(long = "esc-efficiency", default_value = "0.97", env = "ESC_EFFICIENCY")]
    pub esc_efficiency: f64,

    #[clap(long = "esc-max-input-watts", default_value = "2000", env = "ESC_MAX_INPUT_WATTS")]
    pub esc_max_input_power: Watts,

    #[clap(long = "motor-efficiency", default_value = "0.88", env = "MOTOR_EFFICIENCY")]
    pub motor_efficiency: f64,

    #[clap(long = "motor-max-input-watts", default_value = "1800", env = "MOTOR_MAX_INPUT_WATTS")]
    pub motor_max_input_power: Watts,

    #[clap(long = "propulsion-efficiency", default_value = "0.75", env = "PROPULSION_EFFICIENCY")]
    pub propulsion_efficiency: f64,

    #[clap(
        long = "propulsion-max-input-watts",
        default_value = "1600",
        env = "PROPULSION_MAX_INPUT_WATTS"
    )]
    pub propulsion_max_input_power: Watts,
}

#[derive(Copy, Clone, Parser)]
pub struct HullArgs {
    /// Hull speed per watt of propulsive power, in (m/s)/W.
    #[clap(long = "hull-speed-over-power", default_value = "0.0035", env = "HULL_SPEED_OVER_POWER")]
    pub speed_over_power: MetresPerSecondPerWatt,
}

#[derive(Clone, Parser)]
pub struct CourseArgs {
    /// First event's start.
    #[clap(long = "course-start", default_value = "2026-08-29T08:00:00Z", env = "COURSE_START")]
    pub start: DateTime<Utc>,

    #[clap(long = "n-events", default_value = "2", env = "N_EVENTS")]
    pub n_events: usize,

    #[clap(long = "event-minutes", default_value = "90", env = "EVENT_MINUTES")]
    pub event_minutes: i64,

    /// Pause between consecutive events.
    #[clap(long = "break-minutes", default_value = "30", env = "BREAK_MINUTES")]
    pub break_minutes: i64,

    /// Input series resolution.
    #[clap(long = "step-seconds", default_value = "10", env = "STEP_SECONDS")]
    pub step_seconds: i64,

    /// Peak of the synthetic clear-day irradiation in W/m².
    #[clap(long = "peak-irradiation", default_value = "950", env = "PEAK_IRRADIATION")]
    pub peak_irradiation: WattsPerSquareMetre,
}

impl CourseArgs {
    /// Lay out the events back to back with breaks in between.
    #[must_use]
    pub fn competition(&self) -> Competition {
        let event_length = TimeDelta::minutes(self.event_minutes);
        let pause = TimeDelta::minutes(self.break_minutes);
        let events = (0..self.n_events)
            .map(|index| {
                let start = self.start + (event_length + pause) * index as i32;
                EventSpec {
                    name: format!("event {}", index + 1),
                    start,
                    end: start + event_length,
                }
            })
            .collect();
        Competition { name: "synthetic clear day".to_string(), events }
    }

    /// Synthetic irradiation series covering the competition window.
    #[must_use]
    pub fn series(&self, competition: &Competition) -> Series {
        let start = competition.events.first().map_or(self.start, |event| event.start);
        let end = competition.events.last().map_or(self.start, |event| event.end);
        clear_day(start, end, self.peak_irradiation, TimeDelta::seconds(self.step_seconds))
    }
}

#[derive(Copy, Clone, clap::ValueEnum)]
pub enum Strategy {
    /// Hold one throttle the whole race.
    Constant,

    /// Ease off as the battery approaches the reserve.
    SocGuard,
}

#[derive(Copy, Clone, Parser)]
pub struct StrategyArgs {
    #[clap(long, value_enum, default_value = "soc-guard", env = "STRATEGY")]
    pub strategy: Strategy,

    /// Base motor throttle.
    #[clap(long, default_value = "0.8", env = "THROTTLE")]
    pub throttle: f64,

    /// State of charge at which the SoC guard starts easing off.
    #[clap(long = "reserve-soc", default_value = "0.3", env = "RESERVE_SOC")]
    pub reserve_soc: f64,
}

impl StrategyArgs {
    #[must_use]
    pub fn controller(&self) -> Box<dyn EnergyController> {
        match self.strategy {
            Strategy::Constant => Box::new(ConstantThrottle(self.throttle)),
            Strategy::SocGuard => {
                Box::new(SocGuard { throttle: self.throttle, reserve_soc: self.reserve_soc })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_events_do_not_overlap() {
        let args = CourseArgs {
            start: DateTime::from_timestamp(0, 0).unwrap(),
            n_events: 3,
            event_minutes: 60,
            break_minutes: 15,
            step_seconds: 10,
            peak_irradiation: WattsPerSquareMetre::from(950.0),
        };
        let competition = args.competition();
        assert_eq!(competition.events.len(), 3);
        for pair in competition.events.windows(2) {
            assert!(pair[0].end < pair[1].start);
        }
    }

    #[test]
    fn series_covers_the_competition_window() {
        let args = CourseArgs {
            start: DateTime::from_timestamp(0, 0).unwrap(),
            n_events: 2,
            event_minutes: 60,
            break_minutes: 30,
            step_seconds: 10,
            peak_irradiation: WattsPerSquareMetre::from(950.0),
        };
        let competition = args.competition();
        let series = args.series(&competition);
        assert_eq!(series.first().unwrap().time, competition.events[0].start);
        assert!(series.last().unwrap().time >= competition.events[1].end);
    }
}
