use crate::{
    boat::Boat,
    prelude::*,
    race::{
        controller::EnergyController,
        event::{EventOutcome, EventSpec},
        series::{Sample, slice},
    },
};

/// An ordered sequence of events sharing one boat and one battery charge.
#[derive(Clone, Debug)]
pub struct Competition {
    pub name: String,
    pub events: Vec<EventSpec>,
}

/// Final artifact of a run: one outcome per event, in event order.
#[derive(Debug)]
pub struct CompetitionOutcome {
    pub name: String,
    pub results: Vec<EventOutcome>,
}

impl Competition {
    /// Run every event in declared order against the same boat.
    ///
    /// The input series must fully cover the competition window, which spans
    /// from the first event's start to the last event's end; coverage is
    /// validated before any simulation runs. Battery state flows through
    /// all events uninterrupted.
    pub fn run(
        &self,
        series: &[Sample],
        boat: &mut Boat,
        controller: &dyn EnergyController,
    ) -> Result<CompetitionOutcome> {
        let (Some(first_event), Some(last_event)) = (self.events.first(), self.events.last())
        else {
            bail!("competition `{}` has no events", self.name);
        };
        self.validate(series, first_event, last_event)?;
        let series = slice(series, first_event.start, last_event.end);

        let mut results = Vec::with_capacity(self.events.len());
        for event in &self.events {
            info!(event = %event.name, start = %event.start, end = %event.end, "running event");
            let samples = slice(series, event.start, event.end);
            results.push(event.run(samples, boat, controller));
        }

        Ok(CompetitionOutcome { name: self.name.clone(), results })
    }

    fn validate(&self, series: &[Sample], first: &EventSpec, last: &EventSpec) -> Result {
        let (Some(first_sample), Some(last_sample)) = (series.first(), series.last()) else {
            bail!("competition `{}`: the input series is empty", self.name);
        };
        ensure!(
            first_sample.time <= first.start,
            "the input series can't start after the first event's start ({} > {})",
            first_sample.time,
            first.start,
        );
        ensure!(
            last_sample.time >= last.end,
            "the input series can't end before the last event's end ({} < {})",
            last_sample.time,
            last.end,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeDelta, Utc};

    use super::*;
    use crate::{
        boat::test_support::test_boat,
        quantity::irradiance::WattsPerSquareMetre,
        race::controller::ConstantThrottle,
    };

    fn timestamp(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(seconds, 0).unwrap()
    }

    fn minute_series(from: i64, to: i64) -> Vec<Sample> {
        (from..=to)
            .step_by(60)
            .map(|seconds| Sample {
                time: timestamp(seconds),
                irradiation: WattsPerSquareMetre::from(500.0),
            })
            .collect()
    }

    fn competition() -> Competition {
        Competition {
            name: "regatta".to_string(),
            events: vec![
                EventSpec { name: "sprint".to_string(), start: timestamp(0), end: timestamp(600) },
                EventSpec {
                    name: "endurance".to_string(),
                    start: timestamp(1200),
                    end: timestamp(3600),
                },
            ],
        }
    }

    #[test]
    fn results_come_in_event_order() {
        let mut boat = test_boat();
        let outcome = competition()
            .run(&minute_series(0, 3600), &mut boat, &ConstantThrottle(0.2))
            .unwrap();
        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.results[0].name, "sprint");
        assert_eq!(outcome.results[1].name, "endurance");
    }

    /// Battery state flows from one event into the next.
    #[test]
    fn battery_state_spans_events() {
        let mut boat = test_boat();
        let outcome = competition()
            .run(&minute_series(0, 3600), &mut boat, &ConstantThrottle(1.0))
            .unwrap();
        let sprint_final = outcome.results[0].final_soc;
        let endurance_first = outcome.results[1].steps[0].1.battery_soc;
        assert!(endurance_first < sprint_final);
    }

    /// A series starting after the first event's start is rejected up front.
    #[test]
    fn series_starting_late_is_rejected() {
        let mut boat = test_boat();
        let error = competition()
            .run(&minute_series(60, 3600), &mut boat, &ConstantThrottle(0.2))
            .unwrap_err();
        assert!(error.to_string().contains("can't start after"));
    }

    /// A series ending before the last event's end is rejected up front.
    #[test]
    fn series_ending_early_is_rejected() {
        let mut boat = test_boat();
        let error = competition()
            .run(&minute_series(0, 3000), &mut boat, &ConstantThrottle(0.2))
            .unwrap_err();
        assert!(error.to_string().contains("can't end before"));
    }

    #[test]
    fn empty_series_is_rejected() {
        let mut boat = test_boat();
        let error = competition().run(&[], &mut boat, &ConstantThrottle(0.2)).unwrap_err();
        assert!(error.to_string().contains("series is empty"));
    }

    #[test]
    fn empty_competition_is_rejected() {
        let mut boat = test_boat();
        let competition = Competition { name: "void".to_string(), events: Vec::new() };
        let error =
            competition.run(&minute_series(0, 600), &mut boat, &ConstantThrottle(0.2)).unwrap_err();
        assert!(error.to_string().contains("no events"));
    }
}
