use std::f64::consts::PI;

use chrono::{DateTime, TimeDelta, Utc};

use crate::quantity::irradiance::WattsPerSquareMetre;

/// One row of the input series.
#[derive(Copy, Clone, Debug)]
pub struct Sample {
    pub time: DateTime<Utc>,
    pub irradiation: WattsPerSquareMetre,
}

/// Time-ordered input series, consumed read-only.
pub type Series = Vec<Sample>;

/// Sub-slice covering the inclusive `[start, end]` window.
///
/// The series must be sorted by time; both boundary samples are included.
pub fn slice(samples: &[Sample], start: DateTime<Utc>, end: DateTime<Utc>) -> &[Sample] {
    let from = samples.partition_point(|sample| sample.time < start);
    let to = samples.partition_point(|sample| sample.time <= end);
    &samples[from..to]
}

/// Synthetic clear-day irradiation: a half-sine arc spanning the window.
///
/// Good enough to exercise a strategy without real measurement data. The
/// last sample always lands exactly on `end`, so the series fully covers
/// the window regardless of the step.
pub fn clear_day(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    peak_irradiation: WattsPerSquareMetre,
    step: TimeDelta,
) -> Series {
    let span = (end - start).as_seconds_f64();
    let irradiation_at = |time: DateTime<Utc>| {
        let phase = (time - start).as_seconds_f64() / span;
        peak_irradiation * (PI * phase).sin().max(0.0)
    };

    let mut samples = Series::new();
    let mut time = start;
    while time < end {
        samples.push(Sample { time, irradiation: irradiation_at(time) });
        time += step;
    }
    samples.push(Sample { time: end, irradiation: irradiation_at(end) });
    samples
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn series(timestamps: &[i64]) -> Series {
        timestamps
            .iter()
            .map(|&timestamp| Sample {
                time: DateTime::from_timestamp(timestamp, 0).unwrap(),
                irradiation: WattsPerSquareMetre::ZERO,
            })
            .collect()
    }

    #[test]
    fn slice_is_inclusive_on_both_ends() {
        let samples = series(&[0, 60, 120, 180, 240]);
        let window = slice(
            &samples,
            DateTime::from_timestamp(60, 0).unwrap(),
            DateTime::from_timestamp(180, 0).unwrap(),
        );
        assert_eq!(window.len(), 3);
        assert_eq!(window[0].time.timestamp(), 60);
        assert_eq!(window[2].time.timestamp(), 180);
    }

    #[test]
    fn slice_of_disjoint_window_is_empty() {
        let samples = series(&[0, 60]);
        let window = slice(
            &samples,
            DateTime::from_timestamp(120, 0).unwrap(),
            DateTime::from_timestamp(180, 0).unwrap(),
        );
        assert!(window.is_empty());
    }

    #[test]
    fn clear_day_peaks_at_noon_and_ends_dark() {
        let start = DateTime::from_timestamp(0, 0).unwrap();
        let end = DateTime::from_timestamp(7200, 0).unwrap();
        let samples = clear_day(start, end, WattsPerSquareMetre::from(1000.0), TimeDelta::minutes(30));

        assert_eq!(samples.len(), 5);
        assert_relative_eq!(samples[0].irradiation.0, 0.0);
        assert_relative_eq!(samples[2].irradiation.0, 1000.0);
        assert_relative_eq!(samples[4].irradiation.0, 0.0, epsilon = 1e-9);
        assert_eq!(samples[4].time, end);
    }
}
