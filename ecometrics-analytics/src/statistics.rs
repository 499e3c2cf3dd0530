//! Scalar reductions of sample sequences.

use average::Variance;
use ecometrics_quantities::energy::KilowattHours;
use itertools::Itertools;
use serde::Serialize;

use crate::sample::{Field, Sample};

/// Default number of samples returned by [`find_peaks`].
pub const DEFAULT_PEAK_COUNT: usize = 10;

/// Summary of one numeric field over a sample sequence.
///
/// An empty sequence yields all zeros, which is indistinguishable from a sequence of zeros.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct StatisticalSummary {
    pub total: f64,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,

    /// Population standard deviation.
    pub standard_deviation: f64,

    pub n_samples: usize,
}

impl StatisticalSummary {
    pub fn of_samples<'a>(samples: impl IntoIterator<Item = &'a Sample>, field: &Field) -> Self {
        samples.into_iter().map(|sample| field.value_of(sample)).collect()
    }

    pub fn of_values(values: impl IntoIterator<Item = f64>) -> Self {
        let values = values.into_iter().collect_vec();
        if values.is_empty() {
            return Self::default();
        }
        let total: f64 = values.iter().sum();
        #[expect(clippy::cast_precision_loss)]
        let average = total / values.len() as f64;
        Self {
            total,
            average,
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            standard_deviation: values.iter().copied().standard_deviation(),
            n_samples: values.len(),
            median: values.into_iter().median(),
        }
    }
}

impl FromIterator<f64> for StatisticalSummary {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self::of_values(iter)
    }
}

impl<T> Aggregate for T where T: ?Sized {}

pub trait Aggregate {
    /// Middle value, or the mean of the two middle values; `0.0` when empty.
    #[must_use]
    fn median(self) -> f64
    where
        Self: Sized + IntoIterator<Item = f64>,
    {
        let mut values = self.into_iter().collect_vec();
        if values.is_empty() {
            return 0.0;
        }
        values.sort_unstable_by(f64::total_cmp);
        let index = values.len() / 2;
        if values.len() % 2 == 1 {
            values[index]
        } else {
            (values[index - 1] + values[index]) / 2.0
        }
    }

    /// Population standard deviation (divided by `N`); `0.0` when empty.
    #[must_use]
    fn standard_deviation(self) -> f64
    where
        Self: Sized + IntoIterator<Item = f64>,
    {
        let variance: Variance = self.into_iter().collect();
        if variance.is_empty() { 0.0 } else { variance.population_variance().sqrt() }
    }
}

/// Highest-demand samples first, ties keeping their input order.
#[must_use]
pub fn find_peaks(samples: &[Sample], top_n: usize) -> Vec<&Sample> {
    samples
        .iter()
        .sorted_by(|lhs, rhs| rhs.total_power.cmp(&lhs.total_power))
        .take(top_n)
        .collect()
}

pub fn total_consumption<'a>(samples: impl IntoIterator<Item = &'a Sample>) -> KilowattHours {
    samples.into_iter().map(Sample::energy).sum()
}

/// Mean energy per sample, zero for an empty sequence.
pub fn average_consumption(samples: &[Sample]) -> KilowattHours {
    if samples.is_empty() {
        KilowattHours::ZERO
    } else {
        #[expect(clippy::cast_precision_loss)]
        let n_samples = samples.len() as f64;
        total_consumption(samples) / n_samples
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::{TimeDelta, TimeZone, Utc};
    use ecometrics_quantities::power::Kilowatts;

    use super::*;

    fn samples(powers: &[f64]) -> Vec<Sample> {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        (0..)
            .zip(powers)
            .map(|(hour, power)| {
                Sample::builder()
                    .timestamp(start + TimeDelta::hours(hour))
                    .entity_id("site_lyon")
                    .total_power(Kilowatts(*power))
                    .build()
            })
            .collect()
    }

    #[test]
    fn test_empty_summary() {
        let summary = StatisticalSummary::of_samples(&samples(&[]), &Field::TotalPower);
        assert_eq!(summary, StatisticalSummary::default());
        assert_abs_diff_eq!(summary.min, 0.0);
        assert_abs_diff_eq!(summary.max, 0.0);
        assert_abs_diff_eq!(summary.average, 0.0);
        assert_abs_diff_eq!(summary.median, 0.0);
        assert_eq!(summary.n_samples, 0);
    }

    #[test]
    fn test_summary() {
        let samples = samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let summary = StatisticalSummary::of_samples(&samples, &Field::TotalPower);
        assert_abs_diff_eq!(summary.total, 40.0);
        assert_abs_diff_eq!(summary.average, 5.0);
        assert_abs_diff_eq!(summary.min, 2.0);
        assert_abs_diff_eq!(summary.max, 9.0);
        assert_abs_diff_eq!(summary.median, 4.5);
        assert_abs_diff_eq!(summary.standard_deviation, 2.0, epsilon = 1e-9);
        assert_eq!(summary.n_samples, 8);
    }

    #[test]
    fn test_summary_of_source_field() {
        let mut samples = samples(&[10.0, 20.0]);
        samples[0] = samples[0].clone().with_source("gas", 3.0);
        let summary = StatisticalSummary::of_samples(&samples, &Field::Source("gas".into()));
        assert_abs_diff_eq!(summary.total, 3.0);
        assert_abs_diff_eq!(summary.min, 0.0);
        assert_abs_diff_eq!(summary.average, 1.5);
    }

    #[test]
    fn test_summary_is_bounded() {
        for powers in [
            vec![1.0],
            vec![3.0, 1.0, 2.0],
            vec![0.5, 100.0, 7.25, 7.25, 42.0],
            vec![9.0, 8.0, 7.0, 6.0, 5.0, 4.0],
        ] {
            let summary = StatisticalSummary::of_samples(&samples(&powers), &Field::TotalPower);
            assert!(summary.min <= summary.median && summary.median <= summary.max);
            assert!(summary.min <= summary.average && summary.average <= summary.max);
        }
    }

    #[test]
    fn test_single_value() {
        let summary: StatisticalSummary = [42.0].into_iter().collect();
        assert_abs_diff_eq!(summary.median, 42.0);
        assert_abs_diff_eq!(summary.standard_deviation, 0.0);
    }

    #[test]
    fn test_median_odd() {
        assert_abs_diff_eq!(vec![1.0, 0.0, 2.0].median(), 1.0);
    }

    #[test]
    fn test_median_even() {
        assert_abs_diff_eq!(vec![1.0, 0.0, 2.0, 3.0].median(), 1.5);
    }

    #[test]
    fn test_median_with_nan_does_not_panic() {
        let _ = vec![1.0, f64::NAN, 2.0].median();
    }

    #[test]
    fn test_find_peaks() {
        let samples = samples(&[5.0, 9.0, 7.0, 9.0, 1.0]);
        let peaks = find_peaks(&samples, 2);
        assert_eq!(peaks.len(), 2);
        assert_eq!(peaks[0].timestamp, samples[1].timestamp);
        assert_eq!(peaks[1].timestamp, samples[3].timestamp);
    }

    #[test]
    fn test_find_peaks_beyond_length() {
        let samples = samples(&[1.0, 3.0, 2.0]);
        let powers = find_peaks(&samples, 10)
            .into_iter()
            .map(|sample| sample.total_power)
            .collect_vec();
        assert_eq!(powers, [Kilowatts(3.0), Kilowatts(2.0), Kilowatts(1.0)]);
    }

    #[test]
    fn test_consumption() {
        let mut samples = samples(&[100.0, 300.0]);
        samples[1].consumption = Some(KilowattHours(200.0));
        assert_abs_diff_eq!(total_consumption(&samples).0, 300.0);
        assert_abs_diff_eq!(average_consumption(&samples).0, 150.0);
        assert_abs_diff_eq!(average_consumption(&[]).0, 0.0);
    }
}
