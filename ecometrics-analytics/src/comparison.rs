//! Period statistics and their period-over-period comparison.

use bon::Builder;
use ecometrics_quantities::{
    cost::{Euros, EurosPerKilowattHour},
    emissions::KilogramsCo2,
    energy::KilowattHours,
    power::Kilowatts,
    ratio::Percentage,
};
use serde::Serialize;

use crate::{
    cost::{cost_of_samples, unit_cost},
    emissions::co2_of_samples,
    id::EntityId,
    prelude::*,
    ratios::{difference, variation},
    reference::ReferenceTable,
    retrieval::SampleSource,
    sample::{DateRange, Field, Sample},
    statistics::{StatisticalSummary, total_consumption},
};

/// Consumption, cost, and emissions of an entity over a date range.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PeriodStatistics {
    pub range: DateRange,

    /// Summary of the total power, in kilowatts.
    pub power: StatisticalSummary,

    pub total_consumption: KilowattHours,
    pub total_cost: Euros,
    pub total_co2: KilogramsCo2,
}

impl PeriodStatistics {
    pub fn from_samples(table: &ReferenceTable, range: DateRange, samples: &[Sample]) -> Self {
        Self {
            range,
            power: StatisticalSummary::of_samples(samples, &Field::TotalPower),
            total_consumption: total_consumption(samples),
            total_cost: cost_of_samples(table, samples),
            total_co2: co2_of_samples(table, samples),
        }
    }

    #[must_use]
    pub const fn n_samples(&self) -> usize {
        self.power.n_samples
    }

    pub const fn average_power(&self) -> Kilowatts {
        Kilowatts(self.power.average)
    }

    pub const fn peak_power(&self) -> Kilowatts {
        Kilowatts(self.power.max)
    }

    pub fn unit_cost(&self) -> EurosPerKilowattHour {
        unit_cost(self.total_cost, self.total_consumption)
    }
}

/// Retrieve the entity samples within the range and crunch their statistics.
#[instrument(skip_all, fields(entity_id = %entity_id, start = %range.start, end = %range.end))]
pub fn statistics_for<S: SampleSource + ?Sized>(
    source: &S,
    table: &ReferenceTable,
    entity_id: &EntityId,
    range: DateRange,
) -> Result<PeriodStatistics> {
    let samples = source.samples(entity_id, range)?;
    let statistics = PeriodStatistics::from_samples(table, range, &samples);
    debug!(
        n_samples = statistics.n_samples(),
        total_consumption = ?statistics.total_consumption,
        total_cost = ?statistics.total_cost,
        total_co2 = ?statistics.total_co2,
        "crunched",
    );
    Ok(statistics)
}

/// Signed relative changes, current against baseline.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Variations {
    pub consumption: Percentage,
    pub cost: Percentage,
    pub co2: Percentage,
}

/// Absolute changes, current minus baseline.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Differences {
    pub consumption: KilowattHours,
    pub cost: Euros,
    pub co2: KilogramsCo2,
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comparison {
    pub current: PeriodStatistics,
    pub baseline: PeriodStatistics,
    pub variations: Variations,
    pub differences: Differences,
}

impl Comparison {
    pub fn new(current: PeriodStatistics, baseline: PeriodStatistics) -> Self {
        let variations = Variations {
            consumption: variation(current.total_consumption.0, baseline.total_consumption.0),
            cost: variation(current.total_cost.0, baseline.total_cost.0),
            co2: variation(current.total_co2.0, baseline.total_co2.0),
        };
        let differences = Differences {
            consumption: difference(current.total_consumption, baseline.total_consumption),
            cost: difference(current.total_cost, baseline.total_cost),
            co2: difference(current.total_co2, baseline.total_co2),
        };
        Self { current, baseline, variations, differences }
    }
}

/// Compares an entity's consumption between two periods.
///
/// The comparator does not judge the direction: a cost increase may well be expected.
#[must_use]
#[derive(Builder)]
pub struct Comparator<'a, S> {
    source: &'a S,
    table: &'a ReferenceTable,
}

impl<S: SampleSource> Comparator<'_, S> {
    pub fn statistics(&self, entity_id: &EntityId, range: DateRange) -> Result<PeriodStatistics> {
        statistics_for(self.source, self.table, entity_id, range)
    }

    /// Fails as a whole if either period cannot be retrieved.
    #[instrument(skip_all, fields(entity_id = %entity_id))]
    pub fn compare(
        &self,
        entity_id: &EntityId,
        current: DateRange,
        baseline: DateRange,
    ) -> Result<Comparison> {
        let current = self.statistics(entity_id, current)?;
        let baseline = self.statistics(entity_id, baseline)?;
        let comparison = Comparison::new(current, baseline);
        info!(
            consumption = ?comparison.variations.consumption,
            cost = ?comparison.variations.cost,
            co2 = ?comparison.variations.co2,
            "compared",
        );
        Ok(comparison)
    }
}
