//! Monetary cost of consumption, priced per source from the [`ReferenceTable`].

use ecometrics_quantities::{
    cost::{Euros, EurosPerKilowattHour},
    energy::KilowattHours,
};

use crate::{id::SourceId, reference::ReferenceTable, sample::Sample};

/// Cost of a native amount of the source, zero for sources absent from the table.
pub fn energy_cost(table: &ReferenceTable, source: &str, amount: f64) -> Euros {
    Euros(amount * table.price_of(source))
}

/// Total cost of a per-source breakdown.
pub fn total_cost<'a>(
    table: &ReferenceTable,
    breakdown: impl IntoIterator<Item = (&'a SourceId, &'a f64)>,
) -> Euros {
    breakdown.into_iter().map(|(source, amount)| energy_cost(table, source.as_str(), *amount)).sum()
}

/// Sum of the source-level costs of every sample.
pub fn cost_of_samples<'a>(
    table: &ReferenceTable,
    samples: impl IntoIterator<Item = &'a Sample>,
) -> Euros {
    samples.into_iter().map(|sample| total_cost(table, &sample.sources)).sum()
}

/// Average cost of a kilowatt-hour, zero when nothing has been consumed.
pub fn unit_cost(cost: Euros, consumption: KilowattHours) -> EurosPerKilowattHour {
    if consumption == KilowattHours::ZERO {
        EurosPerKilowattHour::ZERO
    } else {
        EurosPerKilowattHour(cost.0 / consumption.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::{TimeZone, Utc};
    use ecometrics_quantities::power::Kilowatts;

    use super::*;
    use crate::{
        reference::{ConversionFactors, EnergySource, Unit},
        sample::SourceBreakdown,
    };

    fn tariff() -> ReferenceTable {
        ReferenceTable::new(
            vec![
                EnergySource::builder()
                    .id("electricity")
                    .name("Electricity")
                    .unit(Unit::KilowattHour)
                    .price_per_unit(0.19)
                    .build(),
                EnergySource::builder()
                    .id("gas")
                    .name("Gas")
                    .unit(Unit::CubicMeter)
                    .price_per_unit(0.09)
                    .build(),
            ],
            ConversionFactors::default(),
        )
    }

    fn sample(source: &str, amount: f64) -> Sample {
        Sample::builder()
            .timestamp(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
            .entity_id("building_paris_1")
            .total_power(Kilowatts(amount))
            .build()
            .with_source(source, amount)
    }

    #[test]
    fn test_cost_of_samples() {
        let samples = [sample("electricity", 100.0), sample("gas", 50.0)];
        assert_abs_diff_eq!(cost_of_samples(&tariff(), &samples).0, 23.5, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_source_costs_nothing() {
        let breakdown =
            SourceBreakdown::from([("electricity".into(), 10.0), ("hydrogen".into(), 1000.0)]);
        assert_abs_diff_eq!(total_cost(&tariff(), &breakdown).0, 1.9, epsilon = 1e-9);
    }

    #[test]
    fn test_energy_cost_with_default_tariff() {
        let table = ReferenceTable::default();
        assert_abs_diff_eq!(energy_cost(&table, "fuel", 10.0).0, 11.5, epsilon = 1e-9);
        assert_abs_diff_eq!(energy_cost(&table, "solar", 10.0).0, 0.0);
    }

    #[test]
    fn test_empty_samples() {
        assert_abs_diff_eq!(cost_of_samples(&tariff(), &Vec::<Sample>::new()).0, 0.0);
    }

    #[test]
    fn test_unit_cost() {
        assert_abs_diff_eq!(unit_cost(Euros(50.0), KilowattHours(200.0)).0, 0.25);
        assert_abs_diff_eq!(unit_cost(Euros(50.0), KilowattHours::ZERO).0, 0.0);
    }
}
