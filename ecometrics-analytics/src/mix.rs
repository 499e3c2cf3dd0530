//! Share of each energy source in the total consumption over a window.

use ecometrics_quantities::ratio::Percentage;
use serde::Serialize;

use crate::{
    id::EntityId,
    prelude::*,
    reference::{EnergySource, ReferenceTable},
    retrieval::SampleSource,
    sample::{DateRange, Sample},
};

/// How the per-source amounts are combined into the total.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum MixBasis {
    /// Sum the native amounts as they are, regardless of their units.
    #[default]
    Native,

    /// Convert every amount into kilowatt-hours before summing.
    KilowattHourEquivalent,
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MixEntry {
    pub source: EnergySource,

    /// Native amount, or kilowatt-hours for [`MixBasis::KilowattHourEquivalent`].
    pub consumption: f64,

    pub percentage: Percentage,
}

/// One entry per source of the table, in the table order.
///
/// Sample sources unknown to the table are left out. The percentages add up to 100
/// when anything has been consumed, and are all zero otherwise.
#[must_use]
pub fn analyze<'a>(
    table: &ReferenceTable,
    samples: impl IntoIterator<Item = &'a Sample>,
    basis: MixBasis,
) -> Vec<MixEntry> {
    let mut totals = vec![0.0; table.sources().len()];
    let mut n_unknown = 0_usize;

    for sample in samples {
        for (id, amount) in &sample.sources {
            match table.position(id.as_str()) {
                Some(index) => totals[index] += amount,
                None => n_unknown += 1,
            }
        }
    }
    if n_unknown != 0 {
        warn!(n_unknown, "left out sample sources absent from the reference table");
    }

    if basis == MixBasis::KilowattHourEquivalent {
        for (total, source) in totals.iter_mut().zip(table.sources()) {
            *total = table.conversions().to_kilowatt_hours(source.unit, *total).0;
        }
    }

    let total: f64 = totals.iter().sum();
    table
        .sources()
        .iter()
        .zip(totals)
        .map(|(source, consumption)| MixEntry {
            source: source.clone(),
            consumption,
            percentage: if total > 0.0 {
                Percentage::from_ratio(consumption / total)
            } else {
                Percentage::ZERO
            },
        })
        .collect()
}

/// Retrieve the entity samples within the range and analyze their mix.
#[instrument(skip_all, fields(entity_id = %entity_id))]
pub fn energy_mix_for<S: SampleSource + ?Sized>(
    source: &S,
    table: &ReferenceTable,
    entity_id: &EntityId,
    range: DateRange,
    basis: MixBasis,
) -> Result<Vec<MixEntry>> {
    let samples = source.samples(entity_id, range)?;
    debug!(n_samples = samples.len(), "analyzing the energy mix…");
    Ok(analyze(table, &samples, basis))
}
