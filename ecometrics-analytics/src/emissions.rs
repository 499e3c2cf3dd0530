//! CO₂ emitted by consumption, from the per-source factors of the [`ReferenceTable`].

use ecometrics_quantities::emissions::KilogramsCo2;

use crate::{id::SourceId, reference::ReferenceTable, sample::Sample};

/// Yearly CO₂ absorption of a single tree.
pub const CO2_PER_TREE: KilogramsCo2 = KilogramsCo2(20.0);

pub fn co2_emissions(table: &ReferenceTable, source: &str, amount: f64) -> KilogramsCo2 {
    KilogramsCo2(amount * table.co2_factor_of(source))
}

pub fn total_co2<'a>(
    table: &ReferenceTable,
    breakdown: impl IntoIterator<Item = (&'a SourceId, &'a f64)>,
) -> KilogramsCo2 {
    breakdown
        .into_iter()
        .map(|(source, amount)| co2_emissions(table, source.as_str(), *amount))
        .sum()
}

pub fn co2_of_samples<'a>(
    table: &ReferenceTable,
    samples: impl IntoIterator<Item = &'a Sample>,
) -> KilogramsCo2 {
    samples.into_iter().map(|sample| total_co2(table, &sample.sources)).sum()
}

/// Number of trees needed to absorb the emissions within a year, rounded up.
#[must_use]
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn trees_equivalent(co2: KilogramsCo2) -> u64 {
    let trees = (co2 / CO2_PER_TREE).ceil();
    if trees > 0.0 { trees as u64 } else { 0 }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::sample::SourceBreakdown;

    #[test]
    fn test_total_co2() {
        let breakdown = SourceBreakdown::from([
            ("electricity".into(), 1000.0),
            ("gas".into(), 10.0),
            ("solar".into(), 500.0),
            ("wind".into(), 500.0),
        ]);
        assert_abs_diff_eq!(
            total_co2(&ReferenceTable::default(), &breakdown).0,
            57.1 + 20.3,
            epsilon = 1e-9,
        );
    }

    #[test]
    fn test_unknown_source_emits_nothing() {
        assert_abs_diff_eq!(co2_emissions(&ReferenceTable::default(), "steam", 100.0).0, 0.0);
    }

    #[test]
    fn test_trees_equivalent() {
        assert_eq!(trees_equivalent(KilogramsCo2(0.0)), 0);
        assert_eq!(trees_equivalent(KilogramsCo2(20.0)), 1);
        assert_eq!(trees_equivalent(KilogramsCo2(20.5)), 2);
        assert_eq!(trees_equivalent(KilogramsCo2(f64::NAN)), 0);
        assert_eq!(trees_equivalent(KilogramsCo2(-5.0)), 0);
    }
}
