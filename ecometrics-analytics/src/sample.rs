use std::{collections::BTreeMap, convert::Infallible, str::FromStr};

use bon::Builder;
use chrono::{DateTime, TimeDelta, Utc};
use ecometrics_quantities::{
    area::SquareMeters,
    energy::KilowattHours,
    power::Kilowatts,
    time::Hours,
};
use serde::{Deserialize, Serialize};

use crate::id::{EntityId, SourceId};

/// Consumption per source, each in the source's native unit.
pub type SourceBreakdown = BTreeMap<SourceId, f64>;

/// Hourly consumption observation of a single entity.
#[must_use]
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,

    #[builder(into)]
    pub entity_id: EntityId,

    /// Instantaneous consumption per source.
    ///
    /// Sources use heterogeneous units and must not be summed without conversion.
    #[builder(default)]
    #[serde(default)]
    pub sources: SourceBreakdown,

    /// Pre-combined instantaneous demand.
    pub total_power: Kilowatts,

    /// Energy drawn over the sample period, if metered separately from the power.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumption: Option<KilowattHours>,
}

impl Sample {
    pub fn with_source(mut self, id: impl Into<SourceId>, amount: f64) -> Self {
        self.sources.insert(id.into(), amount);
        self
    }

    /// Consumption of the source, `0.0` when the sample does not mention it.
    #[must_use]
    pub fn amount_of(&self, id: &str) -> f64 {
        self.sources.get(id).copied().unwrap_or_default()
    }

    /// Energy drawn over the sample period.
    ///
    /// Samples are hourly: without a metered value, the total power is held for one hour.
    pub fn energy(&self) -> KilowattHours {
        self.consumption.unwrap_or(self.total_power * Hours::ONE)
    }
}

/// Numeric sample field to aggregate.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Field {
    #[default]
    TotalPower,

    Consumption,

    Source(SourceId),
}

impl Field {
    #[must_use]
    pub fn value_of(&self, sample: &Sample) -> f64 {
        match self {
            Self::TotalPower => sample.total_power.0,
            Self::Consumption => sample.energy().0,
            Self::Source(id) => sample.amount_of(id.as_str()),
        }
    }
}

impl FromStr for Field {
    type Err = Infallible;

    /// Parse `total-power` or `consumption`, anything else selects a source.
    fn from_str(field: &str) -> Result<Self, Self::Err> {
        Ok(match field {
            "total-power" | "total_power" | "totalPower" => Self::TotalPower,
            "consumption" => Self::Consumption,
            source => Self::Source(source.into()),
        })
    }
}

#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Hash, derive_more::Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    #[display("site")]
    Site,

    #[display("building")]
    Building,

    #[display("zone")]
    Zone,

    #[display("process")]
    Process,

    #[display("equipment")]
    Equipment,
}

/// Metadata of an organizational entity.
#[must_use]
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
pub struct Entity {
    #[builder(into)]
    pub id: EntityId,

    #[builder(into)]
    pub name: String,

    pub kind: EntityKind,

    /// Enclosing entity, for example the site of a building.
    #[builder(into)]
    pub parent_id: Option<EntityId>,

    /// Floor area, the reference for the energy intensity.
    pub area: Option<SquareMeters>,

    /// Nominal power, the reference for the utilization rate.
    pub rated_power: Option<Kilowatts>,
}

/// Inclusive time window.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Window of the given duration ending at `end`.
    pub fn until(end: DateTime<Utc>, duration: TimeDelta) -> Self {
        Self { start: end - duration, end }
    }

    #[must_use]
    pub fn duration(self) -> TimeDelta {
        self.end - self.start
    }

    #[must_use]
    pub fn contains(self, timestamp: DateTime<Utc>) -> bool {
        (self.start <= timestamp) && (timestamp <= self.end)
    }

    /// Window of the same duration that ends right before this one starts.
    pub fn preceding(self) -> Self {
        let end = self.start - TimeDelta::nanoseconds(1);
        Self { start: end - self.duration(), end }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;

    use super::*;

    fn sample() -> Sample {
        Sample::builder()
            .timestamp(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap())
            .entity_id("site_paris")
            .total_power(Kilowatts(500.0))
            .build()
            .with_source("electricity", 350.0)
            .with_source("gas", 10.0)
    }

    #[test]
    fn test_amount_of_missing_source() {
        let sample = sample();
        assert_abs_diff_eq!(sample.amount_of("gas"), 10.0);
        assert_abs_diff_eq!(sample.amount_of("fuel"), 0.0);
    }

    #[test]
    fn test_energy_falls_back_to_hourly_power() {
        let mut sample = sample();
        assert_abs_diff_eq!(sample.energy().0, 500.0);
        sample.consumption = Some(KilowattHours(480.0));
        assert_abs_diff_eq!(sample.energy().0, 480.0);
    }

    #[test]
    fn test_field() {
        let sample = sample();
        assert_abs_diff_eq!(Field::default().value_of(&sample), 500.0);
        assert_abs_diff_eq!("electricity".parse::<Field>().unwrap().value_of(&sample), 350.0);
        assert_eq!("consumption".parse::<Field>().unwrap(), Field::Consumption);
    }

    #[test]
    fn test_range_is_inclusive() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let range = DateRange::until(start + TimeDelta::days(1), TimeDelta::days(1));
        assert!(range.contains(start));
        assert!(range.contains(range.end));
        assert!(!range.contains(range.end + TimeDelta::seconds(1)));
    }

    #[test]
    fn test_preceding_is_disjoint() {
        let end = Utc.with_ymd_and_hms(2024, 3, 8, 0, 0, 0).unwrap();
        let current = DateRange::until(end, TimeDelta::days(7));
        let baseline = current.preceding();
        assert_eq!(baseline.duration(), current.duration());
        assert!(!baseline.contains(current.start));
        assert!(baseline.end < current.start);
    }

    #[test]
    fn test_deserialize_sample() {
        let sample: Sample = serde_json::from_str(
            r#"{
                "timestamp": "2024-03-01T10:00:00Z",
                "entity_id": "site_paris",
                "sources": {"electricity": 350.0, "gas": 10.0},
                "total_power": 500.0
            }"#,
        )
        .unwrap();
        assert_eq!(sample, self::sample());
    }
}
