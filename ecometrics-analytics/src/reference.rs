//! Energy sources, their tariffs and emission factors, and unit conversions.

use bon::Builder;
use ecometrics_quantities::energy::KilowattHours;
use serde::{Deserialize, Serialize};

use crate::id::SourceId;

/// Physical unit a source's consumption is metered in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, derive_more::Display, Serialize, Deserialize)]
pub enum Unit {
    #[display("kWh")]
    #[serde(rename = "kWh", alias = "kwh")]
    KilowattHour,

    #[display("m³")]
    #[serde(rename = "m³", alias = "m3")]
    CubicMeter,

    #[display("L")]
    #[serde(rename = "L", alias = "l")]
    Liter,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionFactors {
    /// Lower heating value of natural gas.
    pub cubic_meter_to_kilowatt_hours: f64,

    /// Lower heating value of heating fuel.
    pub liter_to_kilowatt_hours: f64,
}

impl Default for ConversionFactors {
    fn default() -> Self {
        Self { cubic_meter_to_kilowatt_hours: 10.3, liter_to_kilowatt_hours: 10.0 }
    }
}

impl ConversionFactors {
    #[must_use]
    pub const fn kilowatt_hours_per(&self, unit: Unit) -> f64 {
        match unit {
            Unit::KilowattHour => 1.0,
            Unit::CubicMeter => self.cubic_meter_to_kilowatt_hours,
            Unit::Liter => self.liter_to_kilowatt_hours,
        }
    }

    pub fn to_kilowatt_hours(&self, unit: Unit, amount: f64) -> KilowattHours {
        KilowattHours(amount * self.kilowatt_hours_per(unit))
    }
}

#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
pub struct EnergySource {
    #[builder(into)]
    pub id: SourceId,

    #[builder(into)]
    pub name: String,

    pub unit: Unit,

    /// Euro per [`Self::unit`].
    #[builder(default)]
    #[serde(default)]
    pub price_per_unit: f64,

    /// Kilograms of CO₂ per [`Self::unit`], zero for carbon-free sources.
    #[builder(default)]
    #[serde(default)]
    pub co2_per_unit: f64,
}

/// Immutable set of energy sources in presentation order.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTable {
    sources: Vec<EnergySource>,

    #[serde(default)]
    conversions: ConversionFactors,
}

impl Default for ReferenceTable {
    /// French 2024 tariffs and emission factors.
    fn default() -> Self {
        Self::new(
            vec![
                EnergySource::builder()
                    .id("electricity")
                    .name("Electricity")
                    .unit(Unit::KilowattHour)
                    .price_per_unit(0.1893)
                    .co2_per_unit(0.0571)
                    .build(),
                EnergySource::builder()
                    .id("gas")
                    .name("Natural gas")
                    .unit(Unit::CubicMeter)
                    .price_per_unit(0.0878)
                    .co2_per_unit(2.03)
                    .build(),
                EnergySource::builder().id("solar").name("Solar").unit(Unit::KilowattHour).build(),
                EnergySource::builder().id("wind").name("Wind").unit(Unit::KilowattHour).build(),
                EnergySource::builder()
                    .id("fuel")
                    .name("Heating fuel")
                    .unit(Unit::Liter)
                    .price_per_unit(1.15)
                    .co2_per_unit(2.67)
                    .build(),
            ],
            ConversionFactors::default(),
        )
    }
}

impl ReferenceTable {
    pub const fn new(sources: Vec<EnergySource>, conversions: ConversionFactors) -> Self {
        Self { sources, conversions }
    }

    #[must_use]
    pub fn sources(&self) -> &[EnergySource] {
        &self.sources
    }

    #[must_use]
    pub const fn conversions(&self) -> &ConversionFactors {
        &self.conversions
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&EnergySource> {
        self.sources.iter().find(|source| source.id.as_str() == id)
    }

    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.sources.iter().position(|source| source.id.as_str() == id)
    }

    /// Price per native unit, `0.0` for sources absent from the table.
    ///
    /// Unknown sources therefore never contribute to a cost total.
    #[must_use]
    pub fn price_of(&self, id: &str) -> f64 {
        self.get(id).map_or(0.0, |source| source.price_per_unit)
    }

    /// CO₂ factor per native unit, `0.0` for sources absent from the table.
    #[must_use]
    pub fn co2_factor_of(&self, id: &str) -> f64 {
        self.get(id).map_or(0.0, |source| source.co2_per_unit)
    }

    /// Convert a native amount into its kilowatt-hour equivalent, zero for unknown sources.
    pub fn to_kilowatt_hours(&self, id: &str, amount: f64) -> KilowattHours {
        self.get(id).map_or(KilowattHours::ZERO, |source| {
            self.conversions.to_kilowatt_hours(source.unit, amount)
        })
    }
}
