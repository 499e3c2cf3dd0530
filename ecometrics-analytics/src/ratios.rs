//! Ratios, projections, and period-over-period variations.
//!
//! Every zero denominator resolves to a fixed fallback instead of an infinity or a NaN.

use std::ops::Mul;

use ecometrics_quantities::{
    cost::Euros,
    energy::KilowattHours,
    power::Kilowatts,
    ratio::Percentage,
    time::Hours,
};
use serde::Serialize;

pub const DEFAULT_DAYS_IN_MONTH: u32 = 30;

/// Variations smaller than this are considered [`Trend::Stable`].
const STABLE_THRESHOLD: Percentage = Percentage(1.0);

/// Signed relative change from the baseline, positive being an increase.
///
/// A zero (or NaN) baseline yields zero.
pub fn variation(current: f64, baseline: f64) -> Percentage {
    if baseline == 0.0 || baseline.is_nan() {
        Percentage::ZERO
    } else {
        Percentage::from_ratio((current - baseline) / baseline)
    }
}

#[must_use]
pub fn difference<T: std::ops::Sub<Output = T>>(current: T, baseline: T) -> T {
    current - baseline
}

/// Actual power relative to the maximum power, capped at `1.0`.
#[must_use]
pub fn utilization_rate(actual_power: Kilowatts, max_power: Kilowatts) -> f64 {
    if max_power == Kilowatts::ZERO { 0.0 } else { (actual_power / max_power).min(1.0) }
}

/// Average power relative to the peak power.
#[must_use]
pub fn load_factor(average_power: Kilowatts, peak_power: Kilowatts) -> f64 {
    if peak_power == Kilowatts::ZERO { 0.0 } else { average_power / peak_power }
}

/// Consumption per reference unit, for example per square meter or per produced unit.
#[must_use]
pub fn energy_intensity(consumption: KilowattHours, reference_quantity: f64) -> f64 {
    if reference_quantity == 0.0 { 0.0 } else { consumption.0 / reference_quantity }
}

/// Extrapolate the consumption so far today to the full day.
///
/// Returns the consumption as is when no time has elapsed yet.
pub fn project_daily(consumption_so_far: KilowattHours, hours_elapsed: Hours) -> KilowattHours {
    if hours_elapsed == Hours::ZERO {
        consumption_so_far
    } else {
        consumption_so_far / hours_elapsed * Hours::ONE_DAY
    }
}

/// Extrapolate a daily average, of energy or of cost, to a month.
pub fn project_monthly<T: Mul<f64, Output = T>>(daily_average: T, days_in_month: u32) -> T {
    daily_average * f64::from(days_in_month)
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Savings {
    /// Baseline cost minus the current cost.
    pub amount: Euros,

    /// Relative decrease of the cost, positive when saving.
    pub percentage: Percentage,

    pub is_saving: bool,
}

impl Savings {
    pub fn new(baseline_cost: Euros, current_cost: Euros) -> Self {
        let amount = baseline_cost - current_cost;
        Self {
            amount,
            percentage: -variation(current_cost.0, baseline_cost.0),
            is_saving: amount > Euros::ZERO,
        }
    }
}

/// Direction of a variation, the direction being neither good nor bad by itself.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Trend {
    Increase,
    Decrease,
    Stable,
}

impl From<Percentage> for Trend {
    fn from(variation: Percentage) -> Self {
        if variation.0.is_nan() || variation.abs() < STABLE_THRESHOLD {
            Self::Stable
        } else if variation > Percentage::ZERO {
            Self::Increase
        } else {
            Self::Decrease
        }
    }
}
