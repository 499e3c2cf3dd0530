use clap::Parser;
use ecometrics_analytics::ratios::{DEFAULT_DAYS_IN_MONTH, project_daily, project_monthly};
use ecometrics_quantities::{cost::EurosPerKilowattHour, energy::KilowattHours, time::Hours};

use crate::{prelude::*, tables::build_projection_table};

#[derive(Parser)]
pub struct ProjectArgs {
    /// Consumption since midnight, in kilowatt-hours.
    #[clap(long)]
    consumption: KilowattHours,

    /// Hours elapsed since midnight.
    #[clap(long)]
    hours_elapsed: Hours,

    #[clap(long, default_value_t = DEFAULT_DAYS_IN_MONTH)]
    days_in_month: u32,

    /// Average cost of one kilowatt-hour, to project the bill as well.
    #[clap(long)]
    unit_cost: Option<EurosPerKilowattHour>,
}

impl ProjectArgs {
    pub fn run(self) -> Result {
        ensure!(self.hours_elapsed >= Hours::ZERO, "elapsed hours must not be negative");
        let daily = project_daily(self.consumption, self.hours_elapsed);
        let monthly = project_monthly(daily, self.days_in_month);
        let monthly_cost = self.unit_cost.map(|unit_cost| monthly * unit_cost);
        debug!(?daily, ?monthly, ?monthly_cost, "projected");
        println!("{}", build_projection_table(daily, monthly, self.days_in_month, monthly_cost));
        Ok(())
    }
}
