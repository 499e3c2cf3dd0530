use chrono::{DateTime, TimeDelta, Utc};
use clap::Parser;
use ecometrics_analytics::{
    comparison::Comparator,
    id::EntityId,
    ratios::Savings,
    sample::DateRange,
};

use crate::{cli::dataset::DatasetArgs, prelude::*, tables::build_comparison_table};

#[derive(Parser)]
pub struct CompareArgs {
    #[clap(flatten)]
    dataset: DatasetArgs,

    /// Entity identifier, for example `site_paris`.
    #[clap(long = "entity", env = "ECOMETRICS_ENTITY")]
    entity_id: EntityId,

    /// Inclusive end of the current period, RFC 3339. Defaults to now.
    #[clap(long)]
    until: Option<DateTime<Utc>>,

    /// Length of each period.
    #[clap(long, default_value = "7d")]
    period: humantime::Duration,
}

impl CompareArgs {
    pub fn run(self) -> Result {
        let source = self.dataset.load_source()?;
        let table = self.dataset.load_table()?;

        let period = TimeDelta::from_std(self.period.into()).context("the period is too long")?;
        ensure!(period > TimeDelta::zero(), "the period must not be empty");
        let current = DateRange::until(self.until.unwrap_or_else(Utc::now), period);
        let baseline = current.preceding();
        info!(
            current.start = %current.start,
            baseline.start = %baseline.start,
            period = %self.period,
            "comparing…",
        );

        let comparison = Comparator::builder()
            .source(&source)
            .table(&table)
            .build()
            .compare(&self.entity_id, current, baseline)
            .with_context(|| format!("failed to compare `{}`", self.entity_id))?;
        let savings = Savings::new(comparison.baseline.total_cost, comparison.current.total_cost);
        info!(
            amount = %savings.amount,
            percentage = %savings.percentage,
            is_saving = savings.is_saving,
            "savings",
        );

        println!("{}", build_comparison_table(&comparison));
        Ok(())
    }
}
