use clap::Parser;
use ecometrics_analytics::{
    comparison::PeriodStatistics,
    retrieval::SampleSource,
    sample::Field,
    statistics::StatisticalSummary,
};

use crate::{
    cli::{dataset::DatasetArgs, window::WindowArgs},
    prelude::*,
    tables::{build_period_table, build_summary_table},
};

#[derive(Parser)]
pub struct StatsArgs {
    #[clap(flatten)]
    dataset: DatasetArgs,

    #[clap(flatten)]
    window: WindowArgs,

    /// Sample field to summarize: `total-power`, `consumption`, or an energy source.
    #[clap(long, default_value = "total-power")]
    field: Field,
}

impl StatsArgs {
    pub fn run(self) -> Result {
        let source = self.dataset.load_source()?;
        let table = self.dataset.load_table()?;
        let range = self.window.range()?;

        let entity = source.entity(&self.window.entity_id)?;
        let samples = source.samples(&entity.id, range)?;
        info!(entity = %entity.name, n_samples = samples.len(), "crunching…");

        let summary = StatisticalSummary::of_samples(&samples, &self.field);
        let statistics = PeriodStatistics::from_samples(&table, range, &samples);
        println!("{}", build_summary_table(&self.field, &summary));
        println!("{}", build_period_table(&entity, &statistics));
        Ok(())
    }
}
