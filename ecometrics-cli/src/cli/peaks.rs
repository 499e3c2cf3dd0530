use clap::Parser;
use ecometrics_analytics::{
    retrieval::SampleSource,
    statistics::{DEFAULT_PEAK_COUNT, find_peaks},
};

use crate::{
    cli::{dataset::DatasetArgs, window::WindowArgs},
    prelude::*,
    tables::build_peaks_table,
};

#[derive(Parser)]
pub struct PeaksArgs {
    #[clap(flatten)]
    dataset: DatasetArgs,

    #[clap(flatten)]
    window: WindowArgs,

    /// Number of samples to list.
    #[clap(long = "top", default_value_t = DEFAULT_PEAK_COUNT)]
    top_n: usize,
}

impl PeaksArgs {
    pub fn run(self) -> Result {
        let source = self.dataset.load_source()?;
        let samples = source.samples(&self.window.entity_id, self.window.range()?)?;
        let peaks = find_peaks(&samples, self.top_n);
        info!(n_samples = samples.len(), n_peaks = peaks.len(), "found the peaks");
        println!("{}", build_peaks_table(&peaks));
        Ok(())
    }
}
