use std::{fs, path::PathBuf};

use clap::Parser;
use ecometrics_analytics::{reference::ReferenceTable, retrieval::InMemorySource};

use crate::prelude::*;

#[derive(Parser)]
pub struct DatasetArgs {
    /// JSON file with the entities and their samples.
    #[clap(long = "dataset", env = "ECOMETRICS_DATASET")]
    dataset_path: PathBuf,

    /// TOML file with the energy sources and their tariffs, the built-in table otherwise.
    #[clap(long = "tariff", env = "ECOMETRICS_TARIFF")]
    tariff_path: Option<PathBuf>,
}

impl DatasetArgs {
    #[instrument(skip_all, fields(path = %self.dataset_path.display()))]
    pub fn load_source(&self) -> Result<InMemorySource> {
        let contents = fs::read_to_string(&self.dataset_path)
            .with_context(|| format!("failed to read `{}`", self.dataset_path.display()))?;
        let source: InMemorySource =
            serde_json::from_str(&contents).context("failed to parse the dataset")?;
        info!(n_entities = source.entities().len(), n_samples = source.n_samples(), "loaded");
        Ok(source)
    }

    pub fn load_table(&self) -> Result<ReferenceTable> {
        let Some(path) = &self.tariff_path else {
            debug!("using the built-in tariff");
            return Ok(ReferenceTable::default());
        };
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let table: ReferenceTable = toml::from_str(&contents).context("failed to parse the tariff")?;
        info!(path = %path.display(), n_sources = table.sources().len(), "loaded the tariff");
        Ok(table)
    }
}
