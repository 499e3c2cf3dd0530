use clap::Parser;
use ecometrics_analytics::mix::{MixBasis, energy_mix_for};

use crate::{
    cli::{dataset::DatasetArgs, window::WindowArgs},
    prelude::*,
    tables::build_mix_table,
};

#[derive(Parser)]
pub struct MixArgs {
    #[clap(flatten)]
    dataset: DatasetArgs,

    #[clap(flatten)]
    window: WindowArgs,

    #[clap(long, default_value = "native")]
    basis: Basis,
}

impl MixArgs {
    pub fn run(self) -> Result {
        let source = self.dataset.load_source()?;
        let table = self.dataset.load_table()?;
        let basis = MixBasis::from(self.basis);
        let mix = energy_mix_for(&source, &table, &self.window.entity_id, self.window.range()?, basis)?;
        println!("{}", build_mix_table(&mix, basis));
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum Basis {
    /// Sum the amounts in their own units.
    Native,

    /// Convert the amounts into kilowatt-hours first.
    Equivalent,
}

impl From<Basis> for MixBasis {
    fn from(basis: Basis) -> Self {
        match basis {
            Basis::Native => Self::Native,
            Basis::Equivalent => Self::KilowattHourEquivalent,
        }
    }
}
