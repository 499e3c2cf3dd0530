mod compare;
mod dataset;
mod mix;
mod peaks;
mod project;
mod stats;
mod window;

use clap::{Parser, Subcommand};

use crate::cli::{
    compare::CompareArgs,
    mix::MixArgs,
    peaks::PeaksArgs,
    project::ProjectArgs,
    stats::StatsArgs,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Summarize a sample field, and the consumption, cost, and emissions over a window.
    #[clap(name = "stats")]
    Stats(Box<StatsArgs>),

    /// List the samples with the highest total power.
    #[clap(name = "peaks")]
    Peaks(Box<PeaksArgs>),

    /// Break the consumption down by energy source.
    #[clap(name = "mix")]
    Mix(Box<MixArgs>),

    /// Compare the latest period against the equal-length period right before it.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),

    /// Extrapolate today's consumption to the full day and the month.
    #[clap(name = "project")]
    Project(ProjectArgs),
}
