#![allow(clippy::doc_markdown)]
#![doc = include_str!("../../README.md")]

mod cli;
mod fmt;
mod prelude;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();

    match args.command {
        Command::Stats(args) => args.run()?,
        Command::Peaks(args) => args.run()?,
        Command::Mix(args) => args.run()?,
        Command::Compare(args) => args.run()?,
        Command::Project(args) => args.run()?,
    }

    info!("done!");
    Ok(())
}
