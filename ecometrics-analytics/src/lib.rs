//! Derived metrics over time-stamped energy consumption samples.
//!
//! Every calculator is a pure function of its inputs. Numeric edge cases such as empty
//! sample sequences or zero denominators resolve to documented fallback values; only
//! failures of the [`retrieval::SampleSource`] surface as [`Error`].

pub mod comparison;
pub mod cost;
pub mod emissions;
mod error;
pub mod id;
pub mod mix;
mod prelude;
pub mod ratios;
pub mod reference;
pub mod retrieval;
pub mod sample;
pub mod statistics;

pub use self::error::{Error, Result};
