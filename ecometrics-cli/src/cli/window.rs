use chrono::{DateTime, Utc};
use clap::Parser;
use ecometrics_analytics::{id::EntityId, sample::DateRange};

use crate::prelude::*;

#[derive(Parser)]
pub struct WindowArgs {
    /// Entity identifier, for example `site_paris`.
    #[clap(long = "entity", env = "ECOMETRICS_ENTITY")]
    pub entity_id: EntityId,

    /// Inclusive window start, RFC 3339.
    #[clap(long)]
    since: DateTime<Utc>,

    /// Inclusive window end, RFC 3339.
    #[clap(long)]
    until: DateTime<Utc>,
}

impl WindowArgs {
    pub fn range(&self) -> Result<DateRange> {
        ensure!(self.since <= self.until, "the window starts after it ends");
        Ok(DateRange::new(self.since, self.until))
    }
}
