//! Seam to the upstream data source the samples and the entity metadata come from.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    id::EntityId,
    prelude::*,
    sample::{DateRange, Entity, Sample},
};

/// Upstream provider of entity metadata and consumption samples.
///
/// Both calls may fail, the failure is propagated to the caller as is.
pub trait SampleSource {
    /// Samples of the entity with timestamps within the inclusive range.
    fn samples(&self, entity_id: &EntityId, range: DateRange) -> Result<Vec<Sample>>;

    fn entity(&self, entity_id: &EntityId) -> Result<Entity>;
}

impl<T: SampleSource + ?Sized> SampleSource for &T {
    fn samples(&self, entity_id: &EntityId, range: DateRange) -> Result<Vec<Sample>> {
        (**self).samples(entity_id, range)
    }

    fn entity(&self, entity_id: &EntityId) -> Result<Entity> {
        (**self).entity(entity_id)
    }
}

/// Dataset held in memory, for example loaded from a JSON file.
#[must_use]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InMemorySource {
    #[serde(default)]
    entities: Vec<Entity>,

    #[serde(default)]
    samples: Vec<Sample>,
}

impl InMemorySource {
    pub const fn new(entities: Vec<Entity>, samples: Vec<Sample>) -> Self {
        Self { entities, samples }
    }

    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    #[must_use]
    pub const fn n_samples(&self) -> usize {
        self.samples.len()
    }
}

impl SampleSource for InMemorySource {
    fn samples(&self, entity_id: &EntityId, range: DateRange) -> Result<Vec<Sample>> {
        self.entity(entity_id)?;
        Ok(self
            .samples
            .iter()
            .filter(|sample| (&sample.entity_id == entity_id) && range.contains(sample.timestamp))
            .cloned()
            .sorted_by_key(|sample| sample.timestamp)
            .collect())
    }

    fn entity(&self, entity_id: &EntityId) -> Result<Entity> {
        self.entities
            .iter()
            .find(|entity| &entity.id == entity_id)
            .cloned()
            .ok_or_else(|| Error::entity_not_found(entity_id.as_str()))
    }
}
