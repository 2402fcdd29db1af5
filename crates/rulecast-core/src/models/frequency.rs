use serde::{Deserialize, Serialize};

use super::ItemId;

/// How often a service occurred in the observed transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFrequency {
    pub service: ItemId,
    pub frequency: u64,
}

/// Service frequencies in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<ServiceFrequency>,
}

impl FrequencyTable {
    pub fn new(entries: Vec<ServiceFrequency>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ServiceFrequency] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The selectable history items, in source order.
    pub fn services(&self) -> impl Iterator<Item = &ItemId> {
        self.entries.iter().map(|e| &e.service)
    }

    pub fn max_frequency(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.frequency).max()
    }
}

impl FromIterator<ServiceFrequency> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = ServiceFrequency>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
