use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::RuleError;

/// Identifier of a single item (a website, a service, a product).
/// Never empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Validate and wrap a raw identifier. The text is kept verbatim.
    pub fn parse(raw: impl Into<String>) -> Result<Self, RuleError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(RuleError::EmptyItemId);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ItemId {
    type Error = RuleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A set of items. Iteration is in lexicographic order, which is the
/// "natural order" used when a rule's consequent is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemSet(BTreeSet<ItemId>);

impl ItemSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Build a set from raw names, validating each one.
    pub fn try_from_names<I, S>(names: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .map(ItemId::parse)
            .collect::<Result<BTreeSet<_>, _>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the item was not already present.
    pub fn insert(&mut self, item: ItemId) -> bool {
        self.0.insert(item)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.0.contains(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.0.iter()
    }

    pub fn is_subset(&self, other: &ItemSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn is_disjoint(&self, other: &ItemSet) -> bool {
        self.0.is_disjoint(&other.0)
    }

    pub fn intersection<'a>(&'a self, other: &'a ItemSet) -> impl Iterator<Item = &'a ItemId> {
        self.0.intersection(&other.0)
    }

    /// Add every item of `other` to this set.
    pub fn extend_from(&mut self, other: &ItemSet) {
        self.0.extend(other.0.iter().cloned());
    }
}

impl FromIterator<ItemId> for ItemSet {
    fn from_iter<T: IntoIterator<Item = ItemId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ItemSet {
    type Item = ItemId;
    type IntoIter = std::collections::btree_set::IntoIter<ItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = &'a ItemId;
    type IntoIter = std::collections::btree_set::Iter<'a, ItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ItemSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("}")
    }
}
