use serde::{Deserialize, Serialize};

/// A single opaque hero record.
///
/// Whatever JSON value the client submits is carried through storage
/// unchanged in meaning (numbers, non-ASCII strings, nested structures).
/// Only clients interpret record fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeroRecord(pub serde_json::Value);

/// Ordered sequence of hero records.
///
/// Indices handed out by the daily selector are positions in this sequence,
/// so order is preserved across save/load. Duplicate records are permitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeroCollection {
    records: Vec<HeroRecord>,
}

impl HeroCollection {
    /// Builds a collection from records in client-submitted order.
    pub fn new(records: Vec<HeroRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Indexed read access. The selector only computes in-range indices;
    /// anything else is a caller bug and shows up as `None`.
    pub fn get(&self, index: usize) -> Option<&HeroRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[HeroRecord] {
        &self.records
    }
}
