//! Persistence of the mapping from neighbour pattern to the atlas cell chosen for it.
//!
//! The file is a pretty-printed JSON object whose keys are pattern indices and whose values are
//! atlas coordinates rendered as `(x, y)`:
//!
//! ```text
//! {
//!   "0": "(2, 2)",
//!   "1": "(10, 14)"
//! }
//! ```

use crate::{
    error::{Error, FormatError},
    permutation::{PatternIndex, MAX_SLOTS},
    point::{parse_canonical, Point},
};

use log::debug;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::fs;
use std::path::Path;

/// Pattern index to atlas coordinate. May be sparse; an absent index simply has no mapping.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CoordinateTable {
    entries: BTreeMap<PatternIndex, Point>,
}

impl CoordinateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the previous coordinate for `index`, if any.
    pub fn insert(&mut self, index: PatternIndex, atlas_coords: Point) -> Option<Point> {
        self.entries.insert(index, atlas_coords)
    }

    pub fn remove(&mut self, index: PatternIndex) -> Option<Point> {
        self.entries.remove(&index)
    }

    pub fn get(&self, index: PatternIndex) -> Option<Point> {
        self.entries.get(&index).copied()
    }

    /// For consumers that draw a default tile for unmapped patterns.
    pub fn get_or(&self, index: PatternIndex, fallback: Point) -> Point {
        self.get(index).unwrap_or(fallback)
    }

    /// Entries in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (PatternIndex, Point)> + '_ {
        self.entries.iter().map(|(i, p)| (*i, *p))
    }

    /// Indices below `num_patterns` that have no mapping.
    pub fn missing(&self, num_patterns: usize) -> Vec<PatternIndex> {
        (0..num_patterns)
            .map(PatternIndex)
            .filter(|i| !self.entries.contains_key(i))
            .collect()
    }

    pub fn to_json(&self) -> Result<String, Error> {
        // Integer keys keep numeric order in the output; serde_json writes them as strings.
        let rendered: BTreeMap<usize, String> = self
            .entries
            .iter()
            .map(|(i, p)| (i.0, p.to_string()))
            .collect();

        Ok(serde_json::to_string_pretty(&rendered)?)
    }

    /// Fails as a whole on the first malformed key or coordinate. Any non-negative index is
    /// accepted; see `from_json_for_slots` to bound them.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        Self::parse(text, None)
    }

    /// Like `from_json`, but also rejects indices outside the `2^num_slots` patterns.
    pub fn from_json_for_slots(text: &str, num_slots: usize) -> Result<Self, Error> {
        assert!(num_slots <= MAX_SLOTS, "At most {} slots are supported", MAX_SLOTS);

        Self::parse(text, Some(1 << num_slots))
    }

    fn parse(text: &str, num_patterns: Option<usize>) -> Result<Self, Error> {
        let RawEntries(raw) = serde_json::from_str::<RawEntries>(text)?;

        let mut entries = BTreeMap::new();
        for (key, value) in raw.iter() {
            let index = PatternIndex(parse_canonical(key)?);
            if let Some(num_patterns) = num_patterns {
                if index.0 >= num_patterns {
                    return Err(FormatError::KeyOutOfRange {
                        key: index.0,
                        num_patterns,
                    }
                    .into());
                }
            }
            let atlas_coords: Point = value.parse()?;
            match entries.entry(index) {
                btree_map::Entry::Vacant(e) => {
                    e.insert(atlas_coords);
                }
                btree_map::Entry::Occupied(_) => {
                    return Err(FormatError::DuplicateKey(key.clone()).into());
                }
            }
        }

        Ok(CoordinateTable { entries })
    }

    /// Creates or truncates the file at `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        debug!("Writing {} coordinates to {:?}", self.len(), path);
        fs::write(path, self.to_json()?)?;

        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let table = Self::from_json(&fs::read_to_string(path)?)?;
        debug!("Read {} coordinates from {:?}", table.len(), path);

        Ok(table)
    }

    pub fn load_for_slots(path: impl AsRef<Path>, num_slots: usize) -> Result<Self, Error> {
        let path = path.as_ref();
        let table = Self::from_json_for_slots(&fs::read_to_string(path)?, num_slots)?;
        debug!("Read {} coordinates from {:?}", table.len(), path);

        Ok(table)
    }
}

/// String pairs in file order. Unlike a map, this keeps repeated keys so they can be rejected.
struct RawEntries(Vec<(String, String)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawEntriesVisitor;

        impl<'de> Visitor<'de> for RawEntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping pattern indices to coordinate strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawEntries, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, String>()? {
                    entries.push(entry);
                }

                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(RawEntriesVisitor)
    }
}

impl std::iter::FromIterator<(PatternIndex, Point)> for CoordinateTable {
    fn from_iter<I: IntoIterator<Item = (PatternIndex, Point)>>(iter: I) -> Self {
        CoordinateTable {
            entries: iter.into_iter().collect(),
        }
    }
}
