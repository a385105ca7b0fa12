use crate::metadata::CameraMetadata;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Occurrence counts keyed by observed value, iterated in first-seen order.
///
/// A key is only ever present with a count of at least one.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    rows: Vec<(K, u64)>,
    positions: HashMap<K, usize>,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    pub fn increment(&mut self, key: K) {
        match self.positions.get(&key) {
            Some(&idx) => self.rows[idx].1 += 1,
            None => {
                self.positions.insert(key.clone(), self.rows.len());
                self.rows.push((key, 1));
            }
        }
    }

    #[cfg(test)]
    pub fn get(&self, key: &K) -> Option<u64> {
        self.positions.get(key).map(|&idx| self.rows[idx].1)
    }
}

impl<K> FrequencyTable<K> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.rows.iter().map(|(key, count)| (key, *count))
    }
}

impl<K: fmt::Display> fmt::Display for FrequencyTable<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "  (none)");
        }
        for (i, (key, count)) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {}: {}", key, count)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tallies {
    pub models: FrequencyTable<String>,
    pub lenses: FrequencyTable<String>,
    pub focal_lengths: FrequencyTable<u32>,
}

impl Tallies {
    /// Each attribute feeds its own table; absent attributes touch nothing.
    pub fn record(&mut self, metadata: CameraMetadata) {
        if let Some(model) = metadata.model {
            self.models.increment(model);
        }
        if let Some(lens) = metadata.lens_model {
            self.lenses.increment(lens);
        }
        if let Some(focal) = metadata.focal_length_35mm {
            self.focal_lengths.increment(focal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(model: Option<&str>, lens: Option<&str>, focal: Option<u32>) -> CameraMetadata {
        CameraMetadata {
            model: model.map(String::from),
            lens_model: lens.map(String::from),
            focal_length_35mm: focal,
        }
    }

    #[test]
    fn counts_repeated_keys() {
        let mut table = FrequencyTable::default();
        table.increment("X".to_string());
        table.increment("Y".to_string());
        table.increment("X".to_string());

        assert_eq!(table.get(&"X".to_string()), Some(2));
        assert_eq!(table.get(&"Y".to_string()), Some(1));
        assert_eq!(table.get(&"Z".to_string()), None);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn iterates_in_first_seen_order() {
        let mut table = FrequencyTable::default();
        for focal in [85, 24, 85, 50, 24, 85] {
            table.increment(focal);
        }
        let rows: Vec<(u32, u64)> = table.iter().map(|(k, c)| (*k, c)).collect();
        assert_eq!(rows, vec![(85, 3), (24, 2), (50, 1)]);
    }

    #[test]
    fn fields_are_tallied_independently() {
        let mut tallies = Tallies::default();
        tallies.record(metadata(Some("Canon EOS R5"), None, Some(50)));

        assert_eq!(tallies.models.get(&"Canon EOS R5".to_string()), Some(1));
        assert!(tallies.lenses.is_empty());
        assert_eq!(tallies.focal_lengths.get(&50), Some(1));
    }

    #[test]
    fn empty_metadata_changes_nothing() {
        let mut tallies = Tallies::default();
        tallies.record(CameraMetadata::default());

        assert!(tallies.models.is_empty());
        assert!(tallies.lenses.is_empty());
        assert!(tallies.focal_lengths.is_empty());
    }

    #[test]
    fn display_lists_rows() {
        let mut table = FrequencyTable::default();
        table.increment("A7 IV".to_string());
        table.increment("A7 IV".to_string());
        assert_eq!(table.to_string(), "  A7 IV: 2");
        assert_eq!(FrequencyTable::<u32>::default().to_string(), "  (none)");
    }
}
