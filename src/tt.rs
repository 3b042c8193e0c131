//! Transposition table: a fixed-capacity cache from Zobrist hash to
//! search results.
//!
//! Direct-mapped, power-of-two capacity, depth-preferred replacement.
//! Entries carry a bound type so alpha-beta results can be reused soundly.

use std::mem;

/// How a stored score relates to the true value of the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    /// Score is exact (search completed inside the window)
    Exact,
    /// Score is a lower bound (search failed high)
    LowerBound,
    /// Score is an upper bound (search failed low)
    UpperBound,
}

#[derive(Clone, Debug)]
pub struct TTEntry {
    pub hash: u64,
    pub depth: u32,
    pub score: i32,
    pub bound_type: BoundType,
}

pub struct TranspositionTable {
    table: Vec<Option<TTEntry>>,
    mask: usize,
}

impl TranspositionTable {
    /// Create a table sized to roughly `size_mb` megabytes, rounded down
    /// to a power-of-two entry count.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = mem::size_of::<Option<TTEntry>>();
        let mut num_entries = (size_mb * 1024 * 1024) / entry_size;

        num_entries = num_entries.next_power_of_two() / 2;
        if num_entries == 0 {
            num_entries = 1024;
        }

        TranspositionTable {
            table: vec![None; num_entries],
            mask: num_entries - 1,
        }
    }

    fn index(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }

    /// Look up an entry by hash. Returns `None` on a miss or an index
    /// collision with a different position.
    #[must_use]
    pub fn probe(&self, hash: u64) -> Option<&TTEntry> {
        let index = self.index(hash);
        if let Some(entry) = &self.table[index] {
            if entry.hash == hash {
                return Some(entry);
            }
        }
        None
    }

    /// Store a result, replacing any resident entry searched to a
    /// shallower depth.
    pub fn store(&mut self, hash: u64, depth: u32, score: i32, bound_type: BoundType) {
        let index = self.index(hash);
        let should_replace = match &self.table[index] {
            Some(existing_entry) => depth >= existing_entry.depth,
            None => true,
        };

        if should_replace {
            self.table[index] = Some(TTEntry {
                hash,
                depth,
                score,
                bound_type,
            });
        }
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_probe() {
        let mut tt = TranspositionTable::new(1);
        tt.store(0xDEADBEEF, 4, 120, BoundType::Exact);

        let entry = tt.probe(0xDEADBEEF).expect("entry should be present");
        assert_eq!(entry.depth, 4);
        assert_eq!(entry.score, 120);
        assert_eq!(entry.bound_type, BoundType::Exact);
    }

    #[test]
    fn test_probe_miss() {
        let tt = TranspositionTable::new(1);
        assert!(tt.probe(0x12345).is_none());
    }

    #[test]
    fn test_collision_rejected() {
        let mut tt = TranspositionTable::new(1);
        let mask = tt.mask as u64;
        let a = 0x1000;
        let b = a + mask + 1; // same slot, different hash
        tt.store(a, 4, 50, BoundType::Exact);
        assert!(tt.probe(b).is_none());
    }

    #[test]
    fn test_depth_preferred_replacement() {
        let mut tt = TranspositionTable::new(1);
        let mask = tt.mask as u64;
        let a = 0x2000;
        let b = a + mask + 1; // maps to the same slot

        tt.store(a, 6, 75, BoundType::Exact);
        // Shallower entry must not displace the deeper one
        tt.store(b, 2, -30, BoundType::LowerBound);
        assert!(tt.probe(a).is_some());
        assert!(tt.probe(b).is_none());

        // Deeper entry replaces
        tt.store(b, 8, -30, BoundType::LowerBound);
        assert!(tt.probe(b).is_some());
        assert!(tt.probe(a).is_none());
    }
}
