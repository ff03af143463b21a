use ahash::RandomState;

/// Seed of the row-independent fingerprint hash.
const FINGERPRINT_SEED: u64 = 1919;

// Fixed secondary keys so hashes are identical across sketch instances.
const K1: u64 = 0x51_7c_c1_b7_27_22_0a_95;
const K2: u64 = 0x9e_37_79_b9_7f_4a_7c_15;
const K3: u64 = 0xbf_58_47_6d_1c_e4_e5_b9;

/// Seeded hashers for the per-row slot indices and the item fingerprint.
pub(crate) struct ItemHasher {
    rows: Vec<RandomState>,
    fingerprint: RandomState,
}

impl ItemHasher {
    pub fn new(depth: usize) -> Self {
        let rows = (0..depth as u64).map(seeded).collect();
        Self {
            rows,
            fingerprint: seeded(FINGERPRINT_SEED),
        }
    }

    /// Gets the fingerprint shared by every row
    #[inline]
    pub fn fingerprint(&self, item: &[u8]) -> u32 {
        self.fingerprint.hash_one(item) as u32
    }

    /// Slot index of `item` in `row`
    #[inline]
    pub fn slot(&self, item: &[u8], row: usize, width: u32) -> usize {
        (self.rows[row].hash_one(item) as u32 % width) as usize
    }
}

fn seeded(seed: u64) -> RandomState {
    RandomState::with_seeds(seed, K1, K2, K3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_across_instances() {
        let a = ItemHasher::new(4);
        let b = ItemHasher::new(4);
        assert_eq!(a.fingerprint(b"hello"), b.fingerprint(b"hello"));
        for row in 0..4 {
            assert_eq!(a.slot(b"hello", row, 1024), b.slot(b"hello", row, 1024));
        }
    }

    #[test]
    fn test_slot_in_range() {
        let hasher = ItemHasher::new(3);
        for i in 0..1_000u32 {
            let item = i.to_le_bytes();
            for row in 0..3 {
                assert!(hasher.slot(&item, row, 7) < 7);
            }
        }
    }

    #[test]
    fn test_rows_are_independent() {
        let hasher = ItemHasher::new(2);
        let differs = (0..100u32)
            .map(|i| i.to_le_bytes())
            .filter(|item| hasher.slot(item, 0, 1 << 20) != hasher.slot(item, 1, 1 << 20))
            .count();
        assert!(differs > 90);
    }
}
