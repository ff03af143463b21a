use std::fmt;

use rand::Rng;

use crate::decay::DecayTable;
use crate::hash_composition::ItemHasher;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub(crate) struct Bucket {
    pub(crate) fingerprint: u32,
    pub(crate) count: u32,
}

/// `depth` rows of `width` fingerprinted counters with probabilistic decay
/// on collision.
pub(crate) struct CounterTable {
    width: u32,
    rows: Vec<Vec<Bucket>>,
    hasher: ItemHasher,
    decay: DecayTable,
}

impl CounterTable {
    /// Callers validate that both dimensions are non-zero.
    pub(crate) fn new(width: u32, depth: u32, decay: f64) -> Self {
        let rows = (0..depth)
            .map(|_| vec![Bucket::default(); width as usize])
            .collect();

        Self {
            width,
            rows,
            hasher: ItemHasher::new(depth as usize),
            decay: DecayTable::new(decay),
        }
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn depth(&self) -> u32 {
        self.rows.len() as u32
    }

    #[inline]
    pub(crate) fn fingerprint(&self, item: &[u8]) -> u32 {
        self.hasher.fingerprint(item)
    }

    pub(crate) fn decay_probability(&self, count: u32) -> f64 {
        self.decay.probability(count)
    }

    /// Records `increment` occurrences of `item` in every row and returns the
    /// largest count the item holds in any row afterwards.
    ///
    /// A row held by another fingerprint is decayed one unit per requested
    /// increment; once it drains to zero the item takes the bucket over with
    /// whatever increment is left.
    pub(crate) fn update<R: Rng + ?Sized>(
        &mut self,
        item: &[u8],
        fingerprint: u32,
        increment: u32,
        rng: &mut R,
    ) -> u32 {
        let mut max_count = 0;

        for (i, row) in self.rows.iter_mut().enumerate() {
            let slot = self.hasher.slot(item, i, self.width);
            let bucket = &mut row[slot];

            if bucket.count == 0 {
                bucket.fingerprint = fingerprint;
                bucket.count = increment;
                max_count = max_count.max(bucket.count);
            } else if bucket.fingerprint == fingerprint {
                bucket.count = bucket.count.saturating_add(increment);
                max_count = max_count.max(bucket.count);
            } else {
                let mut remaining = increment;
                while remaining > 0 {
                    if rng.random::<f64>() < self.decay.probability(bucket.count) {
                        bucket.count -= 1;
                        if bucket.count == 0 {
                            bucket.fingerprint = fingerprint;
                            bucket.count = remaining;
                            max_count = max_count.max(bucket.count);
                            break;
                        }
                    }
                    remaining -= 1;
                }
            }
        }

        max_count
    }

    /// Largest count held by `item` in any row, without touching the table.
    pub(crate) fn estimate(&self, item: &[u8]) -> u32 {
        let fingerprint = self.fingerprint(item);
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| row[self.hasher.slot(item, i, self.width)])
            .filter(|bucket| bucket.count > 0 && bucket.fingerprint == fingerprint)
            .map(|bucket| bucket.count)
            .max()
            .unwrap_or(0)
    }

    #[cfg(test)]
    pub(crate) fn bucket(&self, row: usize, slot: usize) -> Bucket {
        self.rows[row][slot]
    }

    #[cfg(test)]
    pub(crate) fn slot_of(&self, item: &[u8], row: usize) -> usize {
        self.hasher.slot(item, row, self.width)
    }

    #[cfg(test)]
    pub(crate) fn cells(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

impl fmt::Display for CounterTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            write!(f, "{:>3}:", i)?;
            for bucket in row {
                write!(f, " [{:08x} {:>5}]", bucket.fingerprint, bucket.count)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
