/// Number of precomputed decay probabilities.
pub(crate) const DECAY_TABLE_LEN: usize = 256;

/// Default decay base.
pub const DEFAULT_DECAY: f64 = 0.9;

/// Precomputed powers of the decay base, `table[i] = decay^i`.
///
/// Counts past the end of the table are composed from the last entry and
/// the remainder, so the hot path never calls `powf`.
pub(crate) struct DecayTable {
    table: [f64; DECAY_TABLE_LEN],
}

impl DecayTable {
    pub(crate) fn new(decay: f64) -> Self {
        let mut table = [1.0; DECAY_TABLE_LEN];
        for i in 1..DECAY_TABLE_LEN {
            table[i] = table[i - 1] * decay;
        }
        Self { table }
    }

    /// Probability that an occupant holding `count` gives up one unit.
    #[inline]
    pub(crate) fn probability(&self, count: u32) -> f64 {
        let count = count as usize;
        if count < DECAY_TABLE_LEN {
            return self.table[count];
        }

        let last = DECAY_TABLE_LEN - 1;
        let quotient = (count / last) as i32;
        self.table[last].powi(quotient) * self.table[count % last]
    }
}
