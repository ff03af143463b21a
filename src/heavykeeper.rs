use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::buckets::CounterTable;
use crate::decay::DEFAULT_DECAY;
use crate::error::{Error, Result};
use crate::priority_queue::{Offer, TopKQueue};

/// Default number of Top-K candidates tracked.
pub const DEFAULT_CAPACITY: usize = 10;

/// An item in the Top-K read-out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub item: Vec<u8>,
    pub count: u32,
}

/// Fixed-memory Top-K heavy hitter sketch.
///
/// Memory is `depth * width` counters plus `capacity` candidates, regardless
/// of how many distinct items are observed. Counts are approximate.
///
/// Every mutation takes `&mut self`; sharing a sketch between threads needs
/// external synchronization such as a `Mutex`.
pub struct TopK<R = SmallRng> {
    table: CounterTable,
    candidates: TopKQueue,
    decay: f64,
    rng: R,
}

impl TopK<SmallRng> {
    /// Creates a sketch tracking the top [`DEFAULT_CAPACITY`] items with
    /// decay base [`DEFAULT_DECAY`](crate::DEFAULT_DECAY).
    pub fn new(width: u32, depth: u32) -> Result<Self> {
        Self::builder(width, depth).build()
    }

    pub fn builder(width: u32, depth: u32) -> Builder<SmallRng> {
        Builder::new(width, depth)
    }
}

impl<R: Rng> TopK<R> {
    /// Records `increment` occurrences of `item`.
    ///
    /// A zero increment leaves the sketch untouched.
    pub fn add<T: AsRef<[u8]> + ?Sized>(&mut self, item: &T, increment: u32) -> Result<()> {
        if increment == 0 {
            return Ok(());
        }

        let item = item.as_ref();
        let fingerprint = self.table.fingerprint(item);
        let max_count = self.table.update(item, fingerprint, increment, &mut self.rng);

        if let Offer::Admitted { evicted: Some(evicted) } =
            self.candidates.offer(item, fingerprint, max_count)
        {
            tracing::trace!(
                evicted_count = evicted.count,
                admitted_count = max_count,
                "top-k candidate evicted"
            );
        }

        Ok(())
    }
}

impl<R> TopK<R> {
    /// Current Top-K items sorted by count, highest first.
    ///
    /// The sketch is not modified, so repeated calls return the same list.
    pub fn top_k(&self) -> Vec<Node> {
        self.candidates
            .sorted()
            .into_iter()
            .map(|c| Node {
                item: c.item.clone(),
                count: c.count,
            })
            .collect()
    }

    /// Number of items currently held in the Top-K set.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `item` is currently held in the Top-K set.
    pub fn query<T: AsRef<[u8]> + ?Sized>(&self, item: &T) -> bool {
        self.count(item).is_some()
    }

    /// Count recorded for `item` in the Top-K set.
    pub fn count<T: AsRef<[u8]> + ?Sized>(&self, item: &T) -> Option<u32> {
        let item = item.as_ref();
        self.candidates.get(item, self.table.fingerprint(item))
    }

    /// Approximate frequency of any item, read from the counter table.
    pub fn estimate<T: AsRef<[u8]> + ?Sized>(&self, item: &T) -> u32 {
        self.table.estimate(item.as_ref())
    }

    /// Probability that a bucket holding `count` decays on one collision.
    pub fn decay_probability(&self, count: u32) -> f64 {
        self.table.decay_probability(count)
    }

    pub fn width(&self) -> u32 {
        self.table.width()
    }

    pub fn depth(&self) -> u32 {
        self.table.depth()
    }

    pub fn capacity(&self) -> usize {
        self.candidates.capacity()
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }
}

impl<R> fmt::Display for TopK<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data")?;
        write!(f, "{}", self.table)?;
        writeln!(f, "Heap")?;
        for c in self.candidates.sorted() {
            writeln!(
                f,
                "FP: {:08x}  C: {:>5}  Item: {}",
                c.fingerprint,
                c.count,
                String::from_utf8_lossy(&c.item)
            )?;
        }
        Ok(())
    }
}

/// Configures a [`TopK`] sketch.
///
/// # Example
/// ```
/// use heavykeeper_sketch::TopK;
///
/// let mut topk = TopK::builder(1024, 4)
///     .capacity(20)
///     .decay(0.95)
///     .seed(7)
///     .build()
///     .unwrap();
/// topk.add("hello", 3).unwrap();
/// assert_eq!(topk.count("hello"), Some(3));
/// ```
pub struct Builder<R> {
    width: u32,
    depth: u32,
    capacity: usize,
    decay: f64,
    rng: R,
}

impl Builder<SmallRng> {
    fn new(width: u32, depth: u32) -> Self {
        Builder {
            width,
            depth,
            capacity: DEFAULT_CAPACITY,
            decay: DEFAULT_DECAY,
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Seeds the default generator so runs are reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }
}

impl<R: Rng> Builder<R> {
    /// Number of Top-K candidates to keep (default: 10).
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Base of the exponential decay, in `(0, 1)` (default: 0.9).
    pub fn decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Replaces the random source used for decay draws.
    pub fn rng<S: Rng>(self, rng: S) -> Builder<S> {
        Builder {
            width: self.width,
            depth: self.depth,
            capacity: self.capacity,
            decay: self.decay,
            rng,
        }
    }

    pub fn build(self) -> Result<TopK<R>> {
        if self.width == 0 {
            return Err(Error::InvalidWidth(self.width));
        }
        if self.depth == 0 {
            return Err(Error::InvalidDepth(self.depth));
        }
        if self.capacity == 0 {
            return Err(Error::InvalidCapacity(self.capacity));
        }
        if !(self.decay > 0.0 && self.decay < 1.0) {
            return Err(Error::InvalidDecay(self.decay));
        }

        tracing::debug!(
            width = self.width,
            depth = self.depth,
            capacity = self.capacity,
            decay = self.decay,
            cells = self.width as u64 * self.depth as u64,
            "heavykeeper sketch created"
        );

        Ok(TopK {
            table: CounterTable::new(self.width, self.depth, self.decay),
            candidates: TopKQueue::with_capacity(self.capacity),
            decay: self.decay,
            rng: self.rng,
        })
    }
}
