/// A slot in the candidate heap. Unclaimed slots hold count 0 and an empty item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) fingerprint: u32,
    pub(crate) count: u32,
    pub(crate) item: Vec<u8>,
}

/// Outcome of offering an item to the [`TopKQueue`].
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Offer {
    /// The item was already resident and its count was refreshed.
    Updated,
    /// The item replaced the previous minimum.
    Admitted { evicted: Option<Candidate> },
    /// The count did not reach the current minimum.
    Rejected,
}

/// Fixed-capacity min-heap of Top-K candidates keyed by count.
///
/// The heap is pre-filled with `capacity` zero-count placeholders, so its
/// length never changes and admission is always an in-place overwrite of
/// the root.
pub(crate) struct TopKQueue {
    heap: Vec<Candidate>,
}

impl TopKQueue {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: vec![Candidate::default(); capacity],
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.heap.len()
    }

    /// Number of slots claimed by a real item.
    pub(crate) fn len(&self) -> usize {
        self.heap.iter().filter(|c| c.count > 0).count()
    }

    pub(crate) fn min_count(&self) -> u32 {
        self.heap.first().map(|c| c.count).unwrap_or(0)
    }

    fn position(&self, item: &[u8], fingerprint: u32) -> Option<usize> {
        // fingerprints collide, so the item bytes are always compared too
        self.heap
            .iter()
            .position(|c| c.count > 0 && c.fingerprint == fingerprint && c.item == item)
    }

    pub(crate) fn get(&self, item: &[u8], fingerprint: u32) -> Option<u32> {
        self.position(item, fingerprint).map(|pos| self.heap[pos].count)
    }

    /// Refreshes a resident item, or admits a new one over the current
    /// minimum when `count` is at least as large.
    pub(crate) fn offer(&mut self, item: &[u8], fingerprint: u32, count: u32) -> Offer {
        if count == 0 || self.heap.is_empty() {
            return Offer::Rejected;
        }

        if let Some(pos) = self.position(item, fingerprint) {
            self.heap[pos].count = count;
            self.sift_down(pos);
            self.sift_up(pos);
            return Offer::Updated;
        }

        if count < self.min_count() {
            return Offer::Rejected;
        }

        let previous = std::mem::replace(
            &mut self.heap[0],
            Candidate {
                fingerprint,
                count,
                item: item.to_vec(),
            },
        );
        self.sift_down(0);

        let evicted = (previous.count > 0).then_some(previous);
        Offer::Admitted { evicted }
    }

    /// Claimed slots sorted by count descending; ties keep heap order.
    pub(crate) fn sorted(&self) -> Vec<&Candidate> {
        let mut items: Vec<_> = self.heap.iter().filter(|c| c.count > 0).collect();
        items.sort_by(|a, b| b.count.cmp(&a.count));
        items
    }

    // Binary heap helper methods using Eytzinger layout (0-based indexing)
    fn parent(i: usize) -> usize { (i - 1) >> 1 }
    fn left(i: usize) -> usize { 2 * i + 1 }
    fn right(i: usize) -> usize { 2 * i + 2 }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = Self::parent(pos);
            if self.heap[parent].count > self.heap[pos].count {
                self.heap.swap(parent, pos);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        loop {
            let mut smallest = pos;
            let left = Self::left(pos);
            let right = Self::right(pos);

            if left < self.heap.len() && self.heap[left].count < self.heap[smallest].count {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right].count < self.heap[smallest].count {
                smallest = right;
            }

            if smallest == pos {
                break;
            }

            self.heap.swap(pos, smallest);
            pos = smallest;
        }
    }

    #[cfg(test)]
    fn assert_heap(&self) {
        for i in 1..self.heap.len() {
            let parent = Self::parent(i);
            assert!(
                self.heap[parent].count <= self.heap[i].count,
                "Heap property violated: parent count {} at index {} is greater than child count {} at index {}",
                self.heap[parent].count, parent, self.heap[i].count, i
            );
        }
    }
}
