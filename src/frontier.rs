use fxhash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct FrontierEntry<P> {
    priority: P,
    sequence: u64,
    cell: usize,
}

impl<P: PartialEq> Eq for FrontierEntry<P> {}

impl<P: PartialEq> PartialEq for FrontierEntry<P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority) && self.sequence == other.sequence
    }
}

impl<P: Ord> PartialOrd for FrontierEntry<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Ord> Ord for FrontierEntry<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest priority, and among equal priorities the
        // smallest sequence number (FIFO).
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority queue of arena cell indices.
///
/// Every push is stamped with a sequence number that increases over the lifetime of the frontier,
/// which makes popping deterministic for equal priorities. Membership is tracked separately so
/// [contains](Self::contains) never scans the heap. Pushing a cell that is still pending replaces
/// its entry; the older one is dropped when it surfaces.
pub struct PriorityFrontier<P = i32> {
    heap: BinaryHeap<FrontierEntry<P>>,
    /// Sequence number of the live entry of every pending cell.
    pending: FxHashMap<usize, u64>,
    next_sequence: u64,
}

impl<P: Ord> Default for PriorityFrontier<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord> PriorityFrontier<P> {
    pub fn new() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            pending: FxHashMap::default(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, priority: P, cell: usize) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.pending.insert(cell, sequence);
        self.heap.push(FrontierEntry {
            priority,
            sequence,
            cell,
        });
    }

    /// Removes and returns the pending cell with the smallest `(priority, sequence)`.
    pub fn pop_min(&mut self) -> Option<(P, usize)> {
        while let Some(FrontierEntry {
            priority,
            sequence,
            cell,
        }) = self.heap.pop()
        {
            if self.pending.get(&cell) == Some(&sequence) {
                self.pending.remove(&cell);
                return Some((priority, cell));
            }
        }
        None
    }

    pub fn contains(&self, cell: usize) -> bool {
        self.pending.contains_key(&cell)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of pending cells, not counting replaced entries.
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
