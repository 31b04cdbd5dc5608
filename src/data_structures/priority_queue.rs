use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue of `(cost, vertex)` pairs for shortest path search
///
/// There is no decrease-key: pushing a vertex that is already queued adds a
/// second entry, and the caller discards the stale one when it is popped.
/// Entries with equal cost come out in ascending vertex order.
#[derive(Debug)]
pub struct MinQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> MinQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Queues `vertex` with the given cost
    pub fn push(&mut self, vertex: V, cost: P) {
        self.heap.push(Reverse((cost, vertex)));
    }

    /// Removes the entry with the lowest cost
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((cost, vertex))| (vertex, cost))
    }
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
