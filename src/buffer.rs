//! Ordered snapshot buffer with strict admission rules.
//!
//! [`SnapshotBuffer`] keeps admitted snapshots sorted by remote timestamp.
//! The first two entries form the active interpolation segment; admission
//! never mutates or duplicates that segment, so interpolation in progress is
//! never disturbed by late arrivals.

use smallvec::SmallVec;

use crate::snapshot::Snapshot;

/// Inline capacity before the buffer spills to the heap. Realistic jitter
/// keeps the buffer well under this.
const INLINE_SNAPSHOTS: usize = 8;

/// Snapshots ordered by strictly increasing remote timestamp.
#[derive(Debug, Clone)]
pub struct SnapshotBuffer<S: Snapshot> {
    entries: SmallVec<[S; INLINE_SNAPSHOTS]>,
}

impl<S: Snapshot> SnapshotBuffer<S> {
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Admit `snapshot` if it is new enough to be safe, rejecting it
    /// silently otherwise. Returns whether the snapshot was admitted.
    ///
    /// Admission rules:
    /// - empty buffer: always admit;
    /// - one resident: admit only if newer than the resident (never re-latch
    ///   to older data);
    /// - two or more residents: admit only if newer than the second entry,
    ///   so the active interpolation segment is never mutated or duplicated.
    ///
    /// Admitted snapshots land at their sorted position; a snapshot whose
    /// timestamp exactly matches an existing entry is rejected to keep keys
    /// strictly increasing.
    pub fn insert_if_new_enough(&mut self, snapshot: S) -> bool {
        let key = snapshot.remote_time();
        match self.entries.len() {
            0 => {
                self.entries.push(snapshot);
                true
            }
            1 => {
                if key > self.entries[0].remote_time() {
                    self.entries.push(snapshot);
                    true
                } else {
                    false
                }
            }
            _ => {
                if key <= self.entries[1].remote_time() {
                    return false;
                }
                match self
                    .entries
                    .binary_search_by(|e| e.remote_time().total_cmp(&key))
                {
                    Ok(_) => false,
                    Err(pos) => {
                        self.entries.insert(pos, snapshot);
                        true
                    }
                }
            }
        }
    }

    /// Remove and return the oldest snapshot.
    pub fn pop_front(&mut self) -> Option<S> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    /// Oldest snapshot, if any.
    pub fn first(&self) -> Option<&S> {
        self.entries.first()
    }

    /// Second-oldest snapshot, if any. Together with [`first`](Self::first)
    /// it forms the active interpolation segment.
    pub fn second(&self) -> Option<&S> {
        self.entries.get(1)
    }

    /// Newest snapshot, if any.
    pub fn last(&self) -> Option<&S> {
        self.entries.last()
    }

    /// Snapshot at `index`, oldest first.
    pub fn get(&self, index: usize) -> Option<&S> {
        self.entries.get(index)
    }

    /// All buffered snapshots, oldest first.
    pub fn as_slice(&self) -> &[S] {
        &self.entries
    }

    /// Iterate buffered snapshots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.entries.iter()
    }

    /// Number of buffered snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all buffered snapshots.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<S: Snapshot> Default for SnapshotBuffer<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Stamp {
        remote: f64,
        local: f64,
    }

    impl Stamp {
        fn at(remote: f64) -> Self {
            Self {
                remote,
                local: remote,
            }
        }
    }

    impl Snapshot for Stamp {
        fn remote_time(&self) -> f64 {
            self.remote
        }
        fn local_time(&self) -> f64 {
            self.local
        }
        fn interpolate(&self, _to: &Self, _t: f64) -> Self {
            self.clone()
        }
    }

    fn keys(buffer: &SnapshotBuffer<Stamp>) -> Vec<f64> {
        buffer.iter().map(|s| s.remote_time()).collect()
    }

    #[test]
    fn test_admits_into_empty_buffer() {
        let mut buffer = SnapshotBuffer::new();
        assert!(buffer.insert_if_new_enough(Stamp::at(1.0)));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_single_resident_rejects_older() {
        let mut buffer = SnapshotBuffer::new();
        buffer.insert_if_new_enough(Stamp::at(1.0));
        assert!(!buffer.insert_if_new_enough(Stamp::at(0.5)));
        assert_eq!(keys(&buffer), vec![1.0]);
    }

    #[test]
    fn test_rejects_at_or_before_second_entry() {
        let mut buffer = SnapshotBuffer::new();
        buffer.insert_if_new_enough(Stamp::at(0.0));
        buffer.insert_if_new_enough(Stamp::at(2.0));

        // Inside the active segment
        assert!(!buffer.insert_if_new_enough(Stamp::at(1.0)));
        // Duplicate of the second entry
        assert!(!buffer.insert_if_new_enough(Stamp::at(2.0)));
        assert_eq!(keys(&buffer), vec![0.0, 2.0]);
    }

    #[test]
    fn test_late_arrival_lands_sorted_after_segment() {
        let mut buffer = SnapshotBuffer::new();
        for t in [0.0, 1.0, 4.0, 5.0] {
            buffer.insert_if_new_enough(Stamp::at(t));
        }
        // Newer than the second entry but older than the tail: admitted
        // at its sorted position.
        assert!(buffer.insert_if_new_enough(Stamp::at(3.0)));
        assert_eq!(keys(&buffer), vec![0.0, 1.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_rejects_duplicate_of_tail_entry() {
        let mut buffer = SnapshotBuffer::new();
        for t in [0.0, 1.0, 4.0] {
            buffer.insert_if_new_enough(Stamp::at(t));
        }
        assert!(!buffer.insert_if_new_enough(Stamp::at(4.0)));
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_keys_stay_strictly_increasing_under_shuffled_input() {
        let mut buffer = SnapshotBuffer::new();
        for t in [3.0, 1.0, 4.0, 1.5, 9.0, 2.6, 5.0, 3.5, 9.0] {
            buffer.insert_if_new_enough(Stamp::at(t));
        }
        let ks = keys(&buffer);
        assert!(ks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_pop_front_advances_segment() {
        let mut buffer = SnapshotBuffer::new();
        for t in [0.0, 1.0, 2.0] {
            buffer.insert_if_new_enough(Stamp::at(t));
        }
        let popped = buffer.pop_front().unwrap();
        assert_eq!(popped.remote_time(), 0.0);
        assert_eq!(buffer.first().unwrap().remote_time(), 1.0);
        assert_eq!(buffer.second().unwrap().remote_time(), 2.0);
    }
}
