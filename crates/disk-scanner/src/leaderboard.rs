use std::path::PathBuf;

/// A regular file as seen by the walk, before its path is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub size: u64,
    pub modified: Option<u64>,
}

/// Bounded set of the largest files seen so far, size descending.
///
/// Every slot starts at size 0 and a newcomer only displaces what it strictly
/// exceeds, so empty files never make the board and among equal sizes the
/// earliest offered wins. With capacity 1 this is a plain running maximum.
#[derive(Debug)]
pub struct Leaderboard {
    capacity: usize,
    entries: Vec<Candidate>,
}

impl Leaderboard {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Offers `candidate`; returns whether it made the board.
    pub fn offer(&mut self, candidate: Candidate) -> bool {
        if self.capacity == 0 || candidate.size == 0 {
            return false;
        }
        if self.entries.len() == self.capacity {
            if let Some(smallest) = self.entries.last() {
                if candidate.size <= smallest.size {
                    return false;
                }
            }
        }
        let pos = self.entries.partition_point(|e| e.size >= candidate.size);
        self.entries.insert(pos, candidate);
        self.entries.truncate(self.capacity);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_sorted_vec(self) -> Vec<Candidate> {
        self.entries
    }
}
