//! History window - fixed-capacity FIFO of recent samples

use std::collections::{vec_deque, VecDeque};

use safe_core::{Sample, HISTORY_WINDOW};

/// Sliding window over the most recent samples, oldest first
#[derive(Clone, Debug)]
pub struct HistoryWindow {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl HistoryWindow {
    /// Create an empty window holding at most `capacity` samples.
    /// Storage grows on demand; only the default window is reserved up front.
    pub fn new(capacity: usize) -> Self {
        HistoryWindow {
            samples: VecDeque::with_capacity(capacity.min(HISTORY_WINDOW)),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest one if the window is full
    pub fn push(&mut self, sample: Sample) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent sample
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn to_vec(&self) -> Vec<Sample> {
        self.samples.iter().copied().collect()
    }
}

impl Default for HistoryWindow {
    fn default() -> Self {
        Self::new(HISTORY_WINDOW)
    }
}

impl<'a> IntoIterator for &'a HistoryWindow {
    type Item = &'a Sample;
    type IntoIter = vec_deque::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
