//! Bounded best-k candidate set

/// The `k` smallest `(distance², seq)` keys seen so far, ascending.
///
/// `seq` is the point's insertion position, so equal distances resolve to
/// the earlier point.
#[derive(Debug)]
pub(crate) struct BestK {
    k: usize,
    entries: Vec<(f64, usize)>,
}

impl BestK {
    pub(crate) fn new(k: usize) -> Self {
        Self {
            k,
            entries: Vec::with_capacity(k.saturating_add(1).min(1024)),
        }
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.entries.len() >= self.k
    }

    /// The k-th best distance², once k candidates have been seen.
    #[inline]
    pub(crate) fn worst(&self) -> Option<f64> {
        if self.is_full() {
            self.entries.last().map(|&(d, _)| d)
        } else {
            None
        }
    }

    /// Whether a region at `bound` distance² could still hold a candidate.
    ///
    /// Equal distances are admitted so an earlier point on the far side can
    /// still win its tie.
    #[inline]
    pub(crate) fn admits(&self, bound: f64) -> bool {
        self.worst().map_or(true, |worst| bound <= worst)
    }

    pub(crate) fn offer(&mut self, distance_sq: f64, seq: usize) {
        if self.k == 0 {
            return;
        }
        let key = (distance_sq, seq);
        if self.is_full() && self.entries.last().is_some_and(|&last| key >= last) {
            return;
        }
        let pos = self.entries.partition_point(|&entry| entry < key);
        self.entries.insert(pos, key);
        self.entries.truncate(self.k);
    }

    pub(crate) fn into_sorted(self) -> Vec<(f64, usize)> {
        self.entries
    }
}
