/// Immutable ascending bucket list used to discretize client-requested
/// numeric values.
///
/// Snapping arbitrary requests to a fixed table bounds the number of distinct
/// variants a source image can produce downstream. Tables are built once from
/// config at startup and never mutated; config validation guarantees they are
/// non-empty and strictly ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketTable(Vec<u32>);

impl BucketTable {
    pub fn new(entries: Vec<u32>) -> Self {
        debug_assert!(!entries.is_empty());
        debug_assert!(entries.windows(2).all(|pair| pair[0] < pair[1]));
        BucketTable(entries)
    }

    pub fn entries(&self) -> &[u32] {
        &self.0
    }

    pub fn contains(&self, value: u32) -> bool {
        self.0.binary_search(&value).is_ok()
    }

    /// Snap to the entry with the smallest absolute distance.
    ///
    /// The scan runs in ascending order and only a strictly smaller distance
    /// replaces the current best, so an exact tie keeps the lower bucket.
    pub fn nearest(&self, value: u32) -> u32 {
        let mut best = self.0[0];
        for &candidate in &self.0[1..] {
            if candidate.abs_diff(value) < best.abs_diff(value) {
                best = candidate;
            }
        }
        best
    }
}
