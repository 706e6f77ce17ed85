use crate::frame_table::FullFrameTable;
use crate::typedef::FrameId;

use super::Replacer;

/// Evicts the page that has been resident the longest.
#[derive(Debug, Default)]
pub struct FifoReplacer;

impl FifoReplacer {
    pub fn new() -> Self {
        FifoReplacer
    }
}

impl Replacer for FifoReplacer {
    /// Smallest load sequence wins. Sequences come from a strictly increasing
    /// clock, so there are no ties.
    fn select_victim(&mut self, frames: &mut FullFrameTable<'_>) -> FrameId {
        (0..frames.len())
            .min_by_key(|&frame_id| frames.frame(frame_id).load_sequence())
            .unwrap_or(0) // a full table has at least one frame
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::frame_table::{Allocation, FrameTable};

    fn full_table(load_order: &[(usize, u64)]) -> FrameTable {
        let mut table = FrameTable::new(NonZeroUsize::new(load_order.len()).unwrap());
        for &(frame_id, timestamp) in load_order {
            table.install(frame_id, 1, frame_id as u64, false, timestamp);
        }
        table
    }

    fn evict(replacer: &mut FifoReplacer, table: &mut FrameTable) -> FrameId {
        match table.allocate() {
            Allocation::Full(mut full) => replacer.select_victim(&mut full),
            Allocation::Free(frame_id) => panic!("table has free frame {frame_id}"),
        }
    }

    #[test]
    fn test_evicts_oldest_load() {
        let mut replacer = FifoReplacer::new();
        let mut table = full_table(&[(0, 4), (1, 2), (2, 9)]);
        assert_eq!(evict(&mut replacer, &mut table), 1);
    }

    #[test]
    fn test_reload_moves_frame_to_back() {
        let mut replacer = FifoReplacer::new();
        let mut table = full_table(&[(0, 1), (1, 2), (2, 3)]);

        assert_eq!(evict(&mut replacer, &mut table), 0);
        table.install(0, 1, 7, false, 4);

        assert_eq!(evict(&mut replacer, &mut table), 1);
        table.install(1, 1, 8, false, 5);

        assert_eq!(evict(&mut replacer, &mut table), 2);
    }

    #[test]
    fn test_hits_do_not_change_order() {
        let mut replacer = FifoReplacer::new();
        let mut table = full_table(&[(0, 1), (1, 2)]);
        table.mark_referenced(0, true);
        assert_eq!(evict(&mut replacer, &mut table), 0);
    }

    #[test]
    fn test_oldest_in_last_frame() {
        let mut replacer = FifoReplacer::new();
        let mut table = full_table(&[(0, 8), (1, 6), (2, 3)]);
        assert_eq!(evict(&mut replacer, &mut table), 2);
    }

    #[test]
    fn test_single_frame() {
        let mut replacer = FifoReplacer::new();
        let mut table = full_table(&[(0, 1)]);
        assert_eq!(evict(&mut replacer, &mut table), 0);
    }
}
