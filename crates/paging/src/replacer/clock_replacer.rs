use crate::frame_table::FullFrameTable;
use crate::typedef::FrameId;

use super::Replacer;

/// Second-chance replacement. The hand keeps its position between calls.
#[derive(Debug, Default)]
pub struct ClockReplacer {
    hand: FrameId,
}

impl ClockReplacer {
    pub fn new() -> Self {
        ClockReplacer { hand: 0 }
    }

    pub fn hand(&self) -> FrameId {
        self.hand
    }

    fn advance(&mut self, len: usize) -> FrameId {
        let current = self.hand;
        self.hand = (self.hand + 1) % len;
        current
    }
}

impl Replacer for ClockReplacer {
    fn select_victim(&mut self, frames: &mut FullFrameTable<'_>) -> FrameId {
        let len = frames.len();

        for _ in 0..len {
            let frame_id = self.advance(len);
            if !frames.frame(frame_id).is_referenced() {
                return frame_id;
            }
            frames.clear_reference(frame_id);
        }

        // One sweep cleared every mark and the hand is back at its start, so
        // the frame under it is the first unreferenced one of the next sweep.
        self.advance(len)
    }
}
