use std::num::NonZeroUsize;

use crate::frame::{Frame, PageKey};
use crate::typedef::{FrameId, PageNumber, ProcessId};

/// Fixed pool of physical frames. Frames are only ever reassigned, never
/// vacated, so once every frame is occupied the table stays full.
#[derive(Debug)]
pub struct FrameTable {
    frames: Vec<Frame>,
}

/// What an install overwrote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Install {
    /// The page that occupied the frame before, if any.
    pub replaced: Option<PageKey>,
    /// The replaced page was dirty and had to be written back.
    pub wrote_back: bool,
}

/// Result of asking the table for somewhere to put a faulting page.
pub enum Allocation<'a> {
    /// Lowest-indexed free frame.
    Free(FrameId),
    /// No free frame exists; a victim has to be chosen.
    Full(FullFrameTable<'a>),
}

/// Mutable view of a table that has no free frame left. Only
/// [`FrameTable::allocate`] hands these out, which is what keeps the
/// replacers from ever running against a table with free frames.
pub struct FullFrameTable<'a> {
    table: &'a mut FrameTable,
}

impl FrameTable {
    pub fn new(num_frames: NonZeroUsize) -> Self {
        let mut frames = Vec::with_capacity(num_frames.get());
        frames.resize_with(num_frames.get(), Frame::new);
        Self { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false: a table holds at least one frame.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, frame_id: FrameId) -> &Frame {
        &self.frames[frame_id]
    }

    pub fn iter(&self) -> impl Iterator<Item = (FrameId, &Frame)> {
        self.frames.iter().enumerate()
    }

    /// First occupied frame holding `page` of `process`.
    pub fn find_resident(&self, process: ProcessId, page: PageNumber) -> Option<FrameId> {
        let key = PageKey::new(process, page);
        self.frames.iter().position(|frame| frame.holds(key))
    }

    /// First unoccupied frame in index order.
    pub fn find_free(&self) -> Option<FrameId> {
        self.frames.iter().position(|frame| !frame.is_occupied())
    }

    pub fn allocate(&mut self) -> Allocation<'_> {
        match self.find_free() {
            Some(frame_id) => Allocation::Free(frame_id),
            None => Allocation::Full(FullFrameTable { table: self }),
        }
    }

    /// Loads `page` of `process` into the frame, replacing whatever was there.
    pub fn install(
        &mut self,
        frame_id: FrameId,
        process: ProcessId,
        page: PageNumber,
        write: bool,
        timestamp: u64,
    ) -> Install {
        let frame = &mut self.frames[frame_id];
        let replaced = frame.occupant();
        let wrote_back = replaced.is_some() && frame.is_dirty();

        frame.load(PageKey::new(process, page), write, timestamp);

        Install {
            replaced,
            wrote_back,
        }
    }

    /// Records a hit on the frame.
    pub fn mark_referenced(&mut self, frame_id: FrameId, write: bool) {
        let frame = &mut self.frames[frame_id];
        frame.set_referenced(true);
        if write {
            frame.set_dirty(true);
        }
    }
}

impl FullFrameTable<'_> {
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn frame(&self, frame_id: FrameId) -> &Frame {
        self.table.frame(frame_id)
    }

    /// Second chance: drop the reference mark without evicting.
    pub(crate) fn clear_reference(&mut self, frame_id: FrameId) {
        self.table.frames[frame_id].set_referenced(false);
    }
}
