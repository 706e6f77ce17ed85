use std::fmt;

use crate::typedef::{PageNumber, ProcessId};

/// Identity of a resident page: the owning process and its virtual page number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageKey {
    pub process: ProcessId,
    pub page: PageNumber,
}

impl PageKey {
    pub fn new(process: ProcessId, page: PageNumber) -> Self {
        Self { process, page }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {} (PID {})", self.page, self.process)
    }
}

/// One physical memory slot.
///
/// A frame without an occupant is free; its flags and load sequence carry no
/// meaning until the next install overwrites all of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    occupant: Option<PageKey>,
    referenced: bool,
    dirty: bool,
    load_sequence: u64,
}

impl Frame {
    /// Creates an unoccupied frame.
    pub(crate) fn new() -> Self {
        Self {
            occupant: None,
            referenced: false,
            dirty: false,
            load_sequence: 0,
        }
    }

    pub fn occupant(&self) -> Option<PageKey> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// True if the frame is occupied by exactly this process/page pair.
    pub fn holds(&self, key: PageKey) -> bool {
        self.occupant == Some(key)
    }

    pub fn is_referenced(&self) -> bool {
        self.referenced
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn load_sequence(&self) -> u64 {
        self.load_sequence
    }

    pub(crate) fn set_referenced(&mut self, referenced: bool) {
        self.referenced = referenced;
    }

    pub(crate) fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Overwrites every field with a freshly loaded page.
    pub(crate) fn load(&mut self, key: PageKey, dirty: bool, load_sequence: u64) {
        self.occupant = Some(key);
        self.dirty = dirty;
        self.referenced = true;
        self.load_sequence = load_sequence;
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
