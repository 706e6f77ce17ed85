use std::num::NonZeroU64;

use log::{debug, trace};

use crate::config::SimulationConfig;
use crate::frame::PageKey;
use crate::frame_table::{Allocation, FrameTable};
use crate::replacer::{PolicyKind, ReplacementPolicy, Replacer};
use crate::trace::{AccessRecord, Operation};
use crate::typedef::{FrameId, PageNumber, ProcessId, VirtualAddress};

/// A translated access, as reported back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Access {
    pub process: ProcessId,
    pub address: VirtualAddress,
    pub page: PageNumber,
    pub offset: u64,
    pub operation: Operation,
}

/// Outcome of a single access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessResult {
    /// The page was already resident in `frame`.
    Hit { access: Access, frame: FrameId },
    /// The page was loaded into a frame that had never been used.
    FaultIntoFree { access: Access, frame: FrameId },
    /// Memory was full; `evicted` lost `frame` to the faulting page.
    FaultWithEviction {
        access: Access,
        frame: FrameId,
        evicted: PageKey,
        wrote_back: bool,
    },
}

impl AccessResult {
    pub fn access(&self) -> &Access {
        match self {
            AccessResult::Hit { access, .. }
            | AccessResult::FaultIntoFree { access, .. }
            | AccessResult::FaultWithEviction { access, .. } => access,
        }
    }

    pub fn frame(&self) -> FrameId {
        match *self {
            AccessResult::Hit { frame, .. }
            | AccessResult::FaultIntoFree { frame, .. }
            | AccessResult::FaultWithEviction { frame, .. } => frame,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, AccessResult::Hit { .. })
    }

    pub fn evicted(&self) -> Option<PageKey> {
        match *self {
            AccessResult::FaultWithEviction { evicted, .. } => Some(evicted),
            _ => None,
        }
    }
}

/// Running counters. `hits + faults == accesses` after every access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub accesses: u64,
    pub hits: u64,
    pub faults: u64,
    pub writebacks: u64,
}

/// End-of-run report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub policy: PolicyKind,
    pub total_accesses: u64,
    pub total_faults: u64,
    pub total_hits: u64,
    pub total_writebacks: u64,
}

impl RunSummary {
    /// Fraction of accesses that hit, 0.0 for an empty trace.
    pub fn hit_ratio(&self) -> f64 {
        if self.total_accesses == 0 {
            return 0.0;
        }
        self.total_hits as f64 / self.total_accesses as f64
    }
}

/// Drives accesses one at a time against a fixed frame table.
#[derive(Debug)]
pub struct PagingEngine {
    frames: FrameTable,
    page_size: NonZeroU64,
    policy: ReplacementPolicy,
    logical_clock: u64,
    stats: RunStats,
}

impl PagingEngine {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            frames: FrameTable::new(config.num_frames),
            page_size: config.page_size,
            policy: ReplacementPolicy::new(config.policy),
            logical_clock: 0,
            stats: RunStats::default(),
        }
    }

    /// Splits a virtual address into page number and offset.
    pub fn translate(&self, address: VirtualAddress) -> (PageNumber, u64) {
        let page_size = self.page_size.get();
        (address / page_size, address % page_size)
    }

    pub fn process_record(&mut self, record: &AccessRecord) -> AccessResult {
        self.process_access(record.process, record.address, record.operation)
    }

    pub fn process_access(
        &mut self,
        process: ProcessId,
        address: VirtualAddress,
        operation: Operation,
    ) -> AccessResult {
        let (page, offset) = self.translate(address);
        let access = Access {
            process,
            address,
            page,
            offset,
            operation,
        };
        let write = operation.is_write();

        self.logical_clock += 1;
        self.stats.accesses += 1;

        if let Some(frame) = self.frames.find_resident(process, page) {
            self.stats.hits += 1;
            self.frames.mark_referenced(frame, write);
            trace!("hit: pid {process} page {page} in frame {frame}");
            return AccessResult::Hit { access, frame };
        }

        self.stats.faults += 1;

        let frame = match self.frames.allocate() {
            Allocation::Free(frame) => frame,
            Allocation::Full(mut full) => self.policy.select_victim(&mut full),
        };

        let install = self
            .frames
            .install(frame, process, page, write, self.logical_clock);
        if install.wrote_back {
            self.stats.writebacks += 1;
        }

        match install.replaced {
            None => {
                trace!("fault: pid {process} page {page} into free frame {frame}");
                AccessResult::FaultIntoFree { access, frame }
            }
            Some(evicted) => {
                debug!(
                    "{} evicted {} from frame {frame} for pid {process} page {page}{}",
                    self.policy.kind(),
                    evicted,
                    if install.wrote_back { " (write-back)" } else { "" }
                );
                AccessResult::FaultWithEviction {
                    access,
                    frame,
                    evicted,
                    wrote_back: install.wrote_back,
                }
            }
        }
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            policy: self.policy.kind(),
            total_accesses: self.stats.accesses,
            total_faults: self.stats.faults,
            total_hits: self.stats.hits,
            total_writebacks: self.stats.writebacks,
        }
    }

    pub fn frames(&self) -> &FrameTable {
        &self.frames
    }
}
