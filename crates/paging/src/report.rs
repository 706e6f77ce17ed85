//! Human-readable rendering of per-access results and the end-of-run summary.

use std::fmt;

use crate::engine::{Access, AccessResult, RunSummary};

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Access: PID {}, Address {} (Page {}, Offset {})",
            self.process, self.address, self.page, self.offset
        )
    }
}

impl fmt::Display for AccessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessResult::Hit { access, frame } => write!(
                f,
                "{access} -> HIT: Page {} (PID {}) already in Frame {frame}",
                access.page, access.process
            ),
            AccessResult::FaultIntoFree { access, frame } => write!(
                f,
                "{access} -> PAGE FAULT -> Page {} (PID {}) allocated in free Frame {frame}",
                access.page, access.process
            ),
            AccessResult::FaultWithEviction {
                access,
                frame,
                evicted,
                ..
            } => write!(
                f,
                "{access} -> PAGE FAULT -> Memory full. {evicted} (Frame {frame}) will be evicted. \
                 -> Page {} (PID {}) allocated in Frame {frame}",
                access.page, access.process
            ),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Simulation finished (Algorithm: {})", self.policy)?;
        writeln!(f, "Total accesses: {}", self.total_accesses)?;
        writeln!(f, "Total page faults: {}", self.total_faults)?;
        writeln!(f, "Total hits: {}", self.total_hits)?;
        writeln!(f, "Total write-backs: {}", self.total_writebacks)?;
        write!(f, "Hit ratio: {:.2}%", self.hit_ratio() * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SimulationConfig;
    use crate::engine::PagingEngine;
    use crate::trace::Operation::{Read, Write};

    fn engine(num_frames: i64, page_size: i64, policy: &str) -> PagingEngine {
        PagingEngine::new(&SimulationConfig::new(num_frames, page_size, policy).unwrap())
    }

    #[test]
    fn test_render_access_lines() {
        let mut engine = engine(1, 100, "fifo");

        let line = engine.process_access(1, 150, Read).to_string();
        assert_eq!(
            line,
            "Access: PID 1, Address 150 (Page 1, Offset 50) -> PAGE FAULT -> Page 1 (PID 1) allocated in free Frame 0"
        );

        let line = engine.process_access(1, 199, Write).to_string();
        assert_eq!(
            line,
            "Access: PID 1, Address 199 (Page 1, Offset 99) -> HIT: Page 1 (PID 1) already in Frame 0"
        );

        let line = engine.process_access(2, 5, Read).to_string();
        assert_eq!(
            line,
            "Access: PID 2, Address 5 (Page 0, Offset 5) -> PAGE FAULT -> Memory full. \
             Page 1 (PID 1) (Frame 0) will be evicted. -> Page 0 (PID 2) allocated in Frame 0"
        );
    }

    #[test]
    fn test_render_empty_summary() {
        let engine = engine(4, 4096, "fifo");
        let summary = engine.summary().to_string();
        assert!(summary.starts_with("--- Simulation finished (Algorithm: fifo)\n"));
        assert!(summary.ends_with("Hit ratio: 0.00%"));
    }

    #[test]
    fn test_render_summary() {
        let mut engine = engine(1, 10, "CLOCK");
        engine.process_access(1, 0, Write);
        engine.process_access(1, 3, Read);
        engine.process_access(1, 10, Read);

        assert_eq!(
            engine.summary().to_string(),
            "--- Simulation finished (Algorithm: clock)\n\
             Total accesses: 3\n\
             Total page faults: 2\n\
             Total hits: 1\n\
             Total write-backs: 1\n\
             Hit ratio: 33.33%"
        );
    }
}
