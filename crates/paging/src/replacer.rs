mod clock_replacer;
mod fifo_replacer;

use std::fmt;
use std::str::FromStr;

use pagesim_error::{errinput, Error};

use crate::frame_table::FullFrameTable;
use crate::typedef::FrameId;

pub use clock_replacer::ClockReplacer;
pub use fifo_replacer::FifoReplacer;

pub trait Replacer {
    /// Chooses the frame whose page gets evicted. Only callable on a table
    /// with every frame occupied.
    fn select_victim(&mut self, frames: &mut FullFrameTable<'_>) -> FrameId;
}

/// The eviction policies the simulator knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyKind {
    Fifo,
    Clock,
}

impl PolicyKind {
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Clock => "clock",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("fifo") {
            Ok(PolicyKind::Fifo)
        } else if s.eq_ignore_ascii_case("clock") {
            Ok(PolicyKind::Clock)
        } else {
            errinput!("unknown replacement policy {s:?} (use fifo or clock)")
        }
    }
}

/// The configured replacer for a run. There are exactly two strategies, so
/// this dispatches with a match instead of a boxed trait object.
#[derive(Debug)]
pub enum ReplacementPolicy {
    Fifo(FifoReplacer),
    Clock(ClockReplacer),
}

impl ReplacementPolicy {
    pub fn new(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::Fifo => ReplacementPolicy::Fifo(FifoReplacer::new()),
            PolicyKind::Clock => ReplacementPolicy::Clock(ClockReplacer::new()),
        }
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            ReplacementPolicy::Fifo(_) => PolicyKind::Fifo,
            ReplacementPolicy::Clock(_) => PolicyKind::Clock,
        }
    }
}

impl Replacer for ReplacementPolicy {
    fn select_victim(&mut self, frames: &mut FullFrameTable<'_>) -> FrameId {
        match self {
            ReplacementPolicy::Fifo(fifo) => fifo.select_victim(frames),
            ReplacementPolicy::Clock(clock) => clock.select_victim(frames),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names_parse_case_insensitively() {
        for name in ["fifo", "FIFO", "Fifo", "fIfO"] {
            assert_eq!(name.parse::<PolicyKind>(), Ok(PolicyKind::Fifo));
        }
        for name in ["clock", "CLOCK", "Clock"] {
            assert_eq!(name.parse::<PolicyKind>(), Ok(PolicyKind::Clock));
        }
    }

    #[test]
    fn test_unknown_policy_is_input_error() {
        for name in ["lru", "", "fifo ", "opt"] {
            assert!(matches!(
                name.parse::<PolicyKind>(),
                Err(Error::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_policy_kind_round_trips_through_name() {
        assert_eq!(PolicyKind::Fifo.to_string(), "fifo");
        assert_eq!(PolicyKind::Clock.to_string(), "clock");
        assert_eq!(ReplacementPolicy::new(PolicyKind::Clock).kind(), PolicyKind::Clock);
        assert_eq!(ReplacementPolicy::new(PolicyKind::Fifo).kind(), PolicyKind::Fifo);
    }
}
