//! Page-replacement simulator core: a fixed frame table, FIFO and Clock
//! replacers, and the engine that resolves one traced access at a time.

pub mod config;
pub mod engine;
pub mod frame;
pub mod frame_table;
pub mod replacer;
pub mod report;
pub mod trace;
pub mod typedef;

pub use config::SimulationConfig;
pub use engine::{Access, AccessResult, PagingEngine, RunStats, RunSummary};
pub use replacer::PolicyKind;
pub use trace::{AccessRecord, Operation, TraceReader};

pub type Result<T> = std::result::Result<T, pagesim_error::Error>;
