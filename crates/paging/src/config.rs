use std::num::{NonZeroU64, NonZeroUsize};

use pagesim_error::errinput;

use crate::replacer::PolicyKind;
use crate::Result;

/// Startup parameters of a run. Immutable once the engine is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub num_frames: NonZeroUsize,
    pub page_size: NonZeroU64,
    pub policy: PolicyKind,
}

impl SimulationConfig {
    /// Validates raw operator input. Counts are signed so that negative values
    /// get the same diagnostic as zero.
    pub fn new(num_frames: i64, page_size: i64, policy: &str) -> Result<Self> {
        let num_frames = usize::try_from(num_frames)
            .ok()
            .and_then(NonZeroUsize::new);
        let Some(num_frames) = num_frames else {
            return errinput!("number of frames must be > 0");
        };

        let page_size = u64::try_from(page_size).ok().and_then(NonZeroU64::new);
        let Some(page_size) = page_size else {
            return errinput!("page size must be > 0");
        };

        Ok(Self {
            num_frames,
            page_size,
            policy: policy.parse()?,
        })
    }
}
