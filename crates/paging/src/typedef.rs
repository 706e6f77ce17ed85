pub type FrameId = usize;
pub type ProcessId = i32;
pub type PageNumber = u64;
pub type VirtualAddress = u64;
