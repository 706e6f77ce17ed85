use std::path::PathBuf;

use clap::Parser;

/// Simulates FIFO or Clock page replacement over a memory access trace.
///
/// Each trace line is `<pid> <address> <R|W>`.
#[derive(Debug, Parser)]
#[command(name = "pagesim", version, about)]
pub struct Cli {
    /// Number of physical frames (> 0)
    #[arg(allow_negative_numbers = true)]
    pub num_frames: i64,

    /// Page size in bytes (> 0)
    #[arg(allow_negative_numbers = true)]
    pub page_size: i64,

    /// Replacement policy: fifo or clock (case-insensitive)
    pub policy: String,

    /// Trace file to replay
    pub trace_file: PathBuf,

    /// Only print the summary, not one line per access
    #[arg(short, long)]
    pub quiet: bool,

    /// Log evictions and write-backs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_args() {
        let cli = Cli::try_parse_from(["pagesim", "3", "100", "fifo", "trace.txt"]).unwrap();
        assert_eq!(cli.num_frames, 3);
        assert_eq!(cli.page_size, 100);
        assert_eq!(cli.policy, "fifo");
        assert_eq!(cli.trace_file, PathBuf::from("trace.txt"));
        assert!(!cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_negative_counts_reach_validation() {
        let cli = Cli::try_parse_from(["pagesim", "-2", "100", "clock", "t"]).unwrap();
        assert_eq!(cli.num_frames, -2);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["pagesim", "-q", "-v", "1", "1", "clock", "t"]).unwrap();
        assert!(cli.quiet);
        assert!(cli.verbose);
    }

    #[test]
    fn test_missing_args_rejected() {
        assert!(Cli::try_parse_from(["pagesim", "3", "100", "fifo"]).is_err());
    }
}
