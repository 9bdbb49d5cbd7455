pub mod cli;
pub mod input;
pub mod logging;
pub mod seed;

pub const APP_NAME: &str = "Maze Chase";

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}
