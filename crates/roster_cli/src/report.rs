//! Success reporting and process resource observation.
//!
//! # Responsibility
//! - Format the confirmation message after a successful create.
//! - Collect elapsed time and peak RSS for verbose output.
//!
//! # Invariants
//! - Reporting is purely observational and never changes command behavior.

use roster_core::User;
use std::io::{self, Write};
use std::time::Duration;

/// Writes the success confirmation, with timing and memory in verbose mode.
///
/// The peak-memory line is omitted on platforms where it cannot be read.
pub fn report_created<W: Write>(
    output: &mut W,
    user: &User,
    elapsed: Duration,
    verbose: bool,
) -> io::Result<()> {
    writeln!(output, "Created user {}", user.full_name())?;

    if verbose {
        if let Some(id) = user.id {
            writeln!(output, "id: {id}")?;
        }
        writeln!(output, "elapsed: {} ms", elapsed.as_millis())?;
        if let Some(kib) = peak_rss_kib() {
            writeln!(output, "peak memory: {kib} KiB")?;
        }
    }

    Ok(())
}

/// Returns the process peak resident set size in KiB, where available.
///
/// Reads `VmHWM` from `/proc/self/status` on Linux; other platforms
/// report `None` and the caller skips the line.
#[cfg(target_os = "linux")]
pub fn peak_rss_kib() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    let line = status.lines().find(|line| line.starts_with("VmHWM:"))?;
    line.split_whitespace().nth(1)?.parse().ok()
}

#[cfg(not(target_os = "linux"))]
pub fn peak_rss_kib() -> Option<u64> {
    None
}
