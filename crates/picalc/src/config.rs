//! Application configuration from CLI flags and environment.

use clap::Parser;

/// PiCalc-rs — arbitrary-precision π calculator (Chudnovsky series).
#[derive(Parser, Debug)]
#[command(name = "picalc", version, about)]
pub struct AppConfig {
    /// Significant digits of π to compute (read from stdin when omitted).
    #[arg(short, long, env = "PICALC_PRECISION")]
    pub precision: Option<u64>,

    /// Worker thread count; 1 selects the single-threaded path.
    #[arg(short, long, default_value = "1")]
    pub threads: usize,

    /// Cache recurrence steps across computations.
    #[arg(long)]
    pub memo: bool,

    /// Continuously emit results at increasing precision.
    #[arg(long)]
    pub stream: bool,

    /// Stop the stream after this many emissions (0 = unbounded).
    #[arg(long, default_value = "0")]
    pub limit: u64,

    /// Wait bound for a batch of workers (e.g. "30m", "90s").
    #[arg(long, default_value = "30m")]
    pub timeout: String,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the digits).
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the full digit string to a file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse the timeout flag into a Duration.
    #[must_use]
    pub fn timeout_duration(&self) -> std::time::Duration {
        parse_duration(&self.timeout).unwrap_or(picalc_core::DEFAULT_TIMEOUT)
    }
}

/// Parse a duration string like "30m", "1h", "90s".
fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(std::time::Duration::from_secs(n * 60))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(std::time::Duration::from_secs(n * 3600))
    } else if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(std::time::Duration::from_millis(n))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(std::time::Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(std::time::Duration::from_secs(n))
    }
}
