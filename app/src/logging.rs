//! Tracing subscriber setup. Logs go to stderr so they never interleave with
//! the rendered list on stdout.

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

pub fn init(directive: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(directive)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
