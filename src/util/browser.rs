use anyhow::{bail, Result};
use tokio::process::Command;
use which::which;

use crate::errors::GlopenError;

#[cfg(target_os = "macos")]
pub const OPENER: &str = "open";
#[cfg(target_os = "windows")]
pub const OPENER: &str = "explorer";
#[cfg(all(unix, not(target_os = "macos")))]
pub const OPENER: &str = "xdg-open";

/// Whether the platform URL opener exists on PATH. Checked fresh on every
/// run; the environment can change between runs.
pub fn opener_available() -> bool {
    probe(OPENER)
}

fn probe(name: &str) -> bool {
    which(name).is_ok()
}

/// Spawns `<opener> <url>` and waits for it to finish. A non-zero exit does
/// not mean the opener is missing, only that this launch failed.
pub async fn open_url(url: &str) -> Result<()> {
    let status = Command::new(OPENER).arg(url).status().await?;
    if !status.success() {
        bail!(GlopenError::LaunchFailed(OPENER.to_string(), status));
    }
    Ok(())
}
