use std::process::Command;

use anyhow::{Result, bail};

/// Hand a URL to the platform's default browser. Only http(s) schemes are
/// accepted; everything this app opens is a web search page.
pub fn open_url(url: &str) -> Result<()> {
    if !url.starts_with("https://") && !url.starts_with("http://") {
        bail!("refusing to open non-http url: {url}");
    }

    tracing::info!(%url, "opening browser");

    #[cfg(target_os = "windows")]
    Command::new("cmd").args(["/C", "start", "", url]).spawn()?;

    #[cfg(target_os = "macos")]
    Command::new("open").arg(url).spawn()?;

    #[cfg(all(unix, not(target_os = "macos")))]
    Command::new("xdg-open").arg(url).spawn()?;

    Ok(())
}
