//! Launch the platform's default handler for the finished report.

use crate::Result;

use anyhow::{Context, anyhow};
use std::path::Path;
use std::process::{Command, Stdio};
use url::Url;

/// Build a percent-encoded `file://` URL for an absolute path.
pub fn file_url(abs_path: &Path) -> Result<Url> {
    Url::from_file_path(abs_path)
        .map_err(|()| anyhow!("{} is not an absolute path", abs_path.display()))
}

fn opener_command(url: &Url) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url.as_str());
        cmd
    } else if cfg!(target_os = "windows") {
        // Hand the URL to the shell directly; `cmd /C start` would interpret
        // `&`, `^` and `|` in the path.
        let mut cmd = Command::new("rundll32");
        cmd.arg("url.dll,FileProtocolHandler").arg(url.as_str());
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url.as_str());
        cmd
    }
}

/// Ask the desktop to open `url`. Only the spawn is checked.
pub fn open_in_browser(url: &Url) -> Result<()> {
    let mut cmd = opener_command(url);
    let program = cmd.get_program().to_string_lossy().into_owned();
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("launch {} for {}", program, url))?;
    Ok(())
}
