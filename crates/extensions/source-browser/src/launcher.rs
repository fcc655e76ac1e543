//! Ephemeral Chrome instances.
//!
//! Each scrape starts a fresh browser with its own profile and debug port
//! and tears it down afterwards, so a wedged renderer never survives into
//! the next check.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tempfile::TempDir;
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

use crate::cdp::{CdpClient, CdpError, PageSession};
use crate::error::BrowserError;

/// How long Chrome gets to open its debugging endpoint.
const STARTUP_TIMEOUT: Duration = Duration::from_secs(6);
const STARTUP_POLL: Duration = Duration::from_millis(200);
/// Grace period for a clean exit after `Browser.close`.
const EXIT_GRACE: Duration = Duration::from_secs(3);

/// Flags every instance is started with.
const BASE_ARGS: &[&str] = &[
    "--no-sandbox",
    "--disable-dev-shm-usage",
    "--disable-gpu",
    "--no-first-run",
    "--no-default-browser-check",
    "--disable-background-networking",
    "--disable-sync",
    "--disable-translate",
    "--metrics-recording-only",
    "--mute-audio",
];

/// Starts Chrome processes.
#[derive(Debug, Clone)]
pub struct BrowserLauncher {
    chrome_path: Option<PathBuf>,
    headless: bool,
}

impl BrowserLauncher {
    pub fn new(chrome_path: Option<PathBuf>, headless: bool) -> Self {
        Self {
            chrome_path,
            headless,
        }
    }

    /// Find Chrome executable path.
    pub fn find_chrome() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        let paths: &[&str] = &[
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "/Applications/Chromium.app/Contents/MacOS/Chromium",
        ];

        #[cfg(target_os = "linux")]
        let paths: &[&str] = &[
            "/usr/bin/chromium",
            "/usr/bin/chromium-browser",
            "/usr/bin/google-chrome",
            "/usr/bin/google-chrome-stable",
            "/snap/bin/chromium",
        ];

        #[cfg(target_os = "windows")]
        let paths: &[&str] = &[
            r"C:\Program Files\Google\Chrome\Application\chrome.exe",
            r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
        ];

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        let paths: &[&str] = &[];

        paths.iter().map(PathBuf::from).find(|p| p.exists())
    }

    /// Configured binary if it exists, else the first well-known install.
    pub fn resolve_chrome(&self) -> Result<PathBuf, BrowserError> {
        match self.chrome_path {
            Some(ref path) if path.exists() => Ok(path.clone()),
            Some(ref path) => {
                warn!("Configured Chrome path {} does not exist, searching", path.display());
                Self::find_chrome().ok_or(BrowserError::ChromeNotFound)
            }
            None => Self::find_chrome().ok_or(BrowserError::ChromeNotFound),
        }
    }

    /// Command-line flags for one instance.
    pub fn build_args(&self, port: u16, profile_dir: &Path) -> Vec<String> {
        let mut args: Vec<String> = BASE_ARGS.iter().map(|s| s.to_string()).collect();
        args.push(format!("--remote-debugging-port={}", port));
        args.push(format!("--user-data-dir={}", profile_dir.display()));
        if self.headless {
            args.push("--headless=new".to_string());
        }
        args.push("about:blank".to_string());
        args
    }

    /// Start a browser and connect to it.
    pub async fn launch(&self) -> Result<BrowserInstance, BrowserError> {
        let chrome_path = self.resolve_chrome()?;
        let profile =
            TempDir::with_prefix("feedrelay-chrome-").map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;
        let port = free_port().map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        let mut cmd = Command::new(&chrome_path);
        cmd.args(self.build_args(port, profile.path()))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let child = cmd
            .spawn()
            .map_err(|e| BrowserError::LaunchFailed(format!("{}: {}", chrome_path.display(), e)))?;
        debug!("Chrome launched with PID: {:?} on port {}", child.id(), port);

        let endpoint = format!("http://127.0.0.1:{}", port);
        wait_for_endpoint(&endpoint).await?;

        let client = CdpClient::connect(&endpoint).await?;
        info!("Browser started");

        Ok(BrowserInstance {
            client,
            child,
            _profile: profile,
        })
    }
}

/// Poll `/json/version` until Chrome answers.
async fn wait_for_endpoint(endpoint: &str) -> Result<(), BrowserError> {
    let http = reqwest::Client::new();
    let attempts = STARTUP_TIMEOUT.as_millis() / STARTUP_POLL.as_millis();

    for _ in 0..attempts {
        tokio::time::sleep(STARTUP_POLL).await;
        if CdpClient::browser_version(&http, endpoint).await.is_ok() {
            return Ok(());
        }
    }

    Err(BrowserError::StartupTimeout(STARTUP_TIMEOUT.as_millis() as u64))
}

/// Ask the OS for an unused local port.
fn free_port() -> std::io::Result<u16> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}

/// A running browser. Dropping it kills the process and removes the profile.
pub struct BrowserInstance {
    client: CdpClient,
    child: Child,
    _profile: TempDir,
}

impl BrowserInstance {
    pub async fn new_page(&self) -> Result<PageSession, BrowserError> {
        Ok(self.client.new_page().await?)
    }

    /// Close the browser, killing it if it does not exit promptly.
    pub async fn close(mut self) -> Result<(), BrowserError> {
        let graceful = match self.client.close_browser().await {
            // Chrome may drop the socket before answering.
            Err(CdpError::SessionClosed) => Ok(()),
            other => other,
        };

        match tokio::time::timeout(EXIT_GRACE, self.child.wait()).await {
            Ok(Ok(status)) => debug!("Chrome exited: {}", status),
            // Already collected elsewhere (e.g. by the PID 1 reaper).
            Ok(Err(e)) => debug!("Chrome exit status unavailable: {}", e),
            Err(_) => {
                warn!("Chrome did not exit in time, killing it");
                self.child
                    .kill()
                    .await
                    .map_err(|e| BrowserError::LaunchFailed(format!("kill: {}", e)))?;
            }
        }

        graceful.map_err(BrowserError::from)
    }
}

#[cfg(test)]
#[path = "launcher_tests.rs"]
mod tests;
