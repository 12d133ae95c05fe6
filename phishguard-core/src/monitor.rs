use crate::detect;
use crate::flow::{self, FlowOptions};
use crate::memory::{PageMemory, domain_of};
use crate::notify;
use crate::verdict::Verdict;
use phishguard_session::{BrowserSession, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// URLs of blank/new-tab pages that are never worth inspecting.
const BLANK_PAGES: [&str; 3] = ["about:blank", "chrome://newtab/", "edge://newtab/"];

/// Callback relaying each page's final verdict outward (URL, verdict).
pub type VerdictCallback = Arc<dyn Fn(&str, Verdict) + Send + Sync>;

#[derive(Debug, Clone)]
pub struct MonitorOptions {
    /// Sleep between ticks.
    pub tick_interval: Duration,
    /// Stabilize delay before rendering an on-page notification.
    pub notify_delay: Duration,
    pub flow: FlowOptions,
}

impl Default for MonitorOptions {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            notify_delay: Duration::from_secs(1),
            flow: FlowOptions::default(),
        }
    }
}

/// Drives detection and classification over the open tabs of one browser
/// session, once per tick.
pub struct TabMonitor<S: BrowserSession> {
    session: S,
    memory: PageMemory,
    options: MonitorOptions,
    verdict_callback: Option<VerdictCallback>,
}

impl<S: BrowserSession> TabMonitor<S> {
    pub fn new(session: S) -> Self {
        Self {
            session,
            memory: PageMemory::new(),
            options: MonitorOptions::default(),
            verdict_callback: None,
        }
    }

    pub fn with_options(mut self, options: MonitorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_verdict_callback(mut self, callback: VerdictCallback) -> Self {
        self.verdict_callback = Some(callback);
        self
    }

    pub fn memory(&self) -> &PageMemory {
        &self.memory
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Run one monitoring pass over a snapshot of the open tabs. Tabs opened
    /// mid-tick are picked up next tick. Per-tab failures are logged and the
    /// pass continues.
    pub async fn tick(&mut self) -> Result<()> {
        let tabs = self.session.tabs().await?;
        debug!("Tick over {} tab(s)", tabs.len());

        for tab in &tabs {
            if let Err(e) = self.process_tab(tab).await {
                warn!("Tab monitoring error: {}", e);
            }
        }

        Ok(())
    }

    async fn process_tab(&mut self, tab: &S::Tab) -> Result<()> {
        self.session.switch_to(tab).await?;
        let url = self.session.current_url().await?;

        if BLANK_PAGES.contains(&url.as_str()) {
            return Ok(());
        }
        if self.memory.is_phishing_domain(&domain_of(&url)) {
            debug!("Skipping known phishing domain: {}", url);
            return Ok(());
        }
        if self.memory.has_page(&url) {
            return Ok(());
        }
        if !detect::is_login_page(&mut self.session).await.is_present() {
            return Ok(());
        }

        info!("Testing login page: {}", url);
        let verdict =
            flow::test_login_page(&mut self.session, &mut self.memory, &self.options.flow).await;

        // A skipped page stays untested so it is reconsidered next tick,
        // e.g. once its password field finally appears.
        if verdict == Verdict::Skip {
            return Ok(());
        }

        self.memory.add_page(&url);
        // Clear any side effects of the dummy submission before the user
        // continues on this page.
        self.session.refresh().await?;

        match verdict {
            Verdict::Safe => {
                notify::show_notification(
                    &mut self.session,
                    notify::SAFE_MESSAGE,
                    false,
                    self.options.notify_delay,
                )
                .await;
            }
            Verdict::Suspicious => {
                notify::show_notification(
                    &mut self.session,
                    notify::SUSPICIOUS_MESSAGE,
                    true,
                    self.options.notify_delay,
                )
                .await;
            }
            Verdict::Phishing => {
                warn!("Phishing detected: {}", url);
            }
            Verdict::Error => {
                debug!("Login test on {} ended in error", url);
            }
            Verdict::Skip => unreachable!(),
        }

        if verdict != Verdict::Error
            && let Some(ref callback) = self.verdict_callback
        {
            callback(&url, verdict);
        }

        Ok(())
    }

    /// Drive ticks separated by the configured interval until `shutdown`
    /// flips to true (or its sender goes away). Cancellation is
    /// cooperative: an in-flight tick always runs to completion, and a
    /// signal raised during one is observed right after it, without
    /// sleeping out the interval first.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) {
        loop {
            if let Err(e) = self.tick().await {
                warn!("Monitoring error: {}", e);
            }

            if *shutdown.borrow() {
                break;
            }

            tokio::select! {
                _ = shutdown.changed() => break,
                _ = sleep(self.options.tick_interval) => {}
            }
        }
    }

    /// Tear down the monitor, releasing the browser session.
    pub async fn shutdown(self) -> Result<()> {
        self.session.close().await
    }
}
