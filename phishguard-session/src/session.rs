use crate::error::Result;

/// Capability interface over one browser automation session.
///
/// Everything the detection and classification logic needs from a browser is
/// expressed here, so the whole engine can run against a simulated session in
/// tests. All operations act on the session's currently active tab, except
/// `tabs` and `switch_to`; cross-tab work is strictly sequential.
#[allow(async_fn_in_trait)]
pub trait BrowserSession {
    /// Opaque handle identifying one open tab.
    type Tab: Clone + PartialEq + std::fmt::Debug;

    /// Snapshot the handles of all currently open tabs.
    async fn tabs(&mut self) -> Result<Vec<Self::Tab>>;

    /// Make `tab` the active tab for subsequent operations.
    async fn switch_to(&mut self, tab: &Self::Tab) -> Result<()>;

    /// URL of the active tab.
    async fn current_url(&mut self) -> Result<String>;

    /// Title of the active tab's document.
    async fn title(&mut self) -> Result<String>;

    /// Full HTML source of the active tab's document.
    async fn page_source(&mut self) -> Result<String>;

    /// Rendered text content of the active tab's `<body>`.
    async fn body_text(&mut self) -> Result<String>;

    /// Whether at least one element matches the CSS selector.
    async fn element_exists(&mut self, css: &str) -> Result<bool>;

    /// Type `text` into the first element matching the CSS selector.
    async fn type_into(&mut self, css: &str, text: &str) -> Result<()>;

    /// Send an Enter keystroke to the first element matching the CSS
    /// selector, submitting its surrounding form if any.
    async fn press_enter(&mut self, css: &str) -> Result<()>;

    /// Reload the active tab.
    async fn refresh(&mut self) -> Result<()>;

    /// Execute a script in the active tab. Used for side-effecting
    /// collaborators only (on-page notifications); the return value is
    /// discarded.
    async fn execute_script(&mut self, js: &str) -> Result<()>;

    /// Tear down the session, releasing the underlying browser.
    async fn close(self) -> Result<()>
    where
        Self: Sized;
}
