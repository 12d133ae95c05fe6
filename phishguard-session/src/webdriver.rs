use crate::error::{Result, SessionError};
use crate::session::BrowserSession;
use fantoccini::key::Key;
use fantoccini::wd::WindowHandle;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use tracing::{debug, info};

/// Connection settings for a local WebDriver endpoint.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// URL of the running driver, e.g. `http://localhost:9515`.
    pub webdriver_url: String,
    /// Extra launch arguments passed through to the browser.
    pub browser_args: Vec<String>,
    /// Launch the browser headless.
    pub headless: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            webdriver_url: "http://localhost:9515".to_string(),
            browser_args: Vec::new(),
            headless: false,
        }
    }
}

/// `BrowserSession` backed by a W3C WebDriver client.
pub struct WebDriverSession {
    client: Client,
}

impl WebDriverSession {
    /// Connect to a running WebDriver endpoint and start a browser session.
    pub async fn connect(options: &SessionOptions) -> Result<Self> {
        info!("Connecting to WebDriver at {}", options.webdriver_url);

        let mut args = options.browser_args.clone();
        if options.headless {
            args.push("--headless".to_string());
        }

        let vendor_opts = json!({ "args": args });
        let mut caps = serde_json::map::Map::new();
        // Chromium-family and Firefox drivers each read their own vendor key
        // and ignore the others.
        caps.insert("goog:chromeOptions".to_string(), vendor_opts.clone());
        caps.insert("ms:edgeOptions".to_string(), vendor_opts.clone());
        caps.insert("moz:firefoxOptions".to_string(), vendor_opts);

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(&options.webdriver_url)
            .await?;

        Ok(Self { client })
    }

    async fn first_element(&self, css: &str) -> Result<fantoccini::elements::Element> {
        self.client
            .find_all(Locator::Css(css))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| SessionError::ElementNotFound(css.to_string()))
    }
}

impl BrowserSession for WebDriverSession {
    type Tab = WindowHandle;

    async fn tabs(&mut self) -> Result<Vec<WindowHandle>> {
        Ok(self.client.windows().await?)
    }

    async fn switch_to(&mut self, tab: &WindowHandle) -> Result<()> {
        self.client.switch_to_window(tab.clone()).await?;
        Ok(())
    }

    async fn current_url(&mut self) -> Result<String> {
        Ok(self.client.current_url().await?.to_string())
    }

    async fn title(&mut self) -> Result<String> {
        Ok(self.client.title().await?)
    }

    async fn page_source(&mut self) -> Result<String> {
        Ok(self.client.source().await?)
    }

    async fn body_text(&mut self) -> Result<String> {
        let body = self.first_element("body").await?;
        Ok(body.text().await?)
    }

    async fn element_exists(&mut self, css: &str) -> Result<bool> {
        let matches = self.client.find_all(Locator::Css(css)).await?;
        Ok(!matches.is_empty())
    }

    async fn type_into(&mut self, css: &str, text: &str) -> Result<()> {
        debug!("Typing into first match of '{}'", css);
        let element = self.first_element(css).await?;
        element.send_keys(text).await?;
        Ok(())
    }

    async fn press_enter(&mut self, css: &str) -> Result<()> {
        debug!("Sending Enter to first match of '{}'", css);
        let element = self.first_element(css).await?;
        element
            .send_keys(&char::from(Key::Enter).to_string())
            .await?;
        Ok(())
    }

    async fn refresh(&mut self) -> Result<()> {
        self.client.refresh().await?;
        Ok(())
    }

    async fn execute_script(&mut self, js: &str) -> Result<()> {
        self.client.execute(js, vec![]).await?;
        Ok(())
    }

    async fn close(self) -> Result<()> {
        info!("Closing WebDriver session");
        self.client.close().await?;
        Ok(())
    }
}
