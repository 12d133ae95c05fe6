// Simulated browser session used to exercise the detection and
// classification logic without a real browser.

// Not every test crate touches every helper.
#![allow(dead_code)]

use phishguard_session::{BrowserSession, Result, SessionError};
use scraper::{Html, Selector};

/// One snapshot of a tab's page.
#[derive(Debug, Clone)]
pub struct SimPage {
    pub url: String,
    pub title: String,
    pub html: String,
    pub body_text: String,
}

impl SimPage {
    pub fn new(url: &str, title: &str, html: &str, body_text: &str) -> Self {
        Self {
            url: url.to_string(),
            title: title.to_string(),
            html: html.to_string(),
            body_text: body_text.to_string(),
        }
    }
}

/// A tab scripted as a timeline of page states. Each Enter keystroke
/// advances to the next state, simulating the navigation/DOM update a real
/// submission would cause.
#[derive(Debug)]
pub struct SimTab {
    pub states: Vec<SimPage>,
    pub current: usize,
    /// (selector, text) pairs recorded by `type_into`.
    pub typed: Vec<(String, String)>,
    pub submits: usize,
    pub refreshes: usize,
    pub scripts: Vec<String>,
    /// Read-failure switches, as if the tab were caught mid-navigation.
    pub fail_url: bool,
    pub fail_title: bool,
    pub fail_source: bool,
    pub fail_body_text: bool,
}

impl SimTab {
    pub fn new(states: Vec<SimPage>) -> Self {
        assert!(!states.is_empty(), "a tab needs at least one page state");
        Self {
            states,
            current: 0,
            typed: Vec::new(),
            submits: 0,
            refreshes: 0,
            scripts: Vec::new(),
            fail_url: false,
            fail_title: false,
            fail_source: false,
            fail_body_text: false,
        }
    }

    fn page(&self) -> &SimPage {
        &self.states[self.current]
    }
}

#[derive(Debug)]
pub struct SimSession {
    pub tabs: Vec<SimTab>,
    pub active: usize,
    /// When set, every `type_into` fails as if the element went stale.
    pub fail_typing: bool,
}

impl SimSession {
    pub fn single(states: Vec<SimPage>) -> Self {
        Self::with_tabs(vec![SimTab::new(states)])
    }

    pub fn with_tabs(tabs: Vec<SimTab>) -> Self {
        Self {
            tabs,
            active: 0,
            fail_typing: false,
        }
    }

    fn tab(&mut self) -> &mut SimTab {
        &mut self.tabs[self.active]
    }

    fn html_matches(html: &str, css: &str) -> bool {
        let selector = Selector::parse(css).expect("test selector must parse");
        Html::parse_document(html).select(&selector).next().is_some()
    }
}

fn read_failure() -> SessionError {
    SessionError::Other("page is mid-navigation".to_string())
}

impl BrowserSession for SimSession {
    type Tab = usize;

    async fn tabs(&mut self) -> Result<Vec<usize>> {
        Ok((0..self.tabs.len()).collect())
    }

    async fn switch_to(&mut self, tab: &usize) -> Result<()> {
        self.active = *tab;
        Ok(())
    }

    async fn current_url(&mut self) -> Result<String> {
        let tab = self.tab();
        if tab.fail_url {
            return Err(read_failure());
        }
        Ok(tab.page().url.clone())
    }

    async fn title(&mut self) -> Result<String> {
        let tab = self.tab();
        if tab.fail_title {
            return Err(read_failure());
        }
        Ok(tab.page().title.clone())
    }

    async fn page_source(&mut self) -> Result<String> {
        let tab = self.tab();
        if tab.fail_source {
            return Err(read_failure());
        }
        Ok(tab.page().html.clone())
    }

    async fn body_text(&mut self) -> Result<String> {
        let tab = self.tab();
        if tab.fail_body_text {
            return Err(read_failure());
        }
        Ok(tab.page().body_text.clone())
    }

    async fn element_exists(&mut self, css: &str) -> Result<bool> {
        Ok(Self::html_matches(&self.tab().page().html, css))
    }

    async fn type_into(&mut self, css: &str, text: &str) -> Result<()> {
        if self.fail_typing {
            return Err(SessionError::Other("element went stale".to_string()));
        }
        if !Self::html_matches(&self.tab().page().html, css) {
            return Err(SessionError::ElementNotFound(css.to_string()));
        }
        let text = text.to_string();
        let css = css.to_string();
        self.tab().typed.push((css, text));
        Ok(())
    }

    async fn press_enter(&mut self, css: &str) -> Result<()> {
        if !Self::html_matches(&self.tab().page().html, css) {
            return Err(SessionError::ElementNotFound(css.to_string()));
        }
        let tab = self.tab();
        tab.submits += 1;
        if tab.current + 1 < tab.states.len() {
            tab.current += 1;
        }
        Ok(())
    }

    async fn refresh(&mut self) -> Result<()> {
        self.tab().refreshes += 1;
        Ok(())
    }

    async fn execute_script(&mut self, js: &str) -> Result<()> {
        let js = js.to_string();
        self.tab().scripts.push(js);
        Ok(())
    }

    async fn close(self) -> Result<()> {
        Ok(())
    }
}
