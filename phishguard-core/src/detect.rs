use phishguard_session::BrowserSession;
use scraper::{Html, Selector};
use tracing::debug;

/// Keywords whose presence in a lower-cased URL or title marks a likely
/// login page.
pub const LOGIN_KEYWORDS: [&str; 5] = ["login", "signin", "auth", "account", "password"];

/// Substrings whose presence in page text is read as evidence the site runs
/// genuine validation logic rather than unconditionally accepting input.
pub const LEGITIMACY_INDICATORS: [&str; 14] = [
    "invalid",
    "incorrect",
    "wrong",
    "exist",
    "not found",
    "no account",
    "try again",
    "failed",
    "error",
    "unrecognized",
    "mismatch",
    "new",
    "create",
    "valid",
];

/// A text-or-email input that also carries a username-ish `name` or `id`.
/// Catches single-field "enter your email" gates that have neither a
/// surrounding `<form>` nor conventional keywords anywhere.
pub const USERNAME_HINT_CSS: &str = concat!(
    r#"input[type="text"][name*="user"], input[type="text"][id*="user"], "#,
    r#"input[type="text"][name*="mail"], input[type="text"][id*="mail"], "#,
    r#"input[type="email"][name*="user"], input[type="email"][id*="user"], "#,
    r#"input[type="email"][name*="mail"], input[type="email"][id*="mail"]"#,
);

/// Broad locator for the field to type a username into: any text-or-email
/// input, or anything with a username-ish `name` or `id`.
pub const USERNAME_FIELD_CSS: &str = concat!(
    r#"input[type="text"], input[type="email"], "#,
    r#"input[name*="user"], input[id*="user"], "#,
    r#"input[name*="mail"], input[id*="mail"]"#,
);

pub const PASSWORD_FIELD_CSS: &str = r#"input[type="password"]"#;

const FORM_WITH_TEXT_INPUT_CSS: &str =
    r#"form input[type="text"], form input[type="email"]"#;

/// Tri-state predicate result. `Unknown` is the explicit fail-safe branch
/// for pages that could not be inspected (e.g. mid-navigation); callers
/// treat it as "no signal".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Present,
    Absent,
    Unknown,
}

impl Signal {
    pub fn is_present(self) -> bool {
        self == Signal::Present
    }

    fn from_bool(present: bool) -> Self {
        if present { Signal::Present } else { Signal::Absent }
    }
}

fn selector(css: &str) -> Selector {
    // All selectors in this module are compile-time constants.
    Selector::parse(css).expect("invalid built-in selector")
}

/// Whether `text` contains a login keyword, case-insensitively.
pub fn text_has_login_keyword(text: &str) -> bool {
    let lowered = text.to_lowercase();
    LOGIN_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// Whether the document contains a form with a text-or-email input
/// descendant (detector rule 3).
pub fn login_structure_in(html: &str) -> bool {
    let document = Html::parse_document(html);
    document.select(&selector(FORM_WITH_TEXT_INPUT_CSS)).next().is_some()
}

/// Whether the document contains a username-hinted text-or-email input
/// (detector rule 4).
pub fn username_hint_in(html: &str) -> bool {
    let document = Html::parse_document(html);
    document.select(&selector(USERNAME_HINT_CSS)).next().is_some()
}

/// Whether `text` contains a legitimacy indicator, case-insensitively.
pub fn text_has_legitimacy_signal(text: &str) -> bool {
    let lowered = text.to_lowercase();
    LEGITIMACY_INDICATORS.iter().any(|ind| lowered.contains(ind))
}

/// Does the active tab look like a login form?
///
/// Logical OR of four heuristics: login keyword in the URL, login keyword in
/// the title, a form with a text-or-email input, or a username-hinted input.
/// Any extraction failure yields `Signal::Unknown`.
pub async fn is_login_page<S: BrowserSession>(session: &mut S) -> Signal {
    let url = match session.current_url().await {
        Ok(url) => url,
        Err(e) => {
            debug!("Login-page check could not read URL: {}", e);
            return Signal::Unknown;
        }
    };
    if text_has_login_keyword(&url) {
        return Signal::Present;
    }

    let title = match session.title().await {
        Ok(title) => title,
        Err(e) => {
            debug!("Login-page check could not read title: {}", e);
            return Signal::Unknown;
        }
    };
    if text_has_login_keyword(&title) {
        return Signal::Present;
    }

    let html = match session.page_source().await {
        Ok(html) => html,
        Err(e) => {
            debug!("Login-page check could not read page source: {}", e);
            return Signal::Unknown;
        }
    };

    Signal::from_bool(login_structure_in(&html) || username_hint_in(&html))
}

/// Does the active tab's visible text carry a legitimacy/error signal?
///
/// Extraction failure yields `Signal::Unknown`, which callers read as "no
/// signal found".
pub async fn check_legitimacy<S: BrowserSession>(session: &mut S) -> Signal {
    match session.body_text().await {
        Ok(text) => Signal::from_bool(text_has_legitimacy_signal(&text)),
        Err(e) => {
            debug!("Legitimacy check could not read body text: {}", e);
            Signal::Unknown
        }
    }
}
