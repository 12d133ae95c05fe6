use std::collections::{HashMap, HashSet};
use url::Url;

/// Normalized identity of a page: scheme://host[:port]/path with query and
/// fragment discarded. Two URLs differing only in query or fragment collapse
/// to the same signature.
///
/// URLs the `url` crate cannot parse keep their raw text as the signature so
/// the test-once invariant still holds for them.
pub fn page_signature(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => {
            let mut signature = format!("{}://", parsed.scheme());
            if let Some(host) = parsed.host_str() {
                signature.push_str(host);
            }
            if let Some(port) = parsed.port() {
                signature.push_str(&format!(":{}", port));
            }
            signature.push_str(parsed.path());
            signature
        }
        Err(_) => url.to_string(),
    }
}

/// Host[:port] component of a URL; empty string when unparsable or hostless.
pub fn domain_of(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => {
            let mut domain = parsed.host_str().unwrap_or_default().to_string();
            if let Some(port) = parsed.port() {
                domain.push_str(&format!(":{}", port));
            }
            domain
        }
        Err(_) => String::new(),
    }
}

/// Session-scoped state store gating which pages get tested.
///
/// One instance per monitoring session, never persisted. Mutated only from
/// the single monitoring thread of control, always passed by explicit
/// reference.
#[derive(Debug, Default)]
pub struct PageMemory {
    tested_pages: HashSet<String>,
    phishing_domains: HashSet<String>,
    username_submitted: HashMap<String, String>,
}

impl PageMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the page as tested. Idempotent.
    pub fn add_page(&mut self, url: &str) {
        self.tested_pages.insert(page_signature(url));
    }

    /// Whether the page was already tested this session.
    pub fn has_page(&self, url: &str) -> bool {
        self.tested_pages.contains(&page_signature(url))
    }

    /// Record the URL's domain as a confirmed phishing domain. Idempotent.
    pub fn add_phishing(&mut self, url: &str) {
        self.phishing_domains.insert(domain_of(url));
    }

    /// Whether the domain was previously confirmed as phishing.
    pub fn is_phishing_domain(&self, domain: &str) -> bool {
        self.phishing_domains.contains(domain)
    }

    /// Record the last username submitted on `domain`, overwriting any
    /// earlier entry.
    pub fn mark_username_submitted(&mut self, domain: &str, username: &str) {
        self.username_submitted
            .insert(domain.to_string(), username.to_string());
    }

    /// True only if the currently stored username for `domain` equals
    /// `username`. Does not prevent a retry with a different username.
    pub fn was_username_submitted(&self, domain: &str, username: &str) -> bool {
        self.username_submitted.get(domain).map(String::as_str) == Some(username)
    }
}
