use serde::{Deserialize, Serialize};

/// Terminal classification of one login-page test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The site showed evidence of genuine credential validation.
    Safe,
    /// Dummy credentials were accepted silently with no error signal and no
    /// redirect.
    Suspicious,
    /// Submission navigated to a different domain.
    Phishing,
    /// Nothing was done this encounter; the page stays eligible for retry.
    Skip,
    /// An interaction failure prevented a classification.
    Error,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Safe => "safe",
            Verdict::Suspicious => "suspicious",
            Verdict::Phishing => "phishing",
            Verdict::Skip => "skip",
            Verdict::Error => "error",
        }
    }
}
