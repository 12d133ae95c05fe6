use crate::detect::{
    self, PASSWORD_FIELD_CSS, USERNAME_FIELD_CSS, USERNAME_HINT_CSS,
};
use crate::memory::{PageMemory, domain_of};
use crate::verdict::Verdict;
use phishguard_session::{BrowserSession, Result};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Fixed non-real credential pair, used solely to provoke observable site
/// behavior. Deliberately unregisterable.
pub const DUMMY_EMAIL: &str = "probe.no.reply.7041@example.invalid";
pub const DUMMY_PASSWORD: &str = "Xk9#probe-credential-7041";

/// Timing knobs for the credential-submission flow.
#[derive(Debug, Clone)]
pub struct FlowOptions {
    /// Wait after each submission for any resulting navigation or DOM
    /// update before the next check.
    pub settle_delay: Duration,
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(1500),
        }
    }
}

/// Outcome of the single-field branch, consumed by `test_login_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleFieldOutcome {
    /// The dummy username was already submitted on this domain.
    AlreadySubmitted,
    /// Submitting the username revealed a password field.
    PasswordPageShown,
    /// The page reacted with a legitimacy signal.
    Legitimate,
    /// No password field appeared and no signal was found.
    Unknown,
}

/// Single-field branch: submit the dummy username into a username/email-only
/// form and observe what the page does.
pub async fn handle_single_field_login<S: BrowserSession>(
    session: &mut S,
    memory: &mut PageMemory,
    options: &FlowOptions,
) -> Result<SingleFieldOutcome> {
    let domain = domain_of(&session.current_url().await?);

    if memory.was_username_submitted(&domain, DUMMY_EMAIL) {
        return Ok(SingleFieldOutcome::AlreadySubmitted);
    }

    session.type_into(USERNAME_FIELD_CSS, DUMMY_EMAIL).await?;
    session.press_enter(USERNAME_FIELD_CSS).await?;
    memory.mark_username_submitted(&domain, DUMMY_EMAIL);

    sleep(options.settle_delay).await;

    if session.element_exists(PASSWORD_FIELD_CSS).await? {
        return Ok(SingleFieldOutcome::PasswordPageShown);
    }

    if detect::check_legitimacy(session).await.is_present() {
        return Ok(SingleFieldOutcome::Legitimate);
    }

    Ok(SingleFieldOutcome::Unknown)
}

/// Exercise a detected login page with dummy credentials and classify the
/// resulting behavior. Never fails: interaction errors are logged and
/// yield `Verdict::Error`.
pub async fn test_login_page<S: BrowserSession>(
    session: &mut S,
    memory: &mut PageMemory,
    options: &FlowOptions,
) -> Verdict {
    match run_flow(session, memory, options).await {
        Ok(verdict) => verdict,
        Err(e) => {
            warn!("Login test failed: {}", e);
            Verdict::Error
        }
    }
}

async fn run_flow<S: BrowserSession>(
    session: &mut S,
    memory: &mut PageMemory,
    options: &FlowOptions,
) -> Result<Verdict> {
    let original_url = session.current_url().await?;
    let original_domain = domain_of(&original_url);

    let has_username_field = session.element_exists(USERNAME_HINT_CSS).await?;
    let has_password_field = session.element_exists(PASSWORD_FIELD_CSS).await?;

    if has_username_field && !has_password_field {
        debug!("Single-field login form on {}", original_url);
        match handle_single_field_login(session, memory, options).await? {
            SingleFieldOutcome::PasswordPageShown => {
                session.type_into(PASSWORD_FIELD_CSS, DUMMY_PASSWORD).await?;
                session.press_enter(PASSWORD_FIELD_CSS).await?;
                sleep(options.settle_delay).await;
            }
            SingleFieldOutcome::Legitimate => return Ok(Verdict::Safe),
            SingleFieldOutcome::AlreadySubmitted => return Ok(Verdict::Skip),
            // No password was ever submitted; the domain check below still
            // decides the verdict.
            SingleFieldOutcome::Unknown => {}
        }
    } else if has_username_field && has_password_field {
        debug!("Dual-field login form on {}", original_url);
        session.type_into(USERNAME_FIELD_CSS, DUMMY_EMAIL).await?;
        session.type_into(PASSWORD_FIELD_CSS, DUMMY_PASSWORD).await?;
        session.press_enter(PASSWORD_FIELD_CSS).await?;
        sleep(options.settle_delay).await;
    }
    // Neither field shape matched: nothing was submitted and the domain
    // check proceeds directly.

    let current_url = session.current_url().await?;
    let current_domain = domain_of(&current_url);

    if current_domain != original_domain {
        memory.add_phishing(&current_url);
        return Ok(Verdict::Phishing);
    }

    if detect::check_legitimacy(session).await.is_present() {
        return Ok(Verdict::Safe);
    }

    Ok(Verdict::Suspicious)
}
