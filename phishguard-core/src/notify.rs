use phishguard_session::BrowserSession;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

pub const SAFE_MESSAGE: &str = "✓ Verified legitimate login flow";
pub const SUSPICIOUS_MESSAGE: &str = "⚠ Suspicious login behavior";

const NOTIFICATION_JS: &str = r#"
document.querySelectorAll('.phishguard-notification').forEach(el => el.remove());

const notification = document.createElement('div');
notification.className = 'phishguard-notification';
notification.style.cssText = `
    position: fixed;
    top: 20px;
    right: 20px;
    padding: 15px;
    border-radius: 5px;
    background-color: __BG__;
    color: __FG__;
    border: 1px solid __FG__;
    z-index: 9999;
    box-shadow: 0 2px 10px rgba(0,0,0,0.2);
    max-width: 300px;
    font-family: Arial, sans-serif;
    transition: opacity 0.3s;
`;

notification.innerHTML = `
    <div style="margin-bottom:10px;">__MSG__</div>
    <button style="padding:5px 15px;background:__FG__;color:white;border:none;border-radius:3px;cursor:pointer;">OK</button>
`;

notification.querySelector('button').onclick = function() {
    notification.style.opacity = '0';
    setTimeout(() => notification.remove(), 300);
};

document.body.appendChild(notification);
setTimeout(() => notification.style.opacity = '1', 10);
setTimeout(() => {
    notification.style.opacity = '0';
    setTimeout(() => notification.remove(), 300);
}, 10000);
"#;

/// Render a transient notification card in the active tab.
///
/// Waits `delay` first so the page has stabilized after the post-verdict
/// reload. Rendering is best-effort; failures are logged and swallowed.
pub async fn show_notification<S: BrowserSession>(
    session: &mut S,
    message: &str,
    is_warning: bool,
    delay: Duration,
) {
    sleep(delay).await;

    let (bg, fg) = if is_warning {
        ("#ffebee", "#d32f2f")
    } else {
        ("#e8f5e9", "#2e7d32")
    };

    let js = NOTIFICATION_JS
        .replace("__BG__", bg)
        .replace("__FG__", fg)
        .replace("__MSG__", message);

    if let Err(e) = session.execute_script(&js).await {
        debug!("Could not render notification: {}", e);
    }
}
