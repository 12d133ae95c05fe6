pub mod error;
pub mod session;
pub mod webdriver;

pub use error::{Result, SessionError};
pub use session::BrowserSession;
pub use webdriver::{SessionOptions, WebDriverSession};
