pub mod detect;
pub mod flow;
pub mod memory;
pub mod monitor;
pub mod notify;
pub mod verdict;

pub use detect::Signal;
pub use flow::{DUMMY_EMAIL, DUMMY_PASSWORD, FlowOptions};
pub use memory::PageMemory;
pub use monitor::{MonitorOptions, TabMonitor, VerdictCallback};
pub use verdict::Verdict;

use colored::Colorize;

pub fn print_banner() {
    println!("{}", "═".repeat(60).bright_blue().bold());
    println!(
        "  {}",
        "PHISHGUARD - live login-form phishing detector".bright_white().bold()
    );
    println!(
        "  {}",
        "Handles single-field and traditional login flows".bright_black()
    );
    println!("{}", "═".repeat(60).bright_blue().bold());
}
