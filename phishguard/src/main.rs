use anyhow::Context;
use clap::ArgMatches;
use colored::Colorize;
use commands::command_argument_builder;
use indicatif::{ProgressBar, ProgressStyle};
use phishguard_core::{FlowOptions, MonitorOptions, TabMonitor, Verdict, print_banner};
use phishguard_session::{SessionOptions, WebDriverSession};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

mod commands;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    match chosen_command.subcommand() {
        Some(("monitor", primary_command)) => {
            if let Err(e) = handle_monitor(primary_command).await {
                eprintln!("✗ Monitoring failed: {:#}", e);
                std::process::exit(1);
            }
        }
        None => {
            // No subcommand provided, just show the banner
        }
        _ => unreachable!("clap should ensure we don't get here"),
    }
}

async fn handle_monitor(args: &ArgMatches) -> anyhow::Result<()> {
    let webdriver_url = args.get_one::<String>("webdriver-url").unwrap();
    let browser_args: Vec<String> = args
        .get_many::<String>("browser-arg")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let headless = args.get_flag("headless");
    let interval_secs = *args.get_one::<u64>("interval").unwrap();
    let settle_delay_ms = *args.get_one::<u64>("settle-delay").unwrap();

    let session_options = SessionOptions {
        webdriver_url: webdriver_url.clone(),
        browser_args,
        headless,
    };

    let session = WebDriverSession::connect(&session_options)
        .await
        .with_context(|| {
            format!(
                "Cannot connect to WebDriver at {}. Is the driver running?",
                webdriver_url
            )
        })?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message("Monitoring open tabs...");

    let spinner_for_verdicts = spinner.clone();
    let options = MonitorOptions {
        tick_interval: Duration::from_secs(interval_secs),
        flow: FlowOptions {
            settle_delay: Duration::from_millis(settle_delay_ms),
        },
        ..Default::default()
    };

    let mut monitor = TabMonitor::new(session)
        .with_options(options)
        .with_verdict_callback(Arc::new(move |url: &str, verdict: Verdict| {
            let line = match verdict {
                Verdict::Safe => format!("✓ Legitimate login flow: {}", url).green().to_string(),
                Verdict::Suspicious => format!("⚠ Suspicious login behavior: {}", url)
                    .yellow()
                    .to_string(),
                Verdict::Phishing => format!("🚨 PHISHING DETECTED: {}", url)
                    .bright_red()
                    .bold()
                    .to_string(),
                Verdict::Skip | Verdict::Error => return,
            };
            spinner_for_verdicts.println(line);
        }));

    // Install the interrupt listener before the first tick so a Ctrl+C
    // arriving mid-tick is never lost; the monitor observes it once the
    // current tick completes.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    monitor.run(shutdown_rx).await;

    spinner.finish_with_message("Monitoring stopped.");

    // Release the browser session on every exit path.
    monitor
        .shutdown()
        .await
        .context("Failed to close the browser session cleanly")?;

    Ok(())
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
