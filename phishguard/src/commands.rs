use crate::CLAP_STYLING;
use clap::{arg, command};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("phishguard")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("phishguard")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("monitor")
                .about(
                    "Watch the open tabs of a browser session, probe pages that look like \
                login forms with dummy credentials, and flag phishing behavior.",
                )
                .arg(
                    arg!(-w --"webdriver-url" <URL>)
                        .required(false)
                        .help("URL of the running WebDriver endpoint")
                        .default_value("http://localhost:9515"),
                )
                .arg(
                    arg!(-a --"browser-arg" <ARG> ...)
                        .required(false)
                        .help("Extra launch argument passed through to the browser (repeatable)"),
                )
                .arg(
                    arg!(--"headless")
                        .required(false)
                        .help("Launch the browser headless"),
                )
                .arg(
                    arg!(-i --"interval" <SECONDS>)
                        .required(false)
                        .help("Seconds to sleep between monitoring ticks")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("1"),
                )
                .arg(
                    arg!(--"settle-delay" <MILLIS>)
                        .required(false)
                        .help("Milliseconds to wait after each form submission")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("1500"),
                ),
        )
}
