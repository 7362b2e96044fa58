//! Entry point for the `roadlog` command-line interface.
#![forbid(unsafe_code)]

use roadlog_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    env_logger::init();
    if let Err(err) = roadlog_cli::run() {
        if let CliError::ArgumentParsing(clap_err) = &err {
            clap_err.exit();
        }
        eprintln!("roadlog: {err}");
        std::process::exit(1);
    }
}
