use tapstamp::commands::Cli;
use tapstamp::libs::messages::macros::{is_debug_mode, DEFAULT_LOG_FILTER};
use tapstamp::msg_error;
use tracing_subscriber::EnvFilter;

fn main() {
    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
    }

    if let Err(error) = Cli::menu() {
        // Message errors already carry their prefix.
        let text = format!("{:#}", error);
        msg_error!(text.trim_start_matches("❌ "));
        std::process::exit(1);
    }
}
