use crate::{
    libs::{
        config::Config,
        formatter::format_interval,
        messages::Message,
        timestamp::{format_with, FormatOptions, Instant, InstantError},
    },
    msg_error_anyhow, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct FormatArgs {
    #[command(subcommand)]
    command: FormatCommand,
}

#[derive(Debug, Subcommand)]
enum FormatCommand {
    /// Format a millisecond count as an interval
    Interval {
        /// Milliseconds, may be negative
        #[arg(allow_hyphen_values = true)]
        millis: i64,
        /// Round to whole seconds instead of showing milliseconds
        #[arg(long)]
        no_ms: bool,
    },
    /// Format an ISO-8601 timestamp in local time
    Time {
        /// Timestamp such as 2025-06-20T14:03:05.123Z
        instant: String,
        /// Use the sortable export form
        #[arg(short, long)]
        export: bool,
        /// Leave milliseconds out
        #[arg(long)]
        no_ms: bool,
        /// Locale tag, e.g. en-US or de_DE
        #[arg(short, long)]
        locale: Option<String>,
    },
}

pub fn cmd(args: FormatArgs) -> Result<()> {
    match args.command {
        FormatCommand::Interval { millis, no_ms } => {
            msg_print!(format_interval(millis, !no_ms));
        }
        FormatCommand::Time {
            instant,
            export,
            no_ms,
            locale,
        } => {
            let instant: Instant = instant
                .parse()
                .map_err(|e: InstantError| msg_error_anyhow!(Message::InvalidTimestamp(e.to_string())))?;
            let options = FormatOptions {
                include_milliseconds: !no_ms,
                locale: match locale {
                    Some(locale) => locale,
                    None => Config::read()?.locale(),
                },
                export_mode: export,
            };
            msg_print!(format_with(&instant, &options));
        }
    }
    Ok(())
}
