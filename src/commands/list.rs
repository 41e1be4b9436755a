use crate::{
    db::stamps::Stamps,
    libs::{
        config::Config,
        formatter::{IntervalFormatter, Traced},
        messages::Message,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show milliseconds regardless of the saved setting
    #[arg(long, conflicts_with = "no_ms")]
    ms: bool,

    /// Hide milliseconds regardless of the saved setting
    #[arg(long)]
    no_ms: bool,

    /// Show only the newest N timestamps
    #[arg(short = 'n', long)]
    limit: Option<usize>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let all = Stamps::new()?.fetch()?;

    if all.is_empty() {
        msg_info!(Message::NoStamps);
        return Ok(());
    }

    // Intervals are computed on the shown slice plus one, so the last shown
    // row still gets its interval.
    let shown = args.limit.unwrap_or(all.len()).min(all.len());
    let window = &all[..(shown + 1).min(all.len())];

    let include_milliseconds = match (args.ms, args.no_ms) {
        (true, _) => true,
        (_, true) => false,
        _ => config.display.include_milliseconds,
    };
    let locale = config.locale();

    msg_print!(Message::StampsHeader(shown, all.len()));
    let mut table = if config.trace_formatting {
        View::stamps(window, &IntervalFormatter::with_tracer(include_milliseconds, Traced), &locale)
    } else {
        View::stamps(window, &IntervalFormatter::new(include_milliseconds), &locale)
    };
    if window.len() > shown {
        table.remove_row(shown);
    }
    table.printstd();

    Ok(())
}
