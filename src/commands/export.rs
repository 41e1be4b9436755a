//! CSV export command.
//!
//! Writes the whole log to `timestamps.csv` (or the given path, or stdout
//! with `-o -`). Timestamp style and the milliseconds choices default to
//! the saved export settings and can be overridden per run.

use crate::{
    db::stamps::Stamps,
    libs::{
        config::{Config, TimestampStyle},
        export::{ExportOptions, Exporter},
        formatter::Traced,
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file, or `-` for stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Timestamp column style
    #[arg(short, long, value_enum)]
    style: Option<TimestampStyle>,

    /// Include milliseconds in timestamps and intervals
    #[arg(long, conflicts_with = "no_ms")]
    ms: bool,

    /// Leave milliseconds out of timestamps and intervals
    #[arg(long)]
    no_ms: bool,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let stamps = Stamps::new()?.fetch()?;

    if stamps.is_empty() {
        msg_info!(Message::NothingToExport);
        return Ok(());
    }

    let mut options = ExportOptions::from_config(&config);
    if let Some(style) = args.style {
        options.style = style;
    }
    if args.ms || args.no_ms {
        options.include_milliseconds = args.ms;
        options.interval_milliseconds = args.ms;
    }

    let to_stdout = args.output.as_deref().is_some_and(|path| path.as_os_str() == "-");
    let exporter = Exporter::new(options, args.output.filter(|_| !to_stdout));

    if to_stdout {
        let csv = if config.trace_formatting {
            exporter.with_tracer(Traced).render(&stamps)?
        } else {
            exporter.render(&stamps)?
        };
        print!("{}", csv);
        return Ok(());
    }

    let destination = exporter.output_path().display().to_string();
    msg_info!(Message::ExportingStamps(stamps.len(), destination.clone()));
    if config.trace_formatting {
        exporter.with_tracer(Traced).write(&stamps)?;
    } else {
        exporter.write(&stamps)?;
    }
    msg_success!(Message::ExportCompleted(destination));
    Ok(())
}
