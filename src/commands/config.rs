//! Settings command.
//!
//! Without flags this runs the interactive wizard. `--toggle-ms` flips the
//! list's milliseconds setting in place, which is the one setting people
//! change often.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Toggle milliseconds in the list view
    #[arg(short, long, conflicts_with = "show")]
    toggle_ms: bool,

    /// Print the current settings
    #[arg(short, long)]
    show: bool,
}

pub fn cmd(args: ConfigArgs) -> Result<()> {
    if args.show {
        return Config::read()?.show();
    }

    if args.toggle_ms {
        let mut config = Config::read()?;
        let enabled = config.toggle_milliseconds();
        config.save()?;
        msg_success!(Message::MillisecondsToggled(enabled));
        return Ok(());
    }

    Config::init()?.save()?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}
