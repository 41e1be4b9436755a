use super::stamp_at;
use crate::{
    db::stamps::Stamps,
    libs::{config::Config, messages::Message, timestamp::format_display},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Position of the timestamp in the list (1 = newest)
    position: usize,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let config = Config::read()?;
    let mut stamps = Stamps::new()?;
    let stamp = stamp_at(&mut stamps, args.position)?;
    let time = format_display(&stamp.time, config.display.include_milliseconds, &config.locale());

    let confirmed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteStamp(time.clone()).to_string())
            .default(false)
            .interact()?;

    if confirmed {
        stamps.delete(&stamp.id)?;
        msg_success!(Message::StampDeleted(time));
    } else {
        msg_info!(Message::OperationCancelled);
    }
    Ok(())
}
