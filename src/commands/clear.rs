use crate::{db::stamps::Stamps, libs::messages::Message, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: ClearArgs) -> Result<()> {
    let mut stamps = Stamps::new()?;
    let count = stamps.count()?;

    if count == 0 {
        msg_info!(Message::NoStamps);
        return Ok(());
    }

    let confirmed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmClearStamps(count).to_string())
            .default(false)
            .interact()?;

    if confirmed {
        let cleared = stamps.clear()?;
        msg_success!(Message::StampsCleared(cleared));
    } else {
        msg_info!(Message::OperationCancelled);
    }
    Ok(())
}
