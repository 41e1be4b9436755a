use crate::{
    db::stamps::Stamps,
    libs::{config::Config, messages::Message, stamp::Stamp, timestamp::format_display},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StampArgs {
    /// Attach a note to the new timestamp
    #[arg(short, long)]
    note: Option<String>,
}

pub fn cmd(args: StampArgs) -> Result<()> {
    let config = Config::read()?;
    let mut stamps = Stamps::new()?;

    let mut stamp = Stamp::now();
    if let Some(note) = args.note {
        stamp.note = note.trim().to_string();
    }

    let (stored, dropped) = stamps.insert(&stamp, config.max_records)?;
    let time = format_display(&stored.time, config.display.include_milliseconds, &config.locale());

    if stored.has_note() {
        msg_success!(Message::StampRecordedWithNote(time, stored.note));
    } else {
        msg_success!(Message::StampRecorded(time));
    }
    if dropped > 0 {
        msg_info!(Message::RecordsTrimmed(dropped, config.max_records));
    }
    Ok(())
}
