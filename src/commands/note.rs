use super::stamp_at;
use crate::{
    db::stamps::Stamps,
    libs::{config::Config, messages::Message, timestamp::format_display},
    msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct NoteArgs {
    /// Position of the timestamp in the list (1 = newest)
    position: usize,

    /// New note text; prompts with the current note when omitted
    text: Option<String>,

    /// Remove the note
    #[arg(short, long, conflicts_with = "text")]
    clear: bool,
}

pub fn cmd(args: NoteArgs) -> Result<()> {
    let config = Config::read()?;
    let mut stamps = Stamps::new()?;
    let stamp = stamp_at(&mut stamps, args.position)?;

    let note = if args.clear {
        String::new()
    } else if let Some(text) = args.text {
        text
    } else {
        let time = format_display(&stamp.time, config.display.include_milliseconds, &config.locale());
        Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptNote(time).to_string())
            .with_initial_text(stamp.note.clone())
            .allow_empty(true)
            .interact_text()?
    };
    let note = note.trim();

    stamps.update_note(&stamp.id, note)?;
    if note.is_empty() {
        msg_success!(Message::NoteCleared(args.position));
    } else {
        msg_success!(Message::NoteSaved(args.position));
    }
    Ok(())
}
