pub mod clear;
pub mod config;
pub mod delete;
pub mod export;
pub mod format;
pub mod import;
pub mod list;
pub mod note;
pub mod stamp;

use crate::db::stamps::Stamps;
use crate::libs::messages::Message;
use crate::libs::stamp::Stamp;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Record the current time", visible_alias = "add")]
    Stamp(stamp::StampArgs),
    #[command(about = "List recorded timestamps with the intervals between them", visible_alias = "ls")]
    List(list::ListArgs),
    #[command(about = "Add, edit or clear the note of a timestamp")]
    Note(note::NoteArgs),
    #[command(about = "Delete one timestamp", visible_alias = "rm")]
    Delete(delete::DeleteArgs),
    #[command(about = "Delete all timestamps")]
    Clear(clear::ClearArgs),
    #[command(about = "Export timestamps as CSV")]
    Export(export::ExportArgs),
    #[command(about = "Import timestamps from a legacy JSON list")]
    Import(import::ImportArgs),
    #[command(about = "Configure display and export settings")]
    Config(config::ConfigArgs),
    #[command(about = "Format an interval or a timestamp without touching the log")]
    Format(format::FormatArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Stamp(args) => stamp::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Note(args) => note::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Clear(args) => clear::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Import(args) => import::cmd(args),
            Commands::Config(args) => config::cmd(args),
            Commands::Format(args) => format::cmd(args),
        }
    }
}

/// Looks up the stamp shown at `position` in the list.
pub(crate) fn stamp_at(stamps: &mut Stamps, position: usize) -> Result<Stamp> {
    stamps
        .get(position)?
        .ok_or_else(|| msg_error_anyhow!(Message::StampNotFound(position)))
}
