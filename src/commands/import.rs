use crate::{
    db::stamps::Stamps,
    libs::{config::Config, messages::Message, stamp::parse_legacy},
    msg_error_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file holding an array of ISO timestamps or {id, time, note} objects
    file: PathBuf,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    let config = Config::read()?;

    let json = fs::read_to_string(&args.file)
        .map_err(|e| msg_error_anyhow!(Message::ImportFileReadFailed(args.file.display().to_string(), e.to_string())))?;
    let legacy = parse_legacy(&json).map_err(|e| msg_error_anyhow!(Message::ImportFailed(e.to_string())))?;

    let mut stamps = Stamps::new()?;
    let imported = stamps.import(&legacy, config.max_records)?;
    msg_success!(Message::ImportCompleted(imported, stamps.count()?));
    Ok(())
}
