use std::path::Path;

use crate::api::roster_dto::RosterDto;
use crate::domain::roster::Roster;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod cli;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Loads a roster file and builds the shifts, jobs and volunteers it describes.
pub fn generate_roster(file_path: impl AsRef<Path>) -> Result<Roster> {
    let file_path = file_path.as_ref();

    let roster_dto: RosterDto = parse_json_file(file_path)?;
    log::info!("Roster file '{}' parsed successfully.", file_path.display());

    let roster = Roster::try_from(roster_dto)?;
    log::info!("Roster with {} jobs constructed successfully.", roster.jobs().len());

    Ok(roster)
}
