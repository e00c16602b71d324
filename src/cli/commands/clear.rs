use anyhow::Result;

use crate::cli::{ ui, Session };

pub fn execute(session: &Session) -> Result<()> {
    session.pilot.clear()?;
    ui::print_success("Stored results cleared.");
    Ok(())
}
