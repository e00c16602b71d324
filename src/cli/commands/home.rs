use anyhow::Result;

use paperpilot::render_home;

/// Print the overview and the ways to get started
pub fn execute() -> Result<()> {
    println!("{}", render_home());
    Ok(())
}
