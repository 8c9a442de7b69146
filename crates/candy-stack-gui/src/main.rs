//! Candy Stack Dispenser
//!
//! Usage:
//!   dispenser                 Start with the config from the user config dir, or defaults
//!   dispenser <config.toml>   Start with the given config file

use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    candy_stack_gui::logging::init_logging();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = candy_stack_gui::settings::resolve(config_path.as_deref())?;

    candy_stack_gui::launch(config)?;
    Ok(())
}
