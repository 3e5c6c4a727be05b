use anyhow::Result;

use crate::config::{self, Config};

/// Show the current effective configuration.
pub fn show_config() -> Result<()> {
    let config = Config::load()?;
    let path = config::config_file_path();

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", path.display());
    println!(
        "File exists: {}\n",
        if path.exists() {
            "yes"
        } else {
            "no (using defaults)"
        }
    );

    println!("Settings:");
    println!("  max_fret:    {}", config.max_fret);
    println!("  orientation: {}", config.orientation);
    println!("  mode:        {}", config.mode);

    println!("\nPriority: CLI args > Config file > Defaults");

    Ok(())
}
