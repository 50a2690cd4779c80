use anyhow::Result;

use carousel_core::AppConfig;

pub fn run(config: &AppConfig, path_only: bool, init: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if path_only {
        println!("{}", path.display());
        return Ok(());
    }

    if init {
        if path.exists() {
            println!("Config already exists: {}", path.display());
        } else {
            AppConfig::default().save()?;
            tracing::info!(path = %path.display(), "Wrote default configuration");
            println!("Wrote {}", path.display());
        }
        return Ok(());
    }

    print!("{}", config.to_toml_string()?);
    Ok(())
}
