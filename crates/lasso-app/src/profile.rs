use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use lasso_config::Config;
use serde::{Deserialize, Serialize};

fn app_config_root() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("no config directory for this user")?
        .join("lasso"))
}

fn profiles_dir() -> Result<PathBuf> {
    Ok(app_config_root()?.join("profiles"))
}

/// Where the search-history file lives.
pub fn history_path() -> Result<PathBuf> {
    Ok(dirs::data_dir()
        .context("no data directory for this user")?
        .join("lasso")
        .join("search_history.json"))
}

/// A named configuration on disk.
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Create the config folders and the main profile if missing.
pub fn init_user_config() -> Result<()> {
    let dir = profiles_dir()?;
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let main_profile = dir.join("main.json");
    if !main_profile.exists() {
        let profile = Profile {
            name: "main".into(),
            value: Config::new(),
        };
        fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("created main profile at {}", main_profile.display());
    }

    Ok(())
}

/// Load a profile by name; falls back to main, then built-in defaults.
pub fn load_user_profile(name: &str) -> Result<Config> {
    let dir = profiles_dir()?;
    let profile_file = dir.join(format!("{name}.json"));

    if profile_file.exists() {
        let data = fs::read_to_string(profile_file)?;
        let profile: Profile = serde_json::from_str(&data)?;
        return Ok(profile.value);
    }

    tracing::warn!("profile {name} not found, falling back to main");
    let main_file = dir.join("main.json");
    if main_file.exists() {
        let data = fs::read_to_string(main_file)?;
        let profile: Profile = serde_json::from_str(&data)?;
        Ok(profile.value)
    } else {
        Ok(Config::new())
    }
}

/// Persist a (possibly mutated) config back to its profile file.
pub fn save_user_profile(name: &str, config: &Config) -> Result<()> {
    let dir = profiles_dir()?;
    fs::create_dir_all(&dir)?;
    let profile = Profile {
        name: name.into(),
        value: config.clone(),
    };
    fs::write(
        dir.join(format!("{name}.json")),
        serde_json::to_string_pretty(&profile)?,
    )?;
    Ok(())
}
