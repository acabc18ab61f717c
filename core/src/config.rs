use std::fs::{read_to_string, File};
use std::io::Write;
use std::path::Path;

use crate::settings::KeyBindingsSettings;
use anyhow::{Context, Result};
use toml_edit::Document;

pub static CONFIG_PATH: &str = "config.toml";

pub fn try_load_settings(config_path: impl AsRef<Path>) -> Result<KeyBindingsSettings> {
    let config_path = config_path.as_ref();
    let settings = read_to_string(config_path)
        .with_context(|| format!("Unable load settings file: {}", config_path.display()))?;

    parse_settings(&settings)
}

pub fn parse_settings(settings: &str) -> Result<KeyBindingsSettings> {
    let settings: Document = settings.parse().context("Unable parse settings")?;
    toml_edit::de::from_document::<KeyBindingsSettings>(settings)
        .context("Unable parse key bindings settings")
}

pub fn save_settings(settings: &KeyBindingsSettings, config_path: impl AsRef<Path>) -> Result<()> {
    let config_path = config_path.as_ref();
    let serialized_settings =
        toml_edit::ser::to_string(settings).context("Unable serialize settings")?;

    let mut config = File::create(config_path)
        .with_context(|| format!("Unable create settings file: {}", config_path.display()))?;
    config.write_all(serialized_settings.as_bytes())?;

    Ok(())
}
