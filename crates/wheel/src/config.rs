use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use spindle::{ColorToken, Entry, Hour, Verse};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParticipantConfig {
    pub name: String,
    /// Slice color; palette-assigned by position when omitted.
    #[serde(default)]
    pub color: Option<ColorToken>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SoundConfig {
    /// Player command line, e.g. `mpv --no-video`. Cues are silent when unset.
    #[serde(default)]
    pub player: Option<String>,
    #[serde(default)]
    pub spin: Option<PathBuf>,
    #[serde(default)]
    pub win: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub participants: Vec<ParticipantConfig>,
    #[serde(default)]
    pub verses: Vec<Verse>,
    #[serde(default)]
    pub rotation_hour: Hour,
    #[serde(default)]
    pub sounds: SoundConfig,
}

impl Config {
    /// The fixed entry set for this session, colors filled from the palette.
    pub fn entries(&self) -> Vec<Entry> {
        self.participants
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let color = p
                    .color
                    .clone()
                    .unwrap_or_else(|| ColorToken::from_palette(i));
                Entry::new(p.name.clone(), color)
            })
            .collect()
    }

    pub fn verse_pool(&self) -> Vec<Verse> {
        self.verses.clone()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "prayerwheel", "wheel").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("WHEEL"))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// The built-in configuration: the original sixteen participants, the full
/// palette and the stock verse pool.
pub fn builtin_config() -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ))
        .build()?;
    Ok(s.try_deserialize()?)
}

/// Loads the user config, materializing the defaults on first run and
/// falling back to the built-ins when the config is broken or names nobody
/// to spin for.
pub fn load_or_setup() -> Config {
    if let Ok(path) = get_config_path()
        && !path.exists()
    {
        match write_default_config() {
            Ok(written) => log::info!("Wrote default config to {}", written.display()),
            Err(e) => log::warn!("Could not write default config: {e}"),
        }
    }

    match load_config() {
        Ok(config) if !config.participants.is_empty() => config,
        Ok(_) => {
            log::warn!("Config names no participants, using built-in wheel");
            fallback()
        }
        Err(e) => {
            log::warn!("Failed to load config ({e}), using built-in wheel");
            fallback()
        }
    }
}

fn fallback() -> Config {
    builtin_config().unwrap_or_else(|e| {
        log::error!("Built-in config failed to parse: {e}");
        Config::default()
    })
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    write_default_to(&path)?;
    Ok(path)
}

/// Writes the built-in defaults to `path`, leaving an existing file alone.
fn write_default_to(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(())
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
