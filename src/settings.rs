use async_once_cell::OnceCell;
use directories::{ProjectDirs, UserDirs};
use eyre::{eyre, Result};
use lazy_static::lazy_static;
use log::trace;
use serde_derive::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::CLI_NAME;

lazy_static! {
    pub static ref SETTINGS: Arc<OnceCell<Settings>> = Arc::new(OnceCell::new());
}

static CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub library: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub prompt: bool,

    #[serde(default)]
    pub fetch: Fetch,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library: None,
            prompt: default_true(),
            fetch: Fetch::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fetch {
    #[serde(default = "default_musicbrainz")]
    pub musicbrainz: String,
    #[serde(default = "default_wikipedia")]
    pub wikipedia: String,
}

fn default_musicbrainz() -> String {
    "https://musicbrainz.org/ws/2/".to_string()
}

fn default_wikipedia() -> String {
    "https://en.wikipedia.org/".to_string()
}

impl Default for Fetch {
    fn default() -> Self {
        Self {
            musicbrainz: default_musicbrainz(),
            wikipedia: default_wikipedia(),
        }
    }
}

fn get_library() -> Option<PathBuf> {
    UserDirs::new().and_then(|dirs| dirs.audio_dir().map(|audio| audio.to_path_buf()))
}

pub fn parse(content: &str) -> Result<Settings> {
    let mut set: Settings = toml::from_str(content).map_err(|e| eyre!(e))?;
    if set.library.is_none() {
        set.library = get_library();
    }
    Ok(set)
}

pub fn load() -> Result<Settings> {
    let dirs = ProjectDirs::from("com", "github", CLI_NAME)
        .ok_or(eyre!("Could not locate program directories"))?;
    let path = dirs.config_dir().join(PathBuf::from(CONFIG_FILE));
    trace!("Loading config file: {:?}", path);
    let content = fs::read_to_string(path).unwrap_or_else(|_| "".to_string());
    let set = parse(content.as_str())?;
    trace!("Loaded settings: {:?}", set);
    Ok(set)
}

pub fn get_settings() -> Result<&'static Settings> {
    SETTINGS.get().ok_or(eyre!("Could not read settings"))
}

pub fn print() -> Result<()> {
    print!("{}", toml::to_string(get_settings()?)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let set = parse("").unwrap();
        assert!(set.prompt);
        assert_eq!(set.fetch, Fetch::default());
        assert_eq!(set.fetch.musicbrainz, "https://musicbrainz.org/ws/2/");
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let set = parse(
            r#"
            library = "/srv/music"
            prompt = false

            [fetch]
            wikipedia = "https://de.wikipedia.org/"
            "#,
        )
        .unwrap();
        assert_eq!(set.library, Some(PathBuf::from("/srv/music")));
        assert!(!set.prompt);
        assert_eq!(set.fetch.wikipedia, "https://de.wikipedia.org/");
        assert_eq!(set.fetch.musicbrainz, default_musicbrainz());
    }

    #[test]
    fn invalid_config_is_an_error() {
        assert!(parse("prompt = \"maybe\"").is_err());
    }

    #[test]
    fn printed_config_parses_back() {
        let set = parse("library = \"/srv/music\"").unwrap();
        let printed = toml::to_string(&set).unwrap();
        assert_eq!(parse(&printed).unwrap(), set);
    }
}
