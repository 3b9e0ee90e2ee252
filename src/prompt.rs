use dialoguer::Input;
use eyre::Result;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::models::TrackIdentity;
use crate::theme::DialoguerTheme;

/// Asks for a title and artist when neither tags nor the filename give a
/// usable search key. Blocks until answered.
pub trait Prompt {
    fn ask(&self, path: &Path, guess: &TrackIdentity) -> Result<TrackIdentity>;
}

#[derive(Default)]
pub struct Terminal {
    theme: DialoguerTheme,
}

impl Terminal {
    fn input(&self, prompt: &str, initial: &str) -> Result<String> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()?)
    }
}

impl Prompt for Terminal {
    fn ask(&self, path: &Path, guess: &TrackIdentity) -> Result<TrackIdentity> {
        info!("Manual input required for {:?}", path);
        let title = self.input("Song title", &guess.title)?;
        let artist = self.input("Artist name", &guess.artist)?;
        Ok(TrackIdentity::new(title, artist))
    }
}

/// Keeps the guess as is, for unattended runs.
pub struct Skip;

impl Prompt for Skip {
    fn ask(&self, path: &Path, guess: &TrackIdentity) -> Result<TrackIdentity> {
        debug!("Prompt disabled, searching {:?} with {}", path, guess);
        Ok(guess.clone())
    }
}

/// Asks for the folder to scan. An empty answer cancels.
pub fn pick_folder(initial: Option<&Path>) -> Result<Option<PathBuf>> {
    let theme = DialoguerTheme::default();
    let answer: String = Input::with_theme(&theme)
        .with_prompt("Select a folder containing MP3 files")
        .with_initial_text(
            initial
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_default(),
        )
        .allow_empty(true)
        .interact_text()?;
    Ok(folder_from_answer(&answer))
}

fn folder_from_answer(answer: &str) -> Option<PathBuf> {
    let answer = answer.trim();
    if answer.is_empty() {
        None
    } else {
        Some(PathBuf::from(answer))
    }
}
