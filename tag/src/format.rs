use eyre::{eyre, Result};
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Id3,
}

impl Format {
    pub fn from_path<P>(path: P) -> Result<Format>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or(eyre!("File has no extension: {:?}", path))?;
        Self::from_ext(ext)
    }

    pub fn from_ext(ext: &str) -> Result<Format> {
        match ext.to_lowercase().as_str() {
            "mp3" => Ok(Format::Id3),
            _ => Err(eyre!("Unknown extension format with extension {}", ext)),
        }
    }

    pub fn is_supported<P>(path: P) -> bool
    where
        P: AsRef<Path>,
    {
        Self::from_path(path).is_ok()
    }

    pub fn ext(&self) -> &'static str {
        match self {
            Format::Id3 => "mp3",
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            Format::Id3 => write!(f, "id3"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(Format::from_path("a/b/Song.mp3").unwrap(), Format::Id3);
        assert_eq!(Format::from_path("a/b/SONG.MP3").unwrap(), Format::Id3);
        assert_eq!(Format::from_path("x.Mp3").unwrap().ext(), "mp3");
    }

    #[test]
    fn other_files_are_unsupported() {
        assert!(!Format::is_supported("cover.jpg"));
        assert!(!Format::is_supported("track.flac"));
        assert!(!Format::is_supported("mp3"));
        assert!(!Format::is_supported("notes.mp3.txt"));
    }
}
