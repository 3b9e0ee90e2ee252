use eyre::{Result, WrapErr};
use log::debug;
use std::collections::HashMap;
use tag::{TagKey, TagMap, TrackFile};

use crate::models::{MetadataRecord, UNKNOWN};

fn or_unknown(value: &Option<String>) -> Vec<String> {
    vec![value.clone().unwrap_or_else(|| UNKNOWN.to_string())]
}

/// Every descriptive key gets a value, absent fields become the placeholder.
pub fn tags_from_record(record: &MetadataRecord) -> TagMap {
    let mut map = HashMap::new();
    map.insert(TagKey::TrackTitle, or_unknown(&record.title));
    map.insert(TagKey::Artist, or_unknown(&record.artist));
    map.insert(TagKey::Album, or_unknown(&record.album));
    map.insert(TagKey::ReleaseDate, or_unknown(&record.year));
    map.insert(TagKey::Composer, or_unknown(&record.composer));
    map.insert(TagKey::Genre, or_unknown(&record.genre));
    map
}

pub fn write(file: &mut TrackFile, record: &MetadataRecord) -> Result<()> {
    if let Some(url) = &record.source_url {
        debug!("Writing {:?} with details from {}", file.path, url);
    }
    file.clear(&TagKey::FREEFORM)
        .wrap_err(format!("Could not clear comments of {:?}", file.path))?;
    file.apply(tags_from_record(record))
        .wrap_err(format!("Could not set tags of {:?}", file.path))?;
    file.write()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn absent_fields_become_unknown() {
        let tags = tags_from_record(&MetadataRecord {
            title: Some("T".to_string()),
            genre: Some("Rock".to_string()),
            source_url: Some("https://example.org".to_string()),
            ..Default::default()
        });
        assert_eq!(tags.len(), TagKey::DESCRIPTIVE.len());
        assert_eq!(tags[&TagKey::TrackTitle], vec!["T"]);
        assert_eq!(tags[&TagKey::Genre], vec!["Rock"]);
        for key in [TagKey::Artist, TagKey::Album, TagKey::ReleaseDate, TagKey::Composer] {
            assert_eq!(tags[&key], vec![UNKNOWN], "{:?}", key);
        }
    }

    #[test]
    fn write_replaces_fields_and_drops_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Artist - Song.mp3");
        fs::write(&path, vec![0u8; 256]).unwrap();

        let mut file = TrackFile::open(&path).unwrap();
        file.set_tag(TagKey::Comment, vec!["visit my site".to_string()]).unwrap();
        file.set_tag(TagKey::UnsyncedLyrics, vec!["la la".to_string()]).unwrap();
        file.set_tag(TagKey::Lyrics, vec!["la la".to_string()]).unwrap();
        file.set_tag(TagKey::Album, vec!["Old Album".to_string()]).unwrap();
        file.write().unwrap();

        let mut file = TrackFile::open(&path).unwrap();
        let record = MetadataRecord {
            title: Some("Song".to_string()),
            artist: Some("Artist".to_string()),
            year: Some("2004".to_string()),
            ..Default::default()
        };
        write(&mut file, &record).unwrap();

        let file = TrackFile::open(&path).unwrap();
        for key in TagKey::FREEFORM {
            assert!(file.get_tag(key).is_empty(), "{:?} was kept", key);
        }
        assert_eq!(file.first_tag(TagKey::TrackTitle).as_deref(), Some("Song"));
        assert_eq!(file.first_tag(TagKey::Artist).as_deref(), Some("Artist"));
        assert_eq!(file.first_tag(TagKey::ReleaseDate).as_deref(), Some("2004"));
        assert_eq!(file.first_tag(TagKey::Album).as_deref(), Some(UNKNOWN));
        for key in TagKey::DESCRIPTIVE {
            assert!(file.first_tag(key).is_some(), "{:?} left unset", key);
        }
    }

    #[test]
    fn write_failure_names_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.mp3");
        fs::write(&path, vec![0u8; 256]).unwrap();
        let mut file = TrackFile::open(&path).unwrap();
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        let err = write(&mut file, &MetadataRecord::default()).unwrap_err();
        assert!(format!("{:?}", err).contains("gone.mp3"));
    }
}
