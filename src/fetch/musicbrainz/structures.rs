use itertools::Itertools;
use serde_derive::Deserialize;

use crate::models::{MetadataRecord, UNKNOWN};

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecordingSearch {
    #[serde(default)]
    pub recordings: Vec<Recording>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recording {
    pub title: Option<String>,
    #[serde(rename = "artist-credit")]
    #[serde(default)]
    pub artist_credit: Vec<ArtistCredit>,
    #[serde(rename = "first-release-date")]
    pub first_release_date: Option<String>,
    #[serde(default)]
    pub releases: Vec<Release>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtistCredit {
    pub name: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    pub title: Option<String>,
}

impl From<Recording> for MetadataRecord {
    fn from(recording: Recording) -> Self {
        let artist = Some(
            recording
                .artist_credit
                .iter()
                .map(|ac| ac.name.as_str())
                .join(", "),
        )
        .filter(|a| !a.is_empty());
        MetadataRecord {
            title: recording.title,
            artist,
            album: recording.releases.into_iter().next().and_then(|r| r.title),
            year: recording
                .first_release_date
                .filter(|d| !d.is_empty())
                .map(|d| d.chars().take(4).collect()),
            // not exposed by the recording search
            composer: Some(UNKNOWN.to_string()),
            genre: Some(UNKNOWN.to_string()),
            source_url: None,
        }
    }
}
