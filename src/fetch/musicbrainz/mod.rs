mod structures;

use super::{endpoint, get_json, Fetch};
use crate::models::{MetadataRecord, TrackIdentity};
use async_trait::async_trait;
use eyre::Result;
use structures::RecordingSearch;

pub struct MusicBrainz {
    base: String,
    client: reqwest::Client,
}

impl MusicBrainz {
    pub fn new(base: &str) -> Self {
        MusicBrainz {
            base: base.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Lucene query for the recording search. The artist filter is left out
    /// when there is no artist to filter on.
    pub fn query(identity: &TrackIdentity) -> String {
        match (identity.title.is_empty(), identity.artist.is_empty()) {
            (false, false) => format!("{} AND artistname:{}", identity.title, identity.artist),
            (false, true) => identity.title.clone(),
            (true, _) => format!("artistname:{}", identity.artist),
        }
    }
}

#[async_trait]
impl Fetch for MusicBrainz {
    fn name(&self) -> &'static str {
        "MusicBrainz"
    }

    async fn fetch(&self, identity: &TrackIdentity) -> Result<Option<MetadataRecord>> {
        let query = Self::query(identity);
        let search: RecordingSearch = get_json(
            &self.client,
            endpoint(&self.base, "recording/").as_str(),
            &[("query", query.as_str()), ("fmt", "json")],
            self.name(),
        )
        .await?;
        Ok(search
            .recordings
            .into_iter()
            .next()
            .map(MetadataRecord::from))
    }
}
