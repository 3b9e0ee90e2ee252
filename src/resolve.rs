use eyre::Result;
use futures::future::join_all;
use log::{debug, error, info};
use std::path::Path;
use tag::{TagKey, TrackFile};

use crate::fetch::Fetch;
use crate::infer;
use crate::models::{merge_all, MetadataRecord, TrackIdentity};
use crate::prompt::Prompt;

#[derive(Debug, PartialEq, Eq)]
pub enum Resolution {
    Resolved(MetadataRecord),
    /// Sources were asked but had nothing to say.
    NotFound,
    /// No title or artist to search with, sources were not asked.
    Insufficient,
}

pub struct Resolver {
    fetchers: Vec<Box<dyn Fetch>>,
    prompt: Box<dyn Prompt>,
}

impl Resolver {
    /// `fetchers` are given in priority order, highest first.
    pub fn new(fetchers: Vec<Box<dyn Fetch>>, prompt: Box<dyn Prompt>) -> Self {
        Resolver { fetchers, prompt }
    }

    /// Existing tags, then the filename, then whoever is at the terminal.
    pub fn identify(&self, file: &TrackFile) -> Result<TrackIdentity> {
        let tagged = TrackIdentity::new(
            file.first_tag(TagKey::TrackTitle).unwrap_or_default(),
            file.first_tag(TagKey::Artist).unwrap_or_default(),
        );
        if tagged.is_complete() {
            return Ok(tagged);
        }

        info!(
            "No sufficient metadata in file; trying to use filename for {:?}",
            file.path
        );
        let inferred = infer::from_path(&file.path);
        if inferred.is_complete() {
            return Ok(inferred);
        }
        self.prompt.ask(&file.path, &inferred)
    }

    /// Queries every source concurrently and merges what they found. A
    /// failing source counts as one that found nothing.
    pub async fn lookup(&self, path: &Path, identity: &TrackIdentity) -> MetadataRecord {
        let results = join_all(self.fetchers.iter().map(|f| f.fetch(identity))).await;
        let records = self
            .fetchers
            .iter()
            .zip(results)
            .filter_map(|(fetcher, res)| match res {
                Ok(Some(record)) => {
                    debug!("{} found {:?} for {:?}", fetcher.name(), record, path);
                    Some(record)
                }
                Ok(None) => {
                    debug!("{} has no match for {} ({:?})", fetcher.name(), identity, path);
                    None
                }
                Err(e) => {
                    error!(
                        "Error fetching metadata from {} for {:?}: {:?}",
                        fetcher.name(),
                        path,
                        e
                    );
                    None
                }
            });
        merge_all(records)
    }

    pub async fn resolve(&self, file: &TrackFile) -> Result<Resolution> {
        let identity = self.identify(file)?;
        if identity.is_empty() {
            return Ok(Resolution::Insufficient);
        }
        info!("Searching {} for {:?}", identity, file.path);
        let record = self.lookup(&file.path, &identity).await;
        if record.is_empty() {
            Ok(Resolution::NotFound)
        } else {
            Ok(Resolution::Resolved(record))
        }
    }
}
