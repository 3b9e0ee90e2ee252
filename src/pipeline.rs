use eyre::Result;
use log::{debug, error, info, log_enabled, trace, warn, Level};
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::path::{Path, PathBuf};
use tag::TrackFile;

use crate::resolve::{Resolution, Resolver};
use crate::write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Tagged,
    NotFound,
    Insufficient,
    Failed,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub tagged: usize,
    pub not_found: usize,
    pub insufficient: usize,
    pub failed: usize,
}

impl Summary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Tagged => self.tagged += 1,
            Outcome::NotFound => self.not_found += 1,
            Outcome::Insufficient => self.insufficient += 1,
            Outcome::Failed => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.tagged + self.not_found + self.insufficient + self.failed
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(
            f,
            "{} files: {} tagged, {} without metadata, {} with too little to search, {} failed",
            self.total(),
            self.tagged,
            self.not_found,
            self.insufficient,
            self.failed
        )
    }
}

pub async fn process(path: &Path, resolver: &Resolver) -> Result<Outcome> {
    let mut file = TrackFile::open(path)?;
    if log_enabled!(Level::Debug) {
        debug!("Current tags for {:?}: {:?}", path, file.tags());
    }
    match resolver.resolve(&file).await? {
        Resolution::Insufficient => {
            warn!("Insufficient data to search for {:?}", path);
            Ok(Outcome::Insufficient)
        }
        Resolution::NotFound => {
            warn!("No metadata found for {:?}", path);
            Ok(Outcome::NotFound)
        }
        Resolution::Resolved(record) => {
            write::write(&mut file, &record)?;
            info!("Updated metadata for {:?}", path);
            Ok(Outcome::Tagged)
        }
    }
}

/// Processes every file in order. A file that fails is logged and counted,
/// the run always reaches the end of the list.
pub async fn run(files: &[PathBuf], resolver: &Resolver) -> Summary {
    let mut summary = Summary::default();
    for (i, path) in files.iter().enumerate() {
        trace!("Processing file {}/{}: {:?}", i + 1, files.len(), path);
        let outcome = match process(path, resolver).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Error processing {:?}: {:?}", path, e);
                Outcome::Failed
            }
        };
        summary.record(outcome);
    }
    summary
}
