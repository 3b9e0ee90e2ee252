pub mod musicbrainz;
pub mod wikipedia;

use async_trait::async_trait;
use const_format::formatcp;
use eyre::{bail, eyre, Result, WrapErr};
use log::trace;
use reqwest::header::USER_AGENT;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Instant;

use crate::models::{MetadataRecord, TrackIdentity};
use crate::settings::Settings;

use self::musicbrainz::MusicBrainz;
use self::wikipedia::Wikipedia;

pub static RETAG_USER_AGENT: &str =
    formatcp!("{}/{} ({})", crate::CLI_NAME, crate::VERSION, crate::GITHUB);

/// A metadata provider. Implementations report transport and decoding
/// problems as errors; `Ok(None)` means the service had no match.
#[async_trait]
pub trait Fetch: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch(&self, identity: &TrackIdentity) -> Result<Option<MetadataRecord>>;
}

/// The providers queried for every track, highest priority first.
pub fn default_fetchers(settings: &Settings) -> Vec<Box<dyn Fetch>> {
    vec![
        Box::new(MusicBrainz::new(&settings.fetch.musicbrainz)),
        Box::new(Wikipedia::new(&settings.fetch.wikipedia)),
    ]
}

pub(crate) fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

pub(crate) async fn get_json<T, Q>(
    client: &reqwest::Client,
    url: &str,
    query: &Q,
    service: &str,
) -> Result<T>
where
    T: DeserializeOwned,
    Q: Serialize + ?Sized,
{
    let start = Instant::now();
    let res = client
        .get(url)
        .query(query)
        .header(USER_AGENT, RETAG_USER_AGENT)
        .send()
        .await?;
    let req_time = start.elapsed();
    trace!("{} HTTP request took {:?}", service, req_time);
    let status = res.status();
    if !status.is_success() {
        bail!(
            "{} request returned non-success error code: {} {}",
            service,
            status,
            res.text().await?
        );
    }
    let text = res
        .text()
        .await
        .wrap_err(eyre!("Could not read {} response as text", service))?;
    let json = serde_path_to_error::deserialize(&mut serde_json::Deserializer::from_str(
        text.as_str(),
    ))
    .map_err(|e| {
        eyre!(
            "Could not parse {} response: {} at path {}",
            service,
            e,
            e.path().to_string()
        )
    })?;
    trace!("{} JSON parse took {:?}", service, start.elapsed() - req_time);
    Ok(json)
}
