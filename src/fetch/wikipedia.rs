use async_trait::async_trait;
use eyre::Result;
use log::debug;
use serde_derive::Deserialize;
use std::collections::HashMap;

use super::{endpoint, get_json, Fetch};
use crate::models::{MetadataRecord, TrackIdentity, UNKNOWN};

pub static COMPOSER_PLACEHOLDER: &str = "Some Composer";

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Default, Deserialize)]
struct ExtractResponse {
    #[serde(default)]
    query: Option<ExtractQuery>,
}

#[derive(Debug, Default, Deserialize)]
struct ExtractQuery {
    #[serde(default)]
    pages: HashMap<String, Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    extract: Option<String>,
}

impl SearchResponse {
    fn first_title(self) -> Option<String> {
        self.query
            .and_then(|q| q.search.into_iter().next())
            .map(|hit| hit.title)
    }
}

impl ExtractResponse {
    fn extract(self) -> String {
        self.query
            .and_then(|q| q.pages.into_values().next())
            .and_then(|p| p.extract)
            .unwrap_or_default()
    }
}

/// Single keyword guess, "rock" is checked before "pop".
pub fn genre_from_text(text: &str) -> &'static str {
    let text = text.to_lowercase();
    if text.contains("rock") {
        "Rock"
    } else if text.contains("pop") {
        "Pop"
    } else {
        UNKNOWN
    }
}

pub fn composer_from_text(text: &str) -> &'static str {
    if text.to_lowercase().contains("composer") {
        COMPOSER_PLACEHOLDER
    } else {
        UNKNOWN
    }
}

pub struct Wikipedia {
    base: String,
    client: reqwest::Client,
}

impl Wikipedia {
    pub fn new(base: &str) -> Self {
        Wikipedia {
            base: base.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn page_url(&self, title: &str) -> String {
        endpoint(&self.base, &format!("wiki/{}", title.replace(' ', "_")))
    }

    fn record(&self, title: &str, extract: &str) -> MetadataRecord {
        MetadataRecord {
            genre: Some(genre_from_text(extract).to_string()),
            composer: Some(composer_from_text(extract).to_string()),
            source_url: Some(self.page_url(title)),
            ..Default::default()
        }
    }
}

#[async_trait]
impl Fetch for Wikipedia {
    fn name(&self) -> &'static str {
        "Wikipedia"
    }

    async fn fetch(&self, identity: &TrackIdentity) -> Result<Option<MetadataRecord>> {
        let api = endpoint(&self.base, "w/api.php");
        let terms = format!("{} {}", identity.title, identity.artist);
        let search: SearchResponse = get_json(
            &self.client,
            api.as_str(),
            &[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", terms.trim()),
                ("format", "json"),
            ],
            self.name(),
        )
        .await?;
        let title = match search.first_title() {
            Some(title) => title,
            None => return Ok(None),
        };
        debug!("Wikipedia page for {}: {:?}", identity, title);

        let extract: ExtractResponse = get_json(
            &self.client,
            api.as_str(),
            &[
                ("action", "query"),
                ("prop", "extracts"),
                ("exintro", ""),
                ("explaintext", ""),
                ("titles", title.as_str()),
                ("format", "json"),
            ],
            self.name(),
        )
        .await?;
        Ok(Some(self.record(&title, &extract.extract())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::tests::serve;

    static HIT: &str = r#"{"query": {"search": [{"ns": 0, "title": "Bohemian Rhapsody"}]}}"#;

    #[test]
    fn genre_is_a_keyword_match() {
        assert_eq!(genre_from_text("A British ROCK band"), "Rock");
        assert_eq!(genre_from_text("a synth-pop single"), "Pop");
        assert_eq!(genre_from_text("pop rock"), "Rock");
        assert_eq!(genre_from_text("a jazz standard"), UNKNOWN);
        assert_eq!(genre_from_text(""), UNKNOWN);
    }

    #[test]
    fn composer_is_a_placeholder() {
        assert_eq!(
            composer_from_text("written by the Composer himself"),
            COMPOSER_PLACEHOLDER
        );
        assert_eq!(composer_from_text("a song by Queen"), UNKNOWN);
    }

    #[test]
    fn search_takes_the_first_hit() {
        let res: SearchResponse = serde_json::from_str(
            r#"{"batchcomplete": "", "query": {"searchinfo": {"totalhits": 2}, "search": [
                {"ns": 0, "title": "Bohemian Rhapsody", "pageid": 1},
                {"ns": 0, "title": "Queen (band)", "pageid": 2}
            ]}}"#,
        )
        .unwrap();
        assert_eq!(res.first_title().as_deref(), Some("Bohemian Rhapsody"));

        let empty: SearchResponse =
            serde_json::from_str(r#"{"query": {"search": []}}"#).unwrap();
        assert_eq!(empty.first_title(), None);
        let bare: SearchResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(bare.first_title(), None);
    }

    #[test]
    fn extract_reads_the_first_page() {
        let res: ExtractResponse = serde_json::from_str(
            r#"{"query": {"pages": {"9931": {"pageid": 9931, "title": "Bohemian Rhapsody",
                "extract": "\"Bohemian Rhapsody\" is a song by the British rock band Queen."}}}}"#,
        )
        .unwrap();
        assert!(res.extract().contains("rock band"));

        let missing: ExtractResponse =
            serde_json::from_str(r#"{"query": {"pages": {"-1": {"missing": ""}}}}"#).unwrap();
        assert_eq!(missing.extract(), "");
    }

    #[test]
    fn record_only_carries_genre_composer_and_source() {
        let wiki = Wikipedia::new("https://en.wikipedia.org/");
        let record = wiki.record(
            "Bohemian Rhapsody",
            "A song by the British rock band Queen, written by Freddie Mercury.",
        );
        assert_eq!(record.genre.as_deref(), Some("Rock"));
        assert_eq!(record.composer.as_deref(), Some(UNKNOWN));
        assert_eq!(
            record.source_url.as_deref(),
            Some("https://en.wikipedia.org/wiki/Bohemian_Rhapsody")
        );
        assert_eq!(record.title, None);
        assert_eq!(record.artist, None);
        assert_eq!(record.album, None);
        assert_eq!(record.year, None);
    }

    #[tokio::test]
    async fn fetch_searches_then_reads_the_intro() {
        let server = serve(vec![
            (200, HIT),
            (
                200,
                r#"{"query": {"pages": {"1": {"extract": "A pop song by a composer."}}}}"#,
            ),
        ])
        .await;
        let wiki = Wikipedia::new(&server.base);
        let record = wiki
            .fetch(&TrackIdentity::new("Bohemian Rhapsody", "Queen"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.genre.as_deref(), Some("Pop"));
        assert_eq!(record.composer.as_deref(), Some(COMPOSER_PLACEHOLDER));
        assert_eq!(
            record.source_url,
            Some(format!("{}wiki/Bohemian_Rhapsody", server.base))
        );

        assert_eq!(server.count(), 2);
        assert_eq!(
            server.target(0),
            "/w/api.php?action=query&list=search&srsearch=Bohemian+Rhapsody+Queen&format=json"
        );
        assert_eq!(
            server.target(1),
            "/w/api.php?action=query&prop=extracts&exintro=&explaintext=&titles=Bohemian+Rhapsody&format=json"
        );
    }

    #[tokio::test]
    async fn no_search_hit_skips_the_extract() {
        let server = serve(vec![(200, r#"{"query": {"search": []}}"#)]).await;
        let wiki = Wikipedia::new(&server.base);
        assert_eq!(
            wiki.fetch(&TrackIdentity::new("Yesterday", "")).await.unwrap(),
            None
        );
        assert_eq!(server.count(), 1);
        assert!(server.target(0).contains("&srsearch=Yesterday&"));
    }

    #[tokio::test]
    async fn failed_extract_is_an_error() {
        let server = serve(vec![(200, HIT), (503, "{}")]).await;
        let wiki = Wikipedia::new(&server.base);
        assert!(wiki
            .fetch(&TrackIdentity::new("Bohemian Rhapsody", "Queen"))
            .await
            .is_err());
        assert_eq!(server.count(), 2);
    }
}
