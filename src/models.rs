use std::fmt::{Display, Formatter, Result as FormatResult};

pub const UNKNOWN: &str = "Unknown";

/// The (title, artist) pair sources are searched with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackIdentity {
    pub title: String,
    pub artist: String,
}

impl TrackIdentity {
    pub fn new<T, A>(title: T, artist: A) -> Self
    where
        T: AsRef<str>,
        A: AsRef<str>,
    {
        TrackIdentity {
            title: title.as_ref().trim().to_string(),
            artist: artist.as_ref().trim().to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.artist.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.artist.is_empty()
    }
}

impl Display for TrackIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(f, "{:?} by {:?}", self.title, self.artist)
    }
}

/// A partial description of a track. `None` means the source said nothing
/// about the field, which is not the same as `Some(UNKNOWN)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<String>,
    pub composer: Option<String>,
    pub genre: Option<String>,
    pub source_url: Option<String>,
}

impl MetadataRecord {
    pub fn is_empty(&self) -> bool {
        *self == MetadataRecord::default()
    }

    /// Combines two records, keeping every field `self` provides and filling
    /// the gaps from `lower`.
    pub fn merge(self, lower: MetadataRecord) -> MetadataRecord {
        MetadataRecord {
            title: self.title.or(lower.title),
            artist: self.artist.or(lower.artist),
            album: self.album.or(lower.album),
            year: self.year.or(lower.year),
            composer: self.composer.or(lower.composer),
            genre: self.genre.or(lower.genre),
            source_url: self.source_url.or(lower.source_url),
        }
    }
}

/// Merges source results given in priority order, highest first.
pub fn merge_all<I>(records: I) -> MetadataRecord
where
    I: IntoIterator<Item = MetadataRecord>,
{
    records
        .into_iter()
        .fold(MetadataRecord::default(), MetadataRecord::merge)
}
