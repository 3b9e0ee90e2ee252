#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagKey {
    TrackTitle,
    Artist,
    Album,
    ReleaseDate,
    Composer,
    Genre,
    Comment,
    UnsyncedLyrics,
    Lyrics,
}

impl TagKey {
    /// Keys a tagging pass fills in with a value or a placeholder.
    pub const DESCRIPTIVE: [TagKey; 6] = [
        TagKey::TrackTitle,
        TagKey::Artist,
        TagKey::Album,
        TagKey::ReleaseDate,
        TagKey::Composer,
        TagKey::Genre,
    ];

    /// Freeform keys removed on every tagging pass.
    pub const FREEFORM: [TagKey; 3] = [TagKey::Comment, TagKey::UnsyncedLyrics, TagKey::Lyrics];
}
