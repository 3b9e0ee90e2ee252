use std::path::Path;

use crate::models::TrackIdentity;

/// Tried in order, the first one found in the name wins.
pub static SEPARATORS: [&str; 6] = [" - ", "_", " by ", "-", "\u{2013}", "|"];

/// Guesses `(artist, title)` from an extensionless file name. Names without
/// any known separator become the artist, with an empty title.
pub fn split_filename(name: &str) -> (String, String) {
    SEPARATORS
        .iter()
        .find_map(|sep| name.split_once(sep))
        .map(|(artist, title)| (artist.trim().to_string(), title.trim().to_string()))
        .unwrap_or_else(|| (name.trim().to_string(), String::new()))
}

pub fn from_path<P>(path: P) -> TrackIdentity
where
    P: AsRef<Path>,
{
    let stem = path
        .as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let (artist, title) = split_filename(&stem);
    TrackIdentity::new(title, artist)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, t: &str) -> (String, String) {
        (a.to_string(), t.to_string())
    }

    #[test]
    fn splits_on_each_separator() {
        assert_eq!(split_filename("Artist - Song"), pair("Artist", "Song"));
        assert_eq!(split_filename("Artist_Song"), pair("Artist", "Song"));
        assert_eq!(split_filename("Song by Artist"), pair("Song", "Artist"));
        assert_eq!(split_filename("Artist-Song"), pair("Artist", "Song"));
        assert_eq!(split_filename("Artist \u{2013} Song"), pair("Artist", "Song"));
        assert_eq!(split_filename("Artist | Song"), pair("Artist", "Song"));
    }

    #[test]
    fn earlier_separators_take_precedence() {
        // " - " before "_" and "-"
        assert_eq!(split_filename("A_B - C-D"), pair("A_B", "C-D"));
        // "_" before " by "
        assert_eq!(split_filename("Stand by Me_Ben E. King"), pair("Stand by Me", "Ben E. King"));
        // "-" before "|"
        assert_eq!(split_filename("a|b-c"), pair("a|b", "c"));
    }

    #[test]
    fn splits_only_on_first_occurrence() {
        assert_eq!(
            split_filename("Artist - Song - Live"),
            pair("Artist", "Song - Live")
        );
        assert_eq!(split_filename("a_b_c"), pair("a", "b_c"));
    }

    #[test]
    fn no_separator_yields_name_and_empty_title() {
        assert_eq!(split_filename("  Yesterday  "), pair("Yesterday", ""));
        assert_eq!(split_filename(""), pair("", ""));
    }

    #[test]
    fn parts_rejoin_into_the_name() {
        let names = [
            "Artist - Song",
            "foo_bar",
            "Song by Artist",
            "AC-DC",
            "x\u{2013}y",
            "left|right",
            "Artist - Song - Remix",
        ];
        for name in names {
            let sep = SEPARATORS.iter().find(|s| name.contains(*s)).unwrap();
            let (artist, title) = split_filename(name);
            assert_eq!(format!("{}{}{}", artist, sep, title), name.trim());
        }
    }

    #[test]
    fn identity_from_path() {
        let id = from_path("/music/Artist - Song.mp3");
        assert_eq!(id, TrackIdentity::new("Song", "Artist"));

        let id = from_path("/music/Yesterday.MP3");
        assert_eq!(id.artist, "Yesterday");
        assert_eq!(id.title, "");

        assert!(from_path("/music/   .mp3").is_empty());
    }
}
