extern crate id3;

use super::key::TagKey;
use core::convert::AsRef;
use eyre::{eyre, Result};
use id3::frame::{Comment, ExtendedText, Lyrics};
use id3::{Content, ErrorKind, Frame, TagLike, Version};
use log::debug;
use std::collections::HashMap;
use std::path::Path;

static SEPARATOR: &str = "\0";
static LANGUAGE: &str = "eng";

#[derive(Clone)]
pub struct Tag {
    tag: id3::Tag,
    separator: String,
}

impl Tag {
    fn split(&self, value: &str) -> Vec<String> {
        value.split(&self.separator).map(String::from).collect()
    }
}

impl crate::TagFrom for Tag {
    fn from_path<P>(path: P) -> Result<Box<dyn crate::Tag>>
    where
        P: AsRef<Path>,
    {
        let tag = match id3::Tag::read_from_path(path.as_ref()) {
            Ok(tag) => tag,
            Err(e) if matches!(e.kind, ErrorKind::NoTag) => {
                debug!("No ID3 tag in {:?}, starting from an empty one", path.as_ref());
                id3::Tag::new()
            }
            Err(e) => return Err(eyre!(e)),
        };
        Ok(Box::new(Tag {
            tag,
            separator: SEPARATOR.to_string(),
        }))
    }
}

impl crate::Tag for Tag {
    fn get_str(&self, key: &str) -> Option<Vec<String>> {
        let values: Vec<String> = match key {
            "COMM" => self.tag.comments().map(|c| c.text.clone()).collect(),
            "USLT" => self.tag.lyrics().map(|l| l.text.clone()).collect(),
            _ if key.len() != 4 => self
                .tag
                .extended_texts()
                .filter(|t| t.description == key)
                .flat_map(|t| self.split(&t.value))
                .collect(),
            _ => self
                .tag
                .get(key)
                .and_then(|f| f.content().text())
                .map(|t| self.split(t))
                .unwrap_or_default(),
        };
        if values.is_empty() {
            None
        } else {
            Some(values)
        }
    }

    fn set_str(&mut self, key: &str, values: Vec<String>) -> Result<()> {
        let val = values.join(&self.separator);
        let frame = match key {
            "COMM" => Frame::with_content(
                key,
                Content::Comment(Comment {
                    lang: LANGUAGE.to_string(),
                    description: String::new(),
                    text: val,
                }),
            ),
            "USLT" => Frame::with_content(
                key,
                Content::Lyrics(Lyrics {
                    lang: LANGUAGE.to_string(),
                    description: String::new(),
                    text: val,
                }),
            ),
            _ if key.len() != 4 => ExtendedText {
                description: key.to_string(),
                value: val,
            }
            .into(),
            _ => Frame::text(key, val),
        };
        self.tag.add_frame(frame);
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        if key.len() != 4 {
            self.tag.remove_extended_text(Some(key), None);
        } else {
            self.tag.remove(key);
        }
    }

    fn get_all(&self) -> HashMap<String, Vec<String>> {
        let mut tags = HashMap::new();
        for frame in self.tag.frames() {
            if let Content::Text(v) = frame.content() {
                tags.insert(frame.id().to_owned(), self.split(v));
            }
        }
        // Add TXXX
        for extended in self.tag.extended_texts() {
            tags.insert(extended.description.to_string(), self.split(&extended.value));
        }
        for (id, text) in self
            .tag
            .comments()
            .map(|c| ("COMM", c.text.clone()))
            .chain(self.tag.lyrics().map(|l| ("USLT", l.text.clone())))
        {
            tags.entry(id.to_string())
                .or_insert_with(Vec::new)
                .push(text);
        }
        tags
    }

    fn str_to_key(&self, str: &str) -> Option<TagKey> {
        match str {
            "TIT2" => Some(TagKey::TrackTitle),
            "TPE1" => Some(TagKey::Artist),
            "TALB" => Some(TagKey::Album),
            "TDRC" => Some(TagKey::ReleaseDate),
            "TCOM" => Some(TagKey::Composer),
            "TCON" => Some(TagKey::Genre),
            "COMM" => Some(TagKey::Comment),
            "USLT" => Some(TagKey::UnsyncedLyrics),
            "LYRICS" => Some(TagKey::Lyrics),
            _ => None,
        }
    }

    fn key_to_str(&self, key: TagKey) -> Vec<&'static str> {
        match key {
            TagKey::TrackTitle => vec!["TIT2"],
            TagKey::Artist => vec!["TPE1"],
            TagKey::Album => vec!["TALB"],
            TagKey::ReleaseDate => vec!["TDRC"],
            TagKey::Composer => vec!["TCOM"],
            TagKey::Genre => vec!["TCON"],
            TagKey::Comment => vec!["COMM"],
            TagKey::UnsyncedLyrics => vec!["USLT"],
            TagKey::Lyrics => vec!["LYRICS"],
        }
    }

    fn write_to_path(&mut self, path: &Path) -> Result<()> {
        self.tag
            .write_to_path(path, Version::Id3v24)
            .map_err(|e| eyre!(e))
    }
}
