use eyre::{Result, WrapErr};
use log::debug;
use std::path::{Path, PathBuf};

use super::format::Format;
use super::id3;
use super::key::TagKey;
use super::{Tag, TagError, TagFrom, TagMap};

#[derive(Clone, Debug)]
pub struct TrackFile {
    pub path: PathBuf,
    pub format: Format,
    tag: Box<dyn Tag>,
}

impl TrackFile {
    pub fn open<P>(path: P) -> Result<TrackFile>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let format = Format::from_path(path)
            .wrap_err(format!("Could not identify format for file: {:?}", path))?;
        let tag = match format {
            Format::Id3 => id3::Tag::from_path(path),
        }
        .wrap_err(format!("Could not read metadata from file: {:?}", path))?;
        Ok(TrackFile {
            path: path.to_path_buf(),
            format,
            tag,
        })
    }

    pub fn get_tag(&self, key: TagKey) -> Vec<String> {
        let keystrs = self.tag.key_to_str(key);
        if keystrs.is_empty() {
            debug!(
                "The {:?} key is not supported in the output format {:?}",
                key, self.format
            );
            return vec![];
        }
        keystrs
            .into_iter()
            .filter_map(|keystr| self.tag.get_str(keystr))
            .flatten()
            .collect()
    }

    /// The first non-blank value stored under `key`, trimmed.
    pub fn first_tag(&self, key: TagKey) -> Option<String> {
        self.get_tag(key)
            .into_iter()
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty())
    }

    /// Every value this file holds for a known key.
    pub fn tags(&self) -> TagMap {
        self.tag
            .get_all()
            .into_iter()
            .filter_map(|(k, v)| self.tag.str_to_key(&k).map(|key| (key, v)))
            .collect()
    }

    pub fn set_tag(&mut self, key: TagKey, values: Vec<String>) -> Result<(), TagError> {
        let keystrs = self.tag.key_to_str(key);
        if keystrs.is_empty() {
            return Err(TagError::NotSupported);
        }
        keystrs.into_iter().try_for_each(|keystr| {
            self.tag
                .set_str(keystr, values.clone())
                .map_err(TagError::Other)
        })
    }

    pub fn remove_tag(&mut self, key: TagKey) -> Result<(), TagError> {
        let keystrs = self.tag.key_to_str(key);
        if keystrs.is_empty() {
            return Err(TagError::NotSupported);
        }
        for keystr in keystrs {
            self.tag.remove(keystr);
        }
        Ok(())
    }

    fn ignore_unsupported(r: Result<(), TagError>) -> Result<()> {
        match r {
            Err(TagError::NotSupported) => Ok(()),
            Err(TagError::Other(v)) => Err(v),
            Ok(v) => Ok(v),
        }
    }

    pub fn apply(&mut self, tags: TagMap) -> Result<()> {
        for (k, v) in tags.into_iter() {
            Self::ignore_unsupported(self.set_tag(k, v))?;
        }
        Ok(())
    }

    pub fn clear(&mut self, keys: &[TagKey]) -> Result<()> {
        for k in keys {
            Self::ignore_unsupported(self.remove_tag(*k))?;
        }
        Ok(())
    }

    pub fn write(&mut self) -> Result<()> {
        self.tag
            .write_to_path(&self.path)
            .wrap_err(format!("Could not write tags to file: {:?}", self.path))
    }
}
