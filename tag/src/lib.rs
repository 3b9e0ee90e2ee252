pub mod file;
pub mod format;
pub mod id3;
pub mod key;

use core::convert::AsRef;
use eyre::{Report, Result};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FormatResult};
use std::path::Path;

pub use file::TrackFile;
pub use format::Format;
pub use key::TagKey;

pub type TagMap = HashMap<TagKey, Vec<String>>;

#[derive(Debug)]
pub enum TagError {
    NotSupported,
    Other(Report),
}

pub trait TagFrom {
    fn from_path<P>(path: P) -> Result<Box<dyn Tag>>
    where
        P: AsRef<Path>;
}

pub trait TagClone: Send + Sync {
    fn clone_box(&self) -> Box<dyn Tag>;
}

impl<T> TagClone for T
where
    T: 'static + Tag + Clone,
{
    fn clone_box(&self) -> Box<dyn Tag> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Tag> {
    fn clone(&self) -> Box<dyn Tag> {
        self.clone_box()
    }
}

impl Debug for Box<dyn Tag> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        let mut str = f.debug_struct("Tag");
        for (k, v) in self.get_all() {
            str.field(&k, &v);
        }
        str.finish()
    }
}

/// A raw tag container, addressed by the container's own frame names.
pub trait Tag: TagClone {
    fn get_str(&self, key: &str) -> Option<Vec<String>>;
    fn set_str(&mut self, key: &str, values: Vec<String>) -> Result<()>;
    fn remove(&mut self, key: &str);
    fn get_all(&self) -> HashMap<String, Vec<String>>;

    fn str_to_key(&self, str: &str) -> Option<TagKey>;
    fn key_to_str(&self, key: TagKey) -> Vec<&'static str>;

    fn write_to_path(&mut self, path: &Path) -> Result<()>;
}
