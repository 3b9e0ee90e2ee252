use eyre::{bail, eyre, Result, WrapErr};
use scan_dir::ScanDir;
use std::fs::canonicalize;
use std::path::{Path, PathBuf};
use tag::Format;

/// Recursively lists every supported audio file under `root`, in walk order.
pub fn all_files(root: &Path) -> Result<Vec<PathBuf>> {
    let root = canonicalize(root).wrap_err(format!("Could not open folder {:?}", root))?;
    if !root.is_dir() {
        bail!("Not a folder: {:?}", root);
    }
    ScanDir::files()
        .skip_hidden(false)
        .skip_backup(false)
        .walk(&root, |iter| {
            iter.map(|(entry, _)| entry.path())
                .filter(|path| Format::is_supported(path))
                .collect()
        })
        .map_err(|errs| eyre!("Could not scan {:?}: {:?}", root, errs))
}
