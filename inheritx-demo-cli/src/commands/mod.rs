//! CLI command implementations

use std::path::Path;
use std::rc::Rc;

use inheritx_core::{FileStore, InheritxConfig};

pub mod admin;
pub mod plans;
pub mod wallet;

/// Configuration file read from the storage directory, if present.
pub const CONFIG_FILE: &str = "config.json";

/// Open the JSON store that stands in for `localStorage`.
pub fn open_store(storage_dir: &Path) -> Rc<FileStore> {
    Rc::new(FileStore::new(storage_dir))
}

/// Load `config.json` from the storage directory, or defaults.
pub fn load_config(storage_dir: &Path) -> anyhow::Result<InheritxConfig> {
    Ok(InheritxConfig::load(storage_dir.join(CONFIG_FILE))?)
}
